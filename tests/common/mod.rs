// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use product_catalog::models::ProductInput;
use product_catalog::state::AppState;
use product_catalog::store::MemoryProductStore;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Fresh application state over an empty in-memory store.
pub fn memory_state() -> AppState {
  AppState::new(Arc::new(MemoryProductStore::new()))
}

pub fn product_input(name: &str, description: &str, price: f64) -> ProductInput {
  ProductInput {
    name: name.to_string(),
    description: description.to_string(),
    price,
  }
}

/// The canonical valid payload used across the scenarios.
pub fn widget_input() -> ProductInput {
  product_input("Widget", "A small widget", 9.99)
}
