// src/state.rs

use std::sync::Arc;

use crate::store::ProductStore;

/// Shared application state handed to every handler via `web::Data`.
///
/// The store sits behind a trait object so the HTTP layer is indifferent to
/// which backend (Postgres, in-memory) is plugged in.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }
}
