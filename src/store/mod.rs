// src/store/mod.rs

//! The persistence seam: a narrow repository trait over Product rows that any
//! SQL-capable backend can satisfy, plus the two shipped implementations
//! (Postgres for the server, in-memory for tests and demos).

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{Product, ProductInput};

pub mod memory;
pub mod pg;

pub use memory::MemoryProductStore;
pub use pg::PgProductStore;

/// Row-level operations over the `products` table.
///
/// `get` and `update` report an unknown id as `Ok(None)`, `delete` as
/// `Ok(false)`; `Err` is reserved for storage failures. Inputs are assumed to
/// be validated already, the store does not re-run the rule set.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// All rows in store-defined order (ascending id).
  async fn list(&self) -> Result<Vec<Product>>;

  /// The row with the given id, if any.
  async fn get(&self, id: i32) -> Result<Option<Product>>;

  /// Inserts a new row, assigning the next id, and returns it.
  async fn insert(&self, input: &ProductInput) -> Result<Product>;

  /// Replaces the business fields of the row with the given id in place.
  async fn update(&self, id: i32, input: &ProductInput) -> Result<Option<Product>>;

  /// Hard-deletes the row with the given id. Returns whether a row existed.
  async fn delete(&self, id: i32) -> Result<bool>;
}
