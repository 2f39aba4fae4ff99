// src/store/memory.rs

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::errors::Result;
use crate::models::{Product, ProductInput};
use crate::store::ProductStore;

/// In-memory [`ProductStore`] used by tests and client demos.
///
/// Rows are kept in insertion order, which doubles as ascending-id order
/// since the id counter is monotonic. Ids are never reused after deletion,
/// matching the SERIAL behavior of the Postgres store.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
  inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
  rows: Vec<Product>,
  next_id: i32,
}

impl Default for Inner {
  fn default() -> Self {
    Self { rows: Vec::new(), next_id: 1 }
  }
}

impl MemoryProductStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
  async fn list(&self) -> Result<Vec<Product>> {
    Ok(self.inner.lock().rows.clone())
  }

  async fn get(&self, id: i32) -> Result<Option<Product>> {
    Ok(self.inner.lock().rows.iter().find(|p| p.id == id).cloned())
  }

  async fn insert(&self, input: &ProductInput) -> Result<Product> {
    let mut inner = self.inner.lock();
    let product = Product {
      id: inner.next_id,
      name: input.name.clone(),
      description: input.description.clone(),
      price: input.price,
    };
    inner.next_id += 1;
    inner.rows.push(product.clone());
    Ok(product)
  }

  async fn update(&self, id: i32, input: &ProductInput) -> Result<Option<Product>> {
    let mut inner = self.inner.lock();
    match inner.rows.iter_mut().find(|p| p.id == id) {
      Some(row) => {
        row.name = input.name.clone();
        row.description = input.description.clone();
        row.price = input.price;
        Ok(Some(row.clone()))
      }
      None => Ok(None),
    }
  }

  async fn delete(&self, id: i32) -> Result<bool> {
    let mut inner = self.inner.lock();
    let before = inner.rows.len();
    inner.rows.retain(|p| p.id != id);
    Ok(inner.rows.len() < before)
  }
}
