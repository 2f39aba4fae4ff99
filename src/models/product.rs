// src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted catalog entry. `id` is assigned by the store on insert and
/// never changes or gets reused afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub description: String,
  pub price: f64,
}

/// The transient payload shape for create/update requests. Same business
/// fields as [`Product`], without the store-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
  pub name: String,
  pub description: String,
  pub price: f64,
}
