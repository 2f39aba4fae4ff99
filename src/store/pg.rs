// src/store/pg.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::errors::Result;
use crate::models::{Product, ProductInput};
use crate::store::ProductStore;

/// Postgres-backed [`ProductStore`] over a shared connection pool.
#[derive(Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Creates the `products` table if it does not exist yet. Called once at
  /// startup; the column limits mirror the validation rule set.
  pub async fn ensure_schema(&self) -> Result<()> {
    sqlx::query(
      "CREATE TABLE IF NOT EXISTS products (\
         id SERIAL PRIMARY KEY, \
         name VARCHAR(100) NOT NULL, \
         description VARCHAR(500) NOT NULL, \
         price DOUBLE PRECISION NOT NULL\
       )",
    )
    .execute(&self.pool)
    .await?;
    info!("Ensured products table exists.");
    Ok(())
  }

  /// Inserts a handful of sample products when the table is empty. Gated by
  /// the `SEED_DB` config flag.
  pub async fn seed(&self) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
      .fetch_one(&self.pool)
      .await?;
    if existing > 0 {
      info!(rows = existing, "Skipping seed, products table is not empty.");
      return Ok(());
    }

    let samples = [
      ("Laptop", "A 14-inch developer laptop", 1299.00),
      ("Mouse", "Wireless ergonomic mouse", 49.90),
      ("Keyboard", "Tenkeyless mechanical keyboard", 89.00),
    ];
    for (name, description, price) in samples {
      sqlx::query("INSERT INTO products (name, description, price) VALUES ($1, $2, $3)")
        .bind(name)
        .bind(description)
        .bind(price)
        .execute(&self.pool)
        .await?;
    }
    info!(rows = samples.len(), "Seeded products table.");
    Ok(())
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  async fn list(&self) -> Result<Vec<Product>> {
    let products: Vec<Product> =
      sqlx::query_as("SELECT id, name, description, price FROM products ORDER BY id ASC")
        .fetch_all(&self.pool)
        .await?;
    Ok(products)
  }

  async fn get(&self, id: i32) -> Result<Option<Product>> {
    let product: Option<Product> =
      sqlx::query_as("SELECT id, name, description, price FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
    Ok(product)
  }

  async fn insert(&self, input: &ProductInput) -> Result<Product> {
    let product: Product = sqlx::query_as(
      "INSERT INTO products (name, description, price) VALUES ($1, $2, $3) \
       RETURNING id, name, description, price",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .fetch_one(&self.pool)
    .await?;
    Ok(product)
  }

  async fn update(&self, id: i32, input: &ProductInput) -> Result<Option<Product>> {
    let product: Option<Product> = sqlx::query_as(
      "UPDATE products SET name = $1, description = $2, price = $3 WHERE id = $4 \
       RETURNING id, name, description, price",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;
    Ok(product)
  }

  async fn delete(&self, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }
}
