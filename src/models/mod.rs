// src/models/mod.rs

//! Data structures representing the persisted entity and its request payload.

pub mod product;

pub use product::{Product, ProductInput};
