// src/lib.rs

//! Minimal product-catalog CRUD system.
//!
//! The crate hosts three layers over one relational table:
//!  - the REST API (`web`, `store`, `validation`) served by the
//!    `product_catalog_server` binary;
//!  - the typed HTTP client (`client`) issuing the five calls;
//!  - framework-free view state (`ui`) for the list/create/edit screens.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod store;
pub mod ui;
pub mod validation;
pub mod web;

pub use crate::errors::AppError;
pub use crate::models::{Product, ProductInput};
pub use crate::validation::{validate, FieldError, Rule};
