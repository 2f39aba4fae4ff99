// src/ui/mod.rs

//! Framework-free client-side view state.
//!
//! The three screens (filterable list, create form, edit form) are modeled as
//! plain state machines over the [`ApiClient`](crate::client::ApiClient):
//! methods mutate state, perform the API call, and return notifications and
//! navigation effects for the hosting front end to interpret. No reactive
//! primitive is assumed.

pub mod form;
pub mod list_view;
pub mod notify;

pub use form::{LoadOutcome, ProductForm, SubmitOutcome};
pub use list_view::ProductListView;
pub use notify::{Notification, Severity};

/// The screens a front end navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
  ProductList,
  CreateProduct,
  EditProduct(i32),
}
