// src/ui/form.rs

use crate::client::ApiClient;
use crate::models::{Product, ProductInput};
use crate::ui::notify::Notification;
use crate::ui::Route;

/// Delay before navigating back to the list after a successful save, in
/// milliseconds.
pub const SAVE_REDIRECT_DELAY_MS: u64 = 1000;

/// A client-side validation message for one form field. Only reported for
/// touched fields, so errors render after the user has interacted with (or
/// tried to submit) the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormError {
  pub field: &'static str,
  pub message: &'static str,
}

/// Result of a submit attempt.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
  /// The form was invalid: no request was made and every invalid field was
  /// marked touched so its error renders.
  Blocked,
  /// Saved. Show the toast, then navigate to `redirect` after
  /// [`SAVE_REDIRECT_DELAY_MS`].
  Saved {
    notification: Notification,
    redirect: Route,
  },
  /// The request failed. Show the toast and stay on the form.
  Failed { notification: Notification },
}

/// Result of loading an existing product into the edit form.
#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
  /// The form was pre-populated with the product's fields.
  Loaded,
  /// The load failed: show the toast and navigate to `redirect` immediately.
  Redirect {
    notification: Notification,
    redirect: Route,
  },
}

/// State of the create/edit form: three field values plus per-field touched
/// flags. The client-side rules mirror the server's rule set, except that
/// price only has to be non-negative here; the strict greater-than-zero check
/// stays on the server.
#[derive(Debug, Default)]
pub struct ProductForm {
  name: String,
  description: String,
  price: Option<f64>,
  name_touched: bool,
  description_touched: bool,
  price_touched: bool,
}

impl ProductForm {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_name(&mut self, value: &str) {
    self.name = value.to_string();
    self.name_touched = true;
  }

  pub fn set_description(&mut self, value: &str) {
    self.description = value.to_string();
    self.description_touched = true;
  }

  pub fn set_price(&mut self, value: Option<f64>) {
    self.price = value;
    self.price_touched = true;
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub fn price(&self) -> Option<f64> {
    self.price
  }

  /// Pre-populates the fields without marking them touched, so a freshly
  /// loaded edit form shows no errors.
  pub fn prefill(&mut self, product: &Product) {
    self.name = product.name.clone();
    self.description = product.description.clone();
    self.price = Some(product.price);
    self.name_touched = false;
    self.description_touched = false;
    self.price_touched = false;
  }

  /// Every violated client-side rule, touched or not.
  pub fn errors(&self) -> Vec<FormError> {
    let mut errors = Vec::new();
    if self.name.trim().is_empty() {
      errors.push(FormError { field: "name", message: "Name is required." });
    } else if self.name.chars().count() > crate::validation::NAME_MAX_LEN {
      errors.push(FormError { field: "name", message: "Name is too long." });
    }
    if self.description.trim().is_empty() {
      errors.push(FormError {
        field: "description",
        message: "Description is required.",
      });
    } else if self.description.chars().count() > crate::validation::DESCRIPTION_MAX_LEN {
      errors.push(FormError {
        field: "description",
        message: "Description is too long.",
      });
    }
    match self.price {
      None => errors.push(FormError { field: "price", message: "Price is required." }),
      Some(p) if p < 0.0 => errors.push(FormError {
        field: "price",
        message: "Price must not be negative.",
      }),
      Some(_) => {}
    }
    errors
  }

  pub fn is_valid(&self) -> bool {
    self.errors().is_empty()
  }

  /// The errors that should currently render: only those on touched fields.
  pub fn visible_errors(&self) -> Vec<FormError> {
    self
      .errors()
      .into_iter()
      .filter(|e| match e.field {
        "name" => self.name_touched,
        "description" => self.description_touched,
        "price" => self.price_touched,
        _ => true,
      })
      .collect()
  }

  /// Marks every currently invalid field as touched, the way a rejected
  /// submit surfaces all remaining errors at once.
  pub fn touch_invalid_fields(&mut self) {
    for error in self.errors() {
      match error.field {
        "name" => self.name_touched = true,
        "description" => self.description_touched = true,
        "price" => self.price_touched = true,
        _ => {}
      }
    }
  }

  fn to_input(&self) -> ProductInput {
    ProductInput {
      name: self.name.clone(),
      description: self.description.clone(),
      price: self.price.unwrap_or_default(),
    }
  }

  /// Create-form submission: an invalid form blocks the network call.
  pub async fn submit_create(&mut self, api: &ApiClient) -> SubmitOutcome {
    if !self.is_valid() {
      self.touch_invalid_fields();
      return SubmitOutcome::Blocked;
    }
    match api.create_product(&self.to_input()).await {
      Ok(_) => SubmitOutcome::Saved {
        notification: Notification::success("Product created successfully"),
        redirect: Route::ProductList,
      },
      Err(_) => SubmitOutcome::Failed {
        notification: Notification::error("Failed to create product"),
      },
    }
  }

  /// Loads the product with the given id into the edit form. A load failure
  /// redirects to the list with an error toast.
  pub async fn load_product(&mut self, api: &ApiClient, id: i32) -> LoadOutcome {
    match api.get_product(id).await {
      Ok(product) => {
        self.prefill(&product);
        LoadOutcome::Loaded
      }
      Err(_) => LoadOutcome::Redirect {
        notification: Notification::error("Failed to load product"),
        redirect: Route::ProductList,
      },
    }
  }

  /// Edit-form submission. A failed update stays on the form.
  pub async fn submit_update(&mut self, api: &ApiClient, id: i32) -> SubmitOutcome {
    if !self.is_valid() {
      self.touch_invalid_fields();
      return SubmitOutcome::Blocked;
    }
    match api.update_product(id, &self.to_input()).await {
      Ok(_) => SubmitOutcome::Saved {
        notification: Notification::success("Product updated successfully"),
        redirect: Route::ProductList,
      },
      Err(_) => SubmitOutcome::Failed {
        notification: Notification::error("Failed to update product"),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ui::notify::Severity;

  fn product() -> Product {
    Product {
      id: 7,
      name: "Widget".to_string(),
      description: "A small widget".to_string(),
      price: 9.99,
    }
  }

  #[test]
  fn empty_form_is_invalid_but_shows_no_errors_until_touched() {
    let form = ProductForm::new();
    assert!(!form.is_valid());
    assert_eq!(form.errors().len(), 3);
    assert!(form.visible_errors().is_empty());
  }

  #[test]
  fn touch_invalid_fields_surfaces_all_errors() {
    let mut form = ProductForm::new();
    form.touch_invalid_fields();
    assert_eq!(form.visible_errors().len(), 3);
  }

  #[test]
  fn setters_mark_fields_touched() {
    let mut form = ProductForm::new();
    form.set_name("");
    let visible = form.visible_errors();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].field, "name");
  }

  #[test]
  fn negative_price_is_invalid_but_zero_passes_client_side() {
    let mut form = ProductForm::new();
    form.set_name("Widget");
    form.set_description("A small widget");

    form.set_price(Some(-1.0));
    assert!(!form.is_valid());

    // The client-side gate only requires a non-negative price; the server
    // still rejects zero with MustBePositive.
    form.set_price(Some(0.0));
    assert!(form.is_valid());
  }

  #[test]
  fn prefill_populates_fields_without_touching_them() {
    let mut form = ProductForm::new();
    form.prefill(&product());
    assert_eq!(form.name(), "Widget");
    assert_eq!(form.price(), Some(9.99));
    assert!(form.is_valid());
    assert!(form.visible_errors().is_empty());
  }

  #[tokio::test]
  async fn invalid_submit_blocks_without_a_network_call() {
    // The port is never dialed: an invalid form must short-circuit before
    // any request is issued.
    let api = ApiClient::new("http://127.0.0.1:9/api");
    let mut form = ProductForm::new();

    let outcome = form.submit_create(&api).await;
    assert_eq!(outcome, SubmitOutcome::Blocked);
    assert_eq!(form.visible_errors().len(), 3);
  }

  #[tokio::test]
  async fn failed_update_stays_on_form_with_error_toast() {
    // Unreachable server: the transport failure surfaces as Failed.
    let api = ApiClient::new("http://127.0.0.1:9/api");
    let mut form = ProductForm::new();
    form.prefill(&product());

    match form.submit_update(&api, 7).await {
      SubmitOutcome::Failed { notification } => {
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.detail, "Failed to update product");
      }
      other => panic!("expected Failed, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn edit_load_failure_redirects_to_list() {
    let api = ApiClient::new("http://127.0.0.1:9/api");
    let mut form = ProductForm::new();

    match form.load_product(&api, 7).await {
      LoadOutcome::Redirect { notification, redirect } => {
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(redirect, Route::ProductList);
      }
      LoadOutcome::Loaded => panic!("expected Redirect"),
    }
  }
}
