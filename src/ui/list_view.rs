// src/ui/list_view.rs

use tracing::warn;

use crate::client::{ApiClient, Result};
use crate::models::Product;
use crate::ui::notify::Notification;

/// Upper bound of the price slider before any products have been loaded.
pub const DEFAULT_MAX_PRICE: f64 = 10_000.0;

/// Confirmation prompt shown before a staged deletion runs.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

/// State of the product list screen: the full list, the free-text search
/// string, the price range, and the derived filtered list.
#[derive(Debug)]
pub struct ProductListView {
  products: Vec<Product>,
  filtered: Vec<Product>,
  search_text: String,
  price_range: (f64, f64),
  max_price: f64,
  loading: bool,
  pending_delete: Option<i32>,
}

impl Default for ProductListView {
  fn default() -> Self {
    Self::new()
  }
}

impl ProductListView {
  pub fn new() -> Self {
    Self {
      products: Vec::new(),
      filtered: Vec::new(),
      search_text: String::new(),
      price_range: (0.0, DEFAULT_MAX_PRICE),
      max_price: DEFAULT_MAX_PRICE,
      loading: true,
      pending_delete: None,
    }
  }

  /// Fetches the full list and replaces the view state with it.
  pub async fn load(&mut self, api: &ApiClient) -> Result<()> {
    let products = api.list_products().await?;
    self.set_products(products);
    Ok(())
  }

  /// Replaces the source list, recomputes the slider bounds, and refilters.
  ///
  /// The maximum price is recomputed only here, at load time. A create or
  /// update performed elsewhere leaves the slider's upper bound stale until
  /// the next reload; that staleness is intentional.
  pub fn set_products(&mut self, products: Vec<Product>) {
    if !products.is_empty() {
      let max_price = products.iter().map(|p| p.price).fold(f64::MIN, f64::max);
      self.max_price = max_price;
      self.price_range = (0.0, max_price);
    }
    self.products = products;
    self.loading = false;
    self.refilter();
  }

  pub fn set_search_text(&mut self, text: &str) {
    self.search_text = text.to_string();
    self.refilter();
  }

  /// Clamps nothing: the caller owns slider semantics, the view just filters.
  pub fn set_price_range(&mut self, low: f64, high: f64) {
    self.price_range = (low, high);
    self.refilter();
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn filtered(&self) -> &[Product] {
    &self.filtered
  }

  pub fn search_text(&self) -> &str {
    &self.search_text
  }

  pub fn price_range(&self) -> (f64, f64) {
    self.price_range
  }

  pub fn max_price(&self) -> f64 {
    self.max_price
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  fn refilter(&mut self) {
    self.filtered = filter_products(&self.products, &self.search_text, self.price_range);
  }

  /// Stages a deletion and returns the confirmation prompt to display.
  /// Nothing is sent to the server until [`confirm_delete`] runs.
  ///
  /// [`confirm_delete`]: ProductListView::confirm_delete
  pub fn request_delete(&mut self, id: i32) -> &'static str {
    self.pending_delete = Some(id);
    DELETE_PROMPT
  }

  /// Drops the staged deletion without calling the server.
  pub fn cancel_delete(&mut self) {
    self.pending_delete = None;
  }

  pub fn pending_delete(&self) -> Option<i32> {
    self.pending_delete
  }

  /// Runs the staged deletion. On success the full list is reloaded and a
  /// success toast is returned; on failure an error toast. Returns `None`
  /// when no deletion was staged.
  pub async fn confirm_delete(&mut self, api: &ApiClient) -> Option<Notification> {
    let id = self.pending_delete.take()?;
    match api.delete_product(id).await {
      Ok(()) => {
        if let Err(e) = self.load(api).await {
          warn!(error = %e, "Reload after delete failed.");
        }
        Some(Notification::success("Product deleted successfully"))
      }
      Err(_) => Some(Notification::error("Failed to delete product")),
    }
  }
}

/// The filter predicate over the full source list: a product passes iff the
/// search text is empty or its name/description contains it
/// (case-insensitive), and its price lies within `[low, high]` inclusive.
/// The whole derived list is recomputed on every change.
pub fn filter_products(products: &[Product], search_text: &str, (low, high): (f64, f64)) -> Vec<Product> {
  let needle = search_text.to_lowercase();
  products
    .iter()
    .filter(|product| {
      let matches_search = needle.is_empty()
        || product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle);
      let matches_price = product.price >= low && product.price <= high;
      matches_search && matches_price
    })
    .cloned()
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn product(id: i32, name: &str, description: &str, price: f64) -> Product {
    Product {
      id,
      name: name.to_string(),
      description: description.to_string(),
      price,
    }
  }

  fn sample_list() -> Vec<Product> {
    vec![
      product(1, "Widget", "A small widget", 9.99),
      product(2, "Gadget", "A shiny GADGET", 25.00),
      product(3, "Doodad", "Contains widget parts", 100.00),
    ]
  }

  #[test]
  fn empty_search_and_open_range_returns_full_list() {
    let list = sample_list();
    let filtered = filter_products(&list, "", (0.0, f64::INFINITY));
    assert_eq!(filtered, list);
  }

  #[test]
  fn search_matches_name_or_description_case_insensitively() {
    let list = sample_list();

    let by_name = filter_products(&list, "gAdGeT", (0.0, f64::INFINITY));
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, 2);

    // "widget" appears in the name of #1 and the description of #3.
    let ids: Vec<i32> = filter_products(&list, "widget", (0.0, f64::INFINITY))
      .iter()
      .map(|p| p.id)
      .collect();
    assert_eq!(ids, vec![1, 3]);
  }

  #[test]
  fn price_bounds_are_inclusive() {
    let list = sample_list();
    let ids: Vec<i32> = filter_products(&list, "", (9.99, 25.00)).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
  }

  #[test]
  fn search_and_price_conditions_combine() {
    let list = sample_list();
    let filtered = filter_products(&list, "widget", (50.0, 200.0));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 3);
  }

  #[test]
  fn load_resets_range_to_observed_maximum() {
    let mut view = ProductListView::new();
    assert_eq!(view.max_price(), DEFAULT_MAX_PRICE);
    assert!(view.is_loading());

    view.set_products(sample_list());
    assert!(!view.is_loading());
    assert_eq!(view.max_price(), 100.00);
    assert_eq!(view.price_range(), (0.0, 100.00));
    assert_eq!(view.filtered().len(), 3);
  }

  #[test]
  fn empty_load_keeps_default_upper_bound() {
    let mut view = ProductListView::new();
    view.set_products(Vec::new());
    assert_eq!(view.max_price(), DEFAULT_MAX_PRICE);
    assert_eq!(view.price_range(), (0.0, DEFAULT_MAX_PRICE));
    assert!(view.filtered().is_empty());
  }

  #[test]
  fn changing_search_or_range_recomputes_derived_list() {
    let mut view = ProductListView::new();
    view.set_products(sample_list());

    view.set_search_text("gadget");
    assert_eq!(view.filtered().len(), 1);

    view.set_search_text("");
    view.set_price_range(0.0, 10.0);
    assert_eq!(view.filtered().len(), 1);
    assert_eq!(view.filtered()[0].id, 1);
  }

  #[test]
  fn delete_is_staged_until_confirmed_or_cancelled() {
    let mut view = ProductListView::new();
    view.set_products(sample_list());

    assert_eq!(view.request_delete(2), DELETE_PROMPT);
    assert_eq!(view.pending_delete(), Some(2));

    view.cancel_delete();
    assert_eq!(view.pending_delete(), None);
    // The list itself is untouched; nothing was sent to the server.
    assert_eq!(view.products().len(), 3);
  }
}
