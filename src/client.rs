// src/client.rs

//! The client data service: a thin typed wrapper issuing the five API calls.
//! Each operation is a direct pass-through returning the decoded response
//! body, or a [`ClientError`] for non-2xx responses. No caching, no retry;
//! callers own failure presentation.

use reqwest::{Response, StatusCode};
use thiserror::Error;

use crate::models::{Product, ProductInput};
use crate::validation::FieldError;

#[derive(Debug, Error)]
pub enum ClientError {
  /// The server rejected the payload; carries the decoded field errors.
  #[error("Validation failed with {} field error(s)", .0.len())]
  Validation(Vec<FieldError>),

  /// No row with the requested id.
  #[error("Resource not found")]
  NotFound,

  /// Network or decoding failure reaching the API.
  #[error("Transport failure: {0}")]
  Transport(#[from] reqwest::Error),

  /// Any other non-success status, e.g. a 500 from a store failure.
  #[error("Unexpected status: {0}")]
  UnexpectedStatus(StatusCode),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

pub struct ApiClient {
  http: reqwest::Client,
  base_url: String,
}

impl ApiClient {
  /// `base_url` is the API prefix, e.g. `http://127.0.0.1:8080/api`.
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self {
      http: reqwest::Client::new(),
      base_url,
    }
  }

  /// Reads the base URL from `API_BASE_URL`, defaulting to the local server.
  pub fn from_env() -> Self {
    let base_url =
      std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080/api".to_string());
    Self::new(base_url)
  }

  fn url(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path)
  }

  pub async fn list_products(&self) -> Result<Vec<Product>> {
    let resp = self.http.get(self.url("products")).send().await?;
    Ok(check(resp).await?.json().await?)
  }

  pub async fn get_product(&self, id: i32) -> Result<Product> {
    let resp = self.http.get(self.url(&format!("product/{}", id))).send().await?;
    Ok(check(resp).await?.json().await?)
  }

  pub async fn create_product(&self, input: &ProductInput) -> Result<Product> {
    let resp = self.http.post(self.url("add")).json(input).send().await?;
    Ok(check(resp).await?.json().await?)
  }

  pub async fn update_product(&self, id: i32, input: &ProductInput) -> Result<Product> {
    let resp = self
      .http
      .put(self.url(&format!("update/{}", id)))
      .json(input)
      .send()
      .await?;
    Ok(check(resp).await?.json().await?)
  }

  pub async fn delete_product(&self, id: i32) -> Result<()> {
    let resp = self.http.delete(self.url(&format!("delete/{}", id))).send().await?;
    check(resp).await?;
    Ok(())
  }
}

/// Maps non-success statuses onto the error taxonomy. 400 bodies are decoded
/// as the field-error array the API returns.
async fn check(resp: Response) -> Result<Response> {
  match resp.status() {
    status if status.is_success() => Ok(resp),
    StatusCode::NOT_FOUND => Err(ClientError::NotFound),
    StatusCode::BAD_REQUEST => {
      let errors = resp.json::<Vec<FieldError>>().await.unwrap_or_default();
      Err(ClientError::Validation(errors))
    }
    status => Err(ClientError::UnexpectedStatus(status)),
  }
}
