// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::models::ProductInput;
use crate::state::AppState;
use crate::validation::validate;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.store.list().await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.store.get(product_id).await? {
    Some(product) => {
      info!("Product {} fetched successfully.", product_id);
      Ok(HttpResponse::Ok().json(product))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductInput>,
) -> Result<HttpResponse, AppError> {
  let input = payload.into_inner();

  let errors = validate(&input);
  if !errors.is_empty() {
    warn!("Rejecting product creation with {} validation error(s).", errors.len());
    return Err(AppError::Validation(errors));
  }

  let product = app_state.store.insert(&input).await?;
  info!(product_id = product.id, "Product created.");

  Ok(
    HttpResponse::Created()
      .insert_header(("Location", format!("/api/product/{}", product.id)))
      .json(product),
  )
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  payload: web::Json<ProductInput>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let input = payload.into_inner();

  // Validation runs before the existence check, so an invalid payload for a
  // missing id still reports the field errors.
  let errors = validate(&input);
  if !errors.is_empty() {
    warn!("Rejecting product update with {} validation error(s).", errors.len());
    return Err(AppError::Validation(errors));
  }

  match app_state.store.update(product_id, &input).await? {
    Some(product) => {
      info!(product_id = product.id, "Product updated.");
      Ok(HttpResponse::Ok().json(product))
    }
    None => {
      warn!("Product with ID {} not found for update.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  if app_state.store.delete(product_id).await? {
    info!("Product {} deleted.", product_id);
    Ok(HttpResponse::NoContent().finish())
  } else {
    warn!("Product with ID {} not found for delete.", product_id);
    Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
  }
}
