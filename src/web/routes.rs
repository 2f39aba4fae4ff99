// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::product_handlers;

// Simple liveness probe. In a real deployment this might also check DB
// connectivity.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Registers the API routes on the Actix app. Called from `main.rs` (and the
/// integration tests) via `App::configure`.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .route("/products", web::get().to(product_handlers::list_products_handler))
      .route("/product/{id}", web::get().to(product_handlers::get_product_handler))
      .route("/add", web::post().to(product_handlers::create_product_handler))
      .route("/update/{id}", web::put().to(product_handlers::update_product_handler))
      .route("/delete/{id}", web::delete().to(product_handlers::delete_product_handler)),
  );
}
