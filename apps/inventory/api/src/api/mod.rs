//! API routes module

pub mod products;

use axum::Router;
use domain_products::PRODUCTS_PATH;

use crate::config::Config;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(config: &Config) -> Router {
    Router::new().nest(PRODUCTS_PATH, products::router(config))
}
