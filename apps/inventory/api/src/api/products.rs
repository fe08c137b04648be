//! Products API routes

use axum::Router;
use domain_products::{InMemoryProductRepository, ProductService, handlers};
use tracing::info;

use crate::config::Config;

/// Create products router backed by a fresh in-memory store
pub fn router(config: &Config) -> Router {
    let repository = if config.seed_sample_products {
        info!("Starting with the sample products");
        InMemoryProductRepository::seeded()
    } else {
        info!("Starting with an empty product store");
        InMemoryProductRepository::new()
    };

    let service = ProductService::new(repository);
    handlers::router(service)
}
