//! Products Domain
//!
//! Inventory products kept in memory and served over a small CRUD API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, status codes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Id parsing, validation order, not-found handling
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Ordered product list + id counter (trait + in-memory impl)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, ProductInput (parse-and-validate)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! // Store with the two sample products, next id 3
//! let repository = InMemoryProductRepository::seeded();
//! let service = ProductService::new(repository);
//!
//! // Create Axum router, mounted at `handlers::PRODUCTS_PATH`
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult, ValidationError};
pub use handlers::{ApiDoc, PRODUCTS_PATH};
pub use models::{DeletedProduct, Product, ProductInput, parse_product_id};
pub use repository::{InMemoryProductRepository, ProductRepository, sample_products};
pub use service::ProductService;
