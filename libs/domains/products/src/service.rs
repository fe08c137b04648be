use serde_json::Value;
use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{DeletedProduct, Product, ProductInput, parse_product_id};
use crate::repository::ProductRepository;

pub const PRODUCT_REMOVED: &str = "product removed successfully";

/// Service layer for Product business logic.
///
/// Takes path ids and bodies exactly as they arrive so that parsing,
/// validation order and not-found handling all live here rather than in the
/// HTTP layer.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product. No existence check: ids are always fresh.
    pub async fn create_product(&self, body: &Value) -> ProductResult<Product> {
        let input = ProductInput::from_json(body)?;
        Ok(self.repository.insert(input).await)
    }

    /// List every product in insertion order
    pub async fn list_products(&self) -> Vec<Product> {
        self.repository.list().await
    }

    /// Get a product by its raw path id
    pub async fn get_product(&self, raw_id: &str) -> ProductResult<Product> {
        let id = resolve_id(raw_id)?;
        self.repository
            .get_by_id(id)
            .await
            .ok_or_else(|| ProductError::NotFound(raw_id.to_string()))
    }

    /// Replace a product wholesale.
    ///
    /// An unknown id is reported before the body is looked at.
    pub async fn update_product(&self, raw_id: &str, body: &Value) -> ProductResult<Product> {
        let id = resolve_id(raw_id)?;
        if self.repository.get_by_id(id).await.is_none() {
            return Err(ProductError::NotFound(raw_id.to_string()));
        }

        let input = ProductInput::from_json(body)?;

        // A delete may land between the lookup and the write
        self.repository
            .replace(id, input)
            .await
            .ok_or_else(|| ProductError::NotFound(raw_id.to_string()))
    }

    /// Delete a product and hand it back in a confirmation
    pub async fn delete_product(&self, raw_id: &str) -> ProductResult<DeletedProduct> {
        let id = resolve_id(raw_id)?;
        let product = self
            .repository
            .remove(id)
            .await
            .ok_or_else(|| ProductError::NotFound(raw_id.to_string()))?;

        Ok(DeletedProduct {
            message: PRODUCT_REMOVED.to_string(),
            product,
        })
    }
}

fn resolve_id(raw_id: &str) -> ProductResult<u64> {
    parse_product_id(raw_id).ok_or_else(|| ProductError::NotFound(raw_id.to_string()))
}
