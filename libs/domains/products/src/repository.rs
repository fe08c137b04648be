use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Product, ProductInput};

/// Repository trait for Product storage.
///
/// Inputs are validated by the caller, so none of these operations fail;
/// a missing id is reported as `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Assign the next id and append the product
    async fn insert(&self, input: ProductInput) -> Product;

    /// All products in insertion order
    async fn list(&self) -> Vec<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> Option<Product>;

    /// Overwrite name, quantity and price of an existing product
    async fn replace(&self, id: u64, input: ProductInput) -> Option<Product>;

    /// Detach a product, keeping the order of the rest
    async fn remove(&self, id: u64) -> Option<Product>;
}

/// The two records a fresh process starts with.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Produto Exemplo A".to_string(),
            quantity: 10.0,
            price: 19.99,
        },
        Product {
            id: 2,
            name: "Produto Exemplo B".to_string(),
            quantity: 5.0,
            price: 25.50,
        },
    ]
}

#[derive(Debug)]
struct Inventory {
    products: Vec<Product>,
    next_id: u64,
}

/// In-memory implementation of ProductRepository.
///
/// The product list and the id counter sit behind one lock, so allocating
/// an id and appending the record happen as a single step.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    inventory: Arc<RwLock<Inventory>>,
}

impl InMemoryProductRepository {
    /// Empty store; the first product gets id 1.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Store preloaded with `products`; ids continue after the largest one.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inventory: Arc::new(RwLock::new(Inventory { products, next_id })),
        }
    }

    /// Store holding [`sample_products`]; the next id is 3.
    pub fn seeded() -> Self {
        Self::with_products(sample_products())
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, input: ProductInput) -> Product {
        let mut inventory = self.inventory.write().await;

        let product = Product::new(inventory.next_id, input);
        inventory.next_id += 1;
        inventory.products.push(product.clone());

        tracing::info!(product_id = product.id, name = %product.name, "Created product");
        product
    }

    async fn list(&self) -> Vec<Product> {
        let inventory = self.inventory.read().await;
        tracing::debug!(count = inventory.products.len(), "Listing products");
        inventory.products.clone()
    }

    async fn get_by_id(&self, id: u64) -> Option<Product> {
        let inventory = self.inventory.read().await;
        inventory.products.iter().find(|p| p.id == id).cloned()
    }

    async fn replace(&self, id: u64, input: ProductInput) -> Option<Product> {
        let mut inventory = self.inventory.write().await;

        let product = inventory.products.iter_mut().find(|p| p.id == id)?;
        product.replace_with(input);

        tracing::info!(product_id = id, name = %product.name, "Updated product");
        Some(product.clone())
    }

    async fn remove(&self, id: u64) -> Option<Product> {
        let mut inventory = self.inventory.write().await;

        let index = inventory.products.iter().position(|p| p.id == id)?;
        let removed = inventory.products.remove(index);

        tracing::info!(product_id = id, name = %removed.name, "Deleted product");
        Some(removed)
    }
}
