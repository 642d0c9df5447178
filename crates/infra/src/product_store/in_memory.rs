use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use catalog_core::{CatalogError, CatalogResult, ProductId};
use catalog_products::{Price, Product, ProductCreateRequest, ProductRepository};

/// In-memory product repository.
///
/// Intended for tests/dev. Keeps products in insertion order and stamps every
/// created product with a single configured currency designator.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    currency: String,
}

impl InMemoryProductRepository {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn len(&self) -> CatalogResult<usize> {
        Ok(self.products.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new("$")
    }
}

fn poisoned<T>(_: T) -> CatalogError {
    CatalogError::storage("product store lock poisoned")
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, request: ProductCreateRequest) -> CatalogResult<Product> {
        if request.name.trim().is_empty() {
            return Err(CatalogError::validation("name cannot be empty"));
        }
        let price = Price::new(request.price, self.currency.clone())?;

        let product = Product {
            id: ProductId::new(),
            name: request.name,
            description: request.description,
            price,
            category: request.category,
            inventory: None,
        };

        self.products.write().map_err(poisoned)?.push(product.clone());
        debug!(product_id = %product.id, "product stored");
        Ok(product)
    }

    async fn get_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.read().map_err(poisoned)?.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }
}
