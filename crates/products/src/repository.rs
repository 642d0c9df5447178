//! Product persistence port.

use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::{CatalogResult, ProductId};

use crate::product::{Product, ProductCreateRequest};

/// Durable storage for products.
///
/// Validation of creation requests belongs to the implementation. Snapshots it
/// hands out never include inventory.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and return its snapshot (with a freshly assigned id).
    async fn create(&self, request: ProductCreateRequest) -> CatalogResult<Product>;

    /// Every stored product, in the store's own order.
    async fn get_all(&self) -> CatalogResult<Vec<Product>>;

    /// The product with `id`, or `None` when nothing matches.
    async fn get_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;
}

#[async_trait]
impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    async fn create(&self, request: ProductCreateRequest) -> CatalogResult<Product> {
        (**self).create(request).await
    }

    async fn get_all(&self) -> CatalogResult<Vec<Product>> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        (**self).get_by_id(id).await
    }
}
