//! Location lookup port.

use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::{CatalogResult, ProductId};

use crate::entry::InventoryEntry;

/// Inventory lookup across every known location.
///
/// In real deployments this is a remote call. Timeouts and cancellation are the
/// implementation's business; callers surface whatever outcome it yields.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Stock of `product_id` at each location that holds it.
    ///
    /// An empty vector means no location stocks the product; that is not an error.
    async fn inventory_of_product_at_all_locations(
        &self,
        product_id: ProductId,
    ) -> CatalogResult<Vec<InventoryEntry>>;
}

#[async_trait]
impl<S> LocationService for Arc<S>
where
    S: LocationService + ?Sized,
{
    async fn inventory_of_product_at_all_locations(
        &self,
        product_id: ProductId,
    ) -> CatalogResult<Vec<InventoryEntry>> {
        (**self).inventory_of_product_at_all_locations(product_id).await
    }
}
