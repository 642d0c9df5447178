//! Product orchestration: the only place that decides when inventory is fetched.

use tracing::{debug, instrument};

use catalog_core::{CatalogResult, ProductId};
use catalog_inventory::LocationService;
use catalog_products::{Product, ProductCreateRequest, ProductRepository};

/// Mediates between the product repository and the location service.
///
/// Holds nothing but its two collaborators, so one instance can serve any
/// number of concurrent requests. Collaborator errors are returned untouched.
#[derive(Debug, Clone)]
pub struct ProductService<R, L> {
    products: R,
    locations: L,
}

impl<R, L> ProductService<R, L>
where
    R: ProductRepository,
    L: LocationService,
{
    pub fn new(products: R, locations: L) -> Self {
        Self { products, locations }
    }

    /// Persist a new product. The request is forwarded as-is.
    #[instrument(skip(self, request), fields(name = %request.name), err)]
    pub async fn create(&self, request: ProductCreateRequest) -> CatalogResult<Product> {
        self.products.create(request).await
    }

    /// Every product, without inventory.
    ///
    /// Listing never consults the location service; that would cost one remote
    /// lookup per product.
    #[instrument(skip(self), err)]
    pub async fn get_all(&self) -> CatalogResult<Vec<Product>> {
        self.products.get_all().await
    }

    /// One product with its stock at every location, or `None` when it does not exist.
    ///
    /// The location service is called only after the repository reports a hit,
    /// and a failure there fails the whole lookup.
    #[instrument(skip(self), fields(product_id = %id), err)]
    pub async fn get_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let Some(product) = self.products.get_by_id(id).await? else {
            debug!("product not found; inventory lookup skipped");
            return Ok(None);
        };

        let inventory = self.locations.inventory_of_product_at_all_locations(id).await?;
        debug!(locations = inventory.len(), "inventory attached");
        Ok(Some(product.with_inventory(inventory)))
    }
}
