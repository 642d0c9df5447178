//! Product catalog application layer: orchestration service, configuration,
//! and in-memory wiring.

pub mod config;
pub mod services;

use std::sync::Arc;

use catalog_core::CatalogResult;
use catalog_infra::{InMemoryLocationStock, InMemoryProductRepository};

pub use config::{AppConfig, ConfigError};
pub use services::ProductService;

/// Product service over shared in-memory adapters.
pub type InMemoryProductService =
    ProductService<Arc<InMemoryProductRepository>, Arc<InMemoryLocationStock>>;

/// In-memory catalog (dev/test): the service plus handles to its adapters for seeding.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    pub service: InMemoryProductService,
    pub products: Arc<InMemoryProductRepository>,
    pub locations: Arc<InMemoryLocationStock>,
}

/// Wire in-memory adapters according to `config`.
pub fn build_in_memory_catalog(config: &AppConfig) -> CatalogResult<InMemoryCatalog> {
    let products = Arc::new(InMemoryProductRepository::new(config.default_currency.clone()));
    let locations = Arc::new(InMemoryLocationStock::new());
    for name in &config.locations {
        locations.add_location(name.clone())?;
    }

    tracing::info!(
        currency = %config.default_currency,
        locations = config.locations.len(),
        "in-memory catalog ready"
    );

    Ok(InMemoryCatalog {
        service: ProductService::new(products.clone(), locations.clone()),
        products,
        locations,
    })
}

/// Initialize logging and build the in-memory catalog.
pub fn init(config: &AppConfig) -> CatalogResult<InMemoryCatalog> {
    catalog_observability::init_with(config.log_format);
    if let Some(raw) = &config.unrecognized_log_format {
        tracing::warn!(value = %raw, "unknown CATALOG_LOG_FORMAT; falling back to json logs");
    }
    build_in_memory_catalog(config)
}
