use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use catalog_core::{CatalogError, CatalogResult, LocationId, ProductId};
use catalog_inventory::{InventoryEntry, LocationService};

/// In-memory location registry and stock table.
///
/// Intended for tests/dev. Stock records are keyed by (location, product); a
/// product appears in a lookup once per location holding a record for it, even
/// when that record's quantity is zero.
#[derive(Debug, Default)]
pub struct InMemoryLocationStock {
    locations: RwLock<HashMap<LocationId, String>>,
    stock: RwLock<HashMap<(LocationId, ProductId), i64>>,
}

impl InMemoryLocationStock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location and return its new identifier.
    pub fn add_location(&self, name: impl Into<String>) -> CatalogResult<LocationId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::validation("location name cannot be empty"));
        }
        let id = LocationId::new();
        self.locations.write().map_err(poisoned)?.insert(id, name);
        Ok(id)
    }

    /// Every registered location as `(id, name)`, sorted by name.
    pub fn locations(&self) -> CatalogResult<Vec<(LocationId, String)>> {
        let locations = self.locations.read().map_err(poisoned)?;
        let mut all: Vec<_> = locations.iter().map(|(id, name)| (*id, name.clone())).collect();
        all.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        Ok(all)
    }

    /// Set the stock of `product_id` at `location_id`, replacing any previous quantity.
    pub fn set_quantity(
        &self,
        location_id: LocationId,
        product_id: ProductId,
        quantity: i64,
    ) -> CatalogResult<()> {
        if !self.locations.read().map_err(poisoned)?.contains_key(&location_id) {
            return Err(CatalogError::validation(format!("unknown location: {location_id}")));
        }
        self.stock
            .write()
            .map_err(poisoned)?
            .insert((location_id, product_id), quantity);
        Ok(())
    }
}

fn poisoned<T>(_: T) -> CatalogError {
    CatalogError::storage("location stock lock poisoned")
}

#[async_trait]
impl LocationService for InMemoryLocationStock {
    async fn inventory_of_product_at_all_locations(
        &self,
        product_id: ProductId,
    ) -> CatalogResult<Vec<InventoryEntry>> {
        let locations = self.locations.read().map_err(poisoned)?;
        let stock = self.stock.read().map_err(poisoned)?;

        let mut entries: Vec<InventoryEntry> = stock
            .iter()
            .filter(|((_, p), _)| *p == product_id)
            .filter_map(|((location_id, _), quantity)| {
                locations
                    .get(location_id)
                    .map(|name| InventoryEntry::new(*location_id, name.clone(), *quantity))
            })
            .collect();
        entries.sort_by(|a, b| {
            a.location_name
                .cmp(&b.location_name)
                .then(a.location_id.cmp(&b.location_id))
        });

        debug!(product_id = %product_id, locations = entries.len(), "inventory gathered");
        Ok(entries)
    }
}
