use serde::{Deserialize, Serialize};

use catalog_core::{LocationId, ValueObject};

/// Stock of one product at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub location_id: LocationId,
    pub location_name: String,
    pub quantity: i64,
}

impl InventoryEntry {
    pub fn new(location_id: LocationId, location_name: impl Into<String>, quantity: i64) -> Self {
        Self {
            location_id,
            location_name: location_name.into(),
            quantity,
        }
    }
}

impl ValueObject for InventoryEntry {}
