use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{Entity, ProductId};
use catalog_inventory::InventoryEntry;

use crate::price::Price;

/// Request to create a product. Carries no identity; the repository assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Option<String>,
}

impl ProductCreateRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category,
        }
    }
}

/// Read-facing product snapshot.
///
/// Snapshots returned by a repository never carry inventory; `inventory` is only
/// populated by [`Product::with_inventory`] on single-item lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Vec<InventoryEntry>>,
}

impl Product {
    /// Decorate this snapshot with per-location stock.
    pub fn with_inventory(self, inventory: Vec<InventoryEntry>) -> Self {
        Self {
            inventory: Some(inventory),
            ..self
        }
    }

    /// Total units across every attached inventory entry (zero when none are attached).
    pub fn total_quantity(&self) -> i64 {
        self.inventory
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|e| e.quantity)
            .sum()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
