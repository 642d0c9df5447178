//! Inventory side of the catalog.
//!
//! Holds the per-location stock value type and the port through which the
//! catalog asks "how much of this product is where". Implementations live in
//! `catalog-infra` (or in a remote service).

pub mod entry;
pub mod location_service;

pub use entry::InventoryEntry;
pub use location_service::LocationService;

#[cfg(feature = "testing")]
pub use location_service::MockLocationService;
