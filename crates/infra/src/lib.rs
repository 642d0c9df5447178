//! Infrastructure layer: adapters behind the catalog ports.
//!
//! Only in-memory adapters live here for now (dev/test wiring).

pub mod location_stock;
pub mod product_store;

pub use location_stock::InMemoryLocationStock;
pub use product_store::InMemoryProductRepository;
