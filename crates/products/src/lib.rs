//! Products side of the catalog.
//!
//! Product snapshots, the creation request, pricing, and the repository port
//! through which products are persisted and read back.

pub mod price;
pub mod product;
pub mod repository;

pub use price::Price;
pub use product::{Product, ProductCreateRequest};
pub use repository::ProductRepository;

#[cfg(feature = "testing")]
pub use repository::MockProductRepository;
