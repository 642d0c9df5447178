//! `catalog-core`: shared building blocks for the product catalog.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::{LocationId, ProductId};
pub use value_object::ValueObject;
