//! Catalog

pub mod errors;
pub mod filter;
pub mod models;
pub mod service;

pub use errors::CatalogError;
pub use models::{Product, ProductId, ProductQuery};
pub use service::*;
