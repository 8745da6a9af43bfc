//! Vitrine
//!
//! Vitrine is a client library for a remote storefront REST API: catalog lookup, locally persisted cart management and order submission.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod delivery;
pub mod orders;
pub mod store;
pub mod storefront;
