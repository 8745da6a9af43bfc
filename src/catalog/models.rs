//! Catalog Models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identifier in the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Product Model
///
/// A remote catalog record. Prices are in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    /// Continuous rating on a 0–5 scale.
    pub rating: f64,
    /// Base price.
    pub actual_price: u64,
    /// Discounted price, when the product is on offer.
    #[serde(default)]
    pub discount_price: Option<u64>,
    #[serde(default)]
    pub main_category: Option<String>,
}

impl Product {
    /// The price a buyer actually pays: the discount price when present,
    /// the base price otherwise.
    pub fn effective_price(&self) -> u64 {
        self.discount_price.unwrap_or(self.actual_price)
    }

    /// The crossed-out price to show next to a discounted one.
    pub fn old_price(&self) -> Option<u64> {
        self.discount_price.map(|_| self.actual_price)
    }
}

/// Catalog page request.
///
/// The remote API returns only its first ten products when no pagination is
/// given, so the default asks for a large first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: u32,
    pub per_page: u32,
    /// Free-text search query.
    pub search: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 100,
            search: None,
        }
    }
}

impl ProductQuery {
    /// Page request for a free-text search.
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }
}
