//! Cart Log

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;

/// Persisted cart contents: one entry per unit added, in add order.
///
/// Duplicates are meaningful — a product's quantity is the number of times
/// its identifier occurs in the log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLog(Vec<ProductId>);

impl CartLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log from existing entries, preserving their order.
    #[must_use]
    pub fn from_entries(entries: impl Into<Vec<ProductId>>) -> Self {
        Self(entries.into())
    }

    /// Decode a log from its persisted JSON form.
    ///
    /// Anything that is not a JSON array of non-negative integers decodes as
    /// the empty log; a corrupt slot must never take the cart down.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Encode the log to its persisted JSON form.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_owned())
    }

    /// All entries in add order, duplicates included.
    pub fn entries(&self) -> &[ProductId] {
        &self.0
    }

    /// Number of units across all products.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cart holds no units at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append one unit of the given product. There is no quantity cap.
    pub fn add_unit(&mut self, id: ProductId) {
        self.0.push(id);
    }

    /// Remove every unit of the given product. A no-op when absent.
    pub fn remove_all_units(&mut self, id: ProductId) {
        self.0.retain(|entry| *entry != id);
    }

    /// Remove the most recently added unit of the given product, so repeated
    /// decrements take units back in reverse-add order. A no-op when absent.
    pub fn remove_one_unit(&mut self, id: ProductId) {
        if let Some(index) = self.0.iter().rposition(|entry| *entry == id) {
            self.0.remove(index);
        }
    }

    /// Distinct identifiers in first-occurrence order.
    pub fn distinct_ids(&self) -> Vec<ProductId> {
        let mut seen = FxHashSet::default();

        self.0
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Number of distinct products, as shown on the cart badge.
    pub fn distinct_count(&self) -> usize {
        self.0.iter().collect::<FxHashSet<_>>().len()
    }

    /// Number of units of the given product.
    pub fn quantity_of(&self, id: ProductId) -> u64 {
        self.0
            .iter()
            .fold(0, |count, entry| if *entry == id { count + 1 } else { count })
    }
}
