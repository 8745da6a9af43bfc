//! Cart reconciliation.
//!
//! Turns the raw [`CartLog`] into a deduplicated, quantity-aggregated,
//! priced view against the current state of the remote catalog.

use futures::future::join_all;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    cart::log::CartLog,
    catalog::{CatalogService, Product, ProductId},
};

/// One aggregated cart row: a resolved product and how many units of it the
/// log holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u64,
}

impl CartLine {
    /// The per-unit price: the discount price when present, the base price
    /// otherwise.
    pub fn unit_price(&self) -> u64 {
        self.product.effective_price()
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> u64 {
        self.unit_price() * self.quantity
    }
}

/// Result of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    /// Aggregated lines in first-occurrence order of the log.
    pub lines: Vec<CartLine>,
    /// Identifiers whose lookup failed or returned no record. They stay in
    /// the persisted log; a transient remote error must not delete a user's
    /// cart entry.
    pub unresolved: FxHashSet<ProductId>,
}

impl Reconciliation {
    /// Sum of all line totals.
    pub fn goods_subtotal(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

/// Resolve every distinct identifier in the log against the catalog and
/// aggregate the results.
///
/// Lookups for distinct identifiers run concurrently and are all allowed to
/// settle; a single failing lookup never aborts the others. Failed
/// identifiers land in [`Reconciliation::unresolved`], everything else
/// becomes a [`CartLine`] with quantity equal to its occurrence count.
/// The log itself is not mutated.
pub async fn reconcile(catalog: &dyn CatalogService, log: &CartLog) -> Reconciliation {
    let distinct = log.distinct_ids();

    let settled = join_all(distinct.iter().map(|id| catalog.get_product(*id))).await;

    let mut lines = Vec::with_capacity(distinct.len());
    let mut unresolved = FxHashSet::default();

    for (id, result) in distinct.into_iter().zip(settled) {
        match result {
            Ok(product) => lines.push(CartLine {
                quantity: log.quantity_of(id),
                product,
            }),
            Err(error) => {
                debug!(%id, %error, "product lookup failed during reconciliation");
                unresolved.insert(id);
            }
        }
    }

    Reconciliation { lines, unresolved }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{CatalogError, MockCatalogService};

    use super::*;

    fn product(id: u64, actual: u64, discount: Option<u64>) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            image_url: String::new(),
            rating: 4.0,
            actual_price: actual,
            discount_price: discount,
            main_category: None,
        }
    }

    fn catalog_with(products: Vec<Product>) -> MockCatalogService {
        let mut catalog = MockCatalogService::new();

        catalog.expect_get_product().returning(move |id| {
            products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(CatalogError::NotFound)
        });

        catalog
    }

    #[tokio::test]
    async fn aggregates_duplicates_into_quantities() {
        let catalog = catalog_with(vec![product(5, 100, None), product(3, 200, Some(150))]);
        let log = CartLog::from_entries([ProductId(5), ProductId(5), ProductId(3)]);

        let reconciliation = reconcile(&catalog, &log).await;

        assert_eq!(reconciliation.lines.len(), 2);

        let first = &reconciliation.lines[0];
        assert_eq!(first.product.id, ProductId(5));
        assert_eq!(first.quantity, 2);
        assert_eq!(first.line_total(), 200);

        let second = &reconciliation.lines[1];
        assert_eq!(second.product.id, ProductId(3));
        assert_eq!(second.quantity, 1);
        assert_eq!(second.line_total(), 150);

        assert_eq!(reconciliation.goods_subtotal(), 350);
        assert!(reconciliation.unresolved.is_empty());
    }

    #[tokio::test]
    async fn line_order_follows_first_occurrence() {
        let catalog = catalog_with(vec![
            product(9, 10, None),
            product(5, 10, None),
            product(3, 10, None),
        ]);
        let log = CartLog::from_entries([
            ProductId(9),
            ProductId(5),
            ProductId(9),
            ProductId(3),
            ProductId(5),
        ]);

        let reconciliation = reconcile(&catalog, &log).await;

        let ids: Vec<ProductId> = reconciliation.lines.iter().map(|l| l.product.id).collect();
        assert_eq!(ids, [ProductId(9), ProductId(5), ProductId(3)]);
    }

    #[tokio::test]
    async fn failed_lookup_is_isolated() {
        let catalog = catalog_with(vec![product(5, 100, None)]);
        let log = CartLog::from_entries([ProductId(5), ProductId(7), ProductId(5)]);

        let reconciliation = reconcile(&catalog, &log).await;

        assert_eq!(reconciliation.lines.len(), 1);
        assert_eq!(reconciliation.lines[0].product.id, ProductId(5));
        assert_eq!(reconciliation.lines[0].quantity, 2);
        assert!(
            reconciliation.unresolved.contains(&ProductId(7)),
            "expected 7 unresolved, got {:?}",
            reconciliation.unresolved
        );

        // The log is untouched; the caller decides what to do with stale entries.
        assert_eq!(log.entries(), [ProductId(5), ProductId(7), ProductId(5)]);
    }

    #[tokio::test]
    async fn empty_log_reconciles_to_nothing() {
        let mut catalog = MockCatalogService::new();
        catalog.expect_get_product().never();

        let reconciliation = reconcile(&catalog, &CartLog::new()).await;

        assert!(reconciliation.lines.is_empty());
        assert!(reconciliation.unresolved.is_empty());
        assert_eq!(reconciliation.goods_subtotal(), 0);
    }

    #[tokio::test]
    async fn every_unit_is_accounted_for() {
        let catalog = catalog_with(vec![product(5, 100, None), product(3, 50, None)]);
        let log = CartLog::from_entries([
            ProductId(5),
            ProductId(7),
            ProductId(3),
            ProductId(7),
            ProductId(5),
        ]);

        let reconciliation = reconcile(&catalog, &log).await;

        let resolved_units: u64 = reconciliation.lines.iter().map(|l| l.quantity).sum();
        let unresolved_units: u64 = reconciliation
            .unresolved
            .iter()
            .map(|id| log.quantity_of(*id))
            .sum();

        assert_eq!(resolved_units + unresolved_units, 5);
    }
}
