//! Catalog refinement
//!
//! Client-side narrowing and ordering of a fetched product page.

use rustc_hash::FxHashSet;

use crate::catalog::models::Product;

/// Criteria a product must satisfy to stay in the refined list.
///
/// Price bounds apply to the effective price, so a discounted product is
/// judged by what the buyer would actually pay.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Keep only products in one of these categories; empty means all.
    pub categories: FxHashSet<String>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    /// Keep only products with a discount price.
    pub discounted_only: bool,
}

impl CatalogFilter {
    /// Whether the given product passes every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() {
            let in_category = product
                .main_category
                .as_ref()
                .is_some_and(|category| self.categories.contains(category));

            if !in_category {
                return false;
            }
        }

        let price = product.effective_price();

        if self.price_min.is_some_and(|min| price < min) {
            return false;
        }

        if self.price_max.is_some_and(|max| price > max) {
            return false;
        }

        if self.discounted_only && product.discount_price.is_none() {
            return false;
        }

        true
    }
}

/// Orderings offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
}

/// Filter and sort a product list.
///
/// Sorting is stable, so products that compare equal keep their catalog
/// order.
pub fn refine(
    products: &[Product],
    filter: &CatalogFilter,
    sort: Option<SortKey>,
) -> Vec<Product> {
    let mut refined: Vec<Product> = products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect();

    if let Some(key) = sort {
        match key {
            SortKey::PriceAsc => refined.sort_by_key(Product::effective_price),
            SortKey::PriceDesc => {
                refined.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
            }
            SortKey::RatingAsc => refined.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
            SortKey::RatingDesc => refined.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }

    refined
}

#[cfg(test)]
mod tests {
    use crate::catalog::models::ProductId;

    use super::*;

    fn product(id: u64, category: &str, actual: u64, discount: Option<u64>, rating: f64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            image_url: String::new(),
            rating,
            actual_price: actual,
            discount_price: discount,
            main_category: Some(category.to_owned()),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Kitchen", 300, None, 4.0),
            product(2, "Garden", 500, Some(250), 3.0),
            product(3, "Kitchen", 100, None, 5.0),
        ]
    }

    #[test]
    fn category_filter_keeps_matching_products() {
        let mut filter = CatalogFilter::default();
        filter.categories.insert("Kitchen".to_owned());

        let refined = refine(&fixture(), &filter, None);

        assert_eq!(refined.len(), 2);
        assert!(
            refined.iter().all(|p| p.main_category.as_deref() == Some("Kitchen")),
            "only Kitchen products expected, got {refined:?}"
        );
    }

    #[test]
    fn price_bounds_use_effective_price() {
        let filter = CatalogFilter {
            price_max: Some(260),
            ..CatalogFilter::default()
        };

        let refined = refine(&fixture(), &filter, None);

        // Product 2 costs 250 after discount, so it stays.
        let ids: Vec<ProductId> = refined.iter().map(|p| p.id).collect();
        assert_eq!(ids, [ProductId(2), ProductId(3)]);
    }

    #[test]
    fn discounted_only_drops_full_price_products() {
        let filter = CatalogFilter {
            discounted_only: true,
            ..CatalogFilter::default()
        };

        let refined = refine(&fixture(), &filter, None);

        let ids: Vec<ProductId> = refined.iter().map(|p| p.id).collect();
        assert_eq!(ids, [ProductId(2)]);
    }

    #[test]
    fn sort_by_price_ascending() {
        let refined = refine(&fixture(), &CatalogFilter::default(), Some(SortKey::PriceAsc));

        let prices: Vec<u64> = refined.iter().map(Product::effective_price).collect();
        assert_eq!(prices, [100, 250, 300]);
    }

    #[test]
    fn sort_by_rating_descending() {
        let refined = refine(
            &fixture(),
            &CatalogFilter::default(),
            Some(SortKey::RatingDesc),
        );

        let ids: Vec<ProductId> = refined.iter().map(|p| p.id).collect();
        assert_eq!(ids, [ProductId(3), ProductId(1), ProductId(2)]);
    }

    #[test]
    fn empty_filter_keeps_catalog_order() {
        let refined = refine(&fixture(), &CatalogFilter::default(), None);

        let ids: Vec<ProductId> = refined.iter().map(|p| p.id).collect();
        assert_eq!(ids, [ProductId(1), ProductId(2), ProductId(3)]);
    }
}
