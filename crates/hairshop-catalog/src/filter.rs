//! Range-based product filtering driven by the sliders and color selector.

use hairshop_core::{Bounds, FilterRange, Product};
use serde::{Deserialize, Serialize};

/// Current state of the filter controls. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_length: f64,
    pub max_length: f64,
    pub min_price: f64,
    pub max_price: f64,
    /// Selected colors. Empty means "any color".
    pub colors: Vec<String>,
}

impl FilterCriteria {
    /// The reset state: the full derived range with no colors selected.
    #[must_use]
    pub fn from_range(range: &FilterRange) -> Self {
        Self {
            min_length: range.length.min,
            max_length: range.length.max,
            min_price: range.price.min,
            max_price: range.price.max,
            colors: Vec::new(),
        }
    }

    #[must_use]
    pub fn length_bounds(&self) -> Bounds {
        Bounds {
            min: self.min_length,
            max: self.max_length,
        }
    }

    #[must_use]
    pub fn price_bounds(&self) -> Bounds {
        Bounds {
            min: self.min_price,
            max: self.max_price,
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let length_ok = self.length_bounds().contains(product.length);
        let price_ok = self.price_bounds().contains(product.price);
        let color_ok = self.colors.is_empty() || self.colors.iter().any(|c| *c == product.color);
        length_ok && price_ok && color_ok
    }

    /// Returns the products passing every criterion, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let visible: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        tracing::debug!(
            shown = visible.len(),
            total = products.len(),
            "filters applied"
        );
        visible
    }
}

#[cfg(test)]
mod tests {
    use hairshop_core::{Bounds, ProductId};

    use super::*;

    fn product(id: u64, length: f64, price: f64, color: &str) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Wig {id}"),
            price,
            old_price: 0.0,
            length,
            color: color.to_string(),
            image_url: String::new(),
        }
    }

    fn range() -> FilterRange {
        FilterRange {
            length: Bounds {
                min: 20.0,
                max: 60.0,
            },
            price: Bounds {
                min: 1000.0,
                max: 5000.0,
            },
            colors: vec!["Blonde".to_string(), "Black".to_string()],
        }
    }

    #[test]
    fn reset_state_covers_whole_range() {
        let criteria = FilterCriteria::from_range(&range());
        assert!((criteria.min_length - 20.0).abs() < f64::EPSILON);
        assert!((criteria.max_price - 5000.0).abs() < f64::EPSILON);
        assert!(criteria.colors.is_empty());
    }

    #[test]
    fn criteria_bounds_mirror_the_range() {
        let criteria = FilterCriteria::from_range(&range());
        assert_eq!(criteria.length_bounds(), range().length);
        assert_eq!(criteria.price_bounds(), range().price);
    }

    #[test]
    fn bounds_are_inclusive() {
        let criteria = FilterCriteria::from_range(&range());
        assert!(criteria.matches(&product(1, 20.0, 1000.0, "Blonde")));
        assert!(criteria.matches(&product(2, 60.0, 5000.0, "Black")));
        assert!(!criteria.matches(&product(3, 61.0, 5000.0, "Black")));
        assert!(!criteria.matches(&product(4, 40.0, 999.0, "Black")));
    }

    #[test]
    fn zero_priced_products_fall_outside_derived_range() {
        let criteria = FilterCriteria::from_range(&range());
        assert!(!criteria.matches(&product(1, 40.0, 0.0, "Blonde")));
    }

    #[test]
    fn color_selection_restricts_matches() {
        let mut criteria = FilterCriteria::from_range(&range());
        criteria.colors = vec!["Black".to_string()];
        assert!(criteria.matches(&product(1, 40.0, 2000.0, "Black")));
        assert!(!criteria.matches(&product(2, 40.0, 2000.0, "Blonde")));
    }

    #[test]
    fn apply_keeps_catalog_order() {
        let products = vec![
            product(1, 40.0, 2000.0, "Black"),
            product(2, 80.0, 2000.0, "Black"),
            product(3, 30.0, 3000.0, "Blonde"),
        ];
        let criteria = FilterCriteria::from_range(&range());
        let ids: Vec<_> = criteria.apply(&products).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3)]);
    }
}
