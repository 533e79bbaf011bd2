//! Derivation of filter control bounds from a parsed catalog.

use std::collections::HashSet;

use hairshop_core::{Bounds, FilterRange, Product};

/// Length bounds used when no product carries a positive length.
pub const DEFAULT_LENGTH: Bounds = Bounds {
    min: 10.0,
    max: 50.0,
};

/// Price bounds used when no product carries a positive price.
pub const DEFAULT_PRICE: Bounds = Bounds {
    min: 1000.0,
    max: 10000.0,
};

/// Price slider bounds snap outward to this step.
const PRICE_STEP: f64 = 100.0;

/// Computes slider bounds and the color list for `products`.
///
/// Zero and negative values are ignored, so cells the parser coerced to `0.0`
/// never drag the minimum down. Lengths snap outward to whole centimetres and
/// prices to the nearest hundred. Colors keep first-seen order and are
/// compared case-sensitively.
#[must_use]
pub fn derive_filter_range(products: &[Product]) -> FilterRange {
    let length = positive_bounds(products.iter().map(|p| p.length))
        .map_or(DEFAULT_LENGTH, |b| Bounds {
            min: b.min.floor(),
            max: b.max.ceil(),
        });

    let price = positive_bounds(products.iter().map(|p| p.price))
        .map_or(DEFAULT_PRICE, |b| Bounds {
            min: (b.min / PRICE_STEP).floor() * PRICE_STEP,
            max: (b.max / PRICE_STEP).ceil() * PRICE_STEP,
        });

    FilterRange {
        length,
        price,
        colors: distinct_colors(products),
    }
}

fn positive_bounds(values: impl Iterator<Item = f64>) -> Option<Bounds> {
    values
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold(None, |acc: Option<Bounds>, v| {
            Some(match acc {
                None => Bounds { min: v, max: v },
                Some(b) => Bounds {
                    min: b.min.min(v),
                    max: b.max.max(v),
                },
            })
        })
}

fn distinct_colors(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .map(|p| p.color.as_str())
        .filter(|c| !c.trim().is_empty())
        .filter(|c| seen.insert(*c))
        .map(str::to_string)
        .collect()
}
