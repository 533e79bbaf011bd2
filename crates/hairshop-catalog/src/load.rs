//! The fetch → parse → derive pipeline.

use hairshop_core::{FilterRange, Product, ProductId};

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::parse::parse_catalog_with_stats;
use crate::ranges::derive_filter_range;

/// Result of one successful load: the products and the ranges derived from
/// them. Replaced whole on every reload.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub ranges: FilterRange,
}

impl Catalog {
    /// Builds a catalog from already-parsed products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyCatalog`] if `products` is empty.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let ranges = derive_filter_range(&products);
        Ok(Self { products, ranges })
    }

    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Parses CSV text into a [`Catalog`].
///
/// # Errors
///
/// Returns [`CatalogError::EmptyCatalog`] when no records came out of the
/// text, either because it had no data rows or no recognisable columns.
pub fn catalog_from_csv(text: &str) -> Result<Catalog, CatalogError> {
    let (products, stats) = parse_catalog_with_stats(text);

    if stats.mismatched_rows > 0 || stats.reassigned_ids > 0 {
        tracing::warn!(
            rows = stats.data_rows,
            mismatched_rows = stats.mismatched_rows,
            reassigned_ids = stats.reassigned_ids,
            "catalog parsed with irregular rows"
        );
    }

    let catalog = Catalog::from_products(products)?;
    tracing::info!(
        products = catalog.products.len(),
        colors = catalog.ranges.colors.len(),
        "catalog parsed"
    );
    Ok(catalog)
}

/// Fetches the CSV export at `url` and parses it into a [`Catalog`].
///
/// One attempt, no retry. Both error kinds are terminal for this attempt.
///
/// # Errors
///
/// - [`CatalogError::Fetch`] on transport failure or non-2xx status.
/// - [`CatalogError::EmptyCatalog`] if parsing produced no records.
pub async fn load_catalog(client: &CatalogClient, url: &str) -> Result<Catalog, CatalogError> {
    tracing::info!(%url, "loading catalog");
    let text = client.fetch_csv(url).await?;
    catalog_from_csv(&text)
}
