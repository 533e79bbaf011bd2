pub mod client;
pub mod columns;
pub mod error;
pub mod filter;
pub mod load;
pub mod parse;
mod parse_helpers;
pub mod ranges;
pub mod split;

pub use client::CatalogClient;
pub use error::{CatalogError, FetchError};
pub use filter::FilterCriteria;
pub use load::{catalog_from_csv, load_catalog, Catalog};
pub use parse::{parse_catalog, parse_catalog_with_stats, ParseStats};
pub use ranges::derive_filter_range;
pub use split::split_csv_line;
