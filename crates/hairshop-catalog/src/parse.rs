//! Conversion of raw CSV text into [`Product`] records.
//!
//! The parser is deliberately lenient: it never returns an error. Blank or
//! malformed cells fall back to zero or a placeholder, and rows whose field
//! count disagrees with the header are still zipped, with missing cells read
//! as empty strings and surplus cells ignored. One non-empty data line always
//! produces exactly one record.

use std::collections::HashSet;

use hairshop_core::{Product, ProductId, COLOR_PLACEHOLDER, NAME_PLACEHOLDER};

use crate::columns::{parse_header, ColumnMap};
use crate::parse_helpers::{cell, clean_text, parse_id, parse_number};
use crate::split::split_csv_line;

/// Row-level bookkeeping gathered while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-empty data lines seen after the header.
    pub data_rows: usize,
    /// Rows whose field count differed from the header's.
    pub mismatched_rows: usize,
    /// Rows whose id cell was blank, invalid or a duplicate.
    pub reassigned_ids: usize,
    /// `false` when the header carried neither a name nor a price column.
    pub columns_recognised: bool,
}

/// Parses a whole CSV document into products.
///
/// Fewer than two non-empty lines (no header or no data) yields an empty
/// list rather than an error.
#[must_use]
pub fn parse_catalog(text: &str) -> Vec<Product> {
    parse_catalog_with_stats(text).0
}

/// Like [`parse_catalog`], additionally reporting what the leniency policy
/// had to paper over.
#[must_use]
pub fn parse_catalog_with_stats(text: &str) -> (Vec<Product>, ParseStats) {
    let mut stats = ParseStats::default();
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return (Vec::new(), stats);
    };
    let headers = parse_header(header_line);
    let columns = ColumnMap::from_headers(&headers);
    stats.columns_recognised = columns.is_usable();

    if !stats.columns_recognised {
        tracing::warn!(?headers, "catalog header has neither a name nor a price column");
        return (Vec::new(), stats);
    }
    tracing::debug!(?headers, "catalog header parsed");

    let mut used_ids = HashSet::new();
    let mut products = Vec::new();

    for (offset, line) in lines.enumerate() {
        let row_index = offset as u64 + 1;
        let fields = split_csv_line(line);
        stats.data_rows += 1;

        if fields.len() != headers.len() {
            stats.mismatched_rows += 1;
            tracing::debug!(
                row = row_index,
                expected = headers.len(),
                found = fields.len(),
                "catalog row field count mismatch"
            );
        }

        let parsed_id = parse_id(cell(&fields, columns.id));
        let id = claim_id(&mut used_ids, parsed_id, row_index);
        if parsed_id != Some(id.0) {
            stats.reassigned_ids += 1;
        }

        products.push(Product {
            id,
            name: text_or(cell(&fields, columns.name), NAME_PLACEHOLDER),
            price: parse_number(cell(&fields, columns.price)),
            old_price: parse_number(cell(&fields, columns.old_price)),
            length: parse_number(cell(&fields, columns.length)),
            color: text_or(cell(&fields, columns.color), COLOR_PLACEHOLDER),
            image_url: clean_text(cell(&fields, columns.image_url)),
        });
    }

    (products, stats)
}

fn text_or(raw: &str, placeholder: &str) -> String {
    let cleaned = clean_text(raw);
    if cleaned.is_empty() {
        placeholder.to_string()
    } else {
        cleaned
    }
}

/// Picks an id that is unique within this parse.
///
/// The sheet's own id wins when present and unused; otherwise the 1-based
/// row index is tried, then the next free number above it.
fn claim_id(used: &mut HashSet<u64>, preferred: Option<u64>, row_index: u64) -> ProductId {
    let mut candidate = preferred.unwrap_or(row_index);
    if used.contains(&candidate) {
        tracing::warn!(id = candidate, row = row_index, "duplicate catalog id reassigned");
        candidate = row_index;
    }
    while used.contains(&candidate) {
        candidate += 1;
    }
    used.insert(candidate);
    ProductId(candidate)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
