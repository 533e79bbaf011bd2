//! Header parsing and column lookup.
//!
//! Columns are located by name rather than position, accepting either the
//! English or the Russian label a shop owner is likely to type into the
//! spreadsheet header row.

const ID: &[&str] = &["id", "артикул"];
const NAME: &[&str] = &["name", "название", "наименование"];
const PRICE: &[&str] = &["price", "цена"];
const OLD_PRICE: &[&str] = &["oldprice", "old_price", "old price", "старая цена"];
const LENGTH: &[&str] = &["length", "длина"];
const COLOR: &[&str] = &["color", "colour", "цвет"];
const IMAGE: &[&str] = &["imageurl", "image_url", "image", "изображение", "фото"];

/// Splits the header line into normalized column names.
///
/// The header is split on bare commas (quotes are not honoured here), each
/// name is trimmed, lowercased and stripped of surrounding quotes. A leading
/// UTF-8 byte order mark is dropped.
#[must_use]
pub fn parse_header(line: &str) -> Vec<String> {
    line.trim_start_matches('\u{feff}')
        .split(',')
        .map(|h| h.trim().to_lowercase().trim_matches('"').trim().to_string())
        .collect()
}

/// Positions of the known product columns within a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub id: Option<usize>,
    pub name: Option<usize>,
    pub price: Option<usize>,
    pub old_price: Option<usize>,
    pub length: Option<usize>,
    pub color: Option<usize>,
    pub image_url: Option<usize>,
}

impl ColumnMap {
    /// Resolves every known column against `headers`.
    ///
    /// Synonyms are tried in priority order, so a sheet carrying both
    /// `imageurl` and `image` reads from `imageurl`.
    #[must_use]
    pub fn from_headers(headers: &[String]) -> Self {
        Self {
            id: locate(headers, ID),
            name: locate(headers, NAME),
            price: locate(headers, PRICE),
            old_price: locate(headers, OLD_PRICE),
            length: locate(headers, LENGTH),
            color: locate(headers, COLOR),
            image_url: locate(headers, IMAGE),
        }
    }

    /// A sheet with neither a name nor a price column is not a catalog.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.name.is_some() || self.price.is_some()
    }
}

fn locate(headers: &[String], synonyms: &[&str]) -> Option<usize> {
    synonyms
        .iter()
        .find_map(|syn| headers.iter().position(|h| h == syn))
}
