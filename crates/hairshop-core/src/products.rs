use serde::{Deserialize, Serialize};

/// Placeholder shown when a catalog row has a blank name.
pub const NAME_PLACEHOLDER: &str = "Без названия";

/// Placeholder shown when a catalog row has a blank color.
pub const COLOR_PLACEHOLDER: &str = "Не указан";

/// Base used for image cells that hold a bare Google Drive file id instead
/// of a URL.
const DRIVE_IMAGE_BASE: &str = "https://drive.google.com/uc?export=view&id=";

/// Identifier of a catalog row. Unique within one parse result only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(ProductId)
    }
}

/// One row of the published catalog, normalized at parse time.
///
/// All numeric fields are non-negative; malformed cells have already been
/// coerced to `0.0` by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// Struck-through price. `0.0` means "no discount".
    pub old_price: f64,
    /// Hair length in centimetres.
    pub length: f64,
    pub color: String,
    /// Absolute URL, bare Drive file id, or empty.
    pub image_url: String,
}

impl Product {
    /// Returns `true` when the old price should be displayed struck through.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.old_price > 0.0 && self.old_price > self.price
    }

    /// Resolves the image cell into something a view can load.
    ///
    /// Empty cells yield `None`; anything not starting with `http` is treated
    /// as a Google Drive file id.
    #[must_use]
    pub fn display_image_url(&self) -> Option<String> {
        let raw = self.image_url.trim();
        if raw.is_empty() {
            None
        } else if raw.starts_with("http") {
            Some(raw.to_string())
        } else {
            Some(format!("{DRIVE_IMAGE_BASE}{raw}"))
        }
    }
}

/// Inclusive numeric bounds for a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Filter control bounds derived from one successful catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRange {
    pub length: Bounds,
    pub price: Bounds,
    /// Distinct non-blank colors in first-seen order.
    pub colors: Vec<String>,
}
