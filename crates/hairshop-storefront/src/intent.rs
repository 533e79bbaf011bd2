use hairshop_catalog::FilterCriteria;
use hairshop_core::ProductId;

/// A user action emitted by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    AddToCart(ProductId),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
    RemoveFromCart(ProductId),
    ToggleFavorite(ProductId),
    ApplyFilter(FilterCriteria),
    ResetFilters,
}

/// Feedback for the view layer after an intent has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
