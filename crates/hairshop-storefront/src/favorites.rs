use hairshop_core::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Products the user has marked, stored as copies of the catalog rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    items: Vec<Product>,
}

impl Favorites {
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Adds or removes `product`. Returns `true` if it is now a favorite.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if let Some(idx) = self.items.iter().position(|p| p.id == product.id) {
            self.items.remove(idx);
            false
        } else {
            self.items.push(product.clone());
            true
        }
    }
}
