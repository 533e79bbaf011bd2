use hairshop_core::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// A product copied into the cart together with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.find(id).map_or(0, |item| item.quantity)
    }

    /// Puts one unit of `product` in the cart and returns the new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.find_mut(product.id) {
            item.quantity += 1;
            return item.quantity;
        }
        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Returns the new quantity, or `None` if the product is not in the cart.
    pub fn increase(&mut self, id: ProductId) -> Option<u32> {
        let item = self.find_mut(id)?;
        item.quantity += 1;
        Some(item.quantity)
    }

    /// Removes one unit. Dropping below one removes the line entirely and
    /// returns `Some(0)`.
    pub fn decrease(&mut self, id: ProductId) -> Option<u32> {
        let item = self.find_mut(id)?;
        if item.quantity > 1 {
            item.quantity -= 1;
            return Some(item.quantity);
        }
        self.remove(id);
        Some(0)
    }

    pub fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let idx = self.items.iter().position(|item| item.product.id == id)?;
        Some(self.items.remove(idx))
    }

    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    fn find(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == id)
    }

    fn find_mut(&mut self, id: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.product.id == id)
    }
}
