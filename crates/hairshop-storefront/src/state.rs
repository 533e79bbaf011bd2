//! Application state shared by the view layer.
//!
//! [`Storefront`] owns the loaded catalog, the active filters, and the
//! per-user cart, favorites, addresses and purchase history. Views read it
//! through accessors and change it only by dispatching [`Intent`]s or calling
//! the checkout methods. Every change to user data is written back to the
//! injected [`KeyValueStore`] immediately.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use hairshop_catalog::{load_catalog, Catalog, CatalogClient, CatalogError, FilterCriteria};
use hairshop_core::{Product, ProductId};

use crate::address::{Address, NewAddress};
use crate::cart::Cart;
use crate::checkout::{order_message, DeliveryMethod, PaymentMethod, Purchase};
use crate::error::{CheckoutError, StoreError, StorefrontError};
use crate::favorites::Favorites;
use crate::identity::{StorageKeys, UserIdentity};
use crate::intent::{Intent, Notification};
use crate::store::{read_json, write_json, KeyValueStore};

/// What [`Storefront::confirm_order`] hands back to the view.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub purchase: Purchase,
    pub message: String,
}

pub struct Storefront<S: KeyValueStore> {
    store: S,
    identity: UserIdentity,
    keys: StorageKeys,
    catalog: Option<Catalog>,
    filters: Option<FilterCriteria>,
    cart: Cart,
    favorites: Favorites,
    purchases: Vec<Purchase>,
    addresses: Vec<Address>,
    selected_address: Option<usize>,
    delivery: DeliveryMethod,
    payment: PaymentMethod,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Restores the user's saved data from `store`.
    ///
    /// Corrupt stored documents are logged and replaced with empty defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Store`] if the store itself fails.
    pub fn open(store: S, identity: UserIdentity) -> Result<Self, StorefrontError> {
        let keys = identity.storage_keys();
        let cart: Cart = load_or_default(&store, &keys.cart)?;
        let favorites: Favorites = load_or_default(&store, &keys.favorites)?;
        let purchases: Vec<Purchase> = load_or_default(&store, &keys.purchases)?;
        let addresses: Vec<Address> = load_or_default(&store, &keys.addresses)?;

        tracing::info!(
            user = %identity.storage_id(),
            cart_items = cart.total_items(),
            favorites = favorites.len(),
            purchases = purchases.len(),
            addresses = addresses.len(),
            "storefront opened"
        );

        Ok(Self {
            store,
            identity,
            keys,
            catalog: None,
            filters: None,
            cart,
            favorites,
            purchases,
            addresses,
            selected_address: None,
            delivery: DeliveryMethod::default(),
            payment: PaymentMethod::default(),
        })
    }

    /// Fetches and installs a fresh catalog. See [`Self::install_catalog`].
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Catalog`] if the load fails.
    pub async fn reload(
        &mut self,
        client: &CatalogClient,
        url: &str,
    ) -> Result<&Catalog, StorefrontError> {
        let result = load_catalog(client, url).await;
        self.install_catalog(result)
    }

    /// Replaces the catalog with the outcome of a load attempt.
    ///
    /// Success clears any active filters, so the whole catalog is visible
    /// until the user applies or resets them. Failure leaves the storefront
    /// with no catalog at all.
    ///
    /// # Errors
    ///
    /// Returns the load failure as [`StorefrontError::Catalog`].
    pub fn install_catalog(
        &mut self,
        result: Result<Catalog, CatalogError>,
    ) -> Result<&Catalog, StorefrontError> {
        match result {
            Ok(catalog) => {
                self.filters = None;
                Ok(self.catalog.insert(catalog))
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed, catalog cleared");
                self.catalog = None;
                self.filters = None;
                Err(e.into())
            }
        }
    }

    /// Handles one user action and returns feedback for the view.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::CatalogNotLoaded`] for catalog-dependent intents
    ///   before a successful load.
    /// - [`StorefrontError::UnknownProduct`] / [`StorefrontError::NotInCart`]
    ///   for ids that do not resolve.
    /// - [`StorefrontError::Store`] if persisting the change fails. The
    ///   in-memory state is left as it was.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Notification, StorefrontError> {
        match intent {
            Intent::AddToCart(id) => {
                let product = self.product(id)?.clone();
                let mut cart = self.cart.clone();
                cart.add(&product);
                self.commit_cart(cart)?;
                Ok(Notification::new(format!(
                    "Товар \"{}\" добавлен в корзину!",
                    product.name
                )))
            }
            Intent::IncreaseQuantity(id) => {
                let mut cart = self.cart.clone();
                let quantity = cart.increase(id).ok_or(StorefrontError::NotInCart(id))?;
                self.commit_cart(cart)?;
                Ok(Notification::new(format!("Количество: {quantity}")))
            }
            Intent::DecreaseQuantity(id) => {
                let name = self.cart_item_name(id)?;
                let mut cart = self.cart.clone();
                let quantity = cart.decrease(id).ok_or(StorefrontError::NotInCart(id))?;
                self.commit_cart(cart)?;
                if quantity == 0 {
                    Ok(Notification::new(format!(
                        "Товар \"{name}\" удален из корзины"
                    )))
                } else {
                    Ok(Notification::new(format!("Количество: {quantity}")))
                }
            }
            Intent::RemoveFromCart(id) => {
                let mut cart = self.cart.clone();
                let item = cart.remove(id).ok_or(StorefrontError::NotInCart(id))?;
                self.commit_cart(cart)?;
                Ok(Notification::new(format!(
                    "Товар \"{}\" удален из корзины",
                    item.product.name
                )))
            }
            Intent::ToggleFavorite(id) => {
                let product = self.product(id)?.clone();
                let mut favorites = self.favorites.clone();
                let now_favorite = favorites.toggle(&product);
                write_json(&mut self.store, &self.keys.favorites, &favorites)?;
                self.favorites = favorites;
                let message = if now_favorite {
                    format!("Товар \"{}\" добавлен в избранное!", product.name)
                } else {
                    format!("Товар \"{}\" удален из избранного", product.name)
                };
                Ok(Notification::new(message))
            }
            Intent::ApplyFilter(criteria) => {
                let total = self.loaded_catalog()?.products.len();
                self.filters = Some(criteria);
                let shown = self.visible_products().len();
                Ok(Notification::new(format!(
                    "Отображено {shown} из {total} товаров"
                )))
            }
            Intent::ResetFilters => {
                let criteria = FilterCriteria::from_range(&self.loaded_catalog()?.ranges);
                self.filters = Some(criteria);
                Ok(Notification::new("Фильтры сброшены"))
            }
        }
    }

    /// Saves a new delivery address and selects it.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::InvalidAddress`] if required fields are blank.
    /// - [`StorefrontError::Store`] if persisting fails.
    pub fn save_address(
        &mut self,
        new: NewAddress,
        now: DateTime<Utc>,
    ) -> Result<&Address, StorefrontError> {
        let address = Address::from_new(new, now)?;
        let mut addresses = self.addresses.clone();
        addresses.push(address);
        write_json(&mut self.store, &self.keys.addresses, &addresses)?;
        self.addresses = addresses;
        let index = self.addresses.len() - 1;
        self.selected_address = Some(index);
        tracing::debug!(index, "address saved");
        Ok(&self.addresses[index])
    }

    /// # Errors
    ///
    /// Returns [`StorefrontError::UnknownAddress`] if `index` is out of range.
    pub fn select_address(&mut self, index: usize) -> Result<&Address, StorefrontError> {
        let address = self
            .addresses
            .get(index)
            .ok_or(StorefrontError::UnknownAddress(index))?;
        self.selected_address = Some(index);
        Ok(address)
    }

    pub fn set_delivery(&mut self, method: DeliveryMethod) {
        self.delivery = method;
    }

    pub fn set_payment(&mut self, method: PaymentMethod) {
        self.payment = method;
    }

    /// Turns the cart into a purchase, records it, and empties the cart.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] if there is nothing to buy.
    /// - [`CheckoutError::AddressRequired`] for delivery without a selected
    ///   address.
    /// - [`StorefrontError::Store`] if persisting fails. Neither the cart nor
    ///   the history changes in that case.
    pub fn confirm_order(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<OrderConfirmation, StorefrontError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }

        let address = match self.delivery {
            DeliveryMethod::Pickup => None,
            DeliveryMethod::Delivery => Some(
                self.selected_address()
                    .cloned()
                    .ok_or(CheckoutError::AddressRequired)?,
            ),
        };

        let purchase = Purchase {
            id: Uuid::new_v4(),
            date: now,
            items: self.cart.items().to_vec(),
            total: self.cart.total_amount(),
            delivery: self.delivery,
            payment: self.payment,
            address,
        };

        let mut purchases = self.purchases.clone();
        purchases.push(purchase.clone());
        write_json(&mut self.store, &self.keys.purchases, &purchases)?;
        if let Err(e) = write_json(&mut self.store, &self.keys.cart, &Cart::default()) {
            // The store must not hold both the order and its cart.
            if let Err(rollback) = write_json(&mut self.store, &self.keys.purchases, &self.purchases)
            {
                tracing::error!(error = %rollback, "could not roll back purchase history");
            }
            return Err(e.into());
        }
        self.purchases = purchases;
        self.cart = Cart::default();

        tracing::info!(
            order_id = %purchase.id,
            items = purchase.items.len(),
            total = purchase.total,
            delivery = ?purchase.delivery,
            "order confirmed"
        );

        let message = order_message(&purchase, &self.identity.display_name());
        Ok(OrderConfirmation { purchase, message })
    }

    /// Products passing the active filters, or the whole catalog when no
    /// filters are set. Empty before the first successful load.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };
        match &self.filters {
            Some(criteria) => criteria.apply(&catalog.products),
            None => catalog.products.iter().collect(),
        }
    }

    #[must_use]
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    #[must_use]
    pub fn filters(&self) -> Option<&FilterCriteria> {
        self.filters.as_ref()
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    #[must_use]
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    #[must_use]
    pub fn selected_address(&self) -> Option<&Address> {
        self.selected_address.and_then(|i| self.addresses.get(i))
    }

    #[must_use]
    pub fn delivery(&self) -> DeliveryMethod {
        self.delivery
    }

    #[must_use]
    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }

    /// Gives the store back, e.g. to reopen it under another identity.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn loaded_catalog(&self) -> Result<&Catalog, StorefrontError> {
        self.catalog.as_ref().ok_or(StorefrontError::CatalogNotLoaded)
    }

    fn product(&self, id: ProductId) -> Result<&Product, StorefrontError> {
        self.loaded_catalog()?
            .find(id)
            .ok_or(StorefrontError::UnknownProduct(id))
    }

    fn cart_item_name(&self, id: ProductId) -> Result<String, StorefrontError> {
        self.cart
            .items()
            .iter()
            .find(|item| item.product.id == id)
            .map(|item| item.product.name.clone())
            .ok_or(StorefrontError::NotInCart(id))
    }

    /// Persists `cart`, then makes it the current cart.
    fn commit_cart(&mut self, cart: Cart) -> Result<(), StoreError> {
        write_json(&mut self.store, &self.keys.cart, &cart)?;
        self.cart = cart;
        Ok(())
    }
}

fn load_or_default<T, S>(store: &S, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match read_json(store, key) {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(StoreError::Decode { key, source }) => {
            tracing::warn!(%key, error = %source, "discarding unreadable stored value");
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
