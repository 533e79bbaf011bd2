//! Per-user storefront state: cart, favorites, addresses and checkout on top
//! of a loaded catalog, persisted through a pluggable key-value store.

pub mod address;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod favorites;
pub mod identity;
pub mod intent;
pub mod state;
pub mod store;

pub use address::{delivery_company_name, Address, NewAddress};
pub use cart::{Cart, CartItem};
pub use checkout::{format_rub, order_message, DeliveryMethod, PaymentMethod, Purchase};
pub use error::{CheckoutError, StoreError, StorefrontError};
pub use favorites::Favorites;
pub use identity::{
    resolve_identity, GuestUser, HostProvider, HostUser, StorageKeys, TelegramHost, Theme,
    UserIdentity,
};
pub use intent::{Intent, Notification};
pub use state::{OrderConfirmation, Storefront};
pub use store::{read_json, write_json, JsonFileStore, KeyValueStore, MemoryStore};
