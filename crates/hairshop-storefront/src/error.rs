use hairshop_catalog::CatalogError;
use hairshop_core::ProductId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on store file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stored value for {key} is not valid JSON: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("delivery selected but no address chosen")]
    AddressRequired,
}

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("catalog is not loaded")]
    CatalogNotLoaded,

    #[error("unknown product {0}")]
    UnknownProduct(ProductId),

    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("no saved address at position {0}")]
    UnknownAddress(usize),
}
