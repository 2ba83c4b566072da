//! Store error types.
//!
//! Errors only arise while a catalog is being built or a configuration file
//! is being loaded. Storefront intents are total and never fail.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur while assembling a store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A catalog record is missing a required value.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A product price is negative or not a finite number.
    #[error("Invalid price for product {product_id}: {price}")]
    InvalidPrice { product_id: ProductId, price: String },

    /// The configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::ConfigParse(e.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::ConfigParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::DuplicateProduct(ProductId::new(3));
        assert_eq!(err.to_string(), "Duplicate product id: 3");

        let err = StoreError::InvalidPrice {
            product_id: ProductId::new(1),
            price: "-1".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid price for product 1: -1");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::ConfigParse(_)));
    }
}
