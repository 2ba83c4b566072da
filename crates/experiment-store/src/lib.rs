//! Storefront state for the EXPERIMENT STORE merchandise shop.
//!
//! This crate holds everything the storefront UI renders, independent of any
//! rendering framework:
//!
//! - **Catalog**: Products and showcase artists, validated once at startup
//! - **Search**: Two-facet filtering (artist, category) and chip lists
//! - **Cart**: Ordered ledger of products and quantities, with totals
//! - **Selection**: The product detail view and its tabs
//! - **Session**: A [`Storefront`] controller that applies shopper intents
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use experiment_store::prelude::*;
//!
//! let catalog = Arc::new(Catalog::builtin().unwrap());
//! let mut store = Storefront::new(catalog);
//!
//! store.select_category_filter("Albums");
//! assert_eq!(store.visible_products().len(), 1);
//!
//! store.add_to_cart(ProductId::new(1));
//! store.add_to_cart(ProductId::new(1));
//! assert_eq!(store.cart_item_count(), 2);
//! assert_eq!(store.cart_total(), "59.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod intent;
pub mod search;
pub mod selection;
pub mod session;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::Money;
pub use session::{Storefront, StorefrontView};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Artist, Catalog, Product};

    // Search
    pub use crate::search::{FacetChip, FacetChips, FacetFilter, FilterSelection};

    // Cart
    pub use crate::cart::{CartEntry, CartLedger, CartTotals};

    // Selection
    pub use crate::selection::{DetailTab, DetailView};

    // Session
    pub use crate::config::StoreConfig;
    pub use crate::intent::Intent;
    pub use crate::session::{Storefront, StorefrontView};
}
