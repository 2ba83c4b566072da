//! Shopper intents as data.
//!
//! A presentation layer can forward gestures as JSON such as
//! `{"intent": "add_to_cart", "product_id": 3}` and hand the decoded value
//! to [`Storefront::apply`].

use crate::ids::ProductId;
use crate::selection::DetailTab;
use crate::session::Storefront;
use serde::{Deserialize, Serialize};

/// A discrete request from the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    SelectArtistFilter { value: String },
    SelectCategoryFilter { value: String },
    BrowseArtist { name: String },
    ResetFilters,
    ViewProductDetails { product_id: ProductId },
    CloseProductDetails,
    SetDetailTab { tab: DetailTab },
    AddToCart { product_id: ProductId },
    AddSelectedToCart,
    RemoveFromCart { product_id: ProductId },
    SetQuantity { product_id: ProductId, quantity: i64 },
    ClearCart,
    OpenCart,
    CloseCart,
    ToggleCart,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SelectArtistFilter { .. } => "select_artist_filter",
            Intent::SelectCategoryFilter { .. } => "select_category_filter",
            Intent::BrowseArtist { .. } => "browse_artist",
            Intent::ResetFilters => "reset_filters",
            Intent::ViewProductDetails { .. } => "view_product_details",
            Intent::CloseProductDetails => "close_product_details",
            Intent::SetDetailTab { .. } => "set_detail_tab",
            Intent::AddToCart { .. } => "add_to_cart",
            Intent::AddSelectedToCart => "add_selected_to_cart",
            Intent::RemoveFromCart { .. } => "remove_from_cart",
            Intent::SetQuantity { .. } => "set_quantity",
            Intent::ClearCart => "clear_cart",
            Intent::OpenCart => "open_cart",
            Intent::CloseCart => "close_cart",
            Intent::ToggleCart => "toggle_cart",
        }
    }
}

impl Storefront {
    /// Dispatch an intent to its entry point.
    pub fn apply(&mut self, intent: Intent) {
        tracing::trace!(intent = intent.name(), "applying intent");
        match intent {
            Intent::SelectArtistFilter { value } => self.select_artist_filter(value),
            Intent::SelectCategoryFilter { value } => self.select_category_filter(value),
            Intent::BrowseArtist { name } => self.browse_artist(name),
            Intent::ResetFilters => self.reset_filters(),
            Intent::ViewProductDetails { product_id } => {
                self.view_product_details(product_id);
            }
            Intent::CloseProductDetails => {
                self.close_product_details();
            }
            Intent::SetDetailTab { tab } => {
                self.set_detail_tab(tab);
            }
            Intent::AddToCart { product_id } => {
                self.add_to_cart(product_id);
            }
            Intent::AddSelectedToCart => {
                self.add_selected_to_cart();
            }
            Intent::RemoveFromCart { product_id } => {
                self.remove_from_cart(product_id);
            }
            Intent::SetQuantity {
                product_id,
                quantity,
            } => {
                self.set_quantity(product_id, quantity);
            }
            Intent::ClearCart => self.clear_cart(),
            Intent::OpenCart => self.open_cart(),
            Intent::CloseCart => self.close_cart(),
            Intent::ToggleCart => self.toggle_cart(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    #[test]
    fn test_intent_from_json() {
        let intent: Intent =
            serde_json::from_str(r#"{"intent": "set_quantity", "product_id": 3, "quantity": -1}"#)
                .unwrap();
        assert_eq!(
            intent,
            Intent::SetQuantity {
                product_id: ProductId::new(3),
                quantity: -1
            }
        );

        let intent: Intent = serde_json::from_str(r#"{"intent": "toggle_cart"}"#).unwrap();
        assert_eq!(intent, Intent::ToggleCart);

        let intent: Intent =
            serde_json::from_str(r#"{"intent": "set_detail_tab", "tab": "tracks"}"#).unwrap();
        assert_eq!(intent, Intent::SetDetailTab { tab: DetailTab::Tracks });
    }

    #[test]
    fn test_name_matches_tag() {
        let intent = Intent::AddToCart {
            product_id: ProductId::new(1),
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["intent"], intent.name());
    }

    #[test]
    fn test_apply_sequence() {
        let mut store = Storefront::new(Arc::new(Catalog::builtin().unwrap()));
        let intents = [
            Intent::SelectCategoryFilter {
                value: "Albums".into(),
            },
            Intent::ViewProductDetails {
                product_id: ProductId::new(1),
            },
            Intent::SetDetailTab {
                tab: DetailTab::Tracks,
            },
            Intent::AddSelectedToCart,
            Intent::AddToCart {
                product_id: ProductId::new(1),
            },
            Intent::CloseCart,
        ];
        for intent in intents {
            store.apply(intent);
        }

        assert_eq!(store.visible_products().len(), 1);
        assert!(store.selected_product().is_none());
        assert_eq!(store.cart().quantity_of(ProductId::new(1)), 2);
        assert_eq!(store.cart_total(), "59.98");
        assert!(!store.is_cart_open());
    }
}
