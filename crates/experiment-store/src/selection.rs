//! Product detail view state machine.
//!
//! ```text
//! Closed --select(p)--> Open(p)
//! Open(p) --select(q)--> Open(q)
//! Open(p) --clear-->     Closed
//! ```
//!
//! Adding the shown product to the cart also closes the view; that pairing
//! lives in [`crate::session::Storefront`].

use std::sync::Arc;

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Sub-views of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DetailTab {
    /// Description and price.
    #[default]
    Overview,
    /// Track list.
    Tracks,
    /// Specification lines.
    Specifications,
}

impl DetailTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailTab::Overview => "overview",
            DetailTab::Tracks => "tracks",
            DetailTab::Specifications => "specifications",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Tracks => "Track List",
            DetailTab::Specifications => "Specifications",
        }
    }

    /// Check whether a product has content for this tab.
    pub fn is_available_for(&self, product: &Product) -> bool {
        match self {
            DetailTab::Overview => true,
            DetailTab::Tracks => product.has_tracks(),
            DetailTab::Specifications => product.has_specifications(),
        }
    }
}

/// Which product, if any, is shown in the detail view.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailView {
    #[default]
    Closed,
    Open {
        product: Arc<Product>,
        tab: DetailTab,
    },
}

impl DetailView {
    /// Show a product. Re-selecting while open replaces the product, and
    /// every selection starts on the first tab.
    pub fn select(&mut self, product: Arc<Product>) {
        *self = DetailView::Open {
            product,
            tab: DetailTab::default(),
        };
    }

    /// Close the view. Returns the product that was shown.
    pub fn clear(&mut self) -> Option<Arc<Product>> {
        match std::mem::take(self) {
            DetailView::Open { product, .. } => Some(product),
            DetailView::Closed => None,
        }
    }

    /// Switch tabs.
    ///
    /// No-op when closed or when the product has no content for the tab.
    pub fn set_tab(&mut self, new_tab: DetailTab) -> bool {
        match self {
            DetailView::Open { product, tab } if new_tab.is_available_for(product.as_ref()) => {
                *tab = new_tab;
                true
            }
            _ => false,
        }
    }

    /// The shown product.
    pub fn product(&self) -> Option<&Arc<Product>> {
        match self {
            DetailView::Open { product, .. } => Some(product),
            DetailView::Closed => None,
        }
    }

    /// The active tab, if open.
    pub fn tab(&self) -> Option<DetailTab> {
        match self {
            DetailView::Open { tab, .. } => Some(*tab),
            DetailView::Closed => None,
        }
    }

    /// Tabs with content for the shown product, in display order.
    pub fn available_tabs(&self) -> Vec<DetailTab> {
        let Some(product) = self.product() else {
            return Vec::new();
        };
        [DetailTab::Overview, DetailTab::Tracks, DetailTab::Specifications]
            .into_iter()
            .filter(|t| t.is_available_for(product))
            .collect()
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailView::Open { .. })
    }

    /// Check whether a specific product is shown.
    pub fn is_showing(&self, product_id: ProductId) -> bool {
        self.product().is_some_and(|p| p.id == product_id)
    }
}
