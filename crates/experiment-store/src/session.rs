//! Session-scoped storefront controller.
//!
//! [`Storefront`] owns every piece of mutable UI state for one shopper:
//! facet selection, cart ledger, detail view and the cart drawer flag.
//! Intents are `&mut self` methods that run to completion; derived values
//! are recomputed on every read.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::cart::{CartEntry, CartLedger, CartTotals};
use crate::catalog::{Artist, Catalog, Product};
use crate::config::StoreSettings;
use crate::ids::ProductId;
use crate::search::{visible_products, FacetChips, FacetFilter, FilterSelection};
use crate::selection::{DetailTab, DetailView};

/// Storefront state for one session.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    settings: StoreSettings,
    filters: FilterSelection,
    cart: CartLedger,
    detail: DetailView,
    cart_open: bool,
}

impl Storefront {
    /// Start a session with an empty cart, no filters and closed views.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            settings: StoreSettings::default(),
            filters: FilterSelection::default(),
            cart: CartLedger::new(),
            detail: DetailView::Closed,
            cart_open: false,
        }
    }

    /// Use a configured store name and tagline.
    pub fn with_settings(mut self, settings: StoreSettings) -> Self {
        self.settings = settings;
        self
    }

    // Facet intents

    /// Select an artist chip. `"All"` clears the artist facet.
    pub fn select_artist_filter(&mut self, value: impl Into<String>) {
        self.filters.artist = FacetFilter::from_label(value);
        debug!(facet = "artist", value = self.filters.artist.label(), "filter selected");
    }

    /// Select a category chip. `"All"` clears the category facet.
    pub fn select_category_filter(&mut self, value: impl Into<String>) {
        self.filters.category = FacetFilter::from_label(value);
        debug!(facet = "category", value = self.filters.category.label(), "filter selected");
    }

    /// "View Merchandise" on an artist card: narrow the grid to that artist.
    pub fn browse_artist(&mut self, name: impl Into<String>) {
        self.select_artist_filter(name);
    }

    /// Return both facets to `All`.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
        debug!("filters reset");
    }

    // Detail view intents

    /// Open the detail view on a product. Unknown ids are ignored.
    pub fn view_product_details(&mut self, product_id: ProductId) -> bool {
        let Some(product) = self.catalog.product(product_id) else {
            debug!(product_id = %product_id, "view details ignored: unknown product");
            return false;
        };
        self.detail.select(Arc::clone(product));
        debug!(product_id = %product_id, "detail view opened");
        true
    }

    /// Close the detail view.
    pub fn close_product_details(&mut self) -> bool {
        let closed = self.detail.clear();
        if let Some(product) = &closed {
            debug!(product_id = %product.id, "detail view closed");
        }
        closed.is_some()
    }

    /// Switch the detail view tab.
    pub fn set_detail_tab(&mut self, tab: DetailTab) -> bool {
        let changed = self.detail.set_tab(tab);
        debug!(tab = tab.as_str(), changed, "detail tab selected");
        changed
    }

    // Cart intents

    /// Add one unit of a product and open the cart drawer.
    ///
    /// When the detail view is showing this product it is closed in the
    /// same step. Unknown ids are ignored.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> bool {
        let Some(product) = self.catalog.product(product_id) else {
            debug!(product_id = %product_id, "add to cart ignored: unknown product");
            return false;
        };

        let quantity = self.cart.add(product);
        if self.detail.is_showing(product_id) {
            self.detail.clear();
        }
        self.cart_open = true;

        debug!(product_id = %product_id, quantity, "added to cart");
        true
    }

    /// Add the product shown in the detail view and close the view.
    pub fn add_selected_to_cart(&mut self) -> bool {
        match self.detail.product() {
            Some(product) => {
                let product_id = product.id;
                self.add_to_cart(product_id)
            }
            None => {
                debug!("add selected ignored: detail view closed");
                false
            }
        }
    }

    /// Remove a product from the cart. Absent ids are a no-op.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove(product_id);
        debug!(product_id = %product_id, removed, "removed from cart");
        removed
    }

    /// Set a product's quantity. Zero or below removes it.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(product_id, quantity);
        debug!(product_id = %product_id, quantity, changed, "quantity set");
        changed
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
    }

    // Cart drawer

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    // Read accessors

    /// The shared catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Showcase artists.
    pub fn artists(&self) -> &[Artist] {
        self.catalog.artists()
    }

    /// Products passing the current facets, in catalog order.
    pub fn visible_products(&self) -> Vec<&Arc<Product>> {
        visible_products(&self.catalog, &self.filters)
    }

    /// Chip lists for both facets.
    pub fn facet_chips(&self) -> FacetChips {
        FacetChips::new(&self.catalog, &self.filters)
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// Sum of cart quantities (the cart badge).
    pub fn cart_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    /// Cart total with two decimal places.
    pub fn cart_total(&self) -> String {
        self.cart.total_price_display()
    }

    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// The product in the detail view, if any.
    pub fn selected_product(&self) -> Option<&Arc<Product>> {
        self.detail.product()
    }

    pub fn detail_view(&self) -> &DetailView {
        &self.detail
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Everything the presentation layer renders, in one value.
    pub fn snapshot(&self) -> StorefrontView {
        StorefrontView {
            store: self.settings.clone(),
            artists: self.catalog.artists().to_vec(),
            products: self.visible_products().into_iter().cloned().collect(),
            chips: self.facet_chips(),
            filters: self.filters.clone(),
            cart: self.cart.entries().to_vec(),
            cart_item_count: self.cart_item_count(),
            cart_total: self.cart_total(),
            cart_open: self.cart_open,
            selected: self.detail.product().cloned(),
            detail_tab: self.detail.tab(),
            detail_tabs: self.detail.available_tabs(),
        }
    }
}

/// A render-ready copy of the storefront state.
#[derive(Debug, Clone, Serialize)]
pub struct StorefrontView {
    pub store: StoreSettings,
    pub artists: Vec<Artist>,
    pub products: Vec<Arc<Product>>,
    pub chips: FacetChips,
    pub filters: FilterSelection,
    pub cart: Vec<CartEntry>,
    pub cart_item_count: u64,
    pub cart_total: String,
    pub cart_open: bool,
    pub selected: Option<Arc<Product>>,
    pub detail_tab: Option<DetailTab>,
    pub detail_tabs: Vec<DetailTab>,
}
