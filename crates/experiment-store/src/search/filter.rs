//! Facet filter types.

use std::sync::Arc;

use crate::catalog::{Catalog, Product};
use serde::{Deserialize, Serialize};

/// Label of the catch-all facet chip.
pub const ALL_LABEL: &str = "All";

/// A selected value for one facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FacetFilter {
    /// Match every product.
    #[default]
    All,
    /// Match products whose facet equals this value exactly.
    Value(String),
}

impl FacetFilter {
    /// Build a filter from a chip label. `"All"` selects everything.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL_LABEL {
            FacetFilter::All
        } else {
            FacetFilter::Value(label)
        }
    }

    /// The chip label for this filter.
    pub fn label(&self) -> &str {
        match self {
            FacetFilter::All => ALL_LABEL,
            FacetFilter::Value(v) => v,
        }
    }

    /// Check a facet value against this filter.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Value(v) => v == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetFilter::All)
    }
}

/// The pair of currently chosen facet values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FilterSelection {
    /// Artist facet.
    pub artist: FacetFilter,
    /// Category facet.
    pub category: FacetFilter,
}

impl FilterSelection {
    /// Create a selection that shows everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the artist facet.
    pub fn with_artist(mut self, artist: FacetFilter) -> Self {
        self.artist = artist;
        self
    }

    /// Set the category facet.
    pub fn with_category(mut self, category: FacetFilter) -> Self {
        self.category = category;
        self
    }

    /// Check a product against both facets. Both must match.
    pub fn matches(&self, product: &Product) -> bool {
        self.artist.matches(&product.artist) && self.category.matches(&product.category)
    }

    /// Return both facets to `All`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if neither facet narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.artist.is_all() && self.category.is_all()
    }
}

/// Products that pass the selection, in catalog order.
///
/// A value that no product carries is legal and yields an empty list.
pub fn visible_products<'a>(
    catalog: &'a Catalog,
    selection: &FilterSelection,
) -> Vec<&'a Arc<Product>> {
    catalog
        .products()
        .iter()
        .filter(|p| selection.matches(p))
        .collect()
}
