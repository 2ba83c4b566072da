//! Product records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Image reference used when a record does not name one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A product in the catalog.
///
/// Products are immutable once the catalog is built. Cart entries and the
/// detail view hold shared references to them rather than copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Price as shown to shoppers (e.g., "$29.99").
    pub price_label: String,
    /// Numeric price used for all arithmetic.
    pub price: Money,
    /// Category facet value (e.g., "Albums").
    pub category: String,
    /// Artist facet value.
    pub artist: String,
    /// Opaque image reference, passed through to the presentation layer.
    pub image: String,
    /// Long-form description.
    pub description: String,
    /// Track list, in play order. Empty for non-music items.
    #[serde(default)]
    pub tracks: Vec<String>,
    /// Specification lines, in display order.
    #[serde(default)]
    pub specifications: Vec<String>,
}

impl Product {
    /// Create a product with a derived price label and placeholder image.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price_label: price.display(),
            price,
            category: category.into(),
            artist: artist.into(),
            image: PLACEHOLDER_IMAGE.to_string(),
            description: String::new(),
            tracks: Vec::new(),
            specifications: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Override the displayed price label.
    pub fn with_price_label(mut self, label: impl Into<String>) -> Self {
        self.price_label = label.into();
        self
    }

    /// Set the track list.
    pub fn with_tracks<I, S>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracks = tracks.into_iter().map(Into::into).collect();
        self
    }

    /// Set the specification lines.
    pub fn with_specifications<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specifications = specs.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the product carries a track list.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Check if the product carries specification lines.
    pub fn has_specifications(&self) -> bool {
        !self.specifications.is_empty()
    }

    /// Check the required fields, returning the name of the first blank one.
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        [
            ("title", &self.title),
            ("price_label", &self.price_label),
            ("category", &self.category),
            ("artist", &self.artist),
            ("image", &self.image),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}
