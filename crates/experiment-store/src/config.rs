//! Store configuration.
//!
//! A store file names the storefront and may supply its own catalog. TOML
//! is the default format; files ending in `.json` are read as JSON.
//! [`StoreConfig::into_storefront`] turns a loaded file into a session with
//! the configured name and tagline.
//!
//! ```toml
//! [store]
//! name = "EXPERIMENT STORE"
//!
//! [[artists]]
//! name = "2COOL"
//! description = "Limited edition albums and photo cards"
//!
//! [[products]]
//! id = 2
//! title = "2COOL Photo Card Set"
//! price = 19.99
//! category = "Photo Cards"
//! artist = "2COOL"
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{Artist, Catalog, Product, PLACEHOLDER_IMAGE};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::session::Storefront;

/// Store configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storefront identity.
    #[serde(default)]
    pub store: StoreSettings,

    /// Showcase artists.
    #[serde(default)]
    pub artists: Vec<ArtistConfig>,

    /// Catalog products.
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        info!(
            path = %path.display(),
            artists = config.artists.len(),
            products = config.products.len(),
            "store config loaded"
        );
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build and validate the catalog.
    ///
    /// When the file lists neither artists nor products, the built-in
    /// catalog is used.
    pub fn into_catalog(self) -> Result<Catalog, StoreError> {
        if self.artists.is_empty() && self.products.is_empty() {
            return Catalog::builtin();
        }

        let artists = self.artists.into_iter().map(ArtistConfig::into_artist).collect();
        let products = self
            .products
            .into_iter()
            .map(ProductConfig::into_product)
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(artists, products)
    }

    /// Build the catalog and start a session carrying the store settings.
    pub fn into_storefront(self) -> Result<Storefront, StoreError> {
        let settings = self.store.clone();
        let catalog = Arc::new(self.into_catalog()?);
        Ok(Storefront::new(catalog).with_settings(settings))
    }
}

/// Storefront identity shown in the header and hero banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
        }
    }
}

fn default_name() -> String {
    "EXPERIMENT STORE".to_string()
}

fn default_tagline() -> String {
    "Official K-pop merchandise store featuring Royal Crush, 2COOL & NO1CE".to_string()
}

/// An artist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ArtistConfig {
    fn into_artist(self) -> Artist {
        let mut artist = Artist::new(self.name, self.description);
        if let Some(subtitle) = self.subtitle {
            artist = artist.with_subtitle(subtitle);
        }
        if let Some(image) = self.image {
            artist = artist.with_image(image);
        }
        artist
    }
}

/// A product entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    pub id: ProductId,
    pub title: String,

    /// Numeric price in dollars (e.g., 29.99).
    pub price: f64,

    /// Displayed price; derived from `price` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_label: Option<String>,

    pub category: String,
    pub artist: String,

    #[serde(default = "default_image")]
    pub image: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tracks: Vec<String>,

    #[serde(default)]
    pub specifications: Vec<String>,
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

impl ProductConfig {
    fn into_product(self) -> Result<Product, StoreError> {
        let price = Money::from_decimal(self.price).ok_or_else(|| StoreError::InvalidPrice {
            product_id: self.id,
            price: self.price.to_string(),
        })?;

        let mut product = Product::new(self.id, self.title, self.artist, self.category, price)
            .with_image(self.image)
            .with_description(self.description)
            .with_tracks(self.tracks)
            .with_specifications(self.specifications);
        if let Some(label) = self.price_label {
            product = product.with_price_label(label);
        }
        Ok(product)
    }
}
