//! The immutable product and artist catalog.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::{Artist, Product};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::search::ALL_LABEL;

/// The fixed set of products and artists known to a session.
///
/// Built once at startup and read-only afterwards, so it is safe to share
/// between readers through an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: Vec<Artist>,
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, validating every record.
    ///
    /// Returns an error if:
    /// - A product has a blank title, price label, category, artist or image
    /// - A product price is negative
    /// - Two products share an id
    /// - A product's artist or category is the `"All"` chip label
    /// - An artist has a blank name
    pub fn new(artists: Vec<Artist>, products: Vec<Product>) -> Result<Self, StoreError> {
        match Self::validate(artists, products) {
            Ok(catalog) => {
                info!(
                    products = catalog.products.len(),
                    artists = catalog.artists.len(),
                    "catalog loaded"
                );
                Ok(catalog)
            }
            Err(e) => {
                warn!(error = %e, "catalog rejected");
                Err(e)
            }
        }
    }

    fn validate(artists: Vec<Artist>, products: Vec<Product>) -> Result<Self, StoreError> {
        if let Some(pos) = artists.iter().position(|a| a.name.trim().is_empty()) {
            return Err(StoreError::InvalidCatalog(format!(
                "artist #{} has a blank name",
                pos + 1
            )));
        }

        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if let Some(field) = product.missing_field() {
                return Err(StoreError::InvalidCatalog(format!(
                    "product {} is missing {}",
                    product.id, field
                )));
            }
            if product.artist == ALL_LABEL || product.category == ALL_LABEL {
                return Err(StoreError::InvalidCatalog(format!(
                    "product {} uses the reserved facet value \"{}\"",
                    product.id, ALL_LABEL
                )));
            }
            if product.price.is_negative() {
                return Err(StoreError::InvalidPrice {
                    product_id: product.id,
                    price: product.price.display_amount(),
                });
            }
            if index.insert(product.id, pos).is_some() {
                return Err(StoreError::DuplicateProduct(product.id));
            }
        }

        Ok(Self {
            artists,
            products: products.into_iter().map(Arc::new).collect(),
            index,
        })
    }

    /// The built-in EXPERIMENT ENTERTAINMENT catalog.
    pub fn builtin() -> Result<Self, StoreError> {
        crate::catalog::builtin::catalog()
    }

    /// Get a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.index.get(&id).map(|&pos| &self.products[pos])
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// All showcase artists, in catalog order.
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Get a showcase artist by name.
    pub fn artist(&self, name: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.name == name)
    }

    /// Products credited to an artist, in catalog order.
    pub fn products_by_artist<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Arc<Product>> + 'a {
        self.products.iter().filter(move |p| p.artist == name)
    }

    /// Distinct artist facet values, in first-seen order.
    pub fn distinct_artists(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.artist.as_str()))
    }

    /// Distinct category facet values, in first-seen order.
    pub fn distinct_categories(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.category.as_str()))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u32, artist: &str, category: &str) -> Product {
        Product::new(id, format!("Item {}", id), artist, category, Money::new(1000))
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(
            vec![Artist::new("X", "First artist")],
            vec![product(1, "X", "Albums"), product(2, "Y", "Posters")],
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.product(ProductId::new(2)).unwrap().artist, "Y");
        assert!(catalog.product(ProductId::new(9)).is_none());
        assert_eq!(catalog.artist("X").unwrap().description, "First artist");
        assert!(catalog.artist("Z").is_none());
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let catalog = Catalog::new(
            vec![],
            vec![
                product(1, "Y", "Posters"),
                product(2, "X", "Albums"),
                product(3, "Y", "Albums"),
                product(4, "Z", "Posters"),
            ],
        )
        .unwrap();

        assert_eq!(catalog.distinct_artists(), vec!["Y", "X", "Z"]);
        assert_eq!(catalog.distinct_categories(), vec!["Posters", "Albums"]);
    }

    #[test]
    fn test_products_by_artist() {
        let catalog = Catalog::new(
            vec![],
            vec![product(1, "X", "A"), product(2, "Y", "A"), product(3, "X", "B")],
        )
        .unwrap();

        let ids: Vec<u32> = catalog.products_by_artist("X").map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![], vec![product(1, "X", "A"), product(1, "Y", "B")]);
        assert!(matches!(result, Err(StoreError::DuplicateProduct(id)) if id == ProductId::new(1)));
    }

    #[test]
    fn test_blank_field_rejected() {
        let result = Catalog::new(vec![], vec![product(1, "X", "")]);
        assert!(matches!(result, Err(StoreError::InvalidCatalog(msg)) if msg.contains("category")));
    }

    #[test]
    fn test_negative_price_rejected() {
        let bad = Product::new(1, "Refund", "X", "A", Money::new(-1));
        let result = Catalog::new(vec![], vec![bad]);
        assert!(matches!(result, Err(StoreError::InvalidPrice { .. })));
    }

    #[test]
    fn test_reserved_facet_value_rejected() {
        let products = vec![product(1, "All", "Albums"), product(2, "Y", "Albums")];
        let result = Catalog::new(vec![], products);
        assert!(matches!(result, Err(StoreError::InvalidCatalog(msg)) if msg.contains("All")));

        let result = Catalog::new(vec![], vec![product(1, "X", "All")]);
        assert!(matches!(result, Err(StoreError::InvalidCatalog(_))));

        // Only the exact label is reserved.
        assert!(Catalog::new(vec![], vec![product(1, "all", "ALL")]).is_ok());
    }

    #[test]
    fn test_blank_artist_name_rejected() {
        let result = Catalog::new(vec![Artist::new("", "nobody")], vec![]);
        assert!(matches!(result, Err(StoreError::InvalidCatalog(_))));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vec![], vec![]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.distinct_artists().is_empty());
    }
}
