//! Built-in EXPERIMENT ENTERTAINMENT catalog.

use crate::catalog::{Artist, Catalog, Product};
use crate::error::StoreError;
use crate::money::Money;

/// Banner image for the lead artist card.
const ROYAL_CRUSH_BANNER: &str = "/img/68b5a8ec-8a9a-4e59-9a43-6f71dfe8e748.jpg";

/// Showcase artists, in display order.
pub fn artists() -> Vec<Artist> {
    vec![
        Artist::new(
            "Royal Crush",
            "Premium K-pop collectibles and exclusive merchandise",
        )
        .with_subtitle("(ex. TEDDIBEAR)")
        .with_image(ROYAL_CRUSH_BANNER),
        Artist::new("2COOL", "Limited edition albums and photo cards"),
        Artist::new("NO1CE", "Official merchandise and fan goods")
            .with_subtitle("Members: Jonhie (solo), Haerin (solo)"),
    ]
}

/// Featured products, in display order.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Royal Crush Limited Album", "Royal Crush", "Albums", Money::new(2999))
            .with_description("Limited pressing with exclusive photo card and poster insert.")
            .with_tracks(["Intro: Crown", "Crush Hour", "Velvet Night", "Royal Road"]),
        Product::new(2, "2COOL Photo Card Set", "2COOL", "Photo Cards", Money::new(1999))
            .with_description("Full-member photo card set from the latest comeback.")
            .with_specifications(["12 cards per set", "55 x 85 mm", "Glossy finish"]),
        Product::new(3, "NO1CE Official Hoodie", "NO1CE", "Apparel", Money::new(4999))
            .with_description("Official tour hoodie with embroidered logo.")
            .with_specifications(["80% cotton, 20% polyester", "Unisex fit", "Sizes S-XL"]),
        Product::new(4, "Jonhie Solo Poster", "Jonhie", "Posters", Money::new(1499))
            .with_description("Folded poster from Jonhie's solo debut.")
            .with_specifications(["A2 format", "Ships folded"]),
        Product::new(5, "Haerin Photobook", "Haerin", "Books", Money::new(3499))
            .with_description("96-page photobook shot on location.")
            .with_specifications(["96 pages", "Hardcover"]),
        Product::new(6, "EXPERIMENT Bundle", "EXPERIMENT", "Bundles", Money::new(8999))
            .with_description("Label bundle with one item from every artist.")
            .with_specifications(["Album", "Photo card set", "Poster", "Tote bag"]),
    ]
}

/// The full built-in catalog.
pub fn catalog() -> Result<Catalog, StoreError> {
    Catalog::new(artists(), products())
}
