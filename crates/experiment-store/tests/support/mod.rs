use std::sync::Arc;

use experiment_store::prelude::*;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .with_line_number(true)
        .with_target(false)
        .try_init();
}

/// Two-product catalog: A (artist X, $10.00) and B (artist Y, $5.00), both Albums.
#[allow(dead_code)]
pub fn two_album_store() -> Storefront {
    let catalog = Catalog::new(
        vec![Artist::new("X", "Artist X"), Artist::new("Y", "Artist Y")],
        vec![
            Product::new(1, "A", "X", "Albums", Money::new(1000)),
            Product::new(2, "B", "Y", "Albums", Money::new(500)),
        ],
    )
    .expect("valid catalog");
    Storefront::new(Arc::new(catalog))
}

#[allow(dead_code)]
pub fn builtin_store() -> Storefront {
    Storefront::new(Arc::new(Catalog::builtin().expect("valid builtin catalog")))
}
