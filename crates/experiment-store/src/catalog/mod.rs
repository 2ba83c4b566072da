//! Product catalog module.
//!
//! Contains product and artist records and the validated catalog that owns them.

mod artist;
pub mod builtin;
mod catalog;
mod product;

pub use artist::Artist;
pub use catalog::Catalog;
pub use product::{Product, PLACEHOLDER_IMAGE};

