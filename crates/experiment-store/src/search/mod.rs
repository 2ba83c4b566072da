//! Search module.
//!
//! Contains the two-facet filter and the chip lists that drive it.

mod facets;
mod filter;

pub use facets::{FacetChip, FacetChips};
pub use filter::{visible_products, FacetFilter, FilterSelection, ALL_LABEL};
