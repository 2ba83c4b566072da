//! Shopping cart module.
//!
//! Contains the cart ledger, its entries, and derived totals.

mod cart;
mod pricing;

pub use cart::{CartEntry, CartLedger};
pub use pricing::CartTotals;
