//! Cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Derived cart figures, computed on read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of quantities (the cart badge).
    pub item_count: u64,
    /// Number of distinct products.
    pub unique_items: usize,
    /// Sum of line totals.
    pub subtotal: Money,
}

impl CartTotals {
    /// Subtotal formatted with two decimal places.
    pub fn subtotal_display(&self) -> String {
        self.subtotal.display_amount()
    }

    /// Check if the cart held nothing.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}
