//! Cart ledger and entry types.

use std::sync::Arc;

use crate::cart::CartTotals;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// The shopping cart: an ordered list of products and quantities.
///
/// Invariants after every operation:
/// - at most one entry per product id
/// - every quantity is at least 1
/// - entries keep the order in which their products were first added
///
/// Only mutated through its methods; there is no way to read a ledger back
/// from serialized form.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CartLedger {
    entries: Vec<CartEntry>,
}

impl CartLedger {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing entry is incremented in place; otherwise a new entry with
    /// quantity 1 is appended. Returns the resulting quantity.
    pub fn add(&mut self, product: &Arc<Product>) -> u32 {
        if let Some(existing) = self.entry_mut(product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.entries.push(CartEntry::new(Arc::clone(product)));
        1
    }

    /// Remove a product's entry. Returns false if it was not in the cart.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.product.id != product_id);
        self.entries.len() < len_before
    }

    /// Set a product's quantity.
    ///
    /// A quantity of zero or below removes the entry. Quantities above
    /// `u32::MAX` saturate. Never creates an entry: returns false if the
    /// product is not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.entry_mut(product_id) {
            Some(entry) => {
                entry.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get a product's entry.
    pub fn get(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id == product_id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity of a product, zero when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map(|e| e.quantity).unwrap_or(0)
    }

    /// Get total item count (sum of quantities).
    pub fn total_item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of every entry's line total, from the numeric prices.
    pub fn total_price(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Total price formatted with two decimal places (e.g., "15.00").
    pub fn total_price_display(&self) -> String {
        self.total_price().display_amount()
    }

    /// Summary of the cart for badges and the drawer footer.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.total_item_count(),
            unique_items: self.entries.len(),
            subtotal: self.total_price(),
        }
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, product_id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product.id == product_id)
    }
}

/// One product in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartEntry {
    /// The product, shared with the catalog.
    pub product: Arc<Product>,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    fn new(product: Arc<Product>) -> Self {
        Self { product, quantity: 1 }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, cents: i64) -> Arc<Product> {
        Arc::new(Product::new(id, format!("Item {}", id), "X", "Albums", Money::new(cents)))
    }

    fn ids(cart: &CartLedger) -> Vec<u32> {
        cart.entries().iter().map(|e| e.product.id.get()).collect()
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartLedger::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price_display(), "0.00");
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = CartLedger::new();
        let a = product(1, 1000);

        assert_eq!(cart.add(&a), 1);
        assert_eq!(cart.add(&a), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(a.id), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartLedger::new();
        let (a, b, c) = (product(1, 100), product(2, 200), product(3, 300));

        cart.add(&b);
        cart.add(&a);
        cart.add(&c);
        cart.add(&b);
        cart.update_quantity(a.id, 7);

        assert_eq!(ids(&cart), vec![2, 1, 3]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartLedger::new();
        let a = product(1, 1000);
        cart.add(&a);

        assert!(cart.update_quantity(a.id, 5));
        assert_eq!(cart.total_item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = CartLedger::new();
        let (a, b) = (product(1, 1000), product(2, 500));
        cart.add(&a);
        cart.add(&b);

        assert!(cart.update_quantity(a.id, 0));
        assert!(!cart.contains(a.id));

        assert!(cart.update_quantity(b.id, -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = CartLedger::new();
        assert!(!cart.update_quantity(ProductId::new(9), 3));
        assert!(!cart.update_quantity(ProductId::new(9), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_saturates() {
        let mut cart = CartLedger::new();
        let a = product(1, 1);
        cart.add(&a);
        cart.update_quantity(a.id, i64::MAX);
        assert_eq!(cart.quantity_of(a.id), u32::MAX);
        assert_eq!(cart.add(&a), u32::MAX);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartLedger::new();
        let a = product(1, 1000);
        cart.add(&a);

        assert!(cart.remove(a.id));
        assert!(!cart.remove(a.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_pricing() {
        let mut cart = CartLedger::new();
        let (a, b) = (product(1, 1000), product(2, 2000));
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.total_price().amount_cents, 4000);
        assert_eq!(cart.total_price_display(), "40.00");
        assert_eq!(cart.get(a.id).unwrap().line_total(), Money::new(2000));

        let totals = cart.totals();
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.unique_items, 2);
        assert_eq!(totals.subtotal, Money::new(4000));
    }

    #[test]
    fn test_serialized_shape() {
        let mut cart = CartLedger::new();
        let a = product(1, 1000);
        cart.add(&a);
        cart.add(&a);

        let json = serde_json::to_value(&cart).unwrap();
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["quantity"], 2);
        assert_eq!(entries[0]["product"]["id"], 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 1000));
        cart.clear();
        assert!(cart.is_empty());
    }
}
