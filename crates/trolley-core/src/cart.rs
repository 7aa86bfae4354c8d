//! # Cart State
//!
//! The cart data model and its pure mutation primitives.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Invariants                                   │
//! │                                                                         │
//! │  I1  At most one line per product id (the id is the cart's key)        │
//! │  I2  Every line has amount >= 1                                        │
//! │  I3  Lines keep insertion order                                        │
//! │                                                                         │
//! │  The stock bound (amount <= stock) is NOT enforced here: stock lives   │
//! │  on the inventory service, and this crate does no I/O. The cart store  │
//! │  checks stock before calling into these primitives.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every primitive either applies fully or returns an error leaving the
//! cart untouched, so the store can treat a cloned `Cart` as a candidate
//! state and commit it only after the durable write succeeds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::types::{ProductId, ProductRecord};
use crate::SNAPSHOT_VERSION;

// =============================================================================
// Cart Line
// =============================================================================

/// One product in the cart with its requested quantity.
///
/// ## Frozen Metadata
/// `product` is a snapshot of the inventory record at the time the line was
/// first added. If the product's title, price or image change later, the
/// line keeps displaying the original data; only the stock amount is
/// re-checked on later mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product id, unique within the cart.
    pub product_id: ProductId,

    /// Requested quantity. Always >= 1.
    pub amount: i64,

    /// Product metadata frozen at add time.
    pub product: ProductRecord,

    /// When this line was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line for a freshly added product with amount 1.
    pub fn new(product: ProductRecord) -> Self {
        CartLine {
            product_id: product.id,
            amount: 1,
            product,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The full ordered collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Rebuilds a cart from previously captured lines.
    ///
    /// Duplicate product ids in the input keep the first occurrence, so a
    /// tampered snapshot cannot break the one-line-per-id invariant.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Cart::new();
        for line in lines {
            if cart.line(line.product_id).is_none() {
                cart.lines.push(line);
            }
        }
        cart
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for a product id.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.amount).sum()
    }

    /// Adds `product` to the cart.
    ///
    /// ## Behavior
    /// - Product not in cart: appends a new line with amount 1
    /// - Product already in cart: increments that line
    ///
    /// Returns the line's amount after the add.
    pub fn add(&mut self, product: ProductRecord) -> i64 {
        if let Some(line) = self.line_mut(product.id) {
            line.amount += 1;
            return line.amount;
        }
        self.lines.push(CartLine::new(product));
        1
    }

    /// Increments the amount of an existing line by 1.
    ///
    /// Returns the new amount, or [`CartError::NotInCart`] if no line
    /// matches.
    pub fn increment(&mut self, product_id: ProductId) -> CartResult<i64> {
        let line = self
            .line_mut(product_id)
            .ok_or(CartError::NotInCart(product_id))?;
        line.amount += 1;
        Ok(line.amount)
    }

    /// Sets the amount of an existing line.
    ///
    /// Callers are expected to have rejected non-positive amounts already;
    /// this primitive only checks line existence.
    pub fn set_amount(&mut self, product_id: ProductId, amount: i64) -> CartResult<()> {
        let line = self
            .line_mut(product_id)
            .ok_or(CartError::NotInCart(product_id))?;
        line.amount = amount;
        Ok(())
    }

    /// Removes the line for a product id.
    ///
    /// Returns the removed line, or [`CartError::NotInCart`] if no line
    /// matches. All other lines keep their order.
    pub fn remove(&mut self, product_id: ProductId) -> CartResult<CartLine> {
        let idx = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id)
            .ok_or(CartError::NotInCart(product_id))?;
        Ok(self.lines.remove(idx))
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}

// =============================================================================
// Cart Snapshot
// =============================================================================

/// The serialized form of a cart written to durable storage.
///
/// ## Versioning
/// Every snapshot is stamped with [`SNAPSHOT_VERSION`]. Loading code treats
/// any other version as "no snapshot", so a format change degrades to an
/// empty cart rather than a hard failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Snapshot format version.
    pub version: u32,

    /// The cart lines, in insertion order.
    pub lines: Vec<CartLine>,
}

impl CartSnapshot {
    /// Captures the current state of a cart.
    pub fn capture(cart: &Cart) -> Self {
        CartSnapshot {
            version: SNAPSHOT_VERSION,
            lines: cart.lines().to_vec(),
        }
    }

    /// Checks whether this snapshot uses the supported format version.
    pub fn is_supported(&self) -> bool {
        self.version == SNAPSHOT_VERSION
    }

    /// Converts the snapshot back into a live cart.
    pub fn into_cart(self) -> Cart {
        Cart::from_lines(self.lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            price_cents: 1000 * id as i64,
            image: Some(format!("https://img.example/{}.jpg", id)),
        }
    }

    #[test]
    fn test_add_new_product_appends_line_with_amount_one() {
        let mut cart = Cart::new();

        let amount = cart.add(record(1));

        assert_eq!(amount, 1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().amount, 1);
    }

    #[test]
    fn test_add_same_product_merges_into_one_line() {
        let mut cart = Cart::new();

        cart.add(record(1));
        let amount = cart.add(record(1));

        assert_eq!(amount, 2);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_increment_missing_line_is_not_in_cart() {
        let mut cart = Cart::new();

        let err = cart.increment(ProductId::new(5)).unwrap_err();
        assert_eq!(err, CartError::NotInCart(ProductId::new(5)));
    }

    #[test]
    fn test_set_amount_overwrites_existing_line() {
        let mut cart = Cart::new();
        cart.add(record(1));

        cart.set_amount(ProductId::new(1), 7).unwrap();

        assert_eq!(cart.line(ProductId::new(1)).unwrap().amount, 7);
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_lines() {
        let mut cart = Cart::new();
        cart.add(record(1));
        cart.add(record(2));
        cart.add(record(3));

        let removed = cart.remove(ProductId::new(2)).unwrap();
        assert_eq!(removed.product_id, ProductId::new(2));

        let ids: Vec<u64> = cart.lines().iter().map(|l| l.product_id.raw()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_line_changes_nothing() {
        let mut cart = Cart::new();
        cart.add(record(1));

        let err = cart.remove(ProductId::new(9)).unwrap_err();

        assert_eq!(err, CartError::NotInCart(ProductId::new(9)));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_from_lines_drops_duplicate_ids() {
        let first = CartLine::new(record(1));
        let mut dup = CartLine::new(record(1));
        dup.amount = 99;

        let cart = Cart::from_lines(vec![first.clone(), dup]);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().amount, 1);
    }

    #[test]
    fn test_snapshot_round_trip_preserves_ids_amounts_and_order() {
        let mut cart = Cart::new();
        cart.add(record(3));
        cart.add(record(1));
        cart.set_amount(ProductId::new(1), 4).unwrap();

        let snapshot = CartSnapshot::capture(&cart);
        assert!(snapshot.is_supported());

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: CartSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.into_cart(), cart);
    }

    #[test]
    fn test_snapshot_with_future_version_is_unsupported() {
        let snapshot = CartSnapshot {
            version: SNAPSHOT_VERSION + 1,
            lines: Vec::new(),
        };
        assert!(!snapshot.is_supported());
    }
}
