//! # Domain Types
//!
//! Core domain types shared across the Trolley workspace.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ProductId     │   │  ProductRecord  │   │   StockLevel    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u64 newtype    │   │  id             │   │  amount (i64)   │       │
//! │  │  cart primary   │   │  title          │   │                 │       │
//! │  │  key            │   │  price_cents    │   │  max quantity   │       │
//! │  │                 │   │  image          │   │  purchasable    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Product Id
// =============================================================================

/// Opaque product identifier.
///
/// The inventory service addresses products by integer id
/// (`GET /products/{id}`), so the identifier is a transparent newtype over
/// `u64`. Within a cart it acts as the primary key: at most one line per id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Creates a product id from its raw integer form.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ProductId(raw)
    }

    /// Returns the raw integer form.
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(raw: u64) -> Self {
        ProductId(raw)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Product Record
// =============================================================================

/// Product metadata as resolved by the inventory service.
///
/// A record is frozen into a cart line when the product is first added and
/// never re-validated afterwards; only the stock amount is consulted on
/// later mutations. Price is carried in cents as opaque payload; no
/// arithmetic is performed on it anywhere in this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Product identifier, unique across the inventory.
    pub id: ProductId,

    /// Display name shown by the UI layer.
    pub title: String,

    /// Unit price in cents at the time the product was resolved.
    pub price_cents: i64,

    /// Optional product image URL.
    pub image: Option<String>,
}

// =============================================================================
// Stock Level
// =============================================================================

/// Current stock level for a product.
///
/// This is the exact wire shape of the inventory service's stock endpoint
/// (`{ "amount": n }`). The amount is the maximum quantity a cart line may
/// hold after any successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// Units currently available.
    pub amount: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display_is_raw() {
        let id = ProductId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.raw(), 42);
    }

    #[test]
    fn test_product_id_serializes_transparently() {
        let id = ProductId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");

        let back: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_product_record_field_names_are_camel_case() {
        let record = ProductRecord {
            id: ProductId::new(1),
            title: "Tênis de Caminhada Leve Confortável".to_string(),
            price_cents: 17990,
            image: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("priceCents").is_some());
        assert!(json.get("price_cents").is_none());
    }
}
