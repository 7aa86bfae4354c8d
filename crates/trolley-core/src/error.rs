//! # Error Types
//!
//! Domain-specific error types for trolley-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  trolley-core errors (this file)                                       │
//! │  └── CartError        - Cart invariant violations                     │
//! │                                                                         │
//! │  trolley-db errors (separate crate)                                    │
//! │  └── DbError          - Snapshot storage failures                      │
//! │                                                                         │
//! │  trolley-inventory errors (separate crate)                             │
//! │  └── InventoryError   - Remote lookup failures                         │
//! │                                                                         │
//! │  trolley-cart (separate crate)                                         │
//! │  └── StoreError       - Union of the above, absorbed into CartNotice   │
//! │                                                                         │
//! │  Flow: CartError / DbError / InventoryError → StoreError → CartNotice  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

/// Cart invariant violations.
///
/// Both variants are recoverable: the cart is left unchanged and the caller
/// is notified through the notice channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The requested amount would exceed the available stock.
    ///
    /// Raised when an increment finds the line already at (or past) the
    /// stock level, and when an explicit amount update asks for more than
    /// the stock level.
    #[error("requested {requested} of product {product_id}, only {available} in stock")]
    OutOfStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// The operation targeted a product with no line in the cart.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
