//! # Cart Notices
//!
//! Signals emitted by the cart store when an operation is rejected.
//!
//! ## Delivery Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Notice Flow                                       │
//! │                                                                         │
//! │  CartStore operation fails                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartNotice broadcast ──► UI notification layer (out of scope)         │
//! │                                                                         │
//! │  • Exactly one notice per rejected operation                           │
//! │  • Never a notice for an accepted operation                            │
//! │  • Never a notice for the silent zero/negative-amount guard            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Distinct failure causes inside one operation (product lookup failed,
//! network error, storage write failed) collapse into the operation's
//! generic `*Failed` notice. The UI layer only ever learns *which operation*
//! could not be applied, not why.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Signal describing a rejected cart operation.
///
/// Serializable so the glue layer can forward it to a notification surface
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum CartNotice {
    /// The requested amount exceeds the available stock.
    OutOfStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// A removal or amount update targeted a product not in the cart.
    NotInCart { product_id: ProductId },

    /// Adding the product failed for any other reason.
    AddFailed { product_id: ProductId },

    /// Updating the product amount failed for any other reason.
    UpdateFailed { product_id: ProductId },

    /// Removing the product failed for any other reason.
    RemoveFailed { product_id: ProductId },
}

impl CartNotice {
    /// The product the rejected operation targeted.
    pub fn product_id(&self) -> ProductId {
        match *self {
            CartNotice::OutOfStock { product_id, .. }
            | CartNotice::NotInCart { product_id }
            | CartNotice::AddFailed { product_id }
            | CartNotice::UpdateFailed { product_id }
            | CartNotice::RemoveFailed { product_id } => product_id,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
