//! # Store Error Type
//!
//! Internal failure union for cart operations.
//!
//! The public operations never return this type: every failure is absorbed
//! and surfaced as a [`trolley_core::CartNotice`]. The union exists so the
//! store can log the real cause before collapsing it. Invariant violations
//! keep their identity (out-of-stock, not-in-cart); everything else becomes
//! the operation's generic failure signal.

use thiserror::Error;

use trolley_core::CartError;
use trolley_db::DbError;
use trolley_inventory::InventoryError;

/// Everything that can go wrong inside a single cart operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart invariant rejected the mutation.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The inventory lookup failed.
    #[error("Inventory lookup failed: {0}")]
    Inventory(#[from] InventoryError),

    /// The durable snapshot write (or startup load) failed.
    #[error("Snapshot storage failed: {0}")]
    Db(#[from] DbError),
}
