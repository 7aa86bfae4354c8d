//! # trolley-inventory: Remote Inventory Client for Trolley
//!
//! Product metadata and stock lookups against the inventory service.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Lookup Flow                               │
//! │                                                                         │
//! │  CartStore operation                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 trolley-inventory (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   InventoryClient (trait) ◄── HttpInventoryClient              │   │
//! │  │     product(id)                 GET {base}/products/{id}        │   │
//! │  │     stock(id)                   GET {base}/stock/{id}           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Inventory service (JSON over HTTP)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups can fail (not-found, transport, decode) but are never retried or
//! cancelled here; the cart store decides what a failure means for the cart.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{HttpInventoryClient, InventoryClient, InventoryConfig};
pub use error::{InventoryError, InventoryResult};
