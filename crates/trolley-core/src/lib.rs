//! # trolley-core: Pure Cart Domain for Trolley
//!
//! This crate is the heart of Trolley. It contains the cart data model and
//! every invariant-enforcing mutation primitive, as pure code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trolley Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Host application / UI                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    trolley-cart (CartStore)                     │   │
//! │  │    add_product, remove_product, update_amount, state            │   │
//! │  └──────┬───────────────────────────────────────────────┬──────────┘   │
//! │         │                                               │              │
//! │  ┌──────▼──────────┐                       ┌────────────▼──────────┐   │
//! │  │   trolley-db    │                       │  trolley-inventory    │   │
//! │  │  snapshot save  │                       │  product/stock lookup │   │
//! │  └──────┬──────────┘                       └────────────┬──────────┘   │
//! │         │                                               │              │
//! │  ┌──────▼───────────────────────────────────────────────▼──────────┐   │
//! │  │               ★ trolley-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   cart    │  │   error   │  │  notice   │   │   │
//! │  │   │ ProductId │  │   Cart    │  │ CartError │  │ CartNotice│   │   │
//! │  │   │  Record   │  │ CartLine  │  │           │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, ProductRecord, StockLevel)
//! - [`cart`] - Cart state, cart lines, snapshots
//! - [`error`] - Domain error types
//! - [`notice`] - Signals emitted for rejected operations

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod notice;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use trolley_core::Cart` instead of
// `use trolley_core::cart::Cart`

pub use cart::{Cart, CartLine, CartSnapshot};
pub use error::{CartError, CartResult};
pub use notice::CartNotice;
pub use types::{ProductId, ProductRecord, StockLevel};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Well-known storage key the cart snapshot is persisted under.
///
/// The cart is a singleton per store (multi-cart support is out of scope),
/// so a single fixed key is sufficient. Hosts that need a different key can
/// pass their own to the snapshot store.
pub const DEFAULT_SNAPSHOT_KEY: &str = "trolley.cart";

/// Version stamped into every persisted snapshot.
///
/// A loaded snapshot with any other version is treated as absent, so a
/// future format change degrades to an empty cart instead of a parse error.
pub const SNAPSHOT_VERSION: u32 = 1;
