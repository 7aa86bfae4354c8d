//! # trolley-cart: The Cart Store
//!
//! Single owner of the live cart state. Exposes the four cart operations
//! (read, add, remove, update amount), keeps a durable snapshot in sync
//! with every accepted mutation, and broadcasts a notice for every
//! rejected one.
//!
//! ## Module Organization
//! ```text
//! trolley_cart/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── CartStore: the mutation protocol
//! └── error.rs        ◄─── StoreError: internal failure union
//! ```
//!
//! ## Mutation Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              One operation, start to finish                             │
//! │                                                                         │
//! │  lock cart ──► read state ──► inventory round trip ──► build candidate │
//! │                                                              │          │
//! │                              ┌───────────────────────────────┤          │
//! │                              ▼                               ▼          │
//! │                      invariant violated                persist snapshot │
//! │                      or lookup failed                        │          │
//! │                              │                               ▼          │
//! │                              ▼                         commit candidate │
//! │                      broadcast notice,                 as current state │
//! │                      state untouched                         │          │
//! │                              └───────────────┬───────────────┘          │
//! │                                              ▼                          │
//! │                                         unlock cart                     │
//! │                                                                         │
//! │  The lock is held across the inventory await, so overlapping           │
//! │  operations serialize and each one computes against a consistent       │
//! │  snapshot of the state (no lost updates).                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::CartStore;

// Re-export the domain surface so hosts only need this crate.
pub use trolley_core::{Cart, CartLine, CartNotice, ProductId, ProductRecord, StockLevel};
