//! # trolley-db: Snapshot Persistence for Trolley
//!
//! Durable storage for the cart snapshot, backed by SQLite via sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trolley Data Flow                                │
//! │                                                                         │
//! │  CartStore (accepted mutation)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     trolley-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │ SqliteSnapshotStore│  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │◄───│   (snapshot.rs)    │  │ (embedded) │  │   │
//! │  │   │   SqlitePool  │    │   load / save      │  │ 001_init   │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart_snapshots table (one row per storage key, full overwrite)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`snapshot`] - The [`SnapshotStore`] trait and its SQLite implementation

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use snapshot::{SnapshotStore, SqliteSnapshotStore};
