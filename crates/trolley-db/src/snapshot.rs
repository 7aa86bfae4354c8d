//! # Snapshot Store
//!
//! The durable-storage seam for the cart, and its SQLite implementation.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    cart_snapshots table                                 │
//! │                                                                         │
//! │  key (PK)       │ payload                          │ updated_at        │
//! │  ───────────────┼──────────────────────────────────┼─────────────────  │
//! │  trolley.cart   │ {"version":1,"lines":[...]}      │ 2026-08-06T...    │
//! │                                                                         │
//! │  • One row per storage key                                             │
//! │  • Every save is a full overwrite (upsert), never incremental          │
//! │  • A row that fails to decode, or carries an unknown version, loads    │
//! │    as None: parse failure means "no snapshot"                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use trolley_core::CartSnapshot;

// =============================================================================
// Snapshot Store Trait
// =============================================================================

/// Abstraction over durable cart snapshot storage.
///
/// The cart store is generic over this trait so tests can substitute an
/// in-memory implementation. Implementations must treat `save` as a full
/// overwrite of the previous snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Loads the last saved snapshot.
    ///
    /// Returns `Ok(None)` if no snapshot was ever saved, or if the stored
    /// payload cannot be decoded (an unreadable snapshot degrades to an
    /// empty cart rather than an error).
    fn load(&self) -> impl Future<Output = DbResult<Option<CartSnapshot>>> + Send;

    /// Overwrites the stored snapshot with `snapshot`.
    fn save(&self, snapshot: &CartSnapshot) -> impl Future<Output = DbResult<()>> + Send;
}

// =============================================================================
// SQLite Implementation
// =============================================================================

/// Snapshot store backed by the `cart_snapshots` table.
///
/// ## Usage
/// ```rust,ignore
/// let store = db.snapshots();
/// store.save(&CartSnapshot::capture(&cart)).await?;
/// let restored = store.load().await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteSnapshotStore {
    pool: SqlitePool,
    key: String,
}

impl SqliteSnapshotStore {
    /// Creates a snapshot store over `pool`, bound to one storage key.
    pub fn new(pool: SqlitePool, key: impl Into<String>) -> Self {
        SqliteSnapshotStore {
            pool,
            key: key.into(),
        }
    }

    /// The storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn load(&self) -> impl Future<Output = DbResult<Option<CartSnapshot>>> + Send {
        async move {
            let payload: Option<String> =
                sqlx::query_scalar("SELECT payload FROM cart_snapshots WHERE key = ?1")
                    .bind(&self.key)
                    .fetch_optional(&self.pool)
                    .await?;

            let Some(payload) = payload else {
                debug!(key = %self.key, "No snapshot stored");
                return Ok(None);
            };

            let snapshot: CartSnapshot = match serde_json::from_str(&payload) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!(key = %self.key, error = %e, "Discarding undecodable snapshot");
                    return Ok(None);
                }
            };

            if !snapshot.is_supported() {
                warn!(
                    key = %self.key,
                    version = snapshot.version,
                    "Discarding snapshot with unsupported version"
                );
                return Ok(None);
            }

            debug!(key = %self.key, lines = snapshot.lines.len(), "Snapshot loaded");
            Ok(Some(snapshot))
        }
    }

    fn save(&self, snapshot: &CartSnapshot) -> impl Future<Output = DbResult<()>> + Send {
        async move {
            let payload = serde_json::to_string(snapshot)?;
            let updated_at = Utc::now().to_rfc3339();

            sqlx::query(
                r#"
                INSERT INTO cart_snapshots (key, payload, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    payload = excluded.payload,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(&self.key)
            .bind(&payload)
            .bind(&updated_at)
            .execute(&self.pool)
            .await?;

            debug!(key = %self.key, lines = snapshot.lines.len(), "Snapshot saved");
            Ok(())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
