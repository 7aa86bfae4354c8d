//! # Inventory Error Types
//!
//! Error types for remote inventory lookups.
//!
//! The cart store collapses every variant below into a single generic
//! failure signal per operation; the distinctions exist for logging and for
//! hosts that talk to the client directly.

use thiserror::Error;

use trolley_core::ProductId;

/// Remote inventory lookup errors.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The configured base URL is not a valid URL.
    #[error("Invalid inventory base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The service answered with a non-success status.
    ///
    /// ## When This Occurs
    /// - Unknown product id (404)
    /// - Service-side failure (5xx)
    #[error("Inventory service returned status {status} for product {product_id}")]
    Status { product_id: ProductId, status: u16 },

    /// The request never produced a response.
    ///
    /// ## When This Occurs
    /// - Connection refused / DNS failure
    /// - Request timeout
    #[error("Inventory request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Inventory response decoding failed: {0}")]
    Decode(String),
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
