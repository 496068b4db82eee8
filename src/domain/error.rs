//! Domain error types for the flight search data layer.
//!
//! These errors represent domain-level failures that can occur during
//! catalog and favorite operations. They are more specific than
//! infrastructure errors and can be handled appropriately by callers.

use thiserror::Error;

/// Domain errors related to the airport catalog.
///
/// Catalog initialization failures are fatal: the application cannot start
/// without a usable snapshot, so these are surfaced as startup errors and
/// never retried.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Bundled airport snapshot is corrupt: {0}")]
    CorruptSnapshot(#[from] serde_json::Error),

    #[error("Catalog operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Domain errors related to favorite route operations.
#[derive(Debug, Error)]
pub enum FavoriteError {
    /// The underlying store rejected the write. The caller decides whether
    /// to retry the user action; no automatic retry happens here.
    #[error("Favorite could not be stored: {0}")]
    Storage(#[from] anyhow::Error),
}
