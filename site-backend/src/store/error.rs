//! Store error types.

use thiserror::Error;

/// Errors from reads against the hosted store.
///
/// No variant is retried or recovered locally; every failure goes straight
/// to the caller (the HTTP layer decides how to present it).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store reported an error for a read (network, auth, malformed
    /// filter). `detail` carries the raw error payload.
    #[error("store query failed: {detail}")]
    QueryFailed { detail: String },

    /// A by-slug lookup matched zero rows.
    #[error("no row in '{table}' with slug '{slug}'")]
    NotFound { table: &'static str, slug: String },

    /// A by-slug lookup matched more than one row. Slug uniqueness is owned
    /// by the store, so this is a data-integrity violation upstream.
    #[error("{count} rows in '{table}' share slug '{slug}'")]
    AmbiguousResult {
        table: &'static str,
        slug: String,
        count: usize,
    },
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::QueryFailed {
            detail: err.to_string(),
        }
    }
}
