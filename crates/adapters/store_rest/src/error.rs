//! Store-specific error type wrapping transport and backend failures.

use resmap_domain::error::{ResMapError, StoreError};

/// Errors originating from the REST store adapter.
#[derive(Debug, thiserror::Error)]
pub enum RestStoreError {
    /// The HTTP call itself failed (connectivity, TLS, decode).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an error descriptor.
    #[error("{0}")]
    Backend(String),
}

impl From<RestStoreError> for ResMapError {
    fn from(err: RestStoreError) -> Self {
        StoreError::new(err.to_string()).into()
    }
}
