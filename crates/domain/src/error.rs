//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ResMapError`]
//! at the boundary via `#[from]` / explicit `From` impls.

/// Top-level error for resmap operations.
#[derive(Debug, thiserror::Error)]
pub enum ResMapError {
    /// Client input failed the required-field presence check.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The external resource store reported a failure.
    #[error("store error")]
    Store(#[from] StoreError),
}

/// Errors raised while checking domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One of `name`, `latitude`, `longitude` is absent or falsy.
    #[error("Missing required fields")]
    MissingRequiredFields,
}

/// Error descriptor relayed from the external resource store.
///
/// Carries the store's message untouched so callers see exactly what the
/// backend reported.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Wrap a store-reported message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The store's error text, unmodified.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
