//! Resource service — use-cases for listing and creating resources.

use resmap_domain::error::ResMapError;
use resmap_domain::resource::{NewResource, Resource};

use crate::ports::ResourceStore;

/// Application service proxying list/create onto the external store.
pub struct ResourceService<S> {
    store: S,
}

impl<S: ResourceStore> ResourceService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List all resources, exactly as the store returns them.
    ///
    /// # Errors
    ///
    /// Returns [`ResMapError::Store`] when the store reports a failure.
    #[tracing::instrument(skip(self))]
    pub async fn list_resources(&self) -> Result<Vec<Resource>, ResMapError> {
        self.store.list_all().await
    }

    /// Create a new resource after validating required-field presence.
    ///
    /// The store is not contacted when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`ResMapError::Validation`] if a required field is missing
    /// or falsy, or [`ResMapError::Store`] propagated from the store.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_resource(&self, draft: NewResource) -> Result<Resource, ResMapError> {
        draft.validate()?;
        self.store.insert(draft).await
    }
}
