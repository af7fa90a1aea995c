//! Store port — access to the external `resources` collection.

use std::future::Future;

use resmap_domain::error::ResMapError;
use resmap_domain::resource::{NewResource, Resource};

/// Client for the external resource store.
///
/// The store owns persistence, indexing, and the `resources` table schema;
/// implementations only relay the two operations this system proxies.
/// Every failure the backend reports must surface as
/// [`ResMapError::Store`] carrying the backend's message verbatim.
pub trait ResourceStore {
    /// Select all rows from the `resources` collection.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Resource>, ResMapError>> + Send;

    /// Insert one row and return the inserted row, including the
    /// store-assigned id.
    fn insert(
        &self,
        draft: NewResource,
    ) -> impl Future<Output = Result<Resource, ResMapError>> + Send;
}
