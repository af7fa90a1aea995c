//! Shared application state for axum handlers.

use std::sync::Arc;

use resmap_app::ports::ResourceStore;
use resmap_app::services::resource_service::ResourceService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Resource list/create service.
    pub resource_service: Arc<ResourceService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            resource_service: Arc::clone(&self.resource_service),
        }
    }
}

impl<S> AppState<S>
where
    S: ResourceStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(resource_service: ResourceService<S>) -> Self {
        Self {
            resource_service: Arc::new(resource_service),
        }
    }
}
