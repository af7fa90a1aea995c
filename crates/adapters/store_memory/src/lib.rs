//! # resmap-adapter-store-memory
//!
//! In-process implementation of the store port.
//!
//! ## Responsibilities
//! - Implement [`ResourceStore`](resmap_app::ports::ResourceStore) against
//!   a plain in-memory row list — no backend required
//! - Assign ids and row timestamps the way the managed backend would
//! - Support **fault injection**: once armed, both operations fail with
//!   the injected message, which lets tests exercise the error relay path
//!
//! ## Dependency rule
//! Depends on `resmap-app` (for the port trait) and `resmap-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

use std::sync::Mutex;

use resmap_app::ports::ResourceStore;
use resmap_domain::error::{ResMapError, StoreError};
use resmap_domain::id::ResourceId;
use resmap_domain::resource::{NewResource, Resource};

/// In-memory store keeping rows in insertion order.
#[derive(Default)]
pub struct MemoryResourceStore {
    rows: Mutex<Vec<Resource>>,
    fault: Mutex<Option<String>>,
}

impl MemoryResourceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm fault injection: every subsequent operation fails with a store
    /// error carrying `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fault.lock().expect("fault lock poisoned") = Some(message.into());
    }

    /// Disarm fault injection.
    pub fn recover(&self) {
        *self.fault.lock().expect("fault lock poisoned") = None;
    }

    fn check_fault(&self) -> Result<(), ResMapError> {
        if let Some(message) = self.fault.lock().expect("fault lock poisoned").as_ref() {
            return Err(StoreError::new(message.clone()).into());
        }
        Ok(())
    }
}

impl ResourceStore for MemoryResourceStore {
    async fn list_all(&self) -> Result<Vec<Resource>, ResMapError> {
        self.check_fault()?;
        Ok(self.rows.lock().expect("rows lock poisoned").clone())
    }

    async fn insert(&self, draft: NewResource) -> Result<Resource, ResMapError> {
        self.check_fault()?;
        let row = Resource {
            id: ResourceId::new(),
            name: draft.name,
            latitude: draft.latitude,
            longitude: draft.longitude,
            kind: draft.kind,
            created_at: Some(chrono::Utc::now()),
        };
        self.rows
            .lock()
            .expect("rows lock poisoned")
            .push(row.clone());
        Ok(row)
    }
}
