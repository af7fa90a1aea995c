//! Resource — a named geolocated point with an optional classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ResMapError, ValidationError};
use crate::id::ResourceId;

/// A persisted resource row, as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Optional classification (`"shelter"`, `"water"`, …). Serialized as
    /// `type`, the column name the store uses.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Row timestamp stamped by the store; absent when the backing table
    /// has no such column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// An unpersisted resource draft, as submitted by a create request.
///
/// The store assigns `id` (and `created_at`) when the draft is inserted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResource {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl NewResource {
    /// Create a builder for constructing a [`NewResource`].
    #[must_use]
    pub fn builder() -> NewResourceBuilder {
        NewResourceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// A `0` coordinate or empty name counts as missing, not as a valid
    /// value. Absent and falsy fields are rejected alike.
    ///
    /// # Errors
    ///
    /// Returns [`ResMapError::Validation`] when any required field is
    /// missing or falsy.
    pub fn validate(&self) -> Result<(), ResMapError> {
        if self.name.is_empty() || self.latitude == 0.0 || self.longitude == 0.0 {
            return Err(ValidationError::MissingRequiredFields.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewResource`].
///
/// Unset required fields default to their falsy value (`""` / `0.0`) so
/// that [`NewResource::validate`] rejects them the same way it rejects
/// explicit zeroes.
#[derive(Debug, Default)]
pub struct NewResourceBuilder {
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    kind: Option<String>,
}

impl NewResourceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    #[must_use]
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewResource`].
    ///
    /// # Errors
    ///
    /// Returns [`ResMapError::Validation`] if `name`, `latitude`, or
    /// `longitude` is missing or falsy.
    pub fn build(self) -> Result<NewResource, ResMapError> {
        let draft = NewResource {
            name: self.name.unwrap_or_default(),
            latitude: self.latitude.unwrap_or_default(),
            longitude: self.longitude.unwrap_or_default(),
            kind: self.kind,
        };
        draft.validate()?;
        Ok(draft)
    }
}
