//! # resmap-domain
//!
//! Pure domain model for the resmap resource-map API.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`ResourceId`](id::ResourceId), error conventions
//! - Define the **Resource** entity (a named geolocated point with an optional
//!   classification) and the **`NewResource`** draft submitted by clients
//! - Contain all invariant enforcement (the required-field presence check)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod resource;
