//! # resmap-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that store adapters must implement
//!   (driven/outbound port): [`ports::ResourceStore`] — select-all and
//!   single-row insert on the `resources` collection
//! - Define the **driving/inbound port** as a use-case struct:
//!   [`services::resource_service::ResourceService`] — list, create
//! - Orchestrate domain objects without knowing *how* the store talks to
//!   its backend
//!
//! ## Dependency rule
//! Depends on `resmap-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
