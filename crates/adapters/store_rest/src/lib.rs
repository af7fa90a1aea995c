//! # resmap-adapter-store-rest
//!
//! Store adapter for a hosted database backend, using
//! [reqwest](https://docs.rs/reqwest) against the backend's
//! PostgREST-style HTTP interface.
//!
//! ## Responsibilities
//! - Implement the [`ResourceStore`](resmap_app::ports::ResourceStore)
//!   port defined in `resmap-app`
//! - Shape the two proxied operations as backend requests: select-all on
//!   the `resources` collection, and a single-row insert that asks for the
//!   inserted row back
//! - Surface backend-reported errors with their message text untouched
//!
//! ## Dependency rule
//! Depends on `resmap-app` (for the port trait) and `resmap-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod config;
pub mod error;
pub mod store;

pub use config::Config;
pub use store::RestResourceStore;
