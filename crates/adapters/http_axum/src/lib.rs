//! # resmap-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`GET /api/resources`, `POST /api/resources`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, including the uniform
//!   `{"error": message}` envelope for failures
//! - Permit cross-origin requests from any origin
//!
//! ## Dependency rule
//! Depends on `resmap-app` (for the port trait and service) and
//! `resmap-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
