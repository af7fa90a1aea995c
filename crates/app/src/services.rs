//! Application services — one use-case struct per aggregate.

pub mod resource_service;
