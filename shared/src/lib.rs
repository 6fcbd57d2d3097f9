//! Shared types and models for the agricultural intelligence platform
//!
//! This crate contains the wire contracts of the upstream data sources, the
//! integrated dashboard views and the report ingestion types, shared between
//! the backend and any dashboard client.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
