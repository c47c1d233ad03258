//! Envmon Core - Domain models, dataset loader, and query engine
//!
//! This crate contains the in-memory query engine for environmental samples:
//! loading and caching the dataset, validating filter values, filtering, and
//! pagination. It has no knowledge of the HTTP transport.

pub mod error;
pub mod loader;
pub mod models;
pub mod query;

pub use error::{EnvmonError, Result};
