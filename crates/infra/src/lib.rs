//! # Flatline Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite implementations of the snapshot/order feeds
//! - The full-replace writer for the materialized timeline
//! - Connection pool management and schema provisioning
//!
//! ## Architecture
//! - Implements traits defined in `flatline-core`
//! - Depends on `flatline-domain` and `flatline-core`
//! - Contains all "impure" code (I/O)

pub mod database;
pub mod errors;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
