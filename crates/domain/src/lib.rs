//! # Flatline Domain
//!
//! Business domain types and models for the flattened service timeline.
//!
//! This crate contains:
//! - Domain data types (ActiveSnapshotRecord, OrderRecord, FlattenedEvent)
//! - Domain error types and Result definitions
//! - Domain constants (wire strings, table names)
//!
//! ## Architecture
//! - No dependencies on other Flatline crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
