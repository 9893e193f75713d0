//! # Flatline Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The three timeline extractors and the union merger
//! - Port/adapter interfaces (traits) for the external collaborators
//! - The orchestrating refresh service
//!
//! ## Architecture Principles
//! - Only depends on `flatline-domain`
//! - No database or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod flatten;

// Re-export specific items to avoid ambiguity
pub use flatten::ports::{OrderFeed, SnapshotFeed, TimelineSink};
pub use flatten::{
    ChurnExtractor, ChurnOrderPolicy, ContinuationExtractor, FlattenService, SignupExtractor,
    UnionMerger,
};
