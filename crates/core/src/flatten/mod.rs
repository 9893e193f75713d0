//! Flattened service timeline domain

pub mod churn;
pub mod continuation;
pub mod merger;
pub mod ports;
pub mod service;
pub mod signup;

pub use churn::{ChurnExtractor, ChurnOrderPolicy};
pub use continuation::ContinuationExtractor;
pub use merger::UnionMerger;
pub use ports::*;
pub use service::FlattenService;
pub use signup::SignupExtractor;
