//! Domain type definitions

pub mod timeline;

pub use timeline::*;
