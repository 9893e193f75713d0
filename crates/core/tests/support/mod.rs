//! Shared support for core integration tests

pub mod feeds;
