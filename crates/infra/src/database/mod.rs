//! SQLite-backed implementations of the core ports

pub mod manager;
pub mod order_repository;
pub mod snapshot_repository;
pub mod timeline_repository;

pub use manager::DbManager;
pub use order_repository::SqliteOrderFeed;
pub use snapshot_repository::SqliteSnapshotFeed;
pub use timeline_repository::SqliteTimelineSink;
