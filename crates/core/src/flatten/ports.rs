//! Port interfaces for the timeline refresh
//!
//! The two source collections and the output collection are owned by
//! external collaborators; the pipeline only bulk-reads the former and
//! bulk-writes the latter through these traits.

use async_trait::async_trait;
use flatline_domain::{ActiveSnapshotRecord, FlattenedEvent, OrderRecord, Result};

/// Trait for bulk-reading the active-service snapshot collection
#[async_trait]
pub trait SnapshotFeed: Send + Sync {
    /// Load every snapshot observation available to this run
    async fn load_snapshots(&self) -> Result<Vec<ActiveSnapshotRecord>>;
}

/// Trait for bulk-reading the order log
#[async_trait]
pub trait OrderFeed: Send + Sync {
    /// Load every order record available to this run
    async fn load_orders(&self) -> Result<Vec<OrderRecord>>;
}

/// Trait for publishing the merged timeline
///
/// The output has no independent lifecycle: it is destroyed and rebuilt on
/// every refresh. Implementations must replace the whole collection
/// atomically - a partially written timeline must never become visible.
#[async_trait]
pub trait TimelineSink: Send + Sync {
    /// Replace the output collection with exactly these rows
    async fn replace_timeline(&self, events: &[FlattenedEvent]) -> Result<()>;
}
