//! Mock feed implementations for testing
//!
//! Provides in-memory mocks for all core ports, enabling deterministic
//! pipeline tests without database dependencies.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use flatline_core::{OrderFeed, SnapshotFeed, TimelineSink};
use flatline_domain::{
    ActiveSnapshotRecord, FlattenedEvent, OrderRecord, Result as DomainResult,
};

/// In-memory mock for `SnapshotFeed`.
///
/// Stores a fixed set of snapshot observations and serves them verbatim.
#[derive(Default, Clone)]
pub struct MockSnapshotFeed {
    snapshots: Arc<Vec<ActiveSnapshotRecord>>,
}

impl MockSnapshotFeed {
    /// Create a new mock seeded with the provided snapshots.
    pub fn new(snapshots: Vec<ActiveSnapshotRecord>) -> Self {
        Self { snapshots: Arc::new(snapshots) }
    }

    /// Convenience helper for adding a single snapshot to the mock.
    pub fn with_snapshot(mut self, snapshot: ActiveSnapshotRecord) -> Self {
        Arc::make_mut(&mut self.snapshots).push(snapshot);
        self
    }
}

#[async_trait]
impl SnapshotFeed for MockSnapshotFeed {
    async fn load_snapshots(&self) -> DomainResult<Vec<ActiveSnapshotRecord>> {
        Ok(self.snapshots.as_ref().clone())
    }
}

/// In-memory mock for `OrderFeed`.
#[derive(Default, Clone)]
pub struct MockOrderFeed {
    orders: Arc<Vec<OrderRecord>>,
}

impl MockOrderFeed {
    /// Create a new mock seeded with the provided orders.
    pub fn new(orders: Vec<OrderRecord>) -> Self {
        Self { orders: Arc::new(orders) }
    }

    /// Convenience helper for adding a single order to the mock.
    pub fn with_order(mut self, order: OrderRecord) -> Self {
        Arc::make_mut(&mut self.orders).push(order);
        self
    }
}

#[async_trait]
impl OrderFeed for MockOrderFeed {
    async fn load_orders(&self) -> DomainResult<Vec<OrderRecord>> {
        Ok(self.orders.as_ref().clone())
    }
}

/// Capturing mock for `TimelineSink`.
///
/// Records every published timeline so tests can assert on replacement
/// semantics as well as row content.
#[derive(Default)]
pub struct MockTimelineSink {
    published: Mutex<Vec<Vec<FlattenedEvent>>>,
}

impl MockTimelineSink {
    /// Number of times the timeline was replaced.
    pub fn publish_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }

    /// The most recently published timeline, if any.
    pub fn last_published(&self) -> Option<Vec<FlattenedEvent>> {
        self.published.lock().unwrap().last().cloned()
    }

    /// All published timelines in order.
    pub fn all_published(&self) -> Vec<Vec<FlattenedEvent>> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl TimelineSink for MockTimelineSink {
    async fn replace_timeline(&self, events: &[FlattenedEvent]) -> DomainResult<()> {
        self.published.lock().unwrap().push(events.to_vec());
        Ok(())
    }
}
