//! Churn extractor - terminal events injected from the order log
//!
//! Churn rows come from orders, not snapshots: a cancelled service has
//! usually already vanished from the active feed, so the order log is the
//! only witness. Snapshot data, when still present, only enriches the row
//! with the service name and customer.

use std::collections::BTreeMap;

use flatline_domain::{
    ActiveSnapshotRecord, Flag, FlattenedEvent, OrderCategory, OrderRecord, ServiceStatus,
};

/// Which order rows count as churn events.
///
/// The filter is an explicit, named policy: nothing passes all order rows
/// through as churn silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChurnOrderPolicy {
    /// Keep only orders whose `order_type_l2` parses to the churn category
    #[default]
    ChurnOrdersOnly,

    /// Trust the caller: the feed was already filtered to churn orders
    /// upstream, so every row is emitted
    PrefilteredFeed,
}

impl ChurnOrderPolicy {
    fn retains(self, order: &OrderRecord) -> bool {
        match self {
            Self::ChurnOrdersOnly => {
                OrderCategory::parse(order.order_type_l2.as_deref()) == Some(OrderCategory::Churn)
            }
            Self::PrefilteredFeed => true,
        }
    }
}

/// Extractor for churn-type order events
pub struct ChurnExtractor {
    policy: ChurnOrderPolicy,
}

impl ChurnExtractor {
    /// Create an extractor with the given churn filter policy
    pub fn new(policy: ChurnOrderPolicy) -> Self {
        Self { policy }
    }

    /// Emit one inactive/terminal row per retained order.
    ///
    /// Orders are left-correlated with a deduplicated projection of the
    /// snapshots onto `(service_id, customer_id, service_name)`. A missing
    /// match is not an error: the service is simply unknown to the active
    /// registry and the enrichment fields stay `None`.
    pub fn extract(
        &self,
        orders: &[OrderRecord],
        snapshots: &[ActiveSnapshotRecord],
    ) -> Vec<FlattenedEvent> {
        let registry = service_projection(snapshots);

        orders
            .iter()
            .filter(|order| self.policy.retains(order))
            .map(|order| {
                let known = registry.get(order.service_id.as_str());
                FlattenedEvent {
                    date_key: order.report_date,
                    service_id: order.service_id.clone(),
                    service_name: known.map(|snap| snap.service_name.clone()),
                    customer_id: known.map(|snap| snap.customer_id.clone()),
                    is_new_signup: Flag::No,
                    is_transfer: None,
                    is_churn: Flag::Yes,
                    current_status: ServiceStatus::Inactive,
                }
            })
            .collect()
    }
}

/// Deduplicate the snapshot feed down to one identity per service.
///
/// When a service carries more than one distinct `(service_name,
/// customer_id)` pair, the pair from the earliest observation wins so the
/// enrichment is deterministic.
fn service_projection(
    snapshots: &[ActiveSnapshotRecord],
) -> BTreeMap<&str, &ActiveSnapshotRecord> {
    let mut registry: BTreeMap<&str, &ActiveSnapshotRecord> = BTreeMap::new();
    for snap in snapshots {
        registry
            .entry(snap.service_id.as_str())
            .and_modify(|current| {
                let current_key =
                    (current.snapshot_date, &current.service_name, &current.customer_id);
                let candidate_key = (snap.snapshot_date, &snap.service_name, &snap.customer_id);
                if candidate_key < current_key {
                    *current = snap;
                }
            })
            .or_insert(snap);
    }
    registry
}
