//! Signup extractor - classifies each service's earliest observation
//!
//! For every service in the snapshot feed, the earliest observation date is
//! its signup event. Matched order rows decide whether the signup was a
//! transfer-in or organic-new; an absent or unrecognized order leaves the
//! transfer flag unknown rather than negative.

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashSet;
use flatline_domain::{
    ActiveSnapshotRecord, Flag, FlattenedEvent, OrderCategory, OrderRecord, ServiceStatus,
};

/// Extractor for first-observation signup events
pub struct SignupExtractor;

impl SignupExtractor {
    /// Emit one signup row per distinct
    /// `(service_id, service_name, customer_id, order_type_l2)` combination
    /// observed at each service's first snapshot date.
    ///
    /// # Algorithm
    /// 1. Group snapshots by `service_id`; the minimum `snapshot_date` per
    ///    group anchors the signup.
    /// 2. Left-correlate with orders on `service_id`. This is a genuine
    ///    fan-out join: each matching order row produces its own output row,
    ///    zero matches produce one row carrying the data-gap marker.
    /// 3. Classify: "transfer" orders mark `is_transfer = Yes`, "new" orders
    ///    mark `No`, everything else (including no order) stays `None`.
    ///
    /// Groups are walked in sorted key order so output is deterministic.
    pub fn extract(
        snapshots: &[ActiveSnapshotRecord],
        orders: &[OrderRecord],
    ) -> Vec<FlattenedEvent> {
        let mut by_service: BTreeMap<&str, Vec<&ActiveSnapshotRecord>> = BTreeMap::new();
        for snap in snapshots {
            by_service.entry(snap.service_id.as_str()).or_default().push(snap);
        }

        let mut orders_by_service: BTreeMap<&str, Vec<&OrderRecord>> = BTreeMap::new();
        for order in orders {
            orders_by_service.entry(order.service_id.as_str()).or_default().push(order);
        }

        let mut seen: AHashSet<(&str, &str, &str, Option<&str>)> = AHashSet::new();
        let mut events = Vec::new();

        for (service_id, group) in &by_service {
            let Some(first_date) = group.iter().map(|snap| snap.snapshot_date).min() else {
                continue;
            };

            // Distinct identity pairs observed on the earliest date. Usually
            // one, but the feed enforces no uniqueness.
            let identities: BTreeSet<(&str, &str)> = group
                .iter()
                .filter(|snap| snap.snapshot_date == first_date)
                .map(|snap| (snap.service_name.as_str(), snap.customer_id.as_str()))
                .collect();

            let matched = orders_by_service.get(service_id).map(Vec::as_slice).unwrap_or(&[]);

            for (service_name, customer_id) in identities {
                if matched.is_empty() {
                    if seen.insert((*service_id, service_name, customer_id, None)) {
                        events.push(signup_event(
                            first_date,
                            service_id,
                            service_name,
                            customer_id,
                            None,
                        ));
                    }
                    continue;
                }

                for order in matched {
                    let key =
                        (*service_id, service_name, customer_id, order.order_type_l2.as_deref());
                    if seen.insert(key) {
                        events.push(signup_event(
                            first_date,
                            service_id,
                            service_name,
                            customer_id,
                            transfer_flag(order),
                        ));
                    }
                }
            }
        }

        events
    }
}

fn signup_event(
    date_key: chrono::NaiveDate,
    service_id: &str,
    service_name: &str,
    customer_id: &str,
    is_transfer: Option<Flag>,
) -> FlattenedEvent {
    FlattenedEvent {
        date_key,
        service_id: service_id.to_string(),
        service_name: Some(service_name.to_string()),
        customer_id: Some(customer_id.to_string()),
        is_new_signup: Flag::Yes,
        is_transfer,
        is_churn: Flag::No,
        current_status: ServiceStatus::Active,
    }
}

fn transfer_flag(order: &OrderRecord) -> Option<Flag> {
    match OrderCategory::parse(order.order_type_l2.as_deref()) {
        Some(OrderCategory::Transfer) => Some(Flag::Yes),
        Some(OrderCategory::New) => Some(Flag::No),
        // Ambiguous categories resolve to the data-gap marker, not "No"
        _ => None,
    }
}
