//! Continuation extractor - routine "still active" observations
//!
//! Every snapshot observation beyond a service's first becomes a
//! continuation row. Ranking is an explicit sort-then-index per group, not
//! a database windowing primitive.

use std::collections::BTreeMap;

use flatline_domain::{ActiveSnapshotRecord, Flag, FlattenedEvent, ServiceStatus};

/// Extractor for post-signup activity observations
pub struct ContinuationExtractor;

impl ContinuationExtractor {
    /// Emit one row per snapshot observation whose rank within its service
    /// is greater than 1.
    ///
    /// Observations are ordered by `snapshot_date` ascending; ties carry no
    /// disambiguating field, so the stable secondary key
    /// `(service_name, customer_id)` keeps the ranking deterministic.
    pub fn extract(snapshots: &[ActiveSnapshotRecord]) -> Vec<FlattenedEvent> {
        let mut by_service: BTreeMap<&str, Vec<&ActiveSnapshotRecord>> = BTreeMap::new();
        for snap in snapshots {
            by_service.entry(snap.service_id.as_str()).or_default().push(snap);
        }

        let mut events = Vec::new();
        for group in by_service.values_mut() {
            group.sort_by_key(|snap| {
                (snap.snapshot_date, snap.service_name.as_str(), snap.customer_id.as_str())
            });

            for snap in group.iter().skip(1) {
                events.push(FlattenedEvent {
                    date_key: snap.snapshot_date,
                    service_id: snap.service_id.clone(),
                    service_name: Some(snap.service_name.clone()),
                    customer_id: Some(snap.customer_id.clone()),
                    is_new_signup: Flag::No,
                    is_transfer: None,
                    is_churn: Flag::No,
                    current_status: ServiceStatus::Active,
                });
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snap(d: NaiveDate, service_id: &str, name: &str, customer: &str) -> ActiveSnapshotRecord {
        ActiveSnapshotRecord {
            snapshot_date: d,
            service_id: service_id.to_string(),
            service_name: name.to_string(),
            customer_id: customer.to_string(),
        }
    }

    #[test]
    fn emits_every_observation_after_the_first() {
        // AC: continuation count = observations - 1
        let snapshots = vec![
            snap(date(2023, 1, 1), "S1", "Fibre 100", "C1"),
            snap(date(2023, 2, 1), "S1", "Fibre 100", "C1"),
            snap(date(2023, 3, 1), "S1", "Fibre 100", "C1"),
        ];

        let events = ContinuationExtractor::extract(&snapshots);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date_key, date(2023, 2, 1));
        assert_eq!(events[1].date_key, date(2023, 3, 1));
    }

    #[test]
    fn continuation_rows_carry_fixed_flags() {
        let snapshots = vec![
            snap(date(2023, 1, 1), "S1", "Fibre 100", "C1"),
            snap(date(2023, 2, 1), "S1", "Fibre 100", "C1"),
        ];

        let events = ContinuationExtractor::extract(&snapshots);

        assert_eq!(events.len(), 1);
        let row = &events[0];
        assert_eq!(row.is_new_signup, Flag::No);
        assert_eq!(row.is_transfer, None);
        assert_eq!(row.is_churn, Flag::No);
        assert_eq!(row.current_status, ServiceStatus::Active);
    }

    #[test]
    fn single_observation_emits_nothing() {
        let snapshots = vec![snap(date(2023, 1, 1), "S1", "Fibre 100", "C1")];
        assert!(ContinuationExtractor::extract(&snapshots).is_empty());
    }

    #[test]
    fn unsorted_input_ranks_by_date() {
        let snapshots = vec![
            snap(date(2023, 3, 1), "S1", "Fibre 100", "C1"),
            snap(date(2023, 1, 1), "S1", "Fibre 100", "C1"),
            snap(date(2023, 2, 1), "S1", "Fibre 100", "C1"),
        ];

        let events = ContinuationExtractor::extract(&snapshots);

        // The January observation is the signup; February and March continue
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date_key, date(2023, 2, 1));
        assert_eq!(events[1].date_key, date(2023, 3, 1));
    }

    #[test]
    fn tied_dates_rank_deterministically() {
        // Two observations on the same date: the secondary key decides which
        // one is "first", and repeated runs agree.
        let snapshots = vec![
            snap(date(2023, 1, 1), "S1", "Fibre 100", "C2"),
            snap(date(2023, 1, 1), "S1", "Fibre 100", "C1"),
        ];

        let first = ContinuationExtractor::extract(&snapshots);
        let second = ContinuationExtractor::extract(&snapshots);

        assert_eq!(first.len(), 1);
        assert_eq!(first[0].customer_id.as_deref(), Some("C2"));
        assert_eq!(first, second);
    }

    #[test]
    fn services_rank_independently() {
        let snapshots = vec![
            snap(date(2023, 1, 1), "S1", "Fibre 100", "C1"),
            snap(date(2023, 2, 1), "S1", "Fibre 100", "C1"),
            snap(date(2023, 5, 1), "S2", "Mobile 5G", "C2"),
        ];

        let events = ContinuationExtractor::extract(&snapshots);

        // S2 has a single observation, so only S1 continues
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].service_id, "S1");
    }
}
