//! Timeline refresh service - core orchestration
//!
//! Wires the three extractors between the source feeds and the output
//! sink. The extractors share the immutable inputs and run in parallel;
//! the merge waits for all three, and nothing is published unless every
//! stage succeeded.

use std::sync::Arc;

use flatline_domain::{FlatlineError, RefreshSummary, Result};
use tokio::task;
use tracing::info;
use uuid::Uuid;

use super::churn::{ChurnExtractor, ChurnOrderPolicy};
use super::continuation::ContinuationExtractor;
use super::merger::UnionMerger;
use super::ports::{OrderFeed, SnapshotFeed, TimelineSink};
use super::signup::SignupExtractor;

/// Refresh service for the flattened service timeline
pub struct FlattenService {
    snapshot_feed: Arc<dyn SnapshotFeed>,
    order_feed: Arc<dyn OrderFeed>,
    sink: Arc<dyn TimelineSink>,
    churn_policy: ChurnOrderPolicy,
}

impl FlattenService {
    /// Create a new refresh service with the default churn policy
    pub fn new(
        snapshot_feed: Arc<dyn SnapshotFeed>,
        order_feed: Arc<dyn OrderFeed>,
        sink: Arc<dyn TimelineSink>,
    ) -> Self {
        Self { snapshot_feed, order_feed, sink, churn_policy: ChurnOrderPolicy::default() }
    }

    /// Override which order rows the churn extractor treats as churn
    pub fn with_churn_policy(mut self, policy: ChurnOrderPolicy) -> Self {
        self.churn_policy = policy;
        self
    }

    /// Rebuild the whole timeline from the current inputs.
    ///
    /// Bulk-reads both source collections, fans the three extractors out
    /// onto blocking workers, fans back in, merges, and replaces the output
    /// collection. Any failure - read, extract, or write - aborts the run
    /// before a partial timeline can become visible.
    pub async fn refresh(&self) -> Result<RefreshSummary> {
        let run_id = Uuid::now_v7();

        let snapshots = Arc::new(self.snapshot_feed.load_snapshots().await?);
        let orders = Arc::new(self.order_feed.load_orders().await?);

        info!(
            %run_id,
            snapshots = snapshots.len(),
            orders = orders.len(),
            "source collections loaded"
        );

        let signup_task = {
            let snapshots = Arc::clone(&snapshots);
            let orders = Arc::clone(&orders);
            task::spawn_blocking(move || SignupExtractor::extract(&snapshots, &orders))
        };
        let continuation_task = {
            let snapshots = Arc::clone(&snapshots);
            task::spawn_blocking(move || ContinuationExtractor::extract(&snapshots))
        };
        let churn_task = {
            let snapshots = Arc::clone(&snapshots);
            let orders = Arc::clone(&orders);
            let policy = self.churn_policy;
            task::spawn_blocking(move || ChurnExtractor::new(policy).extract(&orders, &snapshots))
        };

        let (signups, continuations, churns) =
            tokio::try_join!(signup_task, continuation_task, churn_task)
                .map_err(|err| FlatlineError::Internal(format!("extractor task failed: {err}")))?;

        let (signup_rows, continuation_rows, churn_rows) =
            (signups.len(), continuations.len(), churns.len());

        let timeline = UnionMerger::merge(vec![signups, continuations, churns]);
        self.sink.replace_timeline(&timeline).await?;

        let summary = RefreshSummary {
            run_id,
            signup_rows,
            continuation_rows,
            churn_rows,
            merged_rows: timeline.len(),
        };

        info!(
            %run_id,
            signups = summary.signup_rows,
            continuations = summary.continuation_rows,
            churns = summary.churn_rows,
            merged = summary.merged_rows,
            "timeline refreshed"
        );

        Ok(summary)
    }
}
