//! Type definitions for the flattened service timeline
//!
//! This module defines the two source record shapes (active-service
//! snapshots and order events), the single output row shape, and the
//! closed vocabularies used to classify rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ORDER_TYPE_CHURN, ORDER_TYPE_NEW, ORDER_TYPE_TRANSFER};

/// One observation of a service being active on a given date
///
/// The snapshot feed is append-only: the same `service_id` appears once per
/// observation date, so repeated ids are expected and no uniqueness is
/// enforced at this stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSnapshotRecord {
    /// Date the service was observed active
    pub snapshot_date: NaiveDate,

    /// Service identifier (links to zero or more order records)
    pub service_id: String,

    /// Service display name as observed on that date
    pub service_name: String,

    /// Owning customer identifier
    pub customer_id: String,
}

/// One order/transaction event from the order log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Date the order was reported
    pub report_date: NaiveDate,

    /// Service identifier the order applies to
    pub service_id: String,

    /// Level-2 order type, an enum-like string ("transfer", "new", a
    /// churn-indicating category, or other/absent values)
    pub order_type_l2: Option<String>,

    /// Owning customer identifier
    pub customer_id: String,
}

/// Parsed view of the `order_type_l2` wire string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCategory {
    /// Service moved in from another provider/account
    Transfer,
    /// Service created fresh
    New,
    /// Service cancelled/terminated
    Churn,
}

impl OrderCategory {
    /// Parse a raw `order_type_l2` value into a category.
    ///
    /// Matching is trimmed and case-insensitive. Unknown or absent values
    /// return `None` — a data gap, which downstream classification must not
    /// conflate with any concrete category.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let value = raw?.trim();
        if value.eq_ignore_ascii_case(ORDER_TYPE_TRANSFER) {
            Some(Self::Transfer)
        } else if value.eq_ignore_ascii_case(ORDER_TYPE_NEW) {
            Some(Self::New)
        } else if value.eq_ignore_ascii_case(ORDER_TYPE_CHURN) {
            Some(Self::Churn)
        } else {
            None
        }
    }
}

/// Yes/No flag persisted as the strings "Yes" / "No"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    /// Wire/storage representation of the flag
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Current status label on an emitted timeline row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceStatus {
    Active,
    Inactive,
}

impl ServiceStatus {
    /// Wire/storage representation of the status
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// One emitted row of the flattened service timeline
///
/// The output is one row per emitted event, not one row per service. Rows
/// derive `Eq + Hash` so the union merge can deduplicate on full-row
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlattenedEvent {
    /// Date the event is anchored to
    pub date_key: NaiveDate,

    /// Service identifier
    pub service_id: String,

    /// Service name; `None` when the service is no longer known to the
    /// active registry (churn with no matching snapshot)
    pub service_name: Option<String>,

    /// Customer identifier; `None` under the same condition as
    /// `service_name`
    pub customer_id: Option<String>,

    /// Whether this row is the service's first observed signup event
    pub is_new_signup: Flag,

    /// Transfer-in classification. `None` means order data was absent for
    /// this service at signup time — a data gap, not a negative answer.
    pub is_transfer: Option<Flag>,

    /// Whether this row records a churn event
    pub is_churn: Flag,

    /// Status label as of this row
    pub current_status: ServiceStatus,
}

/// Summary of one timeline refresh, returned for logging/inspection
///
/// The `run_id` identifies the refresh itself; it is metadata and never
/// part of the materialized output, which stays byte-identical across
/// re-runs on unchanged inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSummary {
    /// Identifier of this refresh run
    pub run_id: Uuid,

    /// Rows emitted by the signup extractor
    pub signup_rows: usize,

    /// Rows emitted by the continuation extractor
    pub continuation_rows: usize,

    /// Rows emitted by the churn extractor
    pub churn_rows: usize,

    /// Rows in the merged timeline after deduplication
    pub merged_rows: usize,
}
