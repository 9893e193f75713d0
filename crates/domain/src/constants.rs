//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! pipeline.

// Order type wire values (ORDER_TYPE_L2 column)
pub const ORDER_TYPE_TRANSFER: &str = "transfer";
pub const ORDER_TYPE_NEW: &str = "new";
pub const ORDER_TYPE_CHURN: &str = "churn";

// Source and output collection names
pub const ACTIVE_SNAPSHOT_TABLE: &str = "active_snapshot";
pub const SERVICE_ORDER_TABLE: &str = "service_order";
pub const FLATTEN_SERVICE_TABLE: &str = "flatten_service";

// Wire format for date columns in the source collections
pub const DATE_WIRE_FORMAT: &str = "%Y-%m-%d";
