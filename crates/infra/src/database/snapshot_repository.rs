//! SQLite-backed implementation of the `SnapshotFeed` port.
//!
//! Performs a single bulk read of the `active_snapshot` collection. Dates
//! travel as `%Y-%m-%d` text; a malformed date is a fatal error for the
//! run, never a silently skipped row.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use flatline_core::SnapshotFeed;
use flatline_domain::constants::DATE_WIRE_FORMAT;
use flatline_domain::{ActiveSnapshotRecord, FlatlineError, Result};
use rusqlite::Row;

use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite-backed reader for the active-service snapshot collection.
pub struct SqliteSnapshotFeed {
    db: Arc<DbManager>,
}

impl SqliteSnapshotFeed {
    /// Create a feed backed by the shared pool.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SnapshotFeed for SqliteSnapshotFeed {
    async fn load_snapshots(&self) -> Result<Vec<ActiveSnapshotRecord>> {
        let conn = self.db.get_connection()?;
        let mut stmt = conn.prepare(SNAPSHOT_BULK_QUERY).map_err(map_sql_error)?;
        let rows = stmt.query_map([], map_snapshot_row).map_err(map_sql_error)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(map_sql_error)?);
        }
        Ok(records)
    }
}

const SNAPSHOT_BULK_QUERY: &str =
    "SELECT SNAPSHOT_DATE, SERVICE_ID, SERVICE_NAME, CUSTOMER_ID
    FROM active_snapshot
    ORDER BY SERVICE_ID, SNAPSHOT_DATE, SERVICE_NAME, CUSTOMER_ID";

fn map_snapshot_row(row: &Row<'_>) -> rusqlite::Result<ActiveSnapshotRecord> {
    let raw_date: String = row.get(0)?;
    Ok(ActiveSnapshotRecord {
        snapshot_date: parse_wire_date(0, &raw_date)?,
        service_id: row.get(1)?,
        service_name: row.get(2)?,
        customer_id: row.get(3)?,
    })
}

pub(crate) fn parse_wire_date(idx: usize, raw: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_WIRE_FORMAT).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
    })
}

fn map_sql_error(err: rusqlite::Error) -> FlatlineError {
    FlatlineError::from(InfraError::from(err))
}
