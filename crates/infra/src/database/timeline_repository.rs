//! SQLite-backed implementation of the `TimelineSink` port.
//!
//! Publishes a refreshed timeline by rebuilding the `flatten_service`
//! table inside a single transaction. Readers either see the previous
//! timeline or the new one, never a partial mix.

use std::sync::Arc;

use async_trait::async_trait;
use flatline_core::TimelineSink;
use flatline_domain::constants::DATE_WIRE_FORMAT;
use flatline_domain::{Flag, FlatlineError, FlattenedEvent, Result};
use tracing::info;

use super::manager::DbManager;
use crate::errors::InfraError;

/// SQLite-backed writer for the materialized timeline.
pub struct SqliteTimelineSink {
    db: Arc<DbManager>,
}

impl SqliteTimelineSink {
    /// Create a sink backed by the shared pool.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimelineSink for SqliteTimelineSink {
    async fn replace_timeline(&self, events: &[FlattenedEvent]) -> Result<()> {
        let mut conn = self.db.get_connection()?;
        let tx = conn.transaction().map_err(map_sql_error)?;

        tx.execute_batch(REBUILD_TABLE_SQL).map_err(map_sql_error)?;

        {
            let mut stmt = tx.prepare(INSERT_EVENT_SQL).map_err(map_sql_error)?;
            for event in events {
                stmt.execute(rusqlite::params![
                    event.date_key.format(DATE_WIRE_FORMAT).to_string(),
                    event.service_id,
                    event.service_name,
                    event.customer_id,
                    event.is_new_signup.as_str(),
                    event.is_transfer.map(Flag::as_str),
                    event.is_churn.as_str(),
                    event.current_status.as_str(),
                ])
                .map_err(map_sql_error)?;
            }
        }

        tx.commit().map_err(map_sql_error)?;

        info!(rows = events.len(), "flatten_service rebuilt");
        Ok(())
    }
}

const REBUILD_TABLE_SQL: &str = "DROP TABLE IF EXISTS flatten_service;
CREATE TABLE flatten_service (
    DateKey TEXT NOT NULL,
    ServiceId TEXT NOT NULL,
    ServiceName TEXT,
    CustomerId TEXT,
    CheckNewSignup TEXT NOT NULL,
    CheckTransfer TEXT,
    CheckChurn TEXT NOT NULL,
    CurrentStatus TEXT NOT NULL
);";

const INSERT_EVENT_SQL: &str = "INSERT INTO flatten_service
    (DateKey, ServiceId, ServiceName, CustomerId,
     CheckNewSignup, CheckTransfer, CheckChurn, CurrentStatus)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

fn map_sql_error(err: rusqlite::Error) -> FlatlineError {
    FlatlineError::from(InfraError::from(err))
}
