//! SQLite-backed implementation of the `OrderFeed` port.
//!
//! Bulk-reads the `service_order` collection. `ORDER_TYPE_L2` is nullable
//! on the wire and stays an `Option` in the record - classification of
//! unknown values happens downstream, not here.

use std::sync::Arc;

use async_trait::async_trait;
use flatline_core::OrderFeed;
use flatline_domain::{FlatlineError, OrderRecord, Result};
use rusqlite::Row;

use super::manager::DbManager;
use super::snapshot_repository::parse_wire_date;
use crate::errors::InfraError;

/// SQLite-backed reader for the order log.
pub struct SqliteOrderFeed {
    db: Arc<DbManager>,
}

impl SqliteOrderFeed {
    /// Create a feed backed by the shared pool.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderFeed for SqliteOrderFeed {
    async fn load_orders(&self) -> Result<Vec<OrderRecord>> {
        let conn = self.db.get_connection()?;
        let mut stmt = conn.prepare(ORDER_BULK_QUERY).map_err(map_sql_error)?;
        let rows = stmt.query_map([], map_order_row).map_err(map_sql_error)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(map_sql_error)?);
        }
        Ok(records)
    }
}

const ORDER_BULK_QUERY: &str = "SELECT REPORT_DATE, SERVICE_ID, ORDER_TYPE_L2, CUSTOMER_ID
    FROM service_order
    ORDER BY SERVICE_ID, REPORT_DATE, CUSTOMER_ID";

fn map_order_row(row: &Row<'_>) -> rusqlite::Result<OrderRecord> {
    let raw_date: String = row.get(0)?;
    Ok(OrderRecord {
        report_date: parse_wire_date(0, &raw_date)?,
        service_id: row.get(1)?,
        order_type_l2: row.get(2)?,
        customer_id: row.get(3)?,
    })
}

fn map_sql_error(err: rusqlite::Error) -> FlatlineError {
    FlatlineError::from(InfraError::from(err))
}
