//! Infrastructure error types and conversions into the domain error

use flatline_domain::FlatlineError;
use thiserror::Error;

/// Errors raised by the SQLite adapters
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

impl From<InfraError> for FlatlineError {
    fn from(err: InfraError) -> Self {
        Self::Database(err.to_string())
    }
}
