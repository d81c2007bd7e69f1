//! Storage Layer
//!
//! Read-only SQLite access to the climate observation database
//! (`measurement` and `station` tables) through a `sqlx` pool.

mod records;
mod repository;
mod schema;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use records::{MeasurementRecord, StationRecord, TemperatureStats};
pub use repository::Repository;

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Table `{0}` not found in database")]
    MissingTable(&'static str),
    #[error("Column `{column}` not found in table `{table}`")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}
