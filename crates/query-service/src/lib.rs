//! Temperature Query Service
//!
//! Computes min/avg/max temperature over a date range straight from the
//! database, after checking the requested dates against the dataset span.

mod service;

pub use service::QueryService;

use date_validator::ValidationError;
use storage::StorageError;
use thiserror::Error;

/// Errors from a temperature query
#[derive(Debug, Error)]
pub enum QueryError {
    /// Start date invalid or outside the dataset
    #[error("Temperature data from date: {start} not found.")]
    StartNotFound {
        start: String,
        #[source]
        reason: ValidationError,
    },

    /// Start or end date invalid or outside the dataset
    #[error("Temperature data from date: {start} to: {end} not found.")]
    RangeNotFound {
        start: String,
        end: String,
        #[source]
        reason: ValidationError,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl QueryError {
    /// Whether the request named dates with no data (as opposed to a store failure)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QueryError::StartNotFound { .. } | QueryError::RangeNotFound { .. }
        )
    }
}
