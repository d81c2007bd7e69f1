//! Validation Error Types

use chrono::NaiveDate;
use thiserror::Error;

/// Errors during date validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Date outside the known data range
    #[error("date {date} is out of range [{min}, {max}]")]
    OutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    /// Not a `YYYY-MM-DD` calendar date
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}
