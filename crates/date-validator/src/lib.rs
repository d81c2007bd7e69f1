//! Date Validation and Normalization
//!
//! Request dates arrive as path segments. They are normalized, parsed into
//! calendar dates and checked against the span of the climate dataset.

mod error;
mod normalizer;
mod validator;

pub use error::ValidationError;
pub use normalizer::{normalize_separators, DATE_FORMAT};
pub use validator::{DateRange, DateValidator};

use chrono::NaiveDate;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid date constant"),
    }
}

/// First day with recorded measurements
pub const DATASET_START: NaiveDate = ymd(2010, 1, 1);

/// Last day with recorded measurements
pub const DATASET_END: NaiveDate = ymd(2017, 8, 23);

/// Start of the final 12 months of data
pub const RECENT_CUTOFF: NaiveDate = ymd(2016, 8, 23);
