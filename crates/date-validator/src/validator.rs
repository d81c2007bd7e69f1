//! Date Validator for Range Checking

use crate::error::ValidationError;
use crate::normalizer::DATE_FORMAT;
use crate::{DATASET_END, DATASET_START};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl Default for DateRange {
    fn default() -> Self {
        Self::dataset()
    }
}

impl DateRange {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// The span covered by the climate dataset
    pub fn dataset() -> Self {
        Self::new(DATASET_START, DATASET_END)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// Validator for request dates
#[derive(Debug, Clone, Default)]
pub struct DateValidator {
    range: DateRange,
}

impl DateValidator {
    /// Create a new validator over the given range
    pub fn new(range: DateRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Parse a date in `YYYY-MM-DD` form
    pub fn parse(&self, input: &str) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidFormat(input.to_string()))
    }

    /// Check a parsed date against the range
    pub fn check_range(&self, date: NaiveDate) -> Result<NaiveDate, ValidationError> {
        if self.range.contains(date) {
            Ok(date)
        } else {
            Err(ValidationError::OutOfRange {
                date,
                min: self.range.min,
                max: self.range.max,
            })
        }
    }

    /// Parse and range-check a date string.
    ///
    /// Separators are taken as given; see [`crate::normalize_separators`].
    pub fn validate(&self, raw: &str) -> Result<NaiveDate, ValidationError> {
        let result = self.parse(raw).and_then(|d| self.check_range(d));
        if let Err(e) = &result {
            debug!("Rejected date {:?}: {}", raw, e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize_separators;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let v = DateValidator::default();
        assert_eq!(v.validate("2010-01-01").unwrap(), DATASET_START);
        assert_eq!(v.validate("2017-08-23").unwrap(), DATASET_END);
    }

    #[test]
    fn test_out_of_range() {
        let v = DateValidator::default();
        assert_eq!(
            v.validate("2005-01-01"),
            Err(ValidationError::OutOfRange {
                date: date("2005-01-01"),
                min: DATASET_START,
                max: DATASET_END,
            })
        );
        assert!(v.validate("2009-12-31").is_err());
        assert!(v.validate("2017-08-24").is_err());
    }

    #[test]
    fn test_space_separated_input() {
        let v = DateValidator::default();
        assert!(matches!(v.validate("2017 01 01"), Err(ValidationError::InvalidFormat(_))));
        assert_eq!(
            v.validate(&normalize_separators("2017 01 01")).unwrap(),
            date("2017-01-01")
        );
    }

    #[test]
    fn test_invalid_format() {
        let v = DateValidator::default();
        assert!(matches!(v.validate("latest"), Err(ValidationError::InvalidFormat(_))));
        assert!(matches!(v.validate("2017-02-30"), Err(ValidationError::InvalidFormat(_))));
        assert!(matches!(v.validate("2017-01-01x"), Err(ValidationError::InvalidFormat(_))));
    }

    #[test]
    fn test_custom_range() {
        let v = DateValidator::new(DateRange::new(date("2017-01-01"), date("2017-01-31")));
        assert!(v.validate("2017-01-15").is_ok());
        assert!(v.validate("2017-02-01").is_err());
    }

    proptest! {
        #[test]
        fn prop_every_dataset_day_is_valid(offset in 0i64..=2791) {
            let d = DATASET_START + chrono::Duration::days(offset);
            prop_assume!(d <= DATASET_END);
            let raw = d.format(DATE_FORMAT).to_string();
            prop_assert_eq!(DateValidator::default().validate(&raw), Ok(d));
        }

        #[test]
        fn prop_days_before_start_rejected(offset in 1i64..20_000) {
            let d = DATASET_START - chrono::Duration::days(offset);
            let raw = d.format(DATE_FORMAT).to_string();
            let is_out_of_range = matches!(
                DateValidator::default().validate(&raw),
                Err(ValidationError::OutOfRange { .. })
            );
            prop_assert!(is_out_of_range);
        }

        #[test]
        fn prop_days_after_end_rejected(offset in 1i64..20_000) {
            let d = DATASET_END + chrono::Duration::days(offset);
            let raw = d.format(DATE_FORMAT).to_string();
            let is_out_of_range = matches!(
                DateValidator::default().validate(&raw),
                Err(ValidationError::OutOfRange { .. })
            );
            prop_assert!(is_out_of_range);
        }
    }
}
