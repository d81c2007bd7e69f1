//! Query Service Implementation

use crate::QueryError;
use date_validator::{normalize_separators, DateValidator, ValidationError, DATE_FORMAT};
use storage::{Repository, TemperatureStats};
use tracing::debug;

/// Temperature statistics over the live database
#[derive(Debug, Clone)]
pub struct QueryService {
    repository: Repository,
    validator: DateValidator,
}

impl QueryService {
    /// Create a service bounded by the dataset span
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            validator: DateValidator::default(),
        }
    }

    /// Min/avg/max temperature from `start` through `end`, inclusive.
    ///
    /// `end` defaults to the last day of the dataset. Whitespace in either
    /// date is read as a hyphen. An end before the start is not an error;
    /// it matches no rows and yields empty stats.
    pub async fn range_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureStats, QueryError> {
        let start = normalize_separators(start);
        let end = end.map(normalize_separators);

        let not_found = |reason: ValidationError| match &end {
            None => QueryError::StartNotFound {
                start: start.clone(),
                reason,
            },
            Some(end) => QueryError::RangeNotFound {
                start: start.clone(),
                end: end.clone(),
                reason,
            },
        };

        let start_date = self.validator.validate(&start).map_err(not_found)?;
        let end_date = match &end {
            Some(end) => self.validator.validate(end).map_err(not_found)?,
            None => self.validator.range().max,
        };

        // Canonical zero-padded text keeps the store's string comparison exact
        let from = start_date.format(DATE_FORMAT).to_string();
        let to = end_date.format(DATE_FORMAT).to_string();
        debug!("Temperature stats query {}..={}", from, to);

        Ok(self.repository.temperature_stats(&from, &to).await?)
    }
}
