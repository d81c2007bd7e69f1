//! Typed rows read from the climate database

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One observation from the `measurement` table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Station code (`station` column)
    pub station: String,
    /// Temperature observation (`tobs` column)
    pub temperature: f64,
    /// Precipitation (`prcp` column), absent for some days
    pub precipitation: Option<f64>,
}

/// One row of the `station` table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: i64,
    /// Station code (`station` column)
    pub code: String,
    pub name: String,
}

/// Minimum, average and maximum temperature over a date range.
///
/// All three are `None` when no row falls inside the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureStats {
    /// True when the range matched no rows
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }

    /// `[min, avg, max]`
    pub fn to_array(&self) -> [Option<f64>; 3] {
        [self.min, self.avg, self.max]
    }
}
