//! Dataset Loader
//!
//! Snapshot of the final 12 months of measurements and the station list,
//! read once at startup and never refreshed.

use date_validator::{DATE_FORMAT, RECENT_CUTOFF};
use serde::Serialize;
use std::collections::BTreeMap;
use storage::{MeasurementRecord, Repository, StationRecord, StorageError};
use tracing::info;

/// Station code and name, keyed by station id in [`Dataset`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationInfo {
    pub code: String,
    pub name: String,
}

/// Immutable in-memory tables served by the snapshot routes
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    precipitation: BTreeMap<String, Option<f64>>,
    temperature: BTreeMap<String, f64>,
    stations: BTreeMap<i64, StationInfo>,
}

impl Dataset {
    /// Run both startup queries and build the snapshot
    pub async fn load(repository: &Repository) -> Result<Self, StorageError> {
        let cutoff = RECENT_CUTOFF.format(DATE_FORMAT).to_string();
        let measurements = repository.measurements_since(&cutoff).await?;
        let stations = repository.stations().await?;

        let dataset = Self::from_records(measurements, stations);
        info!(
            "Loaded {} dates since {} and {} stations",
            dataset.temperature.len(),
            cutoff,
            dataset.stations.len()
        );
        Ok(dataset)
    }

    /// Index rows by date and stations by id.
    ///
    /// Several stations report on the same day; the last row read for a
    /// date is the one kept.
    pub fn from_records(measurements: Vec<MeasurementRecord>, stations: Vec<StationRecord>) -> Self {
        let mut precipitation = BTreeMap::new();
        let mut temperature = BTreeMap::new();

        for row in measurements {
            precipitation.insert(row.date.clone(), row.precipitation);
            temperature.insert(row.date, row.temperature);
        }

        let stations = stations
            .into_iter()
            .map(|s| (s.id, StationInfo { code: s.code, name: s.name }))
            .collect();

        Self {
            precipitation,
            temperature,
            stations,
        }
    }

    /// date -> precipitation
    pub fn precipitation(&self) -> &BTreeMap<String, Option<f64>> {
        &self.precipitation
    }

    /// date -> temperature observation
    pub fn temperature(&self) -> &BTreeMap<String, f64> {
        &self.temperature
    }

    /// station id -> code and name
    pub fn stations(&self) -> &BTreeMap<i64, StationInfo> {
        &self.stations
    }
}
