//! Repository Implementation

use crate::{MeasurementRecord, StationRecord, StorageError, TemperatureStats};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

/// Read-only repository over the climate database
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Open the database read-only and check its schema.
    ///
    /// The file must already exist; nothing is created or migrated.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Opened SQLite database {} ({} connections)", database_url, max_connections);

        let repository = Self::from_pool(pool);
        repository.validate_schema().await?;
        Ok(repository)
    }

    /// Wrap an existing pool without any checks
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Measurements dated on or after `cutoff`, oldest first.
    ///
    /// Rows sharing a date keep their insertion order.
    pub async fn measurements_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<MeasurementRecord>, StorageError> {
        let rows = sqlx::query_as::<_, MeasurementRecord>(
            "SELECT date, station, tobs AS temperature, prcp AS precipitation \
             FROM measurement WHERE date >= ?1 ORDER BY date, rowid",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} measurements since {}", rows.len(), cutoff);
        Ok(rows)
    }

    /// All stations, ordered by id
    pub async fn stations(&self) -> Result<Vec<StationRecord>, StorageError> {
        let rows = sqlx::query_as::<_, StationRecord>(
            "SELECT id, station AS code, name FROM station ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} stations", rows.len());
        Ok(rows)
    }

    /// Min/avg/max temperature for `start <= date <= end`.
    ///
    /// Dates are compared as text, so both bounds must be zero-padded
    /// `YYYY-MM-DD`.
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureStats, StorageError> {
        let stats = sqlx::query_as::<_, TemperatureStats>(
            "SELECT CAST(MIN(tobs) AS REAL) AS min, \
                    CAST(AVG(tobs) AS REAL) AS avg, \
                    CAST(MAX(tobs) AS REAL) AS max \
             FROM measurement WHERE date >= ?1 AND date <= ?2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        debug!("Temperature stats {}..={}: {:?}", start, end, stats);
        Ok(stats)
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
