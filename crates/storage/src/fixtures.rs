//! In-memory sample database for tests

use crate::{Repository, StorageError};
use sqlx::sqlite::SqlitePoolOptions;

const SCHEMA: &[&str] = &[
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )",
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )",
];

/// (id, code, name)
pub const SAMPLE_STATIONS: &[(i64, &str, &str)] = &[
    (1, "USC00519397", "WAIKIKI 717.2, HI US"),
    (2, "USC00513117", "KANEOHE 838.1, HI US"),
];

/// (station, date, prcp, tobs), in insertion order
pub const SAMPLE_MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519397", "2010-01-01", Some(0.08), 65.0),
    ("USC00519397", "2016-08-22", Some(0.40), 77.0),
    ("USC00519397", "2016-08-23", Some(0.00), 81.0),
    ("USC00513117", "2016-08-23", Some(0.15), 76.0),
    ("USC00519397", "2016-12-31", None, 72.0),
    ("USC00519397", "2017-01-01", Some(0.00), 62.0),
    ("USC00513117", "2017-01-01", Some(0.29), 66.0),
    ("USC00519397", "2017-01-15", Some(0.01), 70.0),
    ("USC00519397", "2017-01-31", Some(0.00), 68.0),
    ("USC00519397", "2017-02-01", Some(0.00), 59.0),
    ("USC00519397", "2017-08-23", Some(0.00), 81.0),
];

/// Single-connection in-memory repository seeded with the sample rows
pub async fn sample_repository() -> Result<Repository, StorageError> {
    // One connection that never expires: the database lives only as long as it does
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    for ddl in SCHEMA {
        sqlx::query(ddl).execute(&pool).await?;
    }

    for &(id, code, name) in SAMPLE_STATIONS {
        sqlx::query("INSERT INTO station (id, station, name) VALUES (?1, ?2, ?3)")
            .bind(id)
            .bind(code)
            .bind(name)
            .execute(&pool)
            .await?;
    }

    for &(station, date, prcp, tobs) in SAMPLE_MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&pool)
            .await?;
    }

    Ok(Repository::from_pool(pool))
}
