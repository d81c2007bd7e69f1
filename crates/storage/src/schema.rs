//! Statically declared schema, checked against the live database at startup

use crate::{Repository, StorageError};
use tracing::debug;

/// Columns a table must expose for the typed records to load
#[derive(Debug, Clone, Copy)]
struct TableSchema {
    table: &'static str,
    columns: &'static [&'static str],
}

const MEASUREMENT_SCHEMA: TableSchema = TableSchema {
    table: "measurement",
    columns: &["station", "date", "prcp", "tobs"],
};

const STATION_SCHEMA: TableSchema = TableSchema {
    table: "station",
    columns: &["id", "station", "name"],
};

impl Repository {
    /// Check that both tables exist with every declared column
    pub async fn validate_schema(&self) -> Result<(), StorageError> {
        for schema in [MEASUREMENT_SCHEMA, STATION_SCHEMA] {
            self.check_table(&schema).await?;
        }
        Ok(())
    }

    async fn check_table(&self, schema: &TableSchema) -> Result<(), StorageError> {
        let present: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info(?1)")
                .bind(schema.table)
                .fetch_all(self.pool())
                .await?;

        if present.is_empty() {
            return Err(StorageError::MissingTable(schema.table));
        }

        for column in schema.columns {
            if !present.iter().any(|p| p.eq_ignore_ascii_case(column)) {
                return Err(StorageError::MissingColumn {
                    table: schema.table,
                    column: *column,
                });
            }
        }

        debug!("Schema of `{}` ok: {:?}", schema.table, present);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn bare_repository(ddl: &[&str]) -> Repository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        for stmt in ddl {
            sqlx::query(stmt).execute(&pool).await.unwrap();
        }
        Repository::from_pool(pool)
    }

    #[tokio::test]
    async fn test_fixture_schema_is_valid() {
        let repo = crate::fixtures::sample_repository().await.unwrap();
        repo.validate_schema().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_table() {
        let repo = bare_repository(&[
            "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT)",
        ])
        .await;

        let err = repo.validate_schema().await.unwrap_err();
        assert!(matches!(err, StorageError::MissingTable("station")));
    }

    #[tokio::test]
    async fn test_missing_column() {
        let repo = bare_repository(&[
            "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT)",
            "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT)",
        ])
        .await;

        let err = repo.validate_schema().await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::MissingColumn {
                table: "measurement",
                column: "tobs"
            }
        ));
    }
}
