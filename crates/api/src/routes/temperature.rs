//! Temperature Statistics Routes

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

/// `[min, avg, max]`; entries are null when no rows matched
pub type StatsResponse = Json<[Option<f64>; 3]>;

/// Stats from `start` through the end of the dataset
pub async fn get_from_start(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<StatsResponse, ApiError> {
    let stats = state.query.range_stats(&start, None).await?;
    Ok(Json(stats.to_array()))
}

/// Stats from `start` through `end`
pub async fn get_start_to_end(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<StatsResponse, ApiError> {
    let stats = state.query.range_stats(&start, Some(&end)).await?;
    Ok(Json(stats.to_array()))
}
