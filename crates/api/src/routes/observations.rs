//! Precipitation and Temperature Observation Routes

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::AppState;

/// date -> precipitation for the final 12 months of data
pub async fn get_precipitation(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Option<f64>>> {
    Json(state.dataset.precipitation().clone())
}

/// date -> temperature observation for the final 12 months of data
pub async fn get_tobs(State(state): State<Arc<AppState>>) -> Json<BTreeMap<String, f64>> {
    Json(state.dataset.temperature().clone())
}
