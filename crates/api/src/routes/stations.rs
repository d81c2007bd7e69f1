//! Station Routes

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dataset::StationInfo;
use crate::AppState;

/// station id -> code and name
pub async fn get_stations(State(state): State<Arc<AppState>>) -> Json<BTreeMap<i64, StationInfo>> {
    Json(state.dataset.stations().clone())
}
