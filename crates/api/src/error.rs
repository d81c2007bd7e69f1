//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use query_service::QueryError;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

/// Errors surfaced to API clients as `{"ERROR": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested dates have no data
    #[error("{0}")]
    NotFound(String),
    /// Store failure while serving a request
    #[error("Internal storage error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        if e.is_not_found() {
            debug!("{}", e);
            ApiError::NotFound(e.to_string())
        } else {
            error!("Temperature query failed: {}", e);
            ApiError::Internal
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "ERROR": self.to_string() }))).into_response()
    }
}
