use axum::http::StatusCode;

use crate::app::errors::ApiError;

/// Plain-text greeting served at `/`.
pub const GREETING: &str = "Hello from server!";

pub async fn root() -> &'static str {
    GREETING
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
