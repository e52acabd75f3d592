use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use diesel_async::pooled_connection::PoolError;
use serde::Serialize;
use thiserror::Error;

/// Store-level failure: the pool could not hand out a connection, or a
/// query failed. Never exposed to callers verbatim.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error("database pool unavailable: {0}")]
    Pool(#[from] bb8::RunError<PoolError>),

    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Menu item not found.")]
    NotFound,

    #[error("An error occurred while processing your request.")]
    Internal,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
