use crate::models::response::ErrorBody;
use crate::services::gate::GateError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// Terminal request errors, one per pipeline stage. Every variant maps to
/// a status code and a JSON body with a single `error` string.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Please provide a country name or country code")]
    MissingQuery,
    #[error(transparent)]
    Unauthorized(#[from] GateError),
    #[error("Too many requests, please try again later")]
    Throttled,
    #[error("Country not found, please provide a valid country name or code")]
    NotFound,
    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(source: anyhow::Error) -> Self {
        ApiError::Internal(source)
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Throttled => StatusCode::TOO_MANY_REQUESTS,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The cause stays in the server log; the client only ever sees the
        // fixed message.
        if let ApiError::Internal(source) = &self {
            error!("Internal error while handling request: {:#}", source);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
