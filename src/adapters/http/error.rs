use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::utils::error::{ErrorCategory, LocationError};

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Map a domain error to a response. Server-side failures are logged and
    /// answered with `failure` only, never with the underlying cause.
    pub fn from_domain(err: LocationError, failure: &str) -> Self {
        let status = status_for(err.category());
        if status.is_server_error() {
            tracing::error!(error = %err, "{}", failure);
            return Self::new(status, failure);
        }
        Self::new(status, err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

pub fn status_for(category: ErrorCategory) -> StatusCode {
    match category {
        ErrorCategory::Client => StatusCode::BAD_REQUEST,
        ErrorCategory::Conflict => StatusCode::CONFLICT,
        ErrorCategory::NotFound | ErrorCategory::ResourceState => StatusCode::NOT_FOUND,
        ErrorCategory::Server | ErrorCategory::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.message,
            code: self.status.as_u16(),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_status_mapping() {
        let cases = [
            (LocationError::validation("latitude", "bad"), StatusCode::BAD_REQUEST),
            (
                LocationError::DuplicateNameError { name: "a".into() },
                StatusCode::CONFLICT,
            ),
            (LocationError::NoLocationsError, StatusCode::NOT_FOUND),
            (
                LocationError::NotFoundError { name: "a".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                LocationError::storage("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from_domain(err, "Failed").status(), expected);
        }
    }

    #[test]
    fn test_server_error_message_is_generic() {
        let api = ApiError::from_domain(
            LocationError::storage("password=hunter2"),
            "Failed to get locations",
        );
        assert_eq!(api.message, "Failed to get locations");
    }
}
