// Error taxonomy for API endpoints, rendered through the standard envelope.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::models::ApiResponse;
use crate::content::intake::IntakeError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    /// Unexpected failures surface as a generic message; the cause is logged,
    /// never sent to the caller.
    #[error("internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn not_found(kind: &str, reference: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{kind} with {reference} not found"))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Internal(source) = self {
            tracing::error!(error = ?source, "request failed");
        }
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(self.to_string()))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::Validation(message) => Self::Validation(message.to_string()),
            IntakeError::Db(db_err) => Self::Internal(db_err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_taxonomy() {
        assert_eq!(
            ApiError::not_found("Product", "id 5").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation("Email field is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BadRequest("Invalid query parameters".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_reference() {
        let err = ApiError::not_found("Product", "slug apple-juice");
        assert_eq!(err.to_string(), "Product with slug apple-juice not found");
    }

    #[test]
    fn internal_errors_hide_the_cause() {
        let err = ApiError::Internal(anyhow::anyhow!("connection reset"));
        assert_eq!(err.to_string(), "internal server error");
    }
}
