//! API error types and their response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kursd_feed::FeedError;
use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used by the API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the API handlers.
///
/// Every variant maps to a stable JSON body; clients match on the `error`
/// field. The contact variants carry user-facing Russian messages, the
/// currency variants machine-readable codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Currency endpoint budget exhausted for the client.
    #[error("rate limit exceeded")]
    RateLimited,
    /// Upstream feed request failed.
    #[error(transparent)]
    Upstream(#[from] FeedError),
    /// Contact endpoint budget exhausted for the client.
    #[error("contact rate limit exceeded")]
    ContactRateLimited,
    /// Contact form failed validation.
    #[error("contact form validation failed")]
    Validation(Vec<ValidationError>),
    /// Lead could not be delivered to Telegram.
    #[error("lead delivery failed")]
    Delivery,
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorBody {
                    error: "RATE_LIMIT_EXCEEDED".to_string(),
                    message: Some("Too many requests. Please try again later.".to_string()),
                    details: None,
                },
            ),
            Self::Upstream(error) => {
                tracing::error!(%error, "upstream feed request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody {
                        error: "CBR_API_ERROR".to_string(),
                        message: Some(error.to_string()),
                        details: None,
                    },
                )
            }
            Self::ContactRateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorBody {
                    error: "Слишком много запросов. Попробуйте позже.".to_string(),
                    message: None,
                    details: None,
                },
            ),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Проверьте правильность заполнения формы".to_string(),
                    message: None,
                    details: Some(errors.iter().map(ToString::to_string).collect()),
                },
            ),
            Self::Delivery => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Ошибка при отправке сообщения. Попробуйте позже.".to_string(),
                    message: None,
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_maps_to_429() {
        let response = ApiError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_upstream_maps_to_502() {
        let response = ApiError::Upstream(FeedError::Status { status: 500 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_contact_rate_limited_maps_to_429() {
        let response = ApiError::ContactRateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = ApiError::Validation(vec![ValidationError::NameTooShort]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_delivery_maps_to_500() {
        let response = ApiError::Delivery.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_skips_absent_fields() {
        let body = ErrorBody {
            error: "RATE_LIMIT_EXCEEDED".to_string(),
            message: None,
            details: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"RATE_LIMIT_EXCEEDED"}"#);
    }
}
