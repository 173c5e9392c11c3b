use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid status provided.")]
    InvalidStatus,

    #[error("Order not found")]
    NotFound,

    #[error("{message}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Map a domain error, attaching the operation-specific failure message
    /// to store errors. The 400/404 variants keep their fixed client-facing
    /// messages.
    pub fn from_domain(e: DomainError, failure_message: &str) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::InvalidStatus(_) => AppError::InvalidStatus,
            DomainError::Internal(detail) => AppError::internal(failure_message, detail),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidStatus => HttpResponse::BadRequest().json(json!({
                "message": self.to_string()
            })),
            AppError::NotFound => HttpResponse::NotFound().json(json!({
                "message": self.to_string()
            })),
            AppError::Internal { message, detail } => {
                log::error!("{message}: {detail}");
                HttpResponse::InternalServerError().json(json!({
                    "message": message,
                    "error": detail
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn invalid_status_returns_400() {
        assert_eq!(
            AppError::InvalidStatus.error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_returns_404() {
        assert_eq!(
            AppError::NotFound.error_response().status(),
            actix_web::http::StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::internal("Failed to save order", "connection refused");
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_status_display() {
        assert_eq!(AppError::InvalidStatus.to_string(), "Invalid status provided.");
    }

    #[test]
    fn not_found_display() {
        assert_eq!(AppError::NotFound.to_string(), "Order not found");
    }

    #[test]
    fn internal_display_is_the_operation_message() {
        let err = AppError::internal("Failed to fetch orders", "pool timed out");
        assert_eq!(err.to_string(), "Failed to fetch orders");
    }

    #[test]
    fn domain_not_found_maps_to_app_not_found() {
        let app_err = AppError::from_domain(DomainError::NotFound, "Failed to delete order");
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn domain_invalid_status_maps_to_app_invalid_status() {
        let app_err = AppError::from_domain(
            DomainError::InvalidStatus("archived".to_string()),
            "Failed to update order status",
        );
        assert!(matches!(app_err, AppError::InvalidStatus));
    }

    #[test]
    fn domain_internal_keeps_the_failure_message() {
        let app_err = AppError::from_domain(
            DomainError::Internal("oops".to_string()),
            "Failed to save order",
        );
        match app_err {
            AppError::Internal { message, detail } => {
                assert_eq!(message, "Failed to save order");
                assert_eq!(detail, "oops");
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
