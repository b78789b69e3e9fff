use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Option<Value>,
    },

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation {
            message: message.into(),
            details: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Conflict(_) => StatusCode::CONFLICT,
            CatalogError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::DatabaseError(_) | CatalogError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed with an internal error");
        }
        let error_body = match self {
            CatalogError::NotFound(message) => ApiErrorObject {
                code: "NOT_FOUND".to_string(),
                message,
                details: None,
            },

            CatalogError::Conflict(message) => ApiErrorObject {
                code: "CONFLICT".to_string(),
                message,
                details: None,
            },

            CatalogError::Validation { message, details } => ApiErrorObject {
                code: "VALIDATION_ERROR".to_string(),
                message,
                details,
            },

            CatalogError::DatabaseError(_) | CatalogError::UnexpectedError(_) => ApiErrorObject {
                code: "INTERNAL_ERROR".to_string(),
                message: "An internal server error occurred.".to_string(),
                details: None,
            },
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let resp = CatalogError::UnexpectedError("boom: secret".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body_str = std::str::from_utf8(&body).unwrap();
        assert_eq!(
            body_str,
            r#"{"error":{"code":"INTERNAL_ERROR","message":"An internal server error occurred."}}"#
        );
    }

    #[test]
    fn taxonomy_maps_to_status_codes() {
        assert_eq!(
            CatalogError::NotFound(String::new()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Conflict(String::new()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CatalogError::validation("bad").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            CatalogError::DatabaseError(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
