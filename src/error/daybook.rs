use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum DaybookError {
    /// Update/delete addressed an id that has no row.
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Body parsed as JSON but does not match the resource schema.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl DaybookError {
    pub fn status(&self) -> StatusCode {
        match self {
            DaybookError::NotFound { .. } => StatusCode::NOT_FOUND,
            DaybookError::InvalidJson(_)
            | DaybookError::InvalidPath(_)
            | DaybookError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            DaybookError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DaybookError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            DaybookError::Config(_)
            | DaybookError::IoError(_)
            | DaybookError::RactorError(_)
            | DaybookError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for DaybookError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => DaybookError::Validation(message),
            JsonRejection::MissingJsonContentType(_) => {
                DaybookError::UnsupportedMediaType(message)
            }
            _ => DaybookError::InvalidJson(message),
        }
    }
}

impl From<PathRejection> for DaybookError {
    fn from(rejection: PathRejection) -> Self {
        DaybookError::InvalidPath(rejection.body_text())
    }
}

impl From<QueryRejection> for DaybookError {
    fn from(rejection: QueryRejection) -> Self {
        DaybookError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for DaybookError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match self {
            DaybookError::NotFound { entity, .. } => ApiErrorObject {
                code: "NOT_FOUND".to_string(),
                message: format!("{entity} not found"),
                details: None,
            },

            DaybookError::InvalidJson(detail) => ApiErrorObject {
                code: "INVALID_JSON".to_string(),
                message: "Request body is not valid JSON.".to_string(),
                details: Some(Value::String(detail)),
            },

            DaybookError::Validation(detail) => ApiErrorObject {
                code: "VALIDATION_ERROR".to_string(),
                message: "Request body does not match the expected schema.".to_string(),
                details: Some(Value::String(detail)),
            },

            DaybookError::UnsupportedMediaType(detail) => ApiErrorObject {
                code: "UNSUPPORTED_MEDIA_TYPE".to_string(),
                message: "Expected `Content-Type: application/json`.".to_string(),
                details: Some(Value::String(detail)),
            },

            DaybookError::InvalidPath(detail) => ApiErrorObject {
                code: "INVALID_PATH".to_string(),
                message: "Invalid path parameter.".to_string(),
                details: Some(Value::String(detail)),
            },

            DaybookError::InvalidQuery(detail) => ApiErrorObject {
                code: "INVALID_QUERY".to_string(),
                message: "Invalid query string.".to_string(),
                details: Some(Value::String(detail)),
            },

            internal @ (DaybookError::Config(_)
            | DaybookError::IoError(_)
            | DaybookError::RactorError(_)
            | DaybookError::DatabaseError(_)) => {
                error!(error = %internal, "request failed with internal error");
                ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                }
            }
        };
        (status, Json(ApiErrorBody { inner: body })).into_response()
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
