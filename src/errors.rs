use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::object_store::StoreError;

/// Failures raised by the file and folder operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required body field is missing or the body is not a JSON object.
    #[error("{0}")]
    Validation(String),

    /// The object store rejected a call. `context` names the operation.
    #[error("{context}: {source}")]
    Backend {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    /// The route is declared but has no behaviour yet.
    #[error("route `{0}` is not yet implemented")]
    NotImplemented(&'static str),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn backend(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Backend { context, source }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// A lightweight wrapper for general errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    /// Shortcut for 400 Bad Request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::Validation(_) => AppError::bad_request(message),
            ServiceError::Backend { .. } => AppError::internal(message),
            ServiceError::NotImplemented(_) => AppError::new(StatusCode::NOT_IMPLEMENTED, message),
        }
    }
}
