//! Typed errors and HTTP mapping.

use crate::service::FieldError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Message payload of the error envelope: a plain string or the field error list.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    Fields(Vec<FieldError>),
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: ErrorMessage,
}

impl ErrorBody {
    pub fn new(message: ErrorMessage) -> Self {
        Self { status: "error", message }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(fields) => ErrorMessage::Fields(fields),
            AppError::BadRequest(m) | AppError::NotFound(m) | AppError::MethodNotAllowed(m) => {
                ErrorMessage::Text(m)
            }
            // Storage and config failures are not part of the envelope contract.
            other => {
                tracing::error!(error = %other, "unhandled error");
                return (status, "Internal Server Error").into_response();
            }
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}
