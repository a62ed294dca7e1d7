// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::model_client::ModelError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("service is not configured: {0}")]
    Configuration(String),
    #[error("invalid request body: {0}")]
    Validation(#[from] JsonRejection),
    #[error("invalid request body: {0}")]
    BodyShape(&'static str),
    #[error("model invocation failed: {0}")]
    ModelInvocation(ModelError),
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::MissingApiKey => AppError::Configuration(err.to_string()),
            other => AppError::ModelInvocation(other),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    detail: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(rejection) => rejection.status(),
            AppError::BodyShape(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ModelInvocation(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, detail) = match &self {
            AppError::Configuration(msg) => ("service misconfigured", msg.clone()),
            AppError::Validation(rejection) => ("invalid request body", rejection.body_text()),
            AppError::BodyShape(msg) => ("invalid request body", msg.to_string()),
            AppError::ModelInvocation(e) => ("model invocation failed", e.client_detail()),
        };

        // full upstream text goes to the log only
        if status.is_server_error() {
            tracing::error!(%status, "{}", self);
        } else {
            tracing::warn!(%status, "{}", self);
        }

        (status, Json(ErrorResponse { error, detail })).into_response()
    }
}
