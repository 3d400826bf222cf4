use std::any::Any;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::analysis::models::ApiResponse;
use crate::llm_client::LlmError;

pub const EXTRACTION_FAILED_MESSAGE: &str = "Could not extract text from PDF.";
pub const INVALID_MODEL_OUTPUT_MESSAGE: &str = "AI returned an invalid format. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`;
/// every variant renders as the `{success: false, message}` envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume file part")]
    MissingFile,

    #[error("No job description part")]
    MissingField,

    #[error("No selected file")]
    EmptyFilename,

    /// The multipart body could not be read (malformed, or over the size limit).
    #[error("{0}")]
    Multipart(#[from] MultipartError),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("{0}")]
    Upstream(#[from] LlmError),

    /// Carries the raw model output for the server log only.
    #[error("Model output did not match the analysis schema: {reason}")]
    InvalidModelOutput { reason: String, raw: String },

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFile | AppError::MissingField | AppError::EmptyFilename => {
                StatusCode::BAD_REQUEST
            }
            AppError::Multipart(e) => e.status(),
            AppError::ExtractionFailed(_)
            | AppError::Upstream(_)
            | AppError::InvalidModelOutput { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message placed in the response envelope.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ExtractionFailed(_) => EXTRACTION_FAILED_MESSAGE.to_string(),
            AppError::InvalidModelOutput { .. } => INVALID_MODEL_OUTPUT_MESSAGE.to_string(),
            AppError::Multipart(e) => e.body_text(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::ExtractionFailed(detail) => {
                tracing::error!("PDF extraction error: {detail}");
            }
            AppError::Upstream(e) => {
                tracing::error!("Model invocation error: {e}");
            }
            AppError::InvalidModelOutput { reason, raw } => {
                tracing::error!(raw_output = %raw, "Invalid model output: {reason}");
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
            }
            AppError::Multipart(e) => {
                tracing::warn!("Multipart read error ({status}): {e}");
            }
            AppError::MissingFile | AppError::MissingField | AppError::EmptyFilename => {
                tracing::debug!("Rejected request: {self}");
            }
        }

        (status, Json(ApiResponse::failure(self.client_message()))).into_response()
    }
}

/// Renders a panic caught by `CatchPanicLayer` as a 500 envelope carrying the panic message.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic while handling request".to_string()
    };

    AppError::Internal(anyhow::anyhow!(message)).into_response()
}
