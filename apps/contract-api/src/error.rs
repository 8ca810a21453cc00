//! Error types for the contract analysis server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use compliance_engine::EngineError;
use serde::Serialize;
use thiserror::Error;

use crate::extract::ExtractionError;
use crate::report::ReportError;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ServerError::Engine(EngineError::UnknownContractType(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_CONTRACT_TYPE")
            }
            ServerError::Extraction(ExtractionError::UnsupportedFileType(_)) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_FILE_TYPE")
            }
            ServerError::Extraction(ExtractionError::FileNotFound(_)) => {
                (StatusCode::NOT_FOUND, "FILE_NOT_FOUND")
            }
            ServerError::Extraction(_) => (StatusCode::BAD_REQUEST, "EXTRACTION_FAILED"),
            ServerError::Report(ReportError::UnknownFormat(_)) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_FORMAT")
            }
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
