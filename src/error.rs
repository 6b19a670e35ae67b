//! Error types for the CFP backend
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == App Error Enum ==
/// Unified error type for the CFP backend.
#[derive(Error, Debug)]
pub enum AppError {
    /// Referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Additional speaker has the same email as the primary speaker
    #[error("{0} is same as primary speaker")]
    SamePrimarySpeaker(String),

    /// Speaker already listed as an additional speaker on this proposal
    #[error("{0} has already been added as an additional speaker")]
    DuplicateSpeaker(String),

    /// The section's call for proposals is not currently open
    #[error("Submissions are closed for section: {0}")]
    SubmissionsClosed(String),

    /// Proposal editing is not permitted right now
    #[error("Editing is closed for proposal {0}")]
    EditingClosed(u64),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_)
            | AppError::SamePrimarySpeaker(_)
            | AppError::DuplicateSpeaker(_) => StatusCode::BAD_REQUEST,
            AppError::SubmissionsClosed(_) | AppError::EditingClosed(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the CFP backend.
pub type Result<T> = std::result::Result<T, AppError>;
