//! Response DTOs for the CFP backend API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::VoteTally;
use crate::models::{Proposal, ResultStatus, Speaker};

// == Proposal Detail ==
/// Response body for GET /proposals/:id
///
/// Combines the proposal record with its derived review state: result
/// status (Undecided when no result record exists), the cached vote
/// tally, and whether the proposal can currently be edited.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalResponse {
    #[serde(flatten)]
    pub proposal: Proposal,
    /// Zero-padded display number
    pub number: String,
    /// The section owning the proposal's kind
    pub section_id: u64,
    pub status: ResultStatus,
    pub can_edit: bool,
    pub tally: VoteTally,
    /// Primary speaker followed by accepted additional speakers
    pub speakers: Vec<Speaker>,
}

// == Tally ==
/// Response body for GET /proposals/:id/tally
#[derive(Debug, Clone, Serialize)]
pub struct TallyResponse {
    pub proposal_id: u64,
    #[serde(flatten)]
    pub tally: VoteTally,
}

// == Health ==
/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// == Error ==
/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
