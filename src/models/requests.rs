//! Request DTOs for the CFP backend API
//!
//! Defines the structure of incoming HTTP request bodies.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{Affiliation, AudienceLevel, ResultStatus, SpeakingStatus, VoteScore};

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 400;

// == Speaker Registration ==
/// Request body for POST /speakers
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterSpeakerRequest {
    pub name: String,
    pub email: String,
}

impl RegisterSpeakerRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Speaker name cannot be empty".to_string());
        }
        if !self.email.contains('@') {
            return Some("Speaker email is not valid".to_string());
        }
        None
    }
}

// == Section Creation ==
/// Request body for POST /sections
///
/// `start`, `end` and `closed` are all optional; an unset bound imposes
/// no constraint on availability.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSectionRequest {
    pub name: String,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed: Option<bool>,
    #[serde(default)]
    pub published: Option<bool>,
}

impl CreateSectionRequest {
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Section name cannot be empty".to_string());
        }
        None
    }
}

// == Section Update ==
/// Request body for PUT /sections/:id
///
/// Replaces the section's entire window configuration; omitted fields
/// become unset (and therefore impose no constraint).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSectionRequest {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed: Option<bool>,
    #[serde(default)]
    pub published: Option<bool>,
}

// == Kind Creation ==
/// Request body for POST /kinds
#[derive(Debug, Clone, Deserialize)]
pub struct CreateKindRequest {
    pub section_id: u64,
    pub name: String,
    pub slug: String,
}

impl CreateKindRequest {
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Kind name cannot be empty".to_string());
        }
        if self.slug.trim().is_empty() {
            return Some("Kind slug cannot be empty".to_string());
        }
        None
    }
}

// == Proposal Submission ==
/// Request body for POST /proposals
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitProposalRequest {
    pub kind_id: u64,
    pub speaker_id: u64,
    pub title: String,
    pub description: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub additional_notes: String,
    pub audience_level: AudienceLevel,
    pub affiliation: Affiliation,
    #[serde(default)]
    pub specialized_track: Option<String>,
    #[serde(default = "default_recording_release")]
    pub recording_release: bool,
    #[serde(default)]
    pub already_recording: bool,
    #[serde(default)]
    pub recording_url: String,
    #[serde(default)]
    pub slides_url: String,
    #[serde(default)]
    pub code_url: String,
}

fn default_recording_release() -> bool {
    true
}

impl SubmitProposalRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Some(format!(
                "Title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            ));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Some(format!(
                "Description exceeds maximum length of {} characters",
                MAX_DESCRIPTION_LENGTH
            ));
        }
        None
    }
}

// == Proposal Update ==
/// Request body for PUT /proposals/:id
///
/// Only the supplied fields are changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProposalRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
    #[serde(default)]
    pub cancelled: Option<bool>,
}

impl UpdateProposalRequest {
    pub fn validate(&self) -> Option<String> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Some("Title cannot be empty".to_string());
            }
            if title.chars().count() > MAX_TITLE_LENGTH {
                return Some(format!(
                    "Title exceeds maximum length of {} characters",
                    MAX_TITLE_LENGTH
                ));
            }
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LENGTH {
                return Some(format!(
                    "Description exceeds maximum length of {} characters",
                    MAX_DESCRIPTION_LENGTH
                ));
            }
        }
        None
    }
}

// == Additional Speaker ==
/// Request body for POST /proposals/:id/speakers
#[derive(Debug, Clone, Deserialize)]
pub struct AddSpeakerRequest {
    pub speaker_id: u64,
    /// Invitation status; new invitations default to pending.
    #[serde(default = "default_speaking_status")]
    pub status: SpeakingStatus,
}

fn default_speaking_status() -> SpeakingStatus {
    SpeakingStatus::Pending
}

// == Vote ==
/// Request body for POST /proposals/:id/votes
#[derive(Debug, Clone, Deserialize)]
pub struct VoteRequest {
    pub reviewer_id: u64,
    pub score: VoteScore,
}

// == Feedback ==
/// Request body for POST /proposals/:id/feedback
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub author_id: u64,
    pub comment: String,
}

impl FeedbackRequest {
    pub fn validate(&self) -> Option<String> {
        if self.comment.trim().is_empty() {
            return Some("Feedback comment cannot be empty".to_string());
        }
        None
    }
}

// == Result ==
/// Request body for POST /proposals/:id/result
#[derive(Debug, Clone, Deserialize)]
pub struct SetResultRequest {
    pub status: ResultStatus,
}
