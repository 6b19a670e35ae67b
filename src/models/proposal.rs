//! Proposal Domain Model
//!
//! Speakers, proposal kinds and the proposal record itself, including the
//! survey-style submission fields and the additional-speaker relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Speaker ==
/// A registered conference speaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speaker {
    pub id: u64,
    pub name: String,
    pub email: String,
}

// == Proposal Kind ==
/// A submission format within a section, e.g. talk vs panel vs tutorial
/// vs poster.
///
/// Sections with different deadlines or reviewers should be modelled as
/// distinct sections, not just distinct kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalKind {
    pub id: u64,
    /// The section this kind belongs to
    pub section_id: u64,
    pub name: String,
    pub slug: String,
}

// == Speaking Status ==
/// Tri-state acceptance status of an additional speaker invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakingStatus {
    Pending,
    Accepted,
    Declined,
}

// == Additional Speaker ==
/// An additional speaker attached to a proposal, with their invitation
/// status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalSpeaker {
    pub speaker_id: u64,
    pub status: SpeakingStatus,
}

// == Survey Enums ==
/// Expected audience experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceLevel {
    Novice,
    Intermediate,
    Experienced,
}

/// Speaker affiliation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affiliation {
    Company,
    School,
    Independent,
}

// == Proposal ==
/// A single conference-talk submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u64,
    /// The kind (and therefore section) this proposal was submitted to
    pub kind_id: u64,
    pub title: String,
    /// Short public summary, at most 400 characters
    pub description: String,
    /// Self-contained outline of the proposal
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Extra information for reviewers only
    #[serde(default)]
    pub additional_notes: String,
    /// Primary speaker
    pub speaker_id: u64,
    /// Additional speakers with their invitation status
    pub additional_speakers: Vec<AdditionalSpeaker>,
    pub audience_level: AudienceLevel,
    pub affiliation: Affiliation,
    /// Specialized track, if any
    pub specialized_track: Option<String>,
    /// Consent to record and release the presentation
    pub recording_release: bool,
    /// Whether a recording of this talk already exists online
    pub already_recording: bool,
    pub recording_url: String,
    pub slides_url: String,
    pub code_url: String,
    pub cancelled: bool,
    pub submitted: DateTime<Utc>,
}

impl Proposal {
    // == Number ==
    /// Zero-padded display number for this proposal.
    pub fn number(&self) -> String {
        format!("{:03}", self.id)
    }

    /// Speaker ids of the additional speakers who accepted their invitation.
    pub fn accepted_additional_speakers(&self) -> impl Iterator<Item = u64> + '_ {
        self.additional_speakers
            .iter()
            .filter(|a| a.status == SpeakingStatus::Accepted)
            .map(|a| a.speaker_id)
    }

    /// Whether the given speaker is already listed as an additional speaker.
    pub fn has_additional_speaker(&self, speaker_id: u64) -> bool {
        self.additional_speakers
            .iter()
            .any(|a| a.speaker_id == speaker_id)
    }
}
