//! Proposal Store
//!
//! Storage and mutation rules for speakers, sections, kinds and
//! proposals, including the additional-speaker validation and the
//! can-edit decision.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::requests::{SubmitProposalRequest, UpdateProposalRequest};
use crate::models::{
    AdditionalSpeaker, Proposal, ProposalKind, ProposalSection, Speaker, SpeakingStatus,
};

// == Proposal Store ==
/// Speakers, sections, kinds and proposals with sequential ids.
#[derive(Debug, Default)]
pub struct ProposalStore {
    speakers: HashMap<u64, Speaker>,
    sections: HashMap<u64, ProposalSection>,
    kinds: HashMap<u64, ProposalKind>,
    proposals: HashMap<u64, Proposal>,
    next_speaker_id: u64,
    next_section_id: u64,
    next_kind_id: u64,
    next_proposal_id: u64,
}

impl ProposalStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Speakers ==
    /// Registers a speaker and returns the stored record.
    pub fn register_speaker(&mut self, name: String, email: String) -> Speaker {
        self.next_speaker_id += 1;
        let speaker = Speaker {
            id: self.next_speaker_id,
            name,
            email,
        };
        self.speakers.insert(speaker.id, speaker.clone());
        speaker
    }

    pub fn speaker(&self, id: u64) -> Result<&Speaker> {
        self.speakers
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("speaker {}", id)))
    }

    // == Sections ==
    /// Creates a section's CFP window configuration.
    pub fn create_section(
        &mut self,
        name: String,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        closed: Option<bool>,
        published: Option<bool>,
    ) -> ProposalSection {
        self.next_section_id += 1;
        let section = ProposalSection {
            id: self.next_section_id,
            name,
            start,
            end,
            closed,
            published,
        };
        self.sections.insert(section.id, section.clone());
        section
    }

    pub fn section(&self, id: u64) -> Result<&ProposalSection> {
        self.sections
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("section {}", id)))
    }

    /// Replaces a section's window configuration (name is kept).
    pub fn update_section(
        &mut self,
        id: u64,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        closed: Option<bool>,
        published: Option<bool>,
    ) -> Result<ProposalSection> {
        let section = self
            .sections
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("section {}", id)))?;
        section.start = start;
        section.end = end;
        section.closed = closed;
        section.published = published;
        Ok(section.clone())
    }

    /// Sections whose submission window is currently open.
    pub fn available_sections(&self, now: DateTime<Utc>) -> Vec<ProposalSection> {
        ProposalSection::available(self.sections.values(), now)
            .into_iter()
            .cloned()
            .collect()
    }

    // == Kinds ==
    /// Creates a proposal kind under an existing section.
    pub fn create_kind(&mut self, section_id: u64, name: String, slug: String) -> Result<ProposalKind> {
        self.section(section_id)?;
        self.next_kind_id += 1;
        let kind = ProposalKind {
            id: self.next_kind_id,
            section_id,
            name,
            slug,
        };
        self.kinds.insert(kind.id, kind.clone());
        Ok(kind)
    }

    pub fn kind(&self, id: u64) -> Result<&ProposalKind> {
        self.kinds
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("kind {}", id)))
    }

    // == Submit ==
    /// Stores a new proposal.
    ///
    /// The kind, its section and the primary speaker must exist, and the
    /// section's submission window must be open.
    pub fn submit(&mut self, req: &SubmitProposalRequest, now: DateTime<Utc>) -> Result<Proposal> {
        self.speaker(req.speaker_id)?;
        let kind = self.kind(req.kind_id)?;
        let section = self
            .sections
            .get(&kind.section_id)
            .ok_or_else(|| AppError::NotFound(format!("section {}", kind.section_id)))?;
        if !section.is_available(now) {
            return Err(AppError::SubmissionsClosed(section.name.clone()));
        }

        self.next_proposal_id += 1;
        let proposal = Proposal {
            id: self.next_proposal_id,
            kind_id: req.kind_id,
            title: req.title.clone(),
            description: req.description.clone(),
            abstract_text: req.abstract_text.clone(),
            additional_notes: req.additional_notes.clone(),
            speaker_id: req.speaker_id,
            additional_speakers: Vec::new(),
            audience_level: req.audience_level,
            affiliation: req.affiliation,
            specialized_track: req.specialized_track.clone(),
            recording_release: req.recording_release,
            already_recording: req.already_recording,
            recording_url: req.recording_url.clone(),
            slides_url: req.slides_url.clone(),
            code_url: req.code_url.clone(),
            cancelled: false,
            submitted: now,
        };
        self.proposals.insert(proposal.id, proposal.clone());
        Ok(proposal)
    }

    pub fn proposal(&self, id: u64) -> Result<&Proposal> {
        self.proposals
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("proposal {}", id)))
    }

    // == Update ==
    /// Applies the supplied field changes to a proposal.
    ///
    /// The caller is expected to have checked [`Self::can_edit`] first.
    pub fn update_proposal(&mut self, id: u64, changes: &UpdateProposalRequest) -> Result<Proposal> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("proposal {}", id)))?;

        if let Some(title) = &changes.title {
            proposal.title = title.clone();
        }
        if let Some(description) = &changes.description {
            proposal.description = description.clone();
        }
        if let Some(abstract_text) = &changes.abstract_text {
            proposal.abstract_text = abstract_text.clone();
        }
        if let Some(additional_notes) = &changes.additional_notes {
            proposal.additional_notes = additional_notes.clone();
        }
        if let Some(cancelled) = changes.cancelled {
            proposal.cancelled = cancelled;
        }
        Ok(proposal.clone())
    }

    // == Additional Speakers ==
    /// Attaches an additional speaker to a proposal.
    ///
    /// Rejected when the speaker's email matches the primary speaker's,
    /// or when the speaker is already listed on the proposal.
    pub fn add_additional_speaker(
        &mut self,
        proposal_id: u64,
        speaker_id: u64,
        status: SpeakingStatus,
    ) -> Result<AdditionalSpeaker> {
        let speaker_email = self.speaker(speaker_id)?.email.clone();
        let primary_id = self.proposal(proposal_id)?.speaker_id;
        let primary_email = self.speaker(primary_id)?.email.clone();

        if speaker_email == primary_email {
            return Err(AppError::SamePrimarySpeaker(speaker_email));
        }

        let proposal = self
            .proposals
            .get_mut(&proposal_id)
            .ok_or_else(|| AppError::NotFound(format!("proposal {}", proposal_id)))?;
        if proposal.has_additional_speaker(speaker_id) {
            return Err(AppError::DuplicateSpeaker(speaker_email));
        }

        let additional = AdditionalSpeaker { speaker_id, status };
        proposal.additional_speakers.push(additional.clone());
        Ok(additional)
    }

    /// The primary speaker followed by accepted additional speakers.
    pub fn speakers_of(&self, proposal_id: u64) -> Result<Vec<Speaker>> {
        let proposal = self.proposal(proposal_id)?;
        let mut speakers = vec![self.speaker(proposal.speaker_id)?.clone()];
        for speaker_id in proposal.accepted_additional_speakers() {
            speakers.push(self.speaker(speaker_id)?.clone());
        }
        Ok(speakers)
    }

    // == Can Edit ==
    /// Whether a proposal may currently be edited.
    ///
    /// The global override permits editing even while the call for
    /// proposals is closed; otherwise the decision is the availability
    /// gate of the proposal's section, looked up fresh rather than via
    /// any previously resolved relation. A missing section config
    /// propagates as not-found.
    pub fn can_edit(
        &self,
        proposal_id: u64,
        editing_when_closed: bool,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        if editing_when_closed {
            return Ok(true);
        }

        let proposal = self.proposal(proposal_id)?;
        let kind = self.kind(proposal.kind_id)?;
        let section = self
            .sections
            .get(&kind.section_id)
            .ok_or_else(|| AppError::NotFound(format!("section {}", kind.section_id)))?;
        Ok(section.is_available(now))
    }
}
