//! Domain models and API DTOs for the CFP backend
//!
//! Domain entities (sections, proposals, review records) live alongside
//! the request/response DTOs used for HTTP serialization.

pub mod proposal;
pub mod requests;
pub mod responses;
pub mod review;
pub mod section;

// Re-export commonly used types
pub use proposal::{
    AdditionalSpeaker, Affiliation, AudienceLevel, Proposal, ProposalKind, Speaker, SpeakingStatus,
};
pub use requests::{
    AddSpeakerRequest, CreateKindRequest, CreateSectionRequest, FeedbackRequest,
    RegisterSpeakerRequest, SetResultRequest, SubmitProposalRequest, UpdateProposalRequest,
    UpdateSectionRequest, VoteRequest,
};
pub use responses::{ErrorResponse, HealthResponse, ProposalResponse, TallyResponse};
pub use review::{ProposalFeedback, ProposalVote, ResultStatus, VoteScore};
pub use section::ProposalSection;
