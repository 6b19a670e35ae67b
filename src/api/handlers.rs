//! API Handlers
//!
//! HTTP request handlers for each CFP backend endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::cache::{CounterCache, InMemoryCounterCache, TallyCache};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    AdditionalSpeaker, AddSpeakerRequest, CreateKindRequest, CreateSectionRequest,
    FeedbackRequest, HealthResponse, Proposal, ProposalFeedback, ProposalKind, ProposalResponse,
    ProposalSection, ProposalVote, RegisterSpeakerRequest, ResultStatus, SetResultRequest,
    Speaker, SubmitProposalRequest, TallyResponse, UpdateProposalRequest, UpdateSectionRequest,
    VoteRequest,
};
use crate::store::{ProposalStore, ReviewStore};

/// Application state shared across all handlers.
///
/// Stores are wrapped in Arc<RwLock<>> for thread-safe access; the tally
/// cache has its own interior mutability and is shared without further
/// coordination. The editing override is threaded through state rather
/// than read from process-wide configuration.
#[derive(Clone)]
pub struct AppState {
    /// Speakers, sections, kinds and proposals
    pub proposals: Arc<RwLock<ProposalStore>>,
    /// Vote, feedback and result records
    pub reviews: Arc<RwLock<ReviewStore>>,
    /// Cache-aside vote/feedback counters
    pub tally: Arc<TallyCache>,
    /// The in-memory counter backend, kept for the cleanup task
    pub counters: Arc<InMemoryCounterCache>,
    /// Allow proposal editing even when the call for proposals is closed
    pub editing_when_closed: bool,
}

impl AppState {
    /// Creates a new AppState over the given counter cache backend.
    pub fn new(
        counters: Arc<InMemoryCounterCache>,
        cache_timeout_long: u64,
        editing_when_closed: bool,
    ) -> Self {
        let backend: Arc<dyn CounterCache> = counters.clone();
        Self {
            proposals: Arc::new(RwLock::new(ProposalStore::new())),
            reviews: Arc::new(RwLock::new(ReviewStore::new())),
            tally: Arc::new(TallyCache::new(backend, cache_timeout_long)),
            counters,
            editing_when_closed,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(InMemoryCounterCache::new()),
            config.cache_timeout_long,
            config.proposal_editing_when_cfp_is_closed,
        )
    }
}

// == Speakers ==
/// Handler for POST /speakers
pub async fn register_speaker_handler(
    State(state): State<AppState>,
    Json(req): Json<RegisterSpeakerRequest>,
) -> Result<Json<Speaker>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let mut proposals = state.proposals.write().await;
    Ok(Json(proposals.register_speaker(req.name, req.email)))
}

// == Sections ==
/// Handler for POST /sections
pub async fn create_section_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateSectionRequest>,
) -> Result<Json<ProposalSection>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let mut proposals = state.proposals.write().await;
    Ok(Json(proposals.create_section(
        req.name,
        req.start,
        req.end,
        req.closed,
        req.published,
    )))
}

/// Handler for PUT /sections/:id
///
/// Replaces the section's window configuration.
pub async fn update_section_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateSectionRequest>,
) -> Result<Json<ProposalSection>> {
    let mut proposals = state.proposals.write().await;
    Ok(Json(proposals.update_section(
        id,
        req.start,
        req.end,
        req.closed,
        req.published,
    )?))
}

/// Handler for GET /sections/available
///
/// Returns exactly the sections whose submission window is open now.
pub async fn available_sections_handler(
    State(state): State<AppState>,
) -> Json<Vec<ProposalSection>> {
    let proposals = state.proposals.read().await;
    Json(proposals.available_sections(Utc::now()))
}

// == Kinds ==
/// Handler for POST /kinds
pub async fn create_kind_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateKindRequest>,
) -> Result<Json<ProposalKind>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let mut proposals = state.proposals.write().await;
    Ok(Json(proposals.create_kind(req.section_id, req.name, req.slug)?))
}

// == Proposals ==
/// Handler for POST /proposals
///
/// Submission is rejected while the kind's section is unavailable.
pub async fn submit_proposal_handler(
    State(state): State<AppState>,
    Json(req): Json<SubmitProposalRequest>,
) -> Result<Json<Proposal>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let mut proposals = state.proposals.write().await;
    Ok(Json(proposals.submit(&req, Utc::now())?))
}

/// Handler for GET /proposals/:id
///
/// Combines the proposal record with its review status (Undecided when
/// no result exists), the cached tally and the can-edit decision.
pub async fn proposal_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ProposalResponse>> {
    let proposals = state.proposals.read().await;
    let proposal = proposals.proposal(id)?.clone();
    let section_id = proposals.kind(proposal.kind_id)?.section_id;
    let number = proposal.number();
    let speakers = proposals.speakers_of(id)?;
    let can_edit = proposals.can_edit(id, state.editing_when_closed, Utc::now())?;

    let reviews = state.reviews.read().await;
    let status = reviews.result_status(id);
    let tally = state.tally.snapshot(&reviews, id);

    Ok(Json(ProposalResponse {
        proposal,
        number,
        section_id,
        status,
        can_edit,
        tally,
        speakers,
    }))
}

/// Handler for PUT /proposals/:id
///
/// Gated by the can-edit decision: the editing override wins, otherwise
/// the proposal's section must be available.
pub async fn update_proposal_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateProposalRequest>,
) -> Result<Json<Proposal>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let mut proposals = state.proposals.write().await;
    if !proposals.can_edit(id, state.editing_when_closed, Utc::now())? {
        return Err(AppError::EditingClosed(id));
    }
    Ok(Json(proposals.update_proposal(id, &req)?))
}

/// Handler for POST /proposals/:id/speakers
pub async fn add_speaker_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<AddSpeakerRequest>,
) -> Result<Json<AdditionalSpeaker>> {
    let mut proposals = state.proposals.write().await;
    Ok(Json(proposals.add_additional_speaker(
        id,
        req.speaker_id,
        req.status,
    )?))
}

// == Review ==
/// Handler for POST /proposals/:id/votes
///
/// Records the vote, then refreshes all five counters before the
/// mutation is reported complete.
pub async fn vote_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<ProposalVote>> {
    {
        let proposals = state.proposals.read().await;
        proposals.proposal(id)?;
    }

    let mut reviews = state.reviews.write().await;
    let vote = reviews.cast_vote(id, req.reviewer_id, req.score, Utc::now());
    state.tally.refresh(&reviews, id);
    Ok(Json(vote))
}

/// Handler for POST /proposals/:id/feedback
///
/// Same write path as votes: store the record, then refresh the tally.
pub async fn feedback_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<ProposalFeedback>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }
    {
        let proposals = state.proposals.read().await;
        proposals.proposal(id)?;
    }

    let mut reviews = state.reviews.write().await;
    let feedback = reviews.add_feedback(id, req.author_id, req.comment, Utc::now());
    state.tally.refresh(&reviews, id);
    Ok(Json(feedback))
}

/// Handler for POST /proposals/:id/result
pub async fn set_result_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<SetResultRequest>,
) -> Result<Json<ResultStatus>> {
    {
        let proposals = state.proposals.read().await;
        proposals.proposal(id)?;
    }

    let mut reviews = state.reviews.write().await;
    reviews.set_result(id, req.status);
    Ok(Json(req.status))
}

/// Handler for GET /proposals/:id/tally
pub async fn tally_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TallyResponse>> {
    {
        let proposals = state.proposals.read().await;
        proposals.proposal(id)?;
    }

    let reviews = state.reviews.read().await;
    Ok(Json(TallyResponse {
        proposal_id: id,
        tally: state.tally.snapshot(&reviews, id),
    }))
}

// == Health ==
/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
