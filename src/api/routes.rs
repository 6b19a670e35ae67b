//! API Routes
//!
//! Configures the Axum router with all CFP backend endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_speaker_handler, available_sections_handler, create_kind_handler, create_section_handler,
    feedback_handler, health_handler, proposal_detail_handler, register_speaker_handler,
    set_result_handler, submit_proposal_handler, tally_handler, update_proposal_handler,
    update_section_handler, vote_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /speakers` - Register a speaker
/// - `POST /sections` - Create a section's CFP window config
/// - `PUT /sections/:id` - Replace a section's window config
/// - `GET /sections/available` - Sections currently accepting proposals
/// - `POST /kinds` - Create a proposal kind under a section
/// - `POST /proposals` - Submit a proposal
/// - `GET /proposals/:id` - Proposal detail with status, tally and can-edit
/// - `PUT /proposals/:id` - Edit a proposal (gated)
/// - `POST /proposals/:id/speakers` - Add an additional speaker
/// - `POST /proposals/:id/votes` - Cast or change a review vote
/// - `POST /proposals/:id/feedback` - Post review feedback
/// - `POST /proposals/:id/result` - Set the review result
/// - `GET /proposals/:id/tally` - Cached vote/feedback tally
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/speakers", post(register_speaker_handler))
        .route("/sections", post(create_section_handler))
        .route("/sections/:id", put(update_section_handler))
        .route("/sections/available", get(available_sections_handler))
        .route("/kinds", post(create_kind_handler))
        .route("/proposals", post(submit_proposal_handler))
        .route(
            "/proposals/:id",
            get(proposal_detail_handler).put(update_proposal_handler),
        )
        .route("/proposals/:id/speakers", post(add_speaker_handler))
        .route("/proposals/:id/votes", post(vote_handler))
        .route("/proposals/:id/feedback", post(feedback_handler))
        .route("/proposals/:id/result", post(set_result_handler))
        .route("/proposals/:id/tally", get(tally_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
