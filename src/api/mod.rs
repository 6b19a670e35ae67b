//! API Module
//!
//! HTTP handlers and routing for the CFP backend REST API.
//!
//! The HTTP surface is a thin glue layer: each handler validates its
//! request, delegates to the stores and the tally cache, and maps
//! domain errors onto HTTP statuses.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
