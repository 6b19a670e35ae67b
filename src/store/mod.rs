//! Store Module
//!
//! Authoritative in-memory storage for proposals and review records.
//! Cached counters are always derived from these stores.

mod proposals;
mod reviews;

// Re-export public types
pub use proposals::ProposalStore;
pub use reviews::ReviewStore;
