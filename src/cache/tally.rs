//! Vote/Feedback Tally Cache
//!
//! Cache-aside counters over per-proposal vote and feedback aggregates.
//! Reads consult the cache first and fall back to recounting the
//! underlying records; every vote/feedback mutation refreshes all five
//! counters before the mutation is reported complete.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::cache::{CacheUnavailable, CounterCache};
use crate::models::VoteScore;
use crate::store::ReviewStore;

// == Counter Kind ==
/// One of the five cached counters maintained per proposal: the four
/// counted vote buckets plus the feedback count. Abstentions are never
/// counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    PlusOne,
    PlusZero,
    MinusZero,
    MinusOne,
    Feedback,
}

impl CounterKind {
    /// All five counters, in refresh order.
    pub const ALL: [CounterKind; 5] = [
        CounterKind::PlusOne,
        CounterKind::PlusZero,
        CounterKind::MinusZero,
        CounterKind::MinusOne,
        CounterKind::Feedback,
    ];

    /// The four vote buckets that make up `total_votes`.
    pub const VOTE_BUCKETS: [CounterKind; 4] = [
        CounterKind::PlusOne,
        CounterKind::PlusZero,
        CounterKind::MinusZero,
        CounterKind::MinusOne,
    ];

    // == Cache Key ==
    /// Deterministic, collision-free cache key for this counter on the
    /// given proposal.
    pub fn cache_key(&self, proposal_id: u64) -> String {
        match self {
            CounterKind::PlusOne => format!("proposal_{}_plus_one", proposal_id),
            CounterKind::PlusZero => format!("proposal_{}_plus_zero", proposal_id),
            CounterKind::MinusZero => format!("proposal_{}_minus_zero", proposal_id),
            CounterKind::MinusOne => format!("proposal_{}_minus_one", proposal_id),
            CounterKind::Feedback => format!("proposal_{}_feedback_count", proposal_id),
        }
    }

    /// The vote score this counter tallies, or None for the feedback
    /// counter.
    pub fn score(&self) -> Option<VoteScore> {
        match self {
            CounterKind::PlusOne => Some(VoteScore::PlusOne),
            CounterKind::PlusZero => Some(VoteScore::PlusZero),
            CounterKind::MinusZero => Some(VoteScore::MinusZero),
            CounterKind::MinusOne => Some(VoteScore::MinusOne),
            CounterKind::Feedback => None,
        }
    }
}

// == Vote Tally ==
/// Snapshot of all five counters for one proposal.
#[derive(Debug, Clone, Serialize)]
pub struct VoteTally {
    pub plus_one: u64,
    pub plus_zero: u64,
    pub minus_zero: u64,
    pub minus_one: u64,
    pub feedback_count: u64,
    pub total_votes: u64,
}

// == Tally Cache ==
/// Cache-aside layer over per-proposal vote and feedback counts.
///
/// The cache is an accelerator, never authoritative: the source of truth
/// is always the vote/feedback records in the [`ReviewStore`]. A longer
/// expiry is fine because individual counters are refreshed whenever
/// votes or feedback records change.
pub struct TallyCache {
    cache: Arc<dyn CounterCache>,
    timeout_long: u64,
}

impl TallyCache {
    // == Constructor ==
    /// Creates a new TallyCache over the given backend.
    ///
    /// # Arguments
    /// * `cache` - The counter cache backend
    /// * `timeout_long` - Counter expiry in seconds
    pub fn new(cache: Arc<dyn CounterCache>, timeout_long: u64) -> Self {
        Self {
            cache,
            timeout_long,
        }
    }

    /// Counts the matching records directly from the review store.
    fn recount(&self, reviews: &ReviewStore, proposal_id: u64, kind: CounterKind) -> u64 {
        match kind.score() {
            Some(score) => reviews.vote_count(proposal_id, score),
            None => reviews.feedback_count(proposal_id),
        }
    }

    // == Get ==
    /// Returns one counter, cache first.
    ///
    /// On a miss (or an unreachable backend, which reads as a miss) the
    /// counter is recomputed from the review records and written back
    /// with the long expiry. Concurrent readers may recompute the same
    /// miss; the recomputation is read-only and idempotent, so no lock
    /// is needed.
    pub fn get(&self, reviews: &ReviewStore, proposal_id: u64, kind: CounterKind) -> u64 {
        let key = kind.cache_key(proposal_id);
        match self.cache.get(&key) {
            Ok(Some(count)) => return count,
            Ok(None) => {}
            Err(CacheUnavailable) => {
                warn!("counter cache unreachable, recomputing {}", key);
            }
        }

        let count = self.recount(reviews, proposal_id, kind);
        if self.cache.set(&key, count, self.timeout_long).is_err() {
            warn!("failed to populate counter cache for {}", key);
        }
        count
    }

    // == Refresh ==
    /// Unconditionally recomputes all five counters for a proposal and
    /// overwrites their cached values.
    ///
    /// Must be called by whatever creates or mutates a vote/feedback
    /// record, before that mutation is considered complete, so that
    /// subsequent reads observe the new tally without waiting for
    /// expiry. A failed cache write is logged and non-fatal: the record
    /// write already succeeded, and the stale counter lasts at most
    /// until the next refresh or expiry.
    pub fn refresh(&self, reviews: &ReviewStore, proposal_id: u64) {
        for kind in CounterKind::ALL {
            let count = self.recount(reviews, proposal_id, kind);
            let key = kind.cache_key(proposal_id);
            if self.cache.set(&key, count, self.timeout_long).is_err() {
                warn!("failed to refresh counter cache for {}", key);
            }
        }
    }

    // == Total Votes ==
    /// Sum of the four vote-bucket counters.
    pub fn total_votes(&self, reviews: &ReviewStore, proposal_id: u64) -> u64 {
        CounterKind::VOTE_BUCKETS
            .iter()
            .map(|kind| self.get(reviews, proposal_id, *kind))
            .sum()
    }

    // == Snapshot ==
    /// All five counters plus the vote total, via the cached `get` path.
    pub fn snapshot(&self, reviews: &ReviewStore, proposal_id: u64) -> VoteTally {
        let plus_one = self.get(reviews, proposal_id, CounterKind::PlusOne);
        let plus_zero = self.get(reviews, proposal_id, CounterKind::PlusZero);
        let minus_zero = self.get(reviews, proposal_id, CounterKind::MinusZero);
        let minus_one = self.get(reviews, proposal_id, CounterKind::MinusOne);
        let feedback_count = self.get(reviews, proposal_id, CounterKind::Feedback);

        VoteTally {
            plus_one,
            plus_zero,
            minus_zero,
            minus_one,
            feedback_count,
            total_votes: plus_one + plus_zero + minus_zero + minus_one,
        }
    }
}
