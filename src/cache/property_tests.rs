//! Property-Based Tests for the Tally Cache
//!
//! Uses proptest to verify the counter invariants over arbitrary vote and
//! feedback histories.

use std::sync::Arc;

use chrono::Utc;
use proptest::prelude::*;

use crate::cache::{CounterKind, InMemoryCounterCache, TallyCache};
use crate::models::VoteScore;
use crate::store::ReviewStore;

// == Test Configuration ==
const TEST_TIMEOUT_LONG: u64 = 300;

// == Strategies ==
fn score_strategy() -> impl Strategy<Value = VoteScore> {
    prop_oneof![
        Just(VoteScore::PlusOne),
        Just(VoteScore::PlusZero),
        Just(VoteScore::Abstain),
        Just(VoteScore::MinusZero),
        Just(VoteScore::MinusOne),
    ]
}

/// A review event applied to one of a small set of proposals.
#[derive(Debug, Clone)]
enum ReviewOp {
    Vote {
        proposal_id: u64,
        reviewer_id: u64,
        score: VoteScore,
    },
    Feedback {
        proposal_id: u64,
        author_id: u64,
    },
}

fn review_op_strategy() -> impl Strategy<Value = ReviewOp> {
    prop_oneof![
        (1u64..4, 1u64..8, score_strategy()).prop_map(|(proposal_id, reviewer_id, score)| {
            ReviewOp::Vote {
                proposal_id,
                reviewer_id,
                score,
            }
        }),
        (1u64..4, 1u64..8).prop_map(|(proposal_id, author_id)| ReviewOp::Feedback {
            proposal_id,
            author_id,
        }),
    ]
}

fn apply(reviews: &mut ReviewStore, tally: &TallyCache, ops: &[ReviewOp]) {
    for op in ops {
        match op {
            ReviewOp::Vote {
                proposal_id,
                reviewer_id,
                score,
            } => {
                reviews.cast_vote(*proposal_id, *reviewer_id, *score, Utc::now());
                tally.refresh(reviews, *proposal_id);
            }
            ReviewOp::Feedback {
                proposal_id,
                author_id,
            } => {
                reviews.add_feedback(
                    *proposal_id,
                    *author_id,
                    "a comment".to_string(),
                    Utc::now(),
                );
                tally.refresh(reviews, *proposal_id);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // After any history of refreshed mutations, every cached counter
    // equals a direct recount of the underlying records.
    #[test]
    fn prop_counters_match_records(ops in prop::collection::vec(review_op_strategy(), 1..40)) {
        let cache = Arc::new(InMemoryCounterCache::new());
        let tally = TallyCache::new(cache, TEST_TIMEOUT_LONG);
        let mut reviews = ReviewStore::new();

        apply(&mut reviews, &tally, &ops);

        for proposal_id in 1..4u64 {
            for kind in CounterKind::VOTE_BUCKETS {
                let score = kind.score().unwrap();
                prop_assert_eq!(
                    tally.get(&reviews, proposal_id, kind),
                    reviews.vote_count(proposal_id, score),
                    "bucket mismatch for proposal {}", proposal_id
                );
            }
            prop_assert_eq!(
                tally.get(&reviews, proposal_id, CounterKind::Feedback),
                reviews.feedback_count(proposal_id)
            );
        }
    }

    // total_votes is always the sum of the four bucket reads.
    #[test]
    fn prop_total_votes_additive(ops in prop::collection::vec(review_op_strategy(), 1..40)) {
        let cache = Arc::new(InMemoryCounterCache::new());
        let tally = TallyCache::new(cache, TEST_TIMEOUT_LONG);
        let mut reviews = ReviewStore::new();

        apply(&mut reviews, &tally, &ops);

        for proposal_id in 1..4u64 {
            let sum: u64 = CounterKind::VOTE_BUCKETS
                .iter()
                .map(|kind| tally.get(&reviews, proposal_id, *kind))
                .sum();
            prop_assert_eq!(tally.total_votes(&reviews, proposal_id), sum);
        }
    }

    // Reading twice with no intervening writes returns the same value.
    #[test]
    fn prop_get_idempotent(ops in prop::collection::vec(review_op_strategy(), 1..40)) {
        let cache = Arc::new(InMemoryCounterCache::new());
        let tally = TallyCache::new(cache, TEST_TIMEOUT_LONG);
        let mut reviews = ReviewStore::new();

        apply(&mut reviews, &tally, &ops);

        for proposal_id in 1..4u64 {
            for kind in CounterKind::ALL {
                let first = tally.get(&reviews, proposal_id, kind);
                let second = tally.get(&reviews, proposal_id, kind);
                prop_assert_eq!(first, second);
            }
        }
    }

    // One vote per reviewer per proposal: re-voting never inflates the total.
    #[test]
    fn prop_revote_does_not_inflate(
        scores in prop::collection::vec(score_strategy(), 1..10),
    ) {
        let cache = Arc::new(InMemoryCounterCache::new());
        let tally = TallyCache::new(cache, TEST_TIMEOUT_LONG);
        let mut reviews = ReviewStore::new();

        // The same reviewer changes their mind repeatedly
        for score in &scores {
            reviews.cast_vote(1, 42, *score, Utc::now());
            tally.refresh(&reviews, 1);
        }

        prop_assert!(tally.total_votes(&reviews, 1) <= 1);
    }
}
