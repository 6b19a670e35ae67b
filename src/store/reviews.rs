//! Review Store
//!
//! Authoritative storage for vote, feedback and result records. The
//! cached tallies are always derived from (and reconcilable against)
//! these records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{ProposalFeedback, ProposalVote, ResultStatus, VoteScore};

// == Review Store ==
/// Vote, feedback and result records, keyed by proposal.
#[derive(Debug, Default)]
pub struct ReviewStore {
    /// One vote per (proposal, reviewer); re-voting overwrites
    votes: HashMap<(u64, u64), ProposalVote>,
    /// Feedback comments per proposal, in posting order
    feedback: HashMap<u64, Vec<ProposalFeedback>>,
    /// Review outcome per proposal; absence reads as Undecided
    results: HashMap<u64, ResultStatus>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Cast Vote ==
    /// Records a reviewer's vote on a proposal, replacing any previous
    /// vote by the same reviewer.
    ///
    /// The caller is responsible for refreshing the tally cache before
    /// treating the mutation as complete.
    pub fn cast_vote(
        &mut self,
        proposal_id: u64,
        reviewer_id: u64,
        score: VoteScore,
        now: DateTime<Utc>,
    ) -> ProposalVote {
        let vote = ProposalVote {
            proposal_id,
            reviewer_id,
            score,
            cast_at: now,
        };
        self.votes.insert((proposal_id, reviewer_id), vote.clone());
        vote
    }

    // == Vote Count ==
    /// Number of votes with exactly the given score on a proposal.
    pub fn vote_count(&self, proposal_id: u64, score: VoteScore) -> u64 {
        self.votes
            .values()
            .filter(|vote| vote.proposal_id == proposal_id && vote.score == score)
            .count() as u64
    }

    // == Add Feedback ==
    /// Appends a feedback comment to a proposal.
    ///
    /// As with votes, the caller refreshes the tally cache afterwards.
    pub fn add_feedback(
        &mut self,
        proposal_id: u64,
        author_id: u64,
        comment: String,
        now: DateTime<Utc>,
    ) -> ProposalFeedback {
        let feedback = ProposalFeedback {
            proposal_id,
            author_id,
            comment,
            created_at: now,
        };
        self.feedback
            .entry(proposal_id)
            .or_default()
            .push(feedback.clone());
        feedback
    }

    // == Feedback Count ==
    /// Number of feedback comments on a proposal.
    pub fn feedback_count(&self, proposal_id: u64) -> u64 {
        self.feedback
            .get(&proposal_id)
            .map_or(0, |comments| comments.len() as u64)
    }

    // == Result ==
    /// Sets the review outcome for a proposal.
    pub fn set_result(&mut self, proposal_id: u64, status: ResultStatus) {
        self.results.insert(proposal_id, status);
    }

    /// Review outcome for a proposal, Undecided when no result record
    /// exists. This is the one sanctioned default-on-missing-data
    /// behavior; everything else propagates as not-found.
    pub fn result_status(&self, proposal_id: u64) -> ResultStatus {
        self.results
            .get(&proposal_id)
            .copied()
            .unwrap_or_default()
    }
}
