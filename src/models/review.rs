//! Review Domain Model
//!
//! Vote, feedback and result records produced by the peer-review process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Vote Score ==
/// The five review-score categories a reviewer may assign.
///
/// Numeric values match the original ballot weighting so that scores can
/// be compared and aggregated: +1 is a strong accept, -1 a strong reject,
/// and abstentions sit at zero without entering any vote bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteScore {
    /// Good proposal and I will argue for it to be accepted.
    #[serde(rename = "+1")]
    PlusOne,
    /// OK proposal, but I will not argue for it to be accepted.
    #[serde(rename = "+0")]
    PlusZero,
    /// I abstain from voting on this proposal.
    #[serde(rename = "n/a")]
    Abstain,
    /// Weak proposal, but I will not argue against acceptance.
    #[serde(rename = "-0")]
    MinusZero,
    /// Serious issues and I will argue to reject this proposal.
    #[serde(rename = "-1")]
    MinusOne,
}

impl VoteScore {
    /// Ballot weight of this score.
    pub fn numeric(&self) -> i8 {
        match self {
            VoteScore::PlusOne => 3,
            VoteScore::PlusZero => 1,
            VoteScore::Abstain => 0,
            VoteScore::MinusZero => -1,
            VoteScore::MinusOne => -3,
        }
    }
}

// == Proposal Vote ==
/// A reviewer's vote on a proposal. One vote per reviewer per proposal;
/// re-voting overwrites the previous record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalVote {
    pub proposal_id: u64,
    pub reviewer_id: u64,
    pub score: VoteScore,
    pub cast_at: DateTime<Utc>,
}

// == Proposal Feedback ==
/// A feedback comment left on a proposal during review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalFeedback {
    pub proposal_id: u64,
    pub author_id: u64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

// == Result Status ==
/// Review outcome for a proposal. Proposals without a result record
/// display as Undecided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Accepted,
    Rejected,
    Standby,
    #[default]
    Undecided,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_numeric_values() {
        assert_eq!(VoteScore::PlusOne.numeric(), 3);
        assert_eq!(VoteScore::PlusZero.numeric(), 1);
        assert_eq!(VoteScore::Abstain.numeric(), 0);
        assert_eq!(VoteScore::MinusZero.numeric(), -1);
        assert_eq!(VoteScore::MinusOne.numeric(), -3);
    }

    #[test]
    fn test_score_serde_labels() {
        assert_eq!(serde_json::to_string(&VoteScore::PlusOne).unwrap(), "\"+1\"");
        assert_eq!(serde_json::to_string(&VoteScore::Abstain).unwrap(), "\"n/a\"");
        let score: VoteScore = serde_json::from_str("\"-0\"").unwrap();
        assert_eq!(score, VoteScore::MinusZero);
    }

    #[test]
    fn test_result_status_defaults_to_undecided() {
        assert_eq!(ResultStatus::default(), ResultStatus::Undecided);
    }
}
