//! Proposal Section Module
//!
//! Per-section configuration of the call-for-proposals submission window,
//! including the availability gate that decides whether a section currently
//! accepts submissions and edits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Proposal Section ==
/// Configuration of proposal submissions for one conference section.
///
/// A section is available for proposals iff:
/// - `closed` is not explicitly true, and
/// - it is after `start` (if there is one), and
/// - it is before `end` (if there is one).
///
/// An unset bound imposes no constraint; an unset `closed` flag behaves
/// as "not closed".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalSection {
    /// Unique section identifier
    pub id: u64,
    /// Section name (e.g. "Talks")
    pub name: String,
    /// Optional opening time of the submission window
    pub start: Option<DateTime<Utc>>,
    /// Optional closing time of the submission window
    pub end: Option<DateTime<Utc>>,
    /// Manual close override; only an explicit `true` blocks availability
    pub closed: Option<bool>,
    /// Whether the section's content has been published
    pub published: Option<bool>,
}

impl ProposalSection {
    // == Is Available ==
    /// Returns whether this section currently accepts proposals.
    ///
    /// Evaluated in strict short-circuit order: the manual `closed`
    /// override wins, then the not-yet-open check, then the past-close
    /// check.
    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        if self.closed == Some(true) {
            return false;
        }
        if let Some(start) = self.start {
            if start > now {
                return false;
            }
        }
        if let Some(end) = self.end {
            if end < now {
                return false;
            }
        }
        true
    }

    // == Available ==
    /// Selects exactly the sections for which [`Self::is_available`] holds.
    ///
    /// The batch variant reuses the single-instance predicate so the two
    /// can never diverge.
    pub fn available<'a, I>(sections: I, now: DateTime<Utc>) -> Vec<&'a ProposalSection>
    where
        I: IntoIterator<Item = &'a ProposalSection>,
    {
        sections
            .into_iter()
            .filter(|section| section.is_available(now))
            .collect()
    }
}


// == Property Tests ==
#[cfg(test)]
mod property_tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::option;
    use proptest::prelude::*;

    /// Generates timestamps within a few years of the reference instant.
    fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
        (1_577_836_800i64..1_893_456_000i64).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn section_strategy() -> impl Strategy<Value = ProposalSection> {
        (
            option::of(timestamp_strategy()),
            option::of(timestamp_strategy()),
            option::of(any::<bool>()),
        )
            .prop_map(|(start, end, closed)| ProposalSection {
                id: 1,
                name: "Talks".to_string(),
                start,
                end,
                closed,
                published: None,
            })
    }

    proptest! {
        // A closed section is never available, whatever its bounds.
        #[test]
        fn prop_closed_never_available(mut s in section_strategy(), now in timestamp_strategy()) {
            s.closed = Some(true);
            prop_assert!(!s.is_available(now));
        }

        // A future start always blocks when the section is not closed.
        #[test]
        fn prop_future_start_blocks(mut s in section_strategy(), now in timestamp_strategy()) {
            s.closed = Some(false);
            s.start = Some(now + chrono::Duration::seconds(1));
            prop_assert!(!s.is_available(now));
        }

        // A past end always blocks when the section is not closed.
        #[test]
        fn prop_past_end_blocks(mut s in section_strategy(), now in timestamp_strategy()) {
            s.closed = None;
            s.end = Some(now - chrono::Duration::seconds(1));
            prop_assert!(!s.is_available(now));
        }

        // The batch selection agrees with the predicate on every row.
        #[test]
        fn prop_available_agrees_with_predicate(
            sections in prop::collection::vec(section_strategy(), 0..16),
            now in timestamp_strategy(),
        ) {
            let open = ProposalSection::available(&sections, now);
            let expected = sections.iter().filter(|s| s.is_available(now)).count();
            prop_assert_eq!(open.len(), expected);
            prop_assert!(open.iter().all(|s| s.is_available(now)));
        }
    }
}
