//! Derived vote counts for a ballot.

use serde::{Deserialize, Serialize};

use crate::ballot::vote::{Vote, VoteValue};

/// Counts of votes by value for one ballot.
///
/// A tally is always derived from the vote rows, never stored, so it cannot
/// drift from the ledger. "For" means yes and "against" means no; abstentions
/// and absences are reported alongside but decide nothing.
///
/// # Example
///
/// ```
/// use plenum_domain::ballot::{Tally, VoteValue};
///
/// let mut tally = Tally::default();
/// tally.record(VoteValue::Yes);
/// tally.record(VoteValue::Yes);
/// tally.record(VoteValue::No);
///
/// assert_eq!(tally.in_favor(), 2);
/// assert_eq!(tally.against(), 1);
/// assert!(tally.carried());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub yes: usize,
    pub no: usize,
    pub abstain: usize,
    pub absent: usize,
}

impl Tally {
    /// Count every vote in the slice.
    pub fn from_votes(votes: &[Vote]) -> Self {
        let mut tally = Tally::default();
        for vote in votes {
            tally.record(vote.value);
        }
        tally
    }

    pub fn record(&mut self, value: VoteValue) {
        match value {
            VoteValue::Yes => self.yes += 1,
            VoteValue::No => self.no += 1,
            VoteValue::Abstain => self.abstain += 1,
            VoteValue::Absent => self.absent += 1,
        }
    }

    pub fn in_favor(&self) -> usize {
        self.yes
    }

    pub fn against(&self) -> usize {
        self.no
    }

    /// All recorded votes, decisive or not.
    pub fn total_recorded(&self) -> usize {
        self.yes + self.no + self.abstain + self.absent
    }

    /// Simple majority of decisive votes: strictly more yes than no.
    pub fn carried(&self) -> bool {
        self.yes > self.no
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "yes: {}, no: {}, abstain: {}, absent: {}",
            self.yes, self.no, self.abstain, self.absent
        )
    }
}
