//! Vote records: one standing choice per (ballot, member).

use serde::{Deserialize, Serialize};

use crate::core::{BallotId, MemberId, UnixMillis};

/// The choice a member records on a ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteValue {
    Yes,
    No,
    Abstain,
    Absent,
}

impl VoteValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteValue::Yes => "yes",
            VoteValue::No => "no",
            VoteValue::Abstain => "abstain",
            VoteValue::Absent => "absent",
        }
    }

    /// Whether the value lands in the for/against columns of a tally.
    /// Abstentions and absences are reported separately.
    pub fn is_decisive(&self) -> bool {
        matches!(self, VoteValue::Yes | VoteValue::No)
    }
}

impl std::fmt::Display for VoteValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single member's standing choice on one ballot.
///
/// Identity is the (ballot, member) pair: re-casting overwrites the value and
/// timestamp in place, so at most one vote per member ever exists per ballot
/// and only the final value counts.
///
/// # Example
///
/// ```
/// use plenum_domain::ballot::{Vote, VoteValue};
/// use plenum_domain::{BallotId, MemberId};
///
/// let first = Vote::new(BallotId::new(1), MemberId::new(7), VoteValue::Yes, 1_000);
/// let changed = first.clone().recast(VoteValue::No, 2_000);
///
/// assert_eq!(changed.value, VoteValue::No);
/// assert_eq!((changed.ballot, changed.member), (first.ballot, first.member));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub ballot: BallotId,
    pub member: MemberId,
    pub value: VoteValue,
    pub recorded_at: UnixMillis,
}

impl Vote {
    pub fn new(ballot: BallotId, member: MemberId, value: VoteValue, recorded_at: UnixMillis) -> Self {
        Self {
            ballot,
            member,
            value,
            recorded_at,
        }
    }

    /// Overwrite the value and timestamp while keeping the identity.
    pub fn recast(mut self, value: VoteValue, now: UnixMillis) -> Self {
        self.value = value;
        self.recorded_at = now;
        self
    }
}
