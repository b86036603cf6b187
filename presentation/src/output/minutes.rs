//! View model the minutes are rendered from.
//!
//! The application layer hands back domain entities; this module assembles
//! them into one serializable record of a sitting with display names
//! resolved, so formatters never touch the store.

use serde::Serialize;

use plenum_application::BallotOutcome;
use plenum_domain::{AgendaItem, Ballot, Matter, Member, Session, Tally, Tenant, VoteValue};

/// One agenda line with the matter's title resolved for display.
#[derive(Debug, Clone, Serialize)]
pub struct AgendaEntry {
    pub item: AgendaItem,
    pub title: String,
}

impl AgendaEntry {
    pub fn new(item: AgendaItem, title: impl Into<String>) -> Self {
        Self {
            item,
            title: title.into(),
        }
    }
}

/// One recorded vote with the member's display name resolved.
#[derive(Debug, Clone, Serialize)]
pub struct VoteLine {
    pub member: String,
    pub value: VoteValue,
}

/// Everything recorded about one ballot of the sitting.
#[derive(Debug, Clone, Serialize)]
pub struct BallotMinute {
    pub ballot: Ballot,
    pub matter: Matter,
    pub tally: Tally,
    pub votes: Vec<VoteLine>,
}

impl BallotMinute {
    /// Resolve a closed ballot's outcome against the member roll.
    pub fn from_outcome(outcome: &BallotOutcome, members: &[Member]) -> Self {
        let votes = outcome
            .votes
            .iter()
            .map(|vote| {
                let member = members
                    .iter()
                    .find(|m| m.id == vote.member)
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| format!("member {}", vote.member));
                VoteLine {
                    member,
                    value: vote.value,
                }
            })
            .collect();
        Self {
            ballot: outcome.ballot.clone(),
            matter: outcome.matter.clone(),
            tally: outcome.tally,
            votes,
        }
    }
}

/// The assembled minutes of one sitting.
#[derive(Debug, Clone, Serialize)]
pub struct SittingMinutes {
    pub tenant: Tenant,
    pub session: Session,
    /// Accounts seen on the presence roster during the sitting.
    pub attendance: Vec<String>,
    pub agenda: Vec<AgendaEntry>,
    pub ballots: Vec<BallotMinute>,
}
