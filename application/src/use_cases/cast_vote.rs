//! Cast Vote use case
//!
//! The write path of the vote ledger: gate check, vote binding, eligibility,
//! then the idempotent upsert keyed by (ballot, member).

use std::sync::Arc;

use tracing::info;

use crate::ports::journal::{JournalEvent, NoJournal, SittingJournal};
use crate::ports::store::ChamberStore;
use crate::retry::{RetryPolicy, with_retry};
use plenum_domain::{
    Action, Actor, BallotId, CoreError, MemberId, Role, Subject, Vote, VoteValue, require,
};

/// Use case for recording votes.
///
/// Casting is idempotent and re-castable: while the ballot stays open a
/// member may change their vote any number of times and only the final value
/// counts. The whole flow is safe to retry on transient store faults.
pub struct CastVoteUseCase<S: ChamberStore + 'static> {
    store: Arc<S>,
    journal: Arc<dyn SittingJournal>,
    retry: RetryPolicy,
}

impl<S: ChamberStore + 'static> CastVoteUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            journal: Arc::new(NoJournal),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_journal(mut self, journal: Arc<dyn SittingJournal>) -> Self {
        self.journal = journal;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Record `member`'s choice on `ballot`.
    ///
    /// Chairs and members vote only as themselves; an admin may record a vote
    /// on any member's behalf (roll-call entry). Eligibility is checked here,
    /// the open-ballot check happens inside the store's atomic upsert.
    pub async fn cast(
        &self,
        actor: &Actor,
        ballot: BallotId,
        member: MemberId,
        value: VoteValue,
    ) -> Result<Vote, CoreError> {
        require(actor, Action::CastVote, Subject::Ballot, &[])?;
        if actor.role != Role::Admin && actor.member != Some(member) {
            return Err(CoreError::Unauthorized {
                role: actor.role,
                action: Action::CastVote,
                subject: Subject::Ballot,
            });
        }

        let store = &self.store;
        let voter = with_retry(&self.retry, "member read", || store.member(member)).await?;
        voter.voting_eligibility()?;

        let vote = with_retry(&self.retry, "vote upsert", || {
            store.upsert_vote(ballot, member, value)
        })
        .await?;

        info!(
            "Vote recorded on ballot {} by member {}: {}",
            ballot, member, value
        );
        self.journal.record(JournalEvent::vote_recorded(actor, &vote));
        Ok(vote)
    }

    /// Record the actor's own vote, using the seat bound to their account.
    pub async fn cast_own(
        &self,
        actor: &Actor,
        ballot: BallotId,
        value: VoteValue,
    ) -> Result<Vote, CoreError> {
        let member = actor.member.ok_or(CoreError::Unauthorized {
            role: actor.role,
            action: Action::CastVote,
            subject: Subject::Ballot,
        })?;
        self.cast(actor, ballot, member, value).await
    }
}
