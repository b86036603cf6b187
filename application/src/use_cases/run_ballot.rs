//! Run Ballot use case
//!
//! Opens and closes voting rounds and serves their derived state. The
//! single-open-ballot invariant itself lives in the store's conditional
//! insert; this layer contributes the gate checks, the journal trail, and
//! the tally derivation.

use std::sync::Arc;

use tracing::info;

use crate::ports::journal::{JournalEvent, NoJournal, SittingJournal};
use crate::ports::store::{BallotScope, ChamberStore};
use crate::retry::{RetryPolicy, with_retry};
use plenum_domain::{
    Action, Actor, Ballot, BallotId, CoreError, Matter, MatterId, SessionId, Subject, Tally, Vote,
    require,
};

/// Snapshot of a ballot with its derived tally.
#[derive(Debug, Clone)]
pub struct BallotState {
    pub ballot: Ballot,
    pub tally: Tally,
    pub votes: Vec<Vote>,
}

/// Result of closing a ballot: the final record, frozen for good.
#[derive(Debug, Clone)]
pub struct BallotOutcome {
    pub ballot: Ballot,
    pub matter: Matter,
    pub tally: Tally,
    pub votes: Vec<Vote>,
}

/// Use case for the ballot lifecycle.
pub struct RunBallotUseCase<S: ChamberStore + 'static> {
    store: Arc<S>,
    journal: Arc<dyn SittingJournal>,
    retry: RetryPolicy,
}

impl<S: ChamberStore + 'static> RunBallotUseCase<S> {
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

    /// Open a voting round for `matter` under `session`.
    ///
    /// The store decides races: of two concurrent opens in the same
    /// exclusivity scope, exactly one wins and the other observes
    /// [`CoreError::BallotAlreadyOpen`]. Not retried, a lost race is final.
    pub async fn open_ballot(
        &self,
        actor: &Actor,
        session: SessionId,
        matter: MatterId,
    ) -> Result<Ballot, CoreError> {
        require(actor, Action::Create, Subject::Ballot, &[])?;
        let ballot = self.store.insert_open_ballot(session, matter).await?;
        info!(
            "Ballot {} opened for matter {} in session {}",
            ballot.id, matter, session
        );
        self.journal
            .record(JournalEvent::ballot_opened(actor, &ballot));
        Ok(ballot)
    }

    /// Close the ballot and mark its matter voted, atomically.
    ///
    /// Never retried: the transition is not idempotent, and after a transient
    /// fault the caller must re-check state before trying again.
    pub async fn close_ballot(
        &self,
        actor: &Actor,
        id: BallotId,
    ) -> Result<BallotOutcome, CoreError> {
        require(actor, Action::Update, Subject::Ballot, &[])?;
        let (ballot, matter) = self.store.close_ballot_and_mark_voted(id).await?;

        // The ballot is closed, so this read sees the final, immutable rows.
        let store = &self.store;
        let votes = with_retry(&self.retry, "final vote read", || store.votes(id)).await?;
        let tally = Tally::from_votes(&votes);

        info!("Ballot {} closed ({})", id, tally);
        self.journal
            .record(JournalEvent::ballot_closed(actor, &ballot, &matter, &tally));

        Ok(BallotOutcome {
            ballot,
            matter,
            tally,
            votes,
        })
    }

    /// Current counts for a ballot, open or closed.
    pub async fn tally(&self, actor: &Actor, id: BallotId) -> Result<Tally, CoreError> {
        require(actor, Action::Read, Subject::Ballot, &[])?;
        let store = &self.store;
        let votes = with_retry(&self.retry, "vote read", || store.votes(id)).await?;
        Ok(Tally::from_votes(&votes))
    }

    /// The ballot row together with its votes and derived tally.
    pub async fn ballot_state(&self, actor: &Actor, id: BallotId) -> Result<BallotState, CoreError> {
        require(actor, Action::Read, Subject::Ballot, &[])?;
        let store = &self.store;
        let ballot = with_retry(&self.retry, "ballot read", || store.ballot(id)).await?;
        let votes = with_retry(&self.retry, "vote read", || store.votes(id)).await?;
        let tally = Tally::from_votes(&votes);
        Ok(BallotState {
            ballot,
            tally,
            votes,
        })
    }

    /// The open ballot in `scope`, if any.
    pub async fn active_ballot(
        &self,
        actor: &Actor,
        scope: BallotScope,
    ) -> Result<Option<Ballot>, CoreError> {
        require(actor, Action::Read, Subject::Ballot, &[])?;
        self.store.find_open_ballot(scope).await
    }
}
