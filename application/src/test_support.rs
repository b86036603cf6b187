//! In-memory fakes shared by the use case tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::ports::presence_channel::{PresenceChannel, PresenceFeed};
use crate::ports::store::{BallotScope, ChamberStore, MatterDraft, MemberDraft};
use plenum_domain::{
    AccountId, AgendaItem, Ballot, BallotId, ConnectionId, CoreError, EntityKind, Matter,
    MatterId, Member, MemberId, PresenceRoster, PresenceSignal, Session, SessionId, Tenant,
    TenantId, UnixMillis, Vote, VoteValue, now_millis,
};

/// Store fake with just enough behavior for the voting policy tests.
///
/// Methods the tests never reach stay `unimplemented!`, which doubles as an
/// assertion: a gate denial that still hits the store panics the test.
pub struct FakeStore {
    pub members: Mutex<HashMap<MemberId, Member>>,
    pub ballots: Mutex<HashMap<BallotId, Ballot>>,
    pub votes: Mutex<HashMap<(BallotId, MemberId), Vote>>,
    /// Number of upcoming store calls that fail with `StoreUnavailable`.
    fail_remaining: AtomicU32,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
            ballots: Mutex::new(HashMap::new()),
            votes: Mutex::new(HashMap::new()),
            fail_remaining: AtomicU32::new(0),
        }
    }

    pub fn seed_member(&self, member: Member) {
        self.members.lock().unwrap().insert(member.id, member);
    }

    pub fn seed_ballot(&self, ballot: Ballot) {
        self.ballots.lock().unwrap().insert(ballot.id, ballot);
    }

    /// Flip a seeded ballot to closed, bypassing the usual transition.
    pub fn force_close_ballot(&self, id: BallotId) {
        let mut ballots = self.ballots.lock().unwrap();
        let ballot = ballots.get_mut(&id).unwrap();
        ballot.close(now_millis()).unwrap();
    }

    pub fn fail_next(&self, calls: u32) {
        self.fail_remaining.store(calls, Ordering::SeqCst);
    }

    pub fn vote_rows(&self, ballot: BallotId) -> Vec<Vote> {
        let mut rows: Vec<Vote> = self
            .votes
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.ballot == ballot)
            .cloned()
            .collect();
        rows.sort_by_key(|v| v.member);
        rows
    }

    fn fault(&self) -> Result<(), CoreError> {
        if self.fail_remaining.load(Ordering::SeqCst) > 0 {
            self.fail_remaining.fetch_sub(1, Ordering::SeqCst);
            return Err(CoreError::unavailable("injected fault"));
        }
        Ok(())
    }
}

#[async_trait]
impl ChamberStore for FakeStore {
    async fn create_tenant(&self, _slug: &str, _name: &str) -> Result<Tenant, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn create_member(
        &self,
        _tenant: TenantId,
        _draft: MemberDraft,
    ) -> Result<Member, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn create_matter(
        &self,
        _tenant: TenantId,
        _draft: MatterDraft,
    ) -> Result<Matter, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn create_session(
        &self,
        _tenant: TenantId,
        _title: &str,
        _scheduled_for: UnixMillis,
    ) -> Result<Session, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn tenant(&self, _id: TenantId) -> Result<Tenant, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn member(&self, id: MemberId) -> Result<Member, CoreError> {
        self.fault()?;
        self.members
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(CoreError::not_found(EntityKind::Member, id.get()))
    }

    async fn matter(&self, _id: MatterId) -> Result<Matter, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn session(&self, _id: SessionId) -> Result<Session, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn ballot(&self, id: BallotId) -> Result<Ballot, CoreError> {
        self.fault()?;
        self.ballots
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(CoreError::not_found(EntityKind::Ballot, id.get()))
    }

    async fn members_of(&self, _tenant: TenantId) -> Result<Vec<Member>, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn agenda(&self, _session: SessionId) -> Result<Vec<AgendaItem>, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn agenda_candidates(
        &self,
        _tenant: TenantId,
        _session: SessionId,
    ) -> Result<Vec<Matter>, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn ballots_of_session(&self, _session: SessionId) -> Result<Vec<Ballot>, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn votes(&self, ballot: BallotId) -> Result<Vec<Vote>, CoreError> {
        self.fault()?;
        if !self.ballots.lock().unwrap().contains_key(&ballot) {
            return Err(CoreError::not_found(EntityKind::Ballot, ballot.get()));
        }
        Ok(self.vote_rows(ballot))
    }

    async fn find_open_ballot(&self, _scope: BallotScope) -> Result<Option<Ballot>, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn open_session(&self, _id: SessionId) -> Result<Session, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn close_session(&self, _id: SessionId) -> Result<Session, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn append_agenda_item(
        &self,
        _session: SessionId,
        _matter: MatterId,
    ) -> Result<AgendaItem, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn remove_agenda_item(
        &self,
        _session: SessionId,
        _matter: MatterId,
    ) -> Result<(), CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn insert_open_ballot(
        &self,
        _session: SessionId,
        _matter: MatterId,
    ) -> Result<Ballot, CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn close_ballot_and_mark_voted(
        &self,
        _ballot: BallotId,
    ) -> Result<(Ballot, Matter), CoreError> {
        unimplemented!("not exercised by these tests")
    }

    async fn upsert_vote(
        &self,
        ballot: BallotId,
        member: MemberId,
        value: VoteValue,
    ) -> Result<Vote, CoreError> {
        self.fault()?;
        {
            let ballots = self.ballots.lock().unwrap();
            let row = ballots
                .get(&ballot)
                .ok_or(CoreError::not_found(EntityKind::Ballot, ballot.get()))?;
            row.guard_accepts_votes()?;
        }
        let vote = Vote::new(ballot, member, value, now_millis());
        self.votes
            .lock()
            .unwrap()
            .insert((ballot, member), vote.clone());
        Ok(vote)
    }
}

/// Presence channel fake driven directly by tests: push signals through
/// `sender`, stage snapshot responses via `set_snapshot`.
pub struct StubChannel {
    pub sender: broadcast::Sender<PresenceSignal>,
    roster: Mutex<PresenceRoster>,
}

impl StubChannel {
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            roster: Mutex::new(PresenceRoster::new()),
        }
    }

    pub fn set_snapshot(&self, roster: PresenceRoster) {
        *self.roster.lock().unwrap() = roster;
    }
}

#[async_trait]
impl PresenceChannel for StubChannel {
    async fn track(
        &self,
        _tenant: TenantId,
        _account: AccountId,
        _member: Option<MemberId>,
    ) -> ConnectionId {
        unimplemented!("tests drive the feed directly")
    }

    async fn untrack(&self, _tenant: TenantId, _connection: ConnectionId) {
        unimplemented!("tests drive the feed directly")
    }

    async fn untrack_identity(&self, _tenant: TenantId, _account: &AccountId) {
        unimplemented!("tests drive the feed directly")
    }

    async fn subscribe(&self, _tenant: TenantId) -> PresenceFeed {
        PresenceFeed::new(self.sender.subscribe())
    }

    async fn snapshot(&self, _tenant: TenantId) -> PresenceRoster {
        self.roster.lock().unwrap().clone()
    }
}
