//! Durable store port.
//!
//! Defines the interface the voting core requires from its relational store.
//! Implementations (adapters) live in the infrastructure layer.
//!
//! The conditional transition methods are the load-bearing part of the
//! contract: each one is a single atomic unit on the adapter's side, because
//! callers are concurrent and nothing in this layer serializes them. In
//! particular [`ChamberStore::insert_open_ballot`] must be backed by an
//! exclusivity guarantee equivalent to a partial unique index on "open ballot
//! per scope", and [`ChamberStore::close_ballot_and_mark_voted`] must apply
//! the ballot closure and the matter status change in one transaction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use plenum_domain::{
    AccountId, AgendaItem, Ballot, BallotId, CoreError, Matter, MatterId, Member, MemberId,
    Session, SessionId, Tenant, TenantId, UnixMillis, Vote, VoteValue,
};

/// Which scope the single-open-ballot invariant applies to.
///
/// Session-wide is the default: two concurrently open sessions of one tenant
/// may each run their own ballot. Tenant-wide forbids that, for chambers that
/// want a single unambiguous "active ballot" display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallotExclusivity {
    #[default]
    Session,
    Tenant,
}

impl BallotExclusivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallotExclusivity::Session => "session",
            BallotExclusivity::Tenant => "tenant",
        }
    }
}

impl std::fmt::Display for BallotExclusivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lookup scope for the currently open ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallotScope {
    Session(SessionId),
    Tenant(TenantId),
}

/// Fields for a new member row; the store assigns the id.
///
/// Member records belong to the administrative CRUD outside this core, but
/// demos and tests need a way to seed them through the same port.
#[derive(Debug, Clone)]
pub struct MemberDraft {
    pub name: String,
    pub party: Option<String>,
    pub active: bool,
    pub executive: bool,
    pub account: Option<AccountId>,
}

impl MemberDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            party: None,
            active: true,
            executive: false,
            account: None,
        }
    }

    pub fn with_party(mut self, party: impl Into<String>) -> Self {
        self.party = Some(party.into());
        self
    }

    pub fn with_account(mut self, account: impl Into<AccountId>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn as_executive(mut self) -> Self {
        self.executive = true;
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Fields for a new matter row; the store assigns the id.
#[derive(Debug, Clone)]
pub struct MatterDraft {
    pub title: String,
    pub summary: Option<String>,
    pub authors: Vec<MemberId>,
}

impl MatterDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: None,
            authors: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_author(mut self, author: MemberId) -> Self {
        self.authors.push(author);
        self
    }
}

/// Relational store for chamber state.
///
/// Every method is tenant-scoped through the ids it receives; an id that
/// exists under another tenant behaves exactly like one that does not exist.
/// Adapters report infrastructure faults as [`CoreError::StoreUnavailable`]
/// and everything else through the same taxonomy the core uses.
#[async_trait]
pub trait ChamberStore: Send + Sync {
    // ---- seeding (administrative CRUD boundary) ----

    async fn create_tenant(&self, slug: &str, name: &str) -> Result<Tenant, CoreError>;

    async fn create_member(
        &self,
        tenant: TenantId,
        draft: MemberDraft,
    ) -> Result<Member, CoreError>;

    async fn create_matter(
        &self,
        tenant: TenantId,
        draft: MatterDraft,
    ) -> Result<Matter, CoreError>;

    /// Create a session in `scheduled` state.
    async fn create_session(
        &self,
        tenant: TenantId,
        title: &str,
        scheduled_for: UnixMillis,
    ) -> Result<Session, CoreError>;

    // ---- reads ----

    async fn tenant(&self, id: TenantId) -> Result<Tenant, CoreError>;

    async fn member(&self, id: MemberId) -> Result<Member, CoreError>;

    async fn matter(&self, id: MatterId) -> Result<Matter, CoreError>;

    async fn session(&self, id: SessionId) -> Result<Session, CoreError>;

    async fn ballot(&self, id: BallotId) -> Result<Ballot, CoreError>;

    async fn members_of(&self, tenant: TenantId) -> Result<Vec<Member>, CoreError>;

    /// Agenda items of a session, ordered by position.
    async fn agenda(&self, session: SessionId) -> Result<Vec<AgendaItem>, CoreError>;

    /// Matters of the tenant that could be appended to `session`'s agenda:
    /// not already on it, and not held busy by another active session.
    async fn agenda_candidates(
        &self,
        tenant: TenantId,
        session: SessionId,
    ) -> Result<Vec<Matter>, CoreError>;

    /// Every ballot ever opened under a session, in opening order.
    async fn ballots_of_session(&self, session: SessionId) -> Result<Vec<Ballot>, CoreError>;

    /// All vote rows of a ballot. Fails with `NotFound` for an unknown ballot
    /// rather than returning an empty list.
    async fn votes(&self, ballot: BallotId) -> Result<Vec<Vote>, CoreError>;

    /// The open ballot in `scope`, if one exists.
    async fn find_open_ballot(&self, scope: BallotScope) -> Result<Option<Ballot>, CoreError>;

    // ---- conditional transitions (each one atomic) ----

    /// `scheduled -> open`, stamping the actual start time.
    async fn open_session(&self, id: SessionId) -> Result<Session, CoreError>;

    /// `open -> closed`. Rejects with `InvalidTransition` while any ballot
    /// under the session is still open.
    async fn close_session(&self, id: SessionId) -> Result<Session, CoreError>;

    /// Append a matter to the agenda at the next free position. Rejects a
    /// matter already on this agenda or busy in another active session.
    async fn append_agenda_item(
        &self,
        session: SessionId,
        matter: MatterId,
    ) -> Result<AgendaItem, CoreError>;

    /// Remove a matter from the agenda. Remaining positions keep their
    /// numbers.
    async fn remove_agenda_item(
        &self,
        session: SessionId,
        matter: MatterId,
    ) -> Result<(), CoreError>;

    /// Create an open ballot for `matter` under `session`.
    ///
    /// Fails with `BallotAlreadyOpen` when the exclusivity scope already has
    /// an open ballot. Two concurrent calls must never both succeed; the
    /// check and the insert are one atomic step.
    async fn insert_open_ballot(
        &self,
        session: SessionId,
        matter: MatterId,
    ) -> Result<Ballot, CoreError>;

    /// Close a ballot and mark its matter voted, as one transaction.
    /// Neither change is visible unless both apply.
    async fn close_ballot_and_mark_voted(
        &self,
        ballot: BallotId,
    ) -> Result<(Ballot, Matter), CoreError>;

    /// Insert or overwrite the vote row keyed by (ballot, member).
    ///
    /// The write is a single indivisible operation at that key, so a member's
    /// devices casting near-simultaneously cannot lose updates. Fails with
    /// `BallotClosed` once the ballot is no longer open.
    async fn upsert_vote(
        &self,
        ballot: BallotId,
        member: MemberId,
        value: VoteValue,
    ) -> Result<Vote, CoreError>;
}
