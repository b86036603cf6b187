//! In-memory chamber store.
//!
//! One `tokio::sync::Mutex` over the whole chamber state serializes every
//! operation, which makes each conditional transition trivially atomic: the
//! open-ballot check and the insert happen under the same lock acquisition,
//! as do ballot closure and the matter status flip. A relational adapter has
//! to reproduce these guarantees with a partial unique index and a
//! transaction; this one gets them from the lock.
//!
//! Ids come from a single monotonic sequence, so they are unique across
//! entity families and ascending in creation order.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::Mutex;

use plenum_application::ports::store::{
    BallotExclusivity, BallotScope, ChamberStore, MatterDraft, MemberDraft,
};
use plenum_domain::{
    AgendaItem, Ballot, BallotId, CoreError, EntityKind, Matter, MatterId, Member, MemberId,
    Session, SessionId, Tenant, TenantId, UnixMillis, Vote, VoteValue, now_millis,
};

#[derive(Default)]
struct ChamberState {
    seq: u64,
    tenants: HashMap<u64, Tenant>,
    members: HashMap<u64, Member>,
    matters: HashMap<u64, Matter>,
    sessions: HashMap<u64, Session>,
    /// Session id -> agenda rows. Positions live on the rows; the vec keeps
    /// append order.
    agendas: HashMap<u64, Vec<AgendaItem>>,
    ballots: HashMap<u64, Ballot>,
    /// Keyed by (ballot, member) so one ballot's rows form a contiguous range.
    votes: BTreeMap<(u64, u64), Vote>,
}

impl ChamberState {
    fn next_id(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn tenant(&self, id: TenantId) -> Result<&Tenant, CoreError> {
        self.tenants
            .get(&id.get())
            .ok_or_else(|| CoreError::not_found(EntityKind::Tenant, id.get()))
    }

    fn member(&self, id: MemberId) -> Result<&Member, CoreError> {
        self.members
            .get(&id.get())
            .ok_or_else(|| CoreError::not_found(EntityKind::Member, id.get()))
    }

    fn matter(&self, id: MatterId) -> Result<&Matter, CoreError> {
        self.matters
            .get(&id.get())
            .ok_or_else(|| CoreError::not_found(EntityKind::Matter, id.get()))
    }

    fn session(&self, id: SessionId) -> Result<&Session, CoreError> {
        self.sessions
            .get(&id.get())
            .ok_or_else(|| CoreError::not_found(EntityKind::Session, id.get()))
    }

    fn ballot(&self, id: BallotId) -> Result<&Ballot, CoreError> {
        self.ballots
            .get(&id.get())
            .ok_or_else(|| CoreError::not_found(EntityKind::Ballot, id.get()))
    }

    fn agenda_of(&self, session: SessionId) -> &[AgendaItem] {
        self.agendas
            .get(&session.get())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn open_ballot_in_scope(&self, scope: BallotScope) -> Option<&Ballot> {
        self.ballots.values().find(|ballot| {
            ballot.is_open()
                && match scope {
                    BallotScope::Session(session) => ballot.session == session,
                    BallotScope::Tenant(tenant) => ballot.tenant == tenant,
                }
        })
    }

    fn vote_rows(&self, ballot: BallotId) -> Vec<Vote> {
        let id = ballot.get();
        self.votes
            .range((id, 0)..=(id, u64::MAX))
            .map(|(_, vote)| vote.clone())
            .collect()
    }
}

/// In-memory [`ChamberStore`] adapter.
///
/// The exclusivity scope for the single-open-ballot invariant is fixed at
/// construction; session-wide is the default.
pub struct MemoryStore {
    exclusivity: BallotExclusivity,
    state: Mutex<ChamberState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_exclusivity(BallotExclusivity::default())
    }

    pub fn with_exclusivity(exclusivity: BallotExclusivity) -> Self {
        Self {
            exclusivity,
            state: Mutex::new(ChamberState::default()),
        }
    }

    pub fn exclusivity(&self) -> BallotExclusivity {
        self.exclusivity
    }

    fn scope_for(&self, session: &Session) -> BallotScope {
        match self.exclusivity {
            BallotExclusivity::Session => BallotScope::Session(session.id),
            BallotExclusivity::Tenant => BallotScope::Tenant(session.tenant),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChamberStore for MemoryStore {
    async fn create_tenant(&self, slug: &str, name: &str) -> Result<Tenant, CoreError> {
        let mut state = self.state.lock().await;
        let id = state.next_id();
        let tenant = Tenant::new(TenantId::new(id), slug, name);
        state.tenants.insert(id, tenant.clone());
        Ok(tenant)
    }

    async fn create_member(
        &self,
        tenant: TenantId,
        draft: MemberDraft,
    ) -> Result<Member, CoreError> {
        let mut state = self.state.lock().await;
        state.tenant(tenant)?;
        let id = state.next_id();
        let mut member = Member::new(MemberId::new(id), tenant, draft.name);
        member.party = draft.party;
        member.active = draft.active;
        member.executive = draft.executive;
        member.account = draft.account;
        state.members.insert(id, member.clone());
        Ok(member)
    }

    async fn create_matter(
        &self,
        tenant: TenantId,
        draft: MatterDraft,
    ) -> Result<Matter, CoreError> {
        let mut state = self.state.lock().await;
        state.tenant(tenant)?;
        let id = state.next_id();
        let mut matter = Matter::new(MatterId::new(id), tenant, draft.title);
        matter.summary = draft.summary;
        matter.authors = draft.authors;
        state.matters.insert(id, matter.clone());
        Ok(matter)
    }

    async fn create_session(
        &self,
        tenant: TenantId,
        title: &str,
        scheduled_for: UnixMillis,
    ) -> Result<Session, CoreError> {
        let mut state = self.state.lock().await;
        state.tenant(tenant)?;
        let id = state.next_id();
        let session = Session::new(SessionId::new(id), tenant, title, scheduled_for);
        state.sessions.insert(id, session.clone());
        state.agendas.insert(id, Vec::new());
        Ok(session)
    }

    async fn tenant(&self, id: TenantId) -> Result<Tenant, CoreError> {
        let state = self.state.lock().await;
        state.tenant(id).cloned()
    }

    async fn member(&self, id: MemberId) -> Result<Member, CoreError> {
        let state = self.state.lock().await;
        state.member(id).cloned()
    }

    async fn matter(&self, id: MatterId) -> Result<Matter, CoreError> {
        let state = self.state.lock().await;
        state.matter(id).cloned()
    }

    async fn session(&self, id: SessionId) -> Result<Session, CoreError> {
        let state = self.state.lock().await;
        state.session(id).cloned()
    }

    async fn ballot(&self, id: BallotId) -> Result<Ballot, CoreError> {
        let state = self.state.lock().await;
        state.ballot(id).cloned()
    }

    async fn members_of(&self, tenant: TenantId) -> Result<Vec<Member>, CoreError> {
        let state = self.state.lock().await;
        state.tenant(tenant)?;
        let mut members: Vec<Member> = state
            .members
            .values()
            .filter(|member| member.tenant == tenant)
            .cloned()
            .collect();
        members.sort_by_key(|member| member.id);
        Ok(members)
    }

    async fn agenda(&self, session: SessionId) -> Result<Vec<AgendaItem>, CoreError> {
        let state = self.state.lock().await;
        state.session(session)?;
        let mut items = state.agenda_of(session).to_vec();
        items.sort_by_key(|item| item.position);
        Ok(items)
    }

    async fn agenda_candidates(
        &self,
        tenant: TenantId,
        session: SessionId,
    ) -> Result<Vec<Matter>, CoreError> {
        let state = self.state.lock().await;
        let target = state.session(session)?;
        if target.tenant != tenant {
            return Err(CoreError::not_found(EntityKind::Session, session.get()));
        }

        let on_this_agenda: Vec<MatterId> = state
            .agenda_of(session)
            .iter()
            .map(|item| item.matter)
            .collect();

        // Matters sitting on another active session's agenda are held busy
        // there and filtered out here; this is a read-time convenience, not a
        // write-time constraint.
        let busy_elsewhere: Vec<MatterId> = state
            .sessions
            .values()
            .filter(|other| other.tenant == tenant && other.id != session && other.is_active())
            .flat_map(|other| state.agenda_of(other.id).iter().map(|item| item.matter))
            .collect();

        let mut candidates: Vec<Matter> = state
            .matters
            .values()
            .filter(|matter| {
                matter.tenant == tenant
                    && !on_this_agenda.contains(&matter.id)
                    && !busy_elsewhere.contains(&matter.id)
            })
            .cloned()
            .collect();
        candidates.sort_by_key(|matter| matter.id);
        Ok(candidates)
    }

    async fn ballots_of_session(&self, session: SessionId) -> Result<Vec<Ballot>, CoreError> {
        let state = self.state.lock().await;
        state.session(session)?;
        let mut ballots: Vec<Ballot> = state
            .ballots
            .values()
            .filter(|ballot| ballot.session == session)
            .cloned()
            .collect();
        // Ids ascend in creation order, so this is opening order.
        ballots.sort_by_key(|ballot| ballot.id);
        Ok(ballots)
    }

    async fn votes(&self, ballot: BallotId) -> Result<Vec<Vote>, CoreError> {
        let state = self.state.lock().await;
        state.ballot(ballot)?;
        Ok(state.vote_rows(ballot))
    }

    async fn find_open_ballot(&self, scope: BallotScope) -> Result<Option<Ballot>, CoreError> {
        let state = self.state.lock().await;
        Ok(state.open_ballot_in_scope(scope).cloned())
    }

    async fn open_session(&self, id: SessionId) -> Result<Session, CoreError> {
        let mut state = self.state.lock().await;
        let mut session = state.session(id)?.clone();
        session.open(now_millis())?;
        state.sessions.insert(id.get(), session.clone());
        Ok(session)
    }

    async fn close_session(&self, id: SessionId) -> Result<Session, CoreError> {
        let mut state = self.state.lock().await;
        let mut session = state.session(id)?.clone();
        if let Some(open) = state.open_ballot_in_scope(BallotScope::Session(id)) {
            return Err(CoreError::InvalidTransition {
                entity: EntityKind::Session,
                id: id.get(),
                detail: format!("ballot {} is still open", open.id),
            });
        }
        session.close(now_millis())?;
        state.sessions.insert(id.get(), session.clone());
        Ok(session)
    }

    async fn append_agenda_item(
        &self,
        session: SessionId,
        matter: MatterId,
    ) -> Result<AgendaItem, CoreError> {
        let mut state = self.state.lock().await;
        let target = state.session(session)?;
        target.guard_agenda_mutable()?;
        let tenant = target.tenant;
        if state.matter(matter)?.tenant != tenant {
            return Err(CoreError::not_found(EntityKind::Matter, matter.get()));
        }

        let existing = state.agenda_of(session);
        if existing.iter().any(|item| item.matter == matter) {
            return Err(CoreError::InvalidTransition {
                entity: EntityKind::Session,
                id: session.get(),
                detail: format!("matter {} is already on the agenda", matter),
            });
        }

        let item = AgendaItem::new(
            session,
            matter,
            AgendaItem::next_position(existing),
            now_millis(),
        );
        state
            .agendas
            .entry(session.get())
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    async fn remove_agenda_item(
        &self,
        session: SessionId,
        matter: MatterId,
    ) -> Result<(), CoreError> {
        let mut state = self.state.lock().await;
        state.session(session)?.guard_agenda_mutable()?;
        let items = state.agendas.entry(session.get()).or_default();
        let before = items.len();
        items.retain(|item| item.matter != matter);
        if items.len() == before {
            return Err(CoreError::not_found(EntityKind::AgendaItem, matter.get()));
        }
        Ok(())
    }

    async fn insert_open_ballot(
        &self,
        session: SessionId,
        matter: MatterId,
    ) -> Result<Ballot, CoreError> {
        let mut state = self.state.lock().await;
        let target = state.session(session)?;
        target.guard_open()?;
        let tenant = target.tenant;

        if !state
            .agenda_of(session)
            .iter()
            .any(|item| item.matter == matter)
        {
            return Err(CoreError::not_found(EntityKind::AgendaItem, matter.get()));
        }

        // The invariant check and the insert share this lock acquisition, so
        // of two concurrent opens exactly one can get past this point.
        let scope = self.scope_for(state.session(session)?);
        if let Some(open) = state.open_ballot_in_scope(scope) {
            return Err(CoreError::BallotAlreadyOpen {
                open_ballot: open.id,
            });
        }

        let id = state.next_id();
        let ballot = Ballot::new(BallotId::new(id), tenant, session, matter, now_millis());
        state.ballots.insert(id, ballot.clone());
        Ok(ballot)
    }

    async fn close_ballot_and_mark_voted(
        &self,
        ballot: BallotId,
    ) -> Result<(Ballot, Matter), CoreError> {
        let mut state = self.state.lock().await;
        let mut row = state.ballot(ballot)?.clone();
        row.close(now_millis())?;

        // Commit nothing until both writes are certain to land.
        let matter_id = row.matter.get();
        let Some(matter) = state.matters.get_mut(&matter_id) else {
            return Err(CoreError::not_found(EntityKind::Matter, matter_id));
        };
        matter.mark_voted();
        let matter = matter.clone();
        state.ballots.insert(ballot.get(), row.clone());
        Ok((row, matter))
    }

    async fn upsert_vote(
        &self,
        ballot: BallotId,
        member: MemberId,
        value: VoteValue,
    ) -> Result<Vote, CoreError> {
        let mut state = self.state.lock().await;
        state.ballot(ballot)?.guard_accepts_votes()?;
        state.member(member)?;

        let key = (ballot.get(), member.get());
        let now = now_millis();
        let vote = match state.votes.get(&key) {
            Some(existing) => existing.clone().recast(value, now),
            None => Vote::new(ballot, member, value, now),
        };
        state.votes.insert(key, vote.clone());
        Ok(vote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plenum_domain::MatterStatus;

    async fn seeded() -> (MemoryStore, TenantId, SessionId, MatterId) {
        let store = MemoryStore::new();
        let tenant = store.create_tenant("sao-bento", "Câmara de São Bento").await.unwrap();
        let session = store
            .create_session(tenant.id, "Ordinary sitting", 1_000)
            .await
            .unwrap();
        let matter = store
            .create_matter(tenant.id, MatterDraft::new("Budget amendment"))
            .await
            .unwrap();
        (store, tenant.id, session.id, matter.id)
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_families() {
        let (store, tenant, session, matter) = seeded().await;
        let member = store
            .create_member(tenant, MemberDraft::new("Ana"))
            .await
            .unwrap();
        let mut ids = vec![tenant.get(), session.get(), matter.get(), member.id.get()];
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn test_create_member_requires_tenant() {
        let store = MemoryStore::new();
        let err = store
            .create_member(TenantId::new(99), MemberDraft::new("Ana"))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::not_found(EntityKind::Tenant, 99));
    }

    #[tokio::test]
    async fn test_agenda_append_assigns_dense_positions() {
        let (store, tenant, session, matter) = seeded().await;
        let second = store
            .create_matter(tenant, MatterDraft::new("Street renaming"))
            .await
            .unwrap();

        let first_item = store.append_agenda_item(session, matter).await.unwrap();
        let second_item = store.append_agenda_item(session, second.id).await.unwrap();
        assert_eq!(first_item.position, 1);
        assert_eq!(second_item.position, 2);

        store.remove_agenda_item(session, matter).await.unwrap();
        let third = store
            .create_matter(tenant, MatterDraft::new("Park budget"))
            .await
            .unwrap();
        let third_item = store.append_agenda_item(session, third.id).await.unwrap();
        // The gap left by the removal is never reused.
        assert_eq!(third_item.position, 3);
    }

    #[tokio::test]
    async fn test_agenda_rejects_duplicate_matter() {
        let (store, _, session, matter) = seeded().await;
        store.append_agenda_item(session, matter).await.unwrap();
        let err = store.append_agenda_item(session, matter).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn test_remove_unknown_agenda_item_is_not_found() {
        let (store, _, session, matter) = seeded().await;
        let err = store.remove_agenda_item(session, matter).await.unwrap_err();
        assert_eq!(
            err,
            CoreError::not_found(EntityKind::AgendaItem, matter.get())
        );
    }

    #[tokio::test]
    async fn test_open_ballot_requires_open_session_and_agenda() {
        let (store, _, session, matter) = seeded().await;

        let err = store.insert_open_ballot(session, matter).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));

        store.open_session(session).await.unwrap();
        let err = store.insert_open_ballot(session, matter).await.unwrap_err();
        assert_eq!(
            err,
            CoreError::not_found(EntityKind::AgendaItem, matter.get())
        );

        store.append_agenda_item(session, matter).await.unwrap();
        let ballot = store.insert_open_ballot(session, matter).await.unwrap();
        assert!(ballot.is_open());
    }

    #[tokio::test]
    async fn test_second_open_ballot_is_rejected() {
        let (store, tenant, session, matter) = seeded().await;
        let other = store
            .create_matter(tenant, MatterDraft::new("Street renaming"))
            .await
            .unwrap();
        store.open_session(session).await.unwrap();
        store.append_agenda_item(session, matter).await.unwrap();
        store.append_agenda_item(session, other.id).await.unwrap();

        let ballot = store.insert_open_ballot(session, matter).await.unwrap();
        let err = store
            .insert_open_ballot(session, other.id)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::BallotAlreadyOpen {
                open_ballot: ballot.id
            }
        );
    }

    #[tokio::test]
    async fn test_session_scope_allows_parallel_sessions() {
        let (store, tenant, session, matter) = seeded().await;
        let second_session = store
            .create_session(tenant, "Extraordinary sitting", 2_000)
            .await
            .unwrap();
        let second_matter = store
            .create_matter(tenant, MatterDraft::new("Street renaming"))
            .await
            .unwrap();

        store.open_session(session).await.unwrap();
        store.open_session(second_session.id).await.unwrap();
        store.append_agenda_item(session, matter).await.unwrap();
        store
            .append_agenda_item(second_session.id, second_matter.id)
            .await
            .unwrap();

        // Session-wide exclusivity: one open ballot under each is fine.
        store.insert_open_ballot(session, matter).await.unwrap();
        store
            .insert_open_ballot(second_session.id, second_matter.id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_tenant_scope_blocks_parallel_sessions() {
        let store = MemoryStore::with_exclusivity(BallotExclusivity::Tenant);
        let tenant = store.create_tenant("sao-bento", "Câmara").await.unwrap();
        let first = store
            .create_session(tenant.id, "Sitting A", 1_000)
            .await
            .unwrap();
        let second = store
            .create_session(tenant.id, "Sitting B", 1_000)
            .await
            .unwrap();
        let matter_a = store
            .create_matter(tenant.id, MatterDraft::new("A"))
            .await
            .unwrap();
        let matter_b = store
            .create_matter(tenant.id, MatterDraft::new("B"))
            .await
            .unwrap();

        store.open_session(first.id).await.unwrap();
        store.open_session(second.id).await.unwrap();
        store.append_agenda_item(first.id, matter_a.id).await.unwrap();
        store
            .append_agenda_item(second.id, matter_b.id)
            .await
            .unwrap();

        let ballot = store.insert_open_ballot(first.id, matter_a.id).await.unwrap();
        let err = store
            .insert_open_ballot(second.id, matter_b.id)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::BallotAlreadyOpen {
                open_ballot: ballot.id
            }
        );
    }

    #[tokio::test]
    async fn test_close_session_rejected_while_ballot_open() {
        let (store, _, session, matter) = seeded().await;
        store.open_session(session).await.unwrap();
        store.append_agenda_item(session, matter).await.unwrap();
        let ballot = store.insert_open_ballot(session, matter).await.unwrap();

        let err = store.close_session(session).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert!(err.to_string().contains(&ballot.id.to_string()));

        store.close_ballot_and_mark_voted(ballot.id).await.unwrap();
        store.close_session(session).await.unwrap();
    }

    #[tokio::test]
    async fn test_close_ballot_marks_matter_voted_together() {
        let (store, _, session, matter) = seeded().await;
        store.open_session(session).await.unwrap();
        store.append_agenda_item(session, matter).await.unwrap();
        let ballot = store.insert_open_ballot(session, matter).await.unwrap();

        let (closed, voted) = store.close_ballot_and_mark_voted(ballot.id).await.unwrap();
        assert!(!closed.is_open());
        assert_eq!(voted.status, MatterStatus::Voted);
        assert_eq!(store.matter(matter).await.unwrap().status, MatterStatus::Voted);

        let err = store
            .close_ballot_and_mark_voted(ballot.id)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn test_upsert_vote_overwrites_in_place() {
        let (store, tenant, session, matter) = seeded().await;
        let member = store
            .create_member(tenant, MemberDraft::new("Ana"))
            .await
            .unwrap();
        store.open_session(session).await.unwrap();
        store.append_agenda_item(session, matter).await.unwrap();
        let ballot = store.insert_open_ballot(session, matter).await.unwrap();

        store
            .upsert_vote(ballot.id, member.id, VoteValue::Yes)
            .await
            .unwrap();
        let recast = store
            .upsert_vote(ballot.id, member.id, VoteValue::No)
            .await
            .unwrap();
        assert_eq!(recast.value, VoteValue::No);

        let rows = store.votes(ballot.id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, VoteValue::No);
    }

    #[tokio::test]
    async fn test_vote_on_closed_ballot_is_rejected() {
        let (store, tenant, session, matter) = seeded().await;
        let member = store
            .create_member(tenant, MemberDraft::new("Ana"))
            .await
            .unwrap();
        store.open_session(session).await.unwrap();
        store.append_agenda_item(session, matter).await.unwrap();
        let ballot = store.insert_open_ballot(session, matter).await.unwrap();
        store.close_ballot_and_mark_voted(ballot.id).await.unwrap();

        let err = store
            .upsert_vote(ballot.id, member.id, VoteValue::Yes)
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::BallotClosed { ballot: ballot.id });
    }

    #[tokio::test]
    async fn test_votes_for_unknown_ballot_is_not_found() {
        let (store, ..) = seeded().await;
        let err = store.votes(BallotId::new(404)).await.unwrap_err();
        assert_eq!(err, CoreError::not_found(EntityKind::Ballot, 404));
    }

    #[tokio::test]
    async fn test_agenda_candidates_filters_busy_matters() {
        let (store, tenant, session, matter) = seeded().await;
        let free = store
            .create_matter(tenant, MatterDraft::new("Free matter"))
            .await
            .unwrap();
        let busy = store
            .create_matter(tenant, MatterDraft::new("Busy matter"))
            .await
            .unwrap();
        let other_session = store
            .create_session(tenant, "Parallel sitting", 2_000)
            .await
            .unwrap();
        store
            .append_agenda_item(other_session.id, busy.id)
            .await
            .unwrap();
        store.append_agenda_item(session, matter).await.unwrap();

        let candidates = store.agenda_candidates(tenant, session).await.unwrap();
        let ids: Vec<MatterId> = candidates.iter().map(|m| m.id).collect();
        // On this agenda and busy elsewhere are both excluded.
        assert_eq!(ids, vec![free.id]);
    }

    #[tokio::test]
    async fn test_find_open_ballot_by_scope() {
        let (store, tenant, session, matter) = seeded().await;
        assert_eq!(
            store
                .find_open_ballot(BallotScope::Session(session))
                .await
                .unwrap(),
            None
        );

        store.open_session(session).await.unwrap();
        store.append_agenda_item(session, matter).await.unwrap();
        let ballot = store.insert_open_ballot(session, matter).await.unwrap();

        assert_eq!(
            store
                .find_open_ballot(BallotScope::Session(session))
                .await
                .unwrap()
                .map(|b| b.id),
            Some(ballot.id)
        );
        assert_eq!(
            store
                .find_open_ballot(BallotScope::Tenant(tenant))
                .await
                .unwrap()
                .map(|b| b.id),
            Some(ballot.id)
        );
    }
}
