//! Manage Session use case
//!
//! Drives the session lifecycle and its agenda: schedule, open, close,
//! append and remove agenda items.

use std::sync::Arc;

use tracing::info;

use crate::ports::journal::{JournalEvent, NoJournal, SittingJournal};
use crate::ports::store::ChamberStore;
use plenum_domain::{
    Action, Actor, AgendaItem, CoreError, Matter, MatterId, Session, SessionId, Subject, TenantId,
    UnixMillis, require,
};

/// Use case for the session lifecycle and agenda.
///
/// Every method checks the ability gate first; store-level conditional
/// transitions then decide races, so two concurrent closes cannot both
/// succeed.
pub struct ManageSessionUseCase<S: ChamberStore + 'static> {
    store: Arc<S>,
    journal: Arc<dyn SittingJournal>,
}

impl<S: ChamberStore + 'static> ManageSessionUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            journal: Arc::new(NoJournal),
        }
    }

    pub fn with_journal(mut self, journal: Arc<dyn SittingJournal>) -> Self {
        self.journal = journal;
        self
    }

    /// Create a session in `scheduled` state.
    pub async fn schedule_session(
        &self,
        actor: &Actor,
        tenant: TenantId,
        title: &str,
        scheduled_for: UnixMillis,
    ) -> Result<Session, CoreError> {
        require(actor, Action::Create, Subject::Session, &[])?;
        let session = self.store.create_session(tenant, title, scheduled_for).await?;
        info!("Session {} scheduled: {}", session.id, session.title);
        self.journal
            .record(JournalEvent::session_scheduled(actor, &session));
        Ok(session)
    }

    /// Transition `scheduled -> open`.
    pub async fn open_session(&self, actor: &Actor, id: SessionId) -> Result<Session, CoreError> {
        require(actor, Action::Update, Subject::Session, &[])?;
        let session = self.store.open_session(id).await?;
        info!("Session {} opened", id);
        self.journal
            .record(JournalEvent::session_opened(actor, &session));
        Ok(session)
    }

    /// Transition `open -> closed`.
    ///
    /// Rejected while a ballot under the session is still open: live votes
    /// are never silently discarded, the ballot has to be closed first.
    pub async fn close_session(&self, actor: &Actor, id: SessionId) -> Result<Session, CoreError> {
        require(actor, Action::Update, Subject::Session, &[])?;
        let session = self.store.close_session(id).await?;
        info!("Session {} closed", id);
        self.journal
            .record(JournalEvent::session_closed(actor, &session));
        Ok(session)
    }

    /// Append a matter to the session's agenda.
    pub async fn add_agenda_item(
        &self,
        actor: &Actor,
        session: SessionId,
        matter: MatterId,
    ) -> Result<AgendaItem, CoreError> {
        require(actor, Action::Update, Subject::Session, &[])?;
        let item = self.store.append_agenda_item(session, matter).await?;
        info!(
            "Matter {} added to session {} agenda at position {}",
            matter, session, item.position
        );
        self.journal
            .record(JournalEvent::agenda_item_added(actor, &item));
        Ok(item)
    }

    /// Remove a matter from the session's agenda.
    pub async fn remove_agenda_item(
        &self,
        actor: &Actor,
        session: SessionId,
        matter: MatterId,
    ) -> Result<(), CoreError> {
        require(actor, Action::Update, Subject::Session, &[])?;
        self.store.remove_agenda_item(session, matter).await?;
        info!("Matter {} removed from session {} agenda", matter, session);
        self.journal
            .record(JournalEvent::agenda_item_removed(actor, session, matter));
        Ok(())
    }

    /// The session's agenda, ordered by position.
    pub async fn agenda(
        &self,
        actor: &Actor,
        session: SessionId,
    ) -> Result<Vec<AgendaItem>, CoreError> {
        require(actor, Action::Read, Subject::Session, &[])?;
        self.store.agenda(session).await
    }

    /// Matters that could be appended to this session's agenda. Matters busy
    /// on another active session's agenda are filtered out.
    pub async fn agenda_candidates(
        &self,
        actor: &Actor,
        tenant: TenantId,
        session: SessionId,
    ) -> Result<Vec<Matter>, CoreError> {
        require(actor, Action::Read, Subject::Matter, &[])?;
        self.store.agenda_candidates(tenant, session).await
    }
}
