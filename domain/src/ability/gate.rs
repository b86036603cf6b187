//! The capability matrix consulted before every mutating operation.
//!
//! A single pure decision function replaces per-screen role checks: every
//! entry point asks the gate first, and nothing else in the core inspects
//! roles. A denial is an ordinary `false`, never a panic.

use crate::ability::role::{Action, Actor, Role, Subject};
use crate::core::{CoreError, MemberId};

/// Decide whether `actor` may perform `action` on `subject`.
///
/// `subject_owners` lists the member ids that author the subject, when
/// ownership matters (today: the declared authors of a matter). Pass an
/// empty slice for subjects without ownership semantics.
///
/// # Example
///
/// ```
/// use plenum_domain::ability::{capable, Action, Actor, Subject};
/// use plenum_domain::MemberId;
///
/// let chair = Actor::chair("acct-chair", MemberId::new(1));
/// assert!(capable(&chair, Action::Create, Subject::Ballot, &[]));
/// assert!(!capable(&chair, Action::Delete, Subject::Session, &[]));
///
/// let author = Actor::member("acct-7", MemberId::new(7));
/// assert!(capable(&author, Action::Update, Subject::Matter, &[MemberId::new(7)]));
/// assert!(!capable(&author, Action::Update, Subject::Matter, &[MemberId::new(8)]));
/// ```
pub fn capable(actor: &Actor, action: Action, subject: Subject, subject_owners: &[MemberId]) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Chair => !matches!(
            (action, subject),
            (Action::Delete, Subject::Session) | (Action::Update, Subject::Tenant)
        ),
        Role::Member => match (action, subject) {
            (Action::Read, _) => true,
            (Action::CastVote, Subject::Ballot) => true,
            (Action::Create, Subject::Matter) => true,
            // Authors may amend their own matters; a seatless account cannot
            // own anything, so it is denied outright.
            (Action::Update, Subject::Matter) => match actor.member {
                Some(member) => subject_owners.contains(&member),
                None => false,
            },
            _ => false,
        },
        Role::Public => matches!(action, Action::Read),
    }
}

/// Like [`capable`], but maps a denial to [`CoreError::Unauthorized`].
pub fn require(
    actor: &Actor,
    action: Action,
    subject: Subject,
    subject_owners: &[MemberId],
) -> Result<(), CoreError> {
    if capable(actor, action, subject, subject_owners) {
        Ok(())
    } else {
        Err(CoreError::Unauthorized {
            role: actor.role,
            action,
            subject,
        })
    }
}
