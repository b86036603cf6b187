//! Roles, actions, and subjects recognized by the ability gate.

use serde::{Deserialize, Serialize};

use crate::core::{AccountId, MemberId};

/// Caller role resolved by the authentication collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Back-office operator with unrestricted access.
    Admin,
    /// Presiding officer of the chamber (presidente).
    Chair,
    /// Seated voting member (vereador).
    Member,
    /// Unauthenticated spectator.
    Public,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Chair => "chair",
            Role::Member => "member",
            Role::Public => "public",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the caller is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    CastVote,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::CastVote => "cast_vote",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::CastVote => write!(f, "cast a vote on"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// The entity family the action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Tenant,
    Member,
    Matter,
    Session,
    Ballot,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Tenant => "tenant",
            Subject::Member => "member",
            Subject::Matter => "matter",
            Subject::Session => "session",
            Subject::Ballot => "ballot",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated (or anonymous) caller as the gate sees it.
///
/// The authentication collaborator resolves the account, the role, and the
/// seat the account is linked to, if any. Spectators carry a transport-issued
/// guest identity so the presence roster can still list them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub account: AccountId,
    pub role: Role,
    /// Seat the account occupies in the chamber, when it has one.
    pub member: Option<MemberId>,
}

impl Actor {
    pub fn new(account: impl Into<AccountId>, role: Role, member: Option<MemberId>) -> Self {
        Self {
            account: account.into(),
            role,
            member,
        }
    }

    pub fn admin(account: impl Into<AccountId>) -> Self {
        Self::new(account, Role::Admin, None)
    }

    pub fn chair(account: impl Into<AccountId>, member: MemberId) -> Self {
        Self::new(account, Role::Chair, Some(member))
    }

    pub fn member(account: impl Into<AccountId>, member: MemberId) -> Self {
        Self::new(account, Role::Member, Some(member))
    }

    pub fn public(account: impl Into<AccountId>) -> Self {
        Self::new(account, Role::Public, None)
    }
}
