//! Legislative matters: the items a chamber votes on.

use serde::{Deserialize, Serialize};

use crate::core::{MatterId, MemberId, TenantId};

/// Where a matter stands in its life.
///
/// Most transitions belong to the drafting CRUD outside this core; the
/// voting flow writes exactly one of them, [`MatterStatus::Voted`], when the
/// ballot over the matter closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatterStatus {
    /// Filed by its authors, not yet scheduled.
    Filed,
    /// Placed on some session's agenda.
    OnAgenda,
    /// A ballot over this matter has closed.
    Voted,
}

impl MatterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatterStatus::Filed => "filed",
            MatterStatus::OnAgenda => "on_agenda",
            MatterStatus::Voted => "voted",
        }
    }
}

impl std::fmt::Display for MatterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A legislative item eligible to be voted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matter {
    pub id: MatterId,
    pub tenant: TenantId,
    pub title: String,
    pub summary: Option<String>,
    pub status: MatterStatus,
    /// Declared authors; the ownership input for the ability gate.
    pub authors: Vec<MemberId>,
}

impl Matter {
    pub fn new(id: MatterId, tenant: TenantId, title: impl Into<String>) -> Self {
        Self {
            id,
            tenant,
            title: title.into(),
            summary: None,
            status: MatterStatus::Filed,
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

    /// The one status transition this core performs, applied together with
    /// ballot closure.
    pub fn mark_voted(&mut self) {
        self.status = MatterStatus::Voted;
    }
}
