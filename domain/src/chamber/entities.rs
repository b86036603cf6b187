//! Tenant and member records as the voting core sees them.

use serde::{Deserialize, Serialize};

use crate::core::{AccountId, CoreError, IneligibilityReason, MemberId, TenantId};

/// A chamber: one independently administered organization.
///
/// Identity (id, slug) is fixed at onboarding. The core never mutates a
/// tenant; it only scopes every other entity by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    /// URL-stable unique key, e.g. `"camara-sao-bento"`.
    pub slug: String,
    pub name: String,
    /// Free-form contact/address line used in minutes headers.
    pub contact: Option<String>,
}

impl Tenant {
    pub fn new(id: TenantId, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            contact: None,
        }
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }
}

/// A seated participant of the chamber.
///
/// Created and edited by administrative CRUD outside this core; the voting
/// flow only reads the record to decide eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub tenant: TenantId,
    pub name: String,
    pub party: Option<String>,
    /// Deactivated members stay on record but may not vote.
    pub active: bool,
    /// Executive seats (mayor, deputy mayor) attend without voting rights.
    pub executive: bool,
    /// Account the seat is linked to, once the member has signed in.
    pub account: Option<AccountId>,
}

impl Member {
    pub fn new(id: MemberId, tenant: TenantId, name: impl Into<String>) -> Self {
        Self {
            id,
            tenant,
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

    /// Whether this member may cast votes at all.
    ///
    /// The executive bar wins over the active flag when both apply, so a
    /// deactivated mayor is still reported as an executive.
    pub fn voting_eligibility(&self) -> Result<(), CoreError> {
        if self.executive {
            return Err(CoreError::MemberIneligible {
                member: self.id,
                reason: IneligibilityReason::Executive,
            });
        }
        if !self.active {
            return Err(CoreError::MemberIneligible {
                member: self.id,
                reason: IneligibilityReason::Inactive,
            });
        }
        Ok(())
    }
}
