use uuid::Uuid;

/// The authenticated identity behind a request, with its privilege flag
/// already resolved from the stored profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl Principal {
    pub fn user(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }

    pub fn admin(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }
}

/// What the principal is trying to do to a document aggregate.
///
/// `owner_id` is the stored owner of the target, `None` when the target
/// row does not exist. Lookups happen before authorization so a missing
/// document and a foreign document deny identically (no existence leak).
#[derive(Debug, Clone, Copy)]
pub enum DocumentAction {
    Create,
    Mutate { owner_id: Option<Uuid> },
    ReadOwned { owner_id: Option<Uuid> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotOwner,
    UnknownDocument,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// The single authorization decision point for every mutating action.
/// The admin bypass lives here and nowhere else.
pub fn authorize(principal: &Principal, action: DocumentAction) -> AccessDecision {
    if principal.is_admin {
        return AccessDecision::Allowed;
    }

    match action {
        DocumentAction::Create => AccessDecision::Allowed,
        DocumentAction::Mutate { owner_id } | DocumentAction::ReadOwned { owner_id } => {
            match owner_id {
                None => AccessDecision::Denied(DenyReason::UnknownDocument),
                Some(owner) if owner == principal.user_id => AccessDecision::Allowed,
                Some(_) => AccessDecision::Denied(DenyReason::NotOwner),
            }
        }
    }
}

/// Admins are not subject to the per-user CV cap.
pub fn exempt_from_quota(principal: &Principal) -> bool {
    principal.is_admin
}
