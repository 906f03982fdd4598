use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub(super) const ROOM_DAY_DEFAULT_LIMIT: usize = 15;

pub(super) fn ensure_audit_capability(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.has_capability("audit", "read") {
        Ok(())
    } else {
        Err(ApplicationError::forbidden("missing capability audit:read"))
    }
}

pub(super) fn normalize_limit(limit: Option<usize>, default: usize) -> usize {
    const MAX_LIMIT: usize = 500;

    match limit {
        None | Some(0) => default,
        Some(limit) => limit.min(MAX_LIMIT),
    }
}
