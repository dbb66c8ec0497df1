use crate::model::role::{Role, RoleSet};
use crate::service::error::ValidationError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait RoleGuard: Send + Sync {
    fn authorize(&self, required: Role, roles: &RoleSet) -> Result<(), ValidationError>;
}

/// Grants access only when the required role itself is held.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactRoleGuard;

impl RoleGuard for ExactRoleGuard {
    fn authorize(&self, required: Role, roles: &RoleSet) -> Result<(), ValidationError> {
        if roles.contains(required) {
            Ok(())
        } else {
            Err(ValidationError::Forbidden(required))
        }
    }
}
