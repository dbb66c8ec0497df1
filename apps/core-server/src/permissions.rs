use rbac_core::model::role::Role;
use rbac_core::proto::role_guard::RoleGuard;

use crate::dto::response::ErrorResponse;
use crate::middleware::Authorized;

/// Checks the caller against the single role an operation requires.
/// Must run before the request body is looked at.
pub(crate) fn role_check(
    authorized: &Authorized,
    guard: &dyn RoleGuard,
    required: Role,
) -> Result<(), ErrorResponse> {
    if let Err(error) = guard.authorize(required, &authorized.identity.roles) {
        tracing::info!(
            subject = %authorized.identity.subject,
            roles = ?authorized.identity.roles,
            %error,
            "Role check failed"
        );
        return Err(ErrorResponse::Forbidden);
    }
    Ok(())
}
