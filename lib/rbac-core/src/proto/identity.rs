use crate::model::role::{Role, RoleSet};

/// Verified caller of a single request, with the roles it was granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
    pub roles: RoleSet,
}

/// Turns the claims of a verified token into an [`Identity`].
///
/// Role names outside of the known set are ignored.
pub fn resolve_identity<S: AsRef<str>>(
    subject: impl Into<String>,
    role_names: impl IntoIterator<Item = S>,
) -> Identity {
    let subject = subject.into();

    let roles = role_names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            match name.parse::<Role>() {
                Ok(role) => Some(role),
                Err(_) => {
                    tracing::warn!(%subject, role = name, "Ignoring unknown role");
                    None
                }
            }
        })
        .collect();

    Identity { subject, roles }
}
