use crate::{AuthError, Capability, Claims, Result as AuthErrorResult};
use crate::capability::ADMINISTRATOR_ROLE;

use std::panic::Location;

use error_location::ErrorLocation;

/// The authenticated user behind a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub display_name: String,
    pub roles: Vec<String>,
}

impl Actor {
    /// Actor from verified claims; the display name falls back to the subject
    pub fn from_claims(claims: Claims) -> Self {
        let display_name = claims
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| claims.sub.clone());

        Self {
            id: claims.sub,
            display_name,
            roles: claims.roles,
        }
    }

    /// Administrator used when authentication is disabled (single-user installs)
    pub fn local_admin(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            roles: vec![ADMINISTRATOR_ROLE.to_string()],
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        capability
            .granting_roles()
            .iter()
            .any(|granting| self.roles.iter().any(|role| role == granting))
    }

    #[track_caller]
    pub fn require(&self, capability: Capability) -> AuthErrorResult<()> {
        if self.has(capability) {
            return Ok(());
        }

        Err(AuthError::PermissionDenied {
            capability: capability.as_str().to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
