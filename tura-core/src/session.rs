use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of an authenticated user within the platform.
///
/// Tenant routes (pricing, catalog, quotes) accept any role and trust the
/// organization claim for scoping; only the organization admin surface is
/// role-gated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Operator,
    Admin,
    SuperAdmin,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPERATOR" => Ok(Role::Operator),
            "ADMIN" => Ok(Role::Admin),
            "SUPER_ADMIN" => Ok(Role::SuperAdmin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Explicit session context, created once per authenticated request from the
/// verified bearer token and passed to handlers and the wizard.
///
/// Lifecycle: created on login (token issuance, outside this crate), rebuilt
/// from the token on each protected request, dropped on logout. Nothing here
/// lives in process-global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub organization_id: Uuid,
    pub user_id: Uuid,
    pub role: Role,
}

impl SessionContext {
    pub fn new(organization_id: Uuid, user_id: Uuid, role: Role) -> Self {
        Self {
            organization_id,
            user_id,
            role,
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing() {
        assert_eq!("SUPER_ADMIN".parse::<Role>().unwrap(), Role::SuperAdmin);
        assert!("root".parse::<Role>().is_err());
    }
}
