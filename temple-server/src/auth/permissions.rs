//! Permission definitions
//!
//! Two fixed roles. Admins hold `all`; devotees hold the self-service set.

use serde::{Deserialize, Serialize};

/// Permissions granted to devotees
pub const DEVOTEE_PERMISSIONS: &[&str] = &[
    "slots:read",
    "slots:book",
    "queue:read",
    "sos:create",
    "temple:read",
    "puja:book",
    "donations:create",
    "volunteers:register",
    "chat:use",
];

/// Admin-only permissions, listed for reference; admins hold `all`
pub const ADMIN_ONLY_PERMISSIONS: &[&str] = &[
    "slots:manage",
    "queue:manage",
    "checkin:manage",
    "sos:manage",
    "temple:manage",
    "puja:manage",
    "donations:view",
    "volunteers:view",
    "dashboard:view",
];

/// Permission that passes every check
pub const ALL_PERMISSIONS: &str = "all";

pub const DEFAULT_ADMIN_PERMISSIONS: &[&str] = &[ALL_PERMISSIONS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Devotee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Devotee => "devotee",
        }
    }

    /// Permissions carried in this role's tokens
    pub fn permissions(&self) -> Vec<String> {
        let list = match self {
            Role::Admin => DEFAULT_ADMIN_PERMISSIONS,
            Role::Devotee => DEVOTEE_PERMISSIONS,
        };
        list.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions_disjoint() {
        let devotee = Role::Devotee.permissions();
        for p in ADMIN_ONLY_PERMISSIONS {
            assert!(!devotee.iter().any(|d| d == p), "{p} leaked to devotees");
        }
        assert_eq!(Role::Admin.permissions(), vec!["all".to_string()]);
    }
}
