//! User, role assignment and bootstrap marker records

use crate::auth::rbac::{AccessibleModules, Permission, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `assigned_by` value for assignments made by the service itself
pub const SYSTEM_ACTOR: &str = "system";

/// Role assignment for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoleRecord {
    /// User ID from the upstream identity provider
    pub user_id: String,
    /// Assigned role
    pub role: Role,
    /// When the role was assigned
    pub assigned_at: DateTime<Utc>,
    /// Acting user, or `system` for automatic assignment
    pub assigned_by: Option<String>,
}

impl UserRoleRecord {
    /// New record assigned now
    pub fn new(user_id: impl Into<String>, role: Role, assigned_by: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            assigned_at: Utc::now(),
            assigned_by,
        }
    }

    /// New record assigned by the service itself
    pub fn system(user_id: impl Into<String>, role: Role) -> Self {
        Self::new(user_id, role, Some(SYSTEM_ACTOR.to_string()))
    }
}

/// Registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// User ID (unique)
    pub id: String,
    /// Email address (unique)
    pub email: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name,
            created_at: Utc::now(),
        }
    }
}

/// Sentinel written when the first user is promoted to admin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstUserMarker {
    pub user_id: String,
    pub claimed_at: DateTime<Utc>,
}

/// Resolved access for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAccess {
    pub user_id: String,
    /// `None` when the user has no role record
    pub role: Option<Role>,
    pub permissions: Vec<Permission>,
    pub modules: AccessibleModules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_record() {
        let record = UserRoleRecord::system("u-1", Role::Operator);
        assert_eq!(record.user_id, "u-1");
        assert_eq!(record.role, Role::Operator);
        assert_eq!(record.assigned_by.as_deref(), Some(SYSTEM_ACTOR));
    }

    #[test]
    fn test_role_record_json_shape() {
        let record = UserRoleRecord::new("u-2", Role::Supervisor, Some("u-1".to_string()));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["user_id"], "u-2");
        assert_eq!(value["role"], "supervisor");
        assert_eq!(value["assigned_by"], "u-1");
    }

    #[test]
    fn test_account_display_name_optional() {
        let account: UserAccount = serde_json::from_str(
            r#"{"id":"u-3","email":"tester@kgoc.example","created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(account.display_name.is_none());
    }
}
