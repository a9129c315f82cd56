use crate::auth::rbac::Role;
use crate::core::models::UserRoleRecord;
use crate::utils::error::AccessError;
use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role assignment database model, one row per user
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    /// Role token
    pub role: String,

    pub assigned_at: DateTimeWithTimeZone,

    /// Acting user id, or `system`
    pub assigned_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain record
    ///
    /// Fails if the stored role token is not a known role.
    pub fn to_record(&self) -> crate::utils::error::Result<UserRoleRecord> {
        let role = Role::from_str(&self.role).map_err(|e| {
            AccessError::internal(format!("Corrupt role record for {}: {}", self.user_id, e))
        })?;
        Ok(UserRoleRecord {
            user_id: self.user_id.clone(),
            role,
            assigned_at: self.assigned_at.with_timezone(&Utc),
            assigned_by: self.assigned_by.clone(),
        })
    }

    pub fn from_record(record: &UserRoleRecord) -> ActiveModel {
        ActiveModel {
            user_id: Set(record.user_id.clone()),
            role: Set(record.role.as_str().to_string()),
            assigned_at: Set(record.assigned_at.into()),
            assigned_by: Set(record.assigned_by.clone()),
        }
    }
}
