use crate::core::models::UserAccount;
use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID from the identity provider
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,

    /// Display name (optional)
    pub display_name: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain account
    pub fn to_account(&self) -> UserAccount {
        UserAccount {
            id: self.id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            created_at: self.created_at.with_timezone(&Utc),
        }
    }

    /// Active model for inserting a domain account
    pub fn from_account(account: &UserAccount) -> ActiveModel {
        ActiveModel {
            id: Set(account.id.clone()),
            email: Set(account.email.clone()),
            display_name: Set(account.display_name.clone()),
            created_at: Set(account.created_at.into()),
        }
    }
}
