use crate::core::models::UserAccount;
use crate::utils::error::{AccessError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: &str) -> Result<Option<UserAccount>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id.to_string())
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(user_model.map(|model| model.to_account()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserAccount>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(user_model.map(|model| model.to_account()))
    }

    /// Create a new user
    pub async fn insert_user(&self, account: &UserAccount) -> Result<()> {
        debug!("Creating user: {}", account.id);

        entities::User::insert(user::Model::from_account(account))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| user_insert_error(e, account))?;

        Ok(())
    }

    /// Count registered users
    pub async fn user_count(&self) -> Result<u64> {
        entities::User::find()
            .count(&self.db)
            .await
            .map_err(AccessError::Database)
    }
}

/// Map an insert failure on `users` to a conflict when a unique key was hit
pub(super) fn user_insert_error(err: DbErr, account: &UserAccount) -> AccessError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AccessError::conflict(format!(
            "User {} or email {} is already registered",
            account.id, account.email
        )),
        _ => AccessError::Database(err),
    }
}
