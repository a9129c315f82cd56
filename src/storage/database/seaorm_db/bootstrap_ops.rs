use crate::core::models::{FirstUserMarker, UserAccount, UserRoleRecord};
use crate::storage::{ClaimOutcome, FIRST_USER_KEY};
use crate::utils::error::{AccessError, Result};
use chrono::Utc;
use sea_orm::*;
use tracing::{debug, info};

use super::super::entities::{self, system_config, user, user_role};
use super::types::SeaOrmDatabase;
use super::user_ops::user_insert_error;

impl SeaOrmDatabase {
    /// Claim the first-user sentinel inside one transaction
    ///
    /// The sentinel insert is the first statement so the losing side of a
    /// race fails on the primary key instead of reading a stale empty store.
    pub async fn try_claim_first_user(
        &self,
        record: &UserRoleRecord,
        account: Option<&UserAccount>,
    ) -> Result<ClaimOutcome> {
        let marker = FirstUserMarker {
            user_id: record.user_id.clone(),
            claimed_at: record.assigned_at,
        };
        let sentinel = system_config::ActiveModel {
            key: Set(FIRST_USER_KEY.to_string()),
            value: Set(serde_json::to_string(&marker)?),
            created_at: Set(Utc::now().into()),
        };

        let txn = self.db.begin().await.map_err(AccessError::Database)?;

        if let Err(e) = entities::SystemConfig::insert(sentinel)
            .exec_without_returning(&txn)
            .await
        {
            txn.rollback().await.map_err(AccessError::Database)?;
            return match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    debug!("First-user sentinel already present");
                    Ok(ClaimOutcome::AlreadyClaimed)
                }
                _ => Err(AccessError::Database(e)),
            };
        }

        let role_records = entities::UserRole::find()
            .count(&txn)
            .await
            .map_err(AccessError::Database)?;
        let other_users = entities::User::find()
            .filter(user::Column::Id.ne(record.user_id.as_str()))
            .count(&txn)
            .await
            .map_err(AccessError::Database)?;
        if role_records > 0 || other_users > 0 {
            debug!(
                "First-user claim refused: {} role records, {} other users",
                role_records, other_users
            );
            txn.rollback().await.map_err(AccessError::Database)?;
            return Ok(ClaimOutcome::StoreNotEmpty);
        }

        if let Some(account) = account {
            if let Err(e) = entities::User::insert(user::Model::from_account(account))
                .exec_without_returning(&txn)
                .await
            {
                txn.rollback().await.map_err(AccessError::Database)?;
                return Err(user_insert_error(e, account));
            }
        }

        entities::UserRole::insert(user_role::Model::from_record(record))
            .exec_without_returning(&txn)
            .await
            .map_err(AccessError::Database)?;

        txn.commit().await.map_err(AccessError::Database)?;
        info!("User {} claimed the first-user slot", record.user_id);
        Ok(ClaimOutcome::Claimed)
    }

    /// Read the first-user sentinel
    pub async fn load_first_user_marker(&self) -> Result<Option<FirstUserMarker>> {
        let row = entities::SystemConfig::find_by_id(FIRST_USER_KEY.to_string())
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        match row {
            Some(row) => Ok(Some(serde_json::from_str(&row.value)?)),
            None => Ok(None),
        }
    }
}
