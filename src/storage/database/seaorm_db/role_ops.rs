use crate::core::models::UserRoleRecord;
use crate::utils::error::{AccessError, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user_role};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find the role record of a user
    pub async fn find_role_record(&self, user_id: &str) -> Result<Option<UserRoleRecord>> {
        debug!("Finding role record for user: {}", user_id);

        entities::UserRole::find_by_id(user_id.to_string())
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?
            .map(|model| model.to_record())
            .transpose()
    }

    /// Insert or overwrite a role record
    pub async fn upsert_role_record(&self, record: &UserRoleRecord) -> Result<()> {
        debug!("Storing role {} for user {}", record.role, record.user_id);

        entities::UserRole::insert(user_role::Model::from_record(record))
            .on_conflict(
                OnConflict::column(user_role::Column::UserId)
                    .update_columns([
                        user_role::Column::Role,
                        user_role::Column::AssignedAt,
                        user_role::Column::AssignedBy,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(())
    }

    /// All role records ordered by user id
    pub async fn all_role_records(&self) -> Result<Vec<UserRoleRecord>> {
        entities::UserRole::find()
            .order_by_asc(user_role::Column::UserId)
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?
            .iter()
            .map(user_role::Model::to_record)
            .collect()
    }

    pub async fn role_record_count(&self) -> Result<u64> {
        entities::UserRole::find()
            .count(&self.db)
            .await
            .map_err(AccessError::Database)
    }
}
