use crate::core::models::{FirstUserMarker, UserAccount, UserRoleRecord};
use crate::storage::{ClaimOutcome, RoleStore};
use crate::utils::error::Result;
use async_trait::async_trait;

use super::types::SeaOrmDatabase;

#[async_trait]
impl RoleStore for SeaOrmDatabase {
    async fn get_role_record(&self, user_id: &str) -> Result<Option<UserRoleRecord>> {
        self.find_role_record(user_id).await
    }

    async fn put_role_record(&self, record: &UserRoleRecord) -> Result<()> {
        self.upsert_role_record(record).await
    }

    async fn list_role_records(&self) -> Result<Vec<UserRoleRecord>> {
        self.all_role_records().await
    }

    async fn count_role_records(&self) -> Result<u64> {
        self.role_record_count().await
    }

    async fn create_user(&self, account: &UserAccount) -> Result<()> {
        self.insert_user(account).await
    }

    async fn find_user(&self, user_id: &str) -> Result<Option<UserAccount>> {
        self.find_user_by_id(user_id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.user_count().await
    }

    async fn claim_first_user(
        &self,
        record: &UserRoleRecord,
        account: Option<&UserAccount>,
    ) -> Result<ClaimOutcome> {
        self.try_claim_first_user(record, account).await
    }

    async fn first_user_marker(&self) -> Result<Option<FirstUserMarker>> {
        self.load_first_user_marker().await
    }

    async fn health_check(&self) -> Result<()> {
        self.ping().await
    }
}
