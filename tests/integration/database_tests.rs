//! Database integration tests
//!
//! Tests the SeaORM role store using real SQLite databases.

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::fixtures::{AccountFactory, RoleRecordFactory};
    use crate::{assert_err, assert_ok};
    use kgoc_access::storage::database::DatabaseBackendType;
    use kgoc_access::{AccessError, ClaimOutcome, Role, RoleStore, UserRoleRecord};

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);

        let health = db.db().health_check().await;
        assert!(health.is_ok(), "Health check failed: {:?}", health.err());
    }

    /// Migrations are idempotent
    #[tokio::test]
    async fn test_database_migration_twice() {
        let db = TestDatabase::new().await;
        let result = db.db().migrate().await;
        assert!(result.is_ok(), "Migration failed: {:?}", result.err());
    }

    #[tokio::test]
    async fn test_role_record_round_trip() {
        let db = TestDatabase::new().await;
        let record = RoleRecordFactory::assigned("u-1", Role::Coordinator);

        assert_ok!(db.db().put_role_record(&record).await);
        let loaded = assert_ok!(db.db().get_role_record("u-1").await).unwrap();

        assert_eq!(loaded.user_id, "u-1");
        assert_eq!(loaded.role, Role::Coordinator);
        assert_eq!(loaded.assigned_by.as_deref(), Some("fixture"));
        assert_eq!(
            loaded.assigned_at.timestamp_micros(),
            record.assigned_at.timestamp_micros()
        );
    }

    #[tokio::test]
    async fn test_put_role_record_overwrites() {
        let db = TestDatabase::new().await;

        assert_ok!(
            db.db()
                .put_role_record(&UserRoleRecord::system("u-1", Role::Operator))
                .await
        );
        assert_ok!(
            db.db()
                .put_role_record(&RoleRecordFactory::assigned("u-1", Role::Supervisor))
                .await
        );

        assert_eq!(assert_ok!(db.db().count_role_records().await), 1);
        let loaded = assert_ok!(db.db().get_role_record("u-1").await).unwrap();
        assert_eq!(loaded.role, Role::Supervisor);
    }

    #[tokio::test]
    async fn test_list_role_records_ordered() {
        let db = TestDatabase::new().await;
        for (id, role) in [("c", Role::Operator), ("a", Role::Admin), ("b", Role::Welltester)] {
            assert_ok!(db.db().put_role_record(&UserRoleRecord::system(id, role)).await);
        }

        let records = assert_ok!(db.db().list_role_records().await);
        let ids: Vec<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_missing_role_record() {
        let db = TestDatabase::new().await;
        assert!(assert_ok!(db.db().get_role_record("nobody").await).is_none());
    }

    #[tokio::test]
    async fn test_user_operations() {
        let db = TestDatabase::new().await;
        let account = AccountFactory::create();

        assert_ok!(db.db().create_user(&account).await);
        assert_eq!(assert_ok!(db.db().count_users().await), 1);

        let found = assert_ok!(db.db().find_user(&account.id).await).unwrap();
        assert_eq!(found.email, account.email);
        assert_eq!(found.display_name, account.display_name);

        let by_email = assert_ok!(db.db().find_user_by_email(&account.email).await);
        assert!(by_email.is_some());

        let user = db.db().find_user_by_email("nonexistent@kgoc.example").await;
        assert!(assert_ok!(user).is_none());
    }

    #[tokio::test]
    async fn test_duplicate_user_is_conflict() {
        let db = TestDatabase::new().await;
        let account = AccountFactory::with_id("u-1");
        assert_ok!(db.db().create_user(&account).await);

        let err = assert_err!(db.db().create_user(&account).await);
        assert!(matches!(err, AccessError::Conflict(_)), "got {:?}", err);

        let mut same_email = AccountFactory::with_id("u-2");
        same_email.email = account.email.clone();
        let err = assert_err!(db.db().create_user(&same_email).await);
        assert!(matches!(err, AccessError::Conflict(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_claim_first_user_on_empty_store() {
        let db = TestDatabase::new().await;
        let account = AccountFactory::with_id("u-1");
        let record = UserRoleRecord::system("u-1", Role::Admin);

        let outcome = assert_ok!(db.db().claim_first_user(&record, Some(&account)).await);
        assert_eq!(outcome, ClaimOutcome::Claimed);

        let marker = assert_ok!(db.db().first_user_marker().await).unwrap();
        assert_eq!(marker.user_id, "u-1");
        assert_eq!(marker.claimed_at, record.assigned_at);
        assert!(assert_ok!(db.db().find_user("u-1").await).is_some());
        let stored = assert_ok!(db.db().get_role_record("u-1").await).unwrap();
        assert_eq!(stored.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_second_claim_is_rejected() {
        let db = TestDatabase::new().await;
        assert_ok!(
            db.db()
                .claim_first_user(&UserRoleRecord::system("u-1", Role::Admin), None)
                .await
        );

        let account = AccountFactory::with_id("u-2");
        let outcome = assert_ok!(
            db.db()
                .claim_first_user(&UserRoleRecord::system("u-2", Role::Admin), Some(&account))
                .await
        );
        assert_eq!(outcome, ClaimOutcome::AlreadyClaimed);

        // Nothing from the losing claim is written
        assert!(assert_ok!(db.db().find_user("u-2").await).is_none());
        assert!(assert_ok!(db.db().get_role_record("u-2").await).is_none());
        let marker = assert_ok!(db.db().first_user_marker().await).unwrap();
        assert_eq!(marker.user_id, "u-1");
    }

    #[tokio::test]
    async fn test_claim_refused_on_populated_store() {
        let db = TestDatabase::new().await;
        assert_ok!(
            db.db()
                .put_role_record(&UserRoleRecord::system("u-0", Role::Operator))
                .await
        );

        let outcome = assert_ok!(
            db.db()
                .claim_first_user(&UserRoleRecord::system("u-1", Role::Admin), None)
                .await
        );
        assert_eq!(outcome, ClaimOutcome::StoreNotEmpty);
        assert!(assert_ok!(db.db().first_user_marker().await).is_none());
    }

    #[tokio::test]
    async fn test_claim_refused_when_other_account_exists() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().create_user(&AccountFactory::with_id("u-0")).await);

        let outcome = assert_ok!(
            db.db()
                .claim_first_user(&UserRoleRecord::system("u-1", Role::Admin), None)
                .await
        );
        assert_eq!(outcome, ClaimOutcome::StoreNotEmpty);
    }

    #[tokio::test]
    async fn test_claim_with_existing_account_is_conflict() {
        let db = TestDatabase::new().await;
        let account = AccountFactory::with_id("u-1");
        assert_ok!(db.db().create_user(&account).await);

        let err = assert_err!(
            db.db()
                .claim_first_user(&UserRoleRecord::system("u-1", Role::Admin), Some(&account))
                .await
        );
        assert!(matches!(err, AccessError::Conflict(_)), "got {:?}", err);
        assert!(assert_ok!(db.db().first_user_marker().await).is_none());
    }
}
