//! First-user bootstrap integration tests
//!
//! Exercises the access system end to end against the SeaORM store,
//! including concurrent registrations that race for the first-user claim.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::TestDatabase;
    use crate::common::fixtures::{AccountFactory, memory_config};
    use kgoc_access::config::AccessConfig;
    use kgoc_access::{AccessSystem, Role, RoleRegistry, RoleStore};
    use std::sync::Arc;

    fn system_over(db: &TestDatabase) -> AccessSystem {
        let config = AccessConfig::default();
        let registry = Arc::new(RoleRegistry::from_config(&config.rbac));
        let store: Arc<dyn RoleStore> = db.db_arc();
        AccessSystem::new(registry, store, &config).expect("Failed to build access system")
    }

    #[tokio::test]
    async fn test_sequential_registrations() {
        let db = TestDatabase::new().await;
        let system = system_over(&db);

        let first = assert_ok!(system.register_user(AccountFactory::with_id("u-1")).await);
        assert!(first.granted_admin);
        assert_eq!(first.record.role, Role::Admin);

        for id in ["u-2", "u-3"] {
            let next = assert_ok!(system.register_user(AccountFactory::with_id(id)).await);
            assert!(!next.granted_admin);
            assert_eq!(next.record.role, Role::Operator);
        }

        assert_eq!(assert_ok!(db.db().count_users().await), 3);
        assert_eq!(assert_ok!(db.db().count_role_records().await), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_on_sqlite_yield_one_admin() {
        let db = TestDatabase::on_disk(8).await;
        let system = Arc::new(system_over(&db));

        const REGISTRATIONS: usize = 16;
        let handles: Vec<_> = (0..REGISTRATIONS)
            .map(|_| {
                let system = system.clone();
                tokio::spawn(async move { system.register_user(AccountFactory::create()).await })
            })
            .collect();

        let mut admins = 0;
        for handle in handles {
            let registration = handle
                .await
                .expect("task panicked")
                .expect("registration failed");
            if registration.granted_admin {
                assert_eq!(registration.record.role, Role::Admin);
                admins += 1;
            }
        }

        assert_eq!(admins, 1, "{} accounts were promoted", admins);
        assert_eq!(
            assert_ok!(db.db().count_users().await),
            REGISTRATIONS as u64
        );
        assert_eq!(
            assert_ok!(db.db().count_role_records().await),
            REGISTRATIONS as u64
        );
        let admin_records = assert_ok!(db.db().list_role_records().await)
            .into_iter()
            .filter(|record| record.role == Role::Admin)
            .count();
        assert_eq!(admin_records, 1);
        assert!(assert_ok!(db.db().first_user_marker().await).is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_logins_in_memory_yield_one_admin() {
        let system = Arc::new(assert_ok!(AccessSystem::from_config(&memory_config()).await));

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let system = system.clone();
                tokio::spawn(async move { system.on_first_login(&format!("u-{}", i)).await })
            })
            .collect();

        let outcomes = futures::future::join_all(handles).await;
        let admins = outcomes
            .into_iter()
            .map(|joined| joined.expect("task panicked").expect("login failed"))
            .filter(|outcome| outcome.granted_admin)
            .count();
        assert_eq!(admins, 1);
    }

    #[tokio::test]
    async fn test_first_user_survives_reopen() {
        let db = TestDatabase::on_disk(2).await;
        {
            let system = system_over(&db);
            let first = assert_ok!(system.on_first_login("root").await);
            assert!(first.granted_admin);
        }

        // A fresh system over the same store must not promote again
        let system = system_over(&db);
        let second = assert_ok!(system.on_first_login("late").await);
        assert!(!second.granted_admin);
        assert_eq!(
            assert_ok!(system.get_user_role("root").await),
            Some(Role::Admin)
        );
    }

    #[tokio::test]
    async fn test_admin_assigns_roles_over_database() {
        let db = TestDatabase::new().await;
        let system = system_over(&db);

        assert_ok!(system.register_user(AccountFactory::with_id("boss")).await);
        assert_ok!(system.register_user(AccountFactory::with_id("crew")).await);

        let record = assert_ok!(system.assign_role("boss", "crew", "welltester").await);
        assert_eq!(record.assigned_by.as_deref(), Some("boss"));

        let stored = assert_ok!(db.db().get_role_record("crew").await).unwrap();
        assert_eq!(stored.role, Role::Welltester);

        let access = assert_ok!(system.user_access("crew").await);
        assert!(access.modules.well_test);
        assert!(!access.modules.user_management);
    }
}
