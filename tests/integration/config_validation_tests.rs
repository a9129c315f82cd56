//! Configuration validation integration tests
//!
//! These tests verify that configuration validates correctly and fails
//! appropriately for invalid configurations.

#[cfg(test)]
mod tests {
    use kgoc_access::config::models::{
        CacheConfig, CorsConfig, RbacConfig, ServerConfig, StorageBackend, StorageConfig,
    };
    use kgoc_access::config::{Config, Validate};
    use kgoc_access::{AccessError, Permission, Role, RoleRegistry};
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ==================== ServerConfig Validation ====================

    #[test]
    fn test_valid_server_config() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_server_config_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Port"));
    }

    #[test]
    fn test_server_config_zero_workers() {
        let config = ServerConfig {
            workers: Some(0),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cors_wildcard_with_credentials() {
        let config = ServerConfig {
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
                allow_credentials: true,
                ..CorsConfig::default()
            },
            ..ServerConfig::default()
        };

        let result = config.validate();
        assert!(result.unwrap_err().contains("CORS"));
    }

    #[test]
    fn test_cors_explicit_origins_with_credentials() {
        let config = ServerConfig {
            cors: CorsConfig {
                allowed_origins: vec!["https://ops.kgoc.example".to_string()],
                allow_credentials: true,
                ..CorsConfig::default()
            },
            ..ServerConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    // ==================== StorageConfig Validation ====================

    #[test]
    fn test_storage_empty_url() {
        let mut config = StorageConfig::default();
        config.database.url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_memory_storage_ignores_url() {
        let mut config = StorageConfig {
            backend: StorageBackend::Memory,
            ..StorageConfig::default()
        };
        config.database.url.clear();
        assert!(config.validate().is_ok());
    }

    // ==================== RbacConfig Validation ====================

    #[test]
    fn test_rbac_unknown_default_role() {
        let config = RbacConfig {
            default_role: "foreman".to_string(),
            ..RbacConfig::default()
        };

        let result = config.validate();
        assert!(result.unwrap_err().contains("foreman"));
    }

    #[test]
    fn test_rbac_every_role_is_a_valid_default() {
        for role in Role::ALL {
            let config = RbacConfig {
                default_role: role.as_str().to_string(),
                ..RbacConfig::default()
            };
            assert!(config.validate().is_ok(), "{} rejected", role);
        }
    }

    // ==================== CacheConfig Validation ====================

    #[test]
    fn test_cache_zero_ttl() {
        let config = CacheConfig {
            ttl_seconds: 0,
            ..CacheConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_cache_skips_checks() {
        let config = CacheConfig {
            enabled: false,
            ttl_seconds: 0,
            ..CacheConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    // ==================== File loading ====================

    #[tokio::test]
    async fn test_role_overrides_flow_into_registry() {
        let content = r#"
storage:
  backend: memory
rbac:
  role_permissions:
    welltester:
      - well_test_view
      - well_test_view
      - admin_dashboard
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let registry = RoleRegistry::from_config(config.rbac());

        assert_eq!(
            registry.permissions_for(Role::Welltester),
            &[Permission::WellTestView, Permission::AdminDashboard]
        );
        assert!(registry.accessible_modules(Role::Welltester).administration);
        // Roles without an override keep the standard table
        assert_eq!(
            registry.permissions_for(Role::Operator),
            RoleRegistry::standard().permissions_for(Role::Operator)
        );
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server: [unclosed").unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(AccessError::Config(_))));
    }

    #[tokio::test]
    async fn test_zero_port_in_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server:\n  port: 0\n").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Server config error"));
    }
}
