//! Role record cache
//!
//! Sync policy: the store is authoritative. Reads are served from here only
//! while an entry is fresh; writers refresh or invalidate the entry after the
//! store write. Expired entries are kept until evicted so a caller can opt in
//! to serving them when the store is unreachable.

use crate::config::CacheConfig;
use crate::core::models::UserRoleRecord;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    record: UserRoleRecord,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() < ttl
    }
}

/// Cache lookup result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Fresh(UserRoleRecord),
    Stale(UserRoleRecord),
    Miss,
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub stale_served: u64,
    pub entries: usize,
}

/// TTL cache of role records keyed by user id
#[derive(Debug)]
pub struct RoleCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
    max_entries: usize,
    enabled: bool,
    hits: AtomicU64,
    misses: AtomicU64,
    stale_served: AtomicU64,
}

impl RoleCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: config.ttl(),
            max_entries: config.max_entries,
            enabled: config.enabled,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            stale_served: AtomicU64::new(0),
        }
    }

    /// Look up a user's record
    pub fn lookup(&self, user_id: &str) -> CacheLookup {
        if !self.enabled {
            return CacheLookup::Miss;
        }
        match self.entries.get(user_id) {
            Some(entry) if entry.is_fresh(self.ttl) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                CacheLookup::Fresh(entry.record.clone())
            }
            Some(entry) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                CacheLookup::Stale(entry.record.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                CacheLookup::Miss
            }
        }
    }

    /// Record that a stale entry was handed out
    pub fn note_stale_served(&self) {
        self.stale_served.fetch_add(1, Ordering::Relaxed);
    }

    /// Store a record read from or written to the store
    pub fn insert(&self, record: &UserRoleRecord) {
        if !self.enabled {
            return;
        }
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&record.user_id) {
            self.evict_one();
        }
        self.entries.insert(
            record.user_id.clone(),
            CacheEntry {
                record: record.clone(),
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&self, user_id: &str) {
        if self.entries.remove(user_id).is_some() {
            debug!("Invalidated cached role for user {}", user_id);
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            stale_served: self.stale_served.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    /// Drop the oldest entry
    fn evict_one(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().inserted_at)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::rbac::Role;

    fn cache_with(ttl_seconds: u64, max_entries: usize) -> RoleCache {
        RoleCache::new(&CacheConfig {
            enabled: true,
            ttl_seconds,
            max_entries,
            serve_stale_on_error: false,
        })
    }

    #[test]
    fn test_insert_and_fresh_lookup() {
        let cache = cache_with(60, 10);
        let record = UserRoleRecord::system("u-1", Role::Operator);
        cache.insert(&record);

        assert_eq!(cache.lookup("u-1"), CacheLookup::Fresh(record));
        assert_eq!(cache.lookup("u-2"), CacheLookup::Miss);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_expired_entry_is_stale() {
        let cache = cache_with(0, 10);
        let record = UserRoleRecord::system("u-1", Role::Operator);
        cache.insert(&record);

        assert_eq!(cache.lookup("u-1"), CacheLookup::Stale(record));
    }

    #[test]
    fn test_invalidate() {
        let cache = cache_with(60, 10);
        cache.insert(&UserRoleRecord::system("u-1", Role::Operator));
        cache.invalidate("u-1");
        assert_eq!(cache.lookup("u-1"), CacheLookup::Miss);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let cache = cache_with(60, 2);
        cache.insert(&UserRoleRecord::system("u-1", Role::Operator));
        std::thread::sleep(Duration::from_millis(2));
        cache.insert(&UserRoleRecord::system("u-2", Role::Operator));
        std::thread::sleep(Duration::from_millis(2));
        cache.insert(&UserRoleRecord::system("u-3", Role::Operator));

        assert_eq!(cache.stats().entries, 2);
        assert_eq!(cache.lookup("u-1"), CacheLookup::Miss);
        assert!(matches!(cache.lookup("u-3"), CacheLookup::Fresh(_)));
    }

    #[test]
    fn test_disabled_cache_never_hits() {
        let cache = RoleCache::new(&CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        });
        cache.insert(&UserRoleRecord::system("u-1", Role::Operator));
        assert_eq!(cache.lookup("u-1"), CacheLookup::Miss);
        assert_eq!(cache.stats().entries, 0);
    }
}
