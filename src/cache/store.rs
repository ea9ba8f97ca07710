//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiration and
//! policy-based eviction run during amortized cleanup passes.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, EvictionPolicy, MAX_KEY_LENGTH};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Main cache storage with TTL support and configurable eviction.
///
/// Expired entries are reclaimed lazily (on `get`) and in bulk during the
/// cleanup pass; a live entry is only ever removed by policy when a
/// cleanup pass finds the cache still at capacity.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Default TTL in milliseconds for entries without explicit TTL
    default_ttl_ms: u64,
    /// Eviction strategy applied when cleanup finds the cache full
    policy: EvictionPolicy,
    /// Timestamp of the last cleanup pass (Unix milliseconds)
    last_cleanup_at: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `default_ttl` - Default TTL in seconds for entries without explicit TTL
    /// * `capacity` - Maximum number of entries the cache can hold
    /// * `policy` - Eviction strategy applied when the cache is full
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` if `default_ttl` or `capacity`
    /// is zero.
    pub fn new(default_ttl: u64, capacity: usize, policy: EvictionPolicy) -> Result<Self> {
        if default_ttl == 0 {
            return Err(CacheError::InvalidConfig(
                "Default TTL must be positive".to_string(),
            ));
        }
        if capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "Capacity must be positive".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            capacity,
            default_ttl_ms: default_ttl * 1000,
            policy,
            last_cleanup_at: current_timestamp_ms(),
        })
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists, the value is overwritten unconditionally
    /// and its timestamps are reset. For a new key, a cleanup pass runs
    /// first when the cache is full or the cleanup interval has elapsed;
    /// if the cache is still full afterwards the set is rejected with
    /// `CacheError::NoStorage` and nothing is written.
    ///
    /// A TTL of zero falls back to the default duration.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store (arbitrary JSON)
    /// * `ttl` - Optional TTL in seconds (uses the default if None)
    pub fn set(&mut self, key: String, value: Value, ttl: Option<u64>) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidRequest("Key is required".to_string()));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if value.is_null() || matches!(value.as_str(), Some("")) {
            return Err(CacheError::InvalidRequest(
                "Body object is required".to_string(),
            ));
        }

        // Overwrites never grow the cache, so only new keys pay for cleanup
        if !self.entries.contains_key(&key) && !self.cleanup() {
            return Err(CacheError::NoStorage);
        }

        let ttl_ms = match ttl {
            Some(secs) if secs > 0 => secs * 1000,
            _ => self.default_ttl_ms,
        };

        self.entries.insert(key, CacheEntry::new(value, ttl_ms));
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if found and not expired. An entry observed
    /// expired is removed as a side effect and reported as a miss.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Result<Value> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                // Lazy expiration
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return Err(CacheError::Expired(key.to_string()));
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Ok(value)
        } else {
            self.stats.record_miss();
            Err(CacheError::NotFound(key.to_string()))
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Succeeds only when a live entry was removed. An entry that has
    /// already expired is removed as a side effect, but the delete still
    /// reports `Expired` since the data was logically gone already.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => return Err(CacheError::NotFound(key.to_string())),
        };

        self.entries.remove(key);
        self.stats.set_total_entries(self.entries.len());

        if expired {
            self.stats.record_expirations(1);
            return Err(CacheError::Expired(key.to_string()));
        }

        Ok(())
    }

    // == Cleanup ==
    /// Runs a cleanup pass if the cache is full or the cleanup interval
    /// (the default TTL) has elapsed since the last pass.
    ///
    /// A pass scans every entry once: expired entries are removed
    /// unconditionally, and among live entries a single eviction candidate
    /// is tracked per policy (minimum `added_at` for OldestFirst, maximum
    /// for NewestFirst, none for RejectOnFull). If the cache is still at
    /// capacity after expired entries are gone, at most that one candidate
    /// is evicted.
    ///
    /// Returns whether the cache ended below capacity, which is what
    /// `set` uses to accept or reject a new key.
    pub fn cleanup(&mut self) -> bool {
        let now = current_timestamp_ms();
        let interval_elapsed = now.saturating_sub(self.last_cleanup_at) > self.default_ttl_ms;

        if self.entries.len() < self.capacity && !interval_elapsed {
            return true;
        }

        let mut expired_keys: Vec<String> = Vec::new();
        let mut candidate: Option<(String, u64)> = None;

        for (key, entry) in &self.entries {
            if entry.is_expired_at(now) {
                expired_keys.push(key.clone());
            } else if self.policy != EvictionPolicy::RejectOnFull {
                let better = match &candidate {
                    None => true,
                    Some((_, best)) => match self.policy {
                        EvictionPolicy::OldestFirst => entry.added_at <= *best,
                        EvictionPolicy::NewestFirst => entry.added_at >= *best,
                        EvictionPolicy::RejectOnFull => false,
                    },
                };
                if better {
                    candidate = Some((key.clone(), entry.added_at));
                }
            }
        }

        if !expired_keys.is_empty() {
            for key in &expired_keys {
                self.entries.remove(key);
            }
            self.stats.record_expirations(expired_keys.len() as u64);
        }

        // Still full after reclaiming expired entries: evict one live entry
        if self.entries.len() >= self.capacity {
            if let Some((key, _)) = candidate {
                self.entries.remove(&key);
                self.stats.record_eviction();
            }
        }

        self.last_cleanup_at = now;
        self.stats.set_total_entries(self.entries.len());

        self.entries.len() < self.capacity
    }

    // == Remove Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Unlike `cleanup`, this never evicts a live entry, so the periodic
    /// sweep built on it cannot change observable semantics.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        if count > 0 {
            self.stats.record_expirations(count as u64);
        }
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
