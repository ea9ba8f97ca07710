//! Configuration Module
//!
//! Handles loading and validating server configuration from environment
//! variables.

use std::env;
use std::str::FromStr;

use crate::cache::EvictionPolicy;
use crate::error::{CacheError, Result};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with defaults
/// matching the reference deployment. A variable that is present but
/// unparseable is a fatal configuration error rather than a silent
/// fallback.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds, also the cleanup-pass interval
    pub default_ttl: u64,
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction strategy applied when the cache is full
    pub eviction_policy: EvictionPolicy,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 3600)
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 10000)
    /// - `EVICTION_POLICY` - oldest_first | newest_first | reject (default: reject)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` when a variable is set to a
    /// value that does not parse.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            default_ttl: env_parsed("DEFAULT_TTL", 3600)?,
            capacity: env_parsed("CACHE_CAPACITY", 10000)?,
            eviction_policy: env_parsed("EVICTION_POLICY", EvictionPolicy::RejectOnFull)?,
            server_port: env_parsed("SERVER_PORT", 5000)?,
            cleanup_interval: env_parsed("CLEANUP_INTERVAL", 60)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: 3600,
            capacity: 10000,
            eviction_policy: EvictionPolicy::RejectOnFull,
            server_port: 5000,
            cleanup_interval: 60,
        }
    }
}

/// Reads an environment variable, falling back to `default` when unset
/// and failing when set to an unparseable value.
fn env_parsed<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            CacheError::InvalidConfig(format!("{} has invalid value '{}'", name, raw))
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl, 3600);
        assert_eq!(config.capacity, 10000);
        assert_eq!(config.eviction_policy, EvictionPolicy::RejectOnFull);
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cleanup_interval, 60);
    }

    // Environment mutations live in a single test to keep them sequential
    #[test]
    fn test_config_from_env() {
        for name in [
            "DEFAULT_TTL",
            "CACHE_CAPACITY",
            "EVICTION_POLICY",
            "SERVER_PORT",
            "CLEANUP_INTERVAL",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_ttl, 3600);
        assert_eq!(config.capacity, 10000);
        assert_eq!(config.eviction_policy, EvictionPolicy::RejectOnFull);

        env::set_var("EVICTION_POLICY", "oldest_first");
        env::set_var("CACHE_CAPACITY", "50");
        let config = Config::from_env().unwrap();
        assert_eq!(config.eviction_policy, EvictionPolicy::OldestFirst);
        assert_eq!(config.capacity, 50);

        env::set_var("CACHE_CAPACITY", "not-a-number");
        let result = Config::from_env();
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));

        env::remove_var("EVICTION_POLICY");
        env::remove_var("CACHE_CAPACITY");
    }
}
