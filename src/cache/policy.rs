//! Eviction Policy Module
//!
//! Defines the strategies for reclaiming live capacity during cleanup.

use std::fmt;
use std::str::FromStr;

use crate::error::CacheError;

// == Eviction Policy ==
/// Strategy applied when a cleanup pass must evict a live entry.
///
/// Expired entries are always reclaimed regardless of policy; the policy
/// only selects which live entry to remove when the cache is still at
/// capacity after expired entries are gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicy {
    /// Evict the entry with the smallest `added_at` timestamp
    OldestFirst,
    /// Evict the entry with the largest `added_at` timestamp
    NewestFirst,
    /// Never evict a live entry; reject new keys while full
    RejectOnFull,
}

impl EvictionPolicy {
    /// Returns the configuration name of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::OldestFirst => "oldest_first",
            EvictionPolicy::NewestFirst => "newest_first",
            EvictionPolicy::RejectOnFull => "reject",
        }
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oldest_first" => Ok(EvictionPolicy::OldestFirst),
            "newest_first" => Ok(EvictionPolicy::NewestFirst),
            "reject" => Ok(EvictionPolicy::RejectOnFull),
            other => Err(CacheError::InvalidConfig(format!(
                "Unknown eviction policy '{}' (expected oldest_first, newest_first or reject)",
                other
            ))),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "oldest_first".parse::<EvictionPolicy>().unwrap(),
            EvictionPolicy::OldestFirst
        );
        assert_eq!(
            "newest_first".parse::<EvictionPolicy>().unwrap(),
            EvictionPolicy::NewestFirst
        );
        assert_eq!(
            "reject".parse::<EvictionPolicy>().unwrap(),
            EvictionPolicy::RejectOnFull
        );
    }

    #[test]
    fn test_policy_from_str_case_insensitive() {
        assert_eq!(
            " Oldest_First ".parse::<EvictionPolicy>().unwrap(),
            EvictionPolicy::OldestFirst
        );
    }

    #[test]
    fn test_policy_from_str_invalid() {
        let result = "lru".parse::<EvictionPolicy>();
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_policy_display_roundtrip() {
        for policy in [
            EvictionPolicy::OldestFirst,
            EvictionPolicy::NewestFirst,
            EvictionPolicy::RejectOnFull,
        ] {
            let parsed: EvictionPolicy = policy.to_string().parse().unwrap();
            assert_eq!(parsed, policy);
        }
    }
}
