//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// Every entry carries an expiration timestamp; there is no "never
/// expires" case. Entries without an explicit TTL receive the store's
/// default duration.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value (opaque JSON payload, never inspected)
    pub value: Value,
    /// Creation timestamp (Unix milliseconds), reset on overwrite
    pub added_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_ms` milliseconds from now.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_ms` - Time-to-live in milliseconds (must be > 0)
    pub fn new(value: Value, ttl_ms: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            added_at: now,
            expires_at: now + ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time. This ensures
    /// that once the TTL duration has fully elapsed, the entry is
    /// immediately expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Checks expiration against a caller-supplied timestamp.
    ///
    /// Used by the cleanup scan so that a single pass evaluates every
    /// entry against the same instant.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or 0 if already expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(json!("test_value"), 60_000);

        assert_eq!(entry.value, json!("test_value"));
        assert!(entry.expires_at > entry.added_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_holds_arbitrary_json() {
        let entry = CacheEntry::new(json!({"nested": {"list": [1, 2, 3]}}), 60_000);

        assert_eq!(entry.value["nested"]["list"][1], json!(2));
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        // Create entry with 1 second TTL
        let entry = CacheEntry::new(json!("test_value"), 1_000);

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new(json!("test_value"), 10_000);

        let remaining_ms = entry.ttl_remaining_ms();
        assert!(remaining_ms <= 10_000);
        assert!(remaining_ms >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new(json!("test_value"), 1_000);

        sleep(Duration::from_millis(1100));

        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Construct an entry whose expiration is exactly its creation time
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: json!("test"),
            added_at: now,
            expires_at: now,
        };

        // Entry should be expired when current time >= expires_at
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }

    #[test]
    fn test_is_expired_at_fixed_instant() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: json!("test"),
            added_at: now,
            expires_at: now + 500,
        };

        assert!(!entry.is_expired_at(now));
        assert!(!entry.is_expired_at(now + 499));
        assert!(entry.is_expired_at(now + 500));
        assert!(entry.is_expired_at(now + 501));
    }
}
