//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and query
//! parameters.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CacheError, Result};

/// Request body for the SET operation (POST/PUT /object/:key)
///
/// The payload travels in an `object` field and is stored untouched;
/// absence is rejected by the store as a validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The value to store
    #[serde(default)]
    pub object: Option<Value>,
}

/// Query parameters for the SET operation
///
/// The TTL arrives as a raw string so that malformed values surface as a
/// validation error instead of a routing-layer rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetQuery {
    /// Optional TTL override in seconds
    #[serde(default)]
    pub ttl: Option<String>,
}

impl SetQuery {
    /// Parses the TTL parameter.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidRequest` when the value is not a
    /// number or is negative.
    pub fn ttl_seconds(&self) -> Result<Option<u64>> {
        let raw = match &self.ttl {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let parsed: i64 = raw
            .trim()
            .parse()
            .map_err(|_| CacheError::InvalidRequest("ttl is not a number".to_string()))?;

        if parsed < 0 {
            return Err(CacheError::InvalidRequest(
                "ttl must be positive".to_string(),
            ));
        }

        Ok(Some(parsed as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"object": {"name": "hello"}}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.object, Some(json!({"name": "hello"})));
    }

    #[test]
    fn test_set_request_missing_object() {
        let req: SetRequest = serde_json::from_str("{}").unwrap();
        assert!(req.object.is_none());
    }

    #[test]
    fn test_ttl_absent() {
        let query = SetQuery { ttl: None };
        assert_eq!(query.ttl_seconds().unwrap(), None);
    }

    #[test]
    fn test_ttl_valid() {
        let query = SetQuery {
            ttl: Some("60".to_string()),
        };
        assert_eq!(query.ttl_seconds().unwrap(), Some(60));
    }

    #[test]
    fn test_ttl_not_a_number() {
        let query = SetQuery {
            ttl: Some("soon".to_string()),
        };
        assert!(matches!(
            query.ttl_seconds(),
            Err(CacheError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_ttl_negative() {
        let query = SetQuery {
            ttl: Some("-5".to_string()),
        };
        assert!(matches!(
            query.ttl_seconds(),
            Err(CacheError::InvalidRequest(_))
        ));
    }
}
