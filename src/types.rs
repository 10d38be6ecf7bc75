//! Core type definitions for identifiers and timestamps.
//!
//! Identifiers in this crate are opaque strings minted by the upstream
//! job-portal backend (Mongo-style object ids, auth-provider subject ids).
//! Nothing here generates ids locally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque recruiter/actor identifier.
///
/// The upstream API supplies actor ids; this crate never mints them.
/// This allows integration with any backend id scheme (ObjectId, UUID
/// string, auth subject) without caring about the format.
///
/// `Ord` is derived because [`RollupReport`](crate::RollupReport) keys its
/// per-actor breakdown by `ActorId` in a `BTreeMap` for deterministic
/// iteration order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub String);

impl ActorId {
    /// Creates a new ActorId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the actor ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ActorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unix timestamp in milliseconds.
///
/// Activity records carry a creation time that the view layer renders;
/// aggregation never looks at it. Using i64 allows representing dates far
/// into the future and past.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    ///
    /// If the system clock is before the Unix epoch (should never happen
    /// in practice), returns a timestamp of 0 (epoch) rather than panicking.
    #[inline]
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self(duration.as_millis() as i64)
    }

    /// Creates a timestamp from Unix milliseconds.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as Unix milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id() {
        let id = ActorId::new("recruiter-123");
        assert_eq!(id.as_str(), "recruiter-123");
        assert_eq!(format!("{}", id), "recruiter-123");
    }

    #[test]
    fn test_actor_id_from_str() {
        let id: ActorId = "66b2f0a1c4".into();
        assert_eq!(id.as_str(), "66b2f0a1c4");
    }

    #[test]
    fn test_actor_id_ordering() {
        let a = ActorId::new("a");
        let b = ActorId::new("b");
        assert!(a < b);
    }

    #[test]
    fn test_actor_id_json_is_plain_string() {
        let id = ActorId::new("recruiter-9");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"recruiter-9\"");

        let restored: ActorId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }

    #[test]
    fn test_timestamp_now() {
        let t1 = Timestamp::now();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let t2 = Timestamp::now();
        assert!(t1 < t2, "Timestamps should be ordered");
    }

    #[test]
    fn test_timestamp_ordering() {
        let t1 = Timestamp::from_millis(1000);
        let t2 = Timestamp::from_millis(2000);
        assert!(t1 < t2);
    }

    #[test]
    fn test_timestamp_millis_roundtrip() {
        let t = Timestamp::from_millis(1_722_470_400_000);
        assert_eq!(t.as_millis(), 1_722_470_400_000);
    }
}
