//! Data types for raw activity-log records.
//!
//! Records arrive as loosely-typed JSON from the portal's REST backend.
//! Different producers disagree on casing (`candidateId` vs `candidate_id`)
//! and on value types (ids sometimes arrive as JSON numbers), so every
//! optional field here deserializes tolerantly: a value that isn't usable
//! is treated as absent rather than failing the record.
//!
//! Key resolution lives on [`ActivityRecord`] as explicit fallback chains
//! with fixed precedence; the aggregator never inspects raw JSON.

use serde::{Deserialize, Serialize};

use crate::types::{ActorId, Timestamp};

/// Tolerant deserialization helpers for loosely-typed payload fields.
///
/// The upstream backend is schema-less at the `details` level. These
/// helpers normalize what it sends:
/// - key fields accept strings (blank → absent) or numbers (decimal form)
/// - text fields accept non-blank strings only
/// - timestamps accept epoch-millis numbers or digit strings
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use crate::types::Timestamp;

    /// Normalizes a JSON value into an identity key, if usable.
    pub(crate) fn key_from_value(value: Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Key field: string or number, blank/other → absent.
    pub(crate) fn opt_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(key_from_value))
    }

    /// Text field: non-blank strings only. A numeric status would otherwise
    /// stringify and trip status-comparison rules it was never part of.
    pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }))
    }

    /// Actor id: same tolerance as keys, wrapped in [`crate::ActorId`].
    pub(crate) fn opt_actor<'de, D>(
        deserializer: D,
    ) -> Result<Option<crate::types::ActorId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_key(deserializer)?.map(crate::types::ActorId::new))
    }

    /// Timestamp: epoch millis as a number or digit string, else absent.
    pub(crate) fn opt_millis<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| match v {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map(Timestamp::from_millis),
            Value::String(s) => s.trim().parse::<i64>().ok().map(Timestamp::from_millis),
            _ => None,
        }))
    }
}

/// A raw activity-log record as supplied by the REST backend.
///
/// Every field except `activity_type` is optional: the log stream is
/// heterogeneous and partially trusted, and a record missing a field is
/// simply not counted for the metrics that need it. The record's own log
/// `id` is never used as an identity key.
///
/// # Key Resolution
///
/// Identity keys resolve through fixed-precedence fallback chains:
///
/// - [`application_key()`](Self::application_key): `application_id` →
///   `details.application_id` → `details.candidate_id` →
///   `details.viewed_user_id`
/// - [`candidate_key()`](Self::candidate_key): `details.candidate_id` →
///   `details.viewed_user_id` → `application_key()`
/// - [`resolved_status()`](Self::resolved_status): `details.new_status` →
///   `details.status`, lowercased
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Opaque log-entry identifier. Display/debugging only — never an
    /// identity key for deduplication.
    #[serde(default, alias = "_id", deserialize_with = "de::opt_key")]
    pub id: Option<String>,

    /// The recruiter who performed the activity. Records without a
    /// resolvable actor are skipped entirely.
    #[serde(default, alias = "user_id", deserialize_with = "de::opt_actor")]
    pub user_id: Option<ActorId>,

    /// Free-form event categorization (e.g. "profile_viewed",
    /// "application_status_changed"). Matched case-insensitively against
    /// the configured vocabularies.
    #[serde(default, alias = "activity_type")]
    pub activity_type: String,

    /// Top-level application reference, when the producer sets one.
    #[serde(default, alias = "application_id", deserialize_with = "de::opt_key")]
    pub application_id: Option<String>,

    /// Loosely structured payload bag.
    #[serde(default)]
    pub details: ActivityDetails,

    /// Creation time, for display only. Aggregation never reads it.
    #[serde(
        default,
        alias = "createdAt",
        alias = "created_at",
        deserialize_with = "de::opt_millis"
    )]
    pub timestamp: Option<Timestamp>,
}

impl ActivityRecord {
    /// Returns the activity type lowercased for vocabulary lookup.
    pub fn activity_type_lower(&self) -> String {
        self.activity_type.to_lowercase()
    }

    /// Resolves the application identity key.
    ///
    /// First present of: `application_id`, `details.application_id`,
    /// `details.candidate_id`, `details.viewed_user_id`. `None` when the
    /// record carries no usable reference — there is no fallback to the
    /// record's own log id.
    pub fn application_key(&self) -> Option<&str> {
        self.application_id
            .as_deref()
            .or(self.details.application_id.as_deref())
            .or(self.details.candidate_id.as_deref())
            .or(self.details.viewed_user_id.as_deref())
    }

    /// Resolves the candidate identity key.
    ///
    /// First present of: `details.candidate_id`, `details.viewed_user_id`,
    /// else whatever [`application_key()`](Self::application_key) resolves.
    pub fn candidate_key(&self) -> Option<&str> {
        self.details
            .candidate_id
            .as_deref()
            .or(self.details.viewed_user_id.as_deref())
            .or_else(|| self.application_key())
    }

    /// Resolves the status carried by a status-change payload, lowercased.
    ///
    /// `details.new_status` wins over `details.status`. `None` when neither
    /// is a usable string.
    pub fn resolved_status(&self) -> Option<String> {
        self.details
            .new_status
            .as_deref()
            .or(self.details.status.as_deref())
            .map(|s| s.to_lowercase())
    }
}

/// The loosely structured `details` bag attached to a record.
///
/// Producers put whatever they have here; unknown fields are ignored and
/// unusable values degrade to absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetails {
    /// Application reference inside the bag.
    #[serde(default, alias = "application_id", deserialize_with = "de::opt_key")]
    pub application_id: Option<String>,

    /// Candidate reference inside the bag.
    #[serde(default, alias = "candidate_id", deserialize_with = "de::opt_key")]
    pub candidate_id: Option<String>,

    /// Viewed-profile reference set by profile-view producers.
    #[serde(default, alias = "viewed_user_id", deserialize_with = "de::opt_key")]
    pub viewed_user_id: Option<String>,

    /// Target status of a status-change event.
    #[serde(default, alias = "new_status", deserialize_with = "de::opt_text")]
    pub new_status: Option<String>,

    /// Older producers write `status` instead of `newStatus`.
    #[serde(default, deserialize_with = "de::opt_text")]
    pub status: Option<String>,

    /// Candidate contact sub-object, used for display labels.
    #[serde(default)]
    pub candidate: Option<CandidateInfo>,
}

impl ActivityDetails {
    /// Resolves a display name for the candidate sub-object.
    ///
    /// Precedence: `full_name` → `name` → `first_name last_name` (either
    /// half may be missing) → `email`. Display only — never used as an
    /// identity key.
    pub fn candidate_display_name(&self) -> Option<String> {
        let candidate = self.candidate.as_ref()?;

        if let Some(full) = &candidate.full_name {
            return Some(full.clone());
        }
        if let Some(name) = &candidate.name {
            return Some(name.clone());
        }
        match (&candidate.first_name, &candidate.last_name) {
            (Some(first), Some(last)) => return Some(format!("{} {}", first, last)),
            (Some(first), None) => return Some(first.clone()),
            (None, Some(last)) => return Some(last.clone()),
            (None, None) => {}
        }
        candidate.email.clone()
    }
}

/// Candidate contact details as embedded by some producers.
///
/// The name fields overlap; producers set whichever they have. See
/// [`ActivityDetails::candidate_display_name`] for the resolution order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateInfo {
    /// Given name.
    #[serde(default, alias = "firstName", deserialize_with = "de::opt_text")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default, alias = "lastName", deserialize_with = "de::opt_text")]
    pub last_name: Option<String>,

    /// Single-field name, set by producers that don't split it.
    #[serde(default, deserialize_with = "de::opt_text")]
    pub name: Option<String>,

    /// Contact email.
    #[serde(default, deserialize_with = "de::opt_text")]
    pub email: Option<String>,

    /// Pre-joined full name, set by newer producers.
    #[serde(default, alias = "fullName", deserialize_with = "de::opt_text")]
    pub full_name: Option<String>,
}
