//! Activity-log ingestion module.
//!
//! An **activity record** is one entry of the portal's raw activity-log
//! stream: a recruiter viewed a resume, moved an application to a new
//! status, downloaded a profile. The stream is heterogeneous and only
//! partially trusted — producers disagree on field casing and value types.
//!
//! # Operations
//!
//! - [`parse_records(json)`](parse_records) — ingest the REST backend's
//!   JSON array, skipping malformed elements
//! - key resolution on [`ActivityRecord`]: `application_key()`,
//!   `candidate_key()`, `resolved_status()`
//!
//! # Constraints
//!
//! - A record is only dropped at parse time when its element is not an
//!   object or a typed field is unrecoverable; missing/blank fields
//!   degrade to absent
//! - The record's own log id is never used as an identity key

pub mod types;

pub use types::{ActivityDetails, ActivityRecord, CandidateInfo};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{Result, UsagePulseError};

/// Parses the activity-log endpoint's JSON array into records.
///
/// Individual malformed elements are skipped with a `debug!` log so one
/// bad producer cannot blank out the whole dashboard. The call fails only
/// when the payload itself is not a JSON array.
///
/// # Errors
///
/// Returns an error if the payload is not valid JSON or is valid JSON of
/// a different shape (object, string, ...).
///
/// # Example
///
/// ```rust
/// use usagepulse::parse_records;
///
/// let records = parse_records(r#"[
///     {"id": "l1", "userId": "r1", "activityType": "resume_view",
///      "details": {"candidateId": "c1"}}
/// ]"#)?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), usagepulse::UsagePulseError>(())
/// ```
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn parse_records(json: &str) -> Result<Vec<ActivityRecord>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(elements) = value else {
        return Err(UsagePulseError::payload_shape(format!(
            "expected an array of activity records, got {}",
            json_kind(&value)
        )));
    };

    let total = elements.len();
    let mut records = Vec::with_capacity(total);
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<ActivityRecord>(element) {
            Ok(record) => records.push(record),
            Err(err) => debug!(index, %err, "skipping malformed activity record"),
        }
    }

    debug!(
        parsed = records.len(),
        skipped = total - records.len(),
        "parsed activity records"
    );
    Ok(records)
}

/// Human-readable JSON value kind for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_array() {
        let records = parse_records("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_skips_malformed_elements() {
        let records = parse_records(
            r#"[
                {"id": "l1", "userId": "r1", "activityType": "resume_view"},
                "not a record",
                {"id": "l2", "userId": "r2", "activityType": "profile_view"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_deref(), Some("l1"));
        assert_eq!(records[1].id.as_deref(), Some("l2"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_records(r#"{"records": []}"#).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_records("{oops").unwrap_err();
        assert!(err.is_parse());
    }
}
