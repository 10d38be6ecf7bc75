//! Actor directory: display names and emails for recruiters.
//!
//! The usage-summary endpoint supplies recruiter display metadata
//! separately from the activity log. This module joins that metadata onto
//! a [`RollupReport`] to produce the labeled, sorted rows the usage table
//! renders.
//!
//! # Operations
//!
//! - [`ActorDirectory::parse(json)`](ActorDirectory::parse) — ingest the
//!   endpoint payload, skipping entries with no usable actor id
//! - [`ActorDirectory::label(actor)`](ActorDirectory::label) — display
//!   label with fallback: name → email → raw id
//! - [`ActorDirectory::join(report)`](ActorDirectory::join) — labeled rows
//!   sorted by accessed count descending

pub mod types;

pub use types::{ActorProfile, ActorRollupRow};

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::activity::types::de;
use crate::error::{Result, UsagePulseError};
use crate::rollup::RollupReport;
use crate::types::ActorId;

/// Wire shape of one usage-summary entry. Tolerant like the activity
/// payloads: ids may be numbers, blanks are absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfilePayload {
    #[serde(
        default,
        alias = "_id",
        alias = "id",
        alias = "user_id",
        deserialize_with = "de::opt_key"
    )]
    user_id: Option<String>,

    #[serde(
        default,
        alias = "fullName",
        alias = "full_name",
        alias = "displayName",
        deserialize_with = "de::opt_text"
    )]
    name: Option<String>,

    #[serde(default, deserialize_with = "de::opt_text")]
    email: Option<String>,
}

/// Lookup of recruiter display metadata by actor id.
#[derive(Clone, Debug, Default)]
pub struct ActorDirectory {
    profiles: HashMap<ActorId, ActorProfile>,
}

impl ActorDirectory {
    /// Builds a directory from already-constructed profiles.
    ///
    /// Later profiles with the same actor id replace earlier ones.
    pub fn new(profiles: impl IntoIterator<Item = ActorProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|p| (p.actor_id.clone(), p))
                .collect(),
        }
    }

    /// Parses the usage-summary endpoint's JSON array.
    ///
    /// Entries without a usable actor id are skipped with a `debug!` log,
    /// mirroring [`parse_records`](crate::parse_records).
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid JSON or not an array.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(elements) = value else {
            return Err(UsagePulseError::payload_shape(
                "expected an array of actor profiles".to_string(),
            ));
        };

        let mut profiles = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            match serde_json::from_value::<ProfilePayload>(element) {
                Ok(ProfilePayload {
                    user_id: Some(id),
                    name,
                    email,
                }) => profiles.push(ActorProfile {
                    actor_id: ActorId::new(id),
                    name,
                    email,
                }),
                Ok(_) => debug!(index, "skipping profile with no actor id"),
                Err(err) => debug!(index, %err, "skipping malformed profile"),
            }
        }

        debug!(profiles = profiles.len(), "parsed actor directory");
        Ok(Self::new(profiles))
    }

    /// Returns the profile for one actor, if known.
    pub fn get(&self, actor: &ActorId) -> Option<&ActorProfile> {
        self.profiles.get(actor)
    }

    /// Number of known profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if no profiles are known.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Display label for one actor: name → email → raw id.
    ///
    /// Unknown actors label as their raw id, so the usage table never
    /// loses a row to a stale directory.
    pub fn label(&self, actor: &ActorId) -> String {
        match self.get(actor) {
            Some(profile) => profile
                .name
                .clone()
                .or_else(|| profile.email.clone())
                .unwrap_or_else(|| actor.as_str().to_string()),
            None => actor.as_str().to_string(),
        }
    }

    /// Joins display metadata onto a report's per-actor breakdown.
    ///
    /// Rows sort by `accessed` descending (busiest recruiters first),
    /// ties broken by actor id for a stable order.
    pub fn join(&self, report: &RollupReport) -> Vec<ActorRollupRow> {
        let mut rows: Vec<ActorRollupRow> = report
            .per_actor
            .iter()
            .map(|(actor, counts)| ActorRollupRow {
                actor_id: actor.clone(),
                label: self.label(actor),
                email: self.get(actor).and_then(|p| p.email.clone()),
                counts: *counts,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.counts
                .accessed
                .cmp(&a.counts.accessed)
                .then_with(|| a.actor_id.cmp(&b.actor_id))
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rollup::RollupCounts;

    fn directory() -> ActorDirectory {
        ActorDirectory::new([
            ActorProfile::new("r1").with_name("Dana").with_email("dana@x.example"),
            ActorProfile::new("r2").with_email("lee@x.example"),
        ])
    }

    #[test]
    fn test_label_fallback_chain() {
        let dir = directory();
        assert_eq!(dir.label(&ActorId::new("r1")), "Dana");
        assert_eq!(dir.label(&ActorId::new("r2")), "lee@x.example");
        assert_eq!(dir.label(&ActorId::new("r3")), "r3");
    }

    #[test]
    fn test_parse_skips_entries_without_id() {
        let dir = ActorDirectory::parse(
            r#"[
                {"userId": "r1", "name": "Dana"},
                {"name": "No Id"},
                {"userId": "r2", "email": "lee@x.example"}
            ]"#,
        )
        .unwrap();
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.label(&ActorId::new("r1")), "Dana");
    }

    #[test]
    fn test_parse_accepts_mongo_style_ids() {
        let dir = ActorDirectory::parse(r#"[{"_id": "66b2f0a1c4", "fullName": "Lee Park"}]"#)
            .unwrap();
        assert_eq!(dir.label(&ActorId::new("66b2f0a1c4")), "Lee Park");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = ActorDirectory::parse(r#"{"profiles": []}"#).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_join_sorts_by_accessed_desc() {
        let mut report = RollupReport::default();
        report.per_actor.insert(
            ActorId::new("r1"),
            RollupCounts {
                accessed: 1,
                ..Default::default()
            },
        );
        report.per_actor.insert(
            ActorId::new("r2"),
            RollupCounts {
                accessed: 5,
                ..Default::default()
            },
        );

        let rows = directory().join(&report);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].actor_id.as_str(), "r2");
        assert_eq!(rows[1].actor_id.as_str(), "r1");
    }

    #[test]
    fn test_join_keeps_unknown_actors() {
        let mut report = RollupReport::default();
        report
            .per_actor
            .insert(ActorId::new("ghost"), RollupCounts::default());

        let rows = directory().join(&report);
        assert_eq!(rows[0].label, "ghost");
        assert_eq!(rows[0].email, None);
    }
}
