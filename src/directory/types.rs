//! Data types for the actor directory.

use serde::{Deserialize, Serialize};

use crate::rollup::RollupCounts;
use crate::types::ActorId;

/// Display metadata for one recruiter, from the usage-summary endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    /// The recruiter this profile describes.
    pub actor_id: ActorId,

    /// Human-readable name, when the endpoint has one.
    pub name: Option<String>,

    /// Contact email, when the endpoint has one.
    pub email: Option<String>,
}

impl ActorProfile {
    /// Creates a profile with no display metadata.
    pub fn new(actor_id: impl Into<ActorId>) -> Self {
        Self {
            actor_id: actor_id.into(),
            name: None,
            email: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// One row of the usage table: a recruiter's label and rollup counts.
///
/// Produced by [`ActorDirectory::join`](crate::ActorDirectory::join),
/// already sorted for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRollupRow {
    /// The recruiter this row describes.
    pub actor_id: ActorId,

    /// Display label: name, else email, else the raw actor id.
    pub label: String,

    /// Contact email, when known.
    pub email: Option<String>,

    /// The recruiter's deduplicated counts.
    pub counts: RollupCounts,
}
