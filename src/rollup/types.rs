//! Output types for the rollup aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::ActorId;

/// Deduplicated counts of the three rollup metrics.
///
/// Every count is the size of a set of unique identity keys, so the
/// values are always non-negative and never double-count a candidate or
/// application for the same owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupCounts {
    /// Distinct candidates touched via a recognized access activity.
    pub accessed: u64,

    /// Distinct applications transitioned to hired.
    pub hired: u64,

    /// Distinct applications resolved to shortlisted.
    pub shortlisted: u64,
}

impl RollupCounts {
    /// Returns true if all three counts are zero.
    ///
    /// The view layer uses this to render a "no activity" state instead
    /// of an empty table.
    pub fn is_zero(&self) -> bool {
        self.accessed == 0 && self.hired == 0 && self.shortlisted == 0
    }

    /// Sum of the three metrics, for sorting and quick summaries.
    pub fn total(&self) -> u64 {
        self.accessed + self.hired + self.shortlisted
    }
}

/// The result of one aggregation run.
///
/// `per_actor` holds the breakdown for every actor in scope (zero-count
/// actors included, so tables render complete). `aggregate` holds the
/// company-wide union counts: a candidate accessed by two recruiters
/// counts once here but once *per recruiter* in `per_actor`, which is why
/// `aggregate.accessed <= sum(per_actor[*].accessed)` always holds (and
/// analogously for the other two metrics).
///
/// A `BTreeMap` keys the breakdown so iteration order is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupReport {
    /// Per-recruiter breakdown, keyed by actor id.
    pub per_actor: BTreeMap<ActorId, RollupCounts>,

    /// Company-wide union counts across all actors in scope.
    pub aggregate: RollupCounts,
}

impl RollupReport {
    /// Returns the counts for one actor, zero when the actor is unknown.
    pub fn actor_counts(&self, actor: &ActorId) -> RollupCounts {
        self.per_actor.get(actor).copied().unwrap_or_default()
    }

    /// Returns true if no actor produced any qualifying event.
    pub fn is_zero(&self) -> bool {
        self.aggregate.is_zero() && self.per_actor.values().all(RollupCounts::is_zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_default_is_zero() {
        let counts = RollupCounts::default();
        assert!(counts.is_zero());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_counts_total() {
        let counts = RollupCounts {
            accessed: 3,
            hired: 1,
            shortlisted: 2,
        };
        assert!(!counts.is_zero());
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_report_actor_counts_unknown_actor() {
        let report = RollupReport::default();
        let counts = report.actor_counts(&ActorId::new("nobody"));
        assert!(counts.is_zero());
    }

    #[test]
    fn test_report_serializes_actor_keys_as_strings() {
        let mut report = RollupReport::default();
        report.per_actor.insert(
            ActorId::new("r1"),
            RollupCounts {
                accessed: 2,
                hired: 0,
                shortlisted: 1,
            },
        );
        report.aggregate.accessed = 2;
        report.aggregate.shortlisted = 1;

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["perActor"]["r1"]["accessed"], 2);
        assert_eq!(json["aggregate"]["shortlisted"], 1);
    }
}
