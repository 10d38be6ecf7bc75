//! Activity rollup aggregation.
//!
//! The **rollup** reduces a raw activity-log stream into deduplicated
//! counts of three business events — candidates *accessed*, applications
//! *hired*, applications *shortlisted* — per recruiter and company-wide.
//!
//! # Operations
//!
//! - [`RollupAggregator::new(config)`](RollupAggregator::new)
//! - [`RollupAggregator::aggregate(records, scope)`](RollupAggregator::aggregate)
//!
//! # Classification
//!
//! Per record, in order:
//!
//! 1. lowercase the activity type
//! 2. resolve the candidate key (see [`ActivityRecord::candidate_key`])
//! 3. resolve the application key (see [`ActivityRecord::application_key`])
//! 4. resolve the status payload (see [`ActivityRecord::resolved_status`])
//! 5. **accessed** — type in the access vocabulary, candidate key present,
//!    first sighting of `(actor, candidate key)`
//! 6. **hired** — type in the hired vocabulary *or* status "hired",
//!    application key present, first sighting of `(actor, application key)`
//! 7. **shortlisted** — type in the shortlisted vocabulary *or* status
//!    "shortlisted", application key present, first sighting of the pair;
//!    a record whose resolved status is present but not "shortlisted" is
//!    skipped without marking the pair seen
//!
//! # Constraints
//!
//! - Pure and synchronous: no I/O, no shared state between runs. Separate
//!   invocations (one per company, say) can run on separate threads freely.
//! - A record with no resolvable key is not counted for that metric; the
//!   record's own log id is never a fallback key.
//! - Empty input produces an all-zero report, never an error.

pub mod types;

pub use types::{RollupCounts, RollupReport};

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, instrument, trace};

use crate::activity::ActivityRecord;
use crate::config::RollupConfig;
use crate::error::{Result, UsagePulseError};
use crate::types::ActorId;

/// Which population an aggregation run covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RollupScope {
    /// Restrict the whole computation to one actor's records.
    ///
    /// This is the employer "self" view: only the viewer's own activity
    /// is considered, and the viewer always appears in the breakdown,
    /// zero-count when idle.
    Actor(ActorId),

    /// Break down every actor appearing in the records.
    ///
    /// This is the admin company-wide view. Every attributable actor gets
    /// a breakdown entry, zero-count actors included.
    Company,
}

impl fmt::Display for RollupScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actor(actor) => write!(f, "actor:{}", actor),
            Self::Company => write!(f, "company"),
        }
    }
}

/// The rollup aggregator: a validated configuration plus the
/// classification algorithm.
///
/// Construction validates the vocabularies once; [`aggregate`](Self::aggregate)
/// is then infallible. The aggregator holds no per-run state — every call
/// builds its own deduplication sets, so a single instance can serve many
/// runs (and many threads via `&self`).
#[derive(Clone, Debug)]
pub struct RollupAggregator {
    config: RollupConfig,
}

impl RollupAggregator {
    /// Creates an aggregator from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation (empty or
    /// non-lowercase vocabularies; see [`RollupConfig::validate`]).
    pub fn new(config: RollupConfig) -> Result<Self> {
        config.validate().map_err(UsagePulseError::from)?;
        Ok(Self { config })
    }

    /// Returns a reference to the aggregator's configuration.
    #[inline]
    pub fn config(&self) -> &RollupConfig {
        &self.config
    }

    /// Reduces a record stream into per-actor and aggregate rollup counts.
    ///
    /// Deduplication is set-based, so the result is independent of record
    /// order and of how many times a qualifying record repeats. The
    /// aggregate is the union of unique keys across all in-scope actors,
    /// never the sum of per-actor counts.
    ///
    /// Records without a resolvable actor are skipped entirely; records
    /// without the key a metric needs are skipped for that metric only.
    #[instrument(skip_all, fields(records = records.len(), scope = %scope))]
    pub fn aggregate(&self, records: &[ActivityRecord], scope: &RollupScope) -> RollupReport {
        let mut report = RollupReport::default();
        let mut accessed = Dedup::default();
        let mut hired = Dedup::default();
        let mut shortlisted = Dedup::default();

        // The self view renders a "no activity" state off a zeroed row,
        // so the requested actor is present even with no records.
        if let RollupScope::Actor(actor) = scope {
            report.per_actor.entry(actor.clone()).or_default();
        }

        for record in records {
            let Some(actor) = record.user_id.as_ref() else {
                trace!(
                    id = record.id.as_deref().unwrap_or("<none>"),
                    "record has no actor, skipping"
                );
                continue;
            };
            if let RollupScope::Actor(only) = scope {
                if actor != only {
                    continue;
                }
            }

            let counts = report.per_actor.entry(actor.clone()).or_default();
            let activity_type = record.activity_type_lower();
            let status = record.resolved_status();

            // Accessed: unique candidates touched via an access-typed event.
            if self.config.access_types.contains(&activity_type) {
                if let Some(key) = record.candidate_key() {
                    let seen = accessed.observe(actor, key);
                    if seen.new_for_actor {
                        counts.accessed += 1;
                    }
                    if seen.new_for_company {
                        report.aggregate.accessed += 1;
                    }
                } else {
                    trace!(%actor, %activity_type, "access record with no candidate key");
                }
            }

            // Hired: direct hire types, or a status change resolving to "hired".
            if self.config.hired_types.contains(&activity_type)
                || status.as_deref() == Some("hired")
            {
                if let Some(key) = record.application_key() {
                    let seen = hired.observe(actor, key);
                    if seen.new_for_actor {
                        counts.hired += 1;
                    }
                    if seen.new_for_company {
                        report.aggregate.hired += 1;
                    }
                } else {
                    trace!(%actor, %activity_type, "hire record with no application key");
                }
            }

            // Shortlisted: same dual path, with the exclusion rule — a
            // status-change record that resolved to anything other than
            // "shortlisted" (e.g. "under_review") must not count, and must
            // not block a later genuine shortlist of the same application.
            if self.config.shortlisted_types.contains(&activity_type)
                || status.as_deref() == Some("shortlisted")
            {
                let resolved_elsewhere = status.as_deref().is_some_and(|s| s != "shortlisted");
                if resolved_elsewhere {
                    trace!(
                        %actor,
                        %activity_type,
                        status = status.as_deref().unwrap_or_default(),
                        "status change resolved away from shortlist"
                    );
                } else if let Some(key) = record.application_key() {
                    let seen = shortlisted.observe(actor, key);
                    if seen.new_for_actor {
                        counts.shortlisted += 1;
                    }
                    if seen.new_for_company {
                        report.aggregate.shortlisted += 1;
                    }
                } else {
                    trace!(%actor, %activity_type, "shortlist record with no application key");
                }
            }
        }

        debug!(
            actors = report.per_actor.len(),
            accessed = report.aggregate.accessed,
            hired = report.aggregate.hired,
            shortlisted = report.aggregate.shortlisted,
            "rollup complete"
        );
        report
    }
}

impl Default for RollupAggregator {
    /// An aggregator with the canonical vocabularies.
    fn default() -> Self {
        Self {
            // The default configuration is known-valid.
            config: RollupConfig::default(),
        }
    }
}

/// Dedup sets for one metric: per-(actor, key) and company-wide.
#[derive(Default)]
struct Dedup {
    by_actor: HashSet<(ActorId, String)>,
    company: HashSet<String>,
}

/// Whether an observation was the first of its kind at each level.
struct Observation {
    new_for_actor: bool,
    new_for_company: bool,
}

impl Dedup {
    fn observe(&mut self, actor: &ActorId, key: &str) -> Observation {
        Observation {
            new_for_actor: self.by_actor.insert((actor.clone(), key.to_string())),
            new_for_company: self.company.insert(key.to_string()),
        }
    }
}
