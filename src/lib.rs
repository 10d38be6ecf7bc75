//! # usage-pulse
//!
//! Activity rollup aggregation for recruiter usage analytics.
//!
//! The job portal's dashboards ("Usage Pulse" for admins, "Analytics" for
//! employers) show how many distinct candidates each recruiter accessed,
//! hired, and shortlisted. This crate is the pure in-process reduction
//! behind those numbers: it consumes the raw activity-log stream the REST
//! backend returns and produces deduplicated per-recruiter and
//! company-wide counts.
//!
//! ## Quick Start
//!
//! ```rust
//! use usagepulse::{
//!     parse_records, RollupAggregator, RollupConfig, RollupScope,
//! };
//!
//! # fn main() -> usagepulse::Result<()> {
//! // Records as fetched from the activity-log endpoint
//! let records = parse_records(r#"[
//!     {"id": "l1", "userId": "r1", "activityType": "resume_view",
//!      "details": {"candidateId": "c1"}},
//!     {"id": "l2", "userId": "r1", "activityType": "profile_view",
//!      "details": {"candidateId": "c1"}}
//! ]"#)?;
//!
//! let aggregator = RollupAggregator::new(RollupConfig::default())?;
//! let report = aggregator.aggregate(&records, &RollupScope::Company);
//!
//! // Two view events, one unique candidate
//! assert_eq!(report.aggregate.accessed, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Key Concepts
//!
//! ### Activity record
//!
//! One entry of the raw log stream: an actor (recruiter), a free-form
//! activity type, and a loosely structured `details` bag that may carry
//! candidate/application references and status-change payloads. See
//! [`ActivityRecord`] for the key-resolution rules.
//!
//! ### Rollup
//!
//! The reduction itself: set-based deduplication per `(actor, key)` pair
//! plus company-wide unions. A candidate accessed by two recruiters counts
//! once per recruiter in the breakdown but once in the aggregate. See
//! [`RollupAggregator`].
//!
//! ### Scope
//!
//! [`RollupScope::Company`] breaks down every actor in the stream (the
//! admin view); [`RollupScope::Actor`] restricts the computation to one
//! actor's records (the employer self view).
//!
//! ## Purity & Thread Safety
//!
//! Aggregation is pure and synchronous: no I/O, no shared mutable state.
//! Each run builds its own deduplication sets, so one [`RollupAggregator`]
//! can serve concurrent runs (one per company, say) through `&self`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod error;
mod types;

// Domain modules
mod activity;
mod directory;
mod rollup;

// ============================================================================
// Public API re-exports
// ============================================================================

// Record ingestion
pub use activity::{parse_records, ActivityDetails, ActivityRecord, CandidateInfo};

// Configuration
pub use config::RollupConfig;

// Error handling
pub use error::{Result, UsagePulseError, ValidationError};

// The aggregator and its output
pub use rollup::{RollupAggregator, RollupCounts, RollupReport, RollupScope};

// Display-metadata join
pub use directory::{ActorDirectory, ActorProfile, ActorRollupRow};

// Core types
pub use types::{ActorId, Timestamp};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Convenient imports for common usage.
///
/// ```rust
/// use usagepulse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::activity::{parse_records, ActivityRecord};
    pub use crate::config::RollupConfig;
    pub use crate::error::{Result, UsagePulseError};
    pub use crate::rollup::{RollupAggregator, RollupCounts, RollupReport, RollupScope};
    pub use crate::types::{ActorId, Timestamp};
}
