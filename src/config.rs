//! Configuration types for the rollup aggregator.
//!
//! The [`RollupConfig`] struct controls how raw activity records are
//! classified into the three rollup metrics:
//! - which activity-type strings count as a candidate **access**
//! - which count as a **hire**
//! - which count as a **shortlist**
//!
//! The defaults carry the canonical vocabularies observed in production
//! log streams. The two dashboard call sites (admin company-wide, employer
//! self view) historically drifted apart in which literals each recognized;
//! keeping the vocabularies in configuration lets each call site be
//! adjusted without code changes.
//!
//! # Example
//! ```rust
//! use usagepulse::RollupConfig;
//!
//! // Use the canonical vocabularies
//! let config = RollupConfig::default();
//!
//! // Extend the access vocabulary for a tenant with custom event names
//! let mut config = RollupConfig::default();
//! config.access_types.insert("talent_pool_view".to_string());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;

/// Activity types that count as a candidate access.
const ACCESS_TYPES: &[&str] = &[
    "profile_viewed",
    "resume_view",
    "resume_downloaded",
    "profile_visits",
    "candidate_view",
    "profile_view",
    "candidate_profile_view",
    "application_viewed",
    "application_reviewed",
    "view_resume",
    "view_profile",
];

/// Activity types that count as a hire.
const HIRED_TYPES: &[&str] = &["application_hired", "candidate_hired", "hired"];

/// Activity types that count as a shortlist.
///
/// `application_status_changed` is deliberately present: a status-change
/// record qualifies here, but only counts when its resolved status is
/// exactly "shortlisted" (see the aggregator's exclusion rule).
const SHORTLISTED_TYPES: &[&str] = &[
    "application_shortlisted",
    "candidate_shortlisted",
    "requirement_shortlist",
    "application_status_changed",
    "shortlisted",
];

/// Classification vocabularies for the rollup aggregator.
///
/// All matching is case-insensitive: activity types are lowercased before
/// lookup, so every entry here must be lowercase. Use struct update syntax
/// to override specific vocabularies:
///
/// ```rust
/// use std::collections::HashSet;
/// use usagepulse::RollupConfig;
///
/// let config = RollupConfig {
///     hired_types: HashSet::from(["offer_accepted".to_string()]),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct RollupConfig {
    /// Activity types counted as a candidate access.
    pub access_types: HashSet<String>,

    /// Activity types counted as a hire.
    ///
    /// A status-change record whose resolved status is "hired" counts
    /// regardless of whether its activity type appears here.
    pub hired_types: HashSet<String>,

    /// Activity types counted as a shortlist.
    ///
    /// A status-change record whose resolved status is "shortlisted"
    /// counts regardless of whether its activity type appears here.
    pub shortlisted_types: HashSet<String>,
}

impl Default for RollupConfig {
    fn default() -> Self {
        fn set(entries: &[&str]) -> HashSet<String> {
            entries.iter().map(|s| s.to_string()).collect()
        }

        Self {
            access_types: set(ACCESS_TYPES),
            hired_types: set(HIRED_TYPES),
            shortlisted_types: set(SHORTLISTED_TYPES),
        }
    }
}

impl RollupConfig {
    /// Creates a RollupConfig with the canonical vocabularies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// Called automatically by `RollupAggregator::new()`. You can also call
    /// this explicitly to check a configuration up front.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - any vocabulary is empty
    /// - any vocabulary entry is empty or not lowercase
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_vocabulary("access_types", &self.access_types)?;
        validate_vocabulary("hired_types", &self.hired_types)?;
        validate_vocabulary("shortlisted_types", &self.shortlisted_types)?;
        Ok(())
    }
}

fn validate_vocabulary(field: &str, entries: &HashSet<String>) -> Result<(), ValidationError> {
    if entries.is_empty() {
        return Err(ValidationError::required_field(field));
    }

    for entry in entries {
        if entry.is_empty() {
            return Err(ValidationError::invalid_field(
                field,
                "contains an empty entry",
            ));
        }

        // Records are lowercased before lookup; a mixed-case entry would
        // silently never match.
        if entry.chars().any(|c| c.is_uppercase()) {
            return Err(ValidationError::invalid_field(
                field,
                format!("entry '{}' must be lowercase", entry),
            ));
        }
    }

    Ok(())
}
