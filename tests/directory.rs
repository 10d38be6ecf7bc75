//! Integration tests for the actor-directory join.
//!
//! Covers parsing the usage-summary payload, label fallback, and joining
//! display metadata onto an aggregated report for the usage table.

use usagepulse::{
    parse_records, ActorDirectory, ActorId, ActorProfile, RollupAggregator, RollupConfig,
    RollupScope,
};

fn report_for(json: &str) -> usagepulse::RollupReport {
    let records = parse_records(json).unwrap();
    RollupAggregator::new(RollupConfig::default())
        .unwrap()
        .aggregate(&records, &RollupScope::Company)
}

#[test]
fn test_join_produces_labeled_sorted_rows() {
    let report = report_for(
        r#"[
            {"userId": "r1", "activityType": "resume_view", "details": {"candidateId": "c1"}},
            {"userId": "r2", "activityType": "resume_view", "details": {"candidateId": "c1"}},
            {"userId": "r2", "activityType": "resume_view", "details": {"candidateId": "c2"}},
            {"userId": "r2", "activityType": "application_hired", "details": {"applicationId": "a1"}}
        ]"#,
    );

    let directory = ActorDirectory::parse(
        r#"[
            {"userId": "r1", "name": "Dana Scully", "email": "dana@agency.example"},
            {"userId": "r2", "name": "Fox Mulder"}
        ]"#,
    )
    .unwrap();

    let rows = directory.join(&report);
    assert_eq!(rows.len(), 2);

    // r2 accessed two candidates, leads the table.
    assert_eq!(rows[0].label, "Fox Mulder");
    assert_eq!(rows[0].counts.accessed, 2);
    assert_eq!(rows[0].counts.hired, 1);

    assert_eq!(rows[1].label, "Dana Scully");
    assert_eq!(rows[1].email.as_deref(), Some("dana@agency.example"));
    assert_eq!(rows[1].counts.accessed, 1);
}

#[test]
fn test_join_with_empty_directory_uses_raw_ids() {
    let report = report_for(
        r#"[{"userId": "r7", "activityType": "profile_view", "details": {"candidateId": "c1"}}]"#,
    );

    let rows = ActorDirectory::default().join(&report);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "r7");
    assert_eq!(rows[0].actor_id, ActorId::new("r7"));
}

#[test]
fn test_email_only_profile_labels_by_email() {
    let directory = ActorDirectory::new([ActorProfile::new("r1").with_email("lee@x.example")]);
    assert_eq!(directory.label(&ActorId::new("r1")), "lee@x.example");
}

#[test]
fn test_tie_break_is_stable_by_actor_id() {
    let report = report_for(
        r#"[
            {"userId": "b", "activityType": "resume_view", "details": {"candidateId": "c1"}},
            {"userId": "a", "activityType": "resume_view", "details": {"candidateId": "c2"}}
        ]"#,
    );

    let rows = ActorDirectory::default().join(&report);
    assert_eq!(rows[0].actor_id, ActorId::new("a"));
    assert_eq!(rows[1].actor_id, ActorId::new("b"));
}

#[test]
fn test_numeric_profile_ids_normalize() {
    let directory = ActorDirectory::parse(r#"[{"userId": 42, "name": "Numeric"}]"#).unwrap();
    assert_eq!(directory.label(&ActorId::new("42")), "Numeric");
}
