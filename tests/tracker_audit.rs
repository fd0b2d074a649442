#![forbid(unsafe_code)]
use invigilation::{
    DutyAllocator, DutyTracker, QuotaTable, Rank, Schedule, Teacher, ViolationKind,
};
use std::collections::HashMap;

#[test]
fn missing_entries_count_as_zero() {
    let t = DutyTracker::new();
    assert_eq!(t.count("nobody", "2024-05-01"), 0);
    assert_eq!(t.total("nobody"), 0);
    assert!(!t.has_reached_daily_limit("nobody", "2024-05-01"));
    assert!(t.is_empty());
}

#[test]
fn limit_reached_after_two_duties() {
    let mut t = DutyTracker::new();
    t.increment("X", "d1");
    assert!(!t.has_reached_daily_limit("X", "d1"));
    t.increment("X", "d1");
    assert!(t.has_reached_daily_limit("X", "d1"));
    assert!(!t.has_reached_daily_limit("X", "d2"));
    assert!(!t.has_reached_daily_limit("Y", "d1"));
    t.increment("X", "d2");
    assert_eq!(t.total("X"), 3);
}

#[test]
fn quota_overrides_reject_unknown_titles() {
    let mut ok = HashMap::new();
    ok.insert("Professor & HOD".to_string(), 1);
    let table = QuotaTable::with_overrides(&ok).unwrap();
    assert_eq!(table.quota(Rank::ProfessorHod), 1);
    assert_eq!(table.quota(Rank::Professor), 2);
    assert_eq!(table.quota(Rank::Others), 5);

    let err = QuotaTable::from_json_str(r#"{"Lecturer": 3}"#).unwrap_err();
    assert!(err.to_string().contains("Lecturer"));
    assert!(QuotaTable::from_json_str("not json").is_err());
}

fn sample() -> (Vec<Teacher>, Schedule) {
    let roster = vec![
        Teacher::new("A", Rank::Professor, "CS101"),
        Teacher::new("B", Rank::AssociateProfessor, ""),
    ];
    let schedule = Schedule::from_rows(vec![
        vec!["Day", "Date", "Code", "09:00-12:00", "Code", "1:00-4:00"],
        vec!["Mon", "2024-05-01", "CS101", "DB", "CS102", "OS"],
        vec!["Tue", "2024-05-02", "CS201", "AI", "CS202", "ML"],
    ]);
    (roster, schedule)
}

#[test]
fn allocation_passes_audit() {
    let (roster, schedule) = sample();
    let alloc = DutyAllocator::default();
    let result = alloc.run(&roster, &schedule);
    assert!(!result.assignments.is_empty());
    assert!(alloc.audit(&roster, &result.assignments).is_empty());
}

#[test]
fn audit_flags_tampered_assignments() {
    let (roster, schedule) = sample();
    let alloc = DutyAllocator::default();
    let mut assignments = alloc.run(&roster, &schedule).assignments;

    // A enseigne CS101
    let first = assignments
        .iter_mut()
        .find(|a| a.course_code == "CS101")
        .unwrap();
    first.invigilator = "A".into();

    let mut ghost = assignments[0].clone();
    ghost.sr_no = 42;
    ghost.invigilator = "Ghost".into();
    assignments.push(ghost);

    let kinds: Vec<_> = alloc
        .audit(&roster, &assignments)
        .into_iter()
        .map(|v| v.kind)
        .collect();
    assert!(kinds.contains(&ViolationKind::CourseConflict));
    assert!(kinds.contains(&ViolationKind::SerialGap));
    assert!(kinds.contains(&ViolationKind::UnknownInvigilator));
}

#[test]
fn audit_flags_daily_and_quota_excess() {
    let (roster, schedule) = sample();
    let alloc = DutyAllocator::default();
    let mut assignments = alloc.run(&roster, &schedule).assignments;
    for a in assignments.iter_mut() {
        a.invigilator = "B".into();
        a.date = "2024-05-01".into();
    }
    let kinds: Vec<_> = alloc
        .audit(&roster, &assignments)
        .into_iter()
        .map(|v| v.kind)
        .collect();
    assert!(kinds.contains(&ViolationKind::DailyLimitExceeded));
    assert!(kinds.contains(&ViolationKind::QuotaExceeded));
}

#[test]
fn audit_accepts_namesakes_with_their_own_quotas() {
    let roster = vec![
        Teacher::new("X", Rank::Professor, ""),
        Teacher::new("X", Rank::Professor, "CS101"),
    ];
    let schedule = Schedule::from_rows(vec![
        vec!["Day", "Date", "Code", "09:00-12:00", "Code", "1:00-4:00"],
        vec!["Mon", "2024-05-01", "CS101", "DB", "CS102", "OS"],
        vec!["Tue", "2024-05-02", "CS201", "AI", "CS202", "ML"],
    ]);
    let alloc = DutyAllocator::default();
    let result = alloc.run(&roster, &schedule);
    assert_eq!(result.assignments.len(), 4);
    // CS101 a été pris par la première entrée, qui ne l'enseigne pas
    assert_eq!(result.assignments[0].course_code, "CS101");
    assert!(alloc.audit(&roster, &result.assignments).is_empty());

    // un 5e passage dépasse le quota cumulé (2 + 2)
    let mut extra = result.assignments.clone();
    let mut fifth = extra[0].clone();
    fifth.sr_no = 5;
    fifth.date = "2024-05-03".into();
    extra.push(fifth);
    let kinds: Vec<_> = alloc
        .audit(&roster, &extra)
        .into_iter()
        .map(|v| v.kind)
        .collect();
    assert_eq!(kinds, vec![ViolationKind::QuotaExceeded]);
}
