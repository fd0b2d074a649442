#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_inputs(dir: &Path) {
    fs::write(
        dir.join("teachers.csv"),
        "Name,Rank,CoursesTaught\nX,Professor,CS101\nY,Assistant Professor,\n",
    )
    .unwrap();
    fs::write(
        dir.join("schedule.csv"),
        "Date Sheet,,,,,,,\n\
         Final Exam Spring 2024,,,,,,,\n\
         Day,Date,Code,09:00-12:00,Code,1:00-4:00,Sec.,Venue\n\
         Mon,2024-05-01,CS101,DB,CS102,OS,A,Room1\n",
    )
    .unwrap();
}

fn cli() -> Command {
    Command::cargo_bin("invigilation-cli").unwrap()
}

#[test]
fn assign_then_check_round_trip() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());
    let out = dir.path().join("assignments.csv");
    let json = dir.path().join("assignments.json");

    cli()
        .current_dir(dir.path())
        .args(["assign", "--teachers", "teachers.csv", "--schedule", "schedule.csv"])
        .args(["--out", "assignments.csv", "--out-json", "assignments.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X | Professor | 1/2 (under quota)"))
        .stdout(predicate::str::contains("Y | Assistant Professor | 2/4"))
        .stdout(predicate::str::contains("3 assignment(s) written"));

    let sheet = fs::read_to_string(&out).unwrap();
    assert!(sheet.starts_with("Invigilation List For Courses and Lab Final Exam Spring 2024\n\n"));
    assert!(sheet.contains("1,Mon,2024-05-01,CS102,OS,A,,Room1,1:00-4:00,X\nX\n"));

    cli()
        .current_dir(dir.path())
        .args(["check", "--teachers", "teachers.csv", "--assignments"])
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: no violations"));
}

#[test]
fn check_reports_violations_with_exit_code_2() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());
    fs::write(
        dir.path().join("bad.json"),
        r#"[{"SrNo":1,"Day":"Mon","Date":"2024-05-01","CourseCode":"CS101","CourseName":"DB",
            "Section":"A","Venue":"Room1","Time":"09:00-12:00","Invigilator":"X"}]"#,
    )
    .unwrap();

    cli()
        .current_dir(dir.path())
        .args(["check", "--teachers", "teachers.csv", "--assignments", "bad.json"])
        .args(["--report", "report.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("course_conflict"));

    let report = fs::read_to_string(dir.path().join("report.csv")).unwrap();
    assert!(report.starts_with("sr_no,invigilator,kind,detail"));
    assert!(report.contains("1,X,course_conflict,teaches CS101"));
}

#[test]
fn quotas_can_be_overridden() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("quotas.json"), r#"{"Professor": 7}"#).unwrap();

    cli()
        .current_dir(dir.path())
        .args(["--quotas", "quotas.json", "quotas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Professor: 7\n"))
        .stdout(predicate::str::contains("Professor & HOD: 2\n"))
        .stdout(predicate::str::contains("Others: 5\n"));
}

#[test]
fn unknown_rank_in_quota_file_is_fatal() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());
    fs::write(dir.path().join("quotas.json"), r#"{"Lecturer": 3}"#).unwrap();

    cli()
        .current_dir(dir.path())
        .args(["--quotas", "quotas.json", "assign", "--teachers", "teachers.csv"])
        .args(["--schedule", "schedule.csv", "--out", "out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rank in quota table: Lecturer"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn missing_schedule_writes_nothing() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path());

    cli()
        .current_dir(dir.path())
        .args(["assign", "--teachers", "teachers.csv", "--schedule", "absent.csv"])
        .args(["--out", "out.csv"])
        .assert()
        .failure();
    assert!(!dir.path().join("out.csv").exists());
}
