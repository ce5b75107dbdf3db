use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::TestEnv;

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new();

    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&env.db).exists());
}

#[test]
fn test_same_day_session() {
    let env = TestEnv::new();
    env.add("in", "2025-09-01 09:00");

    env.cmd()
        .args(["add", "out", "--at", "2025-09-01 17:00"])
        .assert()
        .success()
        .stdout(contains("Session from #1 closed: 08:00."));

    env.cmd()
        .args(["list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 (Mon)"))
        .stdout(contains("Worked: 08:00 | Expected: 08:00"))
        .stdout(contains("Total worked: 08:00 over 1 day(s)"));
}

#[test]
fn test_add_now_without_open_session_does_not_warn() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "in"])
        .assert()
        .success()
        .stdout(contains("Recorded IN for alice"))
        .stdout(contains("still open").not())
        .stderr(contains("still open").not());

    env.cmd()
        .args(["add", "out"])
        .assert()
        .success()
        .stdout(contains("Session from #1 closed: 00:00."));
}

#[test]
fn test_overnight_session_is_listed_under_check_in_date() {
    let env = TestEnv::new();
    env.add("in", "2025-09-01 22:00");
    env.add("out", "2025-09-02 02:00");

    env.cmd()
        .args(["list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 (Mon)"))
        .stdout(contains("02:00 (09-02)"))
        .stdout(contains("Worked: 04:00"))
        .stdout(contains("2025-09-02 (Tue)").not());
}

#[test]
fn test_lone_check_in_is_in_progress() {
    let env = TestEnv::new();
    env.add("in", "2025-09-03 08:30");

    env.cmd()
        .args(["list", "--period", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("in progress"))
        .stdout(contains("Open sessions: 1"));
}

#[test]
fn test_orphan_check_out_is_not_a_session() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "out", "--at", "2025-09-04 08:00"])
        .assert()
        .success()
        .stdout(contains("No open check-in"));

    env.cmd()
        .args(["list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("No sessions for alice"));
}

#[test]
fn test_first_open_check_in_takes_the_check_out() {
    let env = TestEnv::new();
    env.add("in", "2025-09-05 09:00");

    env.cmd()
        .args(["add", "in", "--at", "2025-09-05 10:00"])
        .assert()
        .success()
        .stdout(contains("1 earlier check-in(s) still open"));

    env.cmd()
        .args(["add", "out", "--at", "2025-09-05 11:00"])
        .assert()
        .success()
        .stdout(contains("Session from #1 closed: 02:00."));

    env.cmd()
        .args(["list", "--period", "2025-09-05"])
        .assert()
        .success()
        .stdout(contains("in progress"))
        .stdout(contains("Worked: 02:00"));
}

#[test]
fn test_subjects_are_kept_apart() {
    let env = TestEnv::new();
    env.add_as("alice", "in", "2025-09-01 09:00");
    env.add_as("alice", "out", "2025-09-01 12:00");
    env.add_as("bob", "in", "2025-09-01 10:00");
    env.add_as("bob", "out", "2025-09-01 18:00");

    env.cmd()
        .args(["list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("alice"))
        .stdout(contains("Worked: 03:00"))
        .stdout(contains("bob").not());

    env.cmd()
        .args(["list", "--period", "2025-09", "--all-subjects"])
        .assert()
        .success()
        .stdout(contains("bob"))
        .stdout(contains("Worked: 08:00"))
        .stdout(contains("Worked: 03:00"));
}

#[test]
fn test_display_timezone_moves_the_date() {
    let env = TestEnv::new();
    env.add("in", "2025-09-01T23:30:00Z");
    env.add("out", "2025-09-02T01:00:00Z");

    env.cmd()
        .args(["list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Worked: 01:30"));

    env.cmd_as("alice", "+02:00")
        .args(["list", "--period", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("2025-09-02 (Tue)"))
        .stdout(contains("01:30"))
        .stdout(contains("03:00"));
}

#[test]
fn test_list_entries_shows_raw_rows() {
    let env = TestEnv::new();
    env.cmd()
        .args([
            "add",
            "in",
            "--at",
            "2025-09-01 09:00",
            "--lat",
            "40.4168",
            "--lon",
            "-3.7038",
            "--address",
            "Puerta del Sol",
        ])
        .assert()
        .success();
    env.add("out", "2025-09-01 17:00");

    env.cmd()
        .args(["list", "--period", "2025-09", "--entries"])
        .assert()
        .success()
        .stdout(contains("2025-09-01 09:00:00"))
        .stdout(contains("Puerta del Sol"))
        .stdout(contains("OUT"));
}

#[test]
fn test_rejects_unknown_kind() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "lunch"])
        .assert()
        .failure()
        .stderr(contains("Invalid entry kind"));
}

#[test]
fn test_rejects_bad_timestamp() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "in", "--at", "tomorrow morning"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_rejects_latitude_without_longitude() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "in", "--lat", "40.0"])
        .assert()
        .failure();
}

#[test]
fn test_rejects_out_of_range_coordinates() {
    let env = TestEnv::new();

    env.cmd()
        .args(["add", "in", "--lat", "123.0", "--lon", "3.0"])
        .assert()
        .failure()
        .stderr(contains("Invalid location"));
}

#[test]
fn test_rejects_bad_timezone() {
    let env = TestEnv::new();

    env.cmd_as("alice", "Mars/Olympus")
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("Invalid timezone"));
}

#[test]
fn test_log_records_adds() {
    let env = TestEnv::new();
    env.add("in", "2025-09-01 09:00");

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("(alice)"))
        .stdout(contains("check_in at 2025-09-01 09:00"));
}

#[test]
fn test_config_print() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("timezone: local"))
        .stdout(contains("min_work_duration: 8h"));
}

#[test]
fn test_list_today_only_shows_today() {
    let env = TestEnv::new();
    env.add("in", "2020-01-06 09:00");
    env.add("out", "2020-01-06 17:00");
    env.cmd().args(["add", "in"]).assert().success();

    env.cmd()
        .args(["list", "--today"])
        .assert()
        .success()
        .stdout(contains("in progress"))
        .stdout(contains("2020-01-06").not());

    env.cmd()
        .args(["list", "--today", "--period", "2020-01"])
        .assert()
        .failure();
}
