#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

/// Isolated config home + database for one test.
pub struct TestEnv {
    pub home: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp home");
        let db = home
            .path()
            .join("fichalia_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { home, db }
    }

    /// Binary bound to this env, acting as `subject` in `tz`.
    pub fn cmd_as(&self, subject: &str, tz: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("fichalia");
        cmd.env("FICHALIA_HOME", self.home.path())
            .env_remove("FICHALIA_LOG")
            .args(["--db", &self.db, "--subject", subject, "--tz", tz]);
        cmd
    }

    /// alice, UTC
    pub fn cmd(&self) -> Command {
        self.cmd_as("alice", "UTC")
    }

    pub fn add(&self, kind: &str, at: &str) {
        self.cmd().args(["add", kind, "--at", at]).assert().success();
    }

    pub fn add_as(&self, subject: &str, kind: &str, at: &str) {
        self.cmd_as(subject, "UTC")
            .args(["add", kind, "--at", at])
            .assert()
            .success();
    }

    /// Absolute path of an output file inside the temp home.
    pub fn out(&self, name: &str) -> String {
        self.home.path().join(name).to_string_lossy().to_string()
    }
}

/// A full day plus an overnight shift, both for alice.
pub fn seed_two_sessions(env: &TestEnv) {
    env.add("in", "2025-09-01 09:00");
    env.add("out", "2025-09-01 17:00");
    env.add("in", "2025-09-15 22:00");
    env.add("out", "2025-09-16 02:00");
}
