#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rshiftchart::models::shift::{BreakInterval, ShiftParameters};
use std::path::Path;
use tempfile::TempDir;

/// Binary under test, isolated from the user's real config directory.
pub fn rsc(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rshiftchart");
    cmd.env("RSHIFTCHART_HOME", home);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Scratch directory holding config + database for one test.
pub struct TestEnv {
    pub dir: TempDir,
    pub db_path: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db_path = dir
            .path()
            .join("rshiftchart.sqlite")
            .to_string_lossy()
            .to_string();
        Self { dir, db_path }
    }

    pub fn cmd(&self) -> Command {
        let mut c = rsc(self.dir.path());
        c.args(["--db", &self.db_path]);
        c
    }

    pub fn out_file(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().to_string()
    }

    /// Initialize DB and record a small dataset on 2026-03-10.
    pub fn init_with_data(&self) {
        self.cmd().args(["--test", "init"]).assert().success();

        self.cmd()
            .args(["add", "2026-03-10", "08:12", "--count", "3"])
            .assert()
            .success();
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn ts(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hh, mm, 0).expect("valid time")
}

pub fn params(start: &str, end: &str, target: u32, cycle: f64, breaks: Vec<BreakInterval>) -> ShiftParameters {
    ShiftParameters {
        selected_date: date(2026, 3, 10),
        shift: "A".to_string(),
        target_parts: target,
        cycle_time_seconds: cycle,
        start_time: start.to_string(),
        end_time: end.to_string(),
        breaks,
    }
}
