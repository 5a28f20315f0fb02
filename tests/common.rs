#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use gapinspect::{EmploymentRecord, Resume};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fixed "today" used by tests that involve ongoing jobs.
pub const AS_OF: &str = "2024-06-01";

/// Resume whose coverage is 75.2%: one overlap of 92 days, one closed gap
/// of 181 days and a trailing open gap.
pub const MIXED_RESUME_JSON: &str = r#"{
  "name": "Jane Doe",
  "employment": {
    "history": [
      { "employer": "Acme", "position": "Engineer", "start": "2020-01", "end": "2021-01" },
      { "employer": "Side Gig", "start": "2020-06", "end": "2020-09" },
      { "employer": "Beta", "start": "2021-07", "end": "2022-01" }
    ]
  }
}"#;

pub fn gi() -> Command {
    cargo_bin_cmd!("gapinspect")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
}

pub fn as_of() -> NaiveDate {
    d(2024, 6, 1)
}

pub fn job(start: &str, end: Option<&str>) -> EmploymentRecord {
    EmploymentRecord::new(Some(start), end)
}

pub fn resume(jobs: Vec<EmploymentRecord>) -> Resume {
    Resume::with_history(jobs)
}

/// Create a unique temp path and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("gapinspect_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a resume fixture into the temp dir and return its path
pub fn write_resume(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write resume fixture");
    p
}

/// Config path that does not exist, so defaults are used
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}
