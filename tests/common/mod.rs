#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Biweekly payroll and month-end rent on account 10, with two records already booked.
pub const PAYROLL_SNAPSHOT: &str = r#"{
  "schedules": [
    { "amount": "1500", "start_date": "2024-01-05", "account_id": 10,
      "frequency": "Bi-Weekly", "kind": "income", "notes": "payroll" },
    { "amount": "950.50", "start_date": "2024-01-31", "account_id": 10,
      "frequency": "monthly", "kind": "expense", "notes": "rent" }
  ],
  "actuals": [
    { "date": "2024-03-15", "account_id": 10, "type": "Income ", "amount": "1500" },
    { "date": "2024-02-29", "account_id": 10, "type": "expense" }
  ]
}"#;

/// Creates a unique directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Writes `contents` to `name` inside a fresh temp directory.
pub fn write_snapshot(name: &str, contents: &str) -> PathBuf {
    let path = temp_dir().join(name);
    std::fs::write(&path, contents).expect("write snapshot");
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
