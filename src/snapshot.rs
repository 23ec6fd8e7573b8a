//! JSON snapshot files pairing recurring schedules with the actual transactions
//! recorded so far.
//!
//! ```json
//! {
//!   "schedules": [
//!     { "amount": "1500", "start_date": "2024-01-05", "account_id": 10,
//!       "frequency": "biweekly", "kind": "income", "notes": "payroll" }
//!   ],
//!   "actuals": [
//!     { "date": "2024-01-19", "account_id": 10, "type": "income" }
//!   ]
//! }
//! ```

use std::{fs, path::Path};

use fintrack_core::{ProjectionError, ProjectionService};
use fintrack_domain::{ActualTransaction, DateWindow, ProjectedEntry, RecurringSchedule};
use serde::{Deserialize, Serialize};

use crate::errors::SnapshotError;

/// Schedules and a consistent snapshot of actual transactions, as read from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastSnapshot {
    #[serde(default)]
    pub schedules: Vec<RecurringSchedule>,
    #[serde(default)]
    pub actuals: Vec<ActualTransaction>,
}

impl ForecastSnapshot {
    /// Projects every schedule over `window`; the result is concatenated in schedule order.
    pub fn project(&self, window: DateWindow) -> Result<Vec<ProjectedEntry>, ProjectionError> {
        ProjectionService::project_many(&self.schedules, window.start, window.end, &self.actuals)
    }

    /// Actual transactions that fall inside `window`.
    pub fn actuals_in(&self, window: DateWindow) -> Vec<ActualTransaction> {
        self.actuals
            .iter()
            .filter(|txn| window.contains(txn.date))
            .cloned()
            .collect()
    }
}

pub fn parse_snapshot(json: &str) -> Result<ForecastSnapshot, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_snapshot(path: &Path) -> Result<ForecastSnapshot, SnapshotError> {
    let data = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = parse_snapshot(&data).map_err(|source| SnapshotError::Serde {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        schedules = snapshot.schedules.len(),
        actuals = snapshot.actuals.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const SAMPLE: &str = r#"{
        "schedules": [
            {"amount": "1500", "start_date": "2024-01-05", "account_id": 10,
             "frequency": "bi-weekly", "kind": "income"}
        ],
        "actuals": [
            {"date": "2024-01-19", "account_id": 10, "type": "income"},
            {"date": "2024-03-01", "account_id": 10, "type": "income"}
        ]
    }"#;

    #[test]
    fn parses_and_projects_sample() {
        let snapshot = parse_snapshot(SAMPLE).expect("parse");
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 2, 15)).unwrap();

        let projections = snapshot.project(window).expect("project");
        let dates: Vec<_> = projections.iter().map(|entry| entry.date).collect();

        assert_eq!(dates, vec![date(2024, 1, 5), date(2024, 2, 2)]);
        assert_eq!(snapshot.actuals_in(window).len(), 1);
    }

    #[test]
    fn empty_document_is_an_empty_snapshot() {
        assert_eq!(parse_snapshot("{}").unwrap(), ForecastSnapshot::default());
    }
}
