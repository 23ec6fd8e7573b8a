//! Helpers that combine projections with recorded transactions for display.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use fintrack_domain::{ActualTransaction, Amounted, EntrySource, ProjectedEntry, TransactionType};

/// Sorts projections from several schedules by date, then by schedule identifier.
pub fn sort_projections(entries: &mut [ProjectedEntry]) {
    entries.sort_by_key(|entry| (entry.date, entry.schedule_id));
}

/// A row of a merged actual/projected timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub account_id: i64,
    pub label: String,
    pub amount: Option<Decimal>,
    pub source: EntrySource,
    pub schedule_id: Option<Uuid>,
}

impl TimelineEntry {
    fn from_actual(txn: &ActualTransaction) -> Self {
        Self {
            date: txn.date,
            account_id: txn.account_id,
            label: txn.normalized_type(),
            amount: txn.amount,
            source: EntrySource::Actual,
            schedule_id: None,
        }
    }

    fn from_projection(entry: &ProjectedEntry) -> Self {
        Self {
            date: entry.date,
            account_id: entry.account_id,
            label: entry.kind_label().to_string(),
            amount: Some(entry.amount),
            source: entry.source,
            schedule_id: Some(entry.schedule_id),
        }
    }
}

/// Merges recorded and projected transactions, ordered by date with actual rows first.
///
/// The sort is stable, so rows sharing a date and source keep their input order.
pub fn merge_timeline(
    actuals: &[ActualTransaction],
    projections: &[ProjectedEntry],
) -> Vec<TimelineEntry> {
    let mut timeline: Vec<TimelineEntry> = actuals
        .iter()
        .map(TimelineEntry::from_actual)
        .chain(projections.iter().map(TimelineEntry::from_projection))
        .collect();
    timeline.sort_by_key(|entry| (entry.date, entry.source));
    timeline
}

/// Aggregated totals for a set of projected entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionTotals {
    pub generated: usize,
    pub projected_income: Decimal,
    pub projected_expense: Decimal,
    pub projected_investment: Decimal,
    pub net: Decimal,
}

impl ProjectionTotals {
    pub fn from_entries(entries: &[ProjectedEntry]) -> Self {
        let mut totals = ProjectionTotals {
            generated: entries.len(),
            ..Default::default()
        };
        for entry in entries {
            match (entry.transaction_type, entry.is_investment) {
                (_, true) => totals.projected_investment += entry.amount(),
                (TransactionType::Income, false) => totals.projected_income += entry.amount(),
                (TransactionType::Expense, false) => totals.projected_expense += entry.amount(),
            }
        }
        totals.net =
            totals.projected_income - totals.projected_expense - totals.projected_investment;
        totals
    }
}
