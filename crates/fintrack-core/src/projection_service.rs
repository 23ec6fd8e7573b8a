//! Projection of recurring schedules into dated entries, suppressing dates already posted.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fintrack_domain::{
    ActualTransaction, DateWindow, EntrySource, ProjectedEntry, RecurringSchedule, ScheduleKind,
};

use crate::{actual_index::ActualTransactionIndex, frequency, occurrence, ProjectionError};

/// Stateless entry points for projecting recurring schedules.
///
/// Every call validates its inputs up front and returns either the full list of
/// entries or an error; partial results are never produced.
pub struct ProjectionService;

impl ProjectionService {
    /// Projects one schedule over `[range_start, range_end]`.
    pub fn project(
        schedule: &RecurringSchedule,
        range_start: NaiveDate,
        range_end: NaiveDate,
        actuals: &[ActualTransaction],
    ) -> Result<Vec<ProjectedEntry>, ProjectionError> {
        let window = DateWindow::new(range_start, range_end)?;
        let index = ActualTransactionIndex::build(actuals);
        Self::project_with_index(schedule, window, &index)
    }

    /// Projects many schedules against one snapshot, building the exclusion index once.
    ///
    /// Entries are concatenated in schedule order. Use
    /// [`sort_projections`](crate::sort_projections) for a single chronological view.
    pub fn project_many(
        schedules: &[RecurringSchedule],
        range_start: NaiveDate,
        range_end: NaiveDate,
        actuals: &[ActualTransaction],
    ) -> Result<Vec<ProjectedEntry>, ProjectionError> {
        let window = DateWindow::new(range_start, range_end)?;
        let index = ActualTransactionIndex::build(actuals);
        let mut projections = Vec::new();
        for schedule in schedules {
            projections.extend(Self::project_with_index(schedule, window, &index)?);
        }
        Ok(projections)
    }

    /// Projects a pay schedule as income, whatever its stored kind.
    pub fn project_income(
        schedule: &RecurringSchedule,
        range_start: NaiveDate,
        range_end: NaiveDate,
        actuals: &[ActualTransaction],
    ) -> Result<Vec<ProjectedEntry>, ProjectionError> {
        let income = schedule
            .clone()
            .with_kind(ScheduleKind::Income.as_str());
        Self::project(&income, range_start, range_end, actuals)
    }

    /// Projects one schedule against a prebuilt index.
    pub fn project_with_index(
        schedule: &RecurringSchedule,
        window: DateWindow,
        index: &ActualTransactionIndex,
    ) -> Result<Vec<ProjectedEntry>, ProjectionError> {
        if window.start > window.end {
            return Err(ProjectionError::InvalidRange);
        }
        if schedule.amount <= Decimal::ZERO {
            return Err(ProjectionError::InvalidAmount);
        }
        let (frequency, kind) = frequency::resolve_schedule(schedule)?;
        let excluded = index.excluded_dates_for(schedule.account_id, kind);

        let projections = occurrence::occurrences(schedule.start_date, frequency, window)
            .filter(|date| !excluded.contains(date))
            .map(|date| ProjectedEntry {
                date,
                amount: schedule.amount,
                account_id: schedule.account_id,
                transaction_type: kind.transaction_type(),
                is_investment: kind.is_investment(),
                notes: schedule.notes.clone(),
                source: EntrySource::Projected,
                schedule_id: schedule.id,
            })
            .collect();
        Ok(projections)
    }
}
