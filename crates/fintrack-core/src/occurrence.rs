//! Calendar stepping for recurring schedules, independent of exclusions.

use chrono::{Duration, NaiveDate};

use fintrack_domain::{months_between, shift_months_clamped, DateWindow, Frequency};

/// Ordered iterator over the dates a schedule fires on inside a window.
///
/// Interval cadences stay in phase with the anchor date. Calendar cadences track a
/// month offset from the anchor and re-clamp the anchor's day on every step.
#[derive(Debug, Clone)]
pub struct Occurrences {
    anchor: NaiveDate,
    frequency: Frequency,
    end: NaiveDate,
    next: Option<NaiveDate>,
    month_offset: i32,
}

impl Occurrences {
    pub fn new(anchor: NaiveDate, frequency: Frequency, window: DateWindow) -> Self {
        let (next, month_offset) = if anchor > window.end || window.start > window.end {
            (None, 0)
        } else {
            first_on_or_after(anchor, frequency, window.start)
        };
        Self {
            anchor,
            frequency,
            end: window.end,
            next,
            month_offset,
        }
    }

    fn advance(&mut self, current: NaiveDate) -> Option<NaiveDate> {
        match (self.frequency.interval_days(), self.frequency.month_step()) {
            (Some(days), _) => current.checked_add_signed(Duration::days(days)),
            (None, Some(step)) => {
                self.month_offset += step;
                shift_months_clamped(self.anchor, self.month_offset)
            }
            (None, None) => None,
        }
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = self.advance(current);
        Some(current)
    }
}

/// Enumerates occurrences of a schedule anchored at `anchor` within `window`.
pub fn occurrences(anchor: NaiveDate, frequency: Frequency, window: DateWindow) -> Occurrences {
    Occurrences::new(anchor, frequency, window)
}

/// First date on or after `date` on which a schedule anchored at `anchor` fires.
pub fn next_occurrence_on_or_after(
    anchor: NaiveDate,
    frequency: Frequency,
    date: NaiveDate,
) -> Option<NaiveDate> {
    first_on_or_after(anchor, frequency, date).0
}

fn first_on_or_after(
    anchor: NaiveDate,
    frequency: Frequency,
    minimum: NaiveDate,
) -> (Option<NaiveDate>, i32) {
    if anchor >= minimum {
        return (Some(anchor), 0);
    }
    match (frequency.interval_days(), frequency.month_step()) {
        (Some(days), _) => (first_interval_on_or_after(anchor, minimum, days), 0),
        (None, Some(step)) => first_calendar_on_or_after(anchor, minimum, step),
        (None, None) => (None, 0),
    }
}

fn first_interval_on_or_after(
    anchor: NaiveDate,
    minimum: NaiveDate,
    interval_days: i64,
) -> Option<NaiveDate> {
    let days_between = (minimum - anchor).num_days();
    let intervals = (days_between + interval_days - 1) / interval_days;
    anchor.checked_add_signed(Duration::days(interval_days * intervals))
}

fn first_calendar_on_or_after(
    anchor: NaiveDate,
    minimum: NaiveDate,
    month_step: i32,
) -> (Option<NaiveDate>, i32) {
    // Whole periods only: yearly offsets must stay multiples of twelve.
    let mut offset = months_between(anchor, minimum).div_euclid(month_step) * month_step;
    let mut candidate = shift_months_clamped(anchor, offset);
    if matches!(candidate, Some(date) if date < minimum) {
        offset += month_step;
        candidate = shift_months_clamped(anchor, offset);
    }
    (candidate, offset)
}
