//! Shared traits and calendar utilities for schedule primitives.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Exposes a stable identifier for schedule records.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Returns the number of days in `month` of `year`, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
        Some(first_next) => (first_next - Duration::days(1)).day(),
        None => 31,
    }
}

/// Moves `anchor` forward or backward by `months`, clamping the anchor's day-of-month
/// to the last valid day of the target month.
///
/// The clamp is always computed from `anchor.day()`, so a day 31 anchor shifted into
/// February lands on the 28th or 29th while the next 31-day month restores the 31st.
/// Returns `None` when the target falls outside the representable calendar.
pub fn shift_months_clamped(anchor: NaiveDate, months: i32) -> Option<NaiveDate> {
    let total = anchor.year() * 12 + anchor.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = anchor.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Counts whole calendar months from `from` to `to`, ignoring the day-of-month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}
