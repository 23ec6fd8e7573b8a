//! Resolution of raw frequency and kind labels into closed enumerations.

use fintrack_domain::{Frequency, RecurringSchedule, ScheduleKind};

use crate::ProjectionError;

/// Normalizes a user-supplied frequency label.
///
/// Everything except alphanumerics is dropped after lowercasing, so `Bi-Weekly` and
/// `bi weekly` both resolve to [`Frequency::Biweekly`]. `byweekly` is accepted as a
/// synonym for `biweekly`.
pub fn normalize_frequency(raw: &str) -> Result<Frequency, ProjectionError> {
    let normalized: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .collect();
    match normalized.as_str() {
        "weekly" => Ok(Frequency::Weekly),
        "biweekly" | "byweekly" => Ok(Frequency::Biweekly),
        "monthly" => Ok(Frequency::Monthly),
        "yearly" => Ok(Frequency::Yearly),
        _ => Err(ProjectionError::InvalidFrequency(raw.to_string())),
    }
}

/// Normalizes a schedule kind label. Only surrounding whitespace and case are forgiven.
pub fn normalize_kind(raw: &str) -> Result<ScheduleKind, ProjectionError> {
    match raw.trim().to_lowercase().as_str() {
        "income" => Ok(ScheduleKind::Income),
        "expense" => Ok(ScheduleKind::Expense),
        "investment" => Ok(ScheduleKind::Investment),
        _ => Err(ProjectionError::InvalidKind(raw.to_string())),
    }
}

/// Resolves both labels of a schedule, frequency first.
pub fn resolve_schedule(
    schedule: &RecurringSchedule,
) -> Result<(Frequency, ScheduleKind), ProjectionError> {
    let frequency = normalize_frequency(&schedule.frequency)?;
    let kind = normalize_kind(&schedule.kind)?;
    Ok((frequency, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_ignores_case_and_punctuation() {
        for raw in ["biweekly", "Bi-Weekly", "bi weekly", " BIWEEKLY ", "byweekly", "By_Weekly"] {
            assert_eq!(normalize_frequency(raw), Ok(Frequency::Biweekly), "{raw}");
        }
        assert_eq!(normalize_frequency("Weekly"), Ok(Frequency::Weekly));
        assert_eq!(normalize_frequency("MONTHLY"), Ok(Frequency::Monthly));
        assert_eq!(normalize_frequency("yearly."), Ok(Frequency::Yearly));
    }

    #[test]
    fn unknown_frequency_is_rejected() {
        for raw in ["quarterly", "daily", "", "annually", "bi-monthly"] {
            assert_eq!(
                normalize_frequency(raw),
                Err(ProjectionError::InvalidFrequency(raw.to_string()))
            );
        }
    }

    #[test]
    fn kind_allows_only_case_and_whitespace_variation() {
        assert_eq!(normalize_kind(" Income "), Ok(ScheduleKind::Income));
        assert_eq!(normalize_kind("EXPENSE"), Ok(ScheduleKind::Expense));
        assert_eq!(normalize_kind("investment"), Ok(ScheduleKind::Investment));
        assert_eq!(
            normalize_kind("in-come"),
            Err(ProjectionError::InvalidKind("in-come".into()))
        );
        assert_eq!(
            normalize_kind("transfer"),
            Err(ProjectionError::InvalidKind("transfer".into()))
        );
    }
}
