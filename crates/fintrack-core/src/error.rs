use fintrack_domain::DateWindowError;
use thiserror::Error;

/// Input-validation failures raised by the projection engine. None are retryable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("range_start must be on or before range_end")]
    InvalidRange,
    #[error("schedule amount must be greater than zero")]
    InvalidAmount,
    #[error("unsupported frequency `{0}`: only weekly, biweekly, monthly, or yearly schedules are supported")]
    InvalidFrequency(String),
    #[error("unsupported kind `{0}`: only income, expense, or investment schedules are supported")]
    InvalidKind(String),
}

impl From<DateWindowError> for ProjectionError {
    fn from(err: DateWindowError) -> Self {
        match err {
            DateWindowError::InvalidRange | DateWindowError::OutOfRange => {
                ProjectionError::InvalidRange
            }
        }
    }
}
