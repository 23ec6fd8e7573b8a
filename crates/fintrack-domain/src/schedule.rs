//! Domain models for recurring schedules and their closed enumerations.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::transaction::TransactionType;

const WEEKLY_DAYS: i64 = 7;
const BIWEEKLY_DAYS: i64 = 14;

/// A periodic financial schedule such as payroll, rent or an investment contribution.
///
/// `frequency` and `kind` are kept as the raw strings supplied by the caller; they are
/// resolved into [`Frequency`] and [`ScheduleKind`] when the schedule is projected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurringSchedule {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub amount: Decimal,
    pub start_date: NaiveDate,
    pub account_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default = "RecurringSchedule::default_frequency")]
    pub frequency: String,
    #[serde(default = "RecurringSchedule::default_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecurringSchedule {
    /// Creates a biweekly income schedule; use the `with_*` builders to adjust it.
    pub fn new(amount: Decimal, start_date: NaiveDate, account_id: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            start_date,
            account_id,
            currency: None,
            frequency: Self::default_frequency(),
            kind: Self::default_kind(),
            category_id: None,
            notes: None,
        }
    }

    pub fn default_frequency() -> String {
        "biweekly".into()
    }

    pub fn default_kind() -> String {
        "income".into()
    }

    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

impl Identifiable for RecurringSchedule {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for RecurringSchedule {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for RecurringSchedule {
    fn display_label(&self) -> String {
        match &self.notes {
            Some(notes) => format!("{} {} ({})", self.frequency, self.kind, notes),
            None => format!("{} {}", self.frequency, self.kind),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Enumerates the supported schedule cadences.
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];

    /// Fixed day interval for weekly-style cadences.
    pub fn interval_days(self) -> Option<i64> {
        match self {
            Frequency::Weekly => Some(WEEKLY_DAYS),
            Frequency::Biweekly => Some(BIWEEKLY_DAYS),
            Frequency::Monthly | Frequency::Yearly => None,
        }
    }

    /// Month step for calendar cadences.
    pub fn month_step(self) -> Option<i32> {
        match self {
            Frequency::Monthly => Some(1),
            Frequency::Yearly => Some(12),
            Frequency::Weekly | Frequency::Biweekly => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Semantic category of a schedule, distinct from the display transaction type.
pub enum ScheduleKind {
    Income,
    Expense,
    Investment,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 3] = [
        ScheduleKind::Income,
        ScheduleKind::Expense,
        ScheduleKind::Investment,
    ];

    /// Display transaction type used for projected entries of this kind.
    pub fn transaction_type(self) -> TransactionType {
        match self {
            ScheduleKind::Income => TransactionType::Income,
            ScheduleKind::Expense | ScheduleKind::Investment => TransactionType::Expense,
        }
    }

    pub fn is_investment(self) -> bool {
        matches!(self, ScheduleKind::Investment)
    }

    /// Normalized actual-transaction types that suppress a projection of this kind.
    pub fn actual_types(self) -> &'static [&'static str] {
        match self {
            ScheduleKind::Income => &["income"],
            ScheduleKind::Expense => &["expense"],
            ScheduleKind::Investment => &["investment"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleKind::Income => "income",
            ScheduleKind::Expense => "expense",
            ScheduleKind::Investment => "investment",
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
