//! Domain models for actual transactions and projected entries.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A real, previously recorded transaction taken from a read-only snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActualTransaction {
    pub date: NaiveDate,
    pub account_id: i64,
    /// Free-form type label; matched after trimming and lowercasing.
    #[serde(rename = "type", alias = "transaction_type")]
    pub transaction_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl ActualTransaction {
    pub fn new(date: NaiveDate, account_id: i64, transaction_type: impl Into<String>) -> Self {
        Self {
            date,
            account_id,
            transaction_type: transaction_type.into(),
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn normalized_type(&self) -> String {
        self.transaction_type.trim().to_lowercase()
    }
}

impl Displayable for ActualTransaction {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.date, self.normalized_type())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Display-oriented direction of a transaction.
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
/// Distinguishes recorded transactions from synthesized ones in merged views.
///
/// Variant order is significant: actual entries sort before projected ones.
pub enum EntrySource {
    Actual,
    Projected,
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntrySource::Actual => "actual",
            EntrySource::Projected => "projected",
        };
        f.write_str(label)
    }
}

/// A synthesized, never-persisted expected transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectedEntry {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub account_id: i64,
    pub transaction_type: TransactionType,
    pub is_investment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub source: EntrySource,
    pub schedule_id: Uuid,
}

impl ProjectedEntry {
    /// Reporting label: `investment` for contributions, else the transaction type.
    pub fn kind_label(&self) -> &'static str {
        match (self.is_investment, self.transaction_type) {
            (true, _) => "investment",
            (false, TransactionType::Income) => "income",
            (false, TransactionType::Expense) => "expense",
        }
    }
}

impl Amounted for ProjectedEntry {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for ProjectedEntry {
    fn display_label(&self) -> String {
        format!(
            "{} {} {} [{}]",
            self.date,
            self.kind_label(),
            self.amount,
            self.source
        )
    }
}
