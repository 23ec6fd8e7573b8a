//! Lookup of already-posted dates per account and transaction type.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use fintrack_domain::{ActualTransaction, ScheduleKind};

/// Index of actual transaction dates keyed by account, then by normalized type.
///
/// Built once per snapshot and shared read-only across every schedule projected
/// against that snapshot.
#[derive(Debug, Clone, Default)]
pub struct ActualTransactionIndex {
    by_account: HashMap<i64, HashMap<String, BTreeSet<NaiveDate>>>,
    transactions: usize,
}

impl ActualTransactionIndex {
    pub fn build<'a, I>(actuals: I) -> Self
    where
        I: IntoIterator<Item = &'a ActualTransaction>,
    {
        let mut index = Self::default();
        for txn in actuals {
            index.insert(txn);
        }
        index
    }

    fn insert(&mut self, txn: &ActualTransaction) {
        self.by_account
            .entry(txn.account_id)
            .or_default()
            .entry(txn.normalized_type())
            .or_default()
            .insert(txn.date);
        self.transactions += 1;
    }

    /// Dates on which `account_id` already has a transaction that suppresses `kind`.
    pub fn excluded_dates_for(&self, account_id: i64, kind: ScheduleKind) -> BTreeSet<NaiveDate> {
        let Some(account) = self.by_account.get(&account_id) else {
            return BTreeSet::new();
        };
        kind.actual_types()
            .iter()
            .filter_map(|actual_type| account.get(*actual_type))
            .flat_map(|dates| dates.iter().copied())
            .collect()
    }

    /// Number of transactions indexed, duplicates included.
    pub fn len(&self) -> usize {
        self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn excluded_dates_are_scoped_by_account_and_kind() {
        let actuals = vec![
            ActualTransaction::new(date(2024, 1, 19), 10, "income"),
            ActualTransaction::new(date(2024, 1, 20), 10, "expense"),
            ActualTransaction::new(date(2024, 1, 21), 11, "income"),
        ];
        let index = ActualTransactionIndex::build(&actuals);

        assert_eq!(
            index.excluded_dates_for(10, ScheduleKind::Income),
            BTreeSet::from([date(2024, 1, 19)])
        );
        assert_eq!(
            index.excluded_dates_for(10, ScheduleKind::Expense),
            BTreeSet::from([date(2024, 1, 20)])
        );
        assert!(index.excluded_dates_for(10, ScheduleKind::Investment).is_empty());
        assert!(index.excluded_dates_for(99, ScheduleKind::Income).is_empty());
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn actual_types_are_normalized() {
        let actuals = vec![
            ActualTransaction::new(date(2024, 2, 1), 4, " Investment"),
            ActualTransaction::new(date(2024, 2, 15), 4, "INVESTMENT "),
        ];
        let index = ActualTransactionIndex::build(&actuals);

        assert_eq!(
            index.excluded_dates_for(4, ScheduleKind::Investment),
            BTreeSet::from([date(2024, 2, 1), date(2024, 2, 15)])
        );
    }

    #[test]
    fn investment_actuals_do_not_suppress_expense_schedules() {
        let actuals = vec![ActualTransaction::new(date(2024, 3, 1), 2, "investment")];
        let index = ActualTransactionIndex::build(&actuals);

        assert!(index.excluded_dates_for(2, ScheduleKind::Expense).is_empty());
    }

    #[test]
    fn empty_snapshot_builds_empty_index() {
        let index = ActualTransactionIndex::build(&Vec::<ActualTransaction>::new());
        assert!(index.is_empty());
    }
}
