mod common;

use common::date;
use fintrack::fintrack_core::{
    merge_timeline, sort_projections, ProjectionError, ProjectionService, ProjectionTotals,
};
use fintrack::fintrack_domain::{
    ActualTransaction, EntrySource, RecurringSchedule, TransactionType,
};
use rust_decimal::Decimal;

fn payroll() -> RecurringSchedule {
    RecurringSchedule::new(Decimal::from(1500), date(2024, 1, 5), 10)
        .with_frequency("biweekly")
        .with_kind("income")
        .with_notes("payroll")
}

#[test]
fn payroll_over_a_quarter_skips_recorded_paydays() {
    let actuals = vec![
        ActualTransaction::new(date(2024, 2, 2), 10, "income"),
        ActualTransaction::new(date(2024, 2, 16), 11, "income"),
        ActualTransaction::new(date(2024, 3, 1), 10, "expense"),
    ];

    let entries =
        ProjectionService::project(&payroll(), date(2024, 1, 1), date(2024, 3, 31), &actuals)
            .expect("project");
    let dates: Vec<_> = entries.iter().map(|entry| entry.date).collect();

    assert_eq!(
        dates,
        vec![
            date(2024, 1, 5),
            date(2024, 1, 19),
            date(2024, 2, 16),
            date(2024, 3, 1),
            date(2024, 3, 15),
            date(2024, 3, 29),
        ]
    );
    assert!(entries.iter().all(|entry| {
        entry.transaction_type == TransactionType::Income
            && !entry.is_investment
            && entry.source == EntrySource::Projected
            && entry.notes.as_deref() == Some("payroll")
    }));
}

#[test]
fn month_end_rent_follows_short_months() {
    let rent = RecurringSchedule::new(Decimal::new(95050, 2), date(2024, 1, 31), 10)
        .with_frequency("Monthly")
        .with_kind("expense");

    let entries =
        ProjectionService::project(&rent, date(2024, 1, 1), date(2024, 5, 31), &[]).unwrap();
    let dates: Vec<_> = entries.iter().map(|entry| entry.date).collect();

    assert_eq!(
        dates,
        vec![
            date(2024, 1, 31),
            date(2024, 2, 29),
            date(2024, 3, 31),
            date(2024, 4, 30),
            date(2024, 5, 31),
        ]
    );
    assert!(entries
        .iter()
        .all(|entry| entry.transaction_type == TransactionType::Expense));
}

#[test]
fn investment_contributions_are_suppressed_by_investment_records_only() {
    let plan = RecurringSchedule::new(Decimal::from(200), date(2024, 1, 10), 30)
        .with_frequency("monthly")
        .with_kind("investment");
    let actuals = vec![
        ActualTransaction::new(date(2024, 2, 10), 30, "Investment"),
        ActualTransaction::new(date(2024, 3, 10), 30, "expense"),
    ];

    let entries =
        ProjectionService::project(&plan, date(2024, 1, 1), date(2024, 3, 31), &actuals).unwrap();
    let dates: Vec<_> = entries.iter().map(|entry| entry.date).collect();

    assert_eq!(dates, vec![date(2024, 1, 10), date(2024, 3, 10)]);
    assert!(entries
        .iter()
        .all(|entry| entry.is_investment && entry.transaction_type == TransactionType::Expense));
}

#[test]
fn invalid_inputs_are_reported_before_any_entry() {
    let reversed =
        ProjectionService::project(&payroll(), date(2024, 3, 1), date(2024, 2, 1), &[]);
    assert_eq!(reversed, Err(ProjectionError::InvalidRange));

    let zero = RecurringSchedule::new(Decimal::ZERO, date(2024, 1, 5), 10);
    assert_eq!(
        ProjectionService::project(&zero, date(2024, 1, 1), date(2024, 2, 1), &[]),
        Err(ProjectionError::InvalidAmount)
    );

    let daily = payroll().with_frequency("daily");
    assert!(matches!(
        ProjectionService::project(&daily, date(2024, 1, 1), date(2024, 2, 1), &[]),
        Err(ProjectionError::InvalidFrequency(_))
    ));

    let transfer = payroll().with_kind("transfer");
    assert!(matches!(
        ProjectionService::project(&transfer, date(2024, 1, 1), date(2024, 2, 1), &[]),
        Err(ProjectionError::InvalidKind(_))
    ));
}

#[test]
fn one_bad_schedule_fails_the_whole_batch() {
    let schedules = vec![payroll(), payroll().with_frequency("fortnightly")];
    let result =
        ProjectionService::project_many(&schedules, date(2024, 1, 1), date(2024, 1, 31), &[]);

    assert!(matches!(result, Err(ProjectionError::InvalidFrequency(_))));
}

#[test]
fn income_projection_ignores_stored_kind() {
    let schedule = payroll().with_kind("expense");
    let entries = ProjectionService::project_income(
        &schedule,
        date(2024, 1, 1),
        date(2024, 1, 31),
        &[ActualTransaction::new(date(2024, 1, 19), 10, "expense")],
    )
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert!(entries
        .iter()
        .all(|entry| entry.transaction_type == TransactionType::Income));
}

#[test]
fn merged_timeline_and_totals_cover_the_window() {
    let rent = RecurringSchedule::new(Decimal::from(900), date(2024, 1, 19), 10)
        .with_frequency("monthly")
        .with_kind("expense");
    let actuals = vec![ActualTransaction::new(date(2024, 1, 5), 10, "income")
        .with_amount(Decimal::from(1500))];

    let mut entries = ProjectionService::project_many(
        &[payroll(), rent],
        date(2024, 1, 1),
        date(2024, 1, 31),
        &actuals,
    )
    .unwrap();
    sort_projections(&mut entries);

    let totals = ProjectionTotals::from_entries(&entries);
    assert_eq!(totals.generated, 2);
    assert_eq!(totals.projected_income, Decimal::from(1500));
    assert_eq!(totals.projected_expense, Decimal::from(900));
    assert_eq!(totals.net, Decimal::from(600));

    let timeline = merge_timeline(&actuals, &entries);
    let sources: Vec<_> = timeline.iter().map(|row| (row.date, row.source)).collect();
    assert_eq!(
        sources,
        vec![
            (date(2024, 1, 5), EntrySource::Actual),
            (date(2024, 1, 19), EntrySource::Projected),
            (date(2024, 1, 19), EntrySource::Projected),
        ]
    );
}
