use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;

use fintrack::fintrack_core::{ActualTransactionIndex, ProjectionService};
use fintrack::fintrack_domain::{ActualTransaction, DateWindow, RecurringSchedule};

const FREQUENCIES: [&str; 4] = ["weekly", "biweekly", "monthly", "yearly"];
const KINDS: [&str; 3] = ["income", "expense", "investment"];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixture(schedule_count: usize) -> (Vec<RecurringSchedule>, Vec<ActualTransaction>) {
    let schedules = (0..schedule_count)
        .map(|idx| {
            let start = date(2020, 1, 1) + chrono::Duration::days((idx % 400) as i64);
            RecurringSchedule::new(Decimal::new(10_000 + idx as i64, 2), start, (idx % 25) as i64)
                .with_frequency(FREQUENCIES[idx % FREQUENCIES.len()])
                .with_kind(KINDS[idx % KINDS.len()])
        })
        .collect();
    let actuals = (0..5_000)
        .map(|idx| {
            let day = date(2024, 1, 1) + chrono::Duration::days((idx % 366) as i64);
            let kind = if idx % 2 == 0 { "income" } else { "expense" };
            ActualTransaction::new(day, (idx % 25) as i64, kind)
        })
        .collect();
    (schedules, actuals)
}

fn bench_projection(c: &mut Criterion) {
    let (schedules, actuals) = fixture(500);
    let window = DateWindow::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();

    c.bench_function("project_many_500_schedules_one_year", |b| {
        b.iter(|| {
            ProjectionService::project_many(
                black_box(&schedules),
                window.start,
                window.end,
                black_box(&actuals),
            )
            .unwrap()
        })
    });

    let index = ActualTransactionIndex::build(&actuals);
    c.bench_function("project_with_shared_index", |b| {
        b.iter(|| {
            schedules
                .iter()
                .map(|schedule| {
                    ProjectionService::project_with_index(schedule, window, &index)
                        .unwrap()
                        .len()
                })
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
