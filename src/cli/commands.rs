//! Handlers for the built-in shell commands.

use std::path::PathBuf;

use chrono::NaiveDate;

use fintrack_core::{
    merge_timeline, next_occurrence_on_or_after, resolve_schedule, sort_projections,
    CurrencyFormatter, DateFormatter, ProjectionError, ProjectionTotals,
};
use fintrack_domain::{DateWindow, Displayable, Identifiable};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::snapshot::load_snapshot;
use crate::utils::build_info;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        None => help::print_overview(&context.registry),
        Some(name) => match context.registry.get(&name.to_ascii_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        },
    }
    Ok(())
}

pub fn version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(build_info::current().summary());
    Ok(())
}

pub fn exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

pub fn load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [path] = args else {
        return Err(CommandError::InvalidArguments("usage: load <path>".into()));
    };
    let path = PathBuf::from(path);
    let snapshot = load_snapshot(&path)?;
    tracing::info!(
        path = %path.display(),
        schedules = snapshot.schedules.len(),
        actuals = snapshot.actuals.len(),
        "snapshot opened"
    );
    for schedule in &snapshot.schedules {
        tracing::debug!(id = %schedule.id(), schedule = %schedule.display_label(), "schedule");
    }
    output::success(format!(
        "Loaded {} schedule(s) and {} actual transaction(s) from {}.",
        snapshot.schedules.len(),
        snapshot.actuals.len(),
        path.display()
    ));

    let remembered = path.canonicalize().unwrap_or_else(|_| path.clone());
    context.snapshot = Some(snapshot);
    context.snapshot_path = Some(path);
    context.config.last_snapshot = Some(remembered);
    if let Err(err) = context.persist_config() {
        tracing::warn!(error = %err, "failed to remember last snapshot");
    }
    Ok(())
}

pub fn window(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let label = if context.window.is_some() {
                "custom"
            } else {
                "default"
            };
            let window = context.active_window()?;
            output::info(format!(
                "Window {} ({} day(s), {}).",
                window,
                window.days(),
                label
            ));
            Ok(())
        }
        ["reset"] => {
            context.window = None;
            output::success(format!(
                "Window reset to the next {} day(s).",
                context.config.default_window_days
            ));
            Ok(())
        }
        [from, to] => {
            let window = DateWindow::new(parse_date(from)?, parse_date(to)?)
                .map_err(ProjectionError::from)?;
            context.window = Some(window);
            output::success(format!("Window set to {}.", window));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: window [<from> <to> | reset]".into(),
        )),
    }
}

pub fn schedules(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.require_snapshot()?;
    if snapshot.schedules.is_empty() {
        output::info("Snapshot has no schedules.");
        return Ok(());
    }

    let fmt = context.formatters();
    let today = context.clock.today();
    let mut table = Table::new(vec![
        TableColumn::new("#", 2),
        TableColumn::new("Account", 7),
        TableColumn::new("Amount", 12),
        TableColumn::new("Start", 10),
        TableColumn::new("Next", 10),
        TableColumn::new("Schedule", 0),
    ]);
    for (idx, schedule) in snapshot.schedules.iter().enumerate() {
        let next = match resolve_schedule(schedule) {
            Ok((frequency, _)) => {
                next_occurrence_on_or_after(schedule.start_date, frequency, today)
                    .map(|date| fmt.format_date(date))
                    .unwrap_or_else(|| "-".into())
            }
            Err(err) => format!("invalid ({})", err),
        };
        table.add_row(vec![
            idx.to_string(),
            schedule.account_id.to_string(),
            fmt.format_amount(schedule.amount, schedule.currency.as_deref().unwrap_or("")),
            fmt.format_date(schedule.start_date),
            next,
            schedule.display_label(),
        ]);
    }
    table.print();
    Ok(())
}

pub fn project(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let window = context.active_window()?;
    let mut entries = context.require_snapshot()?.project(window)?;
    sort_projections(&mut entries);

    output::section(format!("Projections {}", window));
    if entries.is_empty() {
        output::info("No projected entries in window.");
        return Ok(());
    }

    let fmt = context.formatters();
    let mut table = Table::new(vec![
        TableColumn::new("Date", 10),
        TableColumn::new("Account", 7),
        TableColumn::new("Type", 10),
        TableColumn::new("Amount", 12),
        TableColumn::new("Notes", 0),
    ]);
    for entry in &entries {
        table.add_row(vec![
            fmt.format_date(entry.date),
            entry.account_id.to_string(),
            entry.kind_label().to_string(),
            fmt.format_amount(entry.amount, ""),
            entry.notes.clone().unwrap_or_default(),
        ]);
    }
    table.print();
    output::info(format!("{} projected entr(ies).", entries.len()));
    Ok(())
}

pub fn timeline(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let window = context.active_window()?;
    let snapshot = context.require_snapshot()?;
    let projections = snapshot.project(window)?;
    let actuals = snapshot.actuals_in(window);
    let rows = merge_timeline(&actuals, &projections);

    output::section(format!("Timeline {}", window));
    if rows.is_empty() {
        output::info("Nothing recorded or projected in window.");
        return Ok(());
    }

    let fmt = context.formatters();
    let mut table = Table::new(vec![
        TableColumn::new("Date", 10),
        TableColumn::new("Source", 9),
        TableColumn::new("Account", 7),
        TableColumn::new("Type", 10),
        TableColumn::new("Amount", 12),
    ]);
    for row in &rows {
        table.add_row(vec![
            fmt.format_date(row.date),
            row.source.to_string(),
            row.account_id.to_string(),
            row.label.clone(),
            row.amount
                .map(|amount| fmt.format_amount(amount, ""))
                .unwrap_or_else(|| "-".into()),
        ]);
    }
    table.print();
    Ok(())
}

pub fn totals(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let window = context.active_window()?;
    let entries = context.require_snapshot()?.project(window)?;
    let totals = ProjectionTotals::from_entries(&entries);
    let fmt = context.formatters();

    output::section(format!("Totals {}", window));
    output::line(format!("Entries:    {}", totals.generated));
    output::line(format!("Income:     {}", fmt.format_amount(totals.projected_income, "")));
    output::line(format!("Expense:    {}", fmt.format_amount(totals.projected_expense, "")));
    output::line(format!(
        "Investment: {}",
        fmt.format_amount(totals.projected_investment, "")
    ));
    output::line(format!("Net:        {}", fmt.format_amount(totals.net, "")));
    Ok(())
}

pub fn config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            for (key, value) in context.config.entries() {
                output::line(format!("  {:<20} {}", key, value));
            }
            output::line(format!(
                "  {:<20} {}",
                "path",
                context.config_manager.config_path().display()
            ));
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let value = value.join(" ");
            context.config.set(key, &value)?;
            context.persist_config()?;
            context.apply_output_preferences();
            tracing::info!(key, value = %value, "preference updated");
            output::success(format!("{} = {}", key, value));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | set <key> <value>]".into(),
        )),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}`, expected YYYY-MM-DD", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(matches!(
            parse_date("29/02/2024"),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
