use chrono::NaiveDate;
use fintrack_config::Config;
use fintrack_core::{CurrencyFormatter, DateFormatter};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formatter implementations backed by a copy of the active shell configuration.
#[derive(Debug, Clone)]
pub struct CliFormatters {
    currency: String,
    precision: u32,
}

impl CliFormatters {
    pub fn new(config: &Config) -> Self {
        Self {
            currency: config.currency.clone(),
            precision: config.precision() as u32,
        }
    }
}

impl CurrencyFormatter for CliFormatters {
    fn format_amount(&self, amount: Decimal, currency: &str) -> String {
        let code = if currency.is_empty() {
            self.currency.as_str()
        } else {
            currency
        };
        let rounded =
            amount.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);
        format!(
            "{amount:.prec$} {code}",
            amount = rounded,
            prec = self.precision as usize,
            code = code
        )
    }
}

impl DateFormatter for CliFormatters {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}
