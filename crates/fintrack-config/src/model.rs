use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

const DEFAULT_WINDOW_DAYS: u32 = 90;
const MAX_WINDOW_DAYS: u32 = 36_500;
const MAX_CURRENCY_PRECISION: u8 = 8;

/// Stores user-configurable shell preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub currency_precision: Option<u8>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Length of the projection window used when none has been set explicitly.
    #[serde(default = "Config::default_window_days_value")]
    pub default_window_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_snapshot: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            currency_precision: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_window_days: Self::default_window_days_value(),
            last_snapshot: None,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 6] = [
        "locale",
        "currency",
        "currency_precision",
        "ui_color_enabled",
        "default_window_days",
        "last_snapshot",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_window_days_value() -> u32 {
        DEFAULT_WINDOW_DAYS
    }

    pub fn precision(&self) -> usize {
        self.currency_precision.map(usize::from).unwrap_or(2)
    }

    /// Updates a single preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "locale" => self.locale = non_empty(value).ok_or_else(invalid)?,
            "currency" => {
                self.currency = non_empty(value)
                    .map(|code| code.to_ascii_uppercase())
                    .ok_or_else(invalid)?
            }
            "currency_precision" => {
                let precision: u8 = value.trim().parse().map_err(|_| invalid())?;
                if precision > MAX_CURRENCY_PRECISION {
                    return Err(invalid());
                }
                self.currency_precision = Some(precision);
            }
            "ui_color_enabled" => self.ui_color_enabled = parse_flag(value).ok_or_else(invalid)?,
            "default_window_days" => {
                let days: u32 = value.trim().parse().map_err(|_| invalid())?;
                if !window_days_in_bounds(days) {
                    return Err(invalid());
                }
                self.default_window_days = days;
            }
            "last_snapshot" => self.last_snapshot = non_empty(value).map(PathBuf::from),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Checks values that deserialization alone cannot bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !window_days_in_bounds(self.default_window_days) {
            return Err(ConfigError::InvalidValue {
                key: "default_window_days".into(),
                value: self.default_window_days.to_string(),
            });
        }
        if self.currency_precision.unwrap_or(0) > MAX_CURRENCY_PRECISION {
            return Err(ConfigError::InvalidValue {
                key: "currency_precision".into(),
                value: self.precision().to_string(),
            });
        }
        Ok(())
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("locale", self.locale.clone()),
            ("currency", self.currency.clone()),
            ("currency_precision", self.precision().to_string()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("default_window_days", self.default_window_days.to_string()),
            (
                "last_snapshot",
                self.last_snapshot
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
        ]
    }
}

fn window_days_in_bounds(days: u32) -> bool {
    (1..=MAX_WINDOW_DAYS).contains(&days)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_known_keys() {
        let mut cfg = Config::default();
        cfg.set("currency", "eur").unwrap();
        cfg.set("default_window_days", "30").unwrap();
        cfg.set("ui_color_enabled", "off").unwrap();
        cfg.set("currency_precision", "0").unwrap();

        assert_eq!(cfg.currency, "EUR");
        assert_eq!(cfg.default_window_days, 30);
        assert!(!cfg.ui_color_enabled);
        assert_eq!(cfg.precision(), 0);
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("theme", "dark"),
            Err(ConfigError::UnknownKey(key)) if key == "theme"
        ));
        assert!(matches!(
            cfg.set("default_window_days", "0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("default_window_days", "4000000000"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("default_window_days", "36501"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("ui_color_enabled", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn window_days_accepts_upper_bound() {
        let mut cfg = Config::default();
        cfg.set("default_window_days", "36500").unwrap();
        assert_eq!(cfg.default_window_days, 36_500);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_bounds_file_values() {
        let cfg: Config = serde_json::from_str(
            r#"{"locale": "en-US", "currency": "USD", "default_window_days": 4000000000}"#,
        )
        .unwrap();
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidValue { key, .. }) if key == "default_window_days"
        ));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config =
            serde_json::from_str(r#"{"locale": "en-GB", "currency": "GBP"}"#).unwrap();
        assert_eq!(cfg.default_window_days, 90);
        assert!(cfg.ui_color_enabled);
        assert!(cfg.last_snapshot.is_none());
    }
}
