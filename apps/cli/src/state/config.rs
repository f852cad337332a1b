//! # Configuration State
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line (`--data`)
//! 2. Environment variables (`CANTEEN_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup, so nothing here is shared
//! mutably.

use std::path::PathBuf;

use canteen_core::Money;
use directories::ProjectDirs;
use serde::Serialize;

/// File name of the snapshot inside the data directory.
pub const SNAPSHOT_FILE_NAME: &str = "canteen.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Where the snapshot JSON lives
    pub data_path: PathBuf,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Decimal places used for per-person shares and final totals.
    /// Default: 1
    pub share_decimals: usize,
}

impl Default for ConfigState {
    /// Returns the default configuration.
    ///
    /// ## Default Values
    /// - Data: platform data directory + `canteen.json`
    /// - Currency: ₹
    /// - Shares: one decimal place
    fn default() -> Self {
        ConfigState {
            data_path: default_data_path(),
            currency_symbol: "₹".to_string(),
            share_decimals: 1,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CANTEEN_DATA_PATH`: Override the snapshot file path
    /// - `CANTEEN_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `CANTEEN_SHARE_DECIMALS`: Override share precision (e.g. "2")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// Unparseable values are ignored and the default kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("CANTEEN_DATA_PATH").filter(|p| !p.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }

        if let Some(symbol) = lookup("CANTEEN_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("CANTEEN_SHARE_DECIMALS") {
            match decimals.trim().parse::<usize>() {
                Ok(decimals) if decimals <= 6 => config.share_decimals = decimals,
                _ => tracing::warn!(value = %decimals, "Ignoring invalid CANTEEN_SHARE_DECIMALS"),
            }
        }

        config
    }

    /// Applies the `--data` flag, which wins over everything else.
    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_path = path;
        }
        self
    }

    /// Formats an exact amount with two decimals.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_minor(1234)), "₹12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let minor = amount.minor();
        format!(
            "{}{}{}.{:02}",
            if minor < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.major_part().abs(),
            amount.minor_part().abs()
        )
    }

    /// Formats a share or final total, rounding only for display.
    pub fn format_amount(&self, amount: f64) -> String {
        let rendered = format!("{:.*}", self.share_decimals, amount.abs());
        // "-0.0" should read as zero
        let negative = amount < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0');
        format!(
            "{}{}{}",
            if negative { "-" } else { "" },
            self.currency_symbol,
            rendered
        )
    }
}

/// Determines the default snapshot path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.canteen.split/canteen.json`
/// - **Windows**: `%APPDATA%\canteen\split\data\canteen.json`
/// - **Linux**: `~/.local/share/canteen-split/canteen.json`
///
/// Falls back to the working directory when no home directory is known.
pub fn default_data_path() -> PathBuf {
    match ProjectDirs::from("com", "canteen", "split") {
        Some(dirs) => dirs.data_dir().join(SNAPSHOT_FILE_NAME),
        None => PathBuf::from(SNAPSHOT_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ConfigState {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.share_decimals, 1);
        assert!(config.data_path.ends_with(SNAPSHOT_FILE_NAME));
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("CANTEEN_DATA_PATH", "/tmp/lunch.json"),
            ("CANTEEN_CURRENCY_SYMBOL", "Rs "),
            ("CANTEEN_SHARE_DECIMALS", "2"),
        ]);
        assert_eq!(config.data_path, PathBuf::from("/tmp/lunch.json"));
        assert_eq!(config.currency_symbol, "Rs ");
        assert_eq!(config.share_decimals, 2);
    }

    #[test]
    fn test_invalid_decimals_keep_default() {
        assert_eq!(config_from(&[("CANTEEN_SHARE_DECIMALS", "lots")]).share_decimals, 1);
        assert_eq!(config_from(&[("CANTEEN_SHARE_DECIMALS", "40")]).share_decimals, 1);
    }

    #[test]
    fn test_data_flag_wins() {
        let config = config_from(&[("CANTEEN_DATA_PATH", "/tmp/env.json")])
            .with_data_path(Some(PathBuf::from("/tmp/flag.json")));
        assert_eq!(config.data_path, PathBuf::from("/tmp/flag.json"));

        let config = config.with_data_path(None);
        assert_eq!(config.data_path, PathBuf::from("/tmp/flag.json"));
    }

    #[test]
    fn test_format_money() {
        let config = config_from(&[]);
        assert_eq!(config.format_money(Money::from_minor(1234)), "₹12.34");
        assert_eq!(config.format_money(Money::from_major(8)), "₹8.00");
        assert_eq!(config.format_money(Money::zero()), "₹0.00");
    }

    #[test]
    fn test_format_amount_rounds_for_display_only() {
        let config = config_from(&[]);
        assert_eq!(config.format_amount(25.0), "₹25.0");
        assert_eq!(config.format_amount(26.0), "₹26.0");
        assert_eq!(config.format_amount(10.0 / 3.0), "₹3.3");
        assert_eq!(config.format_amount(-0.01), "₹0.0");
    }
}
