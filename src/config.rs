use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::programs::DEFAULT_DISPLAY_DECIMALS;

/// environment variable for display precision
pub const DECIMALS_ENV: &str = "LOAN_PAYMENTS_DECIMALS";
/// environment variable for the log filter
pub const LOG_ENV: &str = "LOAN_PAYMENTS_LOG";

/// output and logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// digits after the decimal point in formatted payments
    pub display_decimals: u32,

    /// tracing filter directive, e.g. "info" or "loan_payments=debug"
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// load `.env` if present, then read settings from the process environment
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            debug!(path = %path.display(), "loaded dotenv file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(DECIMALS_ENV) {
            settings.display_decimals =
                raw.trim()
                    .parse()
                    .map_err(|_| LoanError::InvalidConfiguration {
                        message: format!("{} must be a non-negative integer, got {:?}", DECIMALS_ENV, raw),
                    })?;
        }

        if let Some(filter) = lookup(LOG_ENV) {
            if !filter.trim().is_empty() {
                settings.log_filter = filter.trim().to_string();
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    /// load from a JSON configuration file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LoanError::InvalidConfiguration {
            message: format!("failed to read config file {}: {}", path.display(), e),
        })?;

        let settings: Settings =
            serde_json::from_str(&content).map_err(|e| LoanError::InvalidConfiguration {
                message: format!("failed to parse config file {}: {}", path.display(), e),
            })?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display_decimals > Money::PRECISION {
            return Err(LoanError::InvalidConfiguration {
                message: format!(
                    "display_decimals {} exceeds money precision of {}",
                    self.display_decimals,
                    Money::PRECISION
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.display_decimals, 2);
    }

    #[test]
    fn test_reads_variables() {
        let settings = Settings::from_lookup(lookup(&[
            (DECIMALS_ENV, " 4 "),
            (LOG_ENV, "loan_payments=debug"),
        ]))
        .unwrap();
        assert_eq!(settings.display_decimals, 4);
        assert_eq!(settings.log_filter, "loan_payments=debug");
    }

    #[test]
    fn test_blank_log_filter_keeps_default() {
        let settings = Settings::from_lookup(lookup(&[(LOG_ENV, "  ")])).unwrap();
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_rejects_bad_decimals() {
        assert!(matches!(
            Settings::from_lookup(lookup(&[(DECIMALS_ENV, "two")])),
            Err(LoanError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Settings::from_lookup(lookup(&[(DECIMALS_ENV, "9")])),
            Err(LoanError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"display_decimals": 3}}"#).unwrap();

        let settings = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.display_decimals, 3);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_load_from_missing_or_bad_file() {
        assert!(Settings::load_from_file(Path::new("/nonexistent/settings.json")).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(file.path()),
            Err(LoanError::InvalidConfiguration { .. })
        ));
    }
}
