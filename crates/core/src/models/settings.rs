use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Longest accepted trend window, in days.
pub const MAX_TREND_DAYS: u32 = 366;

/// Display and window settings for the dashboard.
///
/// Missing fields fall back to their defaults when parsed from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix used when formatting money values (e.g., "₱", "$").
    pub currency_symbol: String,

    /// How many rows of the transaction table to show.
    pub recent_limit: usize,

    /// Length of the trailing sales/expense series, in days (today included).
    pub trend_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₱".to_string(),
            recent_limit: 50,
            trend_days: 7,
        }
    }
}

impl Settings {
    /// Parse settings from a (possibly partial) JSON object, then validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every field is usable: non-blank symbol, at least one table row,
    /// and a trend window of 1..=366 days.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Currency symbol must not be empty".into(),
            ));
        }
        if self.recent_limit == 0 {
            return Err(CoreError::ValidationError(
                "Recent limit must be at least 1".into(),
            ));
        }
        if self.trend_days == 0 || self.trend_days > MAX_TREND_DAYS {
            return Err(CoreError::ValidationError(format!(
                "Trend window of {} days must be between 1 and {MAX_TREND_DAYS}",
                self.trend_days
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }
}
