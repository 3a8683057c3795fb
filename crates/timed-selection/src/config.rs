//! Screen Configuration
//!
//! Tunables for a timed selection screen. Every field is optional in the
//! JSON form; missing fields take the Level 3 defaults.

use serde::Deserialize;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("countdown duration must be at least one tick")]
    ZeroDuration,
    #[error("maximum selection must be at least one item")]
    ZeroMaxSelection,
    #[error("urgency threshold {threshold} must be below the duration {duration}")]
    ThresholdNotBelowDuration { threshold: u32, duration: u32 },
    #[error("maximum selection {max} exceeds the {items} available items")]
    MaxSelectionExceedsItems { max: usize, items: u32 },
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreenConfig {
    /// Countdown start value, in ticks
    pub duration: u32,
    /// Remaining ticks at which the countdown turns urgent
    pub urgency_threshold: u32,
    /// Selection cap
    pub max_selection: usize,
    /// Size of the item collection
    pub item_count: u32,
    /// Milliseconds between ticks
    pub tick_interval_ms: u32,
    /// Directory holding `{id}.png` thumbnails
    pub asset_prefix: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            duration: 20,
            urgency_threshold: 5,
            max_selection: 5,
            item_count: 30,
            tick_interval_ms: 1000,
            asset_prefix: "/thumbnails".to_string(),
        }
    }
}

impl ScreenConfig {
    /// Parse and validate a JSON object
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: ScreenConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.max_selection == 0 {
            return Err(ConfigError::ZeroMaxSelection);
        }
        if self.urgency_threshold >= self.duration {
            return Err(ConfigError::ThresholdNotBelowDuration {
                threshold: self.urgency_threshold,
                duration: self.duration,
            });
        }
        if self.max_selection > self.item_count as usize {
            return Err(ConfigError::MaxSelectionExceedsItems {
                max: self.max_selection,
                items: self.item_count,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
