//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Delay between folding a turn and playing the next prompt, when not
/// configured
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory the final report is exported to
    pub output_dir: Option<String>,
    /// Milliseconds between turns, before the next prompt plays
    pub settle_delay_ms: Option<u64>,
    /// Run without audio hardware (no-op capture adapter)
    pub silent: Option<bool>,
    /// Skip writing the report file at the end of the session
    pub no_export: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            output_dir: Some(".".to_string()),
            settle_delay_ms: Some(DEFAULT_SETTLE_DELAY_MS),
            silent: Some(false),
            no_export: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            output_dir: other.output_dir.or(self.output_dir),
            settle_delay_ms: other.settle_delay_ms.or(self.settle_delay_ms),
            silent: other.silent.or(self.silent),
            no_export: other.no_export.or(self.no_export),
        }
    }

    pub fn output_dir_or_default(&self) -> String {
        self.output_dir.clone().unwrap_or_else(|| ".".to_string())
    }

    pub fn settle_delay_ms_or_default(&self) -> u64 {
        self.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS)
    }

    pub fn silent_or_default(&self) -> bool {
        self.silent.unwrap_or(false)
    }

    pub fn no_export_or_default(&self) -> bool {
        self.no_export.unwrap_or(false)
    }
}
