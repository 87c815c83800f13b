//! Startup configuration for the global reporting policy.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Collect, LogAndContinue, Panic, Raise, SharedPolicy};

/// Built-in behaviours selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingMode {
    /// Abort the chain with a [`ValidationError`](crate::ValidationError).
    #[default]
    Raise,
    /// Log each failure at `WARN` and continue.
    Log,
    /// Panic on the first failure.
    Panic,
}

impl ReportingMode {
    /// Configuration spelling of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raise => "raise",
            Self::Log => "log",
            Self::Panic => "panic",
        }
    }
}

impl FromStr for ReportingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" => Ok(Self::Raise),
            "log" => Ok(Self::Log),
            "panic" => Ok(Self::Panic),
            _ => Err(ConfigError::UnknownMode(s.to_owned())),
        }
    }
}

/// Reporting configuration, embeddable in a host's own config file.
///
/// # Examples
///
/// ```rust
/// use validate_that::reporting::{ReportingConfig, ReportingMode};
///
/// let config: ReportingConfig = serde_json::from_str(r#"{ "mode": "log" }"#).unwrap();
/// assert_eq!(config.mode, ReportingMode::Log);
///
/// let config: ReportingConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.mode, ReportingMode::Raise);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Which built-in policy to install.
    pub mode: ReportingMode,
}

impl ReportingConfig {
    /// Environment variable read by [`from_env`](Self::from_env).
    pub const ENV_VAR: &'static str = "VALIDATE_THAT_REPORTING";

    /// Creates a configuration for `mode`.
    #[must_use]
    pub const fn new(mode: ReportingMode) -> Self {
        Self { mode }
    }

    /// Reads the mode from `VALIDATE_THAT_REPORTING`, defaulting to `raise`
    /// when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) => Ok(Self::new(value.parse()?)),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                var: Self::ENV_VAR,
            }),
        }
    }

    /// Builds the policy this configuration describes.
    #[must_use]
    pub fn policy(&self) -> SharedPolicy {
        match self.mode {
            ReportingMode::Raise => Arc::new(Raise),
            ReportingMode::Log => Arc::new(LogAndContinue),
            ReportingMode::Panic => Arc::new(Panic),
        }
    }

    /// Builds a collecting policy, ignoring the configured mode.
    ///
    /// Handy in test harnesses that want every report.
    #[must_use]
    pub fn collecting() -> (Collect, SharedPolicy) {
        let collector = Collect::new();
        let policy: SharedPolicy = Arc::new(collector.clone());
        (collector, policy)
    }
}

/// Invalid reporting configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The mode name is not one of `raise`, `log`, `panic`.
    #[error("unknown reporting mode `{0}`, expected one of: raise, log, panic")]
    UnknownMode(String),

    /// The environment variable holds non-UTF-8 data.
    #[error("environment variable {var} is not valid unicode")]
    NotUnicode {
        /// Variable name.
        var: &'static str,
    },
}
