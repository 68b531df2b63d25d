//! Configuration module for cookie_peek.
//!
//! This module provides centralized configuration loading from environment variables.
//!
//! # Example
//!
//! ```rust,ignore
//! use cookie_peek::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Keys: {:?}", config.report.keys);
//! ```

mod error;
mod logging;
mod parse;
mod report;
mod source;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use report::{OutputFormat, ReportConfig, DEFAULT_KEYS, DEFAULT_MISSING_MARKER};
pub use source::SourceConfig;

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Cookie source configuration.
    pub source: SourceConfig,
    /// Report configuration.
    pub report: ReportConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            source: SourceConfig::from_env()?,
            report: ReportConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        use tracing::debug;

        debug!("Configuration loaded:");
        debug!("  Source: {}", self.source.describe());
        debug!("  Keys: {}", self.report.keys.join(", "));
        debug!("  Missing marker: {:?}", self.report.missing_marker);
        debug!("  Output format: {:?}", self.report.format);
    }
}
