//! Report configuration.

use super::parse::env_or;
use super::ConfigError;

/// Default cookie names reported when COOKIE_KEYS is unset: the HoYoLab
/// v2 session pair.
pub const DEFAULT_KEYS: [&str; 2] = ["ltuid_v2", "ltoken_v2"];

/// Marker text printed for an absent value when MISSING_MARKER is unset.
pub const DEFAULT_MISSING_MARKER: &str = "undefined";

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `<name>: <value>` line per requested key.
    Text,
    /// A single JSON object, `null` for missing values.
    Json,
}

/// Report configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Cookie names to report, in output order (from COOKIE_KEYS).
    pub keys: Vec<String>,
    /// Text rendered in place of an absent value (from MISSING_MARKER).
    pub missing_marker: String,
    /// Output format (from OUTPUT_FORMAT).
    pub format: OutputFormat,
}

impl ReportConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let keys = match std::env::var("COOKIE_KEYS") {
            Ok(raw) => parse_keys(&raw)?,
            Err(_) => DEFAULT_KEYS.iter().map(|k| k.to_string()).collect(),
        };

        let format = match env_or("OUTPUT_FORMAT", "text").to_lowercase().as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            other => {
                return Err(ConfigError::Parse {
                    key: "OUTPUT_FORMAT".to_string(),
                    value: other.to_string(),
                    error: "expected 'text' or 'json'".to_string(),
                })
            }
        };

        Ok(Self {
            keys,
            missing_marker: env_or("MISSING_MARKER", DEFAULT_MISSING_MARKER),
            format,
        })
    }
}

/// Parse a comma-separated key list. Entries are trimmed; an empty list
/// or an empty entry is rejected.
fn parse_keys(raw: &str) -> Result<Vec<String>, ConfigError> {
    let keys: Vec<String> = raw
        .split(',')
        .map(|k| k.trim().to_string())
        .collect();

    if keys.iter().any(|k| k.is_empty()) {
        return Err(ConfigError::Invalid {
            key: "COOKIE_KEYS".to_string(),
            message: "empty key name".to_string(),
        });
    }

    Ok(keys)
}
