//! Cookie source configuration.

use std::path::PathBuf;

use super::parse::env_opt;
use super::ConfigError;
use crate::source::CookieSource;

/// Cookie source configuration loaded from environment.
///
/// COOKIE_STRING wins over COOKIE_FILE; with neither set the cookie
/// string is read from stdin. COOKIE_STRING is honored even when empty,
/// so an explicitly empty cookie string is a valid (all-missing) input.
#[derive(Clone, Debug)]
pub struct SourceConfig {
    /// Inline raw cookie string (from COOKIE_STRING).
    pub cookie_string: Option<String>,
    /// Path to a file holding the raw cookie string (from COOKIE_FILE).
    pub cookie_file: Option<PathBuf>,
}

impl SourceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cookie_string: std::env::var("COOKIE_STRING").ok(),
            cookie_file: env_opt("COOKIE_FILE").map(PathBuf::from),
        })
    }

    /// Resolve the configured source.
    pub fn resolve(&self) -> CookieSource {
        if let Some(ref inline) = self.cookie_string {
            CookieSource::Inline(inline.clone())
        } else if let Some(ref path) = self.cookie_file {
            CookieSource::File(path.clone())
        } else {
            CookieSource::Stdin
        }
    }

    /// Short description of the resolved source for the startup summary.
    pub fn describe(&self) -> &'static str {
        if self.cookie_string.is_some() {
            "inline (COOKIE_STRING)"
        } else if self.cookie_file.is_some() {
            "file (COOKIE_FILE)"
        } else {
            "stdin"
        }
    }
}
