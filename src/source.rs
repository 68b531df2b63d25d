//! Cookie string acquisition.
//!
//! The browser's ambient cookie global becomes an explicit input here:
//! inline text, a file, or stdin. Whatever the source, the result is one
//! raw cookie string handed to the parser as-is.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::debug;

/// Where the raw cookie string comes from.
#[derive(Clone, Debug)]
pub enum CookieSource {
    /// Inline text from configuration.
    Inline(String),
    /// Contents of a file.
    File(PathBuf),
    /// Standard input, read to EOF.
    Stdin,
}

impl CookieSource {
    /// Read the raw cookie string from this source.
    ///
    /// Trailing line endings are trimmed for file and stdin sources so a
    /// pasted-then-saved blob parses the same as inline text. Inline text
    /// is used as-is.
    pub fn read(&self) -> Result<String, SourceError> {
        match self {
            CookieSource::Inline(text) => Ok(text.clone()),
            CookieSource::File(path) => {
                debug!("reading cookie string from {}", path.display());
                let text = fs::read_to_string(path).map_err(|error| SourceError::Read {
                    source: path.display().to_string(),
                    error,
                })?;
                Ok(trim_trailing_newlines(text))
            }
            CookieSource::Stdin => {
                debug!("reading cookie string from stdin");
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|error| SourceError::Read {
                        source: "stdin".to_string(),
                        error,
                    })?;
                Ok(trim_trailing_newlines(text))
            }
        }
    }
}

fn trim_trailing_newlines(mut text: String) -> String {
    while text.ends_with('\n') || text.ends_with('\r') {
        text.pop();
    }
    text
}

/// Error type for cookie source reads.
#[derive(Debug)]
pub enum SourceError {
    /// Failed to read the raw cookie string.
    Read { source: String, error: io::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Read { source, error } => {
                write!(f, "failed to read cookie string from {}: {}", source, error)
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Read { error, .. } => Some(error),
        }
    }
}
