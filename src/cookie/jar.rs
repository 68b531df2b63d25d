//! Ephemeral cookie jar built from one raw cookie string.

use std::borrow::Cow;
use std::collections::HashMap;

use super::parse::parse_cookie_string;

/// Name-to-value mapping for a single raw cookie string.
///
/// Built fresh per run and discarded after use; it never writes back to
/// the source. A repeated name keeps the later occurrence.
#[derive(Debug, Default)]
pub struct CookieJar {
    entries: HashMap<String, Option<String>>,
}

impl CookieJar {
    /// Parse a raw cookie string into a jar.
    pub fn parse(raw: &str) -> Self {
        let parsed = parse_cookie_string(raw);
        let mut entries = HashMap::with_capacity(parsed.len());
        for (name, value) in parsed {
            // Insertion-order fold: later duplicates overwrite.
            entries.insert(name, value);
        }
        Self { entries }
    }

    /// Look up a cookie value verbatim.
    ///
    /// `None` when the name is missing or appeared without a value.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|v| v.as_deref())
    }

    /// Whether the name appeared at all, with or without a value.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Percent-decoded view of a value (`%xx` sequences decoded, lossy
    /// UTF-8). The report path does not use this; output stays verbatim.
    pub fn get_decoded(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| {
            if v.contains('%') {
                percent_encoding::percent_decode_str(v).decode_utf8_lossy()
            } else {
                Cow::Borrowed(v)
            }
        })
    }

    /// Number of distinct cookie names in the jar.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the raw string held no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
