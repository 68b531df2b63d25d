//! Report rendering for extracted cookie values.
//!
//! The report is the program's only stdout output; diagnostics go to the
//! tracing subscriber on stderr and never interleave with it.

use std::io::{self, Write};

use crate::config::{OutputFormat, ReportConfig};
use crate::cookie::CookieJar;

/// Looked-up results for the requested cookie names, in request order.
#[derive(Debug)]
pub struct Report {
    lines: Vec<(String, Option<String>)>,
}

impl Report {
    /// Look up each requested name in the jar.
    ///
    /// A name that is missing, or present without a value, records as
    /// absent; lookups never fail.
    pub fn build(jar: &CookieJar, keys: &[String]) -> Self {
        let lines = keys
            .iter()
            .map(|name| (name.clone(), jar.get(name).map(str::to_string)))
            .collect();
        Self { lines }
    }

    /// Render `<name>: <value>` lines, with `marker` in place of absent
    /// values. Values are emitted verbatim.
    pub fn render_text(&self, marker: &str) -> String {
        let mut out = String::new();
        for (name, value) in &self.lines {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value.as_deref().unwrap_or(marker));
            out.push('\n');
        }
        out
    }

    /// Render a single JSON object mapping each requested name to its
    /// value, `null` when absent.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(self.lines.len());
        for (name, value) in &self.lines {
            let value = match value {
                Some(v) => serde_json::Value::String(v.clone()),
                None => serde_json::Value::Null,
            };
            map.insert(name.clone(), value);
        }
        serde_json::Value::Object(map)
    }

    /// Write the report in the configured format.
    pub fn write_to<W: Write>(&self, out: &mut W, config: &ReportConfig) -> io::Result<()> {
        match config.format {
            OutputFormat::Text => out.write_all(self.render_text(&config.missing_marker).as_bytes()),
            OutputFormat::Json => writeln!(out, "{}", self.to_json()),
        }
    }
}
