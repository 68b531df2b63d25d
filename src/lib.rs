//! cookie_peek - session cookie extraction from a raw browser cookie string.
//!
//! This crate parses the semicolon-separated blob a user copies out of a
//! browser's cookie store and reports the values of selected cookie names,
//! by default the HoYoLab v2 session pair (`ltuid_v2`, `ltoken_v2`).
//!
//! # Behavior
//!
//! - **Total parsing**: malformed entries (no `=`) degrade to a name with
//!   an absent value; parsing never fails.
//! - **Last-write-wins**: a repeated cookie name keeps the later value.
//! - **Verbatim output**: values are reported exactly as they appear in
//!   the raw string; a missing value renders as a marker (`undefined` by
//!   default).
//!
//! # Example
//!
//! ```rust,ignore
//! use cookie_peek::cookie::CookieJar;
//!
//! let jar = CookieJar::parse("a=1; ltuid_v2=42; ltoken_v2=xyz");
//! assert_eq!(jar.get("ltuid_v2"), Some("42"));
//! assert_eq!(jar.get("ltoken_v2"), Some("xyz"));
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build identifier injected by build.rs (empty outside tagged builds)
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 ()" without a build id
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod cookie;
pub mod logging;
pub mod report;
pub mod source;

// Re-exports for convenience
pub use config::Config;
pub use cookie::CookieJar;
pub use report::Report;
pub use source::CookieSource;
