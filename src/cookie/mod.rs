//! Cookie string parsing and lookup.
//!
//! The raw input is the semicolon-separated blob a browser exposes as its
//! cookie string. Parsing is total: malformed entries degrade to a name
//! with an absent value, never an error.

mod jar;
mod parse;

pub use jar::CookieJar;
pub use parse::{parse_cookie_string, EntryList};
