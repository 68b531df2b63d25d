//! Raw cookie string tokenization.

/// Parsed cookie entries in source order.
///
/// The value is `None` for an entry carrying no `=` (a bare name).
pub type EntryList = Vec<(String, Option<String>)>;

/// Parse a raw cookie string into name/value entries.
///
/// Entries are separated by `;` and trimmed of surrounding whitespace.
/// Each entry splits on the first `=`; everything after it is the value,
/// verbatim. No percent-decoding happens here, and whitespace inside an
/// entry is preserved.
pub fn parse_cookie_string(raw: &str) -> EntryList {
    let entry_count = raw.matches(';').count() + 1;
    let mut entries = Vec::with_capacity(entry_count.min(16));

    for entry in raw.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        match entry.find('=') {
            Some(pos) => {
                let name = &entry[..pos];
                if !name.is_empty() {
                    entries.push((name.to_string(), Some(entry[pos + 1..].to_string())));
                }
            }
            None => entries.push((entry.to_string(), None)),
        }
    }

    entries
}
