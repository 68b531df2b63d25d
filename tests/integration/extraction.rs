//! Extraction behavior over the default key set.

use crate::helpers::*;

/// Both session cookies present among others
#[test]
fn test_reports_both_session_cookies() {
    let result = run(&[("COOKIE_STRING", "a=1; ltuid_v2=42; ltoken_v2=xyz")], None);

    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "ltuid_v2: 42\nltoken_v2: xyz\n");
}

/// Empty cookie string is success, both keys missing
#[test]
fn test_empty_cookie_string_reports_undefined() {
    let result = run(&[("COOKIE_STRING", "")], None);

    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "ltuid_v2: undefined\nltoken_v2: undefined\n");
}

/// Duplicate names keep the later occurrence
#[test]
fn test_duplicate_names_keep_last_value() {
    let result = run(&[("COOKIE_STRING", "ltuid_v2=1; ltuid_v2=2")], None);

    assert!(result.success());
    assert_eq!(result.stdout, "ltuid_v2: 2\nltoken_v2: undefined\n");
}

/// A bare entry without `=` degrades gracefully
#[test]
fn test_bare_entry_does_not_break_parsing() {
    let result = run(&[("COOKIE_STRING", "flag; ltuid_v2=9")], None);

    assert!(result.success());
    assert_eq!(result.stdout, "ltuid_v2: 9\nltoken_v2: undefined\n");
}

/// Values come out verbatim: no percent-decoding, `=` inside kept whole
#[test]
fn test_values_are_reported_verbatim() {
    let result = run(
        &[("COOKIE_STRING", "ltuid_v2=42%3D; ltoken_v2=a=b")],
        None,
    );

    assert!(result.success());
    assert_eq!(result.stdout, "ltuid_v2: 42%3D\nltoken_v2: a=b\n");
}

/// Two runs over the same input produce identical output
#[test]
fn test_repeated_runs_are_idempotent() {
    let envs = [("COOKIE_STRING", "a=1; ltuid_v2=42; ltoken_v2=xyz")];
    let first = run(&envs, None);
    let second = run(&envs, None);

    assert!(first.success());
    assert!(second.success());
    assert_eq!(first.stdout, second.stdout);
}

/// Whitespace around entries is trimmed before splitting
#[test]
fn test_entry_whitespace_is_trimmed() {
    let result = run(
        &[("COOKIE_STRING", "  ltuid_v2=42 ;  ltoken_v2=xyz  ")],
        None,
    );

    assert!(result.success());
    assert_eq!(result.stdout, "ltuid_v2: 42\nltoken_v2: xyz\n");
}
