//! Key set, marker, and output format configuration.

use crate::helpers::*;

/// COOKIE_KEYS selects which names are reported, in order
#[test]
fn test_custom_key_set() {
    let result = run(
        &[
            ("COOKIE_STRING", "ltuid=7; ltoken=abc; ltuid_v2=42"),
            ("COOKIE_KEYS", "ltuid,ltoken"),
        ],
        None,
    );

    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "ltuid: 7\nltoken: abc\n");
}

/// The redemption pair works like any other key set
#[test]
fn test_redemption_key_set() {
    let result = run(
        &[
            ("COOKIE_STRING", "account_id=123; cookie_token=tok"),
            ("COOKIE_KEYS", "account_id,cookie_token"),
        ],
        None,
    );

    assert!(result.success());
    assert_eq!(result.stdout, "account_id: 123\ncookie_token: tok\n");
}

/// MISSING_MARKER replaces the default `undefined` text
#[test]
fn test_custom_missing_marker() {
    let result = run(
        &[
            ("COOKIE_STRING", "ltuid_v2=9"),
            ("MISSING_MARKER", "<absent>"),
        ],
        None,
    );

    assert!(result.success());
    assert_eq!(result.stdout, "ltuid_v2: 9\nltoken_v2: <absent>\n");
}

/// JSON mode emits one object with null for missing values
#[test]
fn test_json_output() {
    let result = run(
        &[
            ("COOKIE_STRING", "ltuid_v2=42"),
            ("OUTPUT_FORMAT", "json"),
        ],
        None,
    );

    assert!(result.success(), "stderr: {}", result.stderr);
    let parsed: serde_json::Value =
        serde_json::from_str(&result.stdout).expect("stdout is valid JSON");
    assert_eq!(
        parsed,
        serde_json::json!({"ltuid_v2": "42", "ltoken_v2": null})
    );
}

/// An unrecognized OUTPUT_FORMAT is a configuration error
#[test]
fn test_invalid_output_format_fails() {
    let result = run(
        &[("COOKIE_STRING", "ltuid_v2=42"), ("OUTPUT_FORMAT", "yaml")],
        None,
    );

    assert!(!result.success());
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("OUTPUT_FORMAT"));
}

/// An empty entry in COOKIE_KEYS is a configuration error
#[test]
fn test_invalid_key_set_fails() {
    let result = run(
        &[("COOKIE_STRING", "ltuid_v2=42"), ("COOKIE_KEYS", "a,,b")],
        None,
    );

    assert!(!result.success());
    assert!(result.stderr.contains("COOKIE_KEYS"));
}
