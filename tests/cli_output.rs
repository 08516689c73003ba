//! Tests for CLI output formatting.
//!
//! - JSON output with --json flag
//! - Pretty-print output as default

use siteupdate::{PrettyPrint, UpdateResult};

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_is_tagged() {
    let json_output = serde_json::to_string_pretty(&make_success()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["websiteId"], "site-1");
    assert_eq!(parsed["website"]["title"], "Landing");
}

#[test]
fn test_json_output_parses_back() {
    let failure = UpdateResult::failure("not found", Some("site-1".to_string()));
    let json_output = serde_json::to_string(&failure).unwrap();

    let parsed: UpdateResult = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed, failure);
}

// ============================================================================
// Pretty-Print Tests
// ============================================================================

#[test]
fn test_default_output_is_not_json() {
    let pretty_output = make_success().pretty_print();

    let parse_result: Result<serde_json::Value, _> = serde_json::from_str(&pretty_output);
    assert!(
        parse_result.is_err(),
        "Default output should NOT be valid JSON"
    );
}

#[test]
fn test_success_pretty_print_shows_record_table() {
    let output = make_success().pretty_print();

    assert!(output.contains("site-1"), "Should show identifier");
    assert!(output.contains("field"), "Should have table header");
    assert!(output.contains("Landing"), "Should show string field bare");
    assert!(output.contains("[\"hero\"]"), "Should show non-strings as JSON");
}

#[test]
fn test_failure_pretty_print_shows_error() {
    let output = UpdateResult::failure("Website not found", Some("site-9".to_string()))
        .pretty_print();

    assert!(output.contains("site-9"));
    assert!(output.contains("Website not found"));
    assert!(output.contains("Error"));
}

// ============================================================================
// Test Helpers
// ============================================================================

fn make_success() -> UpdateResult {
    serde_json::from_value(serde_json::json!({
        "status": "success",
        "message": "Website updated successfully",
        "websiteId": "site-1",
        "website": {
            "title": "Landing",
            "sections": ["hero"]
        }
    }))
    .unwrap()
}
