//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use serde_json::Value;
use tabled::{Table, Tabled};

use crate::UpdateResult;

/// Trait for human-readable key-value output.
///
/// Implemented by result types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

#[derive(Tabled)]
struct FieldRow {
    field: String,
    value: String,
}

impl PrettyPrint for UpdateResult {
    fn pretty_print(&self) -> String {
        match self {
            UpdateResult::Success {
                message,
                identifier,
                record,
            } => {
                let header = format!("Updated: {}", display_id(identifier.as_deref()));
                let divider = "─".repeat(header.chars().count().max(30));

                let mut lines = vec![header, divider, format!("Message:        {}", message)];

                if let Some(Value::Object(fields)) = record {
                    let rows: Vec<FieldRow> = fields
                        .iter()
                        .map(|(field, value)| FieldRow {
                            field: field.clone(),
                            value: display_value(value),
                        })
                        .collect();
                    lines.push(Table::new(rows).to_string());
                } else if let Some(other) = record {
                    lines.push(format!("Website:        {}", display_value(other)));
                }

                lines.join("\n")
            }
            UpdateResult::Failure { error, identifier } => {
                let header = format!("Update failed: {}", display_id(identifier.as_deref()));
                let divider = "─".repeat(header.chars().count().max(30));

                vec![header, divider, format!("Error:          {}", error)].join("\n")
            }
        }
    }
}

fn display_id(identifier: Option<&str>) -> &str {
    identifier.unwrap_or("(no id)")
}

// Strings print bare; everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_pretty_print_format() {
        let result = UpdateResult::Success {
            message: "ok".to_string(),
            identifier: Some("site-1".to_string()),
            record: Some(serde_json::json!({"title": "Home", "visits": 3})),
        };

        let output = result.pretty_print();
        assert!(output.starts_with("Updated: site-1"));
        assert!(output.contains("Message:"));
        assert!(output.contains("title"));
        assert!(output.contains("Home"));
        assert!(output.contains("visits"));
    }

    #[test]
    fn test_failure_pretty_print_format() {
        let result = UpdateResult::failure("not found", None);

        let output = result.pretty_print();
        assert!(output.starts_with("Update failed: (no id)"));
        assert!(output.contains("Error:          not found"));
    }
}
