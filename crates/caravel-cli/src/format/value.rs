//! Shared value projections used by the entity formatters.

use caravel_core::Execution;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Render a timestamp the way the service reports them
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Render an optional timestamp, empty when absent
pub fn format_opt_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp.map(format_timestamp).unwrap_or_default()
}

/// Pretty-print a JSON-valued field.
///
/// A string value is treated as embedded JSON text and re-indented; if it
/// does not parse it is rendered verbatim rather than failing the whole
/// display. An absent field renders as the empty string.
pub fn pretty_json(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(parsed) => serde_json::to_string_pretty(&parsed).unwrap_or_else(|_| text.clone()),
            Err(_) => text.clone(),
        },
        Some(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
    }
}

fn format_execution(execution: &Execution) -> String {
    format!("{} {}", execution.id, execution.status)
}

/// The most recent execution, rendered `"<id> <status>"`.
/// Empty string when the entity has never run.
pub fn last_execution(executions: &[Execution]) -> String {
    executions
        .iter()
        .max_by_key(|e| e.created_at)
        .map(format_execution)
        .unwrap_or_default()
}

/// Full execution history, ascending by creation timestamp,
/// one `"<id> <status>"` line per execution.
pub fn execution_history(executions: &[Execution]) -> String {
    let mut ordered: Vec<&Execution> = executions.iter().collect();
    ordered.sort_by_key(|e| e.created_at);
    ordered
        .iter()
        .map(|e| format_execution(e))
        .collect::<Vec<_>>()
        .join("\n")
}
