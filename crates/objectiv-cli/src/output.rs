//! Output formatting utilities.

use objectiv_validation::{Diagnostic, Rule, ValidationRule};
use serde_json::{json, Value};

/// Formats a diagnostic as a single JSON line.
pub fn diagnostic_json(event_index: usize, diagnostic: &Diagnostic) -> Value {
    let mut value = serde_json::to_value(diagnostic).unwrap_or_else(|_| json!({}));
    value["event_index"] = json!(event_index);
    value["text"] = json!(diagnostic.to_string());
    value
}

/// Describes a rule as JSON.
pub fn rule_json(rule: &Rule) -> Value {
    let mut value = json!({
        "kind": rule.kind(),
        "platform": rule.platform(),
        "context_name": rule.context_name().map(|c| c.as_str()),
        "event_types": rule.event_matches().allowed_event_types(),
        "log_prefix": rule.log_prefix(),
    });
    if let Rule::Location(location) = rule {
        value["once"] = json!(location.is_once());
        value["position"] = json!(location.position());
    }
    value
}

/// Prints the rule table header.
#[allow(clippy::print_literal)]
pub fn print_rule_header() {
    println!(
        "{:<24} {:<14} {:<24} {}",
        "KIND", "PLATFORM", "CONTEXT", "CONSTRAINTS"
    );
    println!("{}", "-".repeat(90));
}

/// Formats a rule as a table row.
pub fn format_rule_row(rule: &Rule) -> String {
    let kind = match serde_json::to_value(rule.kind()) {
        Ok(Value::String(s)) => s,
        _ => "?".to_string(),
    };
    let context = rule
        .context_name()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "*".to_string());

    let mut constraints = Vec::new();
    if let Rule::Location(location) = rule {
        if location.is_once() {
            constraints.push("once".to_string());
        }
        if let Some(position) = location.position() {
            constraints.push(format!("position={}", position));
        }
    }
    if let Some(types) = rule.event_matches().allowed_event_types() {
        let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
        constraints.push(format!("events={}", names.join(",")));
    }

    format!(
        "{:<24} {:<14} {:<24} {}",
        kind,
        rule.platform(),
        context,
        constraints.join(" ")
    )
}

/// Prints the per-event summary table.
pub fn print_summary(results: &[(usize, String, Option<usize>)]) {
    println!("{:<8} {:<24} {}", "EVENT", "TYPE", "DIAGNOSTICS");
    println!("{}", "-".repeat(50));
    let mut total = 0;
    for (index, event_type, count) in results {
        let shown = match count {
            Some(n) => {
                total += n;
                n.to_string()
            }
            None => "invalid".to_string(),
        };
        println!("{:<8} {:<24} {}", index, event_type, shown);
    }
    println!("{} events, {} diagnostics", results.len(), total);
}
