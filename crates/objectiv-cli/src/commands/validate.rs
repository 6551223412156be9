//! Validate command implementation.

use crate::input;
use crate::output;
use objectiv_schema::TrackerPlatform;
use objectiv_validation::{ConsoleReporter, Reporter, TracingReporter};
use serde_json::json;
use std::io::IsTerminal;

pub struct Options {
    pub events: Option<String>,
    pub rules: Option<String>,
    pub platform: Option<TrackerPlatform>,
    pub log_prefix: Option<String>,
    pub json: bool,
    pub strict: bool,
    pub max_events: Option<usize>,
    pub color: bool,
    pub log_diagnostics: bool,
}

pub fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let set = super::load_rule_set(
        options.rules.as_deref(),
        options.platform,
        options.log_prefix.as_deref(),
    )?;

    let raw = input::read_input(options.events.as_deref())?;
    let records = input::parse_records(&raw, options.max_events)?;

    let console = ConsoleReporter::new(options.color && std::io::stderr().is_terminal());
    let reporter: &dyn Reporter = if options.log_diagnostics {
        &TracingReporter
    } else {
        &console
    };
    let mut all_ok = true;
    let mut results = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let event = match input::parse_event(index, record) {
            Ok(event) => event,
            Err(e) => {
                all_ok = false;
                if options.json {
                    println!("{}", json!({ "event_index": index, "error": e.to_string() }));
                } else {
                    eprintln!("Error: {}", e);
                }
                results.push((index, "?".to_string(), None));
                continue;
            }
        };

        let diagnostics = set.validate(&event);
        all_ok = all_ok && diagnostics.is_empty();

        for diagnostic in &diagnostics {
            if options.json {
                println!("{}", output::diagnostic_json(index, diagnostic));
            } else {
                reporter.report(diagnostic);
            }
        }
        results.push((index, event.event_type.to_string(), Some(diagnostics.len())));
    }

    if !options.json {
        output::print_summary(&results);
    }

    if options.strict && !all_ok {
        std::process::exit(1);
    }

    Ok(())
}
