//! Rules command implementation.

use crate::output;
use objectiv_schema::TrackerPlatform;

pub fn run(
    rules: Option<String>,
    platform: Option<TrackerPlatform>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let set = super::load_rule_set(rules.as_deref(), platform, None)?;

    if json {
        let listing: Vec<_> = set.rules().iter().map(output::rule_json).collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        output::print_rule_header();
        for rule in set.rules() {
            println!("{}", output::format_rule_row(rule));
        }
    }

    Ok(())
}
