pub mod rules;
pub mod validate;

use objectiv_schema::TrackerPlatform;
use objectiv_validation::{RuleSet, RuleSetConfig};

/// Loads the rule set from `rules` or falls back to the open taxonomy preset.
///
/// With a rule file, `platform` filters the rules and `log_prefix` fills in a
/// missing document-level prefix.
pub fn load_rule_set(
    rules: Option<&str>,
    platform: Option<TrackerPlatform>,
    log_prefix: Option<&str>,
) -> Result<RuleSet, Box<dyn std::error::Error>> {
    let Some(path) = rules else {
        let platform = platform.unwrap_or_default();
        tracing::debug!(%platform, "using open taxonomy preset");
        return Ok(RuleSet::open_taxonomy(platform, log_prefix));
    };

    let mut config = RuleSetConfig::from_path(path)
        .map_err(|e| format!("Failed to load rules from {}: {}", path, e))?;
    if config.log_prefix.is_none() {
        config.log_prefix = log_prefix.map(str::to_string);
    }
    let set = config
        .build()
        .map_err(|e| format!("Invalid rules in {}: {}", path, e))?;
    tracing::debug!(path, rules = set.len(), "loaded rule set");

    Ok(match platform {
        Some(platform) => set.for_platform(platform),
        None => set,
    })
}
