//! Declarative rule configuration.
//!
//! A rule set document looks like:
//!
//! ```json
//! {
//!   "platform": "browser",
//!   "log_prefix": "MyApp",
//!   "rules": [
//!     { "kind": "missing_global_context", "context_name": "PathContext", "event_types": ["PressEvent"] },
//!     { "kind": "unique_global_context" },
//!     { "kind": "location_context", "context_name": "RootLocationContext", "once": true, "position": 0 }
//!   ]
//! }
//! ```
//!
//! Rule-level `platform` and `log_prefix` override the document-level ones.

use crate::errors::ConfigError;
use crate::rules::{EventMatches, LocationContextRule, MissingContextRule, Rule, UniqueContextRule};
use crate::ruleset::RuleSet;
use objectiv_schema::{ContextName, EventTypeName, TrackerPlatform};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level rule set document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSetConfig {
    /// Platform tag applied to rules that do not set their own.
    #[serde(default)]
    pub platform: TrackerPlatform,
    /// Log prefix applied to rules that do not set their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_prefix: Option<String>,
    /// Rules, in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// One rule entry, tagged by `kind`.
///
/// Unknown keys are rejected, so a misspelled flag fails to parse instead of
/// silently loosening the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum RuleConfig {
    /// Builds a [`MissingContextRule`].
    MissingGlobalContext {
        /// Required global context type.
        context_name: String,
        /// Only validate events of these types (all events when absent).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_types: Option<Vec<String>>,
        /// Platform override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<TrackerPlatform>,
        /// Log prefix override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        log_prefix: Option<String>,
    },
    /// Builds a [`UniqueContextRule`].
    UniqueGlobalContext {
        /// Only validate events of these types (all events when absent).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_types: Option<Vec<String>>,
        /// Platform override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<TrackerPlatform>,
        /// Log prefix override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        log_prefix: Option<String>,
    },
    /// Builds a [`LocationContextRule`].
    LocationContext {
        /// Required location context type.
        context_name: String,
        /// Require exactly one occurrence.
        #[serde(default)]
        once: bool,
        /// Required index; needs `once`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<usize>,
        /// Only validate events of these types (all events when absent).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_types: Option<Vec<String>>,
        /// Platform override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<TrackerPlatform>,
        /// Log prefix override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        log_prefix: Option<String>,
    },
}

impl RuleSetConfig {
    /// Parses a rule set document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a rule set document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Builds the rules, validating names and flags.
    pub fn build(&self) -> Result<RuleSet, ConfigError> {
        self.rules
            .iter()
            .map(|entry| entry.build(self.platform, self.log_prefix.as_deref()))
            .collect()
    }
}

impl RuleConfig {
    /// `(event_types, platform, log_prefix)` shared by every entry.
    fn common(&self) -> (Option<&[String]>, Option<TrackerPlatform>, Option<&str>) {
        match self {
            RuleConfig::MissingGlobalContext {
                event_types,
                platform,
                log_prefix,
                ..
            }
            | RuleConfig::UniqueGlobalContext {
                event_types,
                platform,
                log_prefix,
            }
            | RuleConfig::LocationContext {
                event_types,
                platform,
                log_prefix,
                ..
            } => (event_types.as_deref(), *platform, log_prefix.as_deref()),
        }
    }

    /// Builds the rule, falling back to the given defaults for platform and prefix.
    pub fn build(
        &self,
        default_platform: TrackerPlatform,
        default_log_prefix: Option<&str>,
    ) -> Result<Rule, ConfigError> {
        let (event_types, platform, log_prefix) = self.common();
        let platform = platform.unwrap_or(default_platform);
        let log_prefix = log_prefix.or(default_log_prefix).unwrap_or_default();
        let event_matches = match event_types {
            Some(types) => EventMatches::event_types(
                types
                    .iter()
                    .map(|name| EventTypeName::parse(name.as_str()))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            None => EventMatches::always(),
        };

        let rule: Rule = match self {
            RuleConfig::MissingGlobalContext { context_name, .. } => {
                MissingContextRule::new(platform, ContextName::parse(context_name.as_str())?)
                    .with_event_matches(event_matches)
                    .with_log_prefix(log_prefix)
                    .into()
            }
            RuleConfig::UniqueGlobalContext { .. } => UniqueContextRule::new(platform)
                .with_event_matches(event_matches)
                .with_log_prefix(log_prefix)
                .into(),
            RuleConfig::LocationContext {
                context_name,
                once,
                position,
                ..
            } => LocationContextRule::new(platform, ContextName::parse(context_name.as_str())?)
                .with_flags(*once, *position)?
                .with_event_matches(event_matches)
                .with_log_prefix(log_prefix)
                .into(),
        };
        Ok(rule)
    }
}
