//! Rule contract shared by the three rule families.

use crate::diagnostic::Diagnostic;
use crate::reporter::Reporter;
use objectiv_schema::{ContextName, Event, EventTypeName, TrackerPlatform};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

macro_rules! rule_options {
    ($rule:ident) => {
        impl $rule {
            /// Restricts the rule to events accepted by `event_matches`.
            pub fn with_event_matches(mut self, event_matches: $crate::rules::EventMatches) -> Self {
                self.base.event_matches = event_matches;
                self
            }

            /// Sets the prefix rendered as `｢objectiv:<prefix>｣`; empty means none.
            pub fn with_log_prefix(mut self, log_prefix: impl Into<String>) -> Self {
                let prefix = log_prefix.into();
                self.base.log_prefix = if prefix.is_empty() { None } else { Some(prefix) };
                self
            }

            /// Configured predicate.
            pub fn event_matches(&self) -> &$crate::rules::EventMatches {
                &self.base.event_matches
            }

            /// Configured log prefix.
            pub fn log_prefix(&self) -> Option<&str> {
                self.base.log_prefix()
            }
        }
    };
}

mod location;
mod missing;
mod unique;

pub use location::LocationContextRule;
pub use missing::MissingContextRule;
pub use unique::UniqueContextRule;

/// Predicate deciding whether a rule applies to an event.
///
/// Defaults to matching every event.
#[derive(Clone)]
pub struct EventMatches {
    predicate: Arc<dyn Fn(&Event) -> bool + Send + Sync>,
    event_types: Option<Vec<EventTypeName>>,
}

impl EventMatches {
    /// Matches every event.
    pub fn always() -> Self {
        Self {
            predicate: Arc::new(|_| true),
            event_types: None,
        }
    }

    /// Wraps an arbitrary predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Event) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            event_types: None,
        }
    }

    /// Matches events whose `_type` is one of `event_types`.
    pub fn event_types(event_types: impl IntoIterator<Item = EventTypeName>) -> Self {
        let allowed: Vec<EventTypeName> = event_types.into_iter().collect();
        let list = allowed.clone();
        Self {
            predicate: Arc::new(move |event: &Event| allowed.contains(&event.event_type)),
            event_types: Some(list),
        }
    }

    /// Evaluates the predicate.
    pub fn matches(&self, event: &Event) -> bool {
        (self.predicate)(event)
    }

    /// Event type allow list, when the predicate was built from one.
    pub fn allowed_event_types(&self) -> Option<&[EventTypeName]> {
        self.event_types.as_deref()
    }
}

impl Default for EventMatches {
    fn default() -> Self {
        Self::always()
    }
}

impl fmt::Debug for EventMatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.event_types {
            Some(types) => f.debug_tuple("EventMatches").field(types).finish(),
            None => f.write_str("EventMatches(<fn>)"),
        }
    }
}

/// Rule family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// [`MissingContextRule`]
    MissingGlobalContext,
    /// [`UniqueContextRule`]
    UniqueGlobalContext,
    /// [`LocationContextRule`]
    LocationContext,
}

/// Contract implemented by every rule.
pub trait ValidationRule {
    /// Rule family.
    fn kind(&self) -> RuleKind;

    /// Platform tag; informational only.
    fn platform(&self) -> TrackerPlatform;

    /// Context type the rule concerns, if it targets a single one.
    fn context_name(&self) -> Option<&ContextName>;

    /// Whether the rule applies to `event`.
    fn applies_to(&self, event: &Event) -> bool;

    /// Checks `event`, returning one diagnostic per violation.
    ///
    /// Returns nothing when [`applies_to`](Self::applies_to) is false.
    fn validate(&self, event: &Event) -> Vec<Diagnostic>;

    /// Validates `event` and forwards every diagnostic to `reporter`.
    ///
    /// Returns the number of diagnostics reported.
    fn validate_and_report(&self, event: &Event, reporter: &dyn Reporter) -> usize {
        let diagnostics = self.validate(event);
        for diagnostic in &diagnostics {
            reporter.report(diagnostic);
        }
        diagnostics.len()
    }
}

/// Configuration every rule carries.
#[derive(Debug, Clone, Default)]
pub(crate) struct RuleBase {
    pub(crate) platform: TrackerPlatform,
    pub(crate) event_matches: EventMatches,
    pub(crate) log_prefix: Option<String>,
}

impl RuleBase {
    pub(crate) fn new(platform: TrackerPlatform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    pub(crate) fn log_prefix(&self) -> Option<&str> {
        self.log_prefix.as_deref()
    }
}

/// Closed set of rule families.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Required global context.
    Missing(MissingContextRule),
    /// Unique global contexts.
    Unique(UniqueContextRule),
    /// Required location context.
    Location(LocationContextRule),
}

impl Rule {
    fn inner(&self) -> &dyn ValidationRule {
        match self {
            Rule::Missing(rule) => rule,
            Rule::Unique(rule) => rule,
            Rule::Location(rule) => rule,
        }
    }

    /// Configured log prefix.
    pub fn log_prefix(&self) -> Option<&str> {
        match self {
            Rule::Missing(rule) => rule.log_prefix(),
            Rule::Unique(rule) => rule.log_prefix(),
            Rule::Location(rule) => rule.log_prefix(),
        }
    }

    /// Configured predicate.
    pub fn event_matches(&self) -> &EventMatches {
        match self {
            Rule::Missing(rule) => rule.event_matches(),
            Rule::Unique(rule) => rule.event_matches(),
            Rule::Location(rule) => rule.event_matches(),
        }
    }
}

impl ValidationRule for Rule {
    fn kind(&self) -> RuleKind {
        self.inner().kind()
    }

    fn platform(&self) -> TrackerPlatform {
        self.inner().platform()
    }

    fn context_name(&self) -> Option<&ContextName> {
        self.inner().context_name()
    }

    fn applies_to(&self, event: &Event) -> bool {
        self.inner().applies_to(event)
    }

    fn validate(&self, event: &Event) -> Vec<Diagnostic> {
        self.inner().validate(event)
    }
}

impl From<MissingContextRule> for Rule {
    fn from(rule: MissingContextRule) -> Self {
        Rule::Missing(rule)
    }
}

impl From<UniqueContextRule> for Rule {
    fn from(rule: UniqueContextRule) -> Self {
        Rule::Unique(rule)
    }
}

impl From<LocationContextRule> for Rule {
    fn from(rule: LocationContextRule) -> Self {
        Rule::Location(rule)
    }
}
