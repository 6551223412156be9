use crate::diagnostic::Diagnostic;
use crate::reporter::Reporter;
use crate::rules::{LocationContextRule, MissingContextRule, Rule, UniqueContextRule, ValidationRule};
use objectiv_schema::{Event, GlobalContextName, LocationContextName, TrackerPlatform};

/// Ordered collection of rules validated together.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: impl Into<Rule>) {
        self.rules.push(rule.into());
    }

    /// Appends a rule, builder style.
    pub fn with(mut self, rule: impl Into<Rule>) -> Self {
        self.push(rule);
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules tagged with `platform` or with the core platform.
    pub fn for_platform(&self, platform: TrackerPlatform) -> RuleSet {
        RuleSet {
            rules: self
                .rules
                .iter()
                .filter(|rule| {
                    let tag = rule.platform();
                    tag == platform || tag == TrackerPlatform::Core
                })
                .cloned()
                .collect(),
        }
    }

    /// Runs every rule against `event`, concatenating diagnostics in rule order.
    pub fn validate(&self, event: &Event) -> Vec<Diagnostic> {
        let diagnostics: Vec<Diagnostic> = self
            .rules
            .iter()
            .flat_map(|rule| rule.validate(event))
            .collect();
        tracing::debug!(
            event_type = %event.event_type,
            rules = self.rules.len(),
            diagnostics = diagnostics.len(),
            "validated event"
        );
        diagnostics
    }

    /// Validates `event` and forwards each diagnostic to `reporter`.
    ///
    /// Returns the number of diagnostics reported.
    pub fn validate_and_report(&self, event: &Event, reporter: &dyn Reporter) -> usize {
        let diagnostics = self.validate(event);
        for diagnostic in &diagnostics {
            reporter.report(diagnostic);
        }
        diagnostics.len()
    }

    /// Default rules of the open taxonomy for `platform`.
    ///
    /// - `ApplicationContext` must be a global context of every event
    /// - global contexts must be unique per `(type, id)`
    /// - `RootLocationContext` must appear once, at the top of the location stack
    /// - on every platform but core, `PathContext` must be a global context
    pub fn open_taxonomy(platform: TrackerPlatform, log_prefix: Option<&str>) -> RuleSet {
        let prefix = log_prefix.unwrap_or_default();
        let mut set = RuleSet::new()
            .with(
                MissingContextRule::new(platform, GlobalContextName::ApplicationContext)
                    .with_log_prefix(prefix),
            )
            .with(UniqueContextRule::new(platform).with_log_prefix(prefix))
            .with(
                LocationContextRule::new(platform, LocationContextName::RootLocationContext)
                    .once_at(0)
                    .with_log_prefix(prefix),
            );

        if platform != TrackerPlatform::Core {
            set.push(
                MissingContextRule::new(platform, GlobalContextName::PathContext)
                    .with_log_prefix(prefix),
            );
        }
        set
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        RuleSet {
            rules: iter.into_iter().collect(),
        }
    }
}
