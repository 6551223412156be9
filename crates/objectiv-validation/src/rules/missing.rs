use super::{RuleBase, RuleKind, ValidationRule};
use crate::diagnostic::{Diagnostic, DocsSection, ViolationKind};
use objectiv_schema::{ContextName, Event, TrackerPlatform};

/// Requires at least one global context of `context_name`.
#[derive(Debug, Clone)]
pub struct MissingContextRule {
    base: RuleBase,
    context_name: ContextName,
}

impl MissingContextRule {
    /// Creates a rule requiring `context_name` among the global contexts.
    pub fn new(platform: TrackerPlatform, context_name: impl Into<ContextName>) -> Self {
        Self {
            base: RuleBase::new(platform),
            context_name: context_name.into(),
        }
    }
}

rule_options!(MissingContextRule);

impl ValidationRule for MissingContextRule {
    fn kind(&self) -> RuleKind {
        RuleKind::MissingGlobalContext
    }

    fn platform(&self) -> TrackerPlatform {
        self.base.platform
    }

    fn context_name(&self) -> Option<&ContextName> {
        Some(&self.context_name)
    }

    fn applies_to(&self, event: &Event) -> bool {
        self.base.event_matches.matches(event)
    }

    fn validate(&self, event: &Event) -> Vec<Diagnostic> {
        if !self.applies_to(event) {
            return Vec::new();
        }

        if event.global_contexts_of(&self.context_name).next().is_some() {
            return Vec::new();
        }

        vec![Diagnostic::new(
            RuleKind::MissingGlobalContext,
            ViolationKind::Missing,
            DocsSection::GlobalContexts,
            &self.context_name,
            &event.event_type,
            self.base.log_prefix(),
        )]
    }
}
