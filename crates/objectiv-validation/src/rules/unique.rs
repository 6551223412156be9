use super::{RuleBase, RuleKind, ValidationRule};
use crate::diagnostic::{Diagnostic, DocsSection, ViolationKind};
use objectiv_schema::{ContextName, Event, TrackerPlatform};
use std::collections::HashMap;

/// Requires every `(type, id)` pair among the global contexts to be unique.
///
/// Applies to all context types at once. Each duplicated pair is reported a
/// single time, in the order the pair first appears in `global_contexts`.
#[derive(Debug, Clone)]
pub struct UniqueContextRule {
    base: RuleBase,
}

impl UniqueContextRule {
    /// Creates the rule.
    pub fn new(platform: TrackerPlatform) -> Self {
        Self {
            base: RuleBase::new(platform),
        }
    }
}

rule_options!(UniqueContextRule);

impl ValidationRule for UniqueContextRule {
    fn kind(&self) -> RuleKind {
        RuleKind::UniqueGlobalContext
    }

    fn platform(&self) -> TrackerPlatform {
        self.base.platform
    }

    fn context_name(&self) -> Option<&ContextName> {
        None
    }

    fn applies_to(&self, event: &Event) -> bool {
        self.base.event_matches.matches(event)
    }

    fn validate(&self, event: &Event) -> Vec<Diagnostic> {
        if !self.applies_to(event) {
            return Vec::new();
        }

        // (type, id) -> count, plus first-seen order
        let mut counts: HashMap<(&ContextName, &str), usize> = HashMap::new();
        let mut order = Vec::new();
        for context in &event.global_contexts {
            let key = (&context.context_type, context.id.as_str());
            let count = counts.entry(key).or_insert(0);
            if *count == 0 {
                order.push(key);
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter(|key| counts[key] > 1)
            .map(|(context_name, id)| {
                Diagnostic::new(
                    RuleKind::UniqueGlobalContext,
                    ViolationKind::DuplicateIdentity { id: id.to_string() },
                    DocsSection::GlobalContexts,
                    context_name,
                    &event.event_type,
                    self.base.log_prefix(),
                )
            })
            .collect()
    }
}
