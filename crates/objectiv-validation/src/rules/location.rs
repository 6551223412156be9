use super::{RuleBase, RuleKind, ValidationRule};
use crate::diagnostic::{Diagnostic, DocsSection, ViolationKind};
use crate::errors::ConfigError;
use objectiv_schema::{ContextName, Event, TrackerPlatform};

/// How often, and where, the context must appear in the location stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Occurrence {
    AtLeastOnce,
    Once,
    OnceAt(usize),
}

/// Requires a location context of `context_name` in the location stack.
///
/// Optionally the context must appear exactly once (`once`), and optionally
/// at a fixed index (`position`, only together with `once`). At most one
/// diagnostic is produced per event; absence is checked before uniqueness,
/// uniqueness before position.
#[derive(Debug, Clone)]
pub struct LocationContextRule {
    base: RuleBase,
    context_name: ContextName,
    occurrence: Occurrence,
}

impl LocationContextRule {
    /// Creates a rule requiring `context_name` anywhere in the location stack.
    pub fn new(platform: TrackerPlatform, context_name: impl Into<ContextName>) -> Self {
        Self {
            base: RuleBase::new(platform),
            context_name: context_name.into(),
            occurrence: Occurrence::AtLeastOnce,
        }
    }

    /// Requires exactly one occurrence.
    pub fn once(mut self) -> Self {
        self.occurrence = match self.occurrence {
            Occurrence::OnceAt(position) => Occurrence::OnceAt(position),
            _ => Occurrence::Once,
        };
        self
    }

    /// Requires exactly one occurrence, at index `position`.
    pub fn once_at(mut self, position: usize) -> Self {
        self.occurrence = Occurrence::OnceAt(position);
        self
    }

    /// Applies the `once` / `position` flags of a declarative configuration.
    ///
    /// `position` without `once` is rejected.
    pub fn with_flags(self, once: bool, position: Option<usize>) -> Result<Self, ConfigError> {
        match (once, position) {
            (false, None) => Ok(self),
            (true, None) => Ok(self.once()),
            (true, Some(position)) => Ok(self.once_at(position)),
            (false, Some(_)) => Err(ConfigError::PositionWithoutOnce {
                context_name: self.context_name.to_string(),
            }),
        }
    }

    /// Whether exactly one occurrence is required.
    pub fn is_once(&self) -> bool {
        !matches!(self.occurrence, Occurrence::AtLeastOnce)
    }

    /// Required index, if any.
    pub fn position(&self) -> Option<usize> {
        match self.occurrence {
            Occurrence::OnceAt(position) => Some(position),
            _ => None,
        }
    }

    fn diagnostic(&self, violation: ViolationKind, event: &Event) -> Diagnostic {
        Diagnostic::new(
            RuleKind::LocationContext,
            violation,
            DocsSection::LocationContexts,
            &self.context_name,
            &event.event_type,
            self.base.log_prefix(),
        )
    }
}

rule_options!(LocationContextRule);

impl ValidationRule for LocationContextRule {
    fn kind(&self) -> RuleKind {
        RuleKind::LocationContext
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

        let mut matches = event.location_contexts_of(&self.context_name);
        let Some((index, _)) = matches.next() else {
            return vec![self.diagnostic(ViolationKind::Missing, event)];
        };

        if self.is_once() && matches.next().is_some() {
            return vec![self.diagnostic(ViolationKind::Duplicate, event)];
        }

        match self.position() {
            Some(expected) if expected != index => vec![self.diagnostic(
                ViolationKind::WrongPosition {
                    expected,
                    actual: index,
                },
                event,
            )],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_keeps_position() {
        let rule = LocationContextRule::new(TrackerPlatform::Core, "ContentContext")
            .once_at(2)
            .once();
        assert_eq!(rule.position(), Some(2));
        assert!(rule.is_once());
    }

    #[test]
    fn position_without_once_is_rejected() {
        let err = LocationContextRule::new(TrackerPlatform::Core, "ContentContext")
            .with_flags(false, Some(0))
            .unwrap_err();
        assert!(matches!(err, ConfigError::PositionWithoutOnce { .. }));
    }
}
