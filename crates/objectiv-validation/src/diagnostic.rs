use crate::rules::RuleKind;
use objectiv_schema::{ContextName, EventTypeName};
use serde::Serialize;
use std::fmt;

/// Root of the taxonomy reference documentation.
pub const DOCS_BASE_URL: &str = "https://objectiv.io/docs/taxonomy/reference";

/// Reference section a context type is documented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocsSection {
    /// `global-contexts/<Name>`
    GlobalContexts,
    /// `location-contexts/<Name>`
    LocationContexts,
}

impl DocsSection {
    fn path(&self) -> &'static str {
        match self {
            DocsSection::GlobalContexts => "global-contexts",
            DocsSection::LocationContexts => "location-contexts",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DocsSection::GlobalContexts => "Global Contexts",
            DocsSection::LocationContexts => "Location Stack",
        }
    }
}

/// Builds the taxonomy documentation URL for a context type.
pub fn taxonomy_docs_url(section: DocsSection, context_name: &ContextName) -> String {
    format!("{}/{}/{}", DOCS_BASE_URL, section.path(), context_name)
}

/// What exactly was wrong with the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// No context of the type was found.
    Missing,
    /// More than one global context shares the same type and id.
    DuplicateIdentity {
        /// Shared id.
        id: String,
    },
    /// More than one location context has the type.
    Duplicate,
    /// The location context sits at the wrong index.
    WrongPosition {
        /// Index the rule requires.
        expected: usize,
        /// Index the context was found at.
        actual: usize,
    },
}

/// A single reported violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Rule family that produced the diagnostic.
    pub rule: RuleKind,
    /// Violation details.
    pub violation: ViolationKind,
    /// Context type the violation concerns.
    pub context_name: ContextName,
    /// Type of the offending event.
    pub event_type: EventTypeName,
    /// Human readable message, without tag or documentation line.
    pub message: String,
    /// Taxonomy documentation for `context_name`.
    pub docs_url: String,
    /// Optional prefix rendered into the header tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_prefix: Option<String>,
}

impl Diagnostic {
    pub(crate) fn new(
        rule: RuleKind,
        violation: ViolationKind,
        section: DocsSection,
        context_name: &ContextName,
        event_type: &EventTypeName,
        log_prefix: Option<&str>,
    ) -> Self {
        let where_ = section.label();
        let message = match &violation {
            ViolationKind::Missing => {
                format!("{context_name} is missing from {where_} of {event_type}.")
            }
            ViolationKind::DuplicateIdentity { id } => format!(
                "Only one {context_name}(id: {id}) should be present in {where_} of {event_type}."
            ),
            ViolationKind::Duplicate => {
                format!("Only one {context_name} should be present in {where_} of {event_type}.")
            }
            ViolationKind::WrongPosition { .. } => {
                format!("{context_name} is in the wrong position of the {where_} of {event_type}.")
            }
        };

        Self {
            rule,
            violation,
            context_name: context_name.clone(),
            event_type: event_type.clone(),
            message,
            docs_url: taxonomy_docs_url(section, context_name),
            log_prefix: log_prefix.filter(|p| !p.is_empty()).map(str::to_string),
        }
    }

    /// Header tag: `｢objectiv｣` or `｢objectiv:<prefix>｣`.
    pub fn tag(&self) -> String {
        match &self.log_prefix {
            Some(prefix) => format!("｢objectiv:{prefix}｣"),
            None => "｢objectiv｣".to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Error: {}\nTaxonomy documentation: {}.",
            self.tag(),
            self.message,
            self.docs_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docs_url_per_section() {
        let name = ContextName::new("ContentContext");
        assert_eq!(
            taxonomy_docs_url(DocsSection::LocationContexts, &name),
            "https://objectiv.io/docs/taxonomy/reference/location-contexts/ContentContext"
        );
        assert_eq!(
            taxonomy_docs_url(DocsSection::GlobalContexts, &name),
            "https://objectiv.io/docs/taxonomy/reference/global-contexts/ContentContext"
        );
    }

    #[test]
    fn empty_prefix_renders_plain_tag() {
        let d = Diagnostic::new(
            RuleKind::MissingGlobalContext,
            ViolationKind::Missing,
            DocsSection::GlobalContexts,
            &ContextName::new("PathContext"),
            &EventTypeName::new("PressEvent"),
            Some(""),
        );
        assert_eq!(d.tag(), "｢objectiv｣");
        assert_eq!(
            d.to_string(),
            "｢objectiv｣ Error: PathContext is missing from Global Contexts of PressEvent.\n\
             Taxonomy documentation: https://objectiv.io/docs/taxonomy/reference/global-contexts/PathContext."
        );
    }
}
