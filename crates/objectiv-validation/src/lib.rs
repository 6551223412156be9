//! Taxonomy validation rules for Objectiv tracker events.
//!
//! This crate provides:
//! - The [`ValidationRule`] contract and its three implementations
//!   ([`MissingContextRule`], [`UniqueContextRule`], [`LocationContextRule`])
//! - [`Diagnostic`] values with the tracker's two-line message format
//! - The [`Reporter`] sink interface plus console, tracing and recording reporters
//! - Declarative JSON rule configuration and the open taxonomy preset
//!
//! Core invariants:
//! - Rules never mutate events
//! - Validation is synchronous and stateless; the same event always yields
//!   the same diagnostics
//! - A violation is output, not an error: rules return diagnostics and the
//!   caller decides where they go
//!
//! ```rust
//! use objectiv_schema::{Event, GlobalContextName, TrackerPlatform};
//! use objectiv_validation::{MissingContextRule, ValidationRule};
//!
//! let rule = MissingContextRule::new(TrackerPlatform::Core, GlobalContextName::PathContext);
//! let diagnostics = rule.validate(&Event::new("PressEvent"));
//! assert_eq!(
//!     diagnostics[0].message,
//!     "PathContext is missing from Global Contexts of PressEvent."
//! );
//! ```
//!
#![deny(missing_docs)]

/// Declarative rule configuration.
pub mod config;
/// Diagnostic values and message formatting.
pub mod diagnostic;
/// Error types for rule construction.
pub mod errors;
/// Diagnostic sinks.
pub mod reporter;
/// Rule contract and implementations.
pub mod rules;
/// Ordered rule collections and presets.
pub mod ruleset;

pub use config::{RuleConfig, RuleSetConfig};
pub use diagnostic::{taxonomy_docs_url, Diagnostic, DocsSection, ViolationKind, DOCS_BASE_URL};
pub use errors::ConfigError;
pub use reporter::{ConsoleReporter, RecordingReporter, Reporter, Style, TracingReporter};
pub use rules::{
    EventMatches, LocationContextRule, MissingContextRule, Rule, RuleKind, UniqueContextRule,
    ValidationRule,
};
pub use ruleset::RuleSet;
