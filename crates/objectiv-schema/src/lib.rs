//! Data model for Objectiv tracker events as seen by the taxonomy validator.
//!
//! An [`Event`] carries two context collections:
//! - `global_contexts`: event-scoped metadata, order irrelevant
//! - `location_stack`: UI hierarchy, order significant (root first)
//!
//! Contexts are identified by their `_type` discriminator and their `id`.
//! Everything else a context or event carries is kept opaquely so that
//! snapshots round-trip through serde without loss.
//!
#![deny(missing_docs)]

/// Context records and well-known context names.
pub mod context;
/// Event snapshots.
pub mod event;
/// Validated name newtypes for context and event types.
pub mod identifiers;
/// Tracker platform tags.
pub mod platform;
/// Validation errors for schema primitives.
pub mod validation;

pub use context::{Context, GlobalContextName, LocationContextName};
pub use event::Event;
pub use identifiers::{ContextName, EventTypeName};
pub use platform::TrackerPlatform;
pub use validation::ValidationError;
