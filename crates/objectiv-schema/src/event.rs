use crate::context::Context;
use crate::identifiers::{ContextName, EventTypeName};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Snapshot of a tracker event.
///
/// Missing or `null` `global_contexts` / `location_stack` deserialize as empty
/// lists, so any well-formed event object can be validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event type discriminator (e.g. `PressEvent`).
    #[serde(rename = "_type")]
    pub event_type: EventTypeName,
    /// Event-scoped contexts; order carries no meaning.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub global_contexts: Vec<Context>,
    /// UI hierarchy the event originated from, root first.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location_stack: Vec<Context>,
    /// Remaining event fields (`id`, `time`, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Event {
    /// Creates an event with empty context lists.
    pub fn new(event_type: impl Into<EventTypeName>) -> Self {
        Self {
            event_type: event_type.into(),
            global_contexts: Vec::new(),
            location_stack: Vec::new(),
            fields: Map::new(),
        }
    }

    /// Appends a global context.
    pub fn with_global_context(mut self, context: Context) -> Self {
        self.global_contexts.push(context);
        self
    }

    /// Appends a location context at the bottom of the stack.
    pub fn with_location_context(mut self, context: Context) -> Self {
        self.location_stack.push(context);
        self
    }

    /// Iterates over global contexts of the given type.
    pub fn global_contexts_of<'a>(
        &'a self,
        context_type: &'a ContextName,
    ) -> impl Iterator<Item = &'a Context> + 'a {
        self.global_contexts.iter().filter(move |c| c.is(context_type))
    }

    /// Iterates over `(index, context)` pairs of the location stack matching the given type.
    pub fn location_contexts_of<'a>(
        &'a self,
        context_type: &'a ContextName,
    ) -> impl Iterator<Item = (usize, &'a Context)> + 'a {
        self.location_stack
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.is(context_type))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Context>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Context>>::deserialize(deserializer)?.unwrap_or_default())
}
