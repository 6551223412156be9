use crate::identifiers::ContextName;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single context attached to an event.
///
/// Identity is the `(_type, id)` pair. Type-specific fields (for example the
/// `value` of an `InputValueContext`) land in `fields` and never take part in
/// identity comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Context type discriminator.
    #[serde(rename = "_type")]
    pub context_type: ContextName,
    /// Identifier distinguishing contexts of the same type.
    pub id: String,
    /// Remaining type-specific fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Context {
    /// Creates a context with no extra fields.
    pub fn new(context_type: impl Into<ContextName>, id: impl Into<String>) -> Self {
        Self {
            context_type: context_type.into(),
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Adds a type-specific field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns true if this context has the given type.
    pub fn is(&self, context_type: &ContextName) -> bool {
        &self.context_type == context_type
    }
}

macro_rules! context_names {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the `_type` discriminator for this context.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl From<$name> for ContextName {
            fn from(value: $name) -> Self {
                ContextName::new(value.as_str())
            }
        }
    };
}

context_names!(
    /// Global context types of the open taxonomy.
    GlobalContextName {
        ApplicationContext,
        CookieIdContext,
        HttpContext,
        IdentityContext,
        InputValueContext,
        LocaleContext,
        MarketingContext,
        PathContext,
        SessionContext,
    }
);

context_names!(
    /// Location context types of the open taxonomy.
    LocationContextName {
        ContentContext,
        ExpandableContext,
        InputContext,
        LinkContext,
        MediaPlayerContext,
        NavigationContext,
        OverlayContext,
        PressableContext,
        RootLocationContext,
    }
);
