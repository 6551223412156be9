use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

macro_rules! newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new instance without validation; callers are responsible for conformity.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Parses a validated name from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                static PATTERN: OnceLock<Regex> = OnceLock::new();
                let re = PATTERN.get_or_init(|| Regex::new($pattern).expect("invalid regex"));
                let s = value.into();
                if !re.is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }

            /// Returns the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }
    };
}

newtype!(
    ContextName,
    "Context type discriminator such as `PathContext` (pattern: `[A-Z][A-Za-z0-9]*Context`).",
    r"^[A-Z][A-Za-z0-9]*Context$"
);
newtype!(
    EventTypeName,
    "Event type discriminator such as `PressEvent` (pattern: `[A-Z][A-Za-z0-9]*Event`).",
    r"^[A-Z][A-Za-z0-9]*Event$"
);
