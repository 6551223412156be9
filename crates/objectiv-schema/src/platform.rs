use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runtime family a rule targets.
///
/// Rules carry the tag for filtering only; validation never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackerPlatform {
    /// Platform-independent core tracker.
    #[default]
    Core,
    /// Plain browser tracker.
    Browser,
    /// React tracker.
    React,
    /// React Native tracker.
    ReactNative,
    /// Angular tracker.
    Angular,
}

impl TrackerPlatform {
    /// All known platforms, core first.
    pub const ALL: [TrackerPlatform; 5] = [
        TrackerPlatform::Core,
        TrackerPlatform::Browser,
        TrackerPlatform::React,
        TrackerPlatform::ReactNative,
        TrackerPlatform::Angular,
    ];

    /// Returns the kebab-case tag used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerPlatform::Core => "core",
            TrackerPlatform::Browser => "browser",
            TrackerPlatform::React => "react",
            TrackerPlatform::ReactNative => "react-native",
            TrackerPlatform::Angular => "angular",
        }
    }
}

impl fmt::Display for TrackerPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TrackerPlatform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackerPlatform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPlatform(s.to_string()))
    }
}
