//! User Settings
//!
//! Persisted by the UI; only `auto_trash` reaches the controller, through
//! an explicit [`MutationConfig`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Completing a task moves it straight to the recycle bin
    pub auto_trash: bool,
}

impl Settings {
    /// Parse stored settings, falling back to defaults on bad input
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable settings: {}", err);
            Self::default()
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Controller configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationConfig {
    pub auto_trash: bool,
}

impl From<&Settings> for MutationConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            auto_trash: settings.auto_trash,
        }
    }
}
