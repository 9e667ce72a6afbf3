//! Router settings types
//!
//! Core only accepts fully resolved settings.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigurationError;
use crate::router::{ModeKind, NavigationMode, DEFAULT_MAX_HISTORY};
use serde::{Deserialize, Serialize};

/// Settings used when constructing the application router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
    /// Navigation mode
    pub mode: ModeKind,
    /// Base path the application is served from
    pub base: String,
    /// Maximum number of back/forward entries, 0 disables history
    pub max_history: usize,
}

impl RouterSettings {
    /// Create settings for the given mode with default base and history
    pub fn new(mode: ModeKind) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set the base path
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Set maximum history size
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Navigation mode described by these settings
    pub fn navigation_mode(&self) -> NavigationMode {
        NavigationMode::from_kind(self.mode, &self.base)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self
            .base
            .chars()
            .any(|c| c == '#' || c == '?' || c.is_whitespace())
        {
            return Err(ConfigurationError::InvalidValue {
                field: "base".to_string(),
                value: self.base.clone(),
            });
        }

        Ok(())
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            mode: ModeKind::History,
            base: "/".to_string(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}
