use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{DEFAULT_AUTHOR, DEFAULT_ENABLED},
    errors::ConfigError,
};

/// Settings of a `TrackChanges` session.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingConfig {
    /// Stamped on every change recorded by the session.
    #[cfg_attr(feature = "serde", serde(default = "default_author"))]
    pub author: String,

    /// Whether local edits are recorded from the start.
    #[cfg_attr(feature = "serde", serde(default = "default_enabled"))]
    pub enabled: bool,
}

fn default_author() -> String {
    debug!("Using default author: {DEFAULT_AUTHOR}");
    DEFAULT_AUTHOR.to_owned()
}

fn default_enabled() -> bool {
    debug!("Using default enabled state: {DEFAULT_ENABLED}");
    DEFAULT_ENABLED
}

impl TrackingConfig {
    #[must_use]
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            enabled: default_enabled(),
        }
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// # Errors
    ///
    /// Returns `ConfigError::EmptyAuthor` if the author is empty or only
    /// whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.author.trim().is_empty() {
            return Err(ConfigError::EmptyAuthor);
        }

        Ok(())
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            enabled: default_enabled(),
        }
    }
}
