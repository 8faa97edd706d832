//! Docsmith configuration

use crate::error::DocsmithError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rendering and presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsmithConfig {
    /// Title carried by every candidate action
    pub title: String,
    /// Documentation line marker
    pub marker: String,
    /// Indentation per nesting level of rendered markup
    pub indent_unit: String,
    /// Newline used when the file has none
    pub fallback_newline: String,
}

impl DocsmithConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With action title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With line marker
    #[inline]
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// With indentation unit
    #[inline]
    #[must_use]
    pub fn with_indent_unit(mut self, indent_unit: impl Into<String>) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }

    /// With fallback newline
    #[inline]
    #[must_use]
    pub fn with_fallback_newline(mut self, newline: impl Into<String>) -> Self {
        self.fallback_newline = newline.into();
        self
    }

    /// Check field constraints
    ///
    /// The marker is exactly three characters, the indent unit is blank and
    /// the fallback newline is `\r\n`, `\n` or `\r`.
    ///
    /// # Errors
    /// [`DocsmithError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<(), DocsmithError> {
        if self.marker.chars().count() != 3 {
            return Err(DocsmithError::config(format!(
                "marker must be 3 characters, got {:?}",
                self.marker
            )));
        }
        if !self.indent_unit.chars().all(|c| c == ' ' || c == '\t') {
            return Err(DocsmithError::config("indent_unit must contain only spaces or tabs"));
        }
        if !matches!(self.fallback_newline.as_str(), "\r\n" | "\n" | "\r") {
            return Err(DocsmithError::config("fallback_newline must be a line break"));
        }
        Ok(())
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// [`DocsmithError::Config`] on syntax or constraint errors.
    pub fn from_toml_str(text: &str) -> Result<Self, DocsmithError> {
        let config: Self = toml::from_str(text).map_err(DocsmithError::config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// [`DocsmithError::Config`] when the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocsmithError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| DocsmithError::config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

impl Default for DocsmithConfig {
    fn default() -> Self {
        Self {
            title: "Inherit documentation comment".to_string(),
            marker: "///".to_string(),
            indent_unit: "  ".to_string(),
            fallback_newline: "\r\n".to_string(),
        }
    }
}
