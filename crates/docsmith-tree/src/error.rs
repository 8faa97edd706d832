//! Error types for documentation markup handling

/// Errors raised while reading documentation markup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Markup could not be parsed
    #[error("malformed documentation: {0}")]
    Malformed(String),

    /// Markup parsed but contained no element to use as a root
    #[error("documentation has no root element")]
    MissingRoot,
}

impl TreeError {
    /// Create malformed-markup error
    #[inline]
    pub fn malformed(message: impl std::fmt::Display) -> Self {
        Self::Malformed(message.to_string())
    }
}
