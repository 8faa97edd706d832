//! Error types for Docsmith Core

use docsmith_strategy::StrategyError;
use docsmith_symbol::SymbolError;
use docsmith_tree::TreeError;

/// Main Docsmith error type
#[derive(Debug, thiserror::Error)]
pub enum DocsmithError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Strategy pass failed
    #[error("strategy error: {0}")]
    Strategy(#[from] StrategyError),

    /// Symbol lookup failed
    #[error("symbol error: {0}")]
    Symbol(#[from] SymbolError),

    /// Existing documentation could not be read
    #[error("documentation error: {0}")]
    Tree(#[from] TreeError),

    /// Edit applier failed
    #[error("edit failed: {0}")]
    Edit(#[source] anyhow::Error),
}

impl DocsmithError {
    /// Create configuration error
    #[inline]
    #[must_use]
    pub fn config(message: impl std::fmt::Display) -> Self {
        Self::Config(message.to_string())
    }

    /// Errors that end a request with "no action" instead of a failure
    #[must_use]
    pub fn is_silent(&self) -> bool {
        match self {
            Self::Strategy(err) => err.is_silent(),
            Self::Symbol(err) => err.is_silent(),
            Self::Tree(_) => true,
            Self::Config(_) | Self::Edit(_) => false,
        }
    }
}
