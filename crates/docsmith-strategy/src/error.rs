//! Strategy chain errors

use crate::key::StrategyKey;
use docsmith_symbol::SymbolError;
use docsmith_tree::TreeError;

/// Errors raised while offering or committing strategies
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// Cancellation observed between strategy steps
    #[error("strategy step cancelled")]
    Cancelled,

    /// Symbol lookup failed
    #[error("symbol error: {0}")]
    Symbol(#[from] SymbolError),

    /// Documentation markup could not be read
    #[error("documentation error: {0}")]
    Tree(#[from] TreeError),

    /// Two strategies registered under one key
    #[error("duplicate strategy key: {0}")]
    DuplicateKey(StrategyKey),

    /// Commit requested from a start index the pipeline does not have
    #[error("start index {index} out of range for {len} strategies")]
    StartOutOfRange {
        /// Requested start index
        index: usize,
        /// Number of strategies
        len: usize,
    },
}

impl StrategyError {
    /// Errors that collapse to "no action" instead of failing the request
    ///
    /// Cancellation, malformed documentation and symbols missing from the
    /// snapshot are silent; service faults and misuse are not.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        match self {
            Self::Cancelled | Self::Tree(_) => true,
            Self::Symbol(err) => err.is_silent(),
            Self::DuplicateKey(_) | Self::StartOutOfRange { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_errors() {
        assert!(StrategyError::Cancelled.is_silent());
        assert!(StrategyError::from(TreeError::MissingRoot).is_silent());
        assert!(StrategyError::from(SymbolError::Cancelled).is_silent());
        assert!(!StrategyError::from(SymbolError::service("down")).is_silent());
        assert!(!StrategyError::StartOutOfRange { index: 3, len: 3 }.is_silent());
    }

    #[test]
    fn display() {
        let err = StrategyError::DuplicateKey(StrategyKey::FillIn);
        assert_eq!(err.to_string(), "duplicate strategy key: fill_in");
    }
}
