//! Error types for symbol lookup

use crate::symbol::SymbolId;

/// Symbol service errors
#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    /// Symbol id not present in the snapshot
    #[error("unknown symbol: {0}")]
    UnknownSymbol(SymbolId),

    /// Lookup was cancelled by the caller
    #[error("symbol lookup cancelled")]
    Cancelled,

    /// Backing service failed
    #[error("symbol service failed: {0}")]
    Service(String),

    /// IO error while loading a snapshot
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot metadata could not be decoded
    #[error("invalid symbol metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl SymbolError {
    /// Create service error
    #[inline]
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    /// Errors that only mean "nothing to offer" rather than a fault
    #[inline]
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::UnknownSymbol(_) | Self::Cancelled)
    }
}
