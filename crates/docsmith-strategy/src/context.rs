//! Refactoring context
//!
//! Everything a strategy may look at or change for one request.

use crate::error::StrategyError;
use crate::memo::MemoCache;
use docsmith_symbol::{Symbol, SymbolId, SymbolService};
use docsmith_tree::DocTreeHandle;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Declaration under the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared symbol, if the snapshot knows it
    pub symbol: Option<SymbolId>,

    /// Leading whitespace of the declaration's line
    pub indentation: String,

    /// Type or member declaration that may carry documentation
    pub documentable: bool,
}

impl Declaration {
    /// Documentable declaration of `symbol`
    #[must_use]
    pub fn new(symbol: SymbolId, indentation: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol),
            indentation: indentation.into(),
            documentable: true,
        }
    }

    /// Declaration that cannot carry documentation (statement, namespace, ...)
    #[must_use]
    pub fn non_documentable(indentation: impl Into<String>) -> Self {
        Self {
            symbol: None,
            indentation: indentation.into(),
            documentable: false,
        }
    }
}

/// State shared by every strategy step of one request
///
/// A context created for the offer pass can be [forked](Self::fork) for the
/// commit pass: the fork swaps in a fresh snapshot and cancellation token
/// while sharing the declaration, symbol, tree and memo cache.
#[derive(Debug, Clone)]
pub struct DocContext {
    declaration: Arc<Declaration>,
    symbol: Arc<Symbol>,
    tree: DocTreeHandle,
    service: Arc<dyn SymbolService>,
    cancel: CancellationToken,
    memo: Arc<MemoCache>,
}

impl DocContext {
    /// Create a context with an empty memo cache
    #[must_use]
    pub fn new(
        declaration: Declaration,
        symbol: Symbol,
        tree: DocTreeHandle,
        service: Arc<dyn SymbolService>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            declaration: Arc::new(declaration),
            symbol: Arc::new(symbol),
            tree,
            service,
            cancel,
            memo: Arc::new(MemoCache::new()),
        }
    }

    /// Same request against a new snapshot and cancellation token
    #[must_use]
    pub fn fork(&self, service: Arc<dyn SymbolService>, cancel: CancellationToken) -> Self {
        Self {
            declaration: Arc::clone(&self.declaration),
            symbol: Arc::clone(&self.symbol),
            tree: self.tree.clone(),
            service,
            cancel,
            memo: Arc::clone(&self.memo),
        }
    }

    /// Declaration under the cursor
    #[inline]
    #[must_use]
    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    /// Declared symbol
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Documentation tree being edited
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &DocTreeHandle {
        &self.tree
    }

    /// Semantic snapshot
    #[inline]
    #[must_use]
    pub fn service(&self) -> &dyn SymbolService {
        self.service.as_ref()
    }

    /// Cancellation token
    #[inline]
    #[must_use]
    pub fn cancel(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Memo cache shared with forks
    #[inline]
    #[must_use]
    pub fn memo(&self) -> &MemoCache {
        &self.memo
    }

    /// Fail with [`StrategyError::Cancelled`] once cancellation was requested
    ///
    /// # Errors
    /// [`StrategyError::Cancelled`].
    #[inline]
    pub fn checkpoint(&self) -> Result<(), StrategyError> {
        if self.cancel.is_cancelled() {
            return Err(StrategyError::Cancelled);
        }
        Ok(())
    }
}
