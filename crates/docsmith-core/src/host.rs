//! Seams to the editing host
//!
//! The host owns source text, semantic analysis and edit application; the
//! provider only reads from it and hands back a rendered edit.

use async_trait::async_trait;
use docsmith_strategy::Declaration;
use docsmith_symbol::{SymbolError, SymbolService};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Document containing the declaration under the cursor
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Full text of the file
    fn text(&self) -> &str;

    /// Current semantic snapshot of the document
    ///
    /// `Ok(None)` when analysis is unavailable; the request then yields no
    /// action.
    ///
    /// # Errors
    /// Cancellation or analysis faults.
    async fn semantic_snapshot(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Option<Arc<dyn SymbolService>>, SymbolError>;
}

/// Replaces a declaration's leading documentation in source
pub trait EditApplier: Send {
    /// Swap the documentation lines in front of `declaration` for `edit`
    ///
    /// # Errors
    /// Whatever the host reports; the request fails with it.
    fn replace_leading_documentation(
        &mut self,
        declaration: &Declaration,
        edit: &DocEdit,
    ) -> anyhow::Result<()>;
}

/// Rendered documentation ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEdit {
    /// Prefixed lines, without line terminators
    pub lines: Vec<String>,

    /// Newline sequence of the target file
    pub newline: String,
}

impl DocEdit {
    /// Lines joined with the file's newline, each line terminated
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str(&self.newline);
        }
        out
    }

    /// Check if there is nothing to insert
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
