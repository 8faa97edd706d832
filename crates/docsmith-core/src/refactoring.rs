//! Inherit-documentation refactoring provider
//!
//! # Workflow
//! 1. [`DocCommentRefactoring::compute_refactorings`]: resolve the declared
//!    symbol, parse its existing documentation and run the offer pass. Each
//!    offered strategy index becomes one [`CandidateAction`].
//! 2. [`DocCommentRefactoring::generate`]: on selection, fork the action's
//!    context onto a fresh snapshot, run the commit pass from the action's
//!    start index, render the tree and hand the edit to the applier.
//!
//! Business-rule misses (cancellation, missing snapshot, unknown symbol,
//! malformed documentation, non-documentable declaration) end a request with
//! no action. Only service and edit faults are returned as errors.

use crate::config::DocsmithConfig;
use crate::error::DocsmithError;
use crate::host::{DocEdit, DocumentHost, EditApplier};
use crate::render::{detect_newline, render_documentation};
use docsmith_strategy::{Declaration, DocContext, Pipeline, StrategyKey};
use docsmith_symbol::{checkpoint, SymbolService};
use docsmith_tree::{DocTree, DocTreeHandle};
use tokio_util::sync::CancellationToken;

/// One offer of the refactoring, committed with [`DocCommentRefactoring::generate`]
#[derive(Debug, Clone)]
pub struct CandidateAction {
    /// Fixed action title
    pub title: String,

    /// Commit start index in the pipeline
    pub start_index: usize,

    /// Strategy at the start index
    pub key: StrategyKey,

    context: DocContext,
}

impl CandidateAction {
    /// Context captured by the offer pass
    #[inline]
    #[must_use]
    pub fn context(&self) -> &DocContext {
        &self.context
    }
}

/// Offers and commits inherited documentation for one declaration
#[derive(Debug, Clone, Default)]
pub struct DocCommentRefactoring {
    config: DocsmithConfig,
    pipeline: Pipeline,
}

impl DocCommentRefactoring {
    /// Create provider with the built-in pipeline
    #[inline]
    #[must_use]
    pub fn new(config: DocsmithConfig) -> Self {
        Self {
            config,
            pipeline: Pipeline::with_defaults(),
        }
    }

    /// Replace the strategy pipeline
    #[inline]
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DocsmithConfig {
        &self.config
    }

    /// Candidate actions for `declaration`, in pipeline order
    ///
    /// # Errors
    /// Service faults only; every silent miss yields an empty list.
    #[tracing::instrument(skip_all, fields(symbol = ?declaration.symbol))]
    pub async fn compute_refactorings(
        &self,
        host: &dyn DocumentHost,
        declaration: &Declaration,
        cancel: &CancellationToken,
    ) -> Result<Vec<CandidateAction>, DocsmithError> {
        match self.offer(host, declaration, cancel).await {
            Ok(actions) => {
                tracing::info!(actions = actions.len(), "offered documentation actions");
                Ok(actions)
            }
            Err(err) if err.is_silent() => {
                tracing::debug!(error = %err, "no documentation actions");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    async fn offer(
        &self,
        host: &dyn DocumentHost,
        declaration: &Declaration,
        cancel: &CancellationToken,
    ) -> Result<Vec<CandidateAction>, DocsmithError> {
        if !declaration.documentable {
            tracing::debug!("declaration cannot carry documentation");
            return Ok(Vec::new());
        }
        let Some(id) = declaration.symbol else {
            tracing::debug!("declaration has no symbol");
            return Ok(Vec::new());
        };

        let Some(service) = host.semantic_snapshot(cancel).await? else {
            tracing::debug!("semantic snapshot unavailable");
            return Ok(Vec::new());
        };

        checkpoint(cancel)?;
        let Some(symbol) = service.symbol(id).await? else {
            tracing::debug!(%id, "symbol not in snapshot");
            return Ok(Vec::new());
        };

        checkpoint(cancel)?;
        let existing = service.documentation_text(id).await?;
        let tree = DocTree::parse(&existing)?;

        let context = DocContext::new(
            declaration.clone(),
            symbol,
            DocTreeHandle::new(tree),
            service,
            cancel.clone(),
        );

        let offers = self.pipeline.offer(&context).await?;
        Ok(offers
            .into_iter()
            .map(|offer| CandidateAction {
                title: self.config.title.clone(),
                start_index: offer.index,
                key: offer.key,
                context: context.clone(),
            })
            .collect())
    }

    /// Commit `action` and apply the rendered documentation
    ///
    /// Returns the applied edit, or `None` when the request ended silently
    /// (cancelled, snapshot gone, malformed state).
    ///
    /// # Errors
    /// Service faults and applier failures.
    #[tracing::instrument(skip_all, fields(start = action.start_index, key = %action.key))]
    pub async fn generate(
        &self,
        host: &dyn DocumentHost,
        action: &CandidateAction,
        applier: &mut dyn EditApplier,
        cancel: &CancellationToken,
    ) -> Result<Option<DocEdit>, DocsmithError> {
        match self.commit(host, action, applier, cancel).await {
            Ok(edit) => Ok(edit),
            Err(err) if err.is_silent() => {
                tracing::debug!(error = %err, "documentation action abandoned");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn commit(
        &self,
        host: &dyn DocumentHost,
        action: &CandidateAction,
        applier: &mut dyn EditApplier,
        cancel: &CancellationToken,
    ) -> Result<Option<DocEdit>, DocsmithError> {
        let Some(service) = host.semantic_snapshot(cancel).await? else {
            tracing::debug!("semantic snapshot unavailable");
            return Ok(None);
        };

        let context = action.context.fork(service, cancel.clone());
        let report = self.pipeline.commit(action.start_index, &context).await?;
        checkpoint(cancel)?;

        let declaration = context.declaration();
        let tree = context.tree().snapshot();
        let lines = render_documentation(&tree, &declaration.indentation, &self.config);
        let edit = DocEdit {
            lines,
            newline: detect_newline(host.text(), &self.config.fallback_newline).to_string(),
        };

        applier
            .replace_leading_documentation(declaration, &edit)
            .map_err(DocsmithError::Edit)?;

        tracing::info!(
            applied = ?report.keys(),
            lines = edit.lines.len(),
            "committed documentation action"
        );
        Ok(Some(edit))
    }
}
