//! Ordered strategy pipeline
//!
//! # Offer pass
//! Scan every strategy with a gate that starts `false`. Each strategy whose
//! `can_apply(gate)` holds becomes a candidate and latches the gate.
//!
//! # Commit pass
//! Scan from the chosen candidate's index to the end with a fresh gate,
//! calling `apply` on every strategy whose `can_apply(gate)` holds against
//! the tree as mutated so far. Strategies before the start index never run.

use crate::context::DocContext;
use crate::error::StrategyError;
use crate::key::StrategyKey;
use crate::strategies::{FillInStrategy, FilterPriorityCleanupStrategy, OverrideCleanupStrategy};
use crate::strategy::DocStrategy;
use std::collections::HashSet;
use std::sync::Arc;

/// Candidate produced by the offer pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    /// Position of the strategy in the pipeline; the commit start index
    pub index: usize,

    /// Strategy identity
    pub key: StrategyKey,
}

/// One applied strategy of a commit pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedStrategy {
    /// Position in the pipeline
    pub index: usize,

    /// Strategy identity
    pub key: StrategyKey,

    /// Success signal returned by `apply`
    pub changed: bool,
}

/// Outcome of a commit pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Applied strategies in application order
    pub applied: Vec<AppliedStrategy>,
}

impl CommitReport {
    /// Keys of applied strategies in application order
    #[must_use]
    pub fn keys(&self) -> Vec<StrategyKey> {
        self.applied.iter().map(|a| a.key).collect()
    }

    /// Check if nothing was applied
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Strategies in a fixed order
#[derive(Debug, Clone)]
pub struct Pipeline {
    strategies: Vec<Arc<dyn DocStrategy>>,
}

impl Pipeline {
    /// Create pipeline from strategies in order
    ///
    /// # Errors
    /// [`StrategyError::DuplicateKey`] when two strategies share a key.
    pub fn new(strategies: Vec<Arc<dyn DocStrategy>>) -> Result<Self, StrategyError> {
        let mut seen = HashSet::with_capacity(strategies.len());
        for strategy in &strategies {
            let key = strategy.key();
            if !seen.insert(key) {
                return Err(StrategyError::DuplicateKey(key));
            }
        }
        Ok(Self { strategies })
    }

    /// Built-in order: fill-in, filterpriority cleanup, override cleanup
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            strategies: vec![
                Arc::new(FillInStrategy),
                Arc::new(FilterPriorityCleanupStrategy),
                Arc::new(OverrideCleanupStrategy),
            ],
        }
    }

    /// Strategy keys in order
    #[must_use]
    pub fn keys(&self) -> Vec<StrategyKey> {
        self.strategies.iter().map(|s| s.key()).collect()
    }

    /// Number of strategies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if pipeline is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Offer pass: one candidate per strategy that can apply
    ///
    /// Never mutates the tree.
    ///
    /// # Errors
    /// Whatever a strategy's `can_apply` raises, or cancellation.
    #[tracing::instrument(skip_all, fields(symbol = %ctx.symbol().id))]
    pub async fn offer(&self, ctx: &DocContext) -> Result<Vec<Offer>, StrategyError> {
        let mut gate = false;
        let mut offers = Vec::new();

        for (index, strategy) in self.strategies.iter().enumerate() {
            ctx.checkpoint()?;
            if strategy.can_apply(gate, ctx).await? {
                tracing::debug!(key = %strategy.key(), index, "strategy can apply");
                offers.push(Offer {
                    index,
                    key: strategy.key(),
                });
                gate = true;
            }
        }

        Ok(offers)
    }

    /// Commit pass from `start` to the end of the pipeline
    ///
    /// Mutates the context's tree in place. Cancellation is checked before
    /// each `can_apply` and again before each `apply`.
    ///
    /// # Errors
    /// [`StrategyError::StartOutOfRange`], cancellation, or whatever a
    /// strategy raises.
    #[tracing::instrument(skip_all, fields(symbol = %ctx.symbol().id, start = start))]
    pub async fn commit(&self, start: usize, ctx: &DocContext) -> Result<CommitReport, StrategyError> {
        if start >= self.strategies.len() {
            return Err(StrategyError::StartOutOfRange {
                index: start,
                len: self.strategies.len(),
            });
        }

        let mut gate = false;
        let mut report = CommitReport::default();

        for (index, strategy) in self.strategies.iter().enumerate().skip(start) {
            ctx.checkpoint()?;
            if !strategy.can_apply(gate, ctx).await? {
                continue;
            }

            ctx.checkpoint()?;
            let changed = strategy.apply(ctx).await?;
            tracing::debug!(key = %strategy.key(), index, changed, "strategy applied");
            report.applied.push(AppliedStrategy {
                index,
                key: strategy.key(),
                changed,
            });
            gate = true;
        }

        Ok(report)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::test_support::{context_for, override_table};
    use docsmith_symbol::SymbolTable;
    use docsmith_tree::to_compact_string;
    use pretty_assertions::assert_eq;
    use tokio_util::sync::CancellationToken;

    const BASE_DOC: &str = "<member><summary>When overridden in a derived class, gets the value.</summary><filterpriority>1</filterpriority></member>";

    #[test]
    fn default_order() {
        assert_eq!(
            Pipeline::with_defaults().keys(),
            vec![
                StrategyKey::FillIn,
                StrategyKey::FilterPriorityCleanup,
                StrategyKey::OverrideCleanup,
            ]
        );
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = Pipeline::new(vec![Arc::new(FillInStrategy), Arc::new(FillInStrategy)]);
        assert!(matches!(result, Err(StrategyError::DuplicateKey(StrategyKey::FillIn))));
    }

    #[tokio::test]
    async fn fill_in_then_cleanups_in_one_commit() {
        let (table, over) = override_table(Some(BASE_DOC));
        let ctx = context_for(table, over, "").await;
        let pipeline = Pipeline::with_defaults();

        let offers = pipeline.offer(&ctx).await.unwrap();
        assert_eq!(offers, vec![Offer { index: 0, key: StrategyKey::FillIn }]);
        assert!(ctx.tree().read().is_empty());

        let fork = ctx.fork(Arc::new(override_table(Some(BASE_DOC)).0), CancellationToken::new());
        let report = pipeline.commit(offers[0].index, &fork).await.unwrap();

        assert_eq!(
            report.keys(),
            vec![
                StrategyKey::FillIn,
                StrategyKey::FilterPriorityCleanup,
                StrategyKey::OverrideCleanup,
            ]
        );
        assert_eq!(
            to_compact_string(ctx.tree().read().root()),
            "<doc><summary>Gets the value.</summary></doc>"
        );
    }

    #[tokio::test]
    async fn documented_declaration_offers_nothing_without_a_leader() {
        let (table, over) = override_table(Some(BASE_DOC));
        let ctx = context_for(
            table,
            over,
            "<doc><summary>When overridden in a derived class, gets it.</summary><filterpriority>1</filterpriority></doc>",
        )
        .await;

        assert!(Pipeline::with_defaults().offer(&ctx).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn start_out_of_range() {
        let (table, over) = override_table(None);
        let ctx = context_for(table, over, "").await;
        let err = Pipeline::with_defaults().commit(3, &ctx).await.unwrap_err();
        assert!(matches!(err, StrategyError::StartOutOfRange { index: 3, len: 3 }));
    }

    #[tokio::test]
    async fn cancelled_commit_leaves_tree_untouched() {
        let (table, over) = override_table(Some(BASE_DOC));
        let ctx = context_for(table, over, "").await;
        let pipeline = Pipeline::with_defaults();
        pipeline.offer(&ctx).await.unwrap();

        let cancel = CancellationToken::new();
        cancel.cancel();
        let fork = ctx.fork(Arc::new(SymbolTable::new()), cancel);

        let err = pipeline.commit(0, &fork).await.unwrap_err();
        assert!(matches!(err, StrategyError::Cancelled));
        assert!(ctx.tree().read().is_empty());
    }
}
