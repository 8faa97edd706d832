//! Documentation strategy trait

use crate::context::DocContext;
use crate::error::StrategyError;
use crate::key::StrategyKey;
use async_trait::async_trait;

/// One pluggable documentation operation
///
/// `gate` is `true` once any earlier strategy in the same pass reported that
/// it can apply. Strategies use it to run only first (`!gate`) or only as a
/// follow-up (`gate`).
///
/// `can_apply` must not modify the tree. It may populate the context's memo
/// cache under [`Self::key`].
#[async_trait]
pub trait DocStrategy: Send + Sync + std::fmt::Debug {
    /// Stable identity, unique within a pipeline
    fn key(&self) -> StrategyKey;

    /// Check whether this strategy would act on the context's tree
    ///
    /// # Errors
    /// Cancellation, symbol service faults or unreadable documentation.
    async fn can_apply(&self, gate: bool, ctx: &DocContext) -> Result<bool, StrategyError>;

    /// Mutate the context's tree in place
    ///
    /// Only called after `can_apply` returned `true` against the same state.
    /// The returned flag reports whether anything changed; callers may ignore
    /// it.
    ///
    /// # Errors
    /// Cancellation, symbol service faults or unreadable documentation.
    async fn apply(&self, ctx: &DocContext) -> Result<bool, StrategyError>;
}
