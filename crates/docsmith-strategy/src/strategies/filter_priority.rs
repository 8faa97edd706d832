//! `filterpriority` cleanup

use crate::context::DocContext;
use crate::error::StrategyError;
use crate::key::StrategyKey;
use crate::strategy::DocStrategy;
use async_trait::async_trait;

const FILTER_PRIORITY: &str = "filterpriority";

/// Remove the obsolete `filterpriority` element
///
/// Follow-up only: never offered on its own. Removes the first direct child
/// of the root named `filterpriority`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPriorityCleanupStrategy;

#[async_trait]
impl DocStrategy for FilterPriorityCleanupStrategy {
    fn key(&self) -> StrategyKey {
        StrategyKey::FilterPriorityCleanup
    }

    async fn can_apply(&self, gate: bool, ctx: &DocContext) -> Result<bool, StrategyError> {
        Ok(gate && ctx.tree().read().root().element(FILTER_PRIORITY).is_some())
    }

    async fn apply(&self, ctx: &DocContext) -> Result<bool, StrategyError> {
        let removed = ctx.tree().write().root_mut().remove_element(FILTER_PRIORITY);
        Ok(removed.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::test_support::{context_for, override_table};
    use docsmith_tree::to_compact_string;

    #[tokio::test]
    async fn removes_first_occurrence_only() {
        let (table, over) = override_table(None);
        let ctx = context_for(
            table,
            over,
            "<doc><summary>S</summary><filterpriority>1</filterpriority><filterpriority>2</filterpriority></doc>",
        )
        .await;

        assert!(!FilterPriorityCleanupStrategy.can_apply(false, &ctx).await.unwrap());
        assert!(FilterPriorityCleanupStrategy.can_apply(true, &ctx).await.unwrap());
        assert!(FilterPriorityCleanupStrategy.apply(&ctx).await.unwrap());

        assert_eq!(
            to_compact_string(ctx.tree().read().root()),
            "<doc><summary>S</summary><filterpriority>2</filterpriority></doc>"
        );
    }

    #[tokio::test]
    async fn ignores_nested_elements() {
        let (table, over) = override_table(None);
        let ctx = context_for(
            table,
            over,
            "<doc><remarks><filterpriority>1</filterpriority></remarks></doc>",
        )
        .await;
        assert!(!FilterPriorityCleanupStrategy.can_apply(true, &ctx).await.unwrap());
    }
}
