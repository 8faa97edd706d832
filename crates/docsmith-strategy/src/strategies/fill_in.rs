//! Fill-in from inherited documentation

use crate::context::DocContext;
use crate::error::StrategyError;
use crate::inherit::inherited_documentation;
use crate::key::StrategyKey;
use crate::strategy::DocStrategy;
use async_trait::async_trait;
use docsmith_tree::{parse_fragment, DocNode, Whitespace};

/// Copy inherited documentation into an empty tree
///
/// Applies only as the first action of a pass, only when the declaration has
/// no documentation yet, and only when the inheritance source is documented.
/// The compacted inherited text is computed once per request and kept in the
/// memo cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillInStrategy;

impl FillInStrategy {
    async fn cached_documentation(&self, ctx: &DocContext) -> Result<String, StrategyError> {
        ctx.memo()
            .get_or_try_insert_with(self.key(), || inherited_documentation(ctx))
            .await
    }
}

#[async_trait]
impl DocStrategy for FillInStrategy {
    fn key(&self) -> StrategyKey {
        StrategyKey::FillIn
    }

    async fn can_apply(&self, gate: bool, ctx: &DocContext) -> Result<bool, StrategyError> {
        if gate {
            return Ok(false);
        }

        let documented = !ctx.tree().read().is_empty();
        if documented {
            return Ok(false);
        }

        Ok(!self.cached_documentation(ctx).await?.is_empty())
    }

    async fn apply(&self, ctx: &DocContext) -> Result<bool, StrategyError> {
        let text = self.cached_documentation(ctx).await?;

        let inherited: Vec<DocNode> = parse_fragment(&text, Whitespace::Ignore)?
            .into_iter()
            .find_map(|node| match node {
                DocNode::Element(mut root) => Some(root.take_children()),
                _ => None,
            })
            .unwrap_or_default();

        if inherited.is_empty() {
            return Ok(false);
        }

        let count = inherited.len();
        let mut tree = ctx.tree().write();
        let root = tree.root_mut();
        for node in inherited {
            root.append(node);
        }
        tracing::debug!(nodes = count, "filled in inherited documentation");
        Ok(true)
    }
}
