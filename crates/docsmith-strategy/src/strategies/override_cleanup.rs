//! "When overridden in a derived class" summary cleanup

use crate::context::DocContext;
use crate::error::StrategyError;
use crate::key::StrategyKey;
use crate::strategy::DocStrategy;
use async_trait::async_trait;
use docsmith_tree::DocNode;

/// Summary preamble that only makes sense on the overridden declaration
pub const OVERRIDE_PREAMBLE: &str = "When overridden in a derived class, ";

const SUMMARY: &str = "summary";

/// ASCII case-insensitive prefix test
fn has_preamble(text: &str) -> bool {
    text.get(..OVERRIDE_PREAMBLE.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(OVERRIDE_PREAMBLE))
}

/// First text or CDATA node under `nodes`, in document order, that starts
/// with the preamble
fn preamble_text(nodes: &mut [DocNode]) -> Option<&mut String> {
    for node in nodes {
        match node {
            DocNode::Text(text) | DocNode::CData(text) if has_preamble(text) => return Some(text),
            DocNode::Element(element) => {
                if let Some(found) = preamble_text(element.children_mut()) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}

/// Strip the override preamble from an overriding member's summary
///
/// Follow-up only. `"When overridden in a derived class, gets the value."`
/// becomes `"Gets the value."`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverrideCleanupStrategy;

#[async_trait]
impl DocStrategy for OverrideCleanupStrategy {
    fn key(&self) -> StrategyKey {
        StrategyKey::OverrideCleanup
    }

    async fn can_apply(&self, gate: bool, ctx: &DocContext) -> Result<bool, StrategyError> {
        if !gate || !ctx.symbol().is_override {
            return Ok(false);
        }

        let tree = ctx.tree().read();
        Ok(tree
            .root()
            .element(SUMMARY)
            .is_some_and(|summary| has_preamble(&summary.text_content())))
    }

    /// Rewrites the first text node anywhere inside a summary that starts
    /// with the preamble. Returns `false` without touching the tree when the
    /// preamble only appears split across nodes, or when nothing follows it.
    async fn apply(&self, ctx: &DocContext) -> Result<bool, StrategyError> {
        let mut tree = ctx.tree().write();

        let target = tree
            .root_mut()
            .elements_named_mut(SUMMARY)
            .find_map(|summary| preamble_text(summary.children_mut()));

        let Some(text) = target else {
            tracing::debug!("override preamble not in a single text node");
            return Ok(false);
        };

        let mut rest = text[OVERRIDE_PREAMBLE.len()..].chars();
        let Some(first) = rest.next() else {
            return Ok(false);
        };

        let rewritten: String = first.to_uppercase().chain(rest).collect();
        *text = rewritten;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::test_support::{context_for, override_table};
    use docsmith_symbol::{SymbolData, SymbolKind, SymbolTable};
    use docsmith_tree::to_compact_string;
    use pretty_assertions::assert_eq;

    async fn cleaned(existing: &str) -> (bool, String) {
        let (table, over) = override_table(None);
        let ctx = context_for(table, over, existing).await;
        let changed = OverrideCleanupStrategy.apply(&ctx).await.unwrap();
        let xml = to_compact_string(ctx.tree().read().root());
        (changed, xml)
    }

    #[test]
    fn preamble_match_ignores_ascii_case() {
        assert!(has_preamble("WHEN OVERRIDDEN IN A DERIVED CLASS, gets"));
        assert!(!has_preamble("When overridden in a derived class"));
        assert!(!has_preamble("Gets the value."));
    }

    #[tokio::test]
    async fn capitalizes_the_remainder() {
        let (changed, xml) =
            cleaned("<doc><summary>When overridden in a derived class, gets the value.</summary></doc>").await;
        assert!(changed);
        assert_eq!(xml, "<doc><summary>Gets the value.</summary></doc>");
    }

    #[tokio::test]
    async fn only_the_matching_text_node_changes() {
        let (changed, xml) = cleaned(
            "<doc><summary>When overridden in a derived class, returns <c>true</c> if set.</summary></doc>",
        )
        .await;
        assert!(changed);
        assert_eq!(xml, "<doc><summary>Returns <c>true</c> if set.</summary></doc>");
    }

    #[tokio::test]
    async fn preamble_nested_in_a_paragraph() {
        let (changed, xml) = cleaned(
            "<doc><summary><para>When overridden in a derived class, gets it.</para><para>More.</para></summary></doc>",
        )
        .await;
        assert!(changed);
        assert_eq!(xml, "<doc><summary><para>Gets it.</para><para>More.</para></summary></doc>");
    }

    #[tokio::test]
    async fn later_summary_is_searched() {
        let (changed, xml) = cleaned(
            "<doc><summary>Plain.</summary><summary>when overridden in a derived class, sets it.</summary></doc>",
        )
        .await;
        assert!(changed);
        assert_eq!(xml, "<doc><summary>Plain.</summary><summary>Sets it.</summary></doc>");
    }

    #[tokio::test]
    async fn override_flag_without_overridden_member() {
        let mut table = SymbolTable::new();
        let class = table.add(SymbolData::new(SymbolKind::Type, "Shape"));
        let area = table.add_member(
            class,
            SymbolData::new(SymbolKind::Property, "Area").with_override_flag(true),
        );
        let ctx = context_for(
            table,
            area,
            "<doc><summary>When overridden in a derived class, returns the area.</summary></doc>",
        )
        .await;

        assert!(OverrideCleanupStrategy.can_apply(true, &ctx).await.unwrap());
        assert!(OverrideCleanupStrategy.apply(&ctx).await.unwrap());
        assert_eq!(
            ctx.tree().read().root().element("summary").map(|s| s.text_content()).as_deref(),
            Some("Returns the area.")
        );
    }

    #[tokio::test]
    async fn empty_remainder_is_left_alone() {
        let (changed, xml) =
            cleaned("<doc><summary>When overridden in a derived class, </summary></doc>").await;
        assert!(!changed);
        assert_eq!(xml, "<doc><summary>When overridden in a derived class, </summary></doc>");
    }

    #[tokio::test]
    async fn preamble_split_across_nodes_is_offered_but_not_applied() {
        let existing = "<doc><summary>When overridden <b>in</b> a derived class, gets it.</summary></doc>";
        let (table, over) = override_table(None);
        let ctx = context_for(table, over, existing).await;

        assert!(OverrideCleanupStrategy.can_apply(true, &ctx).await.unwrap());
        assert!(!OverrideCleanupStrategy.apply(&ctx).await.unwrap());
    }

    #[tokio::test]
    async fn requires_gate_and_override() {
        let existing = "<doc><summary>When overridden in a derived class, gets it.</summary></doc>";
        let (table, over) = override_table(None);
        let ctx = context_for(table, over, existing).await;
        assert!(!OverrideCleanupStrategy.can_apply(false, &ctx).await.unwrap());

        let mut table = SymbolTable::new();
        let class = table.add(SymbolData::new(SymbolKind::Type, "C"));
        let plain = table.add_member(class, SymbolData::new(SymbolKind::Property, "Value"));
        let ctx = context_for(table, plain, existing).await;
        assert!(!OverrideCleanupStrategy.can_apply(true, &ctx).await.unwrap());
    }
}
