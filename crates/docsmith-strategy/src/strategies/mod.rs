//! Built-in documentation strategies
//!
//! Default pipeline order (load-bearing):
//! 1. [`FillInStrategy`]: only as the first action of a pass
//! 2. [`FilterPriorityCleanupStrategy`]: only as a follow-up
//! 3. [`OverrideCleanupStrategy`]: only as a follow-up

mod fill_in;
mod filter_priority;
mod override_cleanup;

pub use fill_in::FillInStrategy;
pub use filter_priority::FilterPriorityCleanupStrategy;
pub use override_cleanup::{OverrideCleanupStrategy, OVERRIDE_PREAMBLE};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::context::{Declaration, DocContext};
    use docsmith_symbol::{SymbolData, SymbolId, SymbolKind, SymbolService, SymbolTable};
    use docsmith_tree::{DocTree, DocTreeHandle};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    /// Context for `id` in `table` with `existing` documentation already parsed
    pub(crate) async fn context_for(table: SymbolTable, id: SymbolId, existing: &str) -> DocContext {
        let symbol = table.symbol(id).await.unwrap().unwrap();
        DocContext::new(
            Declaration::new(id, "    "),
            symbol,
            DocTreeHandle::new(DocTree::parse(existing).unwrap()),
            Arc::new(table),
            CancellationToken::new(),
        )
    }

    /// `Derived.Value` overriding `Base.Value`, documented with `base_doc`
    pub(crate) fn override_table(base_doc: Option<&str>) -> (SymbolTable, SymbolId) {
        let mut table = SymbolTable::new();
        let base = table.add(SymbolData::new(SymbolKind::Type, "Base"));
        let mut virt = SymbolData::new(SymbolKind::Property, "Value");
        if let Some(doc) = base_doc {
            virt = virt.with_documentation(doc);
        }
        let virt = table.add_member(base, virt);
        let derived = table.add(SymbolData::new(SymbolKind::Type, "Derived").with_base_type(base));
        let over = table.add_member(
            derived,
            SymbolData::new(SymbolKind::Property, "Value").with_overridden_member(virt),
        );
        (table, over)
    }
}
