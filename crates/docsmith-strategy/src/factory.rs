//! Documentation elements that reference symbols
//!
//! Builds on [`docsmith_tree::factory`] with cref targets taken from the
//! symbol service's display strings.

use docsmith_symbol::{CrefStyle, SymbolError, SymbolId, SymbolService};
use docsmith_tree::{factory, DocElement};

/// `<see cref="global::Namespace.Type.Member(...)"/>`
///
/// # Errors
/// The service's failure to describe `symbol`.
pub async fn see_symbol(service: &dyn SymbolService, symbol: SymbolId) -> Result<DocElement, SymbolError> {
    let cref = service.display_string(symbol, CrefStyle::Full).await?;
    Ok(factory::see(&cref))
}

/// `<see cref="Type.Member(...)"/>` without namespace qualification
///
/// # Errors
/// The service's failure to describe `symbol`.
pub async fn see_symbol_short(
    service: &dyn SymbolService,
    symbol: SymbolId,
) -> Result<DocElement, SymbolError> {
    let cref = service.display_string(symbol, CrefStyle::Short).await?;
    Ok(factory::see(&cref))
}
