//! Inherited documentation lookup

use crate::context::DocContext;
use crate::error::StrategyError;
use docsmith_symbol::resolve_inheritance_source;
use docsmith_tree::normalize_insignificant_whitespace;

/// Compact documentation text the context's symbol inherits
///
/// Resolves the inheritance source, fetches its documentation and strips
/// insignificant whitespace. Returns an empty string when there is no source
/// or the source has no documentation.
///
/// # Errors
/// Cancellation, symbol service faults, or [`StrategyError::Tree`] when the
/// source's documentation is malformed.
#[tracing::instrument(level = "debug", skip_all, fields(symbol = %ctx.symbol().id))]
pub async fn inherited_documentation(ctx: &DocContext) -> Result<String, StrategyError> {
    let Some(source) = resolve_inheritance_source(ctx.service(), ctx.symbol(), ctx.cancel()).await?
    else {
        tracing::debug!("no inheritance source");
        return Ok(String::new());
    };

    ctx.checkpoint()?;
    let raw = ctx.service().documentation_text(source).await?;
    if raw.trim().is_empty() {
        tracing::debug!(%source, "inheritance source is undocumented");
        return Ok(String::new());
    }

    Ok(normalize_insignificant_whitespace(&raw)?)
}
