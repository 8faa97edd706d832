//! Symbol service contract
//!
//! The engine never owns program metadata; it queries a semantic snapshot
//! through [`SymbolService`]. Every call is a suspension point and is
//! preceded by a cancellation [`checkpoint`].

use crate::display::CrefStyle;
use crate::error::SymbolError;
use crate::symbol::{Symbol, SymbolId};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Semantic snapshot lookups
#[async_trait]
pub trait SymbolService: Send + Sync + std::fmt::Debug {
    /// Symbol view for `id`, `None` when the snapshot does not know it
    async fn symbol(&self, id: SymbolId) -> Result<Option<Symbol>, SymbolError>;

    /// Member overridden by `member`
    async fn overridden_member(&self, member: SymbolId) -> Result<Option<SymbolId>, SymbolError>;

    /// Interface members that `member` implements explicitly, in order
    async fn explicit_interface_implementations(
        &self,
        member: SymbolId,
    ) -> Result<Vec<SymbolId>, SymbolError>;

    /// Every interface implemented by `ty`, in enumeration order
    async fn interfaces_of(&self, ty: SymbolId) -> Result<Vec<SymbolId>, SymbolError>;

    /// Members of `ty` named `name`, in declaration order
    async fn members_named(&self, ty: SymbolId, name: &str) -> Result<Vec<SymbolId>, SymbolError>;

    /// Member of `ty` that implements `interface_member`
    async fn interface_implementation(
        &self,
        ty: SymbolId,
        interface_member: SymbolId,
    ) -> Result<Option<SymbolId>, SymbolError>;

    /// Raw documentation markup (includes expanded); empty when undocumented
    async fn documentation_text(&self, id: SymbolId) -> Result<String, SymbolError>;

    /// Cref display string for `id`
    async fn display_string(&self, id: SymbolId, style: CrefStyle) -> Result<String, SymbolError>;
}

/// Fail with [`SymbolError::Cancelled`] once `cancel` has fired
///
/// # Errors
/// [`SymbolError::Cancelled`] when cancellation was requested.
#[inline]
pub fn checkpoint(cancel: &CancellationToken) -> Result<(), SymbolError> {
    if cancel.is_cancelled() {
        Err(SymbolError::Cancelled)
    } else {
        Ok(())
    }
}
