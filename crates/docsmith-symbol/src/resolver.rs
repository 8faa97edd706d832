//! Inheritance source resolution
//!
//! Decides which declaration's documentation a symbol inherits.

use crate::error::SymbolError;
use crate::service::{checkpoint, SymbolService};
use crate::symbol::{Symbol, SymbolId, SymbolKind};
use tokio_util::sync::CancellationToken;

/// Find the declaration whose documentation `symbol` should inherit
///
/// # Priority
/// 1. Members (method, property, event): the overridden member, else the
///    first explicit interface implementation
/// 2. Types that are their own original definition: the base type, unless it
///    is absent or the universal root type
/// 3. Otherwise: the first interface member (interfaces of the containing
///    type in enumeration order, then same-name same-kind members in
///    declaration order) whose implementation in the containing type is
///    `symbol` itself (implicit implementation)
///
/// `Ok(None)` means there is nothing to inherit.
///
/// # Errors
/// [`SymbolError::Cancelled`] at any lookup once `cancel` fires, or the
/// service's own failure.
pub async fn resolve_inheritance_source(
    service: &dyn SymbolService,
    symbol: &Symbol,
    cancel: &CancellationToken,
) -> Result<Option<SymbolId>, SymbolError> {
    let direct = match symbol.kind {
        kind if kind.is_member() => {
            checkpoint(cancel)?;
            match service.overridden_member(symbol.id).await? {
                Some(overridden) => Some(overridden),
                None => {
                    checkpoint(cancel)?;
                    service
                        .explicit_interface_implementations(symbol.id)
                        .await?
                        .first()
                        .copied()
                }
            }
        }
        SymbolKind::Type if symbol.is_definition => match symbol.base_type {
            Some(base) => {
                checkpoint(cancel)?;
                service
                    .symbol(base)
                    .await?
                    .filter(|base| !base.is_root_object())
                    .map(|base| base.id)
            }
            None => None,
        },
        _ => None,
    };

    if let Some(target) = direct {
        tracing::trace!(symbol = %symbol.id, %target, "resolved direct inheritance source");
        return Ok(Some(target));
    }

    let Some(containing) = symbol.containing_type else {
        return Ok(None);
    };

    let implicit = find_implicit_implementation(service, symbol, containing, cancel).await?;
    if let Some(target) = implicit {
        tracing::trace!(symbol = %symbol.id, %target, "resolved implicit interface member");
    }
    Ok(implicit)
}

async fn find_implicit_implementation(
    service: &dyn SymbolService,
    symbol: &Symbol,
    containing: SymbolId,
    cancel: &CancellationToken,
) -> Result<Option<SymbolId>, SymbolError> {
    checkpoint(cancel)?;
    for interface in service.interfaces_of(containing).await? {
        checkpoint(cancel)?;
        for member in service.members_named(interface, &symbol.name).await? {
            checkpoint(cancel)?;
            let same_kind = service
                .symbol(member)
                .await?
                .is_some_and(|m| m.kind == symbol.kind);
            if !same_kind {
                continue;
            }

            checkpoint(cancel)?;
            if service.interface_implementation(containing, member).await? == Some(symbol.id) {
                return Ok(Some(member));
            }
        }
    }
    Ok(None)
}
