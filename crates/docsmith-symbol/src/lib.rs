//! Docsmith Symbol System
//!
//! Declarations as the documentation engine sees them.
//!
//! # Overview
//!
//! - [`Symbol`] / [`SymbolData`]: kind, name and inheritance relationships
//! - [`SymbolService`]: async lookup contract against a semantic snapshot
//! - [`SymbolTable`]: in-memory snapshot, loadable from JSON
//! - [`resolve_inheritance_source`]: finds the declaration whose
//!   documentation a symbol should inherit
//!
//! # Example
//!
//! ```rust
//! use docsmith_symbol::{resolve_inheritance_source, SymbolData, SymbolKind, SymbolService, SymbolTable};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), docsmith_symbol::SymbolError> {
//! let mut table = SymbolTable::new();
//! let base = table.add(SymbolData::new(SymbolKind::Type, "Stream"));
//! let read = table.add_member(base, SymbolData::new(SymbolKind::Method, "Read"));
//! let derived = table.add(SymbolData::new(SymbolKind::Type, "FileStream").with_base_type(base));
//! let over = table.add_member(
//!     derived,
//!     SymbolData::new(SymbolKind::Method, "Read").with_overridden_member(read),
//! );
//!
//! let symbol = table.symbol(over).await?.expect("declared");
//! let source = resolve_inheritance_source(&table, &symbol, &CancellationToken::new()).await?;
//! assert_eq!(source, Some(read));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod display;
pub mod error;
pub mod resolver;
pub mod service;
pub mod symbol;
pub mod table;

// Re-exports
pub use display::{format_cref, CrefStyle, DisplayParts};
pub use error::SymbolError;
pub use resolver::resolve_inheritance_source;
pub use service::{checkpoint, SymbolService};
pub use symbol::{InterfaceMapping, SpecialType, Symbol, SymbolData, SymbolId, SymbolKind};
pub use table::SymbolTable;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for symbol operations
    pub use crate::{
        resolve_inheritance_source, CrefStyle, Symbol, SymbolData, SymbolError, SymbolId,
        SymbolKind, SymbolService, SymbolTable,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
