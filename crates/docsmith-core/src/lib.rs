//! Docsmith Core
//!
//! Inherited documentation synthesis and cleanup for program declarations.
//!
//! # Architecture
//!
//! ```text
//! DocumentHost ──snapshot──▶ DocCommentRefactoring ──offer──▶ [CandidateAction]
//!                                     │
//!                         selection ──┘──commit──▶ DocEdit ──▶ EditApplier
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! let provider = DocCommentRefactoring::new(DocsmithConfig::new());
//! let actions = provider.compute_refactorings(&host, &declaration, &cancel).await?;
//!
//! if let Some(action) = actions.first() {
//!     provider.generate(&host, action, &mut applier, &cancel).await?;
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod host;
mod refactoring;
mod render;

pub use config::DocsmithConfig;
pub use error::DocsmithError;
pub use host::{DocEdit, DocumentHost, EditApplier};
pub use refactoring::{CandidateAction, DocCommentRefactoring};
pub use render::{detect_newline, render_documentation};

/// Prelude for common imports
pub mod prelude {
    //! Common imports for documentation refactorings
    pub use crate::{
        CandidateAction, DocCommentRefactoring, DocEdit, DocsmithConfig, DocsmithError,
        DocumentHost, EditApplier,
    };
    pub use docsmith_strategy::{Declaration, Pipeline, StrategyKey};
    pub use docsmith_symbol::{SymbolId, SymbolService, SymbolTable};
}

/// Version of Docsmith
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
