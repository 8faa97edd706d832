//! Docsmith Documentation Tree
//!
//! In-memory model of structured documentation (elements, attributes, text)
//! plus the markup plumbing around it.
//!
//! # Core Concepts
//!
//! - [`DocTree`]: a declaration's documentation rooted at a container element
//! - [`DocElement`] / [`DocNode`]: ordered element, text and comment nodes
//! - [`parse_fragment`]: markup fragment → nodes
//! - [`normalize_insignificant_whitespace`]: compacts inherited documentation
//! - [`to_compact_string`] / [`render_lines`]: single-line and indented output
//! - [`factory`]: canonical constructors for recurring documentation elements
//! - [`DocTreeHandle`]: shared, in-place mutable tree handle
//!
//! # Example
//!
//! ```rust
//! use docsmith_tree::{factory, DocTree};
//!
//! let mut tree = DocTree::empty();
//! let summary = tree.root_mut().get_or_add_element("summary");
//! summary.append("Returns ");
//! summary.append(factory::true_literal());
//! summary.append(" on success.");
//!
//! assert_eq!(
//!     tree.root().element("summary").map(|e| e.text_content()),
//!     Some("Returns true on success.".to_string())
//! );
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod handle;
mod node;
mod normalize;
mod parse;
mod write;

pub mod factory;

pub use error::TreeError;
pub use handle::DocTreeHandle;
pub use node::{DocElement, DocNode, DocTree, SYNTHETIC_ROOT};
pub use normalize::normalize_insignificant_whitespace;
pub use parse::{parse_fragment, Whitespace};
pub use write::{render_lines, to_compact_string, write_compact};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
