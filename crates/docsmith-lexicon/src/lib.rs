//! Docsmith Lexicon
//!
//! Small, deterministic English heuristics used when synthesizing
//! documentation text from identifiers.
//!
//! # Overview
//!
//! - [`split`]: identifier segmentation (`PascalCase`, `camelCase`, `snake_case`)
//! - [`check_acronym`]: acronym normalization (`xml` → `XML`)
//! - [`starts_with_word`]: word-boundary prefix test
//! - [`past_tense`], [`syllable_count`], [`a_or_an`]: word inflection helpers
//!
//! # Example
//!
//! ```rust
//! use docsmith_lexicon::{a_or_an, past_tense, split};
//!
//! assert_eq!(split("XmlReaderSettings", false), vec!["XML", "reader", "settings"]);
//! assert_eq!(past_tense("stop"), "stopped");
//! assert_eq!(a_or_an("SQL"), "an");
//! ```
//!
//! All lookup tables are immutable statics, so every function here is safe to
//! call concurrently from unrelated requests.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod grammar;
mod naming;
mod tables;

pub use grammar::{a_or_an, past_tense, syllable_count};
pub use naming::{check_acronym, split, starts_with_word};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
