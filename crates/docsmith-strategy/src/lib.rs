//! Docsmith Strategy Chain
//!
//! Pluggable documentation operations run in a fixed, load-bearing order.
//!
//! # Core Concepts
//!
//! - [`DocStrategy`]: `can_apply(gate, ctx)` / `apply(ctx)` pair
//! - [`Pipeline`]: ordered strategies with an offer pass and a commit pass
//! - [`DocContext`]: declaration, symbol, shared tree, snapshot, cancellation
//!   and the memo cache shared with its forks
//! - Built-ins: [`FillInStrategy`], [`FilterPriorityCleanupStrategy`],
//!   [`OverrideCleanupStrategy`]
//!
//! # Gate
//!
//! Both passes thread one boolean through the scan. It starts `false` and
//! latches to `true` at the first strategy whose `can_apply` holds; a later
//! failing strategy never resets it.
//!
//! # Example
//!
//! ```rust,ignore
//! let pipeline = Pipeline::with_defaults();
//! let offers = pipeline.offer(&ctx).await?;
//!
//! // later, after the user picked offers[0]
//! let ctx = ctx.fork(fresh_snapshot, cancel);
//! let report = pipeline.commit(offers[0].index, &ctx).await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod context;
mod error;
mod inherit;
mod key;
mod memo;
mod pipeline;
mod strategy;

pub mod factory;
pub mod strategies;

pub use context::{Declaration, DocContext};
pub use error::StrategyError;
pub use inherit::inherited_documentation;
pub use key::StrategyKey;
pub use memo::MemoCache;
pub use pipeline::{AppliedStrategy, CommitReport, Offer, Pipeline};
pub use strategies::{FillInStrategy, FilterPriorityCleanupStrategy, OverrideCleanupStrategy};
pub use strategy::DocStrategy;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
