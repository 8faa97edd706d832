//! Stable strategy identities

use std::fmt::{self, Display, Formatter};

/// Identity of a strategy within a pipeline
///
/// Also the key of the strategy's entry in the [`crate::MemoCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKey {
    /// Copy inherited documentation into an empty tree
    FillIn,

    /// Remove `filterpriority`
    FilterPriorityCleanup,

    /// Rewrite the "When overridden in a derived class" summary
    OverrideCleanup,

    /// Strategy registered outside this crate
    Custom(&'static str),
}

impl StrategyKey {
    /// Key as a stable string
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::FillIn => "fill_in",
            Self::FilterPriorityCleanup => "filter_priority_cleanup",
            Self::OverrideCleanup => "override_cleanup",
            Self::Custom(name) => name,
        }
    }
}

impl Display for StrategyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
