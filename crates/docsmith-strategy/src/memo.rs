//! Per-request memo cache keyed by strategy
//!
//! A strategy that does expensive work in `can_apply` stores the result here
//! so that `apply` (and the forked commit context) can reuse it.

use crate::key::StrategyKey;
use dashmap::DashMap;
use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::future::Future;
use std::sync::Arc;

/// Type-erased values keyed by [`StrategyKey`]
///
/// At most one value per key. Values are stored behind `Arc<dyn Any>` and
/// recovered with a typed downcast; a lookup with the wrong type misses.
#[derive(Default)]
pub struct MemoCache {
    entries: DashMap<StrategyKey, Arc<dyn Any + Send + Sync>>,
}

impl MemoCache {
    /// Create empty cache
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value
    #[inline]
    pub fn insert<T: Any + Send + Sync>(&self, key: StrategyKey, value: T) {
        self.entries.insert(key, Arc::new(value));
    }

    /// Typed copy of the value under `key`
    #[must_use]
    pub fn get<T: Any + Send + Sync + Clone>(&self, key: StrategyKey) -> Option<T> {
        self.entries
            .get(&key)
            .and_then(|entry| entry.value().downcast_ref::<T>().cloned())
    }

    /// Return the cached value or compute, store and return it
    ///
    /// Errors from `f` are returned unchanged and nothing is stored.
    pub async fn get_or_try_insert_with<T, E, F, Fut>(&self, key: StrategyKey, f: F) -> Result<T, E>
    where
        T: Any + Send + Sync + Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.get::<T>(key) {
            tracing::trace!(%key, "memo hit");
            return Ok(cached);
        }

        let value = f().await?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Check if a value is stored under `key`
    #[inline]
    #[must_use]
    pub fn contains(&self, key: StrategyKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of stored values
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for MemoCache {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_lookup() {
        let memo = MemoCache::new();
        memo.insert(StrategyKey::FillIn, String::from("<summary>x</summary>"));

        assert_eq!(memo.get::<String>(StrategyKey::FillIn).as_deref(), Some("<summary>x</summary>"));
        assert_eq!(memo.get::<u32>(StrategyKey::FillIn), None);
        assert_eq!(memo.get::<String>(StrategyKey::OverrideCleanup), None);
    }

    #[test]
    fn one_value_per_key() {
        let memo = MemoCache::new();
        memo.insert(StrategyKey::FillIn, 1_u32);
        memo.insert(StrategyKey::FillIn, 2_u32);
        assert_eq!(memo.len(), 1);
        assert_eq!(memo.get::<u32>(StrategyKey::FillIn), Some(2));
    }

    #[tokio::test]
    async fn computes_once() {
        let memo = MemoCache::new();
        let mut calls = 0;

        for _ in 0..3 {
            let value: Result<u32, ()> = memo
                .get_or_try_insert_with(StrategyKey::FillIn, || {
                    calls += 1;
                    async { Ok(7) }
                })
                .await;
            assert_eq!(value, Ok(7));
        }
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let memo = MemoCache::new();
        let failed: Result<u32, &str> = memo
            .get_or_try_insert_with(StrategyKey::FillIn, || async { Err("boom") })
            .await;

        assert_eq!(failed, Err("boom"));
        assert!(!memo.contains(StrategyKey::FillIn));
        assert!(memo.is_empty());
    }
}
