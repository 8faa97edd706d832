//! Shared documentation tree handle

use crate::node::DocTree;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared ownership of one request's documentation tree
///
/// Cloning the handle never copies the tree: every clone observes and
/// mutates the same instance.
#[derive(Debug, Clone, Default)]
pub struct DocTreeHandle {
    inner: Arc<RwLock<DocTree>>,
}

impl DocTreeHandle {
    /// Wrap a tree
    #[inline]
    #[must_use]
    pub fn new(tree: DocTree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Shared read access
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, DocTree> {
        self.inner.read()
    }

    /// Exclusive write access
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, DocTree> {
        self.inner.write()
    }

    /// Clone of the current tree
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> DocTree {
        self.inner.read().clone()
    }

    /// True when both handles point at the same tree
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<DocTree> for DocTreeHandle {
    fn from(tree: DocTree) -> Self {
        Self::new(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_tree() {
        let handle = DocTreeHandle::new(DocTree::empty());
        let fork = handle.clone();

        fork.write().root_mut().get_or_add_element("summary");

        assert!(handle.ptr_eq(&fork));
        assert!(!handle.read().is_empty());
    }

    #[test]
    fn separate_handles_are_distinct() {
        let a = DocTreeHandle::new(DocTree::empty());
        let b = DocTreeHandle::new(DocTree::empty());
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
