//! Whiskers: single-residue pendants hanging off orbits or other whiskers.

use std::collections::HashSet;

use serde::Serialize;

use crate::Residue;

/// One pendant attachment `root → target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Whisker {
    /// Residue at which the tail was cut off.
    pub root: Residue,
    /// `f(root)`.
    pub target: Residue,
    /// True when `target` lies on an orbit, false when it is another
    /// whisker's root.
    pub attaches_to_orbit: bool,
}

/// Growing collection of whiskers with a root index.
#[derive(Debug, Clone, Default)]
pub struct WhiskerStore {
    whiskers: Vec<Whisker>,
    roots: HashSet<Residue>,
}

impl WhiskerStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a whisker and return its discovery index.
    pub(crate) fn insert(&mut self, whisker: Whisker) -> usize {
        let fresh = self.roots.insert(whisker.root);
        debug_assert!(fresh, "residue {} is already a whisker root", whisker.root);
        self.whiskers.push(whisker);
        self.whiskers.len() - 1
    }

    /// Whether `value` is the root of a recorded whisker.
    #[inline]
    #[must_use]
    pub fn is_root(&self, value: Residue) -> bool {
        self.roots.contains(&value)
    }

    /// Whisker by discovery index.
    #[inline]
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Whisker> {
        self.whiskers.get(id)
    }

    /// Number of whiskers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.whiskers.len()
    }

    /// True when no whisker has been recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.whiskers.is_empty()
    }

    /// Whiskers in discovery order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Whisker] {
        &self.whiskers
    }

    /// Whiskers in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Whisker> {
        self.whiskers.iter()
    }

    /// Whiskers grouped by target: sorted by `(target, root)`.
    #[must_use]
    pub fn sorted_by_target(&self) -> Vec<Whisker> {
        let mut sorted = self.whiskers.clone();
        sorted.sort_by_key(|w| (w.target, w.root));
        sorted
    }
}

impl<'a> IntoIterator for &'a WhiskerStore {
    type Item = &'a Whisker;
    type IntoIter = std::slice::Iter<'a, Whisker>;

    fn into_iter(self) -> Self::IntoIter {
        self.whiskers.iter()
    }
}
