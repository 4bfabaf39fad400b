//! Closed orbits (cycles of `f`) and the store that indexes them.

use std::collections::HashMap;

use serde::Serialize;

use crate::Residue;

/// One full cycle under `f`.
///
/// Read cyclically, `f(elements[i]) == elements[(i + 1) % len]`. Each residue
/// appears once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orbit {
    elements: Vec<Residue>,
    whisker_count: usize,
}

impl Orbit {
    pub(crate) fn new(elements: Vec<Residue>) -> Self {
        debug_assert!(!elements.is_empty(), "an orbit has at least one element");
        Self {
            elements,
            whisker_count: 0,
        }
    }

    /// Cycle residues in traversal order, starting from the first one visited.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[Residue] {
        &self.elements
    }

    /// Number of distinct residues on the cycle.
    #[inline]
    #[must_use]
    pub fn cycle_length(&self) -> usize {
        self.elements.len()
    }

    /// True for a cycle of length 1.
    #[inline]
    #[must_use]
    pub fn is_fixed_point(&self) -> bool {
        self.elements.len() == 1
    }

    /// Whiskers that feed directly into this orbit.
    #[inline]
    #[must_use]
    pub fn whisker_count(&self) -> usize {
        self.whisker_count
    }
}

/// Growing collection of closed orbits with a residue → orbit index.
#[derive(Debug, Clone, Default)]
pub struct OrbitStore {
    orbits: Vec<Orbit>,
    index: HashMap<Residue, usize>,
}

impl OrbitStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a closed cycle and return its discovery index.
    pub(crate) fn insert(&mut self, elements: Vec<Residue>) -> usize {
        let id = self.orbits.len();
        for &e in &elements {
            let previous = self.index.insert(e, id);
            debug_assert!(previous.is_none(), "residue {e} already on an orbit");
        }
        self.orbits.push(Orbit::new(elements));
        id
    }

    /// Whether `value` lies on any orbit.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: Residue) -> bool {
        self.index.contains_key(&value)
    }

    /// Discovery index of the orbit containing `value`.
    #[inline]
    #[must_use]
    pub fn orbit_of(&self, value: Residue) -> Option<usize> {
        self.index.get(&value).copied()
    }

    /// Increment the whisker count of the orbit containing `value`.
    ///
    /// Returns the orbit's index, or `None` when `value` is on no orbit.
    pub(crate) fn attach_whisker(&mut self, value: Residue) -> Option<usize> {
        let id = self.orbit_of(value)?;
        self.orbits[id].whisker_count += 1;
        Some(id)
    }

    /// Orbit by discovery index.
    #[inline]
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Orbit> {
        self.orbits.get(id)
    }

    /// Number of orbits.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    /// True when no orbit has been closed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }

    /// Orbits in discovery order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Orbit] {
        &self.orbits
    }

    /// Orbits in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Orbit> {
        self.orbits.iter()
    }

    /// Orbits sorted by ascending cycle length; ties keep discovery order.
    #[must_use]
    pub fn sorted_by_cycle_length(&self) -> Vec<&Orbit> {
        let mut sorted: Vec<&Orbit> = self.orbits.iter().collect();
        sorted.sort_by_key(|o| o.cycle_length());
        sorted
    }

    /// Total residues lying on orbits.
    #[must_use]
    pub fn residue_count(&self) -> usize {
        self.index.len()
    }
}

impl<'a> IntoIterator for &'a OrbitStore {
    type Item = &'a Orbit;
    type IntoIter = std::slice::Iter<'a, Orbit>;

    fn into_iter(self) -> Self::IntoIter {
        self.orbits.iter()
    }
}
