//! Aggregate statistics over a finished run.
//!
//! - [`cycle_histogram`]: orbit counts grouped by cycle length
//! - [`inverse_pairs`]: multiplicative inverse pairs within a domain

use std::fmt;

use serde::Serialize;

use crate::domain::DomainSeries;
use crate::modulus::ModulusContext;
use crate::orbit::OrbitStore;
use crate::Residue;

/// Number of orbits sharing one cycle length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleClass {
    /// Cycle length shared by the orbits in this class.
    pub cycle_length: usize,
    /// How many orbits have that length.
    pub count: usize,
}

impl CycleClass {
    /// True for the class of length-1 orbits.
    #[inline]
    #[must_use]
    pub const fn is_fixed_point(&self) -> bool {
        self.cycle_length == 1
    }
}

impl fmt::Display for CycleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed_point() {
            write!(f, "Fixed Points: {}", self.count)
        } else {
            write!(f, "{}-Cycle Orbits: {}", self.cycle_length, self.count)
        }
    }
}

/// Orbit counts by cycle length, ascending.
///
/// Orbits are stably sorted by length and consecutive equal lengths are
/// grouped, so every length that occurs gets exactly one class.
#[must_use]
pub fn cycle_histogram(orbits: &OrbitStore) -> Vec<CycleClass> {
    let mut classes: Vec<CycleClass> = Vec::new();
    for orbit in orbits.sorted_by_cycle_length() {
        match classes.last_mut() {
            Some(class) if class.cycle_length == orbit.cycle_length() => class.count += 1,
            _ => classes.push(CycleClass {
                cycle_length: orbit.cycle_length(),
                count: 1,
            }),
        }
    }
    classes
}

/// A pair `(x, y)` with `x · y ≡ 1 (mod m)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InversePair {
    /// Left residue.
    pub x: Residue,
    /// Its inverse.
    pub y: Residue,
}

impl fmt::Display for InversePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.x, self.y)
    }
}

/// Every inverse pair whose members both lie in `domain`, ordered by `x`.
///
/// Inverses mod `m` are unique, so each invertible `x` contributes at most
/// one pair; whenever `(x, y)` is listed, `(y, x)` is too. Run this on a
/// snapshot of the series taken before discovery consumes it.
#[must_use]
pub fn inverse_pairs(context: &ModulusContext, domain: &DomainSeries) -> Vec<InversePair> {
    domain
        .iter()
        .filter_map(|x| {
            context
                .mul_inverse(x)
                .filter(|&y| domain.contains(y))
                .map(|y| InversePair { x, y })
        })
        .collect()
}
