//! Orbit/whisker discovery over a [`DomainSeries`].
//!
//! The engine walks `start, f(start), f²(start), …` from the lowest
//! unclassified residue and classifies every new value:
//!
//! | Next value | Action |
//! |------------|--------|
//! | equals the path start | close the whole path as an orbit |
//! | already on the path | drop the prefix before it, close the suffix |
//! | on a closed orbit | whisker `current → next`, orbit gains a whisker |
//! | a whisker root | whisker `current → next` onto the whisker |
//! | anything else | extend the path |
//!
//! Residues dropped as a non-cyclic prefix stay in the series and are picked
//! up again by a later path, where they resolve into whiskers.
//!
//! Each call to [`DiscoveryEngine::step`] performs exactly one of these
//! actions, so a caller can interleave its own checks (cancellation,
//! progress) between steps. [`DiscoveryEngine::run`] simply loops until the
//! series is exhausted.
//!
//! # Example
//!
//! ```
//! use orbits::{DiscoveryEngine, DomainKind, DomainSeries, ModulusContext};
//!
//! // f(x) = x + 1 mod 3 is a single 3-cycle.
//! let ctx = ModulusContext::from_base(0, 1, 1, 3, 1).unwrap();
//! let series = DomainSeries::new(DomainKind::All, ctx.modulus()).unwrap();
//! let found = DiscoveryEngine::new(ctx, series).run();
//!
//! assert_eq!(found.orbits.len(), 1);
//! assert_eq!(found.orbits.as_slice()[0].elements(), &[0, 1, 2]);
//! assert!(found.whiskers.is_empty());
//! ```

use std::collections::HashMap;

use tracing::{debug, info, trace};

use crate::analytics::{cycle_histogram, CycleClass};
use crate::domain::DomainSeries;
use crate::modulus::ModulusContext;
use crate::orbit::OrbitStore;
use crate::whisker::{Whisker, WhiskerStore};
use crate::Residue;

/// Outcome of a single engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `value` was appended to the current path.
    Extended {
        /// The residue appended.
        value: Residue,
    },
    /// The current path closed into a new orbit.
    OrbitClosed {
        /// Discovery index of the new orbit.
        orbit: usize,
        /// Residues dropped from the front of the path (0 for a direct closure).
        discarded_prefix: usize,
    },
    /// The current path ended in a new whisker.
    WhiskerAttached {
        /// Discovery index of the new whisker.
        whisker: usize,
    },
}

/// Finished run: every domain residue is on an orbit or is a whisker root.
#[derive(Debug, Clone)]
pub struct Discovery {
    /// The map that was iterated.
    pub context: ModulusContext,
    /// Closed orbits in discovery order.
    pub orbits: OrbitStore,
    /// Whiskers in discovery order.
    pub whiskers: WhiskerStore,
}

impl Discovery {
    /// Cycle-length histogram of the discovered orbits.
    #[must_use]
    pub fn histogram(&self) -> Vec<CycleClass> {
        cycle_histogram(&self.orbits)
    }
}

/// Trace-and-classify state machine.
///
/// Owns the series being consumed together with both output stores for the
/// duration of a run.
#[derive(Debug, Clone)]
pub struct DiscoveryEngine {
    context: ModulusContext,
    series: DomainSeries,
    orbits: OrbitStore,
    whiskers: WhiskerStore,
    path: Vec<Residue>,
    path_index: HashMap<Residue, usize>,
}

impl DiscoveryEngine {
    /// Engine that will classify every residue of `series` under `context`.
    #[must_use]
    pub fn new(context: ModulusContext, series: DomainSeries) -> Self {
        Self {
            context,
            series,
            orbits: OrbitStore::new(),
            whiskers: WhiskerStore::new(),
            path: Vec::new(),
            path_index: HashMap::new(),
        }
    }

    /// True once the series is exhausted.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.series.is_empty()
    }

    /// Residues not yet classified.
    #[inline]
    #[must_use]
    pub fn series(&self) -> &DomainSeries {
        &self.series
    }

    /// Orbits closed so far.
    #[inline]
    #[must_use]
    pub fn orbits(&self) -> &OrbitStore {
        &self.orbits
    }

    /// Whiskers recorded so far.
    #[inline]
    #[must_use]
    pub fn whiskers(&self) -> &WhiskerStore {
        &self.whiskers
    }

    /// The in-progress path, start first.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Residue] {
        &self.path
    }

    /// Perform one path step.
    ///
    /// Returns `None` once the series is empty; otherwise reports what the
    /// step did.
    pub fn step(&mut self) -> Option<Step> {
        if self.series.is_empty() {
            return None;
        }
        if self.path.is_empty() {
            let start = self.series.first()?;
            self.push(start);
        }

        let current = *self.path.last()?;
        let next = self.context.apply(current);

        // Covers both a direct closure (next is the start, position 0) and a
        // rho-shaped path whose cycle begins further in.
        if let Some(&position) = self.path_index.get(&next) {
            return Some(self.close_orbit(position));
        }

        if let Some(orbit) = self.orbits.attach_whisker(next) {
            trace!(orbit, "target lies on a closed orbit");
            return Some(self.attach(current, next, true));
        }

        if self.whiskers.is_root(next) {
            return Some(self.attach(current, next, false));
        }

        trace!(from = current, to = next, "extending path");
        self.push(next);
        Some(Step::Extended { value: next })
    }

    /// Step until the series is exhausted and hand back the result.
    #[must_use]
    pub fn run(mut self) -> Discovery {
        let mut steps = 0usize;
        while self.step().is_some() {
            steps += 1;
        }
        info!(
            modulus = self.context.modulus(),
            orbits = self.orbits.len(),
            whiskers = self.whiskers.len(),
            steps,
            "discovery complete"
        );
        self.into_discovery()
    }

    /// Stop here and hand back whatever has been classified.
    ///
    /// Residues on an unfinished path are not included in either store.
    #[must_use]
    pub fn into_discovery(self) -> Discovery {
        Discovery {
            context: self.context,
            orbits: self.orbits,
            whiskers: self.whiskers,
        }
    }

    fn push(&mut self, value: Residue) {
        self.path_index.insert(value, self.path.len());
        self.path.push(value);
    }

    fn clear_path(&mut self) {
        self.path.clear();
        self.path_index.clear();
    }

    fn close_orbit(&mut self, position: usize) -> Step {
        let cycle: Vec<Residue> = self.path.drain(position..).collect();
        self.clear_path();
        for &value in &cycle {
            self.series.remove(value);
        }
        let cycle_length = cycle.len();
        let orbit = self.orbits.insert(cycle);
        debug!(
            orbit,
            cycle_length,
            discarded_prefix = position,
            "orbit closed"
        );
        Step::OrbitClosed {
            orbit,
            discarded_prefix: position,
        }
    }

    fn attach(&mut self, root: Residue, target: Residue, attaches_to_orbit: bool) -> Step {
        self.series.remove(root);
        self.clear_path();
        let whisker = self.whiskers.insert(Whisker {
            root,
            target,
            attaches_to_orbit,
        });
        debug!(root, target, attaches_to_orbit, "whisker attached");
        Step::WhiskerAttached { whisker }
    }
}
