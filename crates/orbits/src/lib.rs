//! Orbit and whisker structure of quadratic maps over ℤ/mℤ.
//!
//! Iterating `f(x) = (a·x² + b·x + c) mod m`, with `m = n^k`, turns the
//! residues into a functional graph: every residue eventually falls onto a
//! cycle. This crate partitions a chosen domain of residues into
//!
//! - **orbits**: the cycles themselves, and
//! - **whiskers**: single-residue pendants `root → f(root)` hanging off an
//!   orbit or off another whisker,
//!
//! and reports a cycle-length histogram and, optionally, the multiplicative
//! inverse pairs of the domain.
//!
//! # Pipeline
//!
//! ```text
//! OrbitConfig → ModulusContext + DomainSeries → DiscoveryEngine → Discovery
//!                                                                  ↓
//!                                     RunReport → render / JSON
//! ```
//!
//! # Example
//!
//! ```
//! use orbits::{DiscoveryEngine, DomainKind, DomainSeries, ModulusContext};
//!
//! // f(x) = x² mod 5
//! let ctx = ModulusContext::from_base(1, 0, 0, 5, 1).unwrap();
//! let series = DomainSeries::new(DomainKind::All, ctx.modulus()).unwrap();
//! let found = DiscoveryEngine::new(ctx, series).run();
//!
//! // 0 and 1 are fixed points; 4 hangs off 1, while 2 and 3 hang off 4.
//! assert_eq!(found.orbits.len(), 2);
//! assert_eq!(found.whiskers.len(), 3);
//! assert_eq!(found.histogram()[0].to_string(), "Fixed Points: 2");
//! ```
//!
//! # Numeric model
//!
//! Residues are `u64`. Coefficients are reduced into `[0, m)` up front and
//! products are formed in `u128`, so `f` is exact for any modulus that fits
//! in 64 bits. A modulus `n^k` that does not fit is rejected rather than
//! wrapped.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod analytics;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod modulus;
pub mod orbit;
pub mod render;
pub mod report;
pub mod whisker;

/// A residue of ℤ/mℤ, always in `[0, m)`.
pub type Residue = u64;

pub use analytics::{cycle_histogram, inverse_pairs, CycleClass, InversePair};
pub use config::{parse_base, parse_coefficient, parse_exponent, parse_yes_no, OrbitConfig};
pub use domain::{DomainKind, DomainSeries, MAX_DOMAIN};
pub use engine::{Discovery, DiscoveryEngine, Step};
pub use error::{ConfigurationError, DomainError, OrbitsError, Result};
pub use modulus::{modulus_for, ModulusContext};
pub use orbit::{Orbit, OrbitStore};
pub use render::render_report;
pub use report::{OrbitSummary, RunReport};
pub use whisker::{Whisker, WhiskerStore};
