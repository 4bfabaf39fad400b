//! End-to-end run and its serializable result.

use serde::Serialize;
use tracing::debug;

use crate::analytics::{cycle_histogram, inverse_pairs, CycleClass, InversePair};
use crate::config::OrbitConfig;
use crate::domain::DomainSeries;
use crate::engine::{Discovery, DiscoveryEngine};
use crate::whisker::Whisker;
use crate::Residue;

/// One orbit as presented in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrbitSummary {
    /// Position in discovery order.
    pub discovery_index: usize,
    /// Cycle residues in traversal order.
    pub elements: Vec<Residue>,
    /// Number of residues on the cycle.
    pub cycle_length: usize,
    /// Whiskers feeding directly into the orbit.
    pub whisker_count: usize,
}

/// Complete output of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// The configuration that produced this report.
    pub config: OrbitConfig,
    /// `n^k`.
    pub modulus: u64,
    /// Residues in the configured domain.
    pub domain_size: usize,
    /// Orbits in ascending cycle length; ties keep discovery order.
    pub orbits: Vec<OrbitSummary>,
    /// Whiskers sorted by target, then root.
    pub whiskers: Vec<Whisker>,
    /// Orbit counts by cycle length.
    pub histogram: Vec<CycleClass>,
    /// Inverse pairs within the domain, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverses: Option<Vec<InversePair>>,
}

impl RunReport {
    /// Validate `config`, run discovery to completion and collect the results.
    ///
    /// Inverse pairs, when requested, are computed against the full domain
    /// before discovery consumes it.
    ///
    /// # Errors
    ///
    /// Configuration or modulus errors; discovery itself cannot fail.
    pub fn generate(config: &OrbitConfig) -> crate::Result<Self> {
        config.validate()?;
        let context = config.context()?;
        let series = DomainSeries::new(config.domain, context.modulus())?;
        let domain_size = series.len();
        debug!(
            modulus = context.modulus(),
            domain = %config.domain,
            domain_size,
            "starting discovery"
        );

        let inverses = config
            .print_inverses
            .then(|| inverse_pairs(&context, &series));

        let discovery = DiscoveryEngine::new(context, series).run();
        Ok(Self::from_discovery(config.clone(), domain_size, &discovery, inverses))
    }

    /// Assemble a report from a finished discovery.
    #[must_use]
    pub fn from_discovery(
        config: OrbitConfig,
        domain_size: usize,
        discovery: &Discovery,
        inverses: Option<Vec<InversePair>>,
    ) -> Self {
        let mut orbits: Vec<OrbitSummary> = discovery
            .orbits
            .iter()
            .enumerate()
            .map(|(discovery_index, o)| OrbitSummary {
                discovery_index,
                elements: o.elements().to_vec(),
                cycle_length: o.cycle_length(),
                whisker_count: o.whisker_count(),
            })
            .collect();
        orbits.sort_by_key(|o| o.cycle_length);

        Self {
            config,
            modulus: discovery.context.modulus(),
            domain_size,
            orbits,
            whiskers: discovery.whiskers.sorted_by_target(),
            histogram: cycle_histogram(&discovery.orbits),
            inverses,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`OrbitsError::Serialization`](crate::OrbitsError::Serialization) if
    /// encoding fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
