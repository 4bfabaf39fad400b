//! Plain-text rendering of a [`RunReport`].

use std::fmt::{self, Write};

use crate::analytics::{CycleClass, InversePair};
use crate::report::{OrbitSummary, RunReport};
use crate::whisker::Whisker;

const RULE: &str = "----------------------------------------";

/// Residues printed per line of an orbit chain.
pub const ELEMENTS_PER_LINE: usize = 10;

/// Full console rendering: inverses (if present), orbits, whiskers,
/// analytics.
#[must_use]
pub fn render_report(report: &RunReport) -> String {
    report.to_string()
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self)
    }
}

/// Write the full rendering into any [`fmt::Write`] sink.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_report<W: Write>(out: &mut W, report: &RunReport) -> fmt::Result {
    writeln!(
        out,
        "For the equation: [ {}x^2 + {}x + {} ] mod {}^{} = {}",
        report.config.a, report.config.b, report.config.c, report.config.n, report.config.k,
        report.modulus
    )?;
    writeln!(out, "The series uses {}.", report.config.domain.describe())?;
    if let Some(pairs) = &report.inverses {
        write_inverses(out, pairs)?;
    }
    write_orbits(out, &report.orbits)?;
    if !report.whiskers.is_empty() {
        write_whiskers(out, &report.whiskers)?;
    }
    write_analytics(out, &report.histogram)
}

/// Inverse pairs as `x <-> y`, one per line.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_inverses<W: Write>(out: &mut W, pairs: &[InversePair]) -> fmt::Result {
    writeln!(out, "{RULE}\n")?;
    writeln!(out, "Inverses:")?;
    for pair in pairs {
        writeln!(out, "{pair}")?;
    }
    writeln!(out, "\n{RULE}")
}

/// Each orbit as an arrow chain with its size and whisker count.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_orbits<W: Write>(out: &mut W, orbits: &[OrbitSummary]) -> fmt::Result {
    for orbit in orbits {
        writeln!(out, "\nOrbit:")?;
        for (i, element) in orbit.elements.iter().enumerate() {
            let place = i + 1;
            write!(out, "{element}")?;
            if place < orbit.elements.len() {
                write!(out, " -> ")?;
            } else {
                writeln!(out)?;
            }
            if place % ELEMENTS_PER_LINE == 0 && place < orbit.elements.len() {
                writeln!(out)?;
            }
        }
        if orbit.cycle_length > 1 {
            writeln!(out, "Orbit Size: {} cycles", orbit.cycle_length)?;
        } else {
            writeln!(out, "Orbit Size: {} fixed point", orbit.cycle_length)?;
        }
        writeln!(out, "Whiskers: {}\n", orbit.whisker_count)?;
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}

/// Whiskers grouped by target; a rule separates targets and a `*` marks a
/// whisker that hangs off another whisker rather than an orbit.
///
/// Expects `whiskers` sorted by target.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_whiskers<W: Write>(out: &mut W, whiskers: &[Whisker]) -> fmt::Result {
    writeln!(out, "Total Whiskers : {}", whiskers.len())?;
    let mut last_target = None;
    for w in whiskers {
        if last_target != Some(w.target) {
            last_target = Some(w.target);
            writeln!(out, "{RULE}")?;
        }
        let marker = if w.attaches_to_orbit { "" } else { "*" };
        writeln!(out, "{} -> {}{marker}", w.root, w.target)?;
    }
    Ok(())
}

/// Histogram block.
///
/// # Errors
///
/// Propagates errors from the sink.
pub fn write_analytics<W: Write>(out: &mut W, histogram: &[CycleClass]) -> fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Orbit Analytics")?;
    writeln!(out, "{RULE}")?;
    for class in histogram {
        writeln!(out, "{class}")?;
    }
    writeln!(out, "{RULE}")
}
