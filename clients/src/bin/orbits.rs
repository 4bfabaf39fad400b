//! `orbits`: orbit and whisker discovery for (a·x² + b·x + c) mod n^k.
//!
//! Classifies every residue of the chosen domain as a point on a cycle
//! (orbit) or a pendant feeding one (whisker), then prints the orbits,
//! whiskers, a cycle-length histogram and, on request, the inverse pairs.
//!
//! **Usage:**
//! ```text
//! orbits -a 1 -b 0 -c 1 -n 2 -k 10 [--domain all|odd|even] [--inverses | --no-inverses] [--format text|json]
//! orbits --config run.toml [-n 3]
//! orbits --interactive
//! ```
//!
//! Run with no arguments to be prompted for every value. Set `RUST_LOG` or
//! pass `-v` for diagnostics on stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::Parser;
use orbits::{render_report, RunReport};
use orbits_clients::{Args, OutputFormat, Prompter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.resolve(&mut Prompter::stdio())?;
    tracing::info!(?config, "configuration resolved");

    let report = RunReport::generate(&config).context("orbit discovery failed")?;

    match args.format {
        OutputFormat::Text => print!("{}", render_report(&report)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
