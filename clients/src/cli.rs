//! Command-line arguments and how they combine with a config file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use orbits::{ConfigurationError, DomainKind, OrbitConfig};

use crate::prompt::Prompter;

/// Output format for the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console listing.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Discover the orbits and whiskers of (a·x² + b·x + c) mod n^k.
#[derive(Debug, Parser)]
#[command(
    name = "orbits",
    version,
    about = "Partition residues mod n^k into orbits and whiskers of a quadratic map",
    allow_negative_numbers = true
)]
pub struct Args {
    /// TOML file with a, b, c, n, k, domain and print_inverses; flags override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Quadratic coefficient A.
    #[arg(short = 'a', long)]
    pub a: Option<i64>,

    /// Linear coefficient B.
    #[arg(short = 'b', long)]
    pub b: Option<i64>,

    /// Constant term C.
    #[arg(short = 'c', long)]
    pub c: Option<i64>,

    /// Modulus base N (positive).
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub n: Option<u64>,

    /// Modulus exponent K.
    #[arg(short = 'k', long)]
    pub k: Option<u32>,

    /// Residues to classify: all, odd or even (or menu number 1 - 3).
    #[arg(long, value_parser = parse_domain)]
    pub domain: Option<DomainKind>,

    /// Also list multiplicative inverse pairs within the domain.
    #[arg(long, overrides_with = "no_inverses")]
    pub inverses: bool,

    /// Do not list inverse pairs, even if the config file asks for them.
    #[arg(long, overrides_with = "inverses")]
    pub no_inverses: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Prompt for any value not given on the command line.
    #[arg(long)]
    pub interactive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_domain(s: &str) -> Result<DomainKind, ConfigurationError> {
    s.parse()
}

/// A configuration that may still be missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Quadratic coefficient.
    pub a: Option<i64>,
    /// Linear coefficient.
    pub b: Option<i64>,
    /// Constant term.
    pub c: Option<i64>,
    /// Modulus base.
    pub n: Option<u64>,
    /// Modulus exponent.
    pub k: Option<u32>,
    /// Domain selection.
    pub domain: Option<DomainKind>,
    /// Whether to list inverse pairs.
    pub print_inverses: Option<bool>,
}

impl Draft {
    /// Values taken from a complete configuration.
    #[must_use]
    pub fn from_config(config: OrbitConfig) -> Self {
        Self {
            a: Some(config.a),
            b: Some(config.b),
            c: Some(config.c),
            n: Some(config.n),
            k: Some(config.k),
            domain: Some(config.domain),
            print_inverses: Some(config.print_inverses),
        }
    }

    /// `self` with every field that `top` sets replaced by `top`'s value.
    #[must_use]
    pub fn overlay(self, top: Draft) -> Self {
        Self {
            a: top.a.or(self.a),
            b: top.b.or(self.b),
            c: top.c.or(self.c),
            n: top.n.or(self.n),
            k: top.k.or(self.k),
            domain: top.domain.or(self.domain),
            print_inverses: top.print_inverses.or(self.print_inverses),
        }
    }

    /// True when nothing has been supplied.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Finish the draft, defaulting the domain to all residues and inverse
    /// listing to off.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::Empty`] naming the first missing required field.
    pub fn complete(self) -> Result<OrbitConfig, ConfigurationError> {
        let config = OrbitConfig {
            a: self.a.ok_or(ConfigurationError::Empty { field: "a" })?,
            b: self.b.ok_or(ConfigurationError::Empty { field: "b" })?,
            c: self.c.ok_or(ConfigurationError::Empty { field: "c" })?,
            n: self.n.ok_or(ConfigurationError::Empty { field: "n" })?,
            k: self.k.ok_or(ConfigurationError::Empty { field: "k" })?,
            domain: self.domain.unwrap_or_default(),
            print_inverses: self.print_inverses.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Args {
    /// Values supplied as flags.
    #[must_use]
    pub fn draft(&self) -> Draft {
        Draft {
            a: self.a,
            b: self.b,
            c: self.c,
            n: self.n,
            k: self.k,
            domain: self.domain,
            print_inverses: if self.no_inverses {
                Some(false)
            } else {
                self.inverses.then_some(true)
            },
        }
    }

    /// Build the run configuration: config file first, flags on top, then
    /// prompts for whatever is still missing when running interactively.
    ///
    /// With no config file and no value flags at all the tool runs
    /// interactively, as if `--interactive` had been given.
    ///
    /// # Errors
    ///
    /// Unreadable or invalid config files, a missing required value in
    /// non-interactive mode, or a prompt whose input stream closed early.
    pub fn resolve<R, W>(&self, prompter: &mut Prompter<R, W>) -> Result<OrbitConfig>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        let base = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                let config = OrbitConfig::from_toml_str(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?;
                Draft::from_config(config)
            }
            None => Draft::default(),
        };
        let draft = base.overlay(self.draft());

        if self.interactive || draft.is_blank() {
            return prompter.fill(draft);
        }
        draft
            .complete()
            .context("missing configuration; pass the value as a flag or use --interactive")
    }
}
