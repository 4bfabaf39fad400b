//! Interactive collection of missing configuration values.
//!
//! Each value is asked for until it validates; a rejected answer prints the
//! [`ConfigurationError`] and asks again.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{bail, Context, Result};
use orbits::{
    parse_base, parse_coefficient, parse_exponent, parse_yes_no, ConfigurationError, DomainKind,
    OrbitConfig,
};
use tracing::debug;

use crate::cli::Draft;

/// Line-oriented question/answer loop over any reader and writer.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompter reading answers from `input` and writing questions to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer, for inspecting what was asked.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask `question` until `parse` accepts the answer.
    ///
    /// # Errors
    ///
    /// Fails when the input is exhausted before a valid answer arrives, or on
    /// I/O errors.
    pub fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, ConfigurationError>,
    ) -> Result<T> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("reading answer from input")?;
            if read == 0 {
                bail!("input closed while waiting for: {}", question.trim());
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(field = e.field(), error = %e, "rejected answer");
                    writeln!(self.output, "ERROR: {e}\n")?;
                }
            }
        }
    }

    /// Ask for the domain using the numbered menu.
    ///
    /// # Errors
    ///
    /// See [`ask`](Self::ask).
    pub fn ask_domain(&mut self) -> Result<DomainKind> {
        let mut menu = String::from("Please Choose Number Series for X:\n");
        for kind in DomainKind::ALL {
            menu.push_str(&format!("{} - {}\n", kind.choice(), capitalise(kind.describe())));
        }
        menu.push_str("\nYour choice: ");

        let kind = self.ask(&menu, |s| s.parse::<DomainKind>())?;
        writeln!(self.output, "The series will use {}.", kind.describe())?;
        Ok(kind)
    }

    /// Ask for every field `draft` is missing and return the full config.
    ///
    /// # Errors
    ///
    /// See [`ask`](Self::ask); also fails if the finished configuration does
    /// not validate.
    pub fn fill(&mut self, draft: Draft) -> Result<OrbitConfig> {
        writeln!(self.output, "For the equation: [ Ax^2 + Bx + C ] mod N^K")?;
        let a = match draft.a {
            Some(a) => a,
            None => self.ask("Enter A: ", |s| parse_coefficient("a", s))?,
        };
        let b = match draft.b {
            Some(b) => b,
            None => self.ask("Enter B: ", |s| parse_coefficient("b", s))?,
        };
        let c = match draft.c {
            Some(c) => c,
            None => self.ask("Enter C: ", |s| parse_coefficient("c", s))?,
        };
        let n = match draft.n {
            Some(n) => n,
            None => self.ask("Enter N: ", |s| parse_base("n", s))?,
        };
        let k = match draft.k {
            Some(k) => k,
            None => self.ask("Enter K: ", |s| parse_exponent("k", s))?,
        };
        writeln!(self.output)?;

        let domain = match draft.domain {
            Some(domain) => domain,
            None => self.ask_domain()?,
        };
        let print_inverses = match draft.print_inverses {
            Some(p) => p,
            None => self.ask("\nWould you like to print inverses? (Y/N): ", |s| {
                parse_yes_no("print_inverses", s)
            })?,
        };
        writeln!(self.output)?;

        let config = Draft {
            a: Some(a),
            b: Some(b),
            c: Some(c),
            n: Some(n),
            k: Some(k),
            domain: Some(domain),
            print_inverses: Some(print_inverses),
        }
        .complete()?;
        Ok(config)
    }
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
