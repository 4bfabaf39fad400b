//! Run configuration and field-level validation.
//!
//! Values arrive as text from a prompt, a command line or a TOML file. The
//! `parse_*` helpers turn one field's text into a typed value and name the
//! field in every [`ConfigurationError`], so a caller can re-ask for just that
//! value.
//!
//! ```
//! use orbits::{DomainKind, OrbitConfig};
//!
//! let config = OrbitConfig::from_toml_str(
//!     "a = 1\nb = 0\nc = 0\nn = 5\nk = 1\ndomain = \"odd\"\n",
//! ).unwrap();
//! assert_eq!(config.domain, DomainKind::Odd);
//! assert_eq!(config.modulus().unwrap(), 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::DomainKind;
use crate::error::{ConfigurationError, DomainError};
use crate::modulus::{modulus_for, ModulusContext};

/// Everything needed to run discovery for `(a·x² + b·x + c) mod n^k`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Quadratic coefficient.
    pub a: i64,
    /// Linear coefficient.
    pub b: i64,
    /// Constant term.
    pub c: i64,
    /// Base of the modulus.
    pub n: u64,
    /// Exponent of the modulus.
    pub k: u32,
    /// Which residues to classify.
    #[serde(default)]
    pub domain: DomainKind,
    /// Also list multiplicative inverse pairs within the domain.
    #[serde(default)]
    pub print_inverses: bool,
}

impl OrbitConfig {
    /// `m = n^k`.
    ///
    /// # Errors
    ///
    /// See [`modulus_for`].
    pub fn modulus(&self) -> Result<u64, DomainError> {
        modulus_for(self.n, self.k)
    }

    /// The map described by this configuration.
    ///
    /// # Errors
    ///
    /// Fails for a zero or overflowing modulus.
    pub fn context(&self) -> Result<ModulusContext, DomainError> {
        ModulusContext::from_base(self.a, self.b, self.c, self.n, self.k)
    }

    /// Decode a configuration from TOML.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::File`] when the document is not valid TOML or
    /// misses a required field; [`ConfigurationError::OutOfRange`] when `n`
    /// is zero.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigurationError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Field-level checks that the type system does not already enforce.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::OutOfRange`] when `n` is zero.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.n == 0 {
            return Err(ConfigurationError::OutOfRange {
                field: "n",
                input: self.n.to_string(),
            });
        }
        Ok(())
    }
}

fn non_empty<'a>(field: &'static str, input: &'a str) -> Result<&'a str, ConfigurationError> {
    let input = input.trim();
    if input.is_empty() {
        Err(ConfigurationError::Empty { field })
    } else {
        Ok(input)
    }
}

/// Parse a signed coefficient (`a`, `b` or `c`).
///
/// # Errors
///
/// `Empty` for blank input, `Malformed` for anything that is not an integer
/// in the `i64` range.
pub fn parse_coefficient(field: &'static str, input: &str) -> Result<i64, ConfigurationError> {
    let input = non_empty(field, input)?;
    input.parse().map_err(|_| ConfigurationError::Malformed {
        field,
        input: input.to_string(),
    })
}

/// Parse the modulus base `n`, which must be a positive integer.
///
/// # Errors
///
/// `Empty` for blank input, `OutOfRange` for zero or negative values,
/// `Malformed` otherwise.
pub fn parse_base(field: &'static str, input: &str) -> Result<u64, ConfigurationError> {
    let input = non_empty(field, input)?;
    match input.parse::<u64>() {
        Ok(0) => Err(ConfigurationError::OutOfRange {
            field,
            input: input.to_string(),
        }),
        Ok(n) => Ok(n),
        Err(_) if input.parse::<i128>().is_ok() => Err(ConfigurationError::OutOfRange {
            field,
            input: input.to_string(),
        }),
        Err(_) => Err(ConfigurationError::Malformed {
            field,
            input: input.to_string(),
        }),
    }
}

/// Parse the modulus exponent `k`.
///
/// # Errors
///
/// `Empty` for blank input, `OutOfRange` for negative or oversized values,
/// `Malformed` otherwise.
pub fn parse_exponent(field: &'static str, input: &str) -> Result<u32, ConfigurationError> {
    let input = non_empty(field, input)?;
    match input.parse::<u32>() {
        Ok(k) => Ok(k),
        Err(_) if input.parse::<i128>().is_ok() => Err(ConfigurationError::OutOfRange {
            field,
            input: input.to_string(),
        }),
        Err(_) => Err(ConfigurationError::Malformed {
            field,
            input: input.to_string(),
        }),
    }
}

/// Parse a yes/no answer; only the first character matters (`y`/`n`,
/// either case).
///
/// # Errors
///
/// `Empty` for blank input, `Malformed` when the answer starts with neither.
pub fn parse_yes_no(field: &'static str, input: &str) -> Result<bool, ConfigurationError> {
    let input = non_empty(field, input)?;
    match input.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('Y') => Ok(true),
        Some('N') => Ok(false),
        _ => Err(ConfigurationError::Malformed {
            field,
            input: input.to_string(),
        }),
    }
}
