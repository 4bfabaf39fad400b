//! Error types for orbit discovery and configuration validation.

use thiserror::Error;

/// Failures raised while building a [`ModulusContext`](crate::ModulusContext)
/// or materialising a [`DomainSeries`](crate::DomainSeries).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// `n = 0` with `k >= 1` yields `m = 0`; reducing modulo zero is undefined.
    #[error("modulus is zero (n = 0, k >= 1); the map is undefined")]
    ZeroModulus,

    /// `n^k` does not fit in a 64-bit residue.
    #[error("modulus {n}^{k} exceeds the 64-bit residue range")]
    ModulusOverflow {
        /// Base of the modulus.
        n: u64,
        /// Exponent of the modulus.
        k: u32,
    },

    /// The residue set cannot be held in memory on this host.
    #[error("domain over modulus {modulus} is too large to materialise")]
    DomainTooLarge {
        /// The modulus whose domain was requested.
        modulus: u64,
    },
}

/// Configuration input rejected during validation.
///
/// Every variant names the offending field so that an interactive caller can
/// re-prompt for exactly that value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No input was supplied for the field.
    #[error("{field}: no value was entered")]
    Empty {
        /// Name of the field.
        field: &'static str,
    },

    /// The input is not a number of the expected shape.
    #[error("{field}: `{input}` is not a valid number")]
    Malformed {
        /// Name of the field.
        field: &'static str,
        /// The rejected input, trimmed.
        input: String,
    },

    /// The input parsed but lies outside the accepted range.
    #[error("{field}: `{input}` is out of range")]
    OutOfRange {
        /// Name of the field.
        field: &'static str,
        /// The rejected input, trimmed.
        input: String,
    },

    /// The domain selection is neither a menu number (1-3) nor a known name.
    #[error("domain: `{input}` is not one of all, odd, even (or 1 - 3)")]
    UnknownDomainKind {
        /// The rejected input, trimmed.
        input: String,
    },

    /// A configuration file could not be decoded.
    #[error("config file: {0}")]
    File(#[from] toml::de::Error),
}

impl ConfigurationError {
    /// Name of the field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::Malformed { field, .. }
            | Self::OutOfRange { field, .. } => field,
            Self::UnknownDomainKind { .. } => "domain",
            Self::File(_) => "config",
        }
    }
}

/// Umbrella error for the crate.
#[derive(Debug, Error)]
pub enum OrbitsError {
    /// Degenerate modulus or domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Invalid configuration input.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Report serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OrbitsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_names_field() {
        let e = ConfigurationError::Malformed {
            field: "a",
            input: "x1".to_string(),
        };
        assert_eq!(e.field(), "a");
        assert_eq!(e.to_string(), "a: `x1` is not a valid number");

        let e = ConfigurationError::UnknownDomainKind {
            input: "7".to_string(),
        };
        assert_eq!(e.field(), "domain");
    }

    #[test]
    fn test_domain_error_converts_into_umbrella() {
        let e: OrbitsError = DomainError::ZeroModulus.into();
        assert!(matches!(e, OrbitsError::Domain(DomainError::ZeroModulus)));
    }

    #[test]
    fn test_serialization_error_keeps_source() {
        use std::error::Error as _;

        let e = serde_json::from_str::<u8>("x").err().map(OrbitsError::from);
        assert!(matches!(e, Some(OrbitsError::Serialization(_))));
        assert!(e.as_ref().and_then(|e| e.source()).is_some());
    }
}
