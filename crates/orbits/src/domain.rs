//! Domain selection and the shrinking series of unclassified residues.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, DomainError};
use crate::Residue;

/// Which residues of `[0, m)` the run classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    /// Every residue `0, 1, …, m - 1`.
    #[default]
    All,
    /// Odd residues `1, 3, …`.
    Odd,
    /// Even residues starting at 2: `2, 4, …`.
    Even,
}

impl DomainKind {
    /// All kinds, in menu order.
    pub const ALL: [DomainKind; 3] = [DomainKind::All, DomainKind::Odd, DomainKind::Even];

    /// First residue of the series.
    #[inline]
    #[must_use]
    pub const fn start(self) -> Residue {
        match self {
            Self::All => 0,
            Self::Odd => 1,
            Self::Even => 2,
        }
    }

    /// Distance between consecutive residues.
    #[inline]
    #[must_use]
    pub const fn step(self) -> Residue {
        match self {
            Self::All => 1,
            Self::Odd | Self::Even => 2,
        }
    }

    /// Menu number for this kind (1 = all, 2 = odd, 3 = even).
    #[inline]
    #[must_use]
    pub const fn choice(self) -> u8 {
        match self {
            Self::All => 1,
            Self::Odd => 2,
            Self::Even => 3,
        }
    }

    /// Resolve a numbered menu choice.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::OutOfRange`] for anything other than 1, 2 or 3.
    pub fn from_choice(choice: u8) -> Result<Self, ConfigurationError> {
        match choice {
            1 => Ok(Self::All),
            2 => Ok(Self::Odd),
            3 => Ok(Self::Even),
            other => Err(ConfigurationError::OutOfRange {
                field: "domain",
                input: other.to_string(),
            }),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }

    /// One-line human description of the series.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::All => "all residues from 0 to n^k - 1",
            Self::Odd => "all odd residues from 1 to n^k - 1",
            Self::Even => "all even residues from 2 to n^k - 1",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ConfigurationError::Empty { field: "domain" });
        }
        match input.to_ascii_lowercase().as_str() {
            "all" | "1" => Ok(Self::All),
            "odd" | "2" => Ok(Self::Odd),
            "even" | "3" => Ok(Self::Even),
            _ if input.parse::<i64>().is_ok() => Err(ConfigurationError::OutOfRange {
                field: "domain",
                input: input.to_string(),
            }),
            _ => Err(ConfigurationError::UnknownDomainKind {
                input: input.to_string(),
            }),
        }
    }
}

/// Largest number of residues a [`DomainSeries`] will materialise.
pub const MAX_DOMAIN: u64 = 1 << 28;

/// Ordered, shrinking set of residues still awaiting classification.
///
/// Iteration and [`first`](Self::first) follow ascending residue order, which
/// is also the order in which the series was generated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainSeries {
    remaining: BTreeSet<Residue>,
}

impl DomainSeries {
    /// Materialise the residues of `kind` below `modulus`.
    ///
    /// # Errors
    ///
    /// [`DomainError::ZeroModulus`] when `modulus == 0`, and
    /// [`DomainError::DomainTooLarge`] when the domain holds more than
    /// [`MAX_DOMAIN`] residues.
    pub fn new(kind: DomainKind, modulus: u64) -> Result<Self, DomainError> {
        if modulus == 0 {
            return Err(DomainError::ZeroModulus);
        }
        let start = kind.start();
        let count = if start >= modulus {
            0
        } else {
            (modulus - start).div_ceil(kind.step())
        };
        if count > MAX_DOMAIN {
            return Err(DomainError::DomainTooLarge { modulus });
        }

        let remaining = (start..modulus).step_by(kind.step() as usize).collect();
        Ok(Self { remaining })
    }

    /// Series holding exactly the given residues.
    pub fn from_residues<I: IntoIterator<Item = Residue>>(residues: I) -> Self {
        Self {
            remaining: residues.into_iter().collect(),
        }
    }

    /// Lowest remaining residue.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Residue> {
        self.remaining.first().copied()
    }

    /// Remove `value`; returns whether it was present.
    #[inline]
    pub fn remove(&mut self, value: Residue) -> bool {
        self.remaining.remove(&value)
    }

    /// Whether `value` is still awaiting classification.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: Residue) -> bool {
        self.remaining.contains(&value)
    }

    /// True once every residue has been classified.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of residues still awaiting classification.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Remaining residues in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Residue> + '_ {
        self.remaining.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(kind: DomainKind, m: u64) -> Result<Vec<Residue>, DomainError> {
        Ok(DomainSeries::new(kind, m)?.iter().collect())
    }

    #[test]
    fn test_series_contents() -> Result<(), DomainError> {
        assert_eq!(collect(DomainKind::All, 5)?, vec![0, 1, 2, 3, 4]);
        assert_eq!(collect(DomainKind::Odd, 8)?, vec![1, 3, 5, 7]);
        assert_eq!(collect(DomainKind::Even, 8)?, vec![2, 4, 6]);
        Ok(())
    }

    #[test]
    fn test_series_empty_when_start_exceeds_modulus() -> Result<(), DomainError> {
        assert!(collect(DomainKind::Even, 2)?.is_empty());
        assert!(collect(DomainKind::Odd, 1)?.is_empty());
        assert_eq!(collect(DomainKind::All, 1)?, vec![0]);
        Ok(())
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert_eq!(
            DomainSeries::new(DomainKind::All, 0),
            Err(DomainError::ZeroModulus)
        );
    }

    #[test]
    fn test_oversized_domain_rejected() {
        assert_eq!(
            DomainSeries::new(DomainKind::All, 1 << 40),
            Err(DomainError::DomainTooLarge { modulus: 1 << 40 })
        );
        assert_eq!(
            DomainSeries::new(DomainKind::All, MAX_DOMAIN + 1),
            Err(DomainError::DomainTooLarge {
                modulus: MAX_DOMAIN + 1
            })
        );
        // Odd residues of 2 * MAX_DOMAIN + 2 number MAX_DOMAIN + 1.
        assert!(matches!(
            DomainSeries::new(DomainKind::Odd, 2 * MAX_DOMAIN + 2),
            Err(DomainError::DomainTooLarge { .. })
        ));
        assert!(matches!(
            DomainSeries::new(DomainKind::Even, u64::MAX),
            Err(DomainError::DomainTooLarge { .. })
        ));
    }

    #[test]
    fn test_first_and_remove() -> Result<(), DomainError> {
        let mut s = DomainSeries::new(DomainKind::All, 4)?;
        assert_eq!(s.first(), Some(0));
        assert!(s.remove(0));
        assert!(!s.remove(0));
        assert_eq!(s.first(), Some(1));
        assert!(s.remove(2));
        assert_eq!(s.len(), 2);
        assert!(!s.contains(2));
        assert!(s.remove(1) && s.remove(3));
        assert!(s.is_empty());
        assert_eq!(s.first(), None);
        Ok(())
    }

    #[test]
    fn test_domain_kind_parsing() {
        assert_eq!("odd".parse::<DomainKind>(), Ok(DomainKind::Odd));
        assert_eq!(" EVEN ".parse::<DomainKind>(), Ok(DomainKind::Even));
        assert_eq!("1".parse::<DomainKind>(), Ok(DomainKind::All));
        assert_eq!(
            "4".parse::<DomainKind>(),
            Err(ConfigurationError::OutOfRange {
                field: "domain",
                input: "4".to_string()
            })
        );
        assert_eq!(
            "".parse::<DomainKind>(),
            Err(ConfigurationError::Empty { field: "domain" })
        );
        assert!(matches!(
            "primes".parse::<DomainKind>(),
            Err(ConfigurationError::UnknownDomainKind { .. })
        ));
    }

    #[test]
    fn test_menu_choice_round_trip() {
        for kind in DomainKind::ALL {
            assert_eq!(DomainKind::from_choice(kind.choice()), Ok(kind));
        }
        assert!(DomainKind::from_choice(0).is_err());
    }
}
