//! The quadratic map `f(x) = (a·x² + b·x + c) mod m` over ℤ/mℤ.
//!
//! Coefficients may be any `i64`; they are reduced into `[0, m)` once at
//! construction so that every evaluation works on non-negative residues.
//! Products are taken in `u128` and reduced immediately, so `f` is exact for
//! every `m < 2⁶⁴`.
//!
//! # Example
//!
//! ```
//! use orbits::ModulusContext;
//!
//! // f(x) = x² mod 5
//! let ctx = ModulusContext::from_base(1, 0, 0, 5, 1).unwrap();
//! assert_eq!(ctx.modulus(), 5);
//! assert_eq!(ctx.apply(4), 1);
//! assert_eq!(ctx.apply(2), 4);
//! ```

use serde::Serialize;

use crate::error::DomainError;
use crate::Residue;

/// Immutable `(a, b, c, m)` fixing the map `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModulusContext {
    a: u64,
    b: u64,
    c: u64,
    m: u64,
}

impl ModulusContext {
    /// Build a context for an explicit modulus `m`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroModulus`] when `m == 0`.
    pub fn new(a: i64, b: i64, c: i64, m: u64) -> Result<Self, DomainError> {
        if m == 0 {
            return Err(DomainError::ZeroModulus);
        }
        Ok(Self {
            a: normalize(a, m),
            b: normalize(b, m),
            c: normalize(c, m),
            m,
        })
    }

    /// Build a context for `m = n^k`.
    ///
    /// `n = 0, k = 0` gives `m = 1`, where every residue maps to 0.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroModulus`] for `n = 0, k >= 1`, and
    /// [`DomainError::ModulusOverflow`] when `n^k` does not fit in a `u64`.
    pub fn from_base(a: i64, b: i64, c: i64, n: u64, k: u32) -> Result<Self, DomainError> {
        Self::new(a, b, c, modulus_for(n, k)?)
    }

    /// The modulus `m`.
    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.m
    }

    /// Coefficients reduced into `[0, m)`, as `(a, b, c)`.
    #[inline]
    #[must_use]
    pub const fn coefficients(&self) -> (u64, u64, u64) {
        (self.a, self.b, self.c)
    }

    /// Evaluate `f(x)`, normalised into `[0, m)`.
    ///
    /// `x` need not already be reduced.
    #[inline]
    #[must_use]
    pub fn apply(&self, x: Residue) -> Residue {
        let m = u128::from(self.m);
        let x = u128::from(x) % m;
        let square = x * x % m;
        let quad = u128::from(self.a) * square % m;
        let linear = u128::from(self.b) * x % m;
        // Each term is < m < 2^64, so the sum cannot overflow u128.
        ((quad + linear + u128::from(self.c)) % m) as Residue
    }

    /// `x · y mod m`.
    #[inline]
    #[must_use]
    pub fn mul(&self, x: Residue, y: Residue) -> Residue {
        (u128::from(x) * u128::from(y) % u128::from(self.m)) as Residue
    }

    /// Multiplicative inverse of `x` modulo `m`, if one exists.
    ///
    /// Uses the extended Euclidean algorithm. Only residues coprime to `m`
    /// are invertible; `m = 1` has no inverses at all since 1 is not a
    /// residue of ℤ/1ℤ.
    ///
    /// ```
    /// use orbits::ModulusContext;
    ///
    /// let ctx = ModulusContext::new(0, 0, 0, 5).unwrap();
    /// assert_eq!(ctx.mul_inverse(2), Some(3));
    /// assert_eq!(ctx.mul_inverse(0), None);
    /// ```
    #[must_use]
    pub fn mul_inverse(&self, x: Residue) -> Option<Residue> {
        if self.m == 1 {
            return None;
        }
        let m = i128::from(self.m);
        let (mut old_r, mut r) = (i128::from(x) % m, m);
        let (mut old_s, mut s) = (1i128, 0i128);
        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
        }
        if old_r != 1 {
            return None;
        }
        Some(old_s.rem_euclid(m) as Residue)
    }
}

/// Compute `m = n^k`.
///
/// # Errors
///
/// [`DomainError::ZeroModulus`] when the result is zero,
/// [`DomainError::ModulusOverflow`] when it exceeds `u64`.
pub fn modulus_for(n: u64, k: u32) -> Result<u64, DomainError> {
    match n.checked_pow(k) {
        Some(0) => Err(DomainError::ZeroModulus),
        Some(m) => Ok(m),
        None => Err(DomainError::ModulusOverflow { n, k }),
    }
}

#[inline]
fn normalize(v: i64, m: u64) -> u64 {
    i128::from(v).rem_euclid(i128::from(m)) as u64
}
