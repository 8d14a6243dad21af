//! Arbitrary precision integers using dashu
//!
//! `Integer` wraps dashu-int's `IBig`. Arithmetic never overflows: the only
//! caller-visible failures are division by zero and negative exponents.

use dashu_int::ops::BitTest;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Arbitrary precision signed integer
///
/// Values are immutable: every operation returns a new `Integer`, so a slot
/// already published in a sequence buffer is never changed behind a reader.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer {
    inner: IBig,
}

impl Integer {
    // ========== Construction ==========

    pub fn zero() -> Self {
        Self { inner: IBig::ZERO }
    }

    pub fn one() -> Self {
        Self { inner: IBig::ONE }
    }

    pub fn from_i64(n: i64) -> Self {
        Self { inner: IBig::from(n) }
    }

    pub fn from_u64(n: u64) -> Self {
        Self { inner: IBig::from(n) }
    }

    /// Parse a decimal string such as "-12345678901234567890"
    pub fn parse(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();
        s.parse::<IBig>()
            .map(|inner| Self { inner })
            .map_err(|e| NumberError::ParseError(format!("'{}': {}", s, e)))
    }

    pub(crate) fn from_ibig(inner: IBig) -> Self {
        Self { inner }
    }

    pub(crate) fn as_ibig(&self) -> &IBig {
        &self.inner
    }

    pub(crate) fn into_ibig(self) -> IBig {
        self.inner
    }

    // ========== Inspection ==========

    pub fn is_zero(&self) -> bool {
        self.inner == IBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < IBig::ZERO
    }

    pub fn is_positive(&self) -> bool {
        self.inner > IBig::ZERO
    }

    pub fn is_one(&self) -> bool {
        self.inner == IBig::ONE
    }

    pub fn is_even(&self) -> bool {
        &self.inner % IBig::from(2u8) == IBig::ZERO
    }

    /// Number of bits in the magnitude (0 for zero)
    pub fn bit_len(&self) -> usize {
        self.inner.bit_len()
    }

    /// Try to convert to i64
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.inner.clone()).ok()
    }

    /// Try to convert to u64 (None for negatives)
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.inner.clone()).ok()
    }

    pub fn to_usize(&self) -> Option<usize> {
        usize::try_from(self.inner.clone()).ok()
    }

    // ========== Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Division truncating toward zero
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Remainder of truncating division (sign follows the dividend)
    pub fn checked_rem(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner % &other.inner })
        }
    }

    /// Euclidean modulus, always in `[0, |other|)`
    pub fn modulo(&self, other: &Self) -> Result<Self, NumberError> {
        let r = self.checked_rem(other)?;
        if r.is_negative() {
            Ok(r.add(&other.abs()))
        } else {
            Ok(r)
        }
    }

    pub fn neg(&self) -> Self {
        Self { inner: -&self.inner }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Exact power with an arbitrary-precision exponent
    pub fn pow(&self, exp: &Self) -> Result<Self, NumberError> {
        if exp.is_negative() {
            return Err(NumberError::InvalidArgument(format!(
                "negative exponent {} in integer power",
                exp
            )));
        }
        let e = exp.to_usize().ok_or_else(|| {
            NumberError::InvalidArgument(format!("exponent {} is too large", exp))
        })?;
        Ok(Self { inner: self.inner.pow(e) })
    }

    pub fn pow_u32(&self, exp: u32) -> Self {
        Self { inner: self.inner.pow(exp as usize) }
    }

    /// Modular exponentiation by repeated squaring; `modulus` must be positive
    pub fn pow_mod(&self, exp: &Self, modulus: &Self) -> Result<Self, NumberError> {
        if modulus.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        if modulus.is_negative() {
            return Err(NumberError::InvalidArgument(
                "modulus must be positive".to_string(),
            ));
        }
        if exp.is_negative() {
            return Err(NumberError::InvalidArgument(format!(
                "negative exponent {} in modular power",
                exp
            )));
        }

        let m = &modulus.inner;
        let two = IBig::from(2u8);
        let mut result = IBig::ONE % m;
        let mut base = self.modulo(modulus)?.inner;
        let mut e = exp.inner.clone();
        while e > IBig::ZERO {
            if &e % &two == IBig::ONE {
                result = (&result * &base) % m;
            }
            base = (&base * &base) % m;
            e = e >> 1;
        }
        Ok(Self { inner: result })
    }

    pub fn shl(&self, bits: usize) -> Self {
        Self { inner: &self.inner << bits }
    }

    /// Integer square root (floor) by Newton iteration
    pub fn isqrt(&self) -> Result<Self, NumberError> {
        if self.is_negative() {
            return Err(NumberError::InvalidArgument(format!(
                "square root of negative integer {}",
                self
            )));
        }
        if self.inner < IBig::from(2u8) {
            return Ok(self.clone());
        }

        // 2^ceil(bits/2) is never below the root, so the iteration descends
        let mut x = IBig::ONE << ((self.bit_len() + 1) / 2);
        loop {
            let y = (&x + &self.inner / &x) >> 1;
            if y >= x {
                return Ok(Self { inner: x });
            }
            x = y;
        }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<u64> for Integer {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl FromStr for Integer {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
