//! Exact rationals using dashu-ratio
//!
//! Only the Bernoulli recurrence produces these. `RBig` keeps every value in
//! lowest terms, so `num()` and `denom()` are always the reduced parts.

use crate::integer::{Integer, NumberError};
use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    inner: RBig,
}

impl Rational {
    pub fn zero() -> Self {
        Self { inner: RBig::ZERO }
    }

    pub fn one() -> Self {
        Self { inner: RBig::ONE }
    }

    /// Build `num / den` from machine integers
    pub fn new(num: i64, den: i64) -> Result<Self, NumberError> {
        Self::from_integers(&Integer::from_i64(num), &Integer::from_i64(den))
    }

    pub fn from_integers(num: &Integer, den: &Integer) -> Result<Self, NumberError> {
        if den.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        let (num, den) = if den.is_negative() {
            (num.neg(), den.neg())
        } else {
            (num.clone(), den.clone())
        };
        let den = UBig::try_from(den.into_ibig()).map_err(|_| {
            NumberError::InvalidArgument("denominator must be positive".to_string())
        })?;
        Ok(Self { inner: RBig::from_parts(num.into_ibig(), den) })
    }

    pub fn from_integer(n: &Integer) -> Self {
        Self { inner: RBig::from_parts(n.as_ibig().clone(), UBig::ONE) }
    }

    pub fn num(&self) -> Integer {
        Integer::from_ibig(self.inner.numerator().clone())
    }

    /// Always positive
    pub fn denom(&self) -> Integer {
        Integer::from_ibig(IBig::from(self.inner.denominator().clone()))
    }

    pub fn is_zero(&self) -> bool {
        self.inner == RBig::ZERO
    }

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num(), self.denom())
    }
}
