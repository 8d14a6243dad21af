//! Fixed precision binary floats using dashu-float
//!
//! Every `Float` carries exactly `FLOAT_PRECISION` bits. Constructors and
//! operations re-apply the precision, so it is never widened or narrowed by
//! mixing values of different origin. Rounding within an operation is
//! round-half-to-even.

use crate::integer::NumberError;
use dashu_float::ops::{Abs, SquareRoot};
use dashu_float::round::mode::HalfEven;
use dashu_float::FBig;
use dashu_int::ops::BitTest;
use dashu_int::IBig;
use std::cmp::Ordering;
use std::fmt;

/// Working precision (binary digits) of every float in the system
pub const FLOAT_PRECISION: usize = 256;

type Repr = FBig<HalfEven>;

#[derive(Debug, Clone)]
pub struct Float {
    inner: Repr,
}

impl Float {
    // ========== Construction ==========

    fn fixed(val: Repr) -> Repr {
        val.with_precision(FLOAT_PRECISION).value()
    }

    pub fn zero() -> Self {
        Self { inner: Self::fixed(Repr::ZERO) }
    }

    pub fn one() -> Self {
        Self { inner: Self::fixed(Repr::ONE) }
    }

    pub fn from_i64(n: i64) -> Self {
        Self::from_parts(IBig::from(n), 0)
    }

    /// Exact conversion of a machine float; NaN and infinities become zero
    pub fn from_f64(x: f64) -> Self {
        if !x.is_finite() || x == 0.0 {
            return Self::zero();
        }
        let bits = x.to_bits();
        let negative = bits >> 63 == 1;
        let biased = ((bits >> 52) & 0x7ff) as isize;
        let fraction = (bits & 0x000f_ffff_ffff_ffff) as i64;

        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1 << 52), biased - 1075)
        };
        let mantissa = if negative { -mantissa } else { mantissa };
        Self::from_parts(IBig::from(mantissa), exponent)
    }

    /// `a / b` computed at working precision
    pub fn from_ratio(a: i64, b: i64) -> Result<Self, NumberError> {
        Self::from_i64(a).checked_div(&Self::from_i64(b))
    }

    /// `significand * 2^exponent`
    pub(crate) fn from_parts(significand: IBig, exponent: isize) -> Self {
        Self { inner: Self::fixed(Repr::from_parts(significand, exponent)) }
    }

    pub(crate) fn from_ibig(n: IBig) -> Self {
        Self { inner: Self::fixed(Repr::from(n)) }
    }

    /// `(significand, exponent)` with value `significand * 2^exponent`
    pub(crate) fn to_parts(&self) -> (IBig, isize) {
        self.inner.clone().into_repr().into_parts()
    }

    // ========== Inspection ==========

    pub fn precision(&self) -> usize {
        self.inner.precision()
    }

    pub fn is_zero(&self) -> bool {
        self.inner == Repr::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < Repr::ZERO
    }

    // ========== Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: Self::fixed(&self.inner + &other.inner) }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: Self::fixed(&self.inner - &other.inner) }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: Self::fixed(&self.inner * &other.inner) }
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: Self::fixed(&self.inner / &other.inner) })
        }
    }

    /// Integer power by repeated multiplication, one rounding per step
    ///
    /// `pow(0)` is exactly one for every base, zero included. A loop of
    /// `exp - 1` multiplications alone would hand back the base instead.
    pub fn pow(&self, exp: u32) -> Self {
        if exp == 0 {
            return Self::one();
        }
        let mut result = self.clone();
        for _ in 1..exp {
            result = result.mul(self);
        }
        result
    }

    pub fn sqrt(&self) -> Result<Self, NumberError> {
        if self.is_negative() {
            return Err(NumberError::InvalidArgument(
                "square root of negative number".to_string(),
            ));
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        Ok(Self { inner: Self::fixed(self.inner.sqrt()) })
    }

    pub fn neg(&self) -> Self {
        Self { inner: -self.inner.clone() }
    }

    pub fn abs(&self) -> Self {
        Self { inner: Abs::abs(self.inner.clone()) }
    }

    // ========== Conversion ==========

    /// Nearest machine float (truncated to 63 significant bits first)
    pub fn to_f64(&self) -> f64 {
        let (significand, exponent) = self.to_parts();
        let bits = significand.bit_len();
        let (significand, exponent) = if bits > 63 {
            let extra = bits - 63;
            (&significand >> extra, exponent + extra as isize)
        } else {
            (significand, exponent)
        };
        let sig = match i64::try_from(significand) {
            Ok(s) => s as f64,
            Err(_) => return f64::NAN,
        };
        match i32::try_from(exponent) {
            Ok(e) => sig * 2f64.powi(e),
            Err(_) if exponent < 0 => 0.0,
            Err(_) => {
                if sig < 0.0 {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
        }
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Float {}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
