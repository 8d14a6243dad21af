//! Conversions between `Integer`, `Float` and `Rational`
//!
//! Integer to float is exact up to `FLOAT_PRECISION` bits; wider magnitudes
//! are rounded to the working precision without any error being raised.
//! Detecting that loss is left to the calling formula.

use crate::float::Float;
use crate::integer::{Integer, NumberError};
use crate::rational::Rational;
use dashu_int::IBig;

/// How a float is brought back to an exact integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Toward negative infinity
    Floor,
    /// Toward zero
    Truncate,
    /// Add one half, then floor
    HalfUp,
}

impl Float {
    pub fn from_integer(n: &Integer) -> Self {
        Float::from_ibig(n.as_ibig().clone())
    }

    /// Quotient of the reduced parts at working precision
    pub fn from_rational(r: &Rational) -> Result<Self, NumberError> {
        let num = Float::from_integer(&r.num());
        let den = Float::from_integer(&r.denom());
        num.checked_div(&den)
    }

    pub fn to_integer(&self, rounding: Rounding) -> Integer {
        match rounding {
            Rounding::Floor => self.floor(),
            Rounding::Truncate => self.trunc(),
            Rounding::HalfUp => self.round(),
        }
    }

    pub fn floor(&self) -> Integer {
        let (quotient, inexact, negative) = self.split_integer_part();
        let q = if negative { -quotient } else { quotient };
        if negative && inexact {
            Integer::from_ibig(q - IBig::ONE)
        } else {
            Integer::from_ibig(q)
        }
    }

    pub fn trunc(&self) -> Integer {
        let (quotient, _, negative) = self.split_integer_part();
        Integer::from_ibig(if negative { -quotient } else { quotient })
    }

    /// Round half up: `floor(x + 0.5)`. Ties always move toward +inf.
    pub fn round(&self) -> Integer {
        let half = Float::from_parts(IBig::ONE, -1);
        self.add(&half).floor()
    }

    /// Magnitude of the integer part, whether a fraction was dropped, and sign
    fn split_integer_part(&self) -> (IBig, bool, bool) {
        let (significand, exponent) = self.to_parts();
        let negative = significand < IBig::ZERO;
        let magnitude = if negative { -significand } else { significand };

        if exponent >= 0 {
            return (magnitude << exponent as usize, false, negative);
        }
        let shift = exponent.unsigned_abs();
        let quotient = &magnitude >> shift;
        let inexact = (&quotient << shift) != magnitude;
        (quotient, inexact, negative)
    }
}

impl From<&Integer> for Float {
    fn from(n: &Integer) -> Self {
        Float::from_integer(n)
    }
}
