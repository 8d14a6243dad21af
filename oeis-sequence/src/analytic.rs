//! Sequences built from real constants
//!
//! Beatty-style floors of multiples of e and phi, rounded square roots,
//! powers of e and the digits of the golden ratio. The constants are computed
//! at full float precision, so results drift only once a term outgrows it.

use oeis_plugin::prelude::*;
use crate::combinatorics::{bernoulli, factorial};
use crate::helpers::{idx, int, to_machine};

const ACCURACY_A000149: usize = 150;
const LONG_A000182: usize = 129;
const ACCURACY_A001622: usize = 75;

/// e as the partial sum of 1/k! for k <= 64
fn euler_e() -> Result<Float, NumberError> {
    let mut term = Float::one();
    let mut total = Float::one();
    for k in 1..=64 {
        term = term.checked_div(&Float::from_i64(k))?;
        total = total.add(&term);
    }
    Ok(total)
}

/// (1 + sqrt(5)) / 2
fn golden_ratio() -> Result<Float, NumberError> {
    Float::one()
        .add(&Float::from_i64(5).sqrt()?)
        .checked_div(&Float::from_i64(2))
}

fn exponent(id: &str, n: usize) -> Result<u32, SeqError> {
    u32::try_from(n).map_err(|_| SeqError::overflow(id, u32::MAX as usize))
}

// ============ A000037 ============

pub struct NonSquares;

impl SequencePlugin for NonSquares {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000037",
            name: "Numbers that are not squares",
            description: "a(n) = n + floor(1/2 + sqrt(n))",
            returns: TermKind::Machine,
            category: "analytic",
            examples: &["2, 3, 5, 6, 7, 8, 10, 11, 12, 13, 14, 15, 17"],
            related: &["A000196"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let half = Float::from_ratio(1, 2)?;
        let mut a = Vec::with_capacity(term_count);
        for n in 1..=term_count as i64 {
            let root = Float::from_i64(n).sqrt()?;
            a.push(int(n).add(&root.add(&half).floor()));
        }
        Ok(SequenceResult::machine(to_machine("A000037", &a)?, 1))
    }
}

// ============ A000062 ============

pub struct EMinusTwoBeatty;

impl SequencePlugin for EMinusTwoBeatty {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000062",
            name: "Beatty sequence for 1/(e-2)",
            description: "a(n) = floor(n / (e - 2))",
            returns: TermKind::Machine,
            category: "analytic",
            examples: &["1, 2, 4, 5, 6, 8, 9, 11, 12, 13"],
            related: &["A000149"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let denom = euler_e()?.sub(&Float::from_i64(2));
        let mut a = Vec::with_capacity(term_count);
        for n in 1..=term_count as i64 {
            a.push(Float::from_i64(n).checked_div(&denom)?.floor());
        }
        Ok(SequenceResult::machine(to_machine("A000062", &a)?, 1))
    }
}

// ============ A000115 ============

pub struct ChangeWithFives;

impl SequencePlugin for ChangeWithFives {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000115",
            name: "Ways of making change for n cents with 1, 2 and 5 cent coins",
            description: "a(n) = round((n + 4)^2 / 20)",
            returns: TermKind::Machine,
            category: "analytic",
            examples: &["1, 1, 2, 2, 3, 4, 5, 6, 7, 8, 10"],
            related: &["A000008"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        for n in 0..term_count as i64 {
            a.push(Float::from_ratio((n + 4) * (n + 4), 20)?.round());
        }
        Ok(SequenceResult::machine(to_machine("A000115", &a)?, 0))
    }
}

// ============ A000139 ============

pub struct RootedMaps;

impl SequencePlugin for RootedMaps {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000139",
            name: "Rooted non-separable planar maps with n edges",
            description: "a(n) = 2 (3n)! / ((2n+1)! (n+1)!)",
            returns: TermKind::Exact,
            category: "analytic",
            examples: &["2, 1, 2, 6, 22, 91, 408, 1938"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        for n in 0..term_count as i64 {
            let numer = factorial(3 * n)?.mul(&int(2));
            let denom = factorial(2 * n + 1)?.mul(&factorial(n + 1)?);
            a.push(numer.checked_div(&denom)?);
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000149 ============

pub struct FloorPowersOfE;

impl SequencePlugin for FloorPowersOfE {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000149",
            name: "floor(e^n)",
            description: "Integer part of the powers of e",
            returns: TermKind::Exact,
            category: "analytic",
            examples: &["1, 2, 7, 20, 54, 148, 403, 1096, 2980, 8103"],
            related: &["A000062"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let e = euler_e()?;
        let mut a = Vec::with_capacity(term_count);
        for n in 0..term_count {
            a.push(e.pow(exponent("A000149", n)?).floor());
        }
        Ok(SequenceResult::exact(a, 0)
            .warn_if(term_count > ACCURACY_A000149, || SeqError::accuracy("A000149")))
    }
}

// ============ A000182 ============

pub struct Tangent;

impl SequencePlugin for Tangent {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000182",
            name: "Tangent or zag numbers",
            description: "a(n) = |2^(2n) (2^(2n) - 1) B(2n) / (2n)|",
            returns: TermKind::Exact,
            category: "analytic",
            examples: &["1, 2, 16, 272, 7936, 353792"],
            related: &["A027641"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        for n in 1..=term_count {
            let b = Integer::one().shl(2 * n);
            let scale = Rational::from_integer(&b.mul(&b.sub(&Integer::one())));
            let value = scale
                .mul(&bernoulli(2 * n as i64)?)
                .checked_div(&Rational::from_integer(&idx(2 * n)))?;
            if !value.denom().is_one() {
                return Err(SeqError::internal(format!("tangent number {} is not an integer", n)));
            }
            a.push(value.num().abs());
        }
        Ok(SequenceResult::exact(a, 1)
            .warn_if(term_count > LONG_A000182, || SeqError::long_calculation("A000182", LONG_A000182)))
    }
}

// ============ A000194 ============

pub struct NearestRoot;

impl SequencePlugin for NearestRoot {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000194",
            name: "n appears 2n times",
            description: "a(n) = round(sqrt(n))",
            returns: TermKind::Machine,
            category: "analytic",
            examples: &["0, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3"],
            related: &["A000196"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        for n in 0..term_count as i64 {
            a.push(Float::from_i64(n).sqrt()?.round());
        }
        Ok(SequenceResult::machine(to_machine("A000194", &a)?, 0))
    }
}

// ============ A000196 ============

pub struct IntegerRoot;

impl SequencePlugin for IntegerRoot {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000196",
            name: "Integer part of square root of n",
            description: "a(n) = floor(sqrt(n))",
            returns: TermKind::Machine,
            category: "analytic",
            examples: &["0, 1, 1, 1, 2, 2, 2, 2, 2, 3"],
            related: &["A000194", "A000037"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (0..term_count)
            .map(|n| idx(n).isqrt())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SequenceResult::machine(to_machine("A000196", &a)?, 0))
    }
}

// ============ A000201 ============

pub struct LowerWythoff;

impl SequencePlugin for LowerWythoff {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000201",
            name: "Lower Wythoff sequence",
            description: "a(n) = floor(n * phi)",
            returns: TermKind::Machine,
            category: "analytic",
            examples: &["1, 3, 4, 6, 8, 9, 11, 12, 14, 16"],
            related: &["A001622"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let phi = golden_ratio()?;
        let a: Vec<Integer> = (1..=term_count as i64)
            .map(|n| Float::from_i64(n).mul(&phi).floor())
            .collect();
        Ok(SequenceResult::machine(to_machine("A000201", &a)?, 1))
    }
}

// ============ A001622 ============

pub struct GoldenRatioDigits;

impl SequencePlugin for GoldenRatioDigits {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A001622",
            name: "Decimal expansion of the golden ratio",
            description: "Digits of phi = (1 + sqrt(5)) / 2",
            returns: TermKind::Machine,
            category: "analytic",
            examples: &["1, 6, 1, 8, 0, 3, 3, 9, 8, 8, 7"],
            related: &["A000201"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        if term_count == 0 {
            return Ok(SequenceResult::machine(Vec::new(), 1));
        }
        let shift = Float::from_i64(10).pow(exponent("A001622", term_count - 1)?);
        let scaled = golden_ratio()?.mul(&shift).floor();
        let digits = scaled
            .to_string()
            .chars()
            .map(|c| c.to_digit(10).map(i64::from))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SeqError::internal("golden ratio expansion is not a digit string"))?;
        Ok(SequenceResult::machine(digits, 1)
            .warn_if(term_count > ACCURACY_A001622, || SeqError::accuracy("A001622")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect(plugin: &dyn SequencePlugin, count: usize, expected: &[&str]) {
        let result = plugin.compute(count).unwrap();
        assert_eq!(result.terms.to_strings(), expected, "{}", plugin.meta().id);
    }

    #[test]
    fn test_constants() {
        let e = euler_e().unwrap().to_f64();
        assert!((e - std::f64::consts::E).abs() < 1e-15);
        let phi = golden_ratio().unwrap().to_f64();
        assert!((phi - 1.618033988749895).abs() < 1e-15);
    }

    #[test]
    fn test_root_sequences() {
        expect(&NonSquares, 13, &["2", "3", "5", "6", "7", "8", "10", "11", "12", "13", "14", "15", "17"]);
        expect(&NearestRoot, 13, &["0", "1", "1", "2", "2", "2", "2", "3", "3", "3", "3", "3", "3"]);
        expect(&IntegerRoot, 10, &["0", "1", "1", "1", "2", "2", "2", "2", "2", "3"]);
    }

    #[test]
    fn test_beatty_sequences() {
        expect(&EMinusTwoBeatty, 10, &["1", "2", "4", "5", "6", "8", "9", "11", "12", "13"]);
        expect(&LowerWythoff, 10, &["1", "3", "4", "6", "8", "9", "11", "12", "14", "16"]);
    }

    #[test]
    fn test_rounded_quotients() {
        expect(&ChangeWithFives, 11, &["1", "1", "2", "2", "3", "4", "5", "6", "7", "8", "10"]);
        expect(&RootedMaps, 8, &["2", "1", "2", "6", "22", "91", "408", "1938"]);
    }

    #[test]
    fn test_powers_of_e() {
        expect(&FloorPowersOfE, 10, &["1", "2", "7", "20", "54", "148", "403", "1096", "2980", "8103"]);
        let long = FloorPowersOfE.compute(151).unwrap();
        assert_eq!(long.warnings[0].code, codes::ACCURACY);
    }

    #[test]
    fn test_tangent_numbers() {
        expect(&Tangent, 6, &["1", "2", "16", "272", "7936", "353792"]);
        assert_eq!(Tangent.compute(6).unwrap().offset, 1);
    }

    #[test]
    fn test_golden_ratio_digits() {
        expect(&GoldenRatioDigits, 11, &["1", "6", "1", "8", "0", "3", "3", "9", "8", "8", "7"]);
        assert!(GoldenRatioDigits.compute(0).unwrap().is_empty());
        let long = GoldenRatioDigits.compute(80).unwrap();
        assert_eq!(long.len(), 80);
        assert_eq!(long.warnings.len(), 1);
    }
}
