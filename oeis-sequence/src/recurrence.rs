//! Linear and polynomial recurrences
//!
//! Lucas, tribonacci and tetranacci variants, Pell, Sylvester, menage and
//! friends. Machine-width entries are computed exactly and narrowed at the
//! end, so an overflow surfaces as an `OVERFLOW` error instead of wrapping.

use oeis_plugin::prelude::*;
use crate::helpers::{alternating_sign, idx, int, require_at_least, require_within, sum, to_machine};
use crate::scaffold::{init_buffer, nacci};

const OVERFLOW_A000032: usize = 91;
const OVERFLOW_A000044: usize = 92;
const LONG_A000058: usize = 16;
const OVERFLOW_A000073: usize = 75;
const OVERFLOW_A000126: usize = 89;
const LONG_A000301: usize = 25;

/// `a[i] = a[i-1] + a[i-2] + ... + a[i-order]` after the seeds
fn additive(term_count: usize, seeds: &[i64], order: usize) -> Vec<Integer> {
    let seeds: Vec<Integer> = seeds.iter().map(|&s| int(s)).collect();
    let mut a = init_buffer(term_count, &seeds);
    for i in seeds.len()..term_count {
        a[i] = sum(&a[i - order..i]);
    }
    a
}

// ============ A000032 ============

pub struct Lucas;

impl SequencePlugin for Lucas {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000032",
            name: "Lucas numbers",
            description: "L(n) = L(n-1) + L(n-2) with L(0) = 2, L(1) = 1",
            returns: TermKind::Machine,
            category: "recurrence",
            examples: &["2, 1, 3, 4, 7, 11, 18, 29, 47, 76"],
            related: &["A000045"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        require_within("A000032", term_count, OVERFLOW_A000032)?;
        let a = additive(term_count, &[2, 1], 2);
        Ok(SequenceResult::machine(to_machine("A000032", &a)?, 0))
    }
}

// ============ A000044 ============

pub struct DyingRabbits;

impl SequencePlugin for DyingRabbits {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000044",
            name: "Dying rabbits",
            description: "Fibonacci up to a(12), then a(n) = a(n-1) + a(n-2) - a(n-13)",
            returns: TermKind::Machine,
            category: "recurrence",
            examples: &["1, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 232, 375"],
            related: &["A000045"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        require_within("A000044", term_count, OVERFLOW_A000044)?;
        let mut a: Vec<i64> = init_buffer(term_count, &[1, 1, 1]);
        for n in 3..term_count {
            a[n] = a[n - 1] + a[n - 2];
            if n >= 13 {
                a[n] -= a[n - 13];
            }
        }
        Ok(SequenceResult::machine(a, 0))
    }
}

// ============ A000058 ============

pub struct Sylvester;

impl SequencePlugin for Sylvester {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000058",
            name: "Sylvester's sequence",
            description: "a(0) = 2, a(n+1) = a(n)^2 - a(n) + 1",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["2, 3, 7, 43, 1807, 3263443"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a: Vec<Integer> = init_buffer(term_count, &[int(2)]);
        for n in 1..term_count {
            let prev = &a[n - 1];
            a[n] = prev.mul(prev).sub(prev).add(&Integer::one());
        }
        Ok(SequenceResult::exact(a, 0)
            .warn_if(term_count > LONG_A000058, || SeqError::long_calculation("A000058", LONG_A000058)))
    }
}

// ============ A000073 ============

pub struct Tribonacci;

impl SequencePlugin for Tribonacci {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000073",
            name: "Tribonacci numbers",
            description: "a(n) = a(n-1) + a(n-2) + a(n-3) with a(0) = a(1) = 0, a(2) = 1",
            returns: TermKind::Machine,
            category: "recurrence",
            examples: &["0, 0, 1, 1, 2, 4, 7, 13, 24, 44"],
            related: &["A000213", "A000078"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        require_within("A000073", term_count, OVERFLOW_A000073)?;
        let a = additive(term_count, &[0, 0, 1], 3);
        Ok(SequenceResult::machine(to_machine("A000073", &a)?, 0))
    }
}

// ============ A000078 ============

pub struct Tetranacci;

impl SequencePlugin for Tetranacci {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000078",
            name: "Tetranacci numbers",
            description: "Sum of the previous four terms, seeded 0, 0, 0, 1",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["0, 0, 0, 1, 1, 2, 4, 8, 15, 29, 56"],
            related: &["A000288", "A000073"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::exact(additive(term_count, &[0, 0, 0, 1], 4), 0))
    }
}

// ============ A000123 ============

pub struct BinaryPartitions;

impl SequencePlugin for BinaryPartitions {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000123",
            name: "Number of binary partitions of 2n",
            description: "a(0) = 1, a(n) = a(n-1) + a(floor(n/2))",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["1, 2, 4, 6, 10, 14, 20, 26, 36, 46"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a: Vec<Integer> = init_buffer(term_count, &[Integer::one()]);
        for n in 1..term_count {
            a[n] = a[n - 1].add(&a[n / 2]);
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000126 ============

pub struct DoublingRecurrence;

impl SequencePlugin for DoublingRecurrence {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000126",
            name: "a(n) = 2a(n-1) - a(n-3) + 1",
            description: "Seeded 1, 2, 4; each later term is one more than 2a(n-1) - a(n-3)",
            returns: TermKind::Machine,
            category: "recurrence",
            examples: &["1, 2, 4, 8, 15, 27, 47, 80"],
            related: &["A000045"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        require_within("A000126", term_count, OVERFLOW_A000126)?;
        let mut a: Vec<i64> = init_buffer(term_count, &[1, 2, 4]);
        for n in 3..term_count {
            a[n] = 2 * a[n - 1] - a[n - 3] + 1;
        }
        Ok(SequenceResult::machine(a, 1))
    }
}

// ============ A000129 ============

pub struct Pell;

impl SequencePlugin for Pell {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000129",
            name: "Pell numbers",
            description: "a(n) = 2a(n-1) + a(n-2) with a(0) = 0, a(1) = 1; needs at least 3 terms",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["0, 1, 2, 5, 12, 29, 70, 169"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        require_at_least("A000129", term_count, 3)?;
        let two = int(2);
        let mut a: Vec<Integer> = init_buffer(term_count, &[int(0), int(1)]);
        for n in 2..term_count {
            a[n] = a[n - 1].mul(&two).add(&a[n - 2]);
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000153 ============

pub struct ShiftedFactorialRecurrence;

impl SequencePlugin for ShiftedFactorialRecurrence {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000153",
            name: "a(n) = n a(n-1) + (n-2) a(n-2)",
            description: "Seeded a(0) = 0, a(1) = 1",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["0, 1, 2, 7, 32, 181, 1214"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a: Vec<Integer> = init_buffer(term_count, &[int(0), int(1)]);
        for n in 2..term_count {
            a[n] = idx(n).mul(&a[n - 1]).add(&idx(n - 2).mul(&a[n - 2]));
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000179 ============

pub struct Menage;

impl SequencePlugin for Menage {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000179",
            name: "Menage numbers",
            description: "a(n) = ((n^2 - 2n) a(n-1) + n a(n-2) - 4(-1)^n) / (n - 2)",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["1, -1, 0, 1, 2, 13, 80, 579"],
            related: &["A000166"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a: Vec<Integer> = init_buffer(term_count, &[int(1), int(-1), int(0)]);
        let four = int(4);
        for n in 3..term_count {
            let k = idx(n);
            let weight = k.mul(&k).sub(&k.mul(&int(2)));
            let numer = weight
                .mul(&a[n - 1])
                .add(&k.mul(&a[n - 2]))
                .sub(&four.mul(&alternating_sign(n)));
            a[n] = numer.checked_div(&idx(n - 2))?;
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000213 ============

pub struct TribonacciOnes;

impl SequencePlugin for TribonacciOnes {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000213",
            name: "Tribonacci numbers seeded 1, 1, 1",
            description: "a(n) = a(n-1) + a(n-2) + a(n-3)",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["1, 1, 1, 3, 5, 9, 17, 31, 57"],
            related: &["A000073"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::exact(nacci(term_count, 3, false)?, 0))
    }
}

// ============ A000288 ============

pub struct TetranacciOnes;

impl SequencePlugin for TetranacciOnes {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000288",
            name: "Tetranacci numbers seeded 1, 1, 1, 1",
            description: "a(n) = a(n-1) + a(n-2) + a(n-3) + a(n-4)",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["1, 1, 1, 1, 4, 7, 13, 25, 49"],
            related: &["A000078"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::exact(nacci(term_count, 4, false)?, 0))
    }
}

// ============ A000301 ============

pub struct TwoToFibonacci;

impl SequencePlugin for TwoToFibonacci {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000301",
            name: "2^Fibonacci(n)",
            description: "a(n) = a(n-1) a(n-2) with a(0) = 1, a(1) = 2",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["1, 2, 2, 4, 8, 32, 256, 8192"],
            related: &["A000045", "A000079"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let fib = nacci(term_count, 2, true)?;
        let mut a = Vec::with_capacity(term_count);
        for (n, f) in fib.iter().enumerate() {
            let bits = f.to_usize().ok_or_else(|| SeqError::overflow("A000301", n))?;
            a.push(Integer::one().shl(bits));
        }
        Ok(SequenceResult::exact(a, 0)
            .warn_if(term_count > LONG_A000301, || SeqError::long_calculation("A000301", LONG_A000301)))
    }
}

// ============ A003048 ============

pub struct AlternatingFactorialRecurrence;

impl SequencePlugin for AlternatingFactorialRecurrence {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A003048",
            name: "a(n+1) = n a(n) - (-1)^n",
            description: "a(0) = 1, a(n) = n a(n-1) - (-1)^n",
            returns: TermKind::Exact,
            category: "recurrence",
            examples: &["1, 2, 3, 10, 39, 196, 1175"],
            related: &["A000166"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a: Vec<Integer> = init_buffer(term_count, &[Integer::one()]);
        for n in 1..term_count {
            a[n] = idx(n).mul(&a[n - 1]).sub(&alternating_sign(n));
        }
        Ok(SequenceResult::exact(a, 0))
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
    fn test_lucas() {
        expect(&Lucas, 10, &["2", "1", "3", "4", "7", "11", "18", "29", "47", "76"]);
        assert_eq!(Lucas.compute(91).unwrap().len(), 91);
        let err = Lucas.compute(92).unwrap_err();
        assert_eq!(err.code, codes::OVERFLOW);
    }

    #[test]
    fn test_dying_rabbits() {
        let a = DyingRabbits.compute(17).unwrap().terms.to_strings();
        assert_eq!(&a[..13], &["1", "1", "1", "2", "3", "5", "8", "13", "21", "34", "55", "89", "144"]);
        assert_eq!(&a[13..], &["232", "375", "606", "979"]);
    }

    #[test]
    fn test_short_seed_lists() {
        expect(&Tribonacci, 2, &["0", "0"]);
        expect(&DyingRabbits, 1, &["1"]);
        assert!(Sylvester.compute(0).unwrap().is_empty());
        assert!(Menage.compute(0).unwrap().is_empty());
        expect(&Menage, 2, &["1", "-1"]);
    }

    #[test]
    fn test_nacci_variants() {
        expect(&Tribonacci, 10, &["0", "0", "1", "1", "2", "4", "7", "13", "24", "44"]);
        expect(&Tetranacci, 11, &["0", "0", "0", "1", "1", "2", "4", "8", "15", "29", "56"]);
        expect(&TribonacciOnes, 9, &["1", "1", "1", "3", "5", "9", "17", "31", "57"]);
        expect(&TetranacciOnes, 9, &["1", "1", "1", "1", "4", "7", "13", "25", "49"]);
    }

    #[test]
    fn test_polynomial_recurrences() {
        expect(&Sylvester, 6, &["2", "3", "7", "43", "1807", "3263443"]);
        expect(&BinaryPartitions, 10, &["1", "2", "4", "6", "10", "14", "20", "26", "36", "46"]);
        expect(&DoublingRecurrence, 8, &["1", "2", "4", "8", "15", "27", "47", "80"]);
        expect(&ShiftedFactorialRecurrence, 7, &["0", "1", "2", "7", "32", "181", "1214"]);
        expect(&AlternatingFactorialRecurrence, 7, &["1", "2", "3", "10", "39", "196", "1175"]);
    }

    #[test]
    fn test_pell_needs_three_terms() {
        expect(&Pell, 8, &["0", "1", "2", "5", "12", "29", "70", "169"]);
        assert_eq!(Pell.compute(2).unwrap_err().code, codes::TOO_SMALL);
    }

    #[test]
    fn test_menage() {
        expect(&Menage, 8, &["1", "-1", "0", "1", "2", "13", "80", "579"]);
    }

    #[test]
    fn test_two_to_fibonacci() {
        expect(&TwoToFibonacci, 8, &["1", "2", "2", "4", "8", "32", "256", "8192"]);
    }
}
