//! Named and basic sequences
//!
//! Constant and periodic sequences, primes, Fibonacci, factorial families,
//! Catalan and Bell numbers, Bernoulli numerators and denominators.

use oeis_plugin::prelude::*;
use crate::combinatorics::{bernoulli, binomial, factorial, permutations};
use crate::helpers::{alternating_sign, idx, int};
use crate::primality::primes;
use crate::scaffold::{first_digit, init_buffer, kolakoski, nacci};

const OVERFLOW_A000042: usize = 19;
const OVERFLOW_A000045: usize = 93;
const OVERFLOW_A000108: usize = 36;
const OVERFLOW_A000110: usize = 25;
const LONG_A000197: usize = 10;

// ============ A000002 ============

pub struct Kolakoski;

impl SequencePlugin for Kolakoski {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000002",
            name: "Kolakoski sequence",
            description: "a(n) is the length of the n-th run; only 1s and 2s occur",
            returns: TermKind::Machine,
            category: "named",
            examples: &["1, 2, 2, 1, 1, 2, 1, 2, 2, 1"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine(kolakoski(term_count), 1))
    }
}

// ============ A000004 ============

pub struct Zeros;

impl SequencePlugin for Zeros {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000004",
            name: "The zero sequence",
            description: "a(n) = 0",
            returns: TermKind::Machine,
            category: "named",
            examples: &["0, 0, 0, 0, 0"],
            related: &["A000012"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine(vec![0; term_count], 0))
    }
}

// ============ A000007 ============

pub struct ZeroPower;

impl SequencePlugin for ZeroPower {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000007",
            name: "Characteristic function of 0",
            description: "a(n) = 0^n",
            returns: TermKind::Machine,
            category: "named",
            examples: &["1, 0, 0, 0, 0"],
            related: &["A000004"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine(init_buffer(term_count, &[1]), 0))
    }
}

// ============ A000012 ============

pub struct Ones;

impl SequencePlugin for Ones {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000012",
            name: "The all 1's sequence",
            description: "a(n) = 1",
            returns: TermKind::Machine,
            category: "named",
            examples: &["1, 1, 1, 1, 1"],
            related: &["A000004"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine(vec![1; term_count], 0))
    }
}

// ============ A000027 ============

pub struct Naturals;

impl SequencePlugin for Naturals {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000027",
            name: "The positive integers",
            description: "a(n) = n",
            returns: TermKind::Machine,
            category: "named",
            examples: &["1, 2, 3, 4, 5"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine((1..=term_count as i64).collect(), 1))
    }
}

// ============ A000030 ============

pub struct LeadingDigit;

impl SequencePlugin for LeadingDigit {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000030",
            name: "Initial digit of n",
            description: "Most significant decimal digit of n",
            returns: TermKind::Machine,
            category: "named",
            examples: &["0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 1"],
            related: &["A003132"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine((0..term_count as i64).map(first_digit).collect(), 0))
    }
}

// ============ A000034 ============

pub struct OneTwo;

impl SequencePlugin for OneTwo {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000034",
            name: "Period 2: repeat [1, 2]",
            description: "a(n) = 1 + (n mod 2)",
            returns: TermKind::Machine,
            category: "named",
            examples: &["1, 2, 1, 2, 1, 2"],
            related: &["A000035"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine((0..term_count as i64).map(|n| 1 + n % 2).collect(), 0))
    }
}

// ============ A000035 ============

pub struct Parity;

impl SequencePlugin for Parity {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000035",
            name: "Period 2: repeat [0, 1]",
            description: "a(n) = n mod 2",
            returns: TermKind::Machine,
            category: "named",
            examples: &["0, 1, 0, 1, 0, 1"],
            related: &["A000034"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine((0..term_count as i64).map(|n| n % 2).collect(), 0))
    }
}

// ============ A000040 ============

pub struct Primes;

impl SequencePlugin for Primes {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000040",
            name: "The prime numbers",
            description: "The first primes in increasing order",
            returns: TermKind::Machine,
            category: "primes",
            examples: &["2, 3, 5, 7, 11, 13, 17, 19, 23, 29"],
            related: &["A001223", "A000006"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine(primes(term_count), 1))
    }
}

// ============ A000042 ============

pub struct Repunits;

impl SequencePlugin for Repunits {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000042",
            name: "Unary representation of natural numbers",
            description: "a(n) = (10^n - 1) / 9",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 11, 111, 1111, 11111"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let ten = int(10);
        let mut a = Vec::with_capacity(term_count);
        let mut repunit = Integer::zero();
        for _ in 0..term_count {
            repunit = repunit.mul(&ten).add(&Integer::one());
            a.push(repunit.clone());
        }
        Ok(SequenceResult::exact(a, 1)
            .warn_if(term_count > OVERFLOW_A000042, || SeqError::big_int("A000042", OVERFLOW_A000042)))
    }
}

// ============ A000045 ============

pub struct Fibonacci;

impl SequencePlugin for Fibonacci {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000045",
            name: "Fibonacci numbers",
            description: "F(n) = F(n-1) + F(n-2) with F(0) = 0, F(1) = 1",
            returns: TermKind::Exact,
            category: "named",
            examples: &["0, 1, 1, 2, 3, 5, 8, 13, 21, 34"],
            related: &["A000032", "A000071", "A000073"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::exact(nacci(term_count, 2, true)?, 0)
            .warn_if(term_count > OVERFLOW_A000045, || SeqError::big_int("A000045", OVERFLOW_A000045)))
    }
}

// ============ A000071 ============

pub struct FibonacciMinusOne;

impl SequencePlugin for FibonacciMinusOne {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000071",
            name: "Fibonacci(n) - 1",
            description: "a(n) = F(n) - 1, indexed from 1",
            returns: TermKind::Exact,
            category: "named",
            examples: &["0, 0, 1, 2, 4, 7, 12, 20, 33"],
            related: &["A000045"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let fib = nacci(term_count + 1, 2, true)?;
        let one = Integer::one();
        let a = fib.iter().skip(1).map(|f| f.sub(&one)).collect();
        Ok(SequenceResult::exact(a, 1))
    }
}

// ============ A000079 ============

pub struct PowersOfTwo;

impl SequencePlugin for PowersOfTwo {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000079",
            name: "Powers of 2",
            description: "a(n) = 2^n",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 2, 4, 8, 16, 32, 64"],
            related: &["A000301"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (0..term_count).map(|n| Integer::one().shl(n)).collect();
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000108 ============

pub struct Catalan;

impl SequencePlugin for Catalan {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000108",
            name: "Catalan numbers",
            description: "C(0) = C(1) = 1, C(n) = Sum_{j<n} C(j)·C(n-1-j)",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 1, 2, 5, 14, 42, 132, 429, 1430, 4862"],
            related: &["A000110"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = init_buffer(term_count, &[Integer::one(), Integer::one()]);
        for i in 2..term_count {
            let mut total = Integer::zero();
            for j in 0..i {
                total = total.add(&a[j].mul(&a[i - j - 1]));
            }
            a[i] = total;
        }
        Ok(SequenceResult::exact(a, 0)
            .warn_if(term_count > OVERFLOW_A000108, || SeqError::big_int("A000108", OVERFLOW_A000108)))
    }
}

// ============ A000110 ============

/// First and last entry of each row of the Aitken array. Each row starts
/// with the previous row's last entry (or `first_head` for row 1) and adds
/// the entry above as it goes. Only the previous row is kept.
fn aitken_edges(rows: usize, first_head: Integer) -> Vec<(Integer, Integer)> {
    let mut out = Vec::with_capacity(rows);
    if rows == 0 {
        return out;
    }
    let mut prev = vec![Integer::one()];
    out.push((Integer::one(), Integer::one()));
    for r in 1..rows {
        let head = match prev.last() {
            Some(last) if r > 1 => last.clone(),
            _ => first_head.clone(),
        };
        let mut row = Vec::with_capacity(r + 1);
        row.push(head);
        for above in &prev {
            let next = row[row.len() - 1].add(above);
            row.push(next);
        }
        out.push((row[0].clone(), row[r].clone()));
        prev = row;
    }
    out
}

pub struct Bell;

impl SequencePlugin for Bell {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000110",
            name: "Bell numbers",
            description: "Number of partitions of a set of n labeled elements",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 1, 2, 5, 15, 52, 203, 877"],
            related: &["A000108", "A032346"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = aitken_edges(term_count, Integer::one())
            .into_iter()
            .map(|(head, _)| head)
            .collect();
        Ok(SequenceResult::exact(a, 0)
            .warn_if(term_count > OVERFLOW_A000110, || SeqError::big_int("A000110", OVERFLOW_A000110)))
    }
}

// ============ A000142 ============

pub struct Factorials;

impl SequencePlugin for Factorials {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000142",
            name: "Factorial numbers",
            description: "a(n) = n!",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 1, 2, 6, 24, 120, 720"],
            related: &["A000165", "A000178", "A000197"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        let mut acc = Integer::one();
        for n in 0..term_count {
            if n > 0 {
                acc = acc.mul(&idx(n));
            }
            a.push(acc.clone());
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000165 ============

pub struct DoubleFactorialEven;

impl SequencePlugin for DoubleFactorialEven {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000165",
            name: "Double factorial of even numbers",
            description: "a(n) = (2n)!! = 2^n * n!",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 2, 8, 48, 384, 3840"],
            related: &["A000142"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (0..term_count)
            .map(|n| Ok(factorial(n as i64)?.shl(n)))
            .collect::<Result<Vec<_>, NumberError>>()?;
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000166 ============

pub struct Derangements;

impl SequencePlugin for Derangements {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000166",
            name: "Subfactorial or rencontres numbers",
            description: "Permutations of n elements with no fixed points: a(n) = n a(n-1) + (-1)^n",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 0, 1, 2, 9, 44, 265, 1854"],
            related: &["A000142"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a: Vec<Integer> = init_buffer(term_count, &[Integer::one()]);
        for n in 1..term_count {
            a[n] = a[n - 1].mul(&idx(n)).add(&alternating_sign(n));
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000169 ============

pub struct LabeledRootedTrees;

impl SequencePlugin for LabeledRootedTrees {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000169",
            name: "Labeled rooted trees with n nodes",
            description: "a(n) = n^(n-1)",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 2, 9, 64, 625, 7776"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (1..=term_count)
            .map(|n| idx(n).pow(&idx(n - 1)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SequenceResult::exact(a, 1))
    }
}

// ============ A000172 ============

pub struct Franel;

impl SequencePlugin for Franel {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000172",
            name: "Franel numbers",
            description: "a(n) = Sum_{k=0..n} binomial(n, k)^3",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 2, 10, 56, 346, 2252"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        for n in 0..term_count as i64 {
            let mut total = Integer::zero();
            for k in 0..=n {
                total = total.add(&binomial(n, k)?.pow_u32(3));
            }
            a.push(total);
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000178 ============

pub struct Superfactorials;

impl SequencePlugin for Superfactorials {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000178",
            name: "Superfactorials",
            description: "Product of the first n factorials",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 1, 2, 12, 288, 34560"],
            related: &["A000142"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        let mut acc = Integer::one();
        for n in 0..term_count as i64 {
            acc = acc.mul(&factorial(n)?);
            a.push(acc.clone());
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000197 ============

pub struct FactorialOfFactorial;

impl SequencePlugin for FactorialOfFactorial {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000197",
            name: "(n!)!",
            description: "Factorial of n!; grows extremely fast",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 1, 2, 720, 620448401733239439360000"],
            related: &["A000142"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        for n in 0..term_count as i64 {
            let inner = factorial(n)?;
            let inner = inner.to_i64().ok_or_else(|| SeqError::overflow("A000197", n as usize))?;
            a.push(factorial(inner)?);
        }
        Ok(SequenceResult::exact(a, 0)
            .warn_if(term_count >= LONG_A000197, || SeqError::long_calculation("A000197", LONG_A000197)))
    }
}

// ============ A000522 ============

pub struct Arrangements;

impl SequencePlugin for Arrangements {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000522",
            name: "Number of arrangements of any subset of n elements",
            description: "a(n) = Sum_{k=0..n} n! / k!",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 2, 5, 16, 65, 326, 1957"],
            related: &["A000142"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        for n in 0..term_count as i64 {
            let mut total = Integer::zero();
            for r in 0..=n {
                total = total.add(&permutations(n, r)?);
            }
            a.push(total);
        }
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A027641 / A027642 ============

/// B(n) with the B(1) = -1/2 sign used by both catalog entries
fn classic_bernoulli(n: i64) -> Result<Rational, NumberError> {
    let b = bernoulli(n)?;
    if n == 1 {
        Ok(Rational::zero().sub(&b))
    } else {
        Ok(b)
    }
}

pub struct BernoulliNumerators;

impl SequencePlugin for BernoulliNumerators {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A027641",
            name: "Numerator of Bernoulli number B(n)",
            description: "Numerators of B(n) with B(1) = -1/2",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, -1, 1, 0, -1, 0, 1, 0, -1, 0, 5"],
            related: &["A027642"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (0..term_count as i64)
            .map(|n| Ok(classic_bernoulli(n)?.num()))
            .collect::<Result<Vec<_>, NumberError>>()?;
        Ok(SequenceResult::exact(a, 0))
    }
}

pub struct BernoulliDenominators;

impl SequencePlugin for BernoulliDenominators {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A027642",
            name: "Denominator of Bernoulli number B(n)",
            description: "Denominators of B(n); 1 wherever B(n) = 0",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 2, 6, 1, 30, 1, 42, 1, 30, 1, 66"],
            related: &["A027641"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (0..term_count as i64)
            .map(|n| Ok(classic_bernoulli(n)?.denom()))
            .collect::<Result<Vec<_>, NumberError>>()?;
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A032346 ============

pub struct InverseBinomialShift;

impl SequencePlugin for InverseBinomialShift {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A032346",
            name: "Shifts one place right under inverse binomial transform",
            description: "Last entries of the Aitken array seeded with 0 in its second row",
            returns: TermKind::Exact,
            category: "named",
            examples: &["1, 1, 2, 6, 21, 82, 354"],
            related: &["A000110"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = aitken_edges(term_count, Integer::zero())
            .into_iter()
            .map(|(_, last)| last)
            .collect();
        Ok(SequenceResult::exact(a, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(result: &SequenceResult) -> Vec<String> {
        result.terms.to_strings()
    }

    fn expect(plugin: &dyn SequencePlugin, count: usize, expected: &[&str]) {
        let result = plugin.compute(count).unwrap();
        assert_eq!(strings(&result), expected, "{}", plugin.meta().id);
    }

    #[test]
    fn test_constant_sequences() {
        expect(&Zeros, 3, &["0", "0", "0"]);
        expect(&Ones, 3, &["1", "1", "1"]);
        expect(&ZeroPower, 4, &["1", "0", "0", "0"]);
        assert!(ZeroPower.compute(0).unwrap().is_empty());
        expect(&OneTwo, 4, &["1", "2", "1", "2"]);
        expect(&Parity, 4, &["0", "1", "0", "1"]);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Naturals.compute(3).unwrap().offset, 1);
        assert_eq!(Fibonacci.compute(3).unwrap().offset, 0);
        assert_eq!(Primes.compute(3).unwrap().offset, 1);
        assert_eq!(Repunits.compute(3).unwrap().indexed()[0], (1, "1".to_string()));
    }

    #[test]
    fn test_digits_and_runs() {
        expect(&LeadingDigit, 12, &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "1", "1"]);
        expect(&Kolakoski, 6, &["1", "2", "2", "1", "1", "2"]);
        expect(&Repunits, 4, &["1", "11", "111", "1111"]);
    }

    #[test]
    fn test_fibonacci_family() {
        expect(&Fibonacci, 10, &["0", "1", "1", "2", "3", "5", "8", "13", "21", "34"]);
        expect(&FibonacciMinusOne, 7, &["0", "0", "1", "2", "4", "7", "12"]);
        let long = Fibonacci.compute(100).unwrap();
        assert_eq!(long.terms.to_strings()[99], "218922995834555169026");
        assert_eq!(long.warnings[0].code, codes::BIG_INT);
    }

    #[test]
    fn test_catalan() {
        expect(&Catalan, 10, &["1", "1", "2", "5", "14", "42", "132", "429", "1430", "4862"]);
        assert!(Catalan.compute(10).unwrap().warnings.is_empty());
        assert!(Catalan.compute(0).unwrap().is_empty());
        expect(&Catalan, 1, &["1"]);
        expect(&Catalan, 2, &["1", "1"]);
        let c = Catalan.compute(37).unwrap();
        assert_eq!(c.terms.to_strings()[36], binomial(72, 36).unwrap().checked_div(&int(37)).unwrap().to_string());
        assert_eq!(c.warnings[0].code, codes::BIG_INT);
    }

    #[test]
    fn test_bell() {
        expect(&Bell, 5, &["1", "1", "2", "5", "15"]);
        expect(&Bell, 8, &["1", "1", "2", "5", "15", "52", "203", "877"]);
        expect(&Bell, 1, &["1"]);
        assert_eq!(Bell.compute(20).unwrap().terms.to_strings()[19], "5832742205057");
        assert!(Bell.compute(0).unwrap().is_empty());
        assert_eq!(Bell.compute(26).unwrap().warnings.len(), 1);
    }

    #[test]
    fn test_inverse_binomial_shift() {
        expect(&InverseBinomialShift, 6, &["1", "1", "2", "6", "21", "82"]);
    }

    #[test]
    fn test_factorial_family() {
        expect(&Factorials, 6, &["1", "1", "2", "6", "24", "120"]);
        expect(&DoubleFactorialEven, 5, &["1", "2", "8", "48", "384"]);
        expect(&Derangements, 7, &["1", "0", "1", "2", "9", "44", "265"]);
        expect(&LabeledRootedTrees, 5, &["1", "2", "9", "64", "625"]);
        expect(&Superfactorials, 5, &["1", "1", "2", "12", "288"]);
        expect(&FactorialOfFactorial, 4, &["1", "1", "2", "720"]);
        expect(&Arrangements, 6, &["1", "2", "5", "16", "65", "326"]);
        expect(&Franel, 5, &["1", "2", "10", "56", "346"]);
    }

    #[test]
    fn test_bernoulli_entries() {
        expect(&BernoulliNumerators, 11, &["1", "-1", "1", "0", "-1", "0", "1", "0", "-1", "0", "5"]);
        expect(&BernoulliDenominators, 11, &["1", "2", "6", "1", "30", "1", "42", "1", "30", "1", "66"]);
    }

    #[test]
    fn test_powers_of_two() {
        expect(&PowersOfTwo, 5, &["1", "2", "4", "8", "16"]);
    }
}
