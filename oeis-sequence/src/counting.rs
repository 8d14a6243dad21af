//! Counting and number-theoretic sequences
//!
//! Divisor functions, partitions, change making, representations as sums of
//! squares, Stirling columns, Mersenne exponents and prime gaps.

use oeis_plugin::prelude::*;
use crate::combinatorics::{divisor_count, euler_totient, sigma, stirling1, stirling2};
use crate::helpers::{idx, int, partial_sums, to_machine};
use crate::primality::{is_prime, is_prime_big, is_prime_power, is_square, primes, record_gaps, representable_counts, PrimeSearch};
use crate::scaffold::{count_partitions, make_change, prime_factorization, sum_of_squared_digits};
use tracing::debug;

const LONG_A000008: usize = 350;
const ACCURACY_A000015: usize = 121;
const LONG_A000041: usize = 50;
const LONG_A000043: usize = 12;
const LONG_A000101: usize = 17;
const LONG_A000205: usize = 10;

const CENTS: [i64; 4] = [1, 2, 5, 10];

fn change_counts(term_count: usize) -> Result<Vec<i64>, NumberError> {
    (0..term_count as i64)
        .map(|n| make_change(CENTS.len(), n, &CENTS))
        .collect()
}

fn partition_counts(term_count: usize) -> Result<Vec<i64>, NumberError> {
    (0..term_count as i64).map(count_partitions).collect()
}

// ============ A000005 ============

pub struct DivisorCount;

impl SequencePlugin for DivisorCount {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000005",
            name: "d(n), the number of divisors of n",
            description: "Also called tau(n) or sigma_0(n)",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 2, 2, 3, 2, 4, 2, 4, 3, 4, 2, 6"],
            related: &["A000203"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (1..=term_count as i64).map(|n| divisor_count(n) as i64).collect();
        Ok(SequenceResult::machine(a, 1))
    }
}

// ============ A000006 ============

pub struct PrimeRoots;

impl SequencePlugin for PrimeRoots {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000006",
            name: "Integer part of square root of n-th prime",
            description: "a(n) = floor(sqrt(prime(n)))",
            returns: TermKind::Machine,
            category: "primes",
            examples: &["1, 1, 2, 2, 3, 3, 4, 4, 4, 5"],
            related: &["A000040", "A000196"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = primes(term_count)
            .into_iter()
            .map(|p| int(p).isqrt())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SequenceResult::machine(to_machine("A000006", &a)?, 1))
    }
}

// ============ A000008 ============

pub struct MakingChange;

impl SequencePlugin for MakingChange {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000008",
            name: "Ways of making change for n cents using 1, 2, 5 and 10 cent coins",
            description: "Counted by recursion over the coin list",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 1, 2, 2, 3, 4, 5, 6, 7, 8, 11"],
            related: &["A000064", "A000115"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine(change_counts(term_count)?, 0)
            .warn_if(term_count > LONG_A000008, || SeqError::long_calculation("A000008", LONG_A000008)))
    }
}

// ============ A000010 ============

pub struct Totient;

impl SequencePlugin for Totient {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000010",
            name: "Euler totient function phi(n)",
            description: "Count of numbers <= n and coprime to n",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 1, 2, 2, 4, 2, 6, 4, 6, 4"],
            related: &["A000005"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine((1..=term_count as i64).map(euler_totient).collect(), 1))
    }
}

// ============ A000015 ============

pub struct NextPrimePower;

impl SequencePlugin for NextPrimePower {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000015",
            name: "Smallest prime power >= n",
            description: "1 counts as a prime power; powers are detected with float logarithms",
            returns: TermKind::Machine,
            category: "primes",
            examples: &["1, 2, 3, 4, 5, 7, 7, 8, 9, 11, 11, 13, 13, 16, 16, 16, 17"],
            related: &["A000040"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let is_power = |m: i64| {
            m == 1 || prime_factorization(m).first().is_some_and(|&p| is_prime_power(m, p))
        };
        let mut a = Vec::with_capacity(term_count);
        for n in 1..=term_count as i64 {
            let mut m = n;
            while !is_power(m) {
                m += 1;
            }
            a.push(m);
        }
        Ok(SequenceResult::machine(a, 1)
            .warn_if(term_count > ACCURACY_A000015, || SeqError::accuracy("A000015")))
    }
}

// ============ A000041 ============

pub struct Partitions;

impl SequencePlugin for Partitions {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000041",
            name: "Partition numbers p(n)",
            description: "Number of partitions of n into positive parts",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42"],
            related: &["A000065", "A000070"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine(partition_counts(term_count)?, 0)
            .warn_if(term_count > LONG_A000041, || SeqError::long_calculation("A000041", LONG_A000041)))
    }
}

// ============ A000043 ============

pub struct MersenneExponents;

impl SequencePlugin for MersenneExponents {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000043",
            name: "Mersenne exponents",
            description: "Primes p such that 2^p - 1 is prime",
            returns: TermKind::Machine,
            category: "primes",
            examples: &["2, 3, 5, 7, 13, 17, 19, 31, 61, 89"],
            related: &["A000040", "A000079"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        let mut p = 1;
        while a.len() < term_count {
            p += 1;
            if !is_prime(p) {
                continue;
            }
            let mersenne = Integer::one().shl(p as usize).sub(&Integer::one());
            if is_prime_big(&mersenne) {
                debug!(exponent = p, "found Mersenne prime");
                a.push(p);
            }
        }
        Ok(SequenceResult::machine(a, 1)
            .warn_if(term_count > LONG_A000043, || SeqError::long_calculation("A000043", LONG_A000043)))
    }
}

// ============ A000050 ============

pub struct SumsOfTwoSquares;

impl SequencePlugin for SumsOfTwoSquares {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000050",
            name: "Number of k <= 2^n of the form x^2 + y^2",
            description: "Counts positive sums of two squares up to each power of two",
            returns: TermKind::Exact,
            category: "counting",
            examples: &["1, 2, 3, 5, 9, 16, 29, 54"],
            related: &["A000205", "A000161"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::exact(representable_counts(term_count, 1, 1, 1)?, 0))
    }
}

// ============ A000064 ============

pub struct MakingChangeSums;

impl SequencePlugin for MakingChangeSums {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000064",
            name: "Partial sums of A000008",
            description: "Running totals of the change-making counts",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 2, 4, 6, 9, 13, 18, 24, 31, 39, 50"],
            related: &["A000008"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine(partial_sums(&change_counts(term_count)?), 0)
            .warn_if(term_count > LONG_A000008, || SeqError::long_calculation("A000064", LONG_A000008)))
    }
}

// ============ A000065 ============

pub struct PartitionsMinusOne;

impl SequencePlugin for PartitionsMinusOne {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000065",
            name: "p(n) - 1",
            description: "Partitions of n into at least two parts, plus those of n = 0 minus one",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["0, 0, 1, 2, 4, 6, 10, 14, 21, 29"],
            related: &["A000041"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = partition_counts(term_count)?.into_iter().map(|p| p - 1).collect();
        Ok(SequenceResult::machine(a, 0)
            .warn_if(term_count > LONG_A000041, || SeqError::long_calculation("A000065", LONG_A000041)))
    }
}

// ============ A000068 ============

pub struct QuarticPrimes;

impl SequencePlugin for QuarticPrimes {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000068",
            name: "Numbers n such that n^4 + 1 is prime",
            description: "Searched upward from n = 1",
            returns: TermKind::Machine,
            category: "primes",
            examples: &["1, 2, 4, 6, 16, 20, 24, 28, 34, 46"],
            related: &["A000040"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        let mut n: i64 = 0;
        while a.len() < term_count {
            n += 1;
            let quartic = n
                .checked_pow(4)
                .and_then(|q| q.checked_add(1))
                .ok_or_else(|| SeqError::overflow("A000068", a.len()))?;
            if is_prime(quartic) {
                a.push(n);
            }
        }
        Ok(SequenceResult::machine(a, 1))
    }
}

// ============ A000070 ============

pub struct PartitionSums;

impl SequencePlugin for PartitionSums {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000070",
            name: "Partial sums of the partition numbers",
            description: "a(n) = p(0) + p(1) + ... + p(n)",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 2, 4, 7, 12, 19, 30, 45, 67, 97"],
            related: &["A000041"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine(partial_sums(&partition_counts(term_count)?), 0)
            .warn_if(term_count > LONG_A000041, || SeqError::long_calculation("A000070", LONG_A000041)))
    }
}

// ============ A000118 ============

pub struct FourSquares;

impl SequencePlugin for FourSquares {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000118",
            name: "Number of ways of writing n as a sum of 4 squares",
            description: "a(n) = 8 sigma(n) - 32 sigma(n/4), the second term only when 4 | n",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 8, 24, 32, 24, 48, 96, 64, 24, 104"],
            related: &["A000161", "A000164"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        if term_count > 0 {
            a.push(Integer::one());
        }
        for n in 1..term_count as i64 {
            let mut ways = sigma(n, 1)?.mul(&int(8));
            if n % 4 == 0 {
                ways = ways.sub(&sigma(n / 4, 1)?.mul(&int(32)));
            }
            a.push(ways);
        }
        Ok(SequenceResult::machine(to_machine("A000118", &a)?, 0))
    }
}

// ============ A000161 ============

pub struct TwoSquareWays;

impl SequencePlugin for TwoSquareWays {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000161",
            name: "Partitions of n into 2 squares",
            description: "Pairs 0 <= j <= i with i^2 + j^2 = n",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1"],
            related: &["A000050", "A000164"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        for n in 0..term_count as i64 {
            let mut count = 0;
            let mut i = 0;
            while i * i <= n {
                for j in 0..=i {
                    if i * i + j * j == n {
                        count += 1;
                    }
                }
                i += 1;
            }
            a.push(count);
        }
        Ok(SequenceResult::machine(a, 0))
    }
}

// ============ A000164 ============

pub struct ThreeSquareWays;

impl SequencePlugin for ThreeSquareWays {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000164",
            name: "Partitions of n into 3 squares",
            description: "Triples 0 <= x <= y <= z with x^2 + y^2 + z^2 = n",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 1, 1, 1, 1, 1, 1, 0, 1, 2, 1, 1, 1"],
            related: &["A000161", "A000118"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let mut a = Vec::with_capacity(term_count);
        for n in 0..term_count as i64 {
            let mut count = 0;
            let mut x = 0;
            while 3 * x * x <= n {
                let mut y = x;
                while x * x + 2 * y * y <= n {
                    let rest = n - x * x - y * y;
                    if is_square(rest) && y * y <= rest {
                        count += 1;
                    }
                    y += 1;
                }
                x += 1;
            }
            a.push(count);
        }
        Ok(SequenceResult::machine(a, 0))
    }
}

// ============ A000203 ============

pub struct DivisorSum;

impl SequencePlugin for DivisorSum {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000203",
            name: "sigma(n), the sum of the divisors of n",
            description: "Also called sigma_1(n)",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 3, 4, 7, 6, 12, 8, 15, 13, 18"],
            related: &["A000005", "A001065", "A001157"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (1..=term_count as i64)
            .map(|n| sigma(n, 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SequenceResult::machine(to_machine("A000203", &a)?, 1))
    }
}

// ============ A000205 ============

pub struct SquarePlusThreeSquares;

impl SequencePlugin for SquarePlusThreeSquares {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000205",
            name: "Number of k <= 2^n of the form x^2 + 3y^2",
            description: "Counts positive k = x^2 + 3y^2 up to each power of two",
            returns: TermKind::Exact,
            category: "counting",
            examples: &["1, 1, 3, 4, 8, 14, 25, 45"],
            related: &["A000050"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::exact(representable_counts(term_count, 1, 3, 1)?, 0)
            .warn_if(term_count > LONG_A000205, || SeqError::long_calculation("A000205", LONG_A000205)))
    }
}

// ============ A000254 ============

pub struct StirlingFirstColumn;

impl SequencePlugin for StirlingFirstColumn {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000254",
            name: "Unsigned Stirling numbers of the first kind s(n+1, 2)",
            description: "a(n) = n! * H(n), H the harmonic numbers",
            returns: TermKind::Exact,
            category: "counting",
            examples: &["0, 1, 3, 11, 50, 274, 1764"],
            related: &["A000392"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (0..term_count as i64)
            .map(|n| stirling1(n + 1, 2))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SequenceResult::exact(a, 0))
    }
}

// ============ A000392 ============

pub struct StirlingSecondColumn;

impl SequencePlugin for StirlingSecondColumn {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000392",
            name: "Stirling numbers of the second kind S(n, 3)",
            description: "Ways to split n labeled items into 3 nonempty blocks",
            returns: TermKind::Exact,
            category: "counting",
            examples: &["0, 0, 1, 6, 25, 90, 301, 966"],
            related: &["A000254"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (1..=term_count as i64)
            .map(|n| stirling2(n, 3))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SequenceResult::exact(a, 1))
    }
}

// ============ A001065 ============

pub struct AliquotSum;

impl SequencePlugin for AliquotSum {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A001065",
            name: "Sum of proper divisors of n",
            description: "a(n) = sigma(n) - n",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["0, 1, 1, 3, 1, 6, 1, 7, 4, 8"],
            related: &["A000203"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (1..=term_count)
            .map(|n| Ok(sigma(n as i64, 1)?.sub(&idx(n))))
            .collect::<Result<Vec<_>, NumberError>>()?;
        Ok(SequenceResult::machine(to_machine("A001065", &a)?, 1))
    }
}

// ============ A001157 ============

pub struct SquareDivisorSum;

impl SequencePlugin for SquareDivisorSum {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A001157",
            name: "sigma_2(n), the sum of squares of the divisors of n",
            description: "a(n) = Sum_{d | n} d^2",
            returns: TermKind::Exact,
            category: "counting",
            examples: &["1, 5, 10, 21, 26, 50, 50, 85, 91, 130"],
            related: &["A000203"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (1..=term_count as i64)
            .map(|n| sigma(n, 2))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SequenceResult::exact(a, 1))
    }
}

// ============ A003132 ============

pub struct SquaredDigitSum;

impl SequencePlugin for SquaredDigitSum {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A003132",
            name: "Sum of squares of digits of n",
            description: "Decimal digits, each squared, then summed",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["0, 1, 4, 9, 16, 25, 36, 49, 64, 81, 1, 2, 5"],
            related: &["A000030"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        Ok(SequenceResult::machine((0..term_count as i64).map(sum_of_squared_digits).collect(), 0))
    }
}

// ============ A007947 ============

pub struct Radical;

impl SequencePlugin for Radical {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A007947",
            name: "Squarefree kernel of n",
            description: "Product of the distinct primes dividing n",
            returns: TermKind::Machine,
            category: "counting",
            examples: &["1, 2, 3, 2, 5, 6, 7, 2, 3, 10"],
            related: &[],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = (1..=term_count as i64)
            .map(|n| {
                let mut distinct = prime_factorization(n);
                distinct.dedup();
                distinct.iter().product()
            })
            .collect();
        Ok(SequenceResult::machine(a, 1))
    }
}

// ============ A001223 ============

pub struct PrimeGaps;

impl SequencePlugin for PrimeGaps {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A001223",
            name: "Differences between consecutive primes",
            description: "a(n) = prime(n+1) - prime(n)",
            returns: TermKind::Machine,
            category: "primes",
            examples: &["1, 2, 2, 4, 2, 4, 2, 4, 6, 2"],
            related: &["A000040", "A000101"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = primes(term_count + 1)
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect();
        Ok(SequenceResult::machine(a, 1))
    }
}

// ============ A000101 / A002386 ============

fn record_gap_pairs(id: &str, term_count: usize) -> Result<Vec<(i64, i64)>, SeqError> {
    record_gaps(term_count, PrimeSearch::for_gaps(term_count)).map_err(|e| e.in_sequence(id))
}

pub struct RecordGapEnds;

impl SequencePlugin for RecordGapEnds {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A000101",
            name: "Upper ends of record prime gaps",
            description: "The larger prime of each gap longer than every earlier gap",
            returns: TermKind::Machine,
            category: "primes",
            examples: &["3, 5, 11, 29, 97, 127, 541, 907, 1151, 1361"],
            related: &["A002386", "A001223"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = record_gap_pairs("A000101", term_count)?
            .into_iter()
            .map(|(_, upper)| upper)
            .collect();
        Ok(SequenceResult::machine(a, 1)
            .warn_if(term_count > LONG_A000101, || SeqError::long_calculation("A000101", LONG_A000101)))
    }
}

pub struct RecordGapStarts;

impl SequencePlugin for RecordGapStarts {
    fn meta(&self) -> SequenceMeta {
        SequenceMeta {
            id: "A002386",
            name: "Lower ends of record prime gaps",
            description: "The smaller prime of each gap longer than every earlier gap",
            returns: TermKind::Machine,
            category: "primes",
            examples: &["2, 3, 7, 23, 89, 113, 523, 887, 1129, 1327"],
            related: &["A000101", "A001223"],
        }
    }

    fn compute(&self, term_count: usize) -> Result<SequenceResult, SeqError> {
        let a = record_gap_pairs("A002386", term_count)?
            .into_iter()
            .map(|(lower, _)| lower)
            .collect();
        Ok(SequenceResult::machine(a, 1)
            .warn_if(term_count > LONG_A000101, || SeqError::long_calculation("A002386", LONG_A000101)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect(plugin: &dyn SequencePlugin, count: usize, expected: &[i64]) {
        let result = plugin.compute(count).unwrap();
        let expected: Vec<String> = expected.iter().map(|n| n.to_string()).collect();
        assert_eq!(result.terms.to_strings(), expected, "{}", plugin.meta().id);
    }

    #[test]
    fn test_divisor_functions() {
        expect(&DivisorCount, 12, &[1, 2, 2, 3, 2, 4, 2, 4, 3, 4, 2, 6]);
        expect(&DivisorSum, 10, &[1, 3, 4, 7, 6, 12, 8, 15, 13, 18]);
        expect(&AliquotSum, 10, &[0, 1, 1, 3, 1, 6, 1, 7, 4, 8]);
        expect(&SquareDivisorSum, 10, &[1, 5, 10, 21, 26, 50, 50, 85, 91, 130]);
        expect(&Totient, 10, &[1, 1, 2, 2, 4, 2, 6, 4, 6, 4]);
        expect(&Radical, 10, &[1, 2, 3, 2, 5, 6, 7, 2, 3, 10]);
    }

    #[test]
    fn test_exact_term_counts() {
        for count in [0, 1, 7] {
            assert_eq!(DivisorCount.compute(count).unwrap().len(), count);
            assert_eq!(Totient.compute(count).unwrap().len(), count);
            assert_eq!(FourSquares.compute(count).unwrap().len(), count);
        }
    }

    #[test]
    fn test_partitions() {
        expect(&Partitions, 11, &[1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42]);
        expect(&PartitionsMinusOne, 8, &[0, 0, 1, 2, 4, 6, 10, 14]);
        expect(&PartitionSums, 7, &[1, 2, 4, 7, 12, 19, 30]);
        let long = Partitions.compute(51).unwrap();
        assert_eq!(long.warnings[0].code, codes::LONG_CALCULATION);
        assert_eq!(long.terms.to_strings()[50], "204226");
    }

    #[test]
    fn test_change_making() {
        expect(&MakingChange, 11, &[1, 1, 2, 2, 3, 4, 5, 6, 7, 8, 11]);
        expect(&MakingChangeSums, 11, &[1, 2, 4, 6, 9, 13, 18, 24, 31, 39, 50]);
    }

    #[test]
    fn test_squares() {
        expect(&FourSquares, 10, &[1, 8, 24, 32, 24, 48, 96, 64, 24, 104]);
        expect(&TwoSquareWays, 14, &[1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1]);
        expect(&ThreeSquareWays, 13, &[1, 1, 1, 1, 1, 1, 1, 0, 1, 2, 1, 1, 1]);
        expect(&SumsOfTwoSquares, 6, &[1, 2, 3, 5, 9, 16]);
        expect(&SquarePlusThreeSquares, 6, &[1, 1, 3, 4, 8, 14]);
        expect(&SquaredDigitSum, 13, &[0, 1, 4, 9, 16, 25, 36, 49, 64, 81, 1, 2, 5]);
    }

    #[test]
    fn test_stirling_columns() {
        expect(&StirlingFirstColumn, 7, &[0, 1, 3, 11, 50, 274, 1764]);
        expect(&StirlingSecondColumn, 8, &[0, 0, 1, 6, 25, 90, 301, 966]);
    }

    #[test]
    fn test_prime_searches() {
        expect(&PrimeRoots, 10, &[1, 1, 2, 2, 3, 3, 4, 4, 4, 5]);
        expect(&NextPrimePower, 17, &[1, 2, 3, 4, 5, 7, 7, 8, 9, 11, 11, 13, 13, 16, 16, 16, 17]);
        expect(&MersenneExponents, 10, &[2, 3, 5, 7, 13, 17, 19, 31, 61, 89]);
        expect(&QuarticPrimes, 6, &[1, 2, 4, 6, 16, 20]);
        expect(&PrimeGaps, 10, &[1, 2, 2, 4, 2, 4, 2, 4, 6, 2]);
    }

    #[test]
    fn test_record_gaps() {
        expect(&RecordGapEnds, 10, &[3, 5, 11, 29, 97, 127, 541, 907, 1151, 1361]);
        expect(&RecordGapStarts, 10, &[2, 3, 7, 23, 89, 113, 523, 887, 1129, 1327]);
        assert!(RecordGapEnds.compute(0).unwrap().is_empty());
    }
}
