//! Primality testing and prime enumeration
//!
//! Miller–Rabin with fixed witness bases: the twelve-prime set is
//! deterministic for every 64-bit input, and larger inputs run
//! `MILLER_RABIN_ROUNDS` rounds over the first primes. Prime lists are
//! generated fresh per call by a linear scan.

use oeis_core::{Integer, NumberError, SeqError};
use tracing::debug;

/// Rounds used for inputs wider than 64 bits
pub const MILLER_RABIN_ROUNDS: usize = 20;

const SMALL_PRIMES: [u64; MILLER_RABIN_ROUNDS] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Enough witnesses for a deterministic answer below 2^64
const WITNESSES_64: usize = 12;

/// Upper bound on the first prime list of a record-gap search and on any
/// up-front reservation; longer lists come from regeneration rounds
pub const MAX_INITIAL_PRIMES: usize = 1 << 16;

// ============ Machine width ============

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

pub fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &SMALL_PRIMES[..WITNESSES_64] {
        if n % p == 0 {
            return n == p;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    SMALL_PRIMES[..WITNESSES_64].iter().all(|&a| {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            return true;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                return true;
            }
        }
        false
    })
}

/// Primality of a machine integer; negatives are never prime
pub fn is_prime(n: i64) -> bool {
    n >= 2 && is_prime_u64(n as u64)
}

// ============ Arbitrary precision ============

pub fn is_prime_big(n: &Integer) -> bool {
    if n.is_negative() {
        return false;
    }
    if let Some(small) = n.to_u64() {
        return is_prime_u64(small);
    }

    // n > 2^64 from here on
    for &p in &SMALL_PRIMES {
        match n.checked_rem(&Integer::from_u64(p)) {
            Ok(r) if r.is_zero() => return false,
            Ok(_) => {}
            Err(_) => return false,
        }
    }

    let one = Integer::one();
    let n_minus_1 = n.sub(&one);
    let two = Integer::from_i64(2);
    let mut d = n_minus_1.clone();
    let mut s = 0u32;
    while d.is_even() {
        d = match d.checked_div(&two) {
            Ok(q) => q,
            Err(_) => return false,
        };
        s += 1;
    }

    SMALL_PRIMES.iter().take(MILLER_RABIN_ROUNDS).all(|&a| {
        let Ok(mut x) = Integer::from_u64(a).pow_mod(&d, n) else {
            return false;
        };
        if x.is_one() || x == n_minus_1 {
            return true;
        }
        for _ in 1..s {
            x = match x.mul(&x).checked_rem(n) {
                Ok(r) => r,
                Err(_) => return false,
            };
            if x == n_minus_1 {
                return true;
            }
        }
        false
    })
}

// ============ Enumeration ============

/// The first `count` primes, scanning upward from 0
pub fn primes(count: usize) -> Vec<i64> {
    let mut out = Vec::with_capacity(count.min(MAX_INITIAL_PRIMES));
    let mut n = 0i64;
    while out.len() < count {
        if is_prime(n) {
            out.push(n);
        }
        n += 1;
    }
    out
}

/// The first `count` primes as exact integers
pub fn primes_big(count: usize) -> Vec<Integer> {
    let one = Integer::one();
    let mut out = Vec::with_capacity(count.min(MAX_INITIAL_PRIMES));
    let mut n = Integer::zero();
    while out.len() < count {
        if is_prime_big(&n) {
            out.push(n.clone());
        }
        n = n.add(&one);
    }
    out
}

// ============ Float-based checks ============

/// Whether log_k(n) is an integer, compared in machine floats
///
/// Inexact for large n: e.g. ln(125) / ln(5) is not exactly 3 in f64.
pub fn is_prime_power(n: i64, k: i64) -> bool {
    if n < 1 || k < 2 {
        return false;
    }
    let ratio = (n as f64).ln() / (k as f64).ln();
    ratio == ratio.floor()
}

/// Square test via a machine-float square root
pub fn is_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    (n as f64).sqrt().fract() == 0.0
}

// ============ Representations ============

/// Whether k = a·x² + b·y² for some x, y >= 0
pub fn is_representable(k: i64, a: i64, b: i64) -> Result<bool, NumberError> {
    if a <= 0 || b <= 0 {
        return Err(NumberError::InvalidArgument(format!(
            "representation coefficients must be positive, got {} and {}",
            a, b
        )));
    }
    if k < 0 {
        return Ok(false);
    }
    let mut x = 0i64;
    while a * x * x <= k {
        let rest = k - a * x * x;
        let mut y = 0i64;
        while b * y * y <= rest {
            if b * y * y == rest {
                return Ok(true);
            }
            y += 1;
        }
        x += 1;
    }
    Ok(false)
}

/// `out[n]` counts the positive k <= 2^n of the form a·x² + b·y², given
/// that `out[0] == first`
pub fn representable_counts(len: usize, a: i64, b: i64, first: i64) -> Result<Vec<Integer>, NumberError> {
    let mut out = Vec::with_capacity(len);
    if len == 0 {
        return Ok(out);
    }
    if len > 62 {
        return Err(NumberError::InvalidArgument(format!(
            "representation counts are limited to 62 terms, got {}",
            len
        )));
    }
    let one = Integer::one();
    out.push(Integer::from_i64(first));
    for n in 1..len {
        let mut count = out[n - 1].clone();
        for k in (1i64 << (n - 1)) + 1..=(1i64 << n) {
            if is_representable(k, a, b)? {
                count = count.add(&one);
            }
        }
        out.push(count);
    }
    Ok(out)
}

// ============ Record gaps ============

/// How the prime list behind a record-gap search is grown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimeSearch {
    /// Primes generated on the first attempt
    pub initial: usize,
    /// Multiplier applied to the list size after each exhausted attempt
    pub growth: usize,
    /// Give up after this many attempts; `None` keeps retrying
    pub max_rounds: Option<usize>,
}

impl PrimeSearch {
    /// Sizing for `count` record gaps: 1.5·e^(0.65·count) primes, capped at
    /// `MAX_INITIAL_PRIMES`
    pub fn for_gaps(count: usize) -> Self {
        let initial = (1.5 * (0.65 * count as f64).exp()) as usize;
        Self { initial: initial.clamp(2, MAX_INITIAL_PRIMES), growth: 10, max_rounds: None }
    }

    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }
}

/// The prime list ran out before the search finished
struct Exhausted;

/// The first `count` record prime gaps as `(lower, upper)` prime pairs
///
/// When the generated primes run out mid-search the list is regenerated
/// `growth` times larger and the search starts over.
pub fn record_gaps(count: usize, search: PrimeSearch) -> Result<Vec<(i64, i64)>, SeqError> {
    let mut size = search.initial;
    let mut round = 1;
    loop {
        let list = primes(size);
        match scan_record_gaps(&list, count) {
            Ok(gaps) => return Ok(gaps),
            Err(Exhausted) => {
                if search.max_rounds.is_some_and(|max| round >= max) {
                    return Err(SeqError::search_exhausted(format!(
                        "{} record gaps not found within {} primes after {} rounds",
                        count, size, round
                    )));
                }
                debug!(primes = size, round, "prime list exhausted, regenerating");
                size = size.saturating_mul(search.growth.max(2));
                round += 1;
            }
        }
    }
}

fn scan_record_gaps(primes: &[i64], count: usize) -> Result<Vec<(i64, i64)>, Exhausted> {
    let mut gaps = Vec::with_capacity(count.min(primes.len()));
    let mut record = 0;
    for pair in primes.windows(2) {
        if gaps.len() == count {
            break;
        }
        let gap = pair[1] - pair[0];
        if gap > record {
            gaps.push((pair[0], pair[1]));
            record = gap;
        }
    }
    if gaps.len() == count {
        Ok(gaps)
    } else {
        Err(Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial_division(n: i64) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn test_is_prime_matches_trial_division() {
        for n in 0..=10_000 {
            assert_eq!(is_prime(n), trial_division(n), "n = {}", n);
        }
        assert!(!is_prime(-7));
    }

    #[test]
    fn test_is_prime_large_machine_values() {
        assert!(is_prime(9_223_372_036_854_775_783));
        assert!(!is_prime(3_215_031_751));
        assert!(is_prime_u64(18_446_744_073_709_551_557));
    }

    #[test]
    fn test_is_prime_big() {
        let mersenne = |p: u32| Integer::one().shl(p as usize).sub(&Integer::one());
        assert!(is_prime_big(&mersenne(89)));
        assert!(is_prime_big(&mersenne(127)));
        assert!(!is_prime_big(&mersenne(67)));
        assert!(!is_prime_big(&mersenne(128)));
        assert!(is_prime_big(&Integer::from_i64(97)));
        assert!(!is_prime_big(&Integer::from_i64(-97)));
    }

    #[test]
    fn test_primes() {
        assert_eq!(primes(5), vec![2, 3, 5, 7, 11]);
        assert!(primes(0).is_empty());
        let big: Vec<i64> = primes_big(5).iter().filter_map(|p| p.to_i64()).collect();
        assert_eq!(big, vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn test_float_checks() {
        assert!(is_prime_power(8, 2));
        assert!(is_prime_power(1, 3));
        assert!(!is_prime_power(12, 2));
        assert!(!is_prime_power(8, 1));
        assert!(is_square(144));
        assert!(is_square(0));
        assert!(!is_square(145));
        assert!(!is_square(-4));
    }

    #[test]
    fn test_is_representable() {
        assert!(is_representable(7, 1, 3).unwrap());
        assert!(!is_representable(5, 1, 3).unwrap());
        assert!(is_representable(0, 1, 1).unwrap());
        assert!(is_representable(25, 1, 1).unwrap());
        assert!(!is_representable(21, 1, 1).unwrap());
        assert!(is_representable(4, 0, 1).is_err());
    }

    #[test]
    fn test_representable_counts() {
        let sums_of_two_squares: Vec<i64> = representable_counts(6, 1, 1, 1)
            .unwrap()
            .iter()
            .filter_map(|c| c.to_i64())
            .collect();
        assert_eq!(sums_of_two_squares, vec![1, 2, 3, 5, 9, 16]);
        assert!(representable_counts(0, 1, 1, 1).unwrap().is_empty());
    }

    #[test]
    fn test_record_gaps() {
        let gaps = record_gaps(8, PrimeSearch::for_gaps(8)).unwrap();
        let uppers: Vec<i64> = gaps.iter().map(|g| g.1).collect();
        assert_eq!(uppers, vec![3, 5, 11, 29, 97, 127, 541, 907]);
        let lowers: Vec<i64> = gaps.iter().map(|g| g.0).collect();
        assert_eq!(lowers, vec![2, 3, 7, 23, 89, 113, 523, 887]);
    }

    #[test]
    fn test_record_gaps_regenerates() {
        let tiny = PrimeSearch { initial: 3, growth: 10, max_rounds: None };
        let gaps = record_gaps(6, tiny).unwrap();
        assert_eq!(gaps[5], (113, 127));
    }

    #[test]
    fn test_record_gaps_respects_ceiling() {
        let tiny = PrimeSearch { initial: 3, growth: 2, max_rounds: None }.with_max_rounds(2);
        let err = record_gaps(6, tiny).unwrap_err();
        assert_eq!(err.code, "SEARCH_EXHAUSTED");
    }

    #[test]
    fn test_long_gap_requests_start_bounded() {
        assert_eq!(PrimeSearch::for_gaps(8).initial, 271);
        for count in [40, 70, 500, usize::MAX] {
            assert_eq!(PrimeSearch::for_gaps(count).initial, MAX_INITIAL_PRIMES, "count = {}", count);
        }
        let list = primes(MAX_INITIAL_PRIMES + 1);
        assert_eq!(list.len(), MAX_INITIAL_PRIMES + 1);
    }

    #[test]
    fn test_seventy_gaps_fail_cleanly_under_a_ceiling() {
        let search = PrimeSearch::for_gaps(70).with_max_rounds(1);
        let err = record_gaps(70, search).unwrap_err();
        assert_eq!(err.code, "SEARCH_EXHAUSTED");
    }
}
