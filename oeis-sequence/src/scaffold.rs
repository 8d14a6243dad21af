//! Sequence scaffolding
//!
//! Buffer builders, shifts and bisection, plus the small counting
//! algorithms many formulas are built from: partitions, nacci recurrences,
//! change making, digits, Kolakoski runs and factor lists.

use oeis_core::{Integer, NumberError};
use crate::helpers::sum;

// ============ Buffers ============

/// A buffer of `len` zero values, each slot independent
pub fn new_buffer<T: Clone + Default>(len: usize) -> Vec<T> {
    vec![T::default(); len]
}

/// Like `new_buffer`, with the first `min(len, seeds.len())` slots seeded
pub fn init_buffer<T: Clone + Default>(len: usize, seeds: &[T]) -> Vec<T> {
    let mut a = new_buffer(len);
    for (slot, seed) in a.iter_mut().zip(seeds) {
        *slot = seed.clone();
    }
    a
}

/// Prepend `amount` zeros (the result is longer)
pub fn shift_right<T: Clone + Default>(a: &[T], amount: usize) -> Vec<T> {
    let mut out = new_buffer(amount);
    out.extend_from_slice(a);
    out
}

/// Drop the first `amount` elements (the result is shorter)
pub fn shift_left<T: Clone>(a: &[T], amount: usize) -> Vec<T> {
    a.iter().skip(amount).cloned().collect()
}

/// Every other element, starting at index 0
pub fn bisect<T: Clone>(a: &[T]) -> Vec<T> {
    a.iter().step_by(2).cloned().collect()
}

// ============ Partitions ============

/// Count the partitions of n by walking them in reverse lexicographic order
///
/// Each step decrements the rightmost part larger than one and spreads the
/// removed ones back out in parts no larger than it.
pub fn count_partitions(n: i64) -> Result<i64, NumberError> {
    if n < 0 {
        return Err(NumberError::InvalidArgument(format!(
            "cannot partition negative number {}",
            n
        )));
    }
    if n == 0 {
        return Ok(1);
    }

    let n = n as usize;
    let mut parts = vec![0usize; n];
    parts[0] = n;
    // index of the last part in use
    let mut k = 0usize;
    let mut count = 0i64;
    loop {
        count += 1;

        let mut remainder = 0usize;
        while parts[k] == 1 {
            if k == 0 {
                return Ok(count);
            }
            remainder += 1;
            k -= 1;
        }

        parts[k] -= 1;
        remainder += 1;
        while remainder > parts[k] {
            parts[k + 1] = parts[k];
            remainder -= parts[k];
            k += 1;
        }
        parts[k + 1] = remainder;
        k += 1;
    }
}

// ============ Recurrences ============

/// Generalized Fibonacci: every term after the seeds is the sum of the
/// previous `step` terms. Seeds are `step` ones, with the first replaced by
/// zero when `first_zero` is set.
pub fn nacci(length: usize, step: usize, first_zero: bool) -> Result<Vec<Integer>, NumberError> {
    if step == 0 {
        return Err(NumberError::InvalidArgument(
            "nacci needs a step count of at least 1".to_string(),
        ));
    }
    let mut seeds = vec![Integer::one(); step];
    if first_zero {
        seeds[0] = Integer::zero();
    }

    let mut a = init_buffer(length, &seeds);
    for i in step..length {
        a[i] = sum(&a[i - step..i]);
    }
    Ok(a)
}

/// Ways to make `amount` from the first `coin_count` denominations
///
/// Plain recursion, exponential in `amount`; callers warn for large inputs.
pub fn make_change(coin_count: usize, amount: i64, denominations: &[i64]) -> Result<i64, NumberError> {
    if coin_count > denominations.len() {
        return Err(NumberError::InvalidArgument(format!(
            "{} coins requested but only {} denominations given",
            coin_count,
            denominations.len()
        )));
    }
    if denominations[..coin_count].iter().any(|&d| d <= 0) {
        return Err(NumberError::InvalidArgument(
            "denominations must be positive".to_string(),
        ));
    }
    Ok(change_ways(coin_count, amount, denominations))
}

fn change_ways(coin_count: usize, amount: i64, denominations: &[i64]) -> i64 {
    if amount < 0 {
        0
    } else if amount == 0 {
        1
    } else if coin_count == 0 {
        0
    } else {
        change_ways(coin_count - 1, amount, denominations)
            + change_ways(coin_count, amount - denominations[coin_count - 1], denominations)
    }
}

/// The first `len` terms of the Kolakoski sequence over {1, 2}
pub fn kolakoski(len: usize) -> Vec<i64> {
    let mut a: Vec<i64> = vec![1, 2, 2];
    // a[read] is the length of the run being written next
    let mut read = 2;
    while a.len() < len {
        let next = if a[a.len() - 1] == 1 { 2 } else { 1 };
        for _ in 0..a[read] {
            a.push(next);
        }
        read += 1;
    }
    a.truncate(len);
    a
}

// ============ Digits and factors ============

/// Decimal digits of |n|, least significant first; empty for 0
pub fn digits(n: i64) -> Vec<i64> {
    let mut n = n.unsigned_abs();
    let mut out = Vec::new();
    while n != 0 {
        out.push((n % 10) as i64);
        n /= 10;
    }
    out
}

/// Leading decimal digit (0 for 0)
pub fn first_digit(n: i64) -> i64 {
    digits(n).last().copied().unwrap_or(0)
}

pub fn sum_of_squared_digits(n: i64) -> i64 {
    digits(n).iter().map(|d| d * d).sum()
}

/// Prime factors of n with multiplicity, ascending; empty for n < 2
pub fn prime_factorization(n: i64) -> Vec<i64> {
    let mut out = Vec::new();
    if n < 2 {
        return out;
    }
    let mut n = n;
    while n % 2 == 0 {
        out.push(2);
        n /= 2;
    }
    let mut p = 3;
    while p * p <= n {
        while n % p == 0 {
            out.push(p);
            n /= p;
        }
        p += 2;
    }
    if n > 2 {
        out.push(n);
    }
    out
}

/// All positive divisors of n, ascending; empty for n < 1
pub fn factors(n: i64) -> Vec<i64> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            small.push(d);
            if d * d != n {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(v: &[i64]) -> Vec<Integer> {
        v.iter().map(|&n| Integer::from_i64(n)).collect()
    }

    #[test]
    fn test_buffers() {
        let a: Vec<Integer> = new_buffer(3);
        assert_eq!(a, ints(&[0, 0, 0]));
        assert_eq!(init_buffer(4, &ints(&[1, 1])), ints(&[1, 1, 0, 0]));
        assert_eq!(init_buffer(1, &[5i64, 6, 7]), vec![5]);
        assert!(init_buffer::<i64>(0, &[1]).is_empty());
    }

    #[test]
    fn test_slots_are_independent() {
        let mut a: Vec<Integer> = new_buffer(3);
        a[1] = a[1].add(&Integer::from_i64(9));
        assert_eq!(a, ints(&[0, 9, 0]));
    }

    #[test]
    fn test_shift_and_bisect() {
        assert_eq!(shift_right(&[1i64, 2, 3], 2), vec![0, 0, 1, 2, 3]);
        assert_eq!(shift_left(&[1i64, 2, 3], 1), vec![2, 3]);
        assert!(shift_left(&[1i64], 4).is_empty());
        assert_eq!(bisect(&[0i64, 1, 2, 3, 4]), vec![0, 2, 4]);
    }

    #[test]
    fn test_count_partitions() {
        assert_eq!(count_partitions(0).unwrap(), 1);
        assert_eq!(count_partitions(1).unwrap(), 1);
        assert_eq!(count_partitions(5).unwrap(), 7);
        assert_eq!(count_partitions(10).unwrap(), 42);
        assert_eq!(count_partitions(30).unwrap(), 5604);
        assert_eq!(count_partitions(50).unwrap(), 204226);
        assert!(count_partitions(-1).is_err());
    }

    #[test]
    fn test_nacci() {
        let fib = nacci(10, 2, true).unwrap();
        assert_eq!(fib, ints(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]));
        let tetra = nacci(8, 4, false).unwrap();
        assert_eq!(tetra, ints(&[1, 1, 1, 1, 4, 7, 13, 25]));
        assert_eq!(nacci(1, 3, false).unwrap(), ints(&[1]));
        assert!(nacci(5, 0, false).is_err());
    }

    #[test]
    fn test_make_change() {
        let coins = [1, 2, 5, 10];
        assert_eq!(make_change(4, 0, &coins).unwrap(), 1);
        assert_eq!(make_change(4, 10, &coins).unwrap(), 11);
        assert_eq!(make_change(2, 4, &coins).unwrap(), 3);
        assert!(make_change(5, 1, &coins).is_err());
        assert!(make_change(1, 3, &[0]).is_err());
    }

    #[test]
    fn test_kolakoski() {
        assert_eq!(kolakoski(15), vec![1, 2, 2, 1, 1, 2, 1, 2, 2, 1, 2, 2, 1, 1, 2]);
        assert_eq!(kolakoski(2), vec![1, 2]);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(1203), vec![3, 0, 2, 1]);
        assert!(digits(0).is_empty());
        assert_eq!(first_digit(987), 9);
        assert_eq!(first_digit(0), 0);
        assert_eq!(sum_of_squared_digits(-12), 5);
    }

    #[test]
    fn test_factors() {
        assert_eq!(prime_factorization(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factorization(97), vec![97]);
        assert!(prime_factorization(1).is_empty());
        assert!(prime_factorization(0).is_empty());
        assert_eq!(factors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(factors(16), vec![1, 2, 4, 8, 16]);
        assert!(factors(0).is_empty());
    }
}
