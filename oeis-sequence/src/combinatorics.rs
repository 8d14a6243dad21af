//! Combinatorial primitives
//!
//! factorial, binomial, permutations, Bernoulli and Stirling numbers,
//! divisor sums, Euler's totient and gcd. Exact throughout.

use oeis_core::{Integer, NumberError, Rational};
use crate::scaffold::factors;

fn negative(what: &str, n: i64) -> NumberError {
    NumberError::InvalidArgument(format!("{} of negative number {}", what, n))
}

// ============ Factorials ============

/// n! computed iteratively
pub fn factorial(n: i64) -> Result<Integer, NumberError> {
    if n < 0 {
        return Err(negative("factorial", n));
    }
    Ok((2..=n).fold(Integer::one(), |acc, k| acc.mul(&Integer::from_i64(k))))
}

/// C(n, r) by the multiplicative formula, using C(n, r) = C(n, n-r)
pub fn binomial(n: i64, r: i64) -> Result<Integer, NumberError> {
    if n < 0 || r < 0 {
        return Err(NumberError::InvalidArgument(format!(
            "binomial({}, {}) needs non-negative arguments",
            n, r
        )));
    }
    if r > n {
        return Err(NumberError::InvalidArgument(format!(
            "binomial({}, {}) needs r <= n",
            n, r
        )));
    }

    let r = if r > n / 2 { n - r } else { r };
    let mut result = Integer::one();
    for i in 0..r {
        // after this step result == C(n, i + 1), so the division is exact
        result = result
            .mul(&Integer::from_i64(n - i))
            .checked_div(&Integer::from_i64(i + 1))?;
    }
    Ok(result)
}

/// n! / (n-r)!, zero when r > n
pub fn permutations(n: i64, r: i64) -> Result<Integer, NumberError> {
    if n < 0 || r < 0 {
        return Err(NumberError::InvalidArgument(format!(
            "permutations({}, {}) needs non-negative arguments",
            n, r
        )));
    }
    if r > n {
        return Ok(Integer::zero());
    }
    Ok((n - r + 1..=n).fold(Integer::one(), |acc, k| acc.mul(&Integer::from_i64(k))))
}

// ============ Bernoulli ============

/// B(n) by the Akiyama–Tanigawa algorithm
///
/// This convention gives B(1) = +1/2; every other index agrees with the
/// classic numbers.
pub fn bernoulli(n: i64) -> Result<Rational, NumberError> {
    if n < 0 {
        return Err(negative("bernoulli", n));
    }
    let n = n as usize;
    let mut row: Vec<Rational> = Vec::with_capacity(n + 1);
    for m in 0..=n {
        row.push(Rational::new(1, m as i64 + 1)?);
        for j in (1..=m).rev() {
            let scale = Rational::from_integer(&Integer::from_u64(j as u64));
            row[j - 1] = row[j - 1].sub(&row[j]).mul(&scale);
        }
    }
    Ok(row.swap_remove(0))
}

// ============ Stirling numbers ============

/// Shared tabulation for both Stirling kinds: one row of width k+1, updated
/// right to left so `row[j - 1]` still holds the previous row's value.
fn stirling_table(
    n: i64,
    k: i64,
    name: &str,
    weight: impl Fn(usize, usize) -> u64,
) -> Result<Integer, NumberError> {
    if n < 0 || k < 0 {
        return Err(NumberError::InvalidArgument(format!(
            "{}({}, {}) needs non-negative arguments",
            name, n, k
        )));
    }
    if k > n {
        return Ok(Integer::zero());
    }
    let (n, k) = (n as usize, k as usize);
    let mut row = vec![Integer::zero(); k + 1];
    row[0] = Integer::one();
    for i in 1..=n {
        for j in (0..=k.min(i)).rev() {
            let carried = if j > 0 { row[j - 1].clone() } else { Integer::zero() };
            row[j] = row[j].mul(&Integer::from_u64(weight(i, j))).add(&carried);
        }
    }
    Ok(row.swap_remove(k))
}

/// Unsigned Stirling numbers of the first kind:
/// s(n, k) = (n-1) s(n-1, k) + s(n-1, k-1)
pub fn stirling1(n: i64, k: i64) -> Result<Integer, NumberError> {
    stirling_table(n, k, "stirling1", |i, _| (i - 1) as u64)
}

/// Stirling numbers of the second kind:
/// S(n, k) = k S(n-1, k) + S(n-1, k-1)
pub fn stirling2(n: i64, k: i64) -> Result<Integer, NumberError> {
    stirling_table(n, k, "stirling2", |_, j| j as u64)
}

// ============ Divisors ============

/// Sum of d^e over the divisors d of n
pub fn sigma(n: i64, e: u32) -> Result<Integer, NumberError> {
    if n <= 0 {
        return Err(NumberError::InvalidArgument(format!(
            "sigma needs a positive argument, got {}",
            n
        )));
    }
    Ok(factors(n)
        .into_iter()
        .fold(Integer::zero(), |acc, d| acc.add(&Integer::from_i64(d).pow_u32(e))))
}

pub fn divisor_count(n: i64) -> usize {
    factors(n).len()
}

// ============ GCD and totient ============

/// Euclidean gcd of the magnitudes
pub fn gcd(a: i64, b: i64) -> u64 {
    fn inner(a: u64, b: u64) -> u64 {
        if b == 0 {
            a
        } else {
            inner(b, a % b)
        }
    }
    inner(a.unsigned_abs(), b.unsigned_abs())
}

pub fn gcd_big(a: &Integer, b: &Integer) -> Integer {
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        let r = match a.checked_rem(&b) {
            Ok(r) => r,
            Err(_) => break,
        };
        a = b;
        b = r;
    }
    a
}

/// Count of i in [0, n) with gcd(i, n) == 1
pub fn euler_totient(n: i64) -> i64 {
    (0..n.max(0)).filter(|&i| gcd(i, n) == 1).count() as i64
}

pub fn euler_totient_big(n: &Integer) -> Integer {
    let one = Integer::one();
    let mut count = Integer::zero();
    let mut i = Integer::zero();
    while &i < n {
        if gcd_big(&i, n).is_one() {
            count = count.add(&one);
        }
        i = i.add(&one);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Integer {
        Integer::from_i64(n)
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), int(1));
        for n in 1..30 {
            let prev = factorial(n - 1).unwrap();
            assert_eq!(factorial(n).unwrap(), prev.mul(&int(n)));
        }
        assert_eq!(factorial(25).unwrap().to_string(), "15511210043330985984000000");
        assert!(matches!(factorial(-1), Err(NumberError::InvalidArgument(_))));
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2).unwrap(), int(10));
        assert_eq!(binomial(10, 0).unwrap(), int(1));
        assert_eq!(binomial(0, 0).unwrap(), int(1));
        assert!(matches!(binomial(3, 5), Err(NumberError::InvalidArgument(_))));
        assert!(binomial(-1, 0).is_err());
        assert!(binomial(4, -1).is_err());
    }

    #[test]
    fn test_binomial_symmetry() {
        for n in 0..25 {
            for r in 0..=n {
                assert_eq!(binomial(n, r).unwrap(), binomial(n, n - r).unwrap());
            }
        }
        assert_eq!(binomial(100, 50).unwrap().to_string(), "100891344545564193334812497256");
    }

    #[test]
    fn test_permutations() {
        assert_eq!(permutations(5, 2).unwrap(), int(20));
        assert_eq!(permutations(5, 0).unwrap(), int(1));
        assert_eq!(permutations(3, 5).unwrap(), int(0));
        assert!(permutations(-3, 1).is_err());
    }

    #[test]
    fn test_bernoulli() {
        let expected = [(0, "1/1"), (1, "1/2"), (2, "1/6"), (3, "0/1"), (4, "-1/30"), (6, "1/42"), (12, "-691/2730")];
        for (n, s) in expected {
            assert_eq!(bernoulli(n).unwrap().to_string(), s, "B({})", n);
        }
        assert!(bernoulli(-2).is_err());
    }

    #[test]
    fn test_stirling() {
        assert_eq!(stirling2(4, 2).unwrap(), int(7));
        assert_eq!(stirling2(0, 0).unwrap(), int(1));
        assert_eq!(stirling2(5, 0).unwrap(), int(0));
        assert_eq!(stirling2(10, 3).unwrap(), int(9330));
        assert_eq!(stirling1(3, 2).unwrap(), int(3));
        assert_eq!(stirling1(5, 2).unwrap(), int(50));
        assert_eq!(stirling1(4, 0).unwrap(), int(0));
        assert_eq!(stirling1(2, 5).unwrap(), int(0));
        assert!(stirling1(-1, 0).is_err());
    }

    #[test]
    fn test_sigma() {
        assert_eq!(sigma(12, 1).unwrap(), int(28));
        assert_eq!(sigma(12, 0).unwrap(), int(6));
        assert_eq!(sigma(4, 2).unwrap(), int(21));
        assert!(sigma(0, 1).is_err());
        assert_eq!(divisor_count(36), 9);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(-12, 8), 4);
        assert_eq!(gcd_big(&int(48), &int(18)), int(6));
        assert_eq!(gcd_big(&int(0), &int(5)), int(5));
    }

    #[test]
    fn test_totient() {
        let phi: Vec<i64> = (1..=10).map(euler_totient).collect();
        assert_eq!(phi, vec![1, 1, 2, 2, 4, 2, 6, 4, 6, 4]);
        assert_eq!(euler_totient(0), 0);
        assert_eq!(euler_totient_big(&int(36)), int(12));
        assert_eq!(euler_totient_big(&int(1)), int(1));
    }
}
