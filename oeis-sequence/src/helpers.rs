//! Helper functions shared by the formulas
//!
//! Term-count guards, Integer folds and the machine/exact conversions the
//! catalog uses when it derives one sequence from another.

use oeis_core::{Integer, SeqError};

/// Refuse a machine-width formula past its overflow limit
pub fn require_within(id: &str, count: usize, limit: usize) -> Result<(), SeqError> {
    if count > limit {
        Err(SeqError::overflow(id, limit))
    } else {
        Ok(())
    }
}

/// Require at least `min` terms
pub fn require_at_least(id: &str, count: usize, min: usize) -> Result<(), SeqError> {
    if count < min {
        Err(SeqError::too_small(id, min, count))
    } else {
        Ok(())
    }
}

pub fn int(n: i64) -> Integer {
    Integer::from_i64(n)
}

/// `n` as an Integer, for loop indices
pub fn idx(n: usize) -> Integer {
    Integer::from_u64(n as u64)
}

/// Calculate sum of integers
pub fn sum(numbers: &[Integer]) -> Integer {
    numbers
        .iter()
        .fold(Integer::zero(), |acc, n| acc.add(n))
}

/// Calculate product of integers
pub fn product(numbers: &[Integer]) -> Integer {
    numbers
        .iter()
        .fold(Integer::one(), |acc, n| acc.mul(n))
}

/// Running sums: `out[i] = a[0] + ... + a[i]`
pub fn partial_sums(values: &[i64]) -> Vec<i64> {
    values
        .iter()
        .scan(0i64, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// `(-1)^n` as an Integer
pub fn alternating_sign(n: usize) -> Integer {
    if n % 2 == 0 {
        Integer::one()
    } else {
        Integer::from_i64(-1)
    }
}

/// Narrow exact terms to machine width, failing with `OVERFLOW` for `id`
pub fn to_machine(id: &str, values: &[Integer]) -> Result<Vec<i64>, SeqError> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| v.to_i64().ok_or_else(|| SeqError::overflow(id, i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guards() {
        assert!(require_within("A000045", 93, 93).is_ok());
        assert_eq!(require_within("A000045", 94, 93).unwrap_err().code, "OVERFLOW");
        assert_eq!(require_at_least("A000044", 1, 2).unwrap_err().code, "TOO_SMALL");
    }

    #[test]
    fn test_folds() {
        let v = vec![int(2), int(3), int(7)];
        assert_eq!(sum(&v), int(12));
        assert_eq!(product(&v), int(42));
        assert_eq!(sum(&[]), Integer::zero());
        assert_eq!(partial_sums(&[1, 2, 3, 4]), vec![1, 3, 6, 10]);
    }

    #[test]
    fn test_to_machine() {
        let fits = vec![int(1), int(-5)];
        assert_eq!(to_machine("X", &fits).unwrap(), vec![1, -5]);
        let wide = vec![int(1), Integer::one().shl(64)];
        assert_eq!(to_machine("X", &wide).unwrap_err().code, "OVERFLOW");
    }
}
