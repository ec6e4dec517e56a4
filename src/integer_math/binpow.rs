// src/integer_math/binpow.rs
//
// Modular binary exponentiation.

use num::{BigInt, Signed};
use crate::core::{KitError, Result, MOD};

/// Computes `a^b mod m` with O(log b) multiplications.
///
/// The base is reduced modulo `m` first and the result always lies in `[0, m)`,
/// including for negative `a`. Products are taken in 128 bits, so any positive
/// `i64` modulus works.
pub fn binpow(a: i64, b: u64, m: i64) -> Result<i64> {
    if m <= 0 {
        return Err(KitError::InvalidModulus(m.to_string()));
    }
    Ok(pow_mod(a, b, m))
}

/// [`binpow`] with the default modulus [`MOD`].
pub fn binpow_mod(a: i64, b: u64) -> i64 {
    pow_mod(a, b, MOD)
}

/// Inverse of `a` modulo a prime `m` by Fermat's little theorem.
///
/// Returns `Ok(None)` when `a ≡ 0 (mod m)`. The result is meaningless if `m` is not prime.
pub fn mod_inverse(a: i64, m: i64) -> Result<Option<i64>> {
    if m <= 0 {
        return Err(KitError::InvalidModulus(m.to_string()));
    }
    if a.rem_euclid(m) == 0 {
        return Ok(None);
    }
    Ok(Some(pow_mod(a, (m - 2) as u64, m)))
}

/// Arbitrary precision variant. Result lies in `[0, m)`.
pub fn binpow_big(a: &BigInt, b: u64, m: &BigInt) -> Result<BigInt> {
    if !m.is_positive() {
        return Err(KitError::InvalidModulus(m.to_string()));
    }
    Ok(a.modpow(&BigInt::from(b), m))
}

// m > 0
fn pow_mod(a: i64, mut b: u64, m: i64) -> i64 {
    let m = m as i128;
    let mut base = (a as i128).rem_euclid(m);
    let mut result = 1 % m;
    while b > 0 {
        if b & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        b >>= 1;
    }
    result as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(a: i64, b: u64, m: i64) -> i64 {
        let mut result = 1 % m;
        for _ in 0..b {
            result = (result * a.rem_euclid(m)) % m;
        }
        result
    }

    #[test]
    fn test_binpow_known_values() {
        assert_eq!(binpow(2, 10, 1_000_000_007).unwrap(), 1024);
        assert_eq!(binpow(3, 0, 7).unwrap(), 1);
        assert_eq!(binpow(0, 0, 7).unwrap(), 1);
        assert_eq!(binpow(0, 5, 7).unwrap(), 0);
        assert_eq!(binpow(2, 62, i64::MAX).unwrap(), 1i64 << 62);
    }

    #[test]
    fn test_binpow_default_modulus() {
        assert_eq!(binpow_mod(2, 10), 1024);
        // 2^(p-1) ≡ 1 (mod p)
        assert_eq!(binpow_mod(2, (MOD - 1) as u64), 1);
    }

    #[test]
    fn test_binpow_matches_naive() {
        for m in 1..=13i64 {
            for a in -20..=20i64 {
                for b in 0..=12u64 {
                    assert_eq!(binpow(a, b, m).unwrap(), naive(a, b, m), "a={} b={} m={}", a, b, m);
                }
            }
        }
    }

    #[test]
    fn test_binpow_modulus_one_is_zero() {
        assert_eq!(binpow(5, 0, 1).unwrap(), 0);
        assert_eq!(binpow(5, 3, 1).unwrap(), 0);
    }

    #[test]
    fn test_binpow_large_modulus_no_overflow() {
        // (m - 1)^2 ≡ 1 (mod m) regardless of m
        let m = 999_999_999_999_999_989i64;
        assert_eq!(binpow(m - 1, 2, m).unwrap(), 1);
    }

    #[test]
    fn test_binpow_rejects_non_positive_modulus() {
        assert!(matches!(binpow(2, 3, 0), Err(KitError::InvalidModulus(_))));
        assert!(matches!(binpow(2, 3, -5), Err(KitError::InvalidModulus(_))));
    }

    #[test]
    fn test_mod_inverse() {
        let inv = mod_inverse(3, 11).unwrap().unwrap();
        assert_eq!(inv * 3 % 11, 1);
        assert_eq!(mod_inverse(22, 11).unwrap(), None);
        let inv = mod_inverse(-2, MOD).unwrap().unwrap();
        assert_eq!((inv as i128 * -2i128).rem_euclid(MOD as i128), 1);
    }

    #[test]
    fn test_binpow_big() {
        let m = BigInt::from(1_000_000_007);
        assert_eq!(binpow_big(&BigInt::from(2), 10, &m).unwrap(), BigInt::from(1024));
        assert_eq!(binpow_big(&BigInt::from(-2), 3, &BigInt::from(7)).unwrap(), BigInt::from(6));
        assert!(binpow_big(&BigInt::from(2), 3, &BigInt::from(0)).is_err());
    }
}
