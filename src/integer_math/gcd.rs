// src/integer_math/gcd.rs

use num::traits::CheckedRem;
use num::{BigInt, Integer, One, PrimInt, Signed, Zero};

/// Euclid's algorithm. Returns `a` once `b` reaches zero, so `gcd(0, 0) == 0`.
///
/// Signed inputs follow truncated remainder semantics: the result may be
/// negative when the operands are. Use [`Gcd::find_gcd`] for a normalised value.
/// `T::MIN % -1` is taken as 0, so `gcd(i64::MIN, -1) == -1`.
pub fn gcd<T: PrimInt + CheckedRem>(a: T, b: T) -> T {
    if b.is_zero() {
        a
    } else {
        gcd(b, a.checked_rem(&b).unwrap_or_else(T::zero))
    }
}

/// `a / gcd(a, b) * b`. Dividing first keeps the intermediate no larger than the result.
///
/// `lcm(0, 0)` is `0`.
///
/// # Panics
///
/// On overflow in debug builds, like plain arithmetic. Use [`checked_lcm`] when the
/// result may not fit in `T`.
pub fn lcm<T: PrimInt + CheckedRem>(a: T, b: T) -> T {
    let g = gcd(a, b);
    if g.is_zero() {
        return T::zero();
    }
    a / g * b
}

/// Like [`lcm`] but returns `None` when the result does not fit in `T`.
pub fn checked_lcm<T: PrimInt + CheckedRem>(a: T, b: T) -> Option<T> {
    let g = gcd(a, b);
    if g.is_zero() {
        return Some(T::zero());
    }
    a.checked_div(&g)?.checked_mul(&b)
}

pub struct Gcd;

impl Gcd {
    /// GCD of the absolute values of every element. An empty slice yields 0.
    ///
    /// Unsigned so that `i64::MIN` has a representable magnitude.
    pub fn find_gcd(numbers: &[i64]) -> u64 {
        numbers
            .iter()
            .fold(0u64, |acc, &x| gcd(acc, x.unsigned_abs()))
    }

    /// LCM of the absolute values of every element, `None` if it exceeds `u64`.
    /// An empty slice yields 1.
    pub fn find_lcm(numbers: &[i64]) -> Option<u64> {
        numbers
            .iter()
            .try_fold(1u64, |acc, &x| checked_lcm(acc, x.unsigned_abs()))
    }

    pub fn are_coprime(numbers: &[i64]) -> bool {
        Self::find_gcd(numbers) == 1
    }

    pub fn find_gcd_big(numbers: &[BigInt]) -> BigInt {
        numbers
            .iter()
            .fold(BigInt::zero(), |acc, x| Self::find_gcd_pair_big(&acc, x))
    }

    pub fn find_lcm_big(numbers: &[BigInt]) -> BigInt {
        numbers
            .iter()
            .fold(BigInt::one(), |acc, x| Self::find_lcm_pair_big(&acc, x))
    }

    pub fn find_gcd_pair_big(left: &BigInt, right: &BigInt) -> BigInt {
        left.gcd(right)
    }

    pub fn find_lcm_pair_big(left: &BigInt, right: &BigInt) -> BigInt {
        let abs_left = left.abs();
        let abs_right = right.abs();
        let g = Self::find_gcd_pair_big(&abs_left, &abs_right);
        if g.is_zero() {
            return BigInt::zero();
        }
        &abs_left / g * &abs_right
    }
}
