//! Definitions and arithmetic primitives related to [DigitType], the basic unit of the
//! multiprecision integer arithmetic.
//!
//! Unlike machine limbs, digits are stored in an arbitrary radix `base`, with `2 <= base <=
//! 2^31`. All of the helpers here take the radix as an explicit argument and do their
//! arithmetic in [`DoubleDigitType`], which is wide enough to hold any of the intermediate
//! values for radices within the supported range.

use subtle::{self, ConditionallySelectable as _};

/// The basic unit used by the multiprecision integer arithmetic implementation.
///
/// A digit's value is always less than the radix it is stored in.
pub type DigitType = u32;

/// Double precision type wide enough to hold the product of two [`DigitType`] words plus two
/// more.
pub type DoubleDigitType = u64;

/// The bit width of a [`DigitType`].
pub const DIGIT_BITS: u32 = DigitType::BITS;

/// The largest supported radix.
pub const MAX_BASE: DigitType = 1 << (DIGIT_BITS - 1);

/// Add two digits and a carry.
///
/// Returns a pair of carry and the sum modulo `base`, in this order.
///
/// # Arguments:
///
/// * `base` - the radix the digits are stored in.
/// * `v0` - first operand
/// * `v1` - second operand
/// * `carry` - the incoming carry, either zero or one.
///
pub fn add_d_d_c(
    base: DigitType,
    v0: DigitType,
    v1: DigitType,
    carry: DigitType,
) -> (DigitType, DigitType) {
    debug_assert!(v0 < base && v1 < base);
    debug_assert!(carry <= 1);
    let s = v0 as DoubleDigitType + v1 as DoubleDigitType + carry as DoubleDigitType;
    let base = base as DoubleDigitType;
    ((s / base) as DigitType, (s % base) as DigitType)
}

#[test]
fn test_add_d_d_c() {
    assert_eq!(add_d_d_c(10, 0, 0, 0), (0, 0));
    assert_eq!(add_d_d_c(10, 9, 0, 1), (1, 0));
    assert_eq!(add_d_d_c(10, 9, 9, 1), (1, 9));
    assert_eq!(add_d_d_c(MAX_BASE, MAX_BASE - 1, MAX_BASE - 1, 1), (1, MAX_BASE - 1));
}

/// Subtract a digit and a borrow from another digit.
///
/// Returns a pair of borrow and the difference modulo `base`, in this order.
pub fn sub_d_d_b(
    base: DigitType,
    v0: DigitType,
    v1: DigitType,
    borrow: DigitType,
) -> (DigitType, DigitType) {
    debug_assert!(v0 < base && v1 < base);
    debug_assert!(borrow <= 1);
    let subtrahend = v1 as DoubleDigitType + borrow as DoubleDigitType;
    let v0 = v0 as DoubleDigitType;
    if v0 >= subtrahend {
        (0, (v0 - subtrahend) as DigitType)
    } else {
        (1, (v0 + base as DoubleDigitType - subtrahend) as DigitType)
    }
}

#[test]
fn test_sub_d_d_b() {
    assert_eq!(sub_d_d_b(10, 0, 0, 0), (0, 0));
    assert_eq!(sub_d_d_b(10, 5, 3, 1), (0, 1));
    assert_eq!(sub_d_d_b(10, 0, 0, 1), (1, 9));
    assert_eq!(sub_d_d_b(10, 0, 9, 1), (1, 0));
    assert_eq!(sub_d_d_b(MAX_BASE, 0, MAX_BASE - 1, 0), (1, 1));
}

/// Compute `acc + v0 * v1 + carry` split into a carry and a digit modulo `base`.
///
/// The multiplier `v1` and the `carry` may exceed the radix, as long as both are representable
/// as a [`DigitType`]. The returned carry is then bounded by `v1 + 1`.
pub fn mul_add_d_d_d_c(
    base: DigitType,
    acc: DigitType,
    v0: DigitType,
    v1: DigitType,
    carry: DigitType,
) -> (DigitType, DigitType) {
    debug_assert!(acc < base && v0 < base);
    let s = acc as DoubleDigitType
        + v0 as DoubleDigitType * v1 as DoubleDigitType
        + carry as DoubleDigitType;
    let base = base as DoubleDigitType;
    ((s / base) as DigitType, (s % base) as DigitType)
}

#[test]
fn test_mul_add_d_d_d_c() {
    assert_eq!(mul_add_d_d_d_c(10, 0, 9, 9, 0), (8, 1));
    assert_eq!(mul_add_d_d_d_c(10, 9, 9, 9, 9), (9, 9));
    assert_eq!(mul_add_d_d_d_c(10, 3, 7, 1000, 0), (700, 3));
    assert_eq!(
        mul_add_d_d_d_c(MAX_BASE, MAX_BASE - 1, MAX_BASE - 1, MAX_BASE - 1, MAX_BASE - 1),
        (MAX_BASE - 1, MAX_BASE - 1)
    );
}

/// Divide a double digit `high * base + low` by a single divisor.
///
/// Returns the pair of quotient and remainder, in this order. The quotient fits a
/// [`DigitType`] and is less than `base` if `high < v`.
pub fn div_dd_d(
    base: DigitType,
    high: DigitType,
    low: DigitType,
    v: DigitType,
) -> (DigitType, DigitType) {
    debug_assert!(v != 0);
    debug_assert!(high < v);
    let u = high as DoubleDigitType * base as DoubleDigitType + low as DoubleDigitType;
    let v = v as DoubleDigitType;
    ((u / v) as DigitType, (u % v) as DigitType)
}

#[test]
fn test_div_dd_d() {
    assert_eq!(div_dd_d(10, 0, 7, 7), (1, 0));
    assert_eq!(div_dd_d(10, 6, 9, 7), (9, 6));
    assert_eq!(
        div_dd_d(MAX_BASE, MAX_BASE - 2, MAX_BASE - 1, MAX_BASE - 1),
        (MAX_BASE - 1, MAX_BASE - 2)
    );
}

/// Convert a zero/one digit, e.g. a borrow, into a [`subtle::Choice`].
pub fn d_to_subtle_choice(v: DigitType) -> subtle::Choice {
    debug_assert!(v <= 1);
    subtle::Choice::from(v as u8)
}

/// Select `v1` if `cond` is set, `v0` otherwise.
pub fn cond_select_d(v0: DigitType, v1: DigitType, cond: subtle::Choice) -> DigitType {
    DigitType::conditional_select(&v0, &v1, cond)
}

/// If `base` is a power of two, return its binary logarithm.
pub const fn pow2_log_d(base: DigitType) -> Option<u32> {
    if base.is_power_of_two() {
        Some(base.trailing_zeros())
    } else {
        None
    }
}

#[test]
fn test_pow2_log_d() {
    assert_eq!(pow2_log_d(2), Some(1));
    assert_eq!(pow2_log_d(1 << 16), Some(16));
    assert_eq!(pow2_log_d(MAX_BASE), Some(DIGIT_BITS - 1));
    assert_eq!(pow2_log_d(10), None);
}
