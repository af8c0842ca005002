//! Implementation of multiprecision integer comparison primitives.

use core::cmp::Ordering;

use super::digit::DigitType;
use super::digits_buffer::nonzero_len_mp;

/// Compare two multiprecision integer magnitudes.
///
/// The operands' lengths needn't match, excess most significant zero digits are ignored.
/// Significant lengths are compared first and only if these are equal, the digits get compared
/// from the most significant one downwards.
///
/// # Arguments
///
/// * `op0` - The first operand.
/// * `op1` - The second operand.
///
pub fn cmp_mp_mp(op0: &[DigitType], op1: &[DigitType]) -> Ordering {
    let op0_len = nonzero_len_mp(op0);
    let op1_len = nonzero_len_mp(op1);
    if op0_len != op1_len {
        return op0_len.cmp(&op1_len);
    }

    op0[..op0_len]
        .iter()
        .rev()
        .zip(op1[..op1_len].iter().rev())
        .map(|(op0_val, op1_val)| op0_val.cmp(op1_val))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[test]
fn test_cmp_mp_mp() {
    assert_eq!(cmp_mp_mp(&[], &[]), Ordering::Equal);
    assert_eq!(cmp_mp_mp(&[0], &[]), Ordering::Equal);
    assert_eq!(cmp_mp_mp(&[0, 0], &[0]), Ordering::Equal);
    assert_eq!(cmp_mp_mp(&[1], &[1, 0, 0]), Ordering::Equal);
    assert_eq!(cmp_mp_mp(&[1], &[2]), Ordering::Less);
    assert_eq!(cmp_mp_mp(&[2], &[1]), Ordering::Greater);
    assert_eq!(cmp_mp_mp(&[9, 9], &[0, 0, 1]), Ordering::Less);
    assert_eq!(cmp_mp_mp(&[0, 0, 1], &[9, 9, 0]), Ordering::Greater);
    assert_eq!(cmp_mp_mp(&[1, 2, 3], &[2, 2, 3]), Ordering::Less);
    assert_eq!(cmp_mp_mp(&[1, 3, 3], &[2, 2, 3]), Ordering::Greater);
}

/// Check whether a multiprecision integer magnitude equals zero.
pub fn is_zero_mp(op0: &[DigitType]) -> bool {
    op0.iter().all(|d| *d == 0)
}

/// Check whether a multiprecision integer magnitude equals one.
pub fn is_one_mp(op0: &[DigitType]) -> bool {
    match op0.split_first() {
        Some((&1, tail)) => is_zero_mp(tail),
        _ => false,
    }
}

#[test]
fn test_is_zero_one_mp() {
    assert!(is_zero_mp(&[]));
    assert!(is_zero_mp(&[0, 0]));
    assert!(!is_zero_mp(&[0, 1]));
    assert!(is_one_mp(&[1]));
    assert!(is_one_mp(&[1, 0, 0]));
    assert!(!is_one_mp(&[1, 1]));
    assert!(!is_one_mp(&[]));
    assert!(!is_one_mp(&[0]));
}
