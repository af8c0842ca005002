//! Implementation of multiprecision integer addition related primitives.

use super::digit::{add_d_d_c, mul_add_d_d_d_c, sub_d_d_b, DigitType};

/// Add two multiprecision integers, each shifted by a number of digit positions.
///
/// Every digit position of `result` receives the sum of the correspondingly shifted digits of
/// `op0` and `op1`, if any, plus the carry from the position below. Digits of `result` are all
/// overwritten.
///
/// Returns the carry out of `result`'s most significant digit. For callers sizing `result` to
/// at least one more than the larger shifted extent of the operands, that is always zero.
///
/// # Arguments:
///
/// * `base` - The radix of all of the operands' digits.
/// * `result` - Receives the sum.
/// * `op0` - The first addend.
/// * `op0_shift` - Number of digit positions `op0` is shifted towards more significance by.
/// * `op1` - The second addend.
/// * `op1_shift` - Number of digit positions `op1` is shifted towards more significance by.
pub fn sum_shifted_mp_mp(
    base: DigitType,
    result: &mut [DigitType],
    op0: &[DigitType],
    op0_shift: usize,
    op1: &[DigitType],
    op1_shift: usize,
) -> DigitType {
    fn load_shifted(op: &[DigitType], shift: usize, i: usize) -> DigitType {
        if i >= shift && i - shift < op.len() {
            op[i - shift]
        } else {
            0
        }
    }

    let mut carry = 0;
    for (i, r) in result.iter_mut().enumerate() {
        let op0_val = load_shifted(op0, op0_shift, i);
        let op1_val = load_shifted(op1, op1_shift, i);
        (carry, *r) = add_d_d_c(base, op0_val, op1_val, carry);
    }
    carry
}

#[test]
fn test_sum_shifted_mp_mp() {
    // 999 + 1 = 1000
    let mut result = [7; 4];
    let carry = sum_shifted_mp_mp(10, &mut result, &[9, 9, 9], 0, &[1], 0);
    assert_eq!(carry, 0);
    assert_eq!(result, [0, 0, 0, 1]);

    // 12 * 10 + 34 * 100 = 3520
    let mut result = [0; 4];
    let carry = sum_shifted_mp_mp(10, &mut result, &[2, 1], 1, &[4, 3], 2);
    assert_eq!(carry, 0);
    assert_eq!(result, [0, 2, 5, 3]);

    // Carry out of the result buffer.
    let mut result = [0; 2];
    let carry = sum_shifted_mp_mp(10, &mut result, &[9, 9], 0, &[1], 0);
    assert_eq!(carry, 1);
    assert_eq!(result, [0, 0]);

    let mut result = [5; 3];
    let carry = sum_shifted_mp_mp(10, &mut result, &[], 0, &[], 0);
    assert_eq!(carry, 0);
    assert_eq!(result, [0, 0, 0]);
}

/// Add two multiprecision integers.
///
/// The first operand's contents will be replaced by the resulting sum and the carry, if any,
/// returned from the function.
///
/// # Arguments:
///
/// * `base` - The radix of both operands' digits.
/// * `op0` - The first input addend. It will be overwritten by the resulting sum. Its length must
///   be greater or equal than the length of the second addend.
/// * `op1` - The second input addend.
pub fn add_mp_mp(base: DigitType, op0: &mut [DigitType], op1: &[DigitType]) -> DigitType {
    debug_assert!(op1.len() <= op0.len());

    let mut carry = 0;
    for (i, op0_val) in op0.iter_mut().enumerate() {
        let op1_val = op1.get(i).copied().unwrap_or(0);
        if op1_val == 0 && carry == 0 && i >= op1.len() {
            break;
        }
        (carry, *op0_val) = add_d_d_c(base, *op0_val, op1_val, carry);
    }
    carry
}

#[test]
fn test_add_mp_mp() {
    let mut op0 = [9, 9, 0];
    assert_eq!(add_mp_mp(10, &mut op0, &[1]), 0);
    assert_eq!(op0, [0, 0, 1]);

    let mut op0 = [9, 9];
    assert_eq!(add_mp_mp(10, &mut op0, &[9, 9]), 1);
    assert_eq!(op0, [8, 9]);

    let mut op0 = [1, 2, 3];
    assert_eq!(add_mp_mp(10, &mut op0, &[]), 0);
    assert_eq!(op0, [1, 2, 3]);
}

/// Add a single word to a multiprecision integer.
///
/// The word `op1` is not restricted to be less than `base`. Returns the carry out of `op0`'s
/// most significant digit, which may in turn exceed `base` if `op0` is short.
pub fn add_mp_l(base: DigitType, op0: &mut [DigitType], op1: DigitType) -> DigitType {
    // Propagate the word upwards as a carry.
    let mut carry = op1;
    for op0_val in op0.iter_mut() {
        if carry == 0 {
            break;
        }
        (carry, *op0_val) = mul_add_d_d_d_c(base, *op0_val, 0, 0, carry);
    }
    carry
}

#[test]
fn test_add_mp_l() {
    let mut op0 = [9, 9, 0];
    assert_eq!(add_mp_l(10, &mut op0, 1), 0);
    assert_eq!(op0, [0, 0, 1]);

    let mut op0 = [5, 0, 0];
    assert_eq!(add_mp_l(10, &mut op0, 1234), 1);
    assert_eq!(op0, [9, 3, 2]);

    let mut op0: [DigitType; 0] = [];
    assert_eq!(add_mp_l(10, &mut op0, 7), 7);
}

/// Subtract two multiprecision integers.
///
/// The first operand's contents will be replaced by the resulting difference and the borrow, if
/// any, returned from the function. A returned borrow means that `op1 > op0` and the remaining
/// contents of `op0` equal `base^op0.len() + op0 - op1`.
///
/// # Arguments:
///
/// * `base` - The radix of both operands' digits.
/// * `op0` - The minuend. It will be overwritten by the resulting difference. Its length must be
///   greater or equal than the length of the subtrahend.
/// * `op1` - The subtrahend.
pub fn sub_mp_mp(base: DigitType, op0: &mut [DigitType], op1: &[DigitType]) -> DigitType {
    debug_assert!(op1.len() <= op0.len());

    let mut borrow = 0;
    for (i, op0_val) in op0.iter_mut().enumerate() {
        let op1_val = op1.get(i).copied().unwrap_or(0);
        if op1_val == 0 && borrow == 0 && i >= op1.len() {
            break;
        }
        (borrow, *op0_val) = sub_d_d_b(base, *op0_val, op1_val, borrow);
    }
    borrow
}

#[test]
fn test_sub_mp_mp() {
    let mut op0 = [0, 0, 1];
    assert_eq!(sub_mp_mp(10, &mut op0, &[1]), 0);
    assert_eq!(op0, [9, 9, 0]);

    let mut op0 = [4, 3, 2, 1];
    assert_eq!(sub_mp_mp(10, &mut op0, &[4, 3, 2, 1]), 0);
    assert_eq!(op0, [0, 0, 0, 0]);

    // 12 - 34 wraps to 100 - 22.
    let mut op0 = [2, 1];
    assert_eq!(sub_mp_mp(10, &mut op0, &[4, 3]), 1);
    assert_eq!(op0, [8, 7]);

    let base = 1 << 31;
    let mut op0 = [0, 0, 1];
    assert_eq!(sub_mp_mp(base, &mut op0, &[1]), 0);
    assert_eq!(op0, [base - 1, base - 1, 0]);
}
