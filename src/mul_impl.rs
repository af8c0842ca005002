//! Implementation of multiprecision integer multiplication primitives.

extern crate alloc;

use super::digit::{mul_add_d_d_d_c, DigitType};

/// Multiply two multiprecision integers by the schoolbook method.
///
/// The product of every digit pair `op0[i] * op1[j]` gets accumulated into `result[i + j]` with
/// carry propagation. The number of digit multiplications is `op0.len() * op1.len()`.
///
/// # Arguments
///
/// * `base` - The radix of all of the operands' digits.
/// * `result` - Receives the product. Its length must equal `op0.len() + op1.len()`. Any previous
///   contents get overwritten.
/// * `op0` - The first input factor.
/// * `op1` - The second input factor.
///
pub fn mul_mp_mp(base: DigitType, result: &mut [DigitType], op0: &[DigitType], op1: &[DigitType]) {
    debug_assert_eq!(result.len(), op0.len() + op1.len());
    result.fill(0);

    let op1_len = op1.len();
    for (i, op0_val) in op0.iter().enumerate() {
        if *op0_val == 0 {
            continue;
        }

        let mut carry = 0;
        for (j, op1_val) in op1.iter().enumerate() {
            let result_val = &mut result[i + j];
            (carry, *result_val) = mul_add_d_d_d_c(base, *result_val, *op0_val, *op1_val, carry);
        }
        // No previous row reached this far up.
        debug_assert_eq!(result[i + op1_len], 0);
        result[i + op1_len] = carry;
    }
}

#[cfg(test)]
fn test_mul_mp_mp_common(base: DigitType) {
    use super::add_impl::sum_shifted_mp_mp;
    use super::cmp_impl::cmp_mp_mp;
    use core::cmp::Ordering;

    let m = base - 1;

    // (base^2 - 1)^2 = base^4 - 2 * base^2 + 1
    let mut result = [m; 4];
    mul_mp_mp(base, &mut result, &[m, m], &[m, m]);
    assert_eq!(result, [1, 0, m - 1, m]);

    let mut result = [m; 3];
    mul_mp_mp(base, &mut result, &[0, 0], &[m]);
    assert_eq!(result, [0, 0, 0]);

    let mut result = [m; 2];
    mul_mp_mp(base, &mut result, &[], &[m, 1]);
    assert_eq!(result, [0, 0]);

    // Commutativity and distributivity over addition for a couple of digit patterns.
    let patterns: [&[DigitType]; 4] = [&[1], &[m, 0, 1], &[m, m, m], &[m / 2, 1, 0, m]];
    for a in patterns {
        for b in patterns {
            for c in patterns {
                let mut ab = alloc::vec![0; a.len() + b.len()];
                mul_mp_mp(base, &mut ab, a, b);
                let mut ba = alloc::vec![0; a.len() + b.len()];
                mul_mp_mp(base, &mut ba, b, a);
                assert_eq!(ab, ba);

                let mut b_plus_c = alloc::vec![0; b.len().max(c.len()) + 1];
                assert_eq!(sum_shifted_mp_mp(base, &mut b_plus_c, b, 0, c, 0), 0);
                let mut lhs = alloc::vec![0; a.len() + b_plus_c.len()];
                mul_mp_mp(base, &mut lhs, a, &b_plus_c);

                let mut ac = alloc::vec![0; a.len() + c.len()];
                mul_mp_mp(base, &mut ac, a, c);
                let mut rhs = alloc::vec![0; ab.len().max(ac.len()) + 1];
                assert_eq!(sum_shifted_mp_mp(base, &mut rhs, &ab, 0, &ac, 0), 0);
                assert_eq!(cmp_mp_mp(&lhs, &rhs), Ordering::Equal);
            }
        }
    }
}

#[test]
fn test_mul_mp_mp() {
    // 999 * 999 = 998001
    let mut result = [0; 6];
    mul_mp_mp(10, &mut result, &[9, 9, 9], &[9, 9, 9]);
    assert_eq!(result, [1, 0, 0, 8, 9, 9]);

    test_mul_mp_mp_common(2);
    test_mul_mp_mp_common(10);
    test_mul_mp_mp_common(1 << 16);
    test_mul_mp_mp_common(1 << 31);
}

/// Multiply a multiprecision integer by a single word in place.
///
/// The multiplier is not restricted to be less than `base`. Returns the carry out of the most
/// significant digit, which is at most `op1`.
pub fn mul_mp_l(base: DigitType, op0: &mut [DigitType], op1: DigitType) -> DigitType {
    let mut carry = 0;
    for op0_val in op0.iter_mut() {
        (carry, *op0_val) = mul_add_d_d_d_c(base, 0, *op0_val, op1, carry);
    }
    carry
}

#[test]
fn test_mul_mp_l() {
    let mut op0 = [9, 9, 9];
    assert_eq!(mul_mp_l(10, &mut op0, 9), 8);
    assert_eq!(op0, [1, 9, 9]);

    let mut op0 = [1, 2, 3, 0, 0, 0];
    assert_eq!(mul_mp_l(10, &mut op0, 1000), 0);
    assert_eq!(op0, [0, 0, 0, 1, 2, 3]);

    let mut op0 = [1, 2, 3, 0, 0];
    assert_eq!(mul_mp_l(10, &mut op0, 1000), 3);
    assert_eq!(op0, [0, 0, 0, 1, 2]);

    let mut op0 = [5, 5];
    assert_eq!(mul_mp_l(10, &mut op0, 0), 0);
    assert_eq!(op0, [0, 0]);
}
