//! Implementation of multiprecision integer shift primitives.

use super::digit::{div_dd_d, pow2_log_d, DigitType, DIGIT_BITS};

/// Shift a multiprecision integer towards more significance by whole digits.
///
/// Equivalent to a multiplication by `base^distance`, truncated to the width of `op0`. The
/// vacated least significant digits get cleared.
pub fn lshift_digits_mp(op0: &mut [DigitType], distance: usize) {
    let len = op0.len();
    let distance = distance.min(len);
    op0.copy_within(0..len - distance, distance);
    op0[..distance].fill(0);
}

#[test]
fn test_lshift_digits_mp() {
    let mut op0 = [1, 2, 3, 0, 0];
    lshift_digits_mp(&mut op0, 2);
    assert_eq!(op0, [0, 0, 1, 2, 3]);

    let mut op0 = [1, 2, 3];
    lshift_digits_mp(&mut op0, 1);
    assert_eq!(op0, [0, 1, 2]);

    let mut op0 = [1, 2, 3];
    lshift_digits_mp(&mut op0, 7);
    assert_eq!(op0, [0, 0, 0]);

    let mut op0 = [1, 2, 3];
    lshift_digits_mp(&mut op0, 0);
    assert_eq!(op0, [1, 2, 3]);
}

/// Shift a multiprecision integer towards less significance by whole digits.
///
/// Equivalent to a floor division by `base^distance`. The vacated most significant digits get
/// cleared.
pub fn rshift_digits_mp(op0: &mut [DigitType], distance: usize) {
    let len = op0.len();
    let distance = distance.min(len);
    op0.copy_within(distance..len, 0);
    op0[len - distance..].fill(0);
}

#[test]
fn test_rshift_digits_mp() {
    let mut op0 = [1, 2, 3, 4, 5];
    rshift_digits_mp(&mut op0, 2);
    assert_eq!(op0, [3, 4, 5, 0, 0]);

    let mut op0 = [1, 2, 3];
    rshift_digits_mp(&mut op0, 3);
    assert_eq!(op0, [0, 0, 0]);

    let mut op0 = [1, 2, 3];
    rshift_digits_mp(&mut op0, 0);
    assert_eq!(op0, [1, 2, 3]);
}

/// Shift a multiprecision integer towards less significance by a number of bits.
///
/// Equivalent to a floor division by `2^nbits`. If `base` is a power of two, the digits' bits
/// get moved around directly, otherwise `op0` gets divided by powers of two in place.
pub fn rshift_bits_mp(base: DigitType, op0: &mut [DigitType], nbits: usize) {
    if let Some(digit_bits) = pow2_log_d(base) {
        let digit_bits = digit_bits as usize;
        rshift_digits_mp(op0, nbits / digit_bits);
        let rshift = nbits % digit_bits;
        if rshift == 0 {
            return;
        }

        let digit_mask = base - 1;
        let len = op0.len();
        for i in 0..len {
            let low = op0[i] >> rshift;
            let high = if i + 1 < len {
                (op0[i + 1] << (digit_bits - rshift)) & digit_mask
            } else {
                0
            };
            op0[i] = high | low;
        }
        return;
    }

    // Divide by at most 2^(DIGIT_BITS - 1) at a time, which keeps the remainder within a digit
    // word.
    let mut nbits = nbits;
    while nbits > 0 {
        if op0.iter().all(|d| *d == 0) {
            return;
        }
        let step = nbits.min((DIGIT_BITS - 1) as usize);
        nbits -= step;
        let v: DigitType = 1 << step;
        let mut r = 0;
        let mut j = op0.len();
        while j > 0 {
            j -= 1;
            let (q, rem) = div_dd_d(base, r, op0[j], v);
            op0[j] = q;
            r = rem;
        }
    }
}

#[test]
fn test_rshift_bits_mp() {
    // 1234 >> 3 = 154
    let mut op0 = [4, 3, 2, 1];
    rshift_bits_mp(10, &mut op0, 3);
    assert_eq!(op0, [4, 5, 1, 0]);

    // 10^12 >> 40 = 0, 10^12 >> 39 = 1
    let mut op0 = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
    rshift_bits_mp(10, &mut op0, 40);
    assert_eq!(op0, [0; 13]);
    let mut op0 = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
    rshift_bits_mp(10, &mut op0, 39);
    assert_eq!(op0, [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    // Radix 2^16: 0x0003_8001 >> 1 = 0x0001_c000
    let mut op0 = [0x8001, 0x0003];
    rshift_bits_mp(1 << 16, &mut op0, 1);
    assert_eq!(op0, [0xc000, 0x0001]);

    let mut op0 = [0x8001, 0x0003, 0xffff];
    rshift_bits_mp(1 << 16, &mut op0, 17);
    assert_eq!(op0, [0x8001, 0x7fff, 0]);

    // Radix 2.
    let mut op0 = [1, 0, 1, 1];
    rshift_bits_mp(2, &mut op0, 2);
    assert_eq!(op0, [1, 1, 0, 0]);

    let mut op0 = [1, 2, 3];
    rshift_bits_mp(10, &mut op0, 0);
    assert_eq!(op0, [1, 2, 3]);

    // Shift distances far beyond the operand's width finish once it's zero.
    let mut op0 = [5];
    rshift_bits_mp(10, &mut op0, usize::MAX);
    assert_eq!(op0, [0]);
    let mut op0 = [2, 1, 0, 2];
    rshift_bits_mp(3, &mut op0, usize::MAX);
    assert_eq!(op0, [0, 0, 0, 0]);
    let mut op0 = [0x8001, 0xffff];
    rshift_bits_mp(1 << 16, &mut op0, usize::MAX);
    assert_eq!(op0, [0, 0]);
}

/// Determine whether a multiprecision integer magnitude is odd.
///
/// For an even `base`, that's the least significant digit's parity. For an odd `base`, every
/// power of the radix is odd and the parity is that of the digit sum.
pub fn is_odd_mp(base: DigitType, op0: &[DigitType]) -> bool {
    if base % 2 == 0 {
        op0.first().map(|d| d & 1 != 0).unwrap_or(false)
    } else {
        op0.iter().fold(0, |acc, d| acc ^ (d & 1)) != 0
    }
}

#[test]
fn test_is_odd_mp() {
    assert!(!is_odd_mp(10, &[]));
    assert!(!is_odd_mp(10, &[4, 3]));
    assert!(is_odd_mp(10, &[3, 4]));
    // 2 * 3 + 1 = 7
    assert!(is_odd_mp(3, &[1, 2]));
    // 1 * 3 + 1 = 4
    assert!(!is_odd_mp(3, &[1, 1]));
    assert!(!is_odd_mp(3, &[0, 0, 2]));
}
