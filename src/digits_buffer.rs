//! Accessors for multiprecision integers as stored in digit vectors.
//!
//! Multiprecision integer magnitudes are stored as slices of [`DigitType`] digits in little-endian
//! order, i.e. the least significant digit comes first. The arithmetic primitives all operate on
//! such slices directly. This helper module provides a couple of utilities for inspecting and
//! normalizing these as well as the [`DigitsBuffer`] scratch builder producing
//! [`LongInt`] values.

extern crate alloc;

use alloc::vec::Vec;
use core::marker;

use super::base::Base;
use super::digit::DigitType;
use super::long_int::LongInt;

/// Determine the number of significant digits in a multiprecision integer magnitude.
///
/// Returns the length of `op0` with all most significant zero digits stripped, which is zero for
/// a value of zero.
pub fn nonzero_len_mp(op0: &[DigitType]) -> usize {
    op0.iter().rposition(|d| *d != 0).map(|i| i + 1).unwrap_or(0)
}

#[test]
fn test_nonzero_len_mp() {
    assert_eq!(nonzero_len_mp(&[]), 0);
    assert_eq!(nonzero_len_mp(&[0]), 0);
    assert_eq!(nonzero_len_mp(&[0, 0, 0]), 0);
    assert_eq!(nonzero_len_mp(&[1]), 1);
    assert_eq!(nonzero_len_mp(&[1, 0, 0]), 1);
    assert_eq!(nonzero_len_mp(&[0, 0, 1]), 3);
}

/// Strip most significant zero digits, but retain at least a single digit.
pub fn normalize_mp(digits: &mut Vec<DigitType>) {
    let len = nonzero_len_mp(digits).max(1);
    digits.resize(len, 0);
}

/// Check whether a digit vector is in normalized form.
///
/// A normalized digit vector is non-empty and has no most significant zero digits, except for
/// the single digit representation of zero.
pub fn is_normalized_mp(digits: &[DigitType]) -> bool {
    match digits.last() {
        None => false,
        Some(&0) => digits.len() == 1,
        Some(_) => true,
    }
}

#[test]
fn test_normalize_mp() {
    let mut d = alloc::vec![0, 0, 0];
    normalize_mp(&mut d);
    assert_eq!(d, [0]);
    assert!(is_normalized_mp(&d));

    let mut d = alloc::vec![];
    normalize_mp(&mut d);
    assert_eq!(d, [0]);

    let mut d = alloc::vec![3, 0, 2, 0, 0];
    assert!(!is_normalized_mp(&d));
    normalize_mp(&mut d);
    assert_eq!(d, [3, 0, 2]);
    assert!(is_normalized_mp(&d));

    // Idempotence.
    normalize_mp(&mut d);
    assert_eq!(d, [3, 0, 2]);
}

/// Exclusively owned scratch digits for building up a [`LongInt`].
///
/// The arithmetic kernels write their results into a buffer sized in advance. Only once
/// [`finish()`](Self::finish) has trimmed the most significant zero digits and canonicalized the
/// sign of zero, the digits become a [`LongInt`].
pub(crate) struct DigitsBuffer<B: Base> {
    digits: Vec<DigitType>,
    negative: bool,
    _phantom: marker::PhantomData<B>,
}

impl<B: Base> DigitsBuffer<B> {
    /// Allocate a zero-filled buffer of `len` digits.
    pub fn new_zeroed(len: usize) -> Self {
        let mut digits = Vec::new();
        digits.resize(len, 0);
        Self::from_vec(digits)
    }

    /// Take over some digits, least significant first.
    pub fn from_vec(digits: Vec<DigitType>) -> Self {
        debug_assert!(digits.iter().all(|d| *d < B::BASE));
        Self {
            digits,
            negative: false,
            _phantom: marker::PhantomData,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [DigitType] {
        &mut self.digits
    }

    pub fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }

    /// Normalize the buffer's contents and turn it into a [`LongInt`].
    pub fn finish(self) -> LongInt<B> {
        let Self {
            mut digits,
            negative,
            ..
        } = self;
        normalize_mp(&mut digits);
        let negative = negative && digits != [0];
        LongInt::from_normalized_parts(digits, negative)
    }
}

#[test]
fn test_digits_buffer_finish() {
    use super::base::Base10;

    let mut buf = DigitsBuffer::<Base10>::new_zeroed(4);
    buf.as_mut_slice()[1] = 2;
    buf.set_negative(true);
    let v = buf.finish();
    assert_eq!(v.digits(), &[0, 2]);
    assert!(v.is_negative());

    // Negative zero collapses to zero.
    let mut buf = DigitsBuffer::<Base10>::new_zeroed(3);
    buf.set_negative(true);
    let v = buf.finish();
    assert_eq!(v.digits(), &[0]);
    assert!(!v.is_negative());

    let buf = DigitsBuffer::<Base10>::new_zeroed(0);
    assert_eq!(buf.finish().digits(), &[0]);
}

/// Append a carry out of a digit vector's most significant digit as further digits.
///
/// The carry is not restricted to be less than `base`.
pub fn push_carry_mp(base: DigitType, digits: &mut Vec<DigitType>, mut carry: DigitType) {
    while carry != 0 {
        digits.push(carry % base);
        carry /= base;
    }
}

#[test]
fn test_push_carry_mp() {
    let mut d = alloc::vec![1];
    push_carry_mp(10, &mut d, 0);
    assert_eq!(d, [1]);
    push_carry_mp(10, &mut d, 7);
    assert_eq!(d, [1, 7]);
    push_carry_mp(10, &mut d, 1234);
    assert_eq!(d, [1, 7, 4, 3, 2, 1]);
}
