//! Conversion between decimal strings and digit vectors.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use super::add_impl::add_mp_l;
use super::base::Base;
use super::digit::DigitType;
use super::digits_buffer::{normalize_mp, push_carry_mp};
use super::div_impl::div_mp_l;
use super::mul_impl::mul_mp_l;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DigitsFromDecStrError {
    Empty,
    InvalidDecChar,
}

impl fmt::Display for DigitsFromDecStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no decimal digits"),
            Self::InvalidDecChar => f.write_str("invalid decimal character"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitsFromDecStrError {}

/// Decimal digits handled in a single word step, `10^DEC_CHUNK_LEN` fits a digit word.
const DEC_CHUNK_LEN: usize = 9;
const DEC_CHUNK_POW: DigitType = 1_000_000_000;

/// Parse a decimal string into digits in the radix `B::BASE`.
///
/// An optional leading `+` or `-` may be followed by at least one ASCII decimal digit, nothing
/// else is accepted. Returns the normalized digits, least significant first, and whether a
/// minus sign has been found. A negative zero is reported as is.
pub fn digits_from_decstr<B: Base>(
    decstr: &str,
) -> Result<(Vec<DigitType>, bool), DigitsFromDecStrError> {
    let decstr = decstr.as_bytes();
    let (negative, decstr) = match decstr.split_first() {
        Some((b'-', tail)) => (true, tail),
        Some((b'+', tail)) => (false, tail),
        _ => (false, decstr),
    };
    if decstr.is_empty() {
        return Err(DigitsFromDecStrError::Empty);
    }

    let mut digits: Vec<DigitType> = alloc::vec![0];
    // The first chunk takes up the odd remainder, all others are full.
    let first_len = match decstr.len() % DEC_CHUNK_LEN {
        0 => DEC_CHUNK_LEN,
        r => r,
    };
    let mut chunk_len = first_len;
    let mut i = 0;
    while i < decstr.len() {
        let mut chunk: DigitType = 0;
        let mut chunk_pow: DigitType = 1;
        for &c in &decstr[i..i + chunk_len] {
            let d = match c {
                b'0'..=b'9' => c - b'0',
                _ => return Err(DigitsFromDecStrError::InvalidDecChar),
            };
            chunk = chunk * 10 + d as DigitType;
            chunk_pow *= 10;
        }

        let carry = mul_mp_l(B::BASE, &mut digits, chunk_pow);
        push_carry_mp(B::BASE, &mut digits, carry);
        let carry = add_mp_l(B::BASE, &mut digits, chunk);
        push_carry_mp(B::BASE, &mut digits, carry);

        i += chunk_len;
        chunk_len = DEC_CHUNK_LEN;
    }
    normalize_mp(&mut digits);
    Ok((digits, negative))
}

#[test]
fn test_digits_from_decstr() {
    use super::base::{Base10, Base100, Base2, Base2Pow16};

    assert_eq!(
        digits_from_decstr::<Base10>("-0001234").unwrap(),
        (tst_mk_digits![1, 2, 3, 4], true)
    );
    assert_eq!(
        digits_from_decstr::<Base100>("+1234").unwrap(),
        (tst_mk_digits![12, 34], false)
    );
    assert_eq!(
        digits_from_decstr::<Base100>("000").unwrap(),
        (alloc::vec![0], false)
    );
    assert_eq!(
        digits_from_decstr::<Base2>("13").unwrap(),
        (tst_mk_digits![1, 1, 0, 1], false)
    );
    // 2^64 = 18446744073709551616
    assert_eq!(
        digits_from_decstr::<Base2Pow16>("18446744073709551616").unwrap(),
        (alloc::vec![0, 0, 0, 0, 1], false)
    );
    // Exactly two full chunks.
    assert_eq!(
        digits_from_decstr::<Base2Pow16>("000000001000000000").unwrap(),
        (alloc::vec![0xca00, 0x3b9a], false)
    );

    assert_eq!(
        digits_from_decstr::<Base10>(""),
        Err(DigitsFromDecStrError::Empty)
    );
    assert_eq!(
        digits_from_decstr::<Base10>("-"),
        Err(DigitsFromDecStrError::Empty)
    );
    assert_eq!(
        digits_from_decstr::<Base10>("12a"),
        Err(DigitsFromDecStrError::InvalidDecChar)
    );
    assert_eq!(
        digits_from_decstr::<Base10>("+-1"),
        Err(DigitsFromDecStrError::InvalidDecChar)
    );
    assert_eq!(
        digits_from_decstr::<Base10>(" 1"),
        Err(DigitsFromDecStrError::InvalidDecChar)
    );
}

/// Format digits in the radix `base` as a decimal string.
///
/// The digits are least significant first. A minus sign gets prepended for a `negative`,
/// nonzero value.
pub fn digits_to_decstr(base: DigitType, digits: &[DigitType], negative: bool) -> String {
    let mut chunks: Vec<DigitType> = Vec::new();
    if base == 10 {
        chunks.extend(digits.iter().copied());
    } else {
        // Peel off nine decimal digits at a time.
        let mut u = digits.to_vec();
        let mut q = alloc::vec![0; u.len()];
        loop {
            let r = match div_mp_l(base, &mut q, &u, DEC_CHUNK_POW) {
                Ok(r) => r,
                // Nonzero divisor, and q is as long as u.
                Err(_) => unreachable!(),
            };
            chunks.push(r);
            core::mem::swap(&mut u, &mut q);
            if u.iter().all(|d| *d == 0) {
                break;
            }
        }
    }
    let chunk_width = if base == 10 { 1 } else { DEC_CHUNK_LEN };

    let mut s = String::new();
    let mut chunks = chunks.iter().rev().skip_while(|c| **c == 0).peekable();
    if chunks.peek().is_none() {
        s.push('0');
        return s;
    }
    if negative {
        s.push('-');
    }
    if let Some(c) = chunks.next() {
        let _ = write!(s, "{}", c);
    }
    for c in chunks {
        let _ = write!(s, "{:0width$}", c, width = chunk_width);
    }
    s
}

#[test]
fn test_digits_to_decstr() {
    assert_eq!(digits_to_decstr(10, &[4, 3, 2, 1], false), "1234");
    assert_eq!(digits_to_decstr(10, &[4, 3, 2, 1, 0], true), "-1234");
    assert_eq!(digits_to_decstr(10, &[0], true), "0");
    assert_eq!(digits_to_decstr(100, &[], false), "0");
    assert_eq!(digits_to_decstr(100, &[34, 12], false), "1234");
    assert_eq!(digits_to_decstr(2, &[1, 0, 1, 1], false), "13");
    assert_eq!(digits_to_decstr(1 << 16, &[0, 0, 0, 0, 1], true), "-18446744073709551616");
    assert_eq!(digits_to_decstr(1_000_000_000, &[7, 0, 1], false), "1000000000000000007");
}

#[test]
fn test_decstr_roundtrip_base3() {
    crate::define_base!(Base3, 3);

    for s in ["1", "-2", "3", "999999999", "1000000000", "-123456789012345678901234567890"] {
        let (digits, negative) = digits_from_decstr::<Base3>(s).unwrap();
        assert_eq!(digits_to_decstr(3, &digits, negative), s);
    }
}
