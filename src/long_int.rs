//! Signed multiprecision integers in a configurable radix.
//!
//! A [`LongInt`] stores its magnitude as a vector of digits in little-endian order together with
//! a sign flag. The radix is fixed at the type level through a [`Base`] marker. All operations
//! produce normalized values: there are no most significant zero digits except for the single
//! digit of zero, and zero is never negative. Hence the derived equality and hashing are exactly
//! value equality.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::{cmp, fmt, marker, ops, str};

use super::add_impl::{add_mp_l, sub_mp_mp, sum_shifted_mp_mp};
use super::base::Base;
use super::cmp_impl::{cmp_mp_mp, is_one_mp, is_zero_mp};
use super::decstr::{digits_from_decstr, digits_to_decstr, DigitsFromDecStrError};
use super::digit::DigitType;
use super::digits_buffer::{is_normalized_mp, push_carry_mp, DigitsBuffer};
use super::div_impl::{div_mp_l, div_mp_mp, DivMpError};
use super::mul_impl::{mul_mp_l, mul_mp_mp};
use super::shift_impl::{is_odd_mp, rshift_bits_mp};

/// Coarse classification of [`LongIntError`]s.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LongIntErrorKind {
    /// A division or remainder by zero has been attempted.
    DivisionByZero,
    /// An argument is outside of the mathematical domain of an operation.
    Domain,
    /// An argument is malformed.
    InvalidArgument,
}

/// Error returned by fallible [`LongInt`] operations.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LongIntError {
    DivisionByZero,
    NonPositiveSqrtArgument,
    NegativeExponent,
    NonPositiveModulus,
    NegativeToUnsigned,
    OutOfRange,
    InvalidBase { expected: DigitType, found: DigitType },
    InvalidDigit { index: usize, digit: DigitType },
    InvalidDecStr(DigitsFromDecStrError),
}

impl LongIntError {
    pub fn kind(&self) -> LongIntErrorKind {
        match self {
            Self::DivisionByZero => LongIntErrorKind::DivisionByZero,
            Self::NonPositiveSqrtArgument
            | Self::NegativeExponent
            | Self::NonPositiveModulus
            | Self::NegativeToUnsigned
            | Self::OutOfRange => LongIntErrorKind::Domain,
            Self::InvalidBase { .. } | Self::InvalidDigit { .. } | Self::InvalidDecStr(_) => {
                LongIntErrorKind::InvalidArgument
            }
        }
    }
}

impl fmt::Display for LongIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::NonPositiveSqrtArgument => f.write_str("square root argument is not positive"),
            Self::NegativeExponent => f.write_str("negative exponent"),
            Self::NonPositiveModulus => f.write_str("modulus is not positive"),
            Self::NegativeToUnsigned => f.write_str("negative value for unsigned type"),
            Self::OutOfRange => f.write_str("value out of range"),
            Self::InvalidBase { expected, found } => {
                write!(f, "radix mismatch: expected {}, found {}", expected, found)
            }
            Self::InvalidDigit { index, digit } => {
                write!(f, "digit {} at index {} out of range", digit, index)
            }
            Self::InvalidDecStr(e) => write!(f, "invalid decimal string: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LongIntError {}

/// Convert a division kernel error.
///
/// # Panics
///
/// [`DivMpError::InsufficientQuotientSpace`] reports an undersized quotient buffer, which is a
/// bug in the caller and has no [`LongIntError`] counterpart. [`LongInt`] always sizes its
/// quotient buffers from the operands.
impl From<DivMpError> for LongIntError {
    fn from(e: DivMpError) -> Self {
        match e {
            DivMpError::DivisionByZero => Self::DivisionByZero,
            DivMpError::InsufficientQuotientSpace => panic!("insufficient quotient space"),
        }
    }
}

impl From<DigitsFromDecStrError> for LongIntError {
    fn from(e: DigitsFromDecStrError) -> Self {
        Self::InvalidDecStr(e)
    }
}

/// Signed multiprecision integer with digits in the radix `B::BASE`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LongInt<B: Base> {
    digits: Vec<DigitType>,
    negative: bool,
    _phantom: marker::PhantomData<B>,
}

impl<B: Base> LongInt<B> {
    /// The radix of the digits.
    pub const BASE: DigitType = B::BASE;

    pub(crate) fn from_normalized_parts(digits: Vec<DigitType>, negative: bool) -> Self {
        debug_assert!(is_normalized_mp(&digits));
        debug_assert!(!negative || digits != [0]);
        Self {
            digits,
            negative,
            _phantom: marker::PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::from_normalized_parts(alloc::vec![0], false)
    }

    pub fn one() -> Self {
        Self::from_normalized_parts(alloc::vec![1], false)
    }

    /// Construct a value from its digits, least significant first.
    ///
    /// `base` must match `B::BASE` and each digit must be less than that. Most significant zero
    /// digits get stripped and a negative zero becomes zero.
    pub fn from_digits(
        base: DigitType,
        digits: &[DigitType],
        negative: bool,
    ) -> Result<Self, LongIntError> {
        if base != B::BASE {
            return Err(LongIntError::InvalidBase {
                expected: B::BASE,
                found: base,
            });
        }
        if let Some((index, digit)) = digits.iter().enumerate().find(|(_, d)| **d >= B::BASE) {
            return Err(LongIntError::InvalidDigit {
                index,
                digit: *digit,
            });
        }
        let mut buf = DigitsBuffer::<B>::from_vec(digits.to_vec());
        buf.set_negative(negative);
        Ok(buf.finish())
    }

    /// `BASE^n`.
    pub fn power_of_base(n: usize) -> Self {
        let mut digits = alloc::vec![0; n + 1];
        digits[n] = 1;
        Self::from_normalized_parts(digits, false)
    }

    fn from_u64_magnitude(v: u64, negative: bool) -> Self {
        let base = B::BASE as u64;
        let mut digits = Vec::new();
        let mut v = v;
        while v != 0 {
            digits.push((v % base) as DigitType);
            v /= base;
        }
        let mut buf = DigitsBuffer::<B>::from_vec(digits);
        buf.set_negative(negative);
        buf.finish()
    }

    /// Re-express a value given in another radix.
    pub fn from_long_int<T: Base>(other: &LongInt<T>) -> Self {
        if T::BASE == B::BASE {
            return Self::from_normalized_parts(other.digits.clone(), other.negative);
        }

        // Horner evaluation of the other radix' digits, most significant first.
        let mut digits: Vec<DigitType> = alloc::vec![0];
        for d in other.digits.iter().rev() {
            let carry = mul_mp_l(B::BASE, &mut digits, T::BASE);
            push_carry_mp(B::BASE, &mut digits, carry);
            let carry = add_mp_l(B::BASE, &mut digits, *d);
            push_carry_mp(B::BASE, &mut digits, carry);
        }
        let mut buf = DigitsBuffer::<B>::from_vec(digits);
        buf.set_negative(other.negative);
        buf.finish()
    }

    /// The digits of the magnitude, least significant first.
    pub fn digits(&self) -> &[DigitType] {
        &self.digits
    }

    /// The number of digits, at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        is_zero_mp(&self.digits)
    }

    pub fn is_one(&self) -> bool {
        !self.negative && is_one_mp(&self.digits)
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_odd(&self) -> bool {
        is_odd_mp(B::BASE, &self.digits)
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    pub fn abs(&self) -> Self {
        Self::from_normalized_parts(self.digits.clone(), false)
    }

    fn signed_sum(
        op0: &[DigitType],
        op0_negative: bool,
        op1: &[DigitType],
        op1_negative: bool,
    ) -> Self {
        if op0_negative == op1_negative {
            let mut buf = DigitsBuffer::<B>::new_zeroed(op0.len().max(op1.len()) + 1);
            let carry = sum_shifted_mp_mp(B::BASE, buf.as_mut_slice(), op0, 0, op1, 0);
            debug_assert_eq!(carry, 0);
            buf.set_negative(op0_negative);
            return buf.finish();
        }

        // Opposite signs: subtract the smaller magnitude from the larger one.
        let (larger, smaller, negative) = match cmp_mp_mp(op0, op1) {
            cmp::Ordering::Equal => return Self::zero(),
            cmp::Ordering::Greater => (op0, op1, op0_negative),
            cmp::Ordering::Less => (op1, op0, op1_negative),
        };
        let mut buf = DigitsBuffer::<B>::from_vec(larger.to_vec());
        let borrow = sub_mp_mp(B::BASE, buf.as_mut_slice(), smaller);
        debug_assert_eq!(borrow, 0);
        buf.set_negative(negative);
        buf.finish()
    }

    fn add_impl(&self, other: &Self) -> Self {
        Self::signed_sum(&self.digits, self.negative, &other.digits, other.negative)
    }

    fn sub_impl(&self, other: &Self) -> Self {
        Self::signed_sum(&self.digits, self.negative, &other.digits, !other.negative)
    }

    fn mul_impl(&self, other: &Self) -> Self {
        let mut buf = DigitsBuffer::<B>::new_zeroed(self.len() + other.len());
        mul_mp_mp(B::BASE, buf.as_mut_slice(), &self.digits, &other.digits);
        buf.set_negative(self.negative != other.negative);
        buf.finish()
    }

    /// Truncating division with remainder.
    ///
    /// The quotient gets rounded towards zero and the remainder carries the dividend's sign,
    /// such that `self == q * other + r` and `|r| < |other|`.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), LongIntError> {
        if other.is_zero() {
            return Err(LongIntError::DivisionByZero);
        }
        if self.len() < other.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let q_negative = self.negative != other.negative;
        let (mut q, mut r) = if other.len() == 1 {
            let mut q = DigitsBuffer::<B>::new_zeroed(self.len());
            let r = div_mp_l(B::BASE, q.as_mut_slice(), &self.digits, other.digits[0])?;
            (q, DigitsBuffer::<B>::from_vec(alloc::vec![r]))
        } else {
            let mut q = DigitsBuffer::<B>::new_zeroed(self.len() - other.len() + 1);
            let r = div_mp_mp(B::BASE, q.as_mut_slice(), &self.digits, &other.digits)?;
            (q, DigitsBuffer::<B>::from_vec(r))
        };
        q.set_negative(q_negative);
        r.set_negative(self.negative);
        Ok((q.finish(), r.finish()))
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, LongIntError> {
        self.div_rem(other).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, other: &Self) -> Result<Self, LongIntError> {
        self.div_rem(other).map(|(_, r)| r)
    }

    fn shr_impl(&self, nbits: usize) -> Self {
        let mut buf = DigitsBuffer::<B>::from_vec(self.digits.clone());
        rshift_bits_mp(B::BASE, buf.as_mut_slice(), nbits);
        buf.set_negative(self.negative);
        buf.finish()
    }

    fn to_u64_magnitude(&self) -> Result<u64, LongIntError> {
        self.digits.iter().rev().try_fold(0u64, |acc, d| {
            acc.checked_mul(B::BASE as u64)
                .and_then(|acc| acc.checked_add(*d as u64))
                .ok_or(LongIntError::OutOfRange)
        })
    }
}

impl<B: Base> Default for LongInt<B> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<B: Base> From<u64> for LongInt<B> {
    fn from(v: u64) -> Self {
        Self::from_u64_magnitude(v, false)
    }
}

impl<B: Base> From<i64> for LongInt<B> {
    fn from(v: i64) -> Self {
        Self::from_u64_magnitude(v.unsigned_abs(), v < 0)
    }
}

impl<B: Base> From<u32> for LongInt<B> {
    fn from(v: u32) -> Self {
        Self::from(v as u64)
    }
}

impl<B: Base> From<i32> for LongInt<B> {
    fn from(v: i32) -> Self {
        Self::from(v as i64)
    }
}

impl<B: Base> From<usize> for LongInt<B> {
    fn from(v: usize) -> Self {
        Self::from(v as u64)
    }
}

impl<B: Base> TryFrom<&LongInt<B>> for u64 {
    type Error = LongIntError;

    fn try_from(v: &LongInt<B>) -> Result<Self, Self::Error> {
        if v.negative {
            return Err(LongIntError::NegativeToUnsigned);
        }
        v.to_u64_magnitude()
    }
}

impl<B: Base> TryFrom<&LongInt<B>> for i64 {
    type Error = LongIntError;

    fn try_from(v: &LongInt<B>) -> Result<Self, Self::Error> {
        let magnitude = v.to_u64_magnitude()?;
        if v.negative {
            if magnitude > i64::MIN.unsigned_abs() {
                return Err(LongIntError::OutOfRange);
            }
            Ok(0u64.wrapping_sub(magnitude) as i64)
        } else {
            i64::try_from(magnitude).map_err(|_| LongIntError::OutOfRange)
        }
    }
}

impl<B: Base> str::FromStr for LongInt<B> {
    type Err = LongIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, negative) = digits_from_decstr::<B>(s)?;
        let mut buf = DigitsBuffer::<B>::from_vec(digits);
        buf.set_negative(negative);
        Ok(buf.finish())
    }
}

impl<B: Base> fmt::Display for LongInt<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = digits_to_decstr(B::BASE, &self.digits, false);
        f.pad_integral(!self.negative, "", &s)
    }
}

impl<B: Base> PartialOrd for LongInt<B> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Base> Ord for LongInt<B> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        match (self.negative, other.negative) {
            (false, true) => cmp::Ordering::Greater,
            (true, false) => cmp::Ordering::Less,
            (false, false) => cmp_mp_mp(&self.digits, &other.digits),
            (true, true) => cmp_mp_mp(&other.digits, &self.digits),
        }
    }
}

impl<B: Base> ops::Index<usize> for LongInt<B> {
    type Output = DigitType;

    fn index(&self, index: usize) -> &Self::Output {
        &self.digits[index]
    }
}

impl<B: Base> ops::Neg for LongInt<B> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negative = !self.negative && !self.is_zero();
        self
    }
}

impl<B: Base> ops::Neg for &LongInt<B> {
    type Output = LongInt<B>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! impl_binop {
    ($tr:ident, $method:ident, $impl_fn:expr) => {
        impl<B: Base> ops::$tr<&LongInt<B>> for &LongInt<B> {
            type Output = LongInt<B>;

            fn $method(self, rhs: &LongInt<B>) -> Self::Output {
                $impl_fn(self, rhs)
            }
        }

        impl<B: Base> ops::$tr<LongInt<B>> for &LongInt<B> {
            type Output = LongInt<B>;

            fn $method(self, rhs: LongInt<B>) -> Self::Output {
                $impl_fn(self, &rhs)
            }
        }

        impl<B: Base> ops::$tr<&LongInt<B>> for LongInt<B> {
            type Output = LongInt<B>;

            fn $method(self, rhs: &LongInt<B>) -> Self::Output {
                $impl_fn(&self, rhs)
            }
        }

        impl<B: Base> ops::$tr<LongInt<B>> for LongInt<B> {
            type Output = LongInt<B>;

            fn $method(self, rhs: LongInt<B>) -> Self::Output {
                $impl_fn(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($tr:ident, $method:ident, $impl_fn:expr) => {
        impl<B: Base> ops::$tr<&LongInt<B>> for LongInt<B> {
            fn $method(&mut self, rhs: &LongInt<B>) {
                *self = $impl_fn(&*self, rhs);
            }
        }

        impl<B: Base> ops::$tr<LongInt<B>> for LongInt<B> {
            fn $method(&mut self, rhs: LongInt<B>) {
                *self = $impl_fn(&*self, &rhs);
            }
        }
    };
}

fn div_or_panic<B: Base>(op0: &LongInt<B>, op1: &LongInt<B>) -> LongInt<B> {
    match op0.checked_div(op1) {
        Ok(q) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

fn rem_or_panic<B: Base>(op0: &LongInt<B>, op1: &LongInt<B>) -> LongInt<B> {
    match op0.checked_rem(op1) {
        Ok(r) => r,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

impl_binop!(Add, add, LongInt::add_impl);
impl_binop!(Sub, sub, LongInt::sub_impl);
impl_binop!(Mul, mul, LongInt::mul_impl);
impl_binop!(Div, div, div_or_panic);
impl_binop!(Rem, rem, rem_or_panic);
impl_binop_assign!(AddAssign, add_assign, LongInt::add_impl);
impl_binop_assign!(SubAssign, sub_assign, LongInt::sub_impl);
impl_binop_assign!(MulAssign, mul_assign, LongInt::mul_impl);

impl<B: Base> ops::Shr<usize> for &LongInt<B> {
    type Output = LongInt<B>;

    fn shr(self, nbits: usize) -> Self::Output {
        self.shr_impl(nbits)
    }
}

impl<B: Base> ops::Shr<usize> for LongInt<B> {
    type Output = LongInt<B>;

    fn shr(self, nbits: usize) -> Self::Output {
        self.shr_impl(nbits)
    }
}

impl<B: Base> ops::ShrAssign<usize> for LongInt<B> {
    fn shr_assign(&mut self, nbits: usize) {
        *self = self.shr_impl(nbits);
    }
}

#[cfg(feature = "zeroize")]
impl<B: Base> zeroize::Zeroize for LongInt<B> {
    fn zeroize(&mut self) {
        self.digits.zeroize();
        self.digits.push(0);
        self.negative = false;
    }
}

#[cfg(test)]
use super::base::{Base10, Base100, Base10000, Base10Pow9, Base2, Base2Pow16, Base2Pow31};

#[cfg(test)]
fn test_long_int_add_sub_common<B: Base>() {
    let values: [i64; 9] = [
        0,
        1,
        -1,
        B::BASE as i64 - 1,
        -(B::BASE as i64),
        1 << 40,
        -(1 << 40) + 7,
        i64::MAX / 3,
        -(i64::MAX / 5),
    ];
    for a in values {
        for b in values {
            let la = LongInt::<B>::from(a);
            let lb = LongInt::<B>::from(b);
            assert_eq!(&la + &lb, LongInt::<B>::from(a + b));
            assert_eq!(&la - &lb, LongInt::<B>::from(a - b));
            assert_eq!(la.cmp(&lb), a.cmp(&b));

            let mut acc = la.clone();
            acc += &lb;
            acc -= lb;
            assert_eq!(acc, la);
        }
    }
}

#[test]
fn test_long_int_add_sub() {
    test_long_int_add_sub_common::<Base2>();
    test_long_int_add_sub_common::<Base10>();
    test_long_int_add_sub_common::<Base2Pow16>();
    test_long_int_add_sub_common::<Base10Pow9>();
    test_long_int_add_sub_common::<Base2Pow31>();
}

#[test]
fn test_long_int_add_sub_zero_sign() {
    let a = LongInt::<Base10>::from(-1234i32);
    let z = &a - &a;
    assert!(z.is_zero());
    assert!(!z.is_negative());
    assert_eq!(z.digits(), &[0]);

    let z = &a + &LongInt::from(1234u32);
    assert_eq!(z, LongInt::zero());
    assert!(!z.is_negative());
}

#[cfg(test)]
fn test_long_int_mul_common<B: Base>() {
    let values: [i64; 7] = [0, 1, -1, 999, -(B::BASE as i64) + 1, 3037000499, -2147483647];
    for a in values {
        for b in values {
            let prod = LongInt::<B>::from(a) * LongInt::<B>::from(b);
            assert_eq!(prod, LongInt::<B>::from(a * b));
            if a * b == 0 {
                assert!(!prod.is_negative());
            }
        }
    }
}

#[test]
fn test_long_int_mul() {
    let a = LongInt::<Base10>::from(999u32);
    let p = &a * &a;
    assert_eq!(p.digits(), tst_mk_digits![9, 9, 8, 0, 0, 1]);

    test_long_int_mul_common::<Base2>();
    test_long_int_mul_common::<Base10>();
    test_long_int_mul_common::<Base100>();
    test_long_int_mul_common::<Base2Pow31>();
}

#[cfg(test)]
fn test_long_int_div_rem_common<B: Base>() {
    let values: [i64; 10] = [
        1,
        -1,
        7,
        12,
        -12,
        1234,
        -100000,
        B::BASE as i64 + 1,
        (1 << 50) + 12345,
        -(i64::MAX / 7),
    ];
    for a in values.iter().copied().chain([0]) {
        for b in values {
            let (q, r) = LongInt::<B>::from(a).div_rem(&LongInt::<B>::from(b)).unwrap();
            assert_eq!(q, LongInt::<B>::from(a / b));
            assert_eq!(r, LongInt::<B>::from(a % b));
            assert!(r.is_zero() || r.is_negative() == (a < 0));
        }
    }
}

#[test]
fn test_long_int_div_rem() {
    // 1234 / 12 = 102 r 10
    let (q, r) = LongInt::<Base10>::from(1234u32)
        .div_rem(&LongInt::from(12u32))
        .unwrap();
    assert_eq!(q.digits(), tst_mk_digits![1, 0, 2]);
    assert_eq!(r.digits(), tst_mk_digits![1, 0]);

    // 100000 / 7 = 14285 r 5
    let (q, r) = LongInt::<Base10>::from(100000u32)
        .div_rem(&LongInt::from(7u32))
        .unwrap();
    assert_eq!(q, LongInt::from(14285u32));
    assert_eq!(r, LongInt::from(5u32));

    // Dividend shorter than the divisor.
    let (q, r) = LongInt::<Base10>::from(-5i32)
        .div_rem(&LongInt::from(123u32))
        .unwrap();
    assert!(q.is_zero() && !q.is_negative());
    assert_eq!(r, LongInt::from(-5i32));

    test_long_int_div_rem_common::<Base2>();
    test_long_int_div_rem_common::<Base10>();
    test_long_int_div_rem_common::<Base10000>();
    test_long_int_div_rem_common::<Base2Pow16>();
    test_long_int_div_rem_common::<Base2Pow31>();
}

#[test]
fn test_long_int_div_by_zero() {
    let a = LongInt::<Base10>::from(5u32);
    let e = a.div_rem(&LongInt::zero()).unwrap_err();
    assert_eq!(e, LongIntError::DivisionByZero);
    assert_eq!(e.kind(), LongIntErrorKind::DivisionByZero);
    assert_eq!(
        a.checked_rem(&LongInt::zero()),
        Err(LongIntError::DivisionByZero)
    );
}

#[test]
fn test_long_int_error_from_div_mp_error() {
    assert_eq!(
        LongIntError::from(DivMpError::DivisionByZero),
        LongIntError::DivisionByZero
    );
}

#[test]
#[should_panic(expected = "insufficient quotient space")]
fn test_long_int_error_from_insufficient_quotient_space() {
    let _ = LongIntError::from(DivMpError::InsufficientQuotientSpace);
}

#[test]
#[should_panic]
fn test_long_int_div_op_by_zero() {
    let _ = LongInt::<Base10>::from(5u32) / LongInt::zero();
}

#[test]
fn test_long_int_div_identity_large() {
    // (10^30 + 17) = q * (10^12 + 39) + r
    let u: LongInt<Base10000> = "1000000000000000000000000000017".parse().unwrap();
    let v: LongInt<Base10000> = "-1000000000039".parse().unwrap();
    let (q, r) = u.div_rem(&v).unwrap();
    assert!(q.is_negative());
    assert!(!r.is_negative());
    assert!(r.abs() < v.abs());
    assert_eq!(&q * &v + &r, u);
}

#[test]
fn test_long_int_from_digits() {
    let a = LongInt::<Base10>::from_digits(10, &[4, 3, 2, 1, 0, 0], true).unwrap();
    assert_eq!(a, LongInt::from(-1234i32));
    assert_eq!(a.len(), 4);
    assert_eq!(a[3], 1);

    let z = LongInt::<Base10>::from_digits(10, &[0, 0], true).unwrap();
    assert!(z.is_zero() && !z.is_negative());
    let z = LongInt::<Base10>::from_digits(10, &[], false).unwrap();
    assert_eq!(z.digits(), &[0]);

    assert_eq!(
        LongInt::<Base10>::from_digits(100, &[1], false),
        Err(LongIntError::InvalidBase {
            expected: 10,
            found: 100
        })
    );
    let e = LongInt::<Base10>::from_digits(10, &[1, 10], false).unwrap_err();
    assert_eq!(e, LongIntError::InvalidDigit { index: 1, digit: 10 });
    assert_eq!(e.kind(), LongIntErrorKind::InvalidArgument);
}

#[test]
fn test_long_int_power_of_base() {
    assert_eq!(LongInt::<Base10>::power_of_base(0), LongInt::one());
    assert_eq!(
        LongInt::<Base10>::power_of_base(5),
        LongInt::from(100000u32)
    );
    assert_eq!(
        LongInt::<Base2Pow16>::power_of_base(2),
        LongInt::from(1u64 << 32)
    );
}

#[test]
fn test_long_int_neg_abs() {
    let a = LongInt::<Base10>::from(42u32);
    assert_eq!(-&a, LongInt::from(-42i32));
    assert_eq!((-&a).abs(), a);
    assert_eq!(-(-a.clone()), a);
    let z = -LongInt::<Base10>::zero();
    assert!(!z.is_negative());
}

#[test]
fn test_long_int_parity() {
    assert!(LongInt::<Base10>::from(7u32).is_odd());
    assert!(LongInt::<Base10>::from(-8i32).is_even());
    assert!(LongInt::<Base10>::zero().is_even());
    crate::define_base!(Base3, 3);
    for v in 0u32..50 {
        assert_eq!(LongInt::<Base3>::from(v).is_odd(), v % 2 == 1);
    }
}

#[test]
fn test_long_int_shr() {
    let a = LongInt::<Base10>::from(1234u32);
    assert_eq!(&a >> 3, LongInt::from(154u32));
    assert_eq!(&a >> 11, LongInt::zero());
    assert_eq!(LongInt::<Base10>::from(-9i32) >> 1, LongInt::from(-4i32));
    assert_eq!(LongInt::<Base10>::from(-1i32) >> 1, LongInt::zero());
    let mut b = LongInt::<Base2Pow16>::from(u64::MAX);
    b >>= 63;
    assert_eq!(b, LongInt::one());

    assert_eq!(LongInt::<Base10>::from(5u32) >> (usize::MAX / 3), LongInt::zero());
    assert_eq!(LongInt::<Base10>::from(-5i32) >> usize::MAX, LongInt::zero());
    crate::define_base!(Base3, 3);
    assert_eq!(LongInt::<Base3>::from(u64::MAX) >> usize::MAX, LongInt::zero());
    assert_eq!(LongInt::<Base3>::from(u64::MAX) >> 62, LongInt::from(3u32));
}

#[test]
fn test_long_int_try_into_u64_i64() {
    let a = LongInt::<Base10>::from(u64::MAX);
    assert_eq!(u64::try_from(&a), Ok(u64::MAX));
    assert_eq!(i64::try_from(&a), Err(LongIntError::OutOfRange));
    let a = &a + &LongInt::one();
    assert_eq!(u64::try_from(&a), Err(LongIntError::OutOfRange));

    let a = LongInt::<Base2Pow31>::from(i64::MIN);
    assert_eq!(i64::try_from(&a), Ok(i64::MIN));
    let e = u64::try_from(&a).unwrap_err();
    assert_eq!(e, LongIntError::NegativeToUnsigned);
    assert_eq!(e.kind(), LongIntErrorKind::Domain);
    let a = &a - &LongInt::one();
    assert_eq!(i64::try_from(&a), Err(LongIntError::OutOfRange));

    assert_eq!(i64::try_from(&LongInt::<Base2>::from(-5i32)), Ok(-5));
}

#[test]
fn test_long_int_from_long_int() {
    let a = LongInt::<Base10>::from(-1234567890123i64);
    let b = LongInt::<Base2Pow16>::from_long_int(&a);
    assert_eq!(b, LongInt::from(-1234567890123i64));
    let c = LongInt::<Base10>::from_long_int(&b);
    assert_eq!(c, a);
    let z = LongInt::<Base2>::from_long_int(&LongInt::<Base10>::zero());
    assert_eq!(z.digits(), &[0]);
}

#[test]
fn test_long_int_display_from_str() {
    use alloc::format;

    let a: LongInt<Base2Pow31> = "-123456789012345678901234567890".parse().unwrap();
    assert!(a.is_negative());
    assert_eq!(format!("{}", a), "-123456789012345678901234567890");
    assert_eq!(format!("{}", LongInt::<Base10>::zero()), "0");
    assert_eq!(format!("{:>6}", LongInt::<Base100>::from(-42i32)), "   -42");
    assert_eq!(
        "12x".parse::<LongInt<Base10>>(),
        Err(LongIntError::InvalidDecStr(DigitsFromDecStrError::InvalidDecChar))
    );
}

#[test]
fn test_long_int_hash_eq() {
    use core::hash::{Hash, Hasher};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    let a = LongInt::<Base10>::from_digits(10, &[5, 0, 0], false).unwrap();
    let b = LongInt::<Base10>::from(5u32);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[cfg(feature = "zeroize")]
#[test]
fn test_long_int_zeroize() {
    use zeroize::Zeroize;

    let mut a = LongInt::<Base10>::from(-1234i32);
    a.zeroize();
    assert_eq!(a, LongInt::zero());
}
