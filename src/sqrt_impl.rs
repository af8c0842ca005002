//! Implementation of the integer square root.

extern crate alloc;

use super::base::Base;
use super::calc::{Calc, CalcDigit, CalcLongInt};
use super::digit::DigitType;
use super::long_int::{LongInt, LongIntError};

/// Newton iteration for the integer square root on any [`Calc`] value type.
///
/// Iterates `x' = (x + number / x) / 2` until the sequence stops decreasing. The `first_estimate`
/// must be at least the integer square root of `number`, so that all iterates are an upper bound
/// until the final one. The sum gets halved termwise, so that word sized calculators don't
/// overflow for estimates near their maximum.
///
/// # Arguments
///
/// * `number` - The radicand, must be positive.
/// * `first_estimate` - Where to start the iteration.
///
pub fn square_root_integer_with<C: Calc>(
    number: &C::Value,
    first_estimate: C::Value,
) -> Result<C::Value, LongIntError> {
    if !C::mor(number, &C::zero()) {
        return Err(LongIntError::NonPositiveSqrtArgument);
    }

    let two = C::from_int(2)?;
    let mut x = first_estimate;
    loop {
        let q = C::div(number, &x)?;
        // floor((x + q) / 2) = x / 2 + q / 2 + (x % 2 + q % 2) / 2
        let halves = C::sum(&C::div(&x, &two)?, &C::div(&q, &two)?);
        let odd_parts = C::sum(&C::rem(&x, &two)?, &C::rem(&q, &two)?);
        let y = C::sum(&halves, &C::div(&odd_parts, &two)?);
        if !C::mor(&x, &y) {
            return Ok(x);
        }
        x = y;
    }
}

#[test]
fn test_square_root_integer_with() {
    use super::calc::CalcULong;

    for n in 1u64..2000 {
        let r = square_root_integer_with::<CalcULong>(&n, n).unwrap();
        assert!(r * r <= n && n < (r + 1) * (r + 1));
    }
    assert_eq!(
        square_root_integer_with::<CalcULong>(&(1u64 << 62), 1u64 << 62),
        Ok(1 << 31)
    );
    assert_eq!(
        square_root_integer_with::<CalcULong>(&u64::MAX, u64::MAX),
        Ok(u32::MAX as u64)
    );
    assert_eq!(
        square_root_integer_with::<CalcULong>(&(u64::MAX - 1), u64::MAX),
        Ok(u32::MAX as u64)
    );
    assert_eq!(
        square_root_integer_with::<CalcDigit>(&u32::MAX, u32::MAX),
        Ok(u16::MAX as u32)
    );
    assert_eq!(
        square_root_integer_with::<CalcULong>(&0, 0),
        Err(LongIntError::NonPositiveSqrtArgument)
    );
}

/// `floor(sqrt(base))`.
fn base_sqrt_floor(base: DigitType) -> Result<DigitType, LongIntError> {
    square_root_integer_with::<CalcDigit>(&base, base)
}

#[test]
fn test_base_sqrt_floor() {
    assert_eq!(base_sqrt_floor(2), Ok(1));
    assert_eq!(base_sqrt_floor(3), Ok(1));
    assert_eq!(base_sqrt_floor(4), Ok(2));
    assert_eq!(base_sqrt_floor(10), Ok(3));
    assert_eq!(base_sqrt_floor(100), Ok(10));
    assert_eq!(base_sqrt_floor(1 << 16), Ok(1 << 8));
    assert_eq!(base_sqrt_floor(1 << 31), Ok(46340));
}

/// Compute `floor(sqrt(number))` for a positive [`LongInt`].
///
/// The Newton iteration starts out from `BASE^ceil(L/2)` for a `number` of `L` digits. If the
/// radix is a perfect square and `L` is odd, the tighter `floor(sqrt(BASE)) * BASE^floor(L/2)`
/// gets used instead. Single digit numbers are their own first estimate.
pub fn square_root_integer<B: Base>(number: &LongInt<B>) -> Result<LongInt<B>, LongIntError> {
    if number.is_negative() || number.is_zero() {
        return Err(LongIntError::NonPositiveSqrtArgument);
    }

    let len = number.len();
    let first_estimate = if len <= 1 {
        number.clone()
    } else {
        let sqrt_floor = base_sqrt_floor(B::BASE)?;
        let base_is_square = sqrt_floor * sqrt_floor == B::BASE;
        if base_is_square && len % 2 == 1 {
            let mut digits = alloc::vec![0; len / 2 + 1];
            digits[len / 2] = sqrt_floor;
            LongInt::from_normalized_parts(digits, false)
        } else {
            LongInt::power_of_base((len + 1) / 2)
        }
    };
    square_root_integer_with::<CalcLongInt<B>>(number, first_estimate)
}

#[cfg(test)]
fn test_square_root_integer_common<B: Base>() {
    for n in (1u64..300).chain([999_999, 1_000_000, 1_000_001, u32::MAX as u64, u64::MAX]) {
        let number = LongInt::<B>::from(n);
        let r = square_root_integer(&number).unwrap();
        let r1 = &r + &LongInt::one();
        assert!(&r * &r <= number);
        assert!(number < &r1 * &r1);
    }

    let big: LongInt<B> = "123456789012345678901234567890123456789".parse().unwrap();
    let r = square_root_integer(&big).unwrap();
    let r1 = &r + &LongInt::one();
    assert!(&r * &r <= big);
    assert!(big < &r1 * &r1);
}

#[test]
fn test_square_root_integer() {
    use super::base::{Base10, Base100, Base10000, Base2, Base2Pow16, Base2Pow31};

    assert_eq!(
        square_root_integer(&LongInt::<Base10>::from(10u32)),
        Ok(LongInt::from(3u32))
    );
    assert_eq!(
        square_root_integer(&LongInt::<Base10>::from(1u32)),
        Ok(LongInt::one())
    );
    assert_eq!(
        square_root_integer(&LongInt::<Base10>::zero()),
        Err(LongIntError::NonPositiveSqrtArgument)
    );
    let e = square_root_integer(&LongInt::<Base10>::from(-4i32)).unwrap_err();
    assert_eq!(e, LongIntError::NonPositiveSqrtArgument);
    assert_eq!(e.kind(), super::long_int::LongIntErrorKind::Domain);

    test_square_root_integer_common::<Base2>();
    test_square_root_integer_common::<Base10>();
    test_square_root_integer_common::<Base100>();
    test_square_root_integer_common::<Base10000>();
    test_square_root_integer_common::<Base2Pow16>();
    test_square_root_integer_common::<Base2Pow31>();
}
