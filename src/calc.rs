//! Arithmetic capability abstraction.
//!
//! Algorithms like the Newton iteration for integer square roots only need a handful of
//! arithmetic operations on some value type. The [`Calc`] trait provides those as stateless
//! associated functions, so that one algorithm implementation serves machine words and
//! [`LongInt`]s alike.

use core::marker;

use super::base::Base;
use super::digit::DigitType;
use super::long_int::{LongInt, LongIntError};

/// Stateless arithmetic on values of type [`Value`](Self::Value).
pub trait Calc {
    type Value: Clone;

    /// Whether the division rounds to integers.
    fn is_integer() -> bool;

    fn zero() -> Self::Value;

    /// Convert a machine integer. Fails with a domain error if it's not representable.
    fn from_int(equivalent: i64) -> Result<Self::Value, LongIntError>;

    fn sum(one: &Self::Value, two: &Self::Value) -> Self::Value;

    fn dif(one: &Self::Value, two: &Self::Value) -> Self::Value;

    fn mul(one: &Self::Value, two: &Self::Value) -> Self::Value;

    fn div(one: &Self::Value, two: &Self::Value) -> Result<Self::Value, LongIntError>;

    fn rem(one: &Self::Value, two: &Self::Value) -> Result<Self::Value, LongIntError>;

    fn negate(one: &Self::Value) -> Result<Self::Value, LongIntError>;

    fn increment(one: &Self::Value) -> Self::Value;

    fn decrement(one: &Self::Value) -> Self::Value;

    /// `one > two`.
    fn mor(one: &Self::Value, two: &Self::Value) -> bool;

    /// `one == two`.
    fn eqv(one: &Self::Value, two: &Self::Value) -> bool;

    fn is_even(one: &Self::Value) -> bool;
}

macro_rules! impl_calc_unsigned_word {
    ($calc:ident, $t:ty) => {
        impl Calc for $calc {
            type Value = $t;

            fn is_integer() -> bool {
                true
            }

            fn zero() -> $t {
                0
            }

            fn from_int(equivalent: i64) -> Result<$t, LongIntError> {
                if equivalent < 0 {
                    return Err(LongIntError::NegativeToUnsigned);
                }
                <$t>::try_from(equivalent).map_err(|_| LongIntError::OutOfRange)
            }

            fn sum(one: &$t, two: &$t) -> $t {
                one.wrapping_add(*two)
            }

            fn dif(one: &$t, two: &$t) -> $t {
                one.wrapping_sub(*two)
            }

            fn mul(one: &$t, two: &$t) -> $t {
                one.wrapping_mul(*two)
            }

            fn div(one: &$t, two: &$t) -> Result<$t, LongIntError> {
                one.checked_div(*two).ok_or(LongIntError::DivisionByZero)
            }

            fn rem(one: &$t, two: &$t) -> Result<$t, LongIntError> {
                one.checked_rem(*two).ok_or(LongIntError::DivisionByZero)
            }

            fn negate(one: &$t) -> Result<$t, LongIntError> {
                match one {
                    0 => Ok(0),
                    _ => Err(LongIntError::NegativeToUnsigned),
                }
            }

            fn increment(one: &$t) -> $t {
                one.wrapping_add(1)
            }

            fn decrement(one: &$t) -> $t {
                one.wrapping_sub(1)
            }

            fn mor(one: &$t, two: &$t) -> bool {
                one > two
            }

            fn eqv(one: &$t, two: &$t) -> bool {
                one == two
            }

            fn is_even(one: &$t) -> bool {
                one & 1 == 0
            }
        }
    };
}

/// Calculator on single digit words.
pub struct CalcDigit;

impl_calc_unsigned_word!(CalcDigit, DigitType);

/// Calculator on unsigned 64 bit words.
pub struct CalcULong;

impl_calc_unsigned_word!(CalcULong, u64);

/// Calculator on [`LongInt`]s in the radix `B::BASE`.
pub struct CalcLongInt<B: Base> {
    _phantom: marker::PhantomData<B>,
}

impl<B: Base> Calc for CalcLongInt<B> {
    type Value = LongInt<B>;

    fn is_integer() -> bool {
        true
    }

    fn zero() -> LongInt<B> {
        LongInt::zero()
    }

    fn from_int(equivalent: i64) -> Result<LongInt<B>, LongIntError> {
        Ok(LongInt::from(equivalent))
    }

    fn sum(one: &LongInt<B>, two: &LongInt<B>) -> LongInt<B> {
        one + two
    }

    fn dif(one: &LongInt<B>, two: &LongInt<B>) -> LongInt<B> {
        one - two
    }

    fn mul(one: &LongInt<B>, two: &LongInt<B>) -> LongInt<B> {
        one * two
    }

    fn div(one: &LongInt<B>, two: &LongInt<B>) -> Result<LongInt<B>, LongIntError> {
        one.checked_div(two)
    }

    fn rem(one: &LongInt<B>, two: &LongInt<B>) -> Result<LongInt<B>, LongIntError> {
        one.checked_rem(two)
    }

    fn negate(one: &LongInt<B>) -> Result<LongInt<B>, LongIntError> {
        Ok(-one)
    }

    fn increment(one: &LongInt<B>) -> LongInt<B> {
        one + &LongInt::one()
    }

    fn decrement(one: &LongInt<B>) -> LongInt<B> {
        one - &LongInt::one()
    }

    fn mor(one: &LongInt<B>, two: &LongInt<B>) -> bool {
        one > two
    }

    fn eqv(one: &LongInt<B>, two: &LongInt<B>) -> bool {
        one == two
    }

    fn is_even(one: &LongInt<B>) -> bool {
        one.is_even()
    }
}

#[cfg(test)]
fn test_calc_common<C: Calc>()
where
    C::Value: core::fmt::Debug,
{
    let v = |i: i64| C::from_int(i).unwrap();

    assert!(C::is_integer());
    assert!(C::eqv(&C::zero(), &v(0)));
    assert!(C::eqv(&C::sum(&v(40), &v(2)), &v(42)));
    assert!(C::eqv(&C::dif(&v(44), &v(2)), &v(42)));
    assert!(C::eqv(&C::mul(&v(6), &v(7)), &v(42)));
    assert!(C::eqv(&C::div(&v(85), &v(2)).unwrap(), &v(42)));
    assert!(C::eqv(&C::rem(&v(85), &v(2)).unwrap(), &v(1)));
    assert_eq!(C::div(&v(1), &v(0)).unwrap_err(), LongIntError::DivisionByZero);
    assert_eq!(C::rem(&v(1), &v(0)).unwrap_err(), LongIntError::DivisionByZero);
    assert!(C::eqv(&C::increment(&v(41)), &v(42)));
    assert!(C::eqv(&C::decrement(&v(43)), &v(42)));
    assert!(C::mor(&v(43), &v(42)));
    assert!(!C::mor(&v(42), &v(42)));
    assert!(C::is_even(&v(42)));
    assert!(!C::is_even(&v(43)));
    assert!(C::eqv(&C::negate(&v(0)).unwrap(), &v(0)));
}

#[test]
fn test_calc_digit() {
    test_calc_common::<CalcDigit>();
    assert_eq!(CalcDigit::from_int(-1), Err(LongIntError::NegativeToUnsigned));
    assert_eq!(CalcDigit::from_int(1 << 32), Err(LongIntError::OutOfRange));
    assert_eq!(CalcDigit::sum(&DigitType::MAX, &1), 0);
    assert_eq!(CalcDigit::decrement(&0), DigitType::MAX);
}

#[test]
fn test_calc_ulong() {
    test_calc_common::<CalcULong>();
    assert_eq!(CalcULong::from_int(-5), Err(LongIntError::NegativeToUnsigned));
    assert_eq!(CalcULong::negate(&5), Err(LongIntError::NegativeToUnsigned));
    assert_eq!(CalcULong::mul(&(1 << 63), &2), 0);
}

#[test]
fn test_calc_long_int() {
    use super::base::{Base10, Base2Pow31};

    test_calc_common::<CalcLongInt<Base10>>();
    test_calc_common::<CalcLongInt<Base2Pow31>>();
    let five = CalcLongInt::<Base10>::from_int(5).unwrap();
    assert_eq!(
        CalcLongInt::<Base10>::negate(&five).unwrap(),
        LongInt::from(-5i32)
    );
    assert_eq!(
        CalcLongInt::<Base10>::decrement(&LongInt::zero()),
        LongInt::from(-1i32)
    );
}
