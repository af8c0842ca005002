//! Implementation of modular exponentiation.

use super::base::Base;
use super::long_int::{LongInt, LongIntError};

fn check_modulus<B: Base>(modulus: &LongInt<B>) -> Result<(), LongIntError> {
    if modulus.is_zero() {
        Err(LongIntError::DivisionByZero)
    } else if modulus.is_negative() {
        Err(LongIntError::NonPositiveModulus)
    } else {
        Ok(())
    }
}

/// Compute `number^power mod modulus` for a machine word exponent.
///
/// Binary exponentiation from the exponent's least significant bit upwards, with every
/// intermediate product reduced. The result follows the truncating remainder convention, i.e.
/// it is negative for a negative `number` raised to an odd `power`, unless zero.
///
/// # Arguments
///
/// * `number` - The base of the exponentiation.
/// * `power` - The exponent. Zero yields `1 mod modulus`.
/// * `modulus` - Must be positive.
///
pub fn power_integer_modular<B: Base>(
    number: &LongInt<B>,
    power: u64,
    modulus: &LongInt<B>,
) -> Result<LongInt<B>, LongIntError> {
    check_modulus(modulus)?;
    if power == 0 {
        return LongInt::one().checked_rem(modulus);
    }

    let mut result = LongInt::one();
    let mut square = number.checked_rem(modulus)?;
    let mut power = power;
    loop {
        if power & 1 != 0 {
            result = (&result * &square).checked_rem(modulus)?;
        }
        power >>= 1;
        if power == 0 {
            return Ok(result);
        }
        square = (&square * &square).checked_rem(modulus)?;
    }
}

/// Compute `number^power mod modulus` for an exponent of arbitrary size.
///
/// Same as [`power_integer_modular()`], except that the exponent is a [`LongInt`], possibly in a
/// different radix. Each round consumes the exponent's least significant bit.
///
/// # Arguments
///
/// * `number` - The base of the exponentiation.
/// * `power` - The exponent, must not be negative. Zero yields `1 mod modulus`.
/// * `modulus` - Must be positive.
///
pub fn power_integer_modular_long<B: Base, T: Base>(
    number: &LongInt<B>,
    power: &LongInt<T>,
    modulus: &LongInt<B>,
) -> Result<LongInt<B>, LongIntError> {
    check_modulus(modulus)?;
    if power.is_negative() {
        return Err(LongIntError::NegativeExponent);
    }
    if power.is_zero() {
        return LongInt::one().checked_rem(modulus);
    }

    let mut result = LongInt::one();
    let mut square = number.checked_rem(modulus)?;
    let mut power = power.clone();
    loop {
        if power.is_odd() {
            result = (&result * &square).checked_rem(modulus)?;
        }
        power >>= 1;
        if power.is_zero() {
            return Ok(result);
        }
        square = (&square * &square).checked_rem(modulus)?;
    }
}

/// Compute `number^power mod modulus` by repeated multiplication.
///
/// Needs `power` multiplications.
#[deprecated(note = "linear in the exponent, use power_integer_modular_long()")]
pub fn power_integer_modular_linear<B: Base, T: Base>(
    number: &LongInt<B>,
    power: &LongInt<T>,
    modulus: &LongInt<B>,
) -> Result<LongInt<B>, LongIntError> {
    check_modulus(modulus)?;
    if power.is_negative() {
        return Err(LongIntError::NegativeExponent);
    }
    if power.is_zero() {
        return LongInt::one().checked_rem(modulus);
    }

    let mut result = number.checked_rem(modulus)?;
    let mut i = LongInt::<T>::one();
    while i < *power {
        result = (&result * number).checked_rem(modulus)?;
        i += LongInt::one();
    }
    Ok(result)
}

#[test]
fn test_power_integer_modular() {
    use super::base::Base10;
    use super::long_int::LongIntErrorKind;

    // 7^128 mod 13 = 3
    let r = power_integer_modular(
        &LongInt::<Base10>::from(7u32),
        128,
        &LongInt::from(13u32),
    );
    assert_eq!(r, Ok(LongInt::from(3u32)));

    let r = power_integer_modular(&LongInt::<Base10>::from(5u32), 0, &LongInt::from(13u32));
    assert_eq!(r, Ok(LongInt::one()));
    let r = power_integer_modular(&LongInt::<Base10>::from(5u32), 0, &LongInt::one());
    assert_eq!(r, Ok(LongInt::zero()));

    // Truncating remainder: (-2)^3 mod 5 = -8 mod 5 = -3
    let r = power_integer_modular(&LongInt::<Base10>::from(-2i32), 3, &LongInt::from(5u32));
    assert_eq!(r, Ok(LongInt::from(-3i32)));
    let r = power_integer_modular(&LongInt::<Base10>::from(-2i32), 2, &LongInt::from(5u32));
    assert_eq!(r, Ok(LongInt::from(4u32)));

    let r = power_integer_modular(&LongInt::<Base10>::from(2u32), 3, &LongInt::zero());
    assert_eq!(r, Err(LongIntError::DivisionByZero));
    let e = power_integer_modular(&LongInt::<Base10>::from(2u32), 3, &LongInt::from(-5i32))
        .unwrap_err();
    assert_eq!(e, LongIntError::NonPositiveModulus);
    assert_eq!(e.kind(), LongIntErrorKind::Domain);
}

#[cfg(test)]
fn mod_pow_u64(number: u64, power: u64, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut result = 1 % m;
    let mut square = number as u128 % m;
    let mut power = power;
    while power > 0 {
        if power & 1 != 0 {
            result = result * square % m;
        }
        square = square * square % m;
        power >>= 1;
    }
    result as u64
}

#[cfg(test)]
fn test_power_integer_modular_common<B: Base>() {
    let numbers: [u64; 5] = [0, 2, 7, 123456789, u64::MAX];
    let powers: [u64; 6] = [0, 1, 2, 13, 1 << 20, u64::MAX];
    let moduli: [u64; 5] = [1, 13, 1_000_000_007, (1 << 61) - 1, u64::MAX];
    for n in numbers {
        for p in powers {
            for m in moduli {
                let r = power_integer_modular(&LongInt::<B>::from(n), p, &LongInt::<B>::from(m));
                assert_eq!(r, Ok(LongInt::from(mod_pow_u64(n, p, m))));
            }
        }
    }
}

#[test]
fn test_power_integer_modular_radices() {
    use super::base::{Base10, Base10Pow9, Base2, Base2Pow16, Base2Pow31};

    crate::define_base!(Base7, 7);

    test_power_integer_modular_common::<Base2>();
    test_power_integer_modular_common::<Base7>();
    test_power_integer_modular_common::<Base10>();
    test_power_integer_modular_common::<Base2Pow16>();
    test_power_integer_modular_common::<Base10Pow9>();
    test_power_integer_modular_common::<Base2Pow31>();
}

#[test]
fn test_power_integer_modular_long() {
    use super::base::{Base10, Base2, Base2Pow31};

    crate::define_base!(Base3, 3);

    let number = LongInt::<Base10>::from(7u32);
    let modulus = LongInt::<Base10>::from(13u32);
    for power in [0u64, 1, 2, 5, 128, 1000, 123456789] {
        let expected = power_integer_modular(&number, power, &modulus).unwrap();
        let p2 = LongInt::<Base2>::from(power);
        assert_eq!(power_integer_modular_long(&number, &p2, &modulus), Ok(expected.clone()));
        // Odd radix, where parity depends on all the exponent's digits.
        let p3 = LongInt::<Base3>::from(power);
        assert_eq!(power_integer_modular_long(&number, &p3, &modulus), Ok(expected.clone()));
        let p31 = LongInt::<Base2Pow31>::from(power);
        assert_eq!(power_integer_modular_long(&number, &p31, &modulus), Ok(expected));
    }

    // An exponent beyond the machine word range: 2^(2^64) mod 1000000007.
    let power = LongInt::<Base2Pow31>::from(u64::MAX) + LongInt::one();
    let modulus = LongInt::<Base10>::from(1_000_000_007u32);
    let r = power_integer_modular_long(&LongInt::<Base10>::from(2u32), &power, &modulus).unwrap();
    // 2^(2^64) = (2^(2^63))^2
    let half = LongInt::<Base2Pow31>::from(1u64 << 63);
    let h = power_integer_modular_long(&LongInt::<Base10>::from(2u32), &half, &modulus).unwrap();
    assert_eq!(r, (&h * &h) % &modulus);

    assert_eq!(
        power_integer_modular_long(&number, &LongInt::<Base10>::from(-1i32), &modulus),
        Err(LongIntError::NegativeExponent)
    );
    assert_eq!(
        power_integer_modular_long(&number, &LongInt::<Base10>::from(3u32), &LongInt::zero()),
        Err(LongIntError::DivisionByZero)
    );
}

#[allow(deprecated)]
#[test]
fn test_power_integer_modular_linear() {
    use super::base::{Base10, Base2Pow16};

    for n in [-17i64, -2, 0, 1, 3, 9876543210] {
        for p in [0u32, 1, 2, 3, 17, 100] {
            for m in [1u32, 2, 13, 1000] {
                let number = LongInt::<Base2Pow16>::from(n);
                let modulus = LongInt::<Base2Pow16>::from(m);
                let power = LongInt::<Base10>::from(p);
                assert_eq!(
                    power_integer_modular_linear(&number, &power, &modulus),
                    power_integer_modular_long(&number, &power, &modulus),
                );
            }
        }
    }
    assert_eq!(
        power_integer_modular_linear(
            &LongInt::<Base10>::from(2u32),
            &LongInt::<Base10>::from(-1i32),
            &LongInt::from(5u32)
        ),
        Err(LongIntError::NegativeExponent)
    );
}
