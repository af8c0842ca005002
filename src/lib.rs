//! Signed multiprecision integers with digits in a configurable radix.
//!
//! The radix of a [`LongInt`] is fixed at the type level through a [`Base`] marker, see
//! [`define_base!`] for declaring radices beyond the predefined ones. The digit arithmetic
//! primitives operating on plain little-endian digit slices are exported as well.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(test)]
mod test_helpers;

mod add_impl;
mod base;
mod calc;
mod cmp_impl;
pub mod decstr;
mod digit;
mod digits_buffer;
mod div_impl;
mod exp_mod_impl;
mod long_int;
mod mul_impl;
mod shift_impl;
mod sqrt_impl;
mod zeroize;

pub use digit::{DigitType, DoubleDigitType, DIGIT_BITS, MAX_BASE};

pub use base::{
    is_valid_base, Base, Base10, Base100, Base10000, Base10Pow9, Base2, Base2Pow16, Base2Pow31,
};

pub use digits_buffer::{is_normalized_mp, nonzero_len_mp, normalize_mp, push_carry_mp};

pub use add_impl::{add_mp_l, add_mp_mp, sub_mp_mp, sum_shifted_mp_mp};

pub use cmp_impl::{cmp_mp_mp, is_one_mp, is_zero_mp};

pub use div_impl::{div_mp_l, div_mp_mp, DivMpError};

pub use mul_impl::{mul_mp_l, mul_mp_mp};

pub use shift_impl::{is_odd_mp, lshift_digits_mp, rshift_bits_mp, rshift_digits_mp};

pub use long_int::{LongInt, LongIntError, LongIntErrorKind};

pub use calc::{Calc, CalcDigit, CalcLongInt, CalcULong};

pub use sqrt_impl::{square_root_integer, square_root_integer_with};

#[allow(deprecated)]
pub use exp_mod_impl::{
    power_integer_modular, power_integer_modular_linear, power_integer_modular_long,
};
