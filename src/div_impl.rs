//! Implementation of multiprecision integer division primitives.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use super::digit::{
    add_d_d_c, cond_select_d, d_to_subtle_choice, div_dd_d, mul_add_d_d_d_c, sub_d_d_b, DigitType,
    DoubleDigitType,
};
use super::digits_buffer::nonzero_len_mp;
use super::mul_impl::mul_mp_l;
use super::zeroize::Zeroizing;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DivMpError {
    DivisionByZero,
    InsufficientQuotientSpace,
}

impl fmt::Display for DivMpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::InsufficientQuotientSpace => f.write_str("insufficient quotient space"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DivMpError {}

/// Divide a multiprecision integer by a single word.
///
/// The dividend gets processed from its most significant digit downwards, carrying the running
/// remainder, which is always less than the divisor. The divisor is not restricted to be less
/// than `base`.
///
/// Returns the remainder.
///
/// # Arguments
///
/// * `base` - The radix of all of the operands' digits.
/// * `q_out` - Receives the quotient. Its length must be at least the significant length of
///   `u`, digits above get cleared.
/// * `u` - The dividend.
/// * `v` - The divisor.
///
pub fn div_mp_l(
    base: DigitType,
    q_out: &mut [DigitType],
    u: &[DigitType],
    v: DigitType,
) -> Result<DigitType, DivMpError> {
    if v == 0 {
        return Err(DivMpError::DivisionByZero);
    }

    let u_len = nonzero_len_mp(u);
    if q_out.len() < u_len {
        return Err(DivMpError::InsufficientQuotientSpace);
    }
    q_out[u_len..].fill(0);

    let mut r = 0;
    let mut j = u_len;
    while j > 0 {
        j -= 1;
        let (q, rem) = div_dd_d(base, r, u[j], v);
        q_out[j] = q;
        r = rem;
    }

    Ok(r)
}

#[test]
fn test_div_mp_l() {
    // 100000 / 7 = 14285, remainder 5
    let mut q = [9; 6];
    let r = div_mp_l(10, &mut q, &[0, 0, 0, 0, 0, 1], 7).unwrap();
    assert_eq!(r, 5);
    assert_eq!(q, [5, 8, 2, 4, 1, 0]);

    let mut q = [9; 2];
    assert_eq!(div_mp_l(10, &mut q, &[3, 0, 0], 7).unwrap(), 3);
    assert_eq!(q, [0, 0]);

    // Divisors larger than the radix.
    let mut q = [0; 4];
    assert_eq!(div_mp_l(10, &mut q, &[4, 3, 2, 1], 100).unwrap(), 34);
    assert_eq!(q, [2, 1, 0, 0]);

    let mut q = [0; 1];
    assert_eq!(div_mp_l(10, &mut q, &[4, 3, 2, 1], 100), Err(DivMpError::InsufficientQuotientSpace));
    assert_eq!(div_mp_l(10, &mut q, &[4], 0), Err(DivMpError::DivisionByZero));

    let mut q: [DigitType; 0] = [];
    assert_eq!(div_mp_l(10, &mut q, &[0, 0], 3).unwrap(), 0);
}

// Subtract q * v from u at digit position j. Returns the borrow.
fn u_sub_qv_at(
    base: DigitType,
    u: &mut [DigitType],
    j: usize,
    q: DigitType,
    v: &[DigitType],
) -> DigitType {
    let mut qv_carry = 0;
    let mut u_borrow = 0;
    for (i, v_val) in v.iter().enumerate() {
        let (carry, qv_low) = mul_add_d_d_d_c(base, 0, *v_val, q, qv_carry);
        qv_carry = carry;
        (u_borrow, u[j + i]) = sub_d_d_b(base, u[j + i], qv_low, u_borrow);
    }

    let v_len = v.len();
    (u_borrow, u[j + v_len]) = sub_d_d_b(base, u[j + v_len], qv_carry, u_borrow);
    u_borrow
}

// Conditionally add v back to u at digit position j. The carry out of the most significant
// digit cancels a preceeding borrow from u_sub_qv_at() and gets returned.
fn u_cond_add_v_at(
    base: DigitType,
    u: &mut [DigitType],
    j: usize,
    v: &[DigitType],
    cond: subtle::Choice,
) -> DigitType {
    let mut u_carry = 0;
    for (i, v_val) in v.iter().enumerate() {
        let v_val = cond_select_d(0, *v_val, cond);
        (u_carry, u[j + i]) = add_d_d_c(base, u[j + i], v_val, u_carry);
    }

    let v_len = v.len();
    (u_carry, u[j + v_len]) = add_d_d_c(base, u[j + v_len], 0, u_carry);
    u_carry
}

/// Divide two multiprecision integers.
///
/// Long division according to D. E. Knuth, "The Art of Computer Programming", vol 2. Both
/// operands get scaled by `base / (v_high + 1)` first, which makes the divisor's leading digit
/// at least `base / 2`. For each position, a quotient digit gets estimated from the leading
/// digits of the running remainder and the divisor, corrected downwards using the divisor's
/// second digit and the trial product subtracted. If the estimate still turns out to be one too
/// large, the divisor gets added back.
///
/// Returns the remainder's digits, which is always less than `v`, such that `u == q_out * v +
/// remainder`.
///
/// # Arguments
///
/// * `base` - The radix of all of the operands' digits.
/// * `q_out` - Receives the quotient. Its length must be at least `u_len - v_len + 1`, where
///   `u_len` and `v_len` denote the significant lengths of `u` and `v` respectively. Digits
///   above get cleared.
/// * `u` - The dividend.
/// * `v` - The divisor.
///
pub fn div_mp_mp(
    base: DigitType,
    q_out: &mut [DigitType],
    u: &[DigitType],
    v: &[DigitType],
) -> Result<Vec<DigitType>, DivMpError> {
    let v_len = nonzero_len_mp(v);
    if v_len == 0 {
        return Err(DivMpError::DivisionByZero);
    }
    let u_len = nonzero_len_mp(u);
    if u_len < v_len {
        q_out.fill(0);
        return Ok(u[..u_len].to_vec());
    }

    let q_len = u_len - v_len + 1;
    if q_out.len() < q_len {
        return Err(DivMpError::InsufficientQuotientSpace);
    }
    q_out[q_len..].fill(0);

    if v_len == 1 {
        let r = div_mp_l(base, q_out, u, v[0])?;
        return Ok(alloc::vec![r]);
    }

    let v = &v[..v_len];
    let v_high = v[v_len - 1];

    // Normalize divisor's high digit. Note that scaling >= 1 and that multiplying v by scaling
    // will not overflow the width of v:
    // base >= scaling * (v_high + 1), the claim follows by interpreting the tail of v as a
    // fractional number < 1.
    let scaling = base / (v_high + 1);
    let mut scaled_v: Zeroizing<Vec<DigitType>> = v.to_vec().into();
    let carry = mul_mp_l(base, scaled_v.as_mut_slice(), scaling);
    debug_assert_eq!(carry, 0);
    let scaled_v_high = scaled_v[v_len - 1];
    let scaled_v_tail_high = scaled_v[v_len - 2];
    debug_assert!(scaled_v_high >= base / 2);

    // Scale u, with an extra high digit absorbing the carry.
    let mut scaled_u: Zeroizing<Vec<DigitType>> = Zeroizing::new(Vec::new());
    scaled_u.extend_from_slice(&u[..u_len]);
    scaled_u.push(0);
    let carry = mul_mp_l(base, scaled_u.as_mut_slice(), scaling);
    debug_assert_eq!(carry, 0);

    let b = base as DoubleDigitType;
    let mut j = q_len;
    while j > 0 {
        j -= 1;
        let q = {
            let u_h = scaled_u[v_len + j] as DoubleDigitType;
            let u_l = scaled_u[v_len + j - 1] as DoubleDigitType;
            let u_tail_high = scaled_u[v_len + j - 2] as DoubleDigitType;
            let v_h = scaled_v_high as DoubleDigitType;
            let v_tail_high = scaled_v_tail_high as DoubleDigitType;

            let u_cur = u_h * b + u_l;
            let mut q = u_cur / v_h;
            let mut r = u_cur % v_h;
            // Cap q to fit a digit and, as long as r does not overflow a digit, check whether
            // q * v[n - 2] > b * r + u[j + n - 2]. If so, decrement q and adjust r accordingly.
            // Because v[n - 1] is normalized, this loop runs at most twice.
            while q >= b || q * v_tail_high > r * b + u_tail_high {
                q -= 1;
                r += v_h;
                if r >= b {
                    break;
                }
            }
            q as DigitType
        };

        let borrow = u_sub_qv_at(base, scaled_u.as_mut_slice(), j, q, &scaled_v);
        let over_estimated = d_to_subtle_choice(borrow);
        let carry = u_cond_add_v_at(base, scaled_u.as_mut_slice(), j, &scaled_v, over_estimated);
        debug_assert_eq!(carry, borrow);
        q_out[j] = cond_select_d(q, q.wrapping_sub(1), over_estimated);
    }

    // Finally, divide the resulting remainder in u by the scaling again.
    let mut r = alloc::vec![0; v_len];
    let rest = div_mp_l(base, &mut r, &scaled_u[..v_len], scaling)?;
    debug_assert_eq!(rest, 0);
    Ok(r)
}

#[cfg(test)]
fn div_and_check(base: DigitType, u: &[DigitType], v: &[DigitType]) {
    use super::add_impl::add_mp_mp;
    use super::cmp_impl::cmp_mp_mp;
    use super::mul_impl::mul_mp_mp;
    use core::cmp::Ordering;

    let v_len = nonzero_len_mp(v);
    let q_len = if u.len() >= v_len { u.len() - v_len + 1 } else { 0 };
    let mut q = alloc::vec![base - 1; q_len];
    let r = div_mp_mp(base, &mut q, u, v).unwrap();
    assert_eq!(cmp_mp_mp(&r, v), Ordering::Less);

    // Multiply q by v again and add the remainder back, the result should match the initial u.
    let mut result = alloc::vec![0; q.len() + v.len() + 1];
    mul_mp_mp(base, &mut result[..q.len() + v.len()], &q, v);
    let carry = add_mp_mp(base, &mut result, &r);
    assert_eq!(carry, 0);
    assert_eq!(cmp_mp_mp(u, &result), Ordering::Equal);
}

#[cfg(test)]
fn test_div_mp_mp_common(base: DigitType) {
    let m = base - 1;

    div_and_check(base, &[0, 1], &[1]);
    div_and_check(base, &[0, 1], &[m / 2 + 1]);
    div_and_check(base, &[m, m, m - 1, m, m, m], &[m, m, m]);
    div_and_check(base, &[m - 1, m, m, m - 1, m, m], &[m, m, m]);
    div_and_check(base, &[0, 0, 0, 0, 0, 0], &[m, m, m]);
    div_and_check(base, &[m - 1, 0, 0, 0, 0, 0], &[m, m, m]);
    div_and_check(base, &[0, m, m, m, m, m], &[0, 1, 0]);
    div_and_check(base, &[0, m - 1, m, m, m, m], &[0, 2 % base, 0]);
    div_and_check(base, &[1, 2 % base, 3 % base], &[m, m, m, m]);

    // A divisor with a small leading digit requires the most scaling.
    div_and_check(base, &[m, m, m, m, m], &[m, 1]);
    div_and_check(base, &[0, 0, 0, 0, 1], &[1, 1]);

    // All combinations of two set digits in the divisor below an all-ones dividend.
    const N_MAX_DIGITS: usize = 5;
    for u_len in 1..N_MAX_DIGITS + 1 {
        let u = alloc::vec![m; u_len];
        for j1 in 0..u_len {
            for j2 in 0..j1 + 1 {
                let mut v = alloc::vec![0; j1 + 1];
                v[j1] = 1;
                v[j2] = m;
                div_and_check(base, &u, &v);
            }
        }
    }
}

#[test]
fn test_div_mp_mp() {
    // 1234 / 12 = 102, remainder 10
    let mut q = [0; 3];
    let r = div_mp_mp(10, &mut q, &[4, 3, 2, 1], &[2, 1]).unwrap();
    assert_eq!(q, [2, 0, 1]);
    assert_eq!(r, [0, 1]);

    // Dividend shorter than the divisor.
    let mut q = [7; 2];
    let r = div_mp_mp(10, &mut q, &[4, 3, 0, 0], &[2, 1, 1]).unwrap();
    assert_eq!(q, [0, 0]);
    assert_eq!(r, [4, 3]);

    let mut q = [0; 2];
    assert_eq!(div_mp_mp(10, &mut q, &[4, 3], &[0, 0]), Err(DivMpError::DivisionByZero));
    assert_eq!(
        div_mp_mp(10, &mut q, &[4, 3, 2, 1], &[2, 1]),
        Err(DivMpError::InsufficientQuotientSpace)
    );

    test_div_mp_mp_common(3);
    test_div_mp_mp_common(10);
    test_div_mp_mp_common(1 << 16);
    test_div_mp_mp_common(1_000_000_000);
    test_div_mp_mp_common(1 << 31);
}

#[test]
fn test_div_mp_mp_small_leading_divisor_digit() {
    let u = [0, 0, 0, 0, 5];
    let v = [9, 9, 5];
    div_and_check(10, &u, &v);
    let mut q = [0; 3];
    let r = div_mp_mp(10, &mut q, &u, &v).unwrap();
    // 50000 = 83 * 599 + 283
    assert_eq!(q, [3, 8, 0]);
    assert_eq!(r, [3, 8, 2]);
}
