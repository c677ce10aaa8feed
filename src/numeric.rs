use crate::{ICBRT_DIGIT_BITS, ICBRT_TOP_SHIFT};
use bytemuck::Pod;

const F32_SIGN_MASK: u32 = 0x8000_0000;
const F32_INFINITY_BITS: u32 = 0x7f80_0000;

/// Divides `i` by `j`, rounding up so that `round_div(i, j) * j >= i`.
///
/// For `i >= 0` and `j > 0` this is ceiling division. Negative dividends are rounded towards
/// zero first and then bumped by one when there is a remainder.
#[inline(always)]
pub fn round_div(i: i32, j: i32) -> i32 {
    i / j + (i % j != 0) as i32
}

#[inline(always)]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

#[inline(always)]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Restricts `a` to the range `[b, c]`, computed as `min(c, max(b, a))`.
///
/// When `b > c` the result is always `c`.
#[inline(always)]
pub fn clamp<T: PartialOrd>(a: T, b: T, c: T) -> T {
    min(c, max(b, a))
}

#[inline(always)]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b)
}

/// Relabels the bits of `t` as a `U` of the same width, without any numeric conversion.
///
/// Panics if `T` and `U` differ in size.
#[inline(always)]
pub fn bit_reinterpret<U: Pod, T: Pod>(t: T) -> U {
    bytemuck::cast(t)
}

/// Returns `1 / x`, or an infinity carrying the sign of `x` when `x` is a (signed) zero.
#[inline(always)]
pub fn safe_rcp(x: f32) -> f32 {
    if x != 0.0 {
        1.0 / x
    } else {
        bit_reinterpret::<f32, u32>(F32_INFINITY_BITS).copysign(x)
    }
}

/// Returns `x` with the sign of `x * y`, without computing the product.
#[inline(always)]
pub fn prodsign(x: f32, y: f32) -> f32 {
    let x_bits: u32 = bit_reinterpret(x);
    let y_bits: u32 = bit_reinterpret(y);
    bit_reinterpret(x_bits ^ (y_bits & F32_SIGN_MASK))
}

/// Integer cube root: the largest `y` with `y^3 <= x`.
///
/// Extracts one base-8 digit of the root per step, using only integer arithmetic.
#[inline]
pub fn icbrt(x: u32) -> u32 {
    let mut rem = x as u64;
    let mut y = 0_u64;
    for shift in (0..=ICBRT_TOP_SHIFT).rev().step_by(ICBRT_DIGIT_BITS as usize) {
        y *= 2;
        // (y + 1)^3 - y^3, scaled to the current digit
        let b = (3 * y * (y + 1) + 1) << shift;
        if rem >= b {
            rem -= b;
            y += 1;
        }
    }
    y as u32
}

/// Smallest `q` such that `1 << q >= x`. Returns 0 for `x <= 1`.
#[inline(always)]
pub fn ilog2(x: u32) -> u32 {
    if x <= 1 {
        0
    } else {
        u32::BITS - (x - 1).leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_div() {
        assert_eq!(round_div(7, 2), 4);
        assert_eq!(round_div(8, 2), 4);
        assert_eq!(round_div(0, 5), 0);
        assert_eq!(round_div(1, 5), 1);
        for i in 0..200 {
            for j in 1..20 {
                let q = round_div(i, j);
                assert!(q * j >= i, "round_div({i}, {j}) = {q}");
                assert!((q - 1) * j < i || q == 0, "round_div({i}, {j}) = {q} is not minimal");
            }
        }
    }

    #[test]
    fn test_clamp_composition() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(42, 0, 10), 10);
        // degenerate range follows min(c, max(b, a))
        assert_eq!(clamp(5, 10, 0), 0);
        assert_eq!(clamp(0.5_f32, 1.0, 2.0), 1.0);
        for a in -5..5 {
            for b in -5..5 {
                for c in -5..5 {
                    assert_eq!(clamp(a, b, c), min(c, max(b, a)));
                }
            }
        }
    }

    #[test]
    fn test_min_max_swap() {
        assert_eq!(min(3, 4), 3);
        assert_eq!(max(3, 4), 4);
        let mut a = String::from("left");
        let mut b = String::from("right");
        swap(&mut a, &mut b);
        assert_eq!(a, "right");
        assert_eq!(b, "left");
    }

    #[test]
    fn test_bit_reinterpret() {
        assert_eq!(bit_reinterpret::<u32, f32>(1.0), 0x3f80_0000);
        assert_eq!(bit_reinterpret::<f32, u32>(0xbf80_0000), -1.0);
        assert_eq!(bit_reinterpret::<i64, u64>(u64::MAX), -1);
    }

    #[test]
    fn test_safe_rcp() {
        assert_eq!(safe_rcp(2.0), 0.5);
        assert_eq!(safe_rcp(-4.0), -0.25);
        assert_eq!(safe_rcp(0.0), f32::INFINITY);
        assert_eq!(safe_rcp(-0.0), f32::NEG_INFINITY);
    }

    #[test]
    fn test_prodsign() {
        assert_eq!(prodsign(3.0, 2.0), 3.0);
        assert_eq!(prodsign(3.0, -2.0), -3.0);
        assert_eq!(prodsign(-3.0, -2.0), 3.0);
        assert_eq!(prodsign(-3.0, 2.0), -3.0);
        // no overflow even where the product would be infinite
        assert_eq!(prodsign(f32::MAX, -f32::MAX), -f32::MAX);
        assert!(prodsign(0.0, -1.0).is_sign_negative());
    }

    #[test]
    fn test_icbrt() {
        assert_eq!(icbrt(0), 0);
        assert_eq!(icbrt(1), 1);
        assert_eq!(icbrt(7), 1);
        assert_eq!(icbrt(8), 2);
        assert_eq!(icbrt(26), 2);
        assert_eq!(icbrt(27), 3);
        assert_eq!(icbrt(1_000_000), 100);
        assert_eq!(icbrt(999_999), 99);
        assert_eq!(icbrt(i32::MAX as u32), 1290);
        assert_eq!(icbrt(u32::MAX), 1625);
        for y in 0..1626_u64 {
            let cube = y * y * y;
            if cube <= u32::MAX as u64 {
                assert_eq!(icbrt(cube as u32) as u64, y);
            }
            if cube > 0 && cube - 1 <= u32::MAX as u64 {
                assert_eq!(icbrt((cube - 1) as u32) as u64, y - 1);
            }
        }
    }

    #[test]
    fn test_ilog2() {
        assert_eq!(ilog2(1), 0);
        assert_eq!(ilog2(2), 1);
        assert_eq!(ilog2(3), 2);
        assert_eq!(ilog2(4), 2);
        assert_eq!(ilog2(5), 3);
        assert_eq!(ilog2(1 << 31), 31);
        assert_eq!(ilog2((1 << 31) + 1), 32);
        assert_eq!(ilog2(u32::MAX), 32);
    }
}
