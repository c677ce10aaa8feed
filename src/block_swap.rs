// In-place block exchanges without auxiliary storage, based on
// Gries & Mills, "Swapping Sections" (1981)
// https://ecommons.cornell.edu/handle/1813/6292

use crate::min;

/// Swaps the equal sized blocks `[a, a + n)` and `[b, b + n)`, preserving the order inside each block.
///
/// Applying the same swap twice restores the buffer.
///
/// # Panics
///
/// Panics if the blocks overlap or do not lie inside `buf`.
#[inline]
pub fn block_swap_equal<T>(buf: &mut [T], a: usize, b: usize, n: usize) {
    if n == 0 || a == b {
        assert!(n == 0, "overlapping blocks at {a} with length {n}");
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    assert!(lo + n <= hi, "overlapping blocks [{lo}, {}) and [{hi}, {})", lo + n, hi + n);

    let (head, tail) = buf.split_at_mut(hi);
    head[lo..lo + n].swap_with_slice(&mut tail[..n]);
}

/// Swaps the adjacent blocks `[a, b)` and `[b, c)`, which may differ in length.
///
/// Afterwards the former `[b, c)` starts at `a` and the former `[a, b)` ends at `c`, which is
/// a rotation of `[a, c)` to the left by `b - a`. Runs in time linear in `c - a`.
pub fn block_swap_contiguous<T>(buf: &mut [T], mut a: usize, b: usize, mut c: usize) {
    debug_assert!(a <= b && b <= c, "unordered boundaries {a}, {b}, {c}");

    let mut d1 = b - a;
    let mut d2 = c - b;

    while min(d1, d2) > 0 {
        if d1 < d2 {
            // the head of the left block goes to the back, where it is final
            block_swap_equal(buf, a, c - d1, d1);
            c -= d1;
        } else {
            // the right block goes to the front, where it is final
            block_swap_equal(buf, a, b, d2);
            a += d2;
        }
        d1 = b - a;
        d2 = c - b;
    }
}

/// Swaps the blocks `[a, b)` and `[c, d)`, moving the gap `[b, c)` between them.
///
/// The range `[a, d)` ends up holding the former `[c, d)`, then the former `[b, c)`, then the
/// former `[a, b)`. Boundaries must satisfy `a <= b <= c <= d`.
pub fn block_swap_disjoint<T>(buf: &mut [T], a: usize, b: usize, c: usize, d: usize) {
    debug_assert!(a <= b && b <= c && c <= d, "unordered boundaries {a}, {b}, {c}, {d}");

    let d1 = b - a;
    let d2 = c - b;
    // [a, b)[b, c)[c, d) -> [b, c)[a, b)[c, d)
    block_swap_contiguous(buf, a, b, c);
    // -> [b, c)[c, d)[a, b)
    block_swap_contiguous(buf, c - d1, c, d);
    // -> [c, d)[b, c)[a, b)
    block_swap_contiguous(buf, a, a + d2, d - d1);
}
