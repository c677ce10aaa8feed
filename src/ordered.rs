use crate::bit_reinterpret;

/// Maps a float to an unsigned key of the same width whose integer order matches the float order.
///
/// Negative values have all bits flipped, non-negative values only the sign bit, so `-0.0`
/// sorts directly below `0.0`.
pub trait ToOrdered: Copy {
    type Key: Ord + Copy;

    fn to_ordered(&self) -> Self::Key;
}

/// Inverse of [`ToOrdered`].
pub trait FromOrdered: Sized {
    type Key: Ord + Copy;

    fn from_ordered(key: Self::Key) -> Self;
}

impl ToOrdered for f32 {
    type Key = u32;

    #[inline(always)]
    fn to_ordered(&self) -> u32 {
        let bits: u32 = bit_reinterpret(*self);
        let mask = ((bits as i32 >> 31) as u32) | (1 << 31);
        bits ^ mask
    }
}

impl FromOrdered for f32 {
    type Key = u32;

    #[inline(always)]
    fn from_ordered(key: u32) -> Self {
        let mask = (key >> 31).wrapping_sub(1) | (1 << 31);
        bit_reinterpret(key ^ mask)
    }
}

impl ToOrdered for f64 {
    type Key = u64;

    #[inline(always)]
    fn to_ordered(&self) -> u64 {
        let bits: u64 = bit_reinterpret(*self);
        let mask = ((bits as i64 >> 63) as u64) | (1 << 63);
        bits ^ mask
    }
}

impl FromOrdered for f64 {
    type Key = u64;

    #[inline(always)]
    fn from_ordered(key: u64) -> Self {
        let mask = (key >> 63).wrapping_sub(1) | (1 << 63);
        bit_reinterpret(key ^ mask)
    }
}

#[inline(always)]
pub fn float_to_ordered(f: f32) -> u32 {
    f.to_ordered()
}

#[inline(always)]
pub fn ordered_to_float(u: u32) -> f32 {
    f32::from_ordered(u)
}

/// Encode every value of `values` into the caller provided `keys`.
pub fn to_ordered_keys<T: ToOrdered>(values: &[T], keys: &mut [T::Key]) {
    assert_eq!(values.len(), keys.len(), "key buffer length mismatch");
    keys.iter_mut().zip(values).for_each(|(k, v)| *k = v.to_ordered());
}

/// Decode every key of `keys` back into the caller provided `values`.
pub fn from_ordered_keys<T: FromOrdered>(keys: &[T::Key], values: &mut [T]) {
    assert_eq!(values.len(), keys.len(), "value buffer length mismatch");
    values.iter_mut().zip(keys).for_each(|(v, k)| *v = T::from_ordered(*k));
}
