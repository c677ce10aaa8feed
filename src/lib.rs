mod block_swap;
mod device;
mod numeric;
mod ordered;

pub use block_swap::*;
pub use device::*;
pub use numeric::*;
pub use ordered::*;

// icbrt extracts one base-8 digit per step, starting from the highest digit that can hold a
// set bit of a u32 (bits 30..33)
pub(crate) const ICBRT_DIGIT_BITS: u32 = 3;
pub(crate) const ICBRT_TOP_SHIFT: u32 = 30;
