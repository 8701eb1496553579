//! Small math helpers shared across the dayvec crates.

use num_traits::PrimInt;

/// Returns `true` if `i` is a positive power of two.
///
/// Uses the usual bit trick: a positive integer is a power of two iff it has
/// exactly one set bit, i.e. `i & (i - 1) == 0`. Zero is not a power of two.
///
/// Only integer types are accepted, so a fractional argument cannot be
/// silently truncated.
///
/// # Panics
///
/// Panics if `i` is negative.
///
/// # Example
///
/// ```ignore
/// assert!(!is_power_2(0u32));
/// assert!(is_power_2(1u32));
/// assert!(!is_power_2(3u32));
/// assert!(is_power_2(4u32));
/// ```
pub fn is_power_2<I: PrimInt>(i: I) -> bool {
    assert!(i >= I::zero(), "is_power_2: input must be non-negative");
    i > I::zero() && (i & (i - I::one())) == I::zero()
}
