use crate::VecError;

/// Capacity policy consulted whenever a [`GrowVec`](crate::GrowVec) runs out of room.
///
/// Single-element appends and bulk insertions grow by independent factors, each given
/// as a `(numerator, denominator)` pair. Override the constants to tune either one.
///
/// # Examples
///
/// ```
/// use grow_vec::{GrowVec, GrowthPolicy};
///
/// struct Doubling;
///
/// impl GrowthPolicy for Doubling {
///     const PUSH_GROWTH: (usize, usize) = (2, 1);
/// }
///
/// let mut vec = GrowVec::<u8, Doubling>::with_capacity_in_policy(4).unwrap();
/// for byte in 0..5 {
///     vec.push(byte).unwrap();
/// }
/// assert_eq!(vec.capacity(), 8);
/// ```
pub trait GrowthPolicy {
    /// Factor applied to the current capacity when a push finds the buffer full.
    const PUSH_GROWTH: (usize, usize) = (3, 2);

    /// Factor applied to the required length when a bulk operation needs more room.
    const BULK_GROWTH: (usize, usize) = (5, 4);

    /// Capacity given to an empty buffer on its first push.
    const MIN_NON_ZERO_CAP: usize = 4;

    /// Returns the capacity to grow to when a push finds `current` slots all in use.
    ///
    /// The result is always strictly greater than `current`.
    ///
    /// # Errors
    ///
    /// [`VecError::CapacityOverflow`] if `current + 1` overflows.
    #[inline]
    fn push_capacity(current: usize) -> Result<usize, VecError> {
        let required = current.checked_add(1).ok_or(VecError::CapacityOverflow)?;
        if current == 0 {
            return Ok(Self::MIN_NON_ZERO_CAP.max(required));
        }
        Ok(scale(current, Self::PUSH_GROWTH).map_or(required, |n| n.max(required)))
    }

    /// Returns the capacity to grow to when a bulk operation needs `required` slots.
    ///
    /// The result is never smaller than `required`.
    #[must_use]
    #[inline]
    fn bulk_capacity(required: usize) -> usize {
        scale(required, Self::BULK_GROWTH).map_or(required, |n| n.max(required))
    }
}

/// Multiplies `n` by `num / den`, rounding up. `None` on overflow or a zero denominator.
const fn scale(n: usize, (num, den): (usize, usize)) -> Option<usize> {
    if den == 0 {
        return None;
    }
    match n.checked_mul(num) {
        Some(product) => Some(product.div_ceil(den)),
        None => None,
    }
}

/// The default policy: 1.5x on push, 1.25x on bulk operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultGrowth;

impl GrowthPolicy for DefaultGrowth {}

/// Grows to exactly the number of slots needed, never over-allocating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExactGrowth;

impl GrowthPolicy for ExactGrowth {
    const PUSH_GROWTH: (usize, usize) = (1, 1);
    const BULK_GROWTH: (usize, usize) = (1, 1);
    const MIN_NON_ZERO_CAP: usize = 1;
}
