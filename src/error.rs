use thiserror::Error;

/// Reasons a [`GrowVec`](crate::GrowVec) operation can be rejected.
///
/// Every rejected operation leaves the vector exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum VecError {
    /// The requested capacity does not fit in a valid allocation layout.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator could not provide memory for `capacity` elements.
    #[error("memory allocation failed for a capacity of {capacity} elements")]
    AllocFailed {
        /// The capacity that was requested.
        capacity: usize,
    },

    /// An index argument was outside the valid bounds.
    #[error("index {index} out of bounds for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the vector at the time of the call.
        len: usize,
    },

    /// A `(start, count)` range was outside the valid bounds.
    #[error("range of {count} elements starting at {start} out of bounds for length {len}")]
    RangeOutOfBounds {
        /// First index of the range.
        start: usize,
        /// Number of elements in the range.
        count: usize,
        /// The length of the vector at the time of the call.
        len: usize,
    },

    /// The vector holds no elements.
    #[error("vector is empty")]
    Empty,

    /// No element matched the searched value.
    #[error("element not found")]
    NotFound,
}

impl VecError {
    /// Returns `true` for the allocation failure variants
    /// ([`Self::CapacityOverflow`] and [`Self::AllocFailed`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::VecError;
    ///
    /// assert!(VecError::CapacityOverflow.is_alloc_failure());
    /// assert!(VecError::AllocFailed { capacity: 8 }.is_alloc_failure());
    /// assert!(!VecError::Empty.is_alloc_failure());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_alloc_failure(&self) -> bool {
        matches!(self, Self::CapacityOverflow | Self::AllocFailed { .. })
    }
}
