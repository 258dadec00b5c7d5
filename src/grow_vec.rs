use crate::{
    growth::{DefaultGrowth, GrowthPolicy},
    internal::{define_variants, empty_collection},
    raw_buf::RawBuf,
    VecError,
};

use alloc::{
    alloc::{handle_alloc_error, Layout},
    vec::Vec,
};
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Rev,
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr,
    slice::{self, SliceIndex},
};

#[cfg(feature = "std")]
use std::io::{self, Write};

/// A contiguous, heap-allocated vector whose growth is governed by `G`.
///
/// Elements live in `[0, len)` of a buffer with `capacity` slots. Operations that
/// need more room grow the buffer according to the [`GrowthPolicy`]; if that
/// allocation fails the operation returns an error and the vector is left exactly as it
/// was.
///
/// Any operation that can change the capacity may move the buffer, which invalidates
/// pointers previously obtained from [`Self::as_ptr`] or [`Self::as_mut_ptr`].
pub struct GrowVec<T, G: GrowthPolicy = DefaultGrowth> {
    /// The heap buffer holding the elements.
    buf: RawBuf<T>,

    /// The current number of initialized elements in the vector.
    len: usize,

    /// The growth policy; carries no data.
    _policy: PhantomData<fn() -> G>,
}

impl<T> GrowVec<T> {
    /// Creates a new, empty [`GrowVec`] without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let vec = GrowVec::<i32>::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.as_slice(), &[]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        empty_collection!()
    }

    /// Creates an empty [`GrowVec`] with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::CapacityOverflow`] or [`VecError::AllocFailed`] if the
    /// buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::{GrowVec, VecError};
    ///
    /// let vec = GrowVec::<i32>::with_capacity(4).unwrap();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 4);
    ///
    /// let too_big = GrowVec::<u64>::with_capacity(usize::MAX);
    /// assert_eq!(too_big.unwrap_err(), VecError::CapacityOverflow);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, VecError> {
        Self::with_capacity_in_policy(capacity)
    }
}

impl<T, G: GrowthPolicy> GrowVec<T, G> {
    /// Creates a new, empty [`GrowVec`] using growth policy `G`, without allocating.
    #[must_use]
    #[inline]
    pub const fn new_in_policy() -> Self {
        empty_collection!()
    }

    /// Creates an empty [`GrowVec`] using growth policy `G` with room for exactly
    /// `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::CapacityOverflow`] or [`VecError::AllocFailed`] if the
    /// buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::{ExactGrowth, GrowVec};
    ///
    /// let mut vec = GrowVec::<i32, ExactGrowth>::with_capacity_in_policy(2).unwrap();
    /// vec.extend_from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    #[inline]
    pub fn with_capacity_in_policy(capacity: usize) -> Result<Self, VecError> {
        Ok(Self {
            buf: RawBuf::with_capacity(capacity)?,
            len: 0,
            _policy: PhantomData,
        })
    }

    /// Drops every element and frees the buffer, leaving an empty vector with no
    /// allocation. The vector stays usable afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(16).unwrap();
    /// vec.push(1).unwrap();
    ///
    /// vec.release();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    ///
    /// vec.push(2).unwrap();
    /// assert_eq!(vec.as_slice(), &[2]);
    /// ```
    #[inline]
    pub fn release(&mut self) {
        self.clear();
        self.buf.release();
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// The pointer is valid for reads of `self.len()` elements until the next
    /// operation that changes the capacity.
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[must_use]
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns a mutable raw pointer to the vector's buffer.
    ///
    /// Using the pointer may be unsafe if:
    /// - you write to memory beyond the current length without later calling [`Self::set_len`]
    /// - you read from uninitialized elements (i.e. indices >= `self.len()`)
    /// - you keep it across an operation that changes the capacity
    ///
    /// For safe mutable access, use [`Self::as_mut_slice`] instead.
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[must_use]
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Forces the length of the vector.
    ///
    /// # Safety
    ///
    /// Calling this function when any of the following conditions are **`true`** is **undefined behavior**:
    /// - `new_len > self.capacity()`
    /// - the elements in `[0, new_len)` are not all initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(2).unwrap();
    /// let ptr = vec.as_mut_ptr();
    ///
    /// // SAFETY: slot 0 is inside the allocation
    /// unsafe { ptr.write(10) };
    /// // SAFETY: slot 1 is inside the allocation
    /// let ptr_1 = unsafe { ptr.add(1) };
    /// // SAFETY: writing to ptr_1 initializes the second element
    /// unsafe { ptr_1.write(20) };
    ///
    /// // SAFETY: we initialized 2 elements within a capacity of 2
    /// unsafe { vec.set_len(2) };
    /// assert_eq!(vec.as_slice(), &[10, 20]);
    /// ```
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity(), "buffer capacity exceeded");
        self.len = new_len;
    }

    /// Grows the buffer to exactly `capacity` slots if it is currently smaller.
    ///
    /// Does nothing if `capacity <= self.capacity()`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error, leaving the vector unchanged, if the buffer cannot
    /// grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(2).unwrap();
    /// vec.expand_to(10).unwrap();
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// vec.expand_to(5).unwrap();
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    #[inline]
    pub fn expand_to(&mut self, capacity: usize) -> Result<(), VecError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        self.buf.resize_to(capacity)
    }

    /// Makes room for one more element, growing by the policy's push factor.
    fn expand_for_push(&mut self) -> Result<(), VecError> {
        if self.len < self.capacity() {
            return Ok(());
        }
        let new_cap = G::push_capacity(self.capacity())?;
        self.buf.resize_to(new_cap)
    }

    /// Makes room for `required` elements in total, growing by the policy's bulk factor.
    fn expand_for_bulk(&mut self, required: usize) -> Result<(), VecError> {
        if required <= self.capacity() {
            return Ok(());
        }
        self.buf.resize_to(G::bulk_capacity(required))
    }

    /// Shrinks the capacity to the current length, freeing unused slots.
    ///
    /// An empty vector gives up its allocation entirely.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::AllocFailed`], leaving the vector unchanged, if the allocator
    /// cannot move the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(10).unwrap();
    /// vec.extend_from_slice(&[1, 2, 3]).unwrap();
    ///
    /// vec.shrink_to_fit().unwrap();
    /// assert_eq!(vec.capacity(), 3);
    ///
    /// vec.clear();
    /// vec.shrink_to_fit().unwrap();
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub fn shrink_to_fit(&mut self) -> Result<(), VecError> {
        if self.len < self.capacity() {
            self.buf.resize_to(self.len)?;
        }
        Ok(())
    }

    /// Shrinks the capacity to `capacity` if it is currently larger.
    ///
    /// Unlike [`Vec::shrink_to`], this may discard elements: when `capacity` is below
    /// the current length, the elements past it are dropped and the length becomes
    /// `capacity`. Does nothing if `capacity >= self.capacity()`.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::AllocFailed`] if the allocator cannot provide the smaller
    /// buffer. No element is dropped in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(10).unwrap();
    /// vec.extend_from_slice(&[1, 2, 3, 4]).unwrap();
    ///
    /// vec.shrink_to(6).unwrap();
    /// assert_eq!(vec.capacity(), 6);
    /// assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
    ///
    /// vec.shrink_to(2).unwrap();
    /// assert_eq!(vec.capacity(), 2);
    /// assert_eq!(vec.as_slice(), &[1, 2]);
    /// ```
    #[inline]
    pub fn shrink_to(&mut self, capacity: usize) -> Result<(), VecError> {
        if capacity >= self.capacity() {
            return Ok(());
        }
        if capacity >= self.len || !mem::needs_drop::<T>() {
            self.buf.resize_to(capacity)?;
            self.len = self.len.min(capacity);
            return Ok(());
        }

        // The tail still needs dropping, so move the kept prefix into a fresh buffer
        // and only then run the destructors.
        let mut fresh = RawBuf::<T>::with_capacity(capacity)?;
        // SAFETY: the first `capacity` elements are initialized and the fresh buffer
        // holds exactly `capacity` slots; the two allocations are distinct
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), fresh.ptr(), capacity);
        }
        let tail_len = self.len - capacity;
        // SAFETY: capacity < self.len, so the offset stays inside the old allocation
        let tail_start = unsafe { self.as_mut_ptr().add(capacity) };
        let tail = ptr::slice_from_raw_parts_mut(tail_start, tail_len);

        mem::swap(&mut self.buf, &mut fresh);
        self.len = capacity;

        // SAFETY: the tail elements were not copied and are still initialized in the
        // old allocation, which `fresh` keeps alive until the end of this scope
        unsafe {
            ptr::drop_in_place(tail);
        }
        drop(fresh);
        Ok(())
    }

    /// Appends an element without checking capacity.
    ///
    /// See also [`Self::push`] for the growing version.
    ///
    /// # Safety
    ///
    /// Calling this function when `self.len() >= self.capacity()` is **undefined behavior**.
    /// Use [`Self::expand_to`] beforehand to guarantee room.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.expand_to(3).unwrap();
    /// for i in 0..3 {
    ///     // SAFETY: capacity 3 was reserved above
    ///     unsafe { vec.push_unchecked(i) };
    /// }
    /// assert_eq!(vec.as_slice(), &[0, 1, 2]);
    /// ```
    #[inline]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(!self.is_full(), "buffer capacity exceeded");
        // SAFETY: Caller guarantees self.len < capacity
        let dst = unsafe { self.as_mut_ptr().add(self.len) };
        // SAFETY: Writing to valid uninitialized slot
        unsafe {
            dst.write(value);
        }
        self.len += 1;
    }

    /// Appends an element, growing the buffer by the policy's push factor when full.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the buffer must grow and cannot. The vector is
    /// unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(4).unwrap();
    /// for i in 0..5 {
    ///     vec.push(i).unwrap();
    /// }
    ///
    /// assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
    /// assert_eq!(vec.capacity(), 6);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), VecError> {
        self.expand_for_push()?;
        // SAFETY: expand_for_push guarantees self.len < capacity
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    // pop
    define_variants! {
        fn pop(self: &mut Self) -> T,

        normal_brief: "Removes and returns the last element",
        try_brief: "Attempts to remove and return the last element",
        unchecked_brief_suffix: "without checking for emptiness",
        ub_conditions: {
            self.is_empty() => "vector is empty" => VecError::Empty,
        },
        unchecked_fn: pop_unchecked,
        try_fn: try_pop,
        body: {
            self.len -= 1;
            // SAFETY: self.len was > 0, now points to last initialized element
            let ptr = unsafe { self.as_ptr().add(self.len) };
            // SAFETY: Reading from initialized element that is no longer counted
            unsafe { ptr.read() }
        },
        examples: {
            normal: {
                /// Basic usage:
                ///
                /// ```
                /// use grow_vec::GrowVec;
                ///
                /// let mut vec = GrowVec::<i32>::new();
                /// vec.extend_from_slice(&[1, 2, 3]).unwrap();
                ///
                /// assert_eq!(vec.pop(), 3);
                /// assert_eq!(vec.len(), 2);
                /// assert_eq!(vec.pop(), 2);
                /// assert_eq!(vec.pop(), 1);
                /// assert!(vec.is_empty());
                /// ```
                ///
                /// A panic if the vector is empty:
                ///
                /// ```should_panic
                /// use grow_vec::GrowVec;
                ///
                /// let mut vec = GrowVec::<i32>::new();
                ///
                /// // this will panic at runtime
                /// vec.pop();
                /// ```
            }
            try: {
                /// ```
                /// use grow_vec::{GrowVec, VecError};
                ///
                /// let mut vec = GrowVec::<i32>::new();
                /// assert_eq!(vec.try_pop(), Err(VecError::Empty));
                ///
                /// vec.push(42).unwrap();
                /// assert_eq!(vec.try_pop(), Ok(42));
                /// assert_eq!(vec.try_pop(), Err(VecError::Empty));
                /// ```
            }
        }
    }

    // remove by index
    define_variants! {
        fn remove(self: &mut Self, index: usize) -> T,

        normal_brief: "Removes and returns the element at `index`, shifting all elements after it to the left",
        try_brief: "Attempts to remove and return the element at `index`, shifting all elements after it to the left",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            index >= self.len() => "index out of bounds" => VecError::OutOfRange { index, len: self.len },
        },
        unchecked_fn: remove_unchecked,
        try_fn: try_remove,
        body: {
            // SAFETY: Caller guarantees index < self.len
            let ptr_to_remove = unsafe { self.as_mut_ptr().add(index) };
            // SAFETY: Reading initialized element at valid index
            let result = unsafe { ptr::read(ptr_to_remove) };
            // SAFETY: Computing source pointer for shift
            let src = unsafe { ptr_to_remove.add(1) };
            // SAFETY: Shifting remaining elements left by 1; ranges may overlap
            unsafe {
                ptr::copy(src, ptr_to_remove, self.len - index - 1);
            }
            self.len -= 1;
            result
        },
        examples: {
            normal: {
                /// Basic usage:
                ///
                /// ```
                /// use grow_vec::GrowVec;
                ///
                /// let mut vec = GrowVec::<i32>::new();
                /// vec.extend_from_slice(&[1, 2, 3]).unwrap();
                ///
                /// assert_eq!(vec.remove(1), 2);
                /// assert_eq!(vec.as_slice(), &[1, 3]);
                /// ```
                ///
                /// A panic if the index is out of bounds:
                ///
                /// ```should_panic
                /// use grow_vec::GrowVec;
                ///
                /// let mut vec = GrowVec::<i32>::new();
                /// vec.push(1).unwrap();
                ///
                /// // this will panic at runtime
                /// vec.remove(1);
                /// ```
            }
            try: {
                /// ```
                /// use grow_vec::{GrowVec, VecError};
                ///
                /// let mut vec = GrowVec::<i32>::new();
                /// vec.push(10).unwrap();
                ///
                /// assert_eq!(vec.try_remove(0), Ok(10));
                /// assert_eq!(vec.try_remove(0), Err(VecError::OutOfRange { index: 0, len: 0 }));
                /// ```
            }
        }
    }

    /// Exchanges the elements at positions `a` and `b`, without bounds checking.
    ///
    /// See also [`Self::swap`] for the safe version and [`Self::try_swap`] for the [`Result`] returning version.
    ///
    /// # Safety
    ///
    /// Calling this function when any of the following conditions are **`true`** is **undefined behavior**:
    /// - `a >= self.len()`
    /// - `b >= self.len()`
    #[inline]
    pub unsafe fn swap_unchecked(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.len && b < self.len, "index out of bounds");
        let base = self.as_mut_ptr();
        // SAFETY: Caller guarantees a < self.len
        let pa = unsafe { base.add(a) };
        // SAFETY: Caller guarantees b < self.len
        let pb = unsafe { base.add(b) };
        // SAFETY: Both point to initialized elements; ptr::swap allows a == b
        unsafe {
            ptr::swap(pa, pb);
        }
    }

    /// Exchanges the elements at positions `a` and `b`.
    ///
    /// See also [`Self::swap_unchecked`] for the unchecked version and [`Self::try_swap`] for the [`Result`] returning version.
    ///
    /// # Panics
    ///
    /// - "index out of bounds" if `a >= self.len()` or `b >= self.len()`
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<char>::new();
    /// vec.extend_from_slice(&['a', 'b', 'c']).unwrap();
    ///
    /// vec.swap(0, 2);
    /// assert_eq!(vec.as_slice(), &['c', 'b', 'a']);
    /// ```
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        assert!(a < self.len && b < self.len, "index out of bounds");
        // SAFETY: both indices were checked above
        unsafe { self.swap_unchecked(a, b) };
    }

    /// Attempts to exchange the elements at positions `a` and `b`.
    ///
    /// See also [`Self::swap`] for the panic-on-error version and [`Self::swap_unchecked`] for the unchecked version.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::OutOfRange`] naming the first offending index, without
    /// modifying the vector, if `a` or `b` is not below `self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::{GrowVec, VecError};
    ///
    /// let mut vec = GrowVec::<char>::new();
    /// vec.extend_from_slice(&['a', 'b']).unwrap();
    ///
    /// assert_eq!(vec.try_swap(0, 1), Ok(()));
    /// assert_eq!(vec.try_swap(0, 2), Err(VecError::OutOfRange { index: 2, len: 2 }));
    /// assert_eq!(vec.as_slice(), &['b', 'a']);
    /// ```
    #[inline]
    pub fn try_swap(&mut self, a: usize, b: usize) -> Result<(), VecError> {
        let len = self.len;
        if let Some(index) = [a, b].into_iter().find(|&index| index >= len) {
            return Err(VecError::OutOfRange { index, len });
        }
        // SAFETY: both indices were checked above
        unsafe { self.swap_unchecked(a, b) };
        Ok(())
    }

    /// Reverses the order of the elements in place.
    ///
    /// Applying it twice restores the original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.extend_from_slice(&[1, 2, 3, 4, 5]).unwrap();
    ///
    /// vec.reverse();
    /// assert_eq!(vec.as_slice(), &[5, 4, 3, 2, 1]);
    /// ```
    #[inline]
    pub fn reverse(&mut self) {
        let len = self.len;
        for i in 0..len / 2 {
            // SAFETY: i < len / 2 and len - 1 - i >= len / 2, both below len
            unsafe { self.swap_unchecked(i, len - 1 - i) };
        }
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.extend_from_slice(&[4, 8, 8, 15]).unwrap();
    ///
    /// assert_eq!(vec.find(&8), Some(1));
    /// assert_eq!(vec.find(&16), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Removes the `count` elements starting at `index`, shifting the remainder left.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::RangeOutOfBounds`], without modifying the vector, if
    /// `index + count > self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::{GrowVec, VecError};
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.extend_from_slice(&[10, 20, 30, 40]).unwrap();
    ///
    /// vec.splice(1, 2).unwrap();
    /// assert_eq!(vec.as_slice(), &[10, 40]);
    ///
    /// assert_eq!(
    ///     vec.splice(1, 2),
    ///     Err(VecError::RangeOutOfBounds { start: 1, count: 2, len: 2 })
    /// );
    /// assert_eq!(vec.as_slice(), &[10, 40]);
    /// ```
    #[inline]
    pub fn splice(&mut self, index: usize, count: usize) -> Result<(), VecError> {
        let len = self.len;
        if index > len || count > len - index {
            return Err(VecError::RangeOutOfBounds {
                start: index,
                count,
                len,
            });
        }

        // SAFETY: index <= len, so the offset stays inside the allocation
        let start = unsafe { self.as_mut_ptr().add(index) };
        let removed = ptr::slice_from_raw_parts_mut(start, count);
        self.len = index;
        // SAFETY: [index, index + count) are initialized and no longer counted in len
        unsafe {
            ptr::drop_in_place(removed);
        }
        // SAFETY: index + count <= len
        let src = unsafe { start.add(count) };
        // SAFETY: Shifting the tail left by count; ranges may overlap
        unsafe {
            ptr::copy(src, start, len - index - count);
        }
        self.len = len - count;
        Ok(())
    }

    /// Removes and returns the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::NotFound`] if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::{GrowVec, VecError};
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.extend_from_slice(&[1, 2, 3, 2]).unwrap();
    ///
    /// assert_eq!(vec.remove_item(&2), Ok(2));
    /// assert_eq!(vec.as_slice(), &[1, 3, 2]);
    /// assert_eq!(vec.remove_item(&7), Err(VecError::NotFound));
    /// ```
    #[inline]
    pub fn remove_item(&mut self, value: &T) -> Result<T, VecError>
    where
        T: PartialEq,
    {
        let index = self.find(value).ok_or(VecError::NotFound)?;
        // SAFETY: find only returns indices below self.len
        Ok(unsafe { self.remove_unchecked(index) })
    }

    /// Inserts an element at position `index`, shifting all elements after it right.
    ///
    /// Grows by the policy's bulk factor when the buffer is full.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::OutOfRange`] if `index > self.len()`, or an allocation error
    /// if the buffer cannot grow. The vector is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::{GrowVec, VecError};
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.extend_from_slice(&[1, 2, 3]).unwrap();
    ///
    /// vec.insert(0, 99).unwrap();
    /// assert_eq!(vec.as_slice(), &[99, 1, 2, 3]);
    ///
    /// assert_eq!(vec.insert(9, 0), Err(VecError::OutOfRange { index: 9, len: 4 }));
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), VecError> {
        let len = self.len;
        if index > len {
            return Err(VecError::OutOfRange { index, len });
        }
        let required = len.checked_add(1).ok_or(VecError::CapacityOverflow)?;
        self.expand_for_bulk(required)?;

        // SAFETY: index <= len < capacity
        let src = unsafe { self.as_mut_ptr().add(index) };
        // SAFETY: index + 1 <= capacity
        let dst = unsafe { src.add(1) };
        // SAFETY: Shifting [index, len) right by 1; the last slot fits in capacity
        unsafe {
            ptr::copy(src, dst, len - index);
        }
        // SAFETY: The slot at index was vacated by the shift
        unsafe {
            src.write(element);
        }
        self.len = len + 1;
        Ok(())
    }

    /// Inserts clones of `items` starting at position `index`, shifting all elements
    /// after it right.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::OutOfRange`] if `index > self.len()`, or an allocation error
    /// if the buffer cannot grow. The vector is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.extend_from_slice(&[1, 5]).unwrap();
    ///
    /// vec.insert_slice(1, &[2, 3, 4]).unwrap();
    /// assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    pub fn insert_slice(&mut self, index: usize, items: &[T]) -> Result<(), VecError>
    where
        T: Clone,
    {
        let len = self.len;
        if index > len {
            return Err(VecError::OutOfRange { index, len });
        }
        let count = items.len();
        let required = len.checked_add(count).ok_or(VecError::CapacityOverflow)?;
        self.expand_for_bulk(required)?;

        // SAFETY: index <= len <= capacity
        let gap = unsafe { self.as_mut_ptr().add(index) };
        // SAFETY: index + count <= len + count <= capacity
        let tail_dst = unsafe { gap.add(count) };
        // A panicking clone leaks the shifted tail instead of exposing the gap.
        self.len = index;
        // SAFETY: Shifting [index, len) right by count; it fits in capacity
        unsafe {
            ptr::copy(gap, tail_dst, len - index);
        }
        for (offset, item) in items.iter().enumerate() {
            // SAFETY: offset < count, so the slot lies inside the gap
            let slot = unsafe { gap.add(offset) };
            // SAFETY: Gap slots are vacated and writable
            unsafe {
                slot.write(item.clone());
            }
        }
        self.len = required;
        Ok(())
    }

    /// Appends clones of every element of `items`.
    ///
    /// Grows by the policy's bulk factor when the buffer cannot hold them all.
    ///
    /// # Errors
    ///
    /// Returns an allocation error, leaving the vector unchanged, if the buffer cannot
    /// grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(1).unwrap();
    /// vec.push(1).unwrap();
    /// vec.extend_from_slice(&[2, 3, 4]).unwrap();
    ///
    /// assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    #[inline]
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), VecError>
    where
        T: Clone,
    {
        let required = self
            .len
            .checked_add(items.len())
            .ok_or(VecError::CapacityOverflow)?;
        self.expand_for_bulk(required)?;
        for item in items {
            // SAFETY: expand_for_bulk reserved room for every item
            unsafe { self.push_unchecked(item.clone()) };
        }
        Ok(())
    }

    /// Retains only elements that satisfy the predicate, preserving their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.extend_from_slice(&[1, 2, 3, 4, 5]).unwrap();
    ///
    /// vec.retain(|x| *x > 2);
    /// assert_eq!(vec.as_slice(), &[3, 4, 5]);
    ///
    /// vec.retain(|_| false);
    /// assert!(vec.is_empty());
    /// ```
    #[inline]
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let len = self.len;
        // A panicking predicate or destructor leaks the unvisited elements.
        self.len = 0;
        let base = self.as_mut_ptr();
        let mut kept = 0;
        for i in 0..len {
            // SAFETY: i < len, so this is a valid and initialized element
            let ptr = unsafe { base.add(i) };
            // SAFETY: ptr points to valid initialized element
            let elem = unsafe { &mut *ptr };
            if f(elem) {
                if kept != i {
                    // SAFETY: kept < i < len, so the destination is inside the buffer
                    let dst = unsafe { base.add(kept) };
                    // SAFETY: Moving a single element from i to the vacated slot kept
                    unsafe {
                        ptr::copy_nonoverlapping(ptr, dst, 1);
                    }
                }
                kept += 1;
                self.len = kept;
            } else {
                // SAFETY: Dropping initialized element that won't be kept
                unsafe {
                    ptr::drop_in_place(ptr);
                }
            }
        }
        self.len = kept;
    }

    /// Sorts the elements with a three-way comparator.
    ///
    /// The sort is unstable: elements that compare equal may be reordered. See
    /// [`crate::compare`] for ready-made comparators.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::{compare, GrowVec};
    ///
    /// let mut vec = GrowVec::<i64>::new();
    /// vec.extend_from_slice(&[3, 1, 2]).unwrap();
    ///
    /// vec.sort_with(compare::i64_ascending);
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    ///
    /// vec.sort_with(compare::i64_descending);
    /// assert_eq!(vec.as_slice(), &[3, 2, 1]);
    ///
    /// vec.sort_with(|a, b| (a % 2).cmp(&(b % 2)).then(a.cmp(b)));
    /// assert_eq!(vec.as_slice(), &[2, 1, 3]);
    /// ```
    #[inline]
    pub fn sort_with<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(compare);
    }

    /// Returns an independent copy holding clones of every element, with a capacity of
    /// exactly `self.len()`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the new buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut src = GrowVec::<i32>::with_capacity(8).unwrap();
    /// src.extend_from_slice(&[1, 2, 3]).unwrap();
    ///
    /// let mut dest = src.try_clone().unwrap();
    /// assert_eq!(dest.capacity(), 3);
    ///
    /// dest.push(4).unwrap();
    /// assert_eq!(src.as_slice(), &[1, 2, 3]);
    /// assert_eq!(dest.as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn try_clone(&self) -> Result<Self, VecError>
    where
        T: Clone,
    {
        let mut out = Self::with_capacity_in_policy(self.len)?;
        for item in self {
            // SAFETY: out has exactly self.len slots, one per cloned element
            unsafe { out.push_unchecked(item.clone()) };
        }
        Ok(out)
    }

    /// Replaces the contents with clones of `src`, reusing the existing buffer.
    ///
    /// The buffer only grows if it is smaller than `src.len()`; spare capacity beyond
    /// the new length is kept.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the buffer must grow and cannot. The vector is
    /// unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut src = GrowVec::<i32>::new();
    /// src.extend_from_slice(&[7, 8]).unwrap();
    ///
    /// let mut dest = GrowVec::<i32>::with_capacity(10).unwrap();
    /// dest.extend_from_slice(&[1, 2, 3, 4]).unwrap();
    ///
    /// dest.wipe_clone_from(&src).unwrap();
    /// assert_eq!(dest.as_slice(), &[7, 8]);
    /// assert_eq!(dest.capacity(), 10);
    /// ```
    #[inline]
    pub fn wipe_clone_from<H: GrowthPolicy>(&mut self, src: &GrowVec<T, H>) -> Result<(), VecError>
    where
        T: Clone,
    {
        self.expand_to(src.len())?;
        self.clear();
        for item in src {
            // SAFETY: expand_to reserved at least src.len() slots and self is empty
            unsafe { self.push_unchecked(item.clone()) };
        }
        Ok(())
    }

    // forward range traversal
    define_variants! {
        fn forward(self: &Self, start: usize, count: usize) -> slice::Iter<'_, T>,

        normal_brief: "Returns an iterator over the `count` elements starting at `start`, in ascending index order",
        try_brief: "Attempts to return an iterator over the `count` elements starting at `start`, in ascending index order",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            start > self.len => "range start out of bounds" => VecError::RangeOutOfBounds { start, count, len: self.len },
            count > self.len - start => "range end out of bounds" => VecError::RangeOutOfBounds { start, count, len: self.len },
        },
        unchecked_fn: forward_unchecked,
        try_fn: try_forward,
        body: {
            // SAFETY: Caller guarantees start <= self.len
            let first = unsafe { self.as_ptr().add(start) };
            // SAFETY: Caller guarantees [start, start + count) are initialized
            let items = unsafe { slice::from_raw_parts(first, count) };
            items.iter()
        },
        examples: {
            normal: {
                /// Elements can be read by reference, or by value with `copied`:
                ///
                /// ```
                /// use grow_vec::GrowVec;
                ///
                /// let vec: GrowVec<i32> = (0..10).collect();
                ///
                /// let window: Vec<i32> = vec.forward(2, 3).copied().collect();
                /// assert_eq!(window, [2, 3, 4]);
                /// ```
                ///
                /// A panic if the range runs past the end:
                ///
                /// ```should_panic
                /// use grow_vec::GrowVec;
                ///
                /// let vec: GrowVec<i32> = (0..4).collect();
                ///
                /// // this will panic at runtime
                /// vec.forward(2, 3);
                /// ```
            }
            try: {
                /// ```
                /// use grow_vec::{GrowVec, VecError};
                ///
                /// let vec: GrowVec<i32> = (0..4).collect();
                ///
                /// assert_eq!(vec.try_forward(1, 3).unwrap().sum::<i32>(), 6);
                /// assert_eq!(
                ///     vec.try_forward(2, 3).unwrap_err(),
                ///     VecError::RangeOutOfBounds { start: 2, count: 3, len: 4 }
                /// );
                /// ```
            }
        }
    }

    // forward range traversal, mutable
    define_variants! {
        fn forward_mut(self: &mut Self, start: usize, count: usize) -> slice::IterMut<'_, T>,

        normal_brief: "Returns a mutable iterator over the `count` elements starting at `start`, in ascending index order",
        try_brief: "Attempts to return a mutable iterator over the `count` elements starting at `start`, in ascending index order",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            start > self.len => "range start out of bounds" => VecError::RangeOutOfBounds { start, count, len: self.len },
            count > self.len - start => "range end out of bounds" => VecError::RangeOutOfBounds { start, count, len: self.len },
        },
        unchecked_fn: forward_mut_unchecked,
        try_fn: try_forward_mut,
        body: {
            // SAFETY: Caller guarantees start <= self.len
            let first = unsafe { self.as_mut_ptr().add(start) };
            // SAFETY: Caller guarantees [start, start + count) are initialized
            let items = unsafe { slice::from_raw_parts_mut(first, count) };
            items.iter_mut()
        },
        examples: {
            normal: {
                /// ```
                /// use grow_vec::GrowVec;
                ///
                /// let mut vec: GrowVec<i32> = (0..5).collect();
                /// for x in vec.forward_mut(1, 2) {
                ///     *x *= 10;
                /// }
                /// assert_eq!(vec.as_slice(), &[0, 10, 20, 3, 4]);
                /// ```
            }
            try: {
                /// ```
                /// use grow_vec::GrowVec;
                ///
                /// let mut vec: GrowVec<i32> = (0..5).collect();
                /// assert!(vec.try_forward_mut(5, 0).is_ok());
                /// assert!(vec.try_forward_mut(6, 0).is_err());
                /// ```
            }
        }
    }

    // backward range traversal
    define_variants! {
        fn backward(self: &Self, start: usize, count: usize) -> Rev<slice::Iter<'_, T>>,

        normal_brief: "Returns an iterator over `count` elements in descending index order, beginning at `start`",
        try_brief: "Attempts to return an iterator over `count` elements in descending index order, beginning at `start`",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            count != 0 && start >= self.len => "range start out of bounds" => VecError::RangeOutOfBounds { start, count, len: self.len },
            count != 0 && count > start + 1 => "range extends below index zero" => VecError::RangeOutOfBounds { start, count, len: self.len },
        },
        unchecked_fn: backward_unchecked,
        try_fn: try_backward,
        body: {
            let low = if count == 0 { 0 } else { start + 1 - count };
            // SAFETY: Caller guarantees [low, start] lies within [0, self.len)
            unsafe { self.forward_unchecked(low, count) }.rev()
        },
        examples: {
            normal: {
                /// ```
                /// use grow_vec::GrowVec;
                ///
                /// let vec: GrowVec<i32> = (0..10).collect();
                ///
                /// let window: Vec<i32> = vec.backward(6, 3).copied().collect();
                /// assert_eq!(window, [6, 5, 4]);
                ///
                /// let last = vec.len() - 1;
                /// let everything: Vec<i32> = vec.backward(last, vec.len()).copied().collect();
                /// assert_eq!(everything, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
                /// ```
                ///
                /// A panic if the range would run below index zero:
                ///
                /// ```should_panic
                /// use grow_vec::GrowVec;
                ///
                /// let vec: GrowVec<i32> = (0..4).collect();
                ///
                /// // this will panic at runtime
                /// vec.backward(1, 3);
                /// ```
            }
            try: {
                /// ```
                /// use grow_vec::GrowVec;
                ///
                /// let vec: GrowVec<i32> = GrowVec::new();
                /// assert_eq!(vec.try_backward(0, 0).unwrap().count(), 0);
                /// assert!(vec.try_backward(0, 1).is_err());
                /// ```
            }
        }
    }

    // backward range traversal, mutable
    define_variants! {
        fn backward_mut(self: &mut Self, start: usize, count: usize) -> Rev<slice::IterMut<'_, T>>,

        normal_brief: "Returns a mutable iterator over `count` elements in descending index order, beginning at `start`",
        try_brief: "Attempts to return a mutable iterator over `count` elements in descending index order, beginning at `start`",
        unchecked_brief_suffix: "without bounds checking",
        ub_conditions: {
            count != 0 && start >= self.len => "range start out of bounds" => VecError::RangeOutOfBounds { start, count, len: self.len },
            count != 0 && count > start + 1 => "range extends below index zero" => VecError::RangeOutOfBounds { start, count, len: self.len },
        },
        unchecked_fn: backward_mut_unchecked,
        try_fn: try_backward_mut,
        body: {
            let low = if count == 0 { 0 } else { start + 1 - count };
            // SAFETY: Caller guarantees [low, start] lies within [0, self.len)
            unsafe { self.forward_mut_unchecked(low, count) }.rev()
        },
        examples: {
            normal: {
                /// ```
                /// use grow_vec::GrowVec;
                ///
                /// let mut vec: GrowVec<i32> = (0..4).collect();
                /// let mut next = 100;
                /// for x in vec.backward_mut(3, 2) {
                ///     *x = next;
                ///     next += 1;
                /// }
                /// assert_eq!(vec.as_slice(), &[0, 1, 101, 100]);
                /// ```
            }
            try: {
                /// ```
                /// use grow_vec::GrowVec;
                ///
                /// let mut vec: GrowVec<i32> = (0..4).collect();
                /// assert!(vec.try_backward_mut(4, 1).is_err());
                /// ```
            }
        }
    }

    /// Returns the contents as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.extend_from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(vec.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: First self.len elements are initialized
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the contents as a mutable slice.
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: First self.len elements are initialized
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns an iterator over all elements, front to back.
    ///
    /// This is the bounds-checked default; see [`Self::forward`] and
    /// [`Self::backward`] for sub-ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let vec: GrowVec<i32> = (1..=3).collect();
    /// let sum: i32 = vec.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each value, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec: GrowVec<i32> = (1..=3).collect();
    /// for x in vec.iter_mut() {
    ///     *x *= 2;
    /// }
    /// assert_eq!(vec.as_slice(), &[2, 4, 6]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Truncates the vector to `len` elements, dropping the rest.
    ///
    /// Does nothing if `len >= self.len()`. The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec: GrowVec<i32> = (1..=3).collect();
    ///
    /// vec.truncate(2);
    /// assert_eq!(vec.as_slice(), &[1, 2]);
    ///
    /// vec.truncate(10);
    /// assert_eq!(vec.len(), 2);
    /// ```
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // SAFETY: len < self.len, so the offset stays inside the buffer
        let tail_start = unsafe { self.as_mut_ptr().add(len) };
        let tail = ptr::slice_from_raw_parts_mut(tail_start, self.len - len);
        self.len = len;
        // SAFETY: The tail is initialized and no longer counted in self.len
        unsafe {
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element, keeping the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(8).unwrap();
    /// vec.extend_from_slice(&[1, 2]).unwrap();
    ///
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Returns the current length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[expect(clippy::inline_always, reason = "this method is trivial")]
    #[inline(always)]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of slots that can be filled without growing.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(5).unwrap();
    /// vec.extend_from_slice(&[1, 2]).unwrap();
    /// assert_eq!(vec.remaining_capacity(), 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn remaining_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns `true` if the vector is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next push has to grow the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::with_capacity(1).unwrap();
    /// assert!(!vec.is_full());
    /// vec.push(1).unwrap();
    /// assert!(vec.is_full());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }
}

/// Reports a failed allocation the way the standard collections do.
#[cold]
fn alloc_failure<T>(error: VecError) -> ! {
    if let VecError::AllocFailed { capacity } = error {
        if let Ok(layout) = Layout::array::<T>(capacity) {
            handle_alloc_error(layout)
        }
    }
    panic!("{error}")
}

impl<T> Default for GrowVec<T> {
    /// Returns a new empty `GrowVec<T>`.
    ///
    /// This is equivalent to [`Self::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G: GrowthPolicy> Drop for GrowVec<T, G> {
    /// Drops every element; the buffer frees itself afterwards.
    #[inline]
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'vec, T, G: GrowthPolicy> IntoIterator for &'vec GrowVec<T, G> {
    type Item = &'vec T;
    type IntoIter = slice::Iter<'vec, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'vec, T, G: GrowthPolicy> IntoIterator for &'vec mut GrowVec<T, G> {
    type Item = &'vec mut T;
    type IntoIter = slice::IterMut<'vec, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator for [`GrowVec`]: supports double-ended iteration and is exact-size.
pub struct IntoIter<T, G: GrowthPolicy = DefaultGrowth> {
    /// The current front index of the iterator.
    start: usize,

    /// The current back index of the iterator.
    end: usize,

    /// The owned vector being iterated; its length is zero so it only frees the buffer.
    v: GrowVec<T, G>,
}

impl<T, G: GrowthPolicy> Iterator for IntoIter<T, G> {
    type Item = T;

    /// Returns the next element in the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let vec: GrowVec<i32> = (1..=3).collect();
    ///
    /// let mut iter = vec.into_iter();
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), Some(3));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    fn next(&mut self) -> Option<T> {
        (self.start < self.end).then(|| {
            let idx = self.start;
            self.start += 1;
            // SAFETY: idx is within [start, end), which are valid initialized elements
            let elem = unsafe { self.v.as_ptr().add(idx) };
            // SAFETY: Taking ownership of an initialized element that will not be read again
            unsafe { elem.read() }
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.end - self.start;
        (rem, Some(rem))
    }
}

impl<T, G: GrowthPolicy> DoubleEndedIterator for IntoIter<T, G> {
    /// Returns the next element from the back of the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let vec: GrowVec<i32> = (1..=3).collect();
    ///
    /// let mut iter = vec.into_iter();
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next_back(), Some(3));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        (self.start < self.end).then(|| {
            self.end -= 1;
            // SAFETY: end is within [start, end), which are valid initialized elements
            let elem = unsafe { self.v.as_ptr().add(self.end) };
            // SAFETY: Taking ownership of an initialized element that will not be read again
            unsafe { elem.read() }
        })
    }
}

impl<T, G: GrowthPolicy> ExactSizeIterator for IntoIter<T, G> {}

impl<T, G: GrowthPolicy> Drop for IntoIter<T, G> {
    /// Drops any elements that were not yielded, then frees the buffer.
    #[inline]
    fn drop(&mut self) {
        // SAFETY: start <= end <= capacity, so the offset stays inside the buffer
        let rest_start = unsafe { self.v.as_mut_ptr().add(self.start) };
        let rest = ptr::slice_from_raw_parts_mut(rest_start, self.end - self.start);
        self.start = self.end;
        // SAFETY: Elements in [start, end) are initialized and have not been yielded
        unsafe {
            ptr::drop_in_place(rest);
        }
    }
}

impl<T, G: GrowthPolicy> IntoIterator for GrowVec<T, G> {
    type Item = T;
    type IntoIter = IntoIter<T, G>;

    /// Converts the vector into an owning iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let vec: GrowVec<i32> = (1..=3).collect();
    ///
    /// let collected: Vec<_> = vec.into_iter().collect();
    /// assert_eq!(collected, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        // The iterator now owns the elements; the vector only keeps the buffer alive.
        self.len = 0;
        IntoIter {
            start: 0,
            end: len,
            v: self,
        }
    }
}

impl<T, G: GrowthPolicy> Deref for GrowVec<T, G> {
    type Target = [T];

    /// Returns the contents as a slice.
    ///
    /// This is equivalent to [`Self::as_slice`].
    #[inline]
    fn deref(&self) -> &Self::Target {
        Self::as_slice(self)
    }
}

impl<T, G: GrowthPolicy> DerefMut for GrowVec<T, G> {
    /// Returns the contents as a mutable slice.
    ///
    /// This is equivalent to [`Self::as_mut_slice`].
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        Self::as_mut_slice(self)
    }
}

impl<T, G: GrowthPolicy> AsRef<[T]> for GrowVec<T, G> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, G: GrowthPolicy> AsMut<[T]> for GrowVec<T, G> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, G: GrowthPolicy> fmt::Debug for GrowVec<T, G> {
    /// Formats the contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let vec: GrowVec<i32> = (1..=3).collect();
    /// assert_eq!(format!("{:?}", vec), "[1, 2, 3]");
    /// ```
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: PartialEq, G: GrowthPolicy, H: GrowthPolicy> PartialEq<GrowVec<T, H>> for GrowVec<T, G> {
    /// Checks if two vectors are equal element by element, regardless of capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let v1: GrowVec<i32> = [1, 2, 3].into_iter().collect();
    /// let mut v2 = GrowVec::<i32>::with_capacity(32).unwrap();
    /// v2.extend_from_slice(&[1, 2, 3]).unwrap();
    ///
    /// assert_eq!(v1, v2);
    /// ```
    #[inline]
    fn eq(&self, other: &GrowVec<T, H>) -> bool {
        **self == **other
    }
}

impl<T: Eq, G: GrowthPolicy> Eq for GrowVec<T, G> {}

impl<T: PartialOrd, G: GrowthPolicy> PartialOrd for GrowVec<T, G> {
    /// Performs lexicographic ordering on the vector contents.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Ord, G: GrowthPolicy> Ord for GrowVec<T, G> {
    /// Compares two vectors lexicographically.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let v1: GrowVec<i32> = [1, 2, 3].into_iter().collect();
    /// let v2: GrowVec<i32> = [1, 2, 4].into_iter().collect();
    ///
    /// assert!(v1 < v2);
    /// assert!(v1 <= v1.clone());
    /// ```
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Hash, G: GrowthPolicy> Hash for GrowVec<T, G> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Clone, G: GrowthPolicy> Clone for GrowVec<T, G> {
    /// Creates an independent copy with capacity equal to the length.
    ///
    /// Aborts through [`handle_alloc_error`] if the allocation fails; use
    /// [`Self::try_clone`] to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let v1: GrowVec<i32> = [1, 2, 3].into_iter().collect();
    /// let v2 = v1.clone();
    /// assert_eq!(v1, v2);
    ///
    /// // works for zero-sized types as well
    /// let v3: GrowVec<()> = [(), (), ()].into_iter().collect();
    /// assert_eq!(v3.clone().len(), 3);
    /// ```
    #[inline]
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(out) => out,
            Err(error) => alloc_failure::<T>(error),
        }
    }

    /// Overwrites `self` with a copy of `source`, reusing the existing buffer.
    ///
    /// This is equivalent to [`Self::wipe_clone_from`].
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        if let Err(error) = self.wipe_clone_from(source) {
            alloc_failure::<T>(error);
        }
    }
}

impl<T: Clone, G: GrowthPolicy> TryFrom<&[T]> for GrowVec<T, G> {
    type Error = VecError;

    /// Creates a vector holding clones of `slice`, with capacity equal to its length.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let v = GrowVec::<i32>::try_from(&[1, 2, 3][..]).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    #[inline]
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let mut vec = Self::with_capacity_in_policy(slice.len())?;
        vec.extend_from_slice(slice)?;
        Ok(vec)
    }
}

impl<T, G: GrowthPolicy> FromIterator<T> for GrowVec<T, G> {
    /// Creates a vector from an iterator.
    ///
    /// # Panics
    ///
    /// Aborts through [`handle_alloc_error`] if the buffer cannot grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let v: GrowVec<i32> = [1, 2, 3].iter().copied().collect();
    /// assert_eq!(v.len(), 3);
    /// assert_eq!(v[0], 1);
    /// ```
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new_in_policy();
        vec.extend(iter);
        vec
    }
}

impl<T, G: GrowthPolicy> Extend<T> for GrowVec<T, G> {
    /// Extends the vector with elements from an iterator.
    ///
    /// Exactly the iterator's lower size hint is reserved up front.
    ///
    /// # Panics
    ///
    /// Aborts through [`handle_alloc_error`] if the buffer cannot grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let mut vec = GrowVec::<i32>::new();
    /// vec.push(1).unwrap();
    /// vec.extend([2, 3, 4].iter().copied());
    /// assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(error) = self.expand_to(self.len.saturating_add(lower)) {
            alloc_failure::<T>(error);
        }
        for item in iter {
            if let Err(error) = self.push(item) {
                alloc_failure::<T>(error);
            }
        }
    }
}

impl<T, G: GrowthPolicy, I: SliceIndex<[T]>> Index<I> for GrowVec<T, G> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, G: GrowthPolicy, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T, G> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, G: GrowthPolicy> From<GrowVec<T, G>> for Vec<T> {
    /// Moves the elements into a standard [`Vec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    ///
    /// let vec: GrowVec<i32> = (1..=3).collect();
    /// assert_eq!(Vec::from(vec), vec![1, 2, 3]);
    /// ```
    #[inline]
    fn from(value: GrowVec<T, G>) -> Self {
        value.into_iter().collect()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<G: GrowthPolicy> Write for GrowVec<u8, G> {
    /// Appends the whole buffer, growing as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use grow_vec::GrowVec;
    /// use std::io::Write;
    ///
    /// let mut bytes = GrowVec::<u8>::new();
    /// write!(bytes, "{}-{}", 4, 2).unwrap();
    /// assert_eq!(bytes.as_slice(), b"4-2");
    /// ```
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.extend_from_slice(buf)
            .map_err(|error| io::Error::new(io::ErrorKind::OutOfMemory, error))?;
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compare, ExactGrowth};
    use alloc::{sync::Arc, vec};
    use core::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    struct DropCounter(Arc<AtomicUsize>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.fetch_add(1, AtomicOrdering::SeqCst);
        }
    }

    #[derive(Clone, Debug)]
    struct Tracked(i32, Arc<AtomicUsize>);

    impl PartialEq for Tracked {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.1.fetch_add(1, AtomicOrdering::SeqCst);
        }
    }

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    fn drops(counter: &Arc<AtomicUsize>) -> usize {
        counter.load(AtomicOrdering::SeqCst)
    }

    #[test]
    fn push_fifty_from_four() {
        let mut vec = GrowVec::<i64>::with_capacity(4).unwrap();
        let mut capacities = vec![vec.capacity()];
        for i in 0..50 {
            let before = vec.capacity();
            vec.push(i).unwrap();
            assert!(vec.capacity() >= before);
            assert!(vec.capacity() >= vec.len());
            if vec.capacity() != before {
                capacities.push(vec.capacity());
            }
        }
        assert_eq!(vec.len(), 50);
        assert_eq!(capacities, [4, 6, 9, 14, 21, 32, 48, 72]);
        for (i, value) in vec.iter().enumerate() {
            assert_eq!(*value, i64::try_from(i).unwrap());
        }

        vec.remove_item(&45).unwrap();
        assert_eq!(vec.len(), 49);
        assert_eq!(&vec[..45], (0..45).collect::<Vec<_>>().as_slice());
        assert_eq!(&vec[45..], &[46, 47, 48, 49]);
    }

    #[test]
    fn push_into_empty_uses_minimum_capacity() {
        let mut vec = GrowVec::<u8>::new();
        vec.push(1).unwrap();
        assert_eq!(vec.capacity(), 4);

        let mut exact = GrowVec::<u8, ExactGrowth>::new_in_policy();
        exact.push(1).unwrap();
        exact.push(2).unwrap();
        assert_eq!(exact.capacity(), 2);
    }

    #[test]
    fn push_then_pop() {
        let mut vec: GrowVec<i32> = (0..3).collect();
        vec.push(42).unwrap();
        assert_eq!(vec.len(), 4);
        assert_eq!(vec.pop(), 42);
        assert_eq!(vec.len(), 3);
        // SAFETY: the vector holds three elements
        assert_eq!(unsafe { vec.pop_unchecked() }, 2);
    }

    #[test]
    fn insert_shifts_tail() {
        let mut vec: GrowVec<i32> = [1, 2, 3].into_iter().collect();
        vec.insert(0, 99).unwrap();
        assert_eq!(vec.as_slice(), &[99, 1, 2, 3]);

        vec.insert(4, 100).unwrap();
        vec.insert(2, 50).unwrap();
        assert_eq!(vec.as_slice(), &[99, 1, 50, 2, 3, 100]);
    }

    #[test]
    fn insert_grows_by_bulk_factor() {
        let mut vec = GrowVec::<i32>::with_capacity(4).unwrap();
        vec.extend_from_slice(&[1, 2, 3, 4]).unwrap();
        vec.insert(1, 9).unwrap();
        // ceil(5 * 1.25)
        assert_eq!(vec.capacity(), 7);
    }

    #[test]
    fn rejected_insert_leaves_vector_untouched() {
        let mut vec: GrowVec<i32> = [1, 2].into_iter().collect();
        let cap = vec.capacity();
        assert_eq!(vec.insert(3, 0), Err(VecError::OutOfRange { index: 3, len: 2 }));
        assert_eq!(
            vec.insert_slice(5, &[1]),
            Err(VecError::OutOfRange { index: 5, len: 2 })
        );
        assert_eq!(vec.as_slice(), &[1, 2]);
        assert_eq!(vec.capacity(), cap);
    }

    #[test]
    fn failed_growth_is_atomic() {
        let mut vec = GrowVec::<u64>::with_capacity(2).unwrap();
        vec.extend_from_slice(&[1, 2]).unwrap();
        let ptr = vec.as_ptr();

        assert_eq!(vec.expand_to(usize::MAX / 2), Err(VecError::CapacityOverflow));
        assert_eq!(
            GrowVec::<u64>::with_capacity(usize::MAX / 4).unwrap_err(),
            VecError::CapacityOverflow
        );

        assert_eq!(vec.as_slice(), &[1, 2]);
        assert_eq!(vec.capacity(), 2);
        assert_eq!(vec.as_ptr(), ptr);
    }

    #[test]
    fn refused_allocation_is_atomic() {
        let mut vec = GrowVec::<u64>::with_capacity(2).unwrap();
        vec.extend_from_slice(&[1, 2]).unwrap();
        let ptr = vec.as_ptr();

        // A valid layout the allocator cannot satisfy.
        let huge = usize::MAX / 16;
        assert!(matches!(vec.expand_to(huge), Err(VecError::AllocFailed { .. })));
        assert!(matches!(vec.try_clone(), Ok(ref copy) if copy.as_slice() == [1, 2]));
        assert!(matches!(
            GrowVec::<u64>::with_capacity(huge),
            Err(VecError::AllocFailed { capacity }) if capacity == huge
        ));

        assert_eq!(vec.as_slice(), &[1, 2]);
        assert_eq!(vec.capacity(), 2);
        assert_eq!(vec.as_ptr(), ptr);
    }

    #[test]
    fn collect_reserves_exactly() {
        let mut vec: GrowVec<i32> = (0..6).collect();
        assert_eq!(vec.capacity(), 6);

        vec.extend(6..8);
        assert_eq!(vec.capacity(), 8);
        assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);

        let filtered: GrowVec<i32> = (0..6).filter(|x| x % 2 == 0).collect();
        assert_eq!(filtered.as_slice(), &[0, 2, 4]);
        assert_eq!(filtered.capacity(), 4);
    }

    #[test]
    fn failed_expand_keeps_contents() {
        let src: GrowVec<u8> = (0..4).collect();
        let mut dest: GrowVec<u8> = (10..12).collect();
        let before = dest.clone();

        assert!(dest.expand_to(usize::MAX).is_err());
        assert_eq!(dest, before);

        dest.wipe_clone_from(&src).unwrap();
        assert_eq!(dest, src);
    }

    #[test]
    fn insert_slice_middle_and_ends() {
        let mut vec: GrowVec<i32> = [1, 5].into_iter().collect();
        assert_eq!(vec.capacity(), 2);
        vec.insert_slice(1, &[2, 3, 4]).unwrap();
        // ceil(5 * 1.25)
        assert_eq!(vec.capacity(), 7);
        vec.insert_slice(0, &[0]).unwrap();
        assert_eq!(vec.capacity(), 7);
        vec.insert_slice(6, &[6, 7]).unwrap();
        // ceil(8 * 1.25)
        assert_eq!(vec.capacity(), 10);
        vec.insert_slice(3, &[]).unwrap();
        assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn splice_scenarios() {
        let mut vec: GrowVec<i32> = [10, 20, 30, 40].into_iter().collect();
        vec.splice(1, 2).unwrap();
        assert_eq!(vec.as_slice(), &[10, 40]);

        assert!(vec.splice(2, 1).is_err());
        assert!(vec.splice(usize::MAX, 2).is_err());
        assert!(vec.splice(1, usize::MAX).is_err());
        assert_eq!(vec.as_slice(), &[10, 40]);

        vec.splice(2, 0).unwrap();
        vec.splice(0, 2).unwrap();
        assert!(vec.is_empty());
    }

    #[test]
    fn splice_drops_removed_elements() {
        let counter = counter();
        let mut vec = GrowVec::<Tracked>::new();
        for i in 0..5 {
            vec.push(Tracked(i, Arc::clone(&counter))).unwrap();
        }

        vec.splice(1, 3).unwrap();
        assert_eq!(drops(&counter), 3);
        assert_eq!(vec.iter().map(|t| t.0).collect::<Vec<_>>(), [0, 4]);

        drop(vec);
        assert_eq!(drops(&counter), 5);
    }

    #[test]
    fn remove_item_missing() {
        let mut vec: GrowVec<i32> = (0..3).collect();
        assert_eq!(vec.remove_item(&3), Err(VecError::NotFound));
        assert_eq!(vec.len(), 3);
    }

    #[test]
    fn clone_is_independent() {
        let src: GrowVec<i32> = [1, 2, 3].into_iter().collect();
        let mut dest = src.try_clone().unwrap();
        dest.push(4).unwrap();
        assert_eq!(src.as_slice(), &[1, 2, 3]);
        assert_eq!(dest.as_slice(), &[1, 2, 3, 4]);
        assert_ne!(src.as_ptr(), dest.as_ptr());
    }

    #[test]
    fn clone_of_empty_holds_no_allocation() {
        let src = GrowVec::<i32>::with_capacity(8).unwrap();
        let dest = src.try_clone().unwrap();
        assert_eq!(dest.capacity(), 0);
    }

    #[test]
    fn wipe_clone_grows_only_when_needed() {
        let counter = counter();
        let mut src = GrowVec::<Tracked>::new();
        for i in 0..3 {
            src.push(Tracked(i, Arc::clone(&counter))).unwrap();
        }

        let mut dest = GrowVec::<Tracked>::with_capacity(2).unwrap();
        dest.push(Tracked(-1, Arc::clone(&counter))).unwrap();

        dest.wipe_clone_from(&src).unwrap();
        assert_eq!(drops(&counter), 1);
        assert_eq!(dest.capacity(), 3);
        assert_eq!(dest, src);

        let mut short = GrowVec::<Tracked>::new();
        short.push(Tracked(9, Arc::clone(&counter))).unwrap();
        dest.wipe_clone_from(&short).unwrap();
        assert_eq!(drops(&counter), 4);
        assert_eq!(dest.capacity(), 3);
        assert_eq!(dest.len(), 1);
        assert_eq!(dest[0].0, 9);
    }

    #[test]
    fn clone_from_reuses_buffer() {
        let src: GrowVec<i32> = (0..3).collect();
        let mut dest = GrowVec::<i32>::with_capacity(16).unwrap();
        dest.clone_from(&src);
        assert_eq!(dest, src);
        assert_eq!(dest.capacity(), 16);
    }

    #[test]
    fn sort_orders_adjacent_pairs() {
        let mut vec: GrowVec<i64> = [5, -3, 9, 0, i64::MIN, 5, i64::MAX].into_iter().collect();
        vec.sort_with(compare::i64_ascending);
        assert!(vec.windows(2).all(|pair| pair[0] <= pair[1]));

        vec.sort_with(compare::i64_descending);
        assert!(vec.windows(2).all(|pair| pair[0] >= pair[1]));

        let mut small: GrowVec<i64> = [3, 1, 2].into_iter().collect();
        small.sort_with(compare::i64_ascending);
        assert_eq!(small.as_slice(), &[1, 2, 3]);
        small.sort_with(compare::i64_descending);
        assert_eq!(small.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn reverse_is_an_involution() {
        for len in 0..8 {
            let original: GrowVec<i32> = (0..len).collect();
            let mut vec = original.clone();
            vec.reverse();
            assert_eq!(vec.iter().copied().collect::<Vec<_>>(), (0..len).rev().collect::<Vec<_>>());
            vec.reverse();
            assert_eq!(vec, original);
        }
    }

    #[test]
    fn swap_checked_and_unchecked() {
        let mut vec: GrowVec<i32> = (0..4).collect();
        vec.swap(0, 3);
        assert_eq!(vec.as_slice(), &[3, 1, 2, 0]);
        vec.swap(1, 1);
        assert_eq!(vec.try_swap(4, 0), Err(VecError::OutOfRange { index: 4, len: 4 }));
        // SAFETY: both indices are below the length
        unsafe { vec.swap_unchecked(1, 2) };
        assert_eq!(vec.as_slice(), &[3, 2, 1, 0]);
    }

    #[test]
    fn truncate_and_clear_keep_capacity() {
        let counter = counter();
        let mut vec = GrowVec::<DropCounter>::with_capacity(8).unwrap();
        for _ in 0..3 {
            vec.push(DropCounter(Arc::clone(&counter))).unwrap();
        }

        vec.truncate(1);
        assert_eq!(drops(&counter), 2);
        assert_eq!(vec.capacity(), 8);

        vec.clear();
        assert_eq!(drops(&counter), 3);
        assert_eq!(vec.capacity(), 8);
    }

    #[test]
    fn shrink_to_discards_and_drops_tail() {
        let counter = counter();
        let mut vec = GrowVec::<Tracked>::with_capacity(8).unwrap();
        for i in 0..6 {
            vec.push(Tracked(i, Arc::clone(&counter))).unwrap();
        }

        vec.shrink_to(10).unwrap();
        assert_eq!(vec.capacity(), 8);

        vec.shrink_to(7).unwrap();
        assert_eq!(vec.capacity(), 7);
        assert_eq!(vec.len(), 6);
        assert_eq!(drops(&counter), 0);

        vec.shrink_to(2).unwrap();
        assert_eq!(vec.capacity(), 2);
        assert_eq!(vec.iter().map(|t| t.0).collect::<Vec<_>>(), [0, 1]);
        assert_eq!(drops(&counter), 4);

        drop(vec);
        assert_eq!(drops(&counter), 6);
    }

    #[test]
    fn shrink_to_fit_and_release() {
        let mut vec = GrowVec::<i32>::with_capacity(10).unwrap();
        vec.extend_from_slice(&[1, 2]).unwrap();
        vec.shrink_to_fit().unwrap();
        assert_eq!(vec.capacity(), 2);
        assert_eq!(vec.as_slice(), &[1, 2]);

        vec.release();
        assert_eq!(vec.capacity(), 0);
        assert!(vec.is_empty());
    }

    #[test]
    fn range_traversal() {
        let vec: GrowVec<i32> = (0..6).collect();
        assert_eq!(vec.forward(0, 6).count(), 6);
        assert_eq!(vec.forward(6, 0).count(), 0);
        assert_eq!(vec.backward(5, 6).copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1, 0]);
        assert_eq!(vec.backward(0, 1).copied().collect::<Vec<_>>(), [0]);
        assert!(vec.try_forward(7, 0).is_err());
        assert!(vec.try_forward(0, usize::MAX).is_err());
        assert!(vec.try_backward(6, 1).is_err());
        assert!(vec.try_backward(2, 4).is_err());
        assert_eq!(vec.try_backward(usize::MAX, 0).unwrap().count(), 0);

        // SAFETY: [1, 4) lies within the six elements
        let unchecked: Vec<i32> = unsafe { vec.forward_unchecked(1, 3) }.copied().collect();
        assert_eq!(unchecked, [1, 2, 3]);
        // SAFETY: indices 4, 3 lie within the six elements
        let unchecked_back: Vec<i32> = unsafe { vec.backward_unchecked(4, 2) }.copied().collect();
        assert_eq!(unchecked_back, [4, 3]);
    }

    #[test]
    fn retain_with_drops() {
        let counter = counter();
        let mut vec = GrowVec::<Tracked>::new();
        for i in 1..=4 {
            vec.push(Tracked(i, Arc::clone(&counter))).unwrap();
        }

        vec.retain(|t| (t.0 & 1_i32) == 0);

        assert_eq!(vec.len(), 2);
        assert_eq!(drops(&counter), 2);
        assert_eq!(vec.iter().map(|t| t.0).collect::<Vec<_>>(), [2, 4]);

        drop(vec);
        assert_eq!(drops(&counter), 4);
    }

    #[test]
    fn main_drop() {
        let counter = counter();
        {
            let mut vec = GrowVec::<DropCounter>::new();
            for _ in 0..3 {
                vec.push(DropCounter(Arc::clone(&counter))).unwrap();
            }

            // At this point, nothing is dropped yet
            assert_eq!(drops(&counter), 0);
        } // vec goes out of scope here
        assert_eq!(drops(&counter), 3);
    }

    #[test]
    fn into_iter_partial_drop() {
        let counter = counter();
        let mut vec = GrowVec::<DropCounter>::new();
        for _ in 0..3 {
            vec.push(DropCounter(Arc::clone(&counter))).unwrap();
        }

        let mut iter = vec.into_iter();
        let first = iter.next();
        assert_eq!(iter.len(), 2);
        drop(first);
        assert_eq!(drops(&counter), 1);

        drop(iter);
        assert_eq!(drops(&counter), 3);
    }

    #[test]
    fn zero_sized_elements() {
        let mut vec = GrowVec::<()>::new();
        for _ in 0..100 {
            vec.push(()).unwrap();
        }
        assert_eq!(vec.len(), 100);
        vec.insert(50, ()).unwrap();
        vec.splice(0, 10).unwrap();
        assert_eq!(vec.len(), 91);
        assert_eq!(vec.try_clone().unwrap().len(), 91);
        vec.shrink_to_fit().unwrap();
        assert_eq!(vec.capacity(), 91);
    }

    #[test]
    fn conversions() {
        let vec = GrowVec::<i32>::try_from(&[3, 4][..]).unwrap();
        assert_eq!(Vec::from(vec), vec![3, 4]);

        let policy_vec: GrowVec<i32, ExactGrowth> = (0..5).collect();
        let default_vec: GrowVec<i32> = (0..5).collect();
        assert_eq!(policy_vec, default_vec);
    }
}
