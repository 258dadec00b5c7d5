use crate::{internal::log_event, VecError};

use alloc::alloc::{alloc, dealloc, realloc, Layout};
use core::{marker::PhantomData, mem, ptr::NonNull};

/// Heap storage for up to `cap` elements of `T`.
///
/// The buffer only tracks the allocation. Which slots hold initialized values is
/// decided by the owner, and the buffer never drops elements.
pub struct RawBuf<T> {
    /// Start of the allocation, dangling when `cap == 0` or `T` is zero-sized.
    ptr: NonNull<T>,

    /// Number of slots the allocation can hold.
    cap: usize,

    /// Marks the buffer as owning values of `T`.
    _owns: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its allocation, so sending it sends the `T`s it stores
unsafe impl<T: Send> Send for RawBuf<T> {}

// SAFETY: shared access to RawBuf only hands out shared access to its `T`s
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates a buffer that holds no allocation.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Creates a buffer with exactly `cap` slots.
    pub fn with_capacity(cap: usize) -> Result<Self, VecError> {
        let mut buf = Self::new();
        buf.resize_to(cap)?;
        Ok(buf)
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Layout of an allocation holding `cap` elements.
    fn layout(cap: usize) -> Result<Layout, VecError> {
        Layout::array::<T>(cap).map_err(|_| VecError::CapacityOverflow)
    }

    /// Reallocates so the buffer holds exactly `new_cap` slots.
    ///
    /// Initialized values in the first `min(cap, new_cap)` slots move with the
    /// allocation. Slots past `new_cap` are released without dropping anything in them,
    /// so callers shrinking below their length must move or drop that tail first.
    ///
    /// On failure the buffer is unchanged.
    pub fn resize_to(&mut self, new_cap: usize) -> Result<(), VecError> {
        let old_cap = self.cap;
        if Self::IS_ZST || new_cap == old_cap {
            self.cap = new_cap;
            return Ok(());
        }

        if new_cap == 0 {
            self.release();
            return Ok(());
        }

        let new_layout = Self::layout(new_cap)?;
        let raw = if old_cap == 0 {
            // SAFETY: new_cap > 0 and T is not zero-sized, so the layout has a non-zero size
            unsafe { alloc(new_layout) }
        } else {
            let old_layout = Self::layout(old_cap)?;
            let old_ptr = self.ptr.as_ptr().cast::<u8>();
            // SAFETY: old_ptr was allocated by the global allocator with old_layout,
            // and the new size is non-zero and fits in isize
            unsafe { realloc(old_ptr, old_layout, new_layout.size()) }
        };

        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            log_event!(
                debug,
                "buffer allocation failed",
                old_capacity = old_cap,
                new_capacity = new_cap,
            );
            return Err(VecError::AllocFailed { capacity: new_cap });
        };

        log_event!(
            trace,
            "buffer resized",
            old_capacity = old_cap,
            new_capacity = new_cap,
            elem_size = mem::size_of::<T>(),
        );
        self.ptr = ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the allocation, leaving an empty buffer.
    ///
    /// Elements still stored are not dropped.
    pub fn release(&mut self) {
        if !Self::IS_ZST && self.cap != 0 {
            if let Ok(layout) = Self::layout(self.cap) {
                let ptr = self.ptr.as_ptr().cast::<u8>();
                // SAFETY: ptr was allocated by the global allocator with this layout
                unsafe {
                    dealloc(ptr, layout);
                }
            }
            log_event!(trace, "buffer released", old_capacity = self.cap);
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T> Drop for RawBuf<T> {
    #[inline]
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_has_no_capacity() {
        let buf = RawBuf::<u64>::new();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.ptr(), NonNull::<u64>::dangling().as_ptr());
    }

    #[test]
    fn resize_preserves_prefix() {
        let mut buf = RawBuf::<u32>::with_capacity(2).unwrap();
        // SAFETY: slot 0 is inside the allocation
        unsafe { buf.ptr().write(7) };
        // SAFETY: slot 1 is inside the allocation
        let second = unsafe { buf.ptr().add(1) };
        // SAFETY: second points to a slot inside the allocation
        unsafe { second.write(9) };

        buf.resize_to(64).unwrap();
        assert_eq!(buf.capacity(), 64);
        // SAFETY: slot 0 was initialized before the resize and moved with it
        assert_eq!(unsafe { buf.ptr().read() }, 7);
        // SAFETY: slot 1 is inside the allocation
        let second = unsafe { buf.ptr().add(1) };
        // SAFETY: slot 1 was initialized before the resize and moved with it
        assert_eq!(unsafe { second.read() }, 9);

        buf.resize_to(1).unwrap();
        assert_eq!(buf.capacity(), 1);
        // SAFETY: slot 0 survives a shrink to one slot
        assert_eq!(unsafe { buf.ptr().read() }, 7);
    }

    #[test]
    fn resize_to_zero_releases() {
        let mut buf = RawBuf::<u8>::with_capacity(16).unwrap();
        buf.resize_to(0).unwrap();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.ptr(), NonNull::<u8>::dangling().as_ptr());
    }

    #[test]
    fn overflowing_layout_leaves_buffer_untouched() {
        let mut buf = RawBuf::<u64>::with_capacity(3).unwrap();
        let before = buf.ptr();
        assert_eq!(buf.resize_to(usize::MAX / 4), Err(VecError::CapacityOverflow));
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.ptr(), before);
    }

    #[test]
    fn refused_allocation_leaves_buffer_untouched() {
        let huge = usize::MAX / 16;
        assert_eq!(
            RawBuf::<u64>::with_capacity(huge).err(),
            Some(VecError::AllocFailed { capacity: huge })
        );

        let mut buf = RawBuf::<u64>::with_capacity(3).unwrap();
        // SAFETY: slot 0 is inside the allocation
        unsafe { buf.ptr().write(11) };
        let before = buf.ptr();
        assert_eq!(buf.resize_to(huge), Err(VecError::AllocFailed { capacity: huge }));
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.ptr(), before);
        // SAFETY: slot 0 was initialized above and the failed resize kept the allocation
        assert_eq!(unsafe { buf.ptr().read() }, 11);
    }

    #[test]
    fn zero_sized_types_track_capacity_only() {
        let mut buf = RawBuf::<()>::with_capacity(usize::MAX).unwrap();
        assert_eq!(buf.capacity(), usize::MAX);
        buf.resize_to(3).unwrap();
        assert_eq!(buf.capacity(), 3);
    }
}
