//! Raw slot storage behind `GrowVec`.
//!
//! `RawBuf<T>` owns an allocation of `capacity` slots and nothing else: it
//! never knows which slots are live. The container tracks the live prefix and
//! calls the slot primitives below to move elements between the
//! uninitialized and live states.

use alloc::alloc::{self as heap, Layout};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use tracing::{debug, trace};

use crate::error::GrowVecError;

/// Largest number of `T` slots a single buffer can hold.
///
/// The byte size of the buffer must stay representable as `isize`, so the
/// limit is `isize::MAX / size_of::<T>()`. Zero-sized types are capped at
/// `isize::MAX` elements.
#[must_use]
pub const fn max_size<T>() -> usize {
    let elem_size = mem::size_of::<T>();
    if elem_size == 0 {
        isize::MAX as usize
    } else {
        isize::MAX as usize / elem_size
    }
}

/// Exclusively owned block of `cap` uninitialized `T` slots.
///
/// `ptr` is dangling iff `cap == 0` (or `T` is zero-sized, which never
/// allocates).
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf` owns its slots the same way `Box<[T]>` does.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access to `RawBuf` only hands out shared access to slots.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates storage for `capacity` elements without constructing any.
    ///
    /// # Errors
    ///
    /// - `GrowVecError::CapacityOverflow` if `capacity` exceeds [`max_size`]
    /// - `GrowVecError::AllocationFailed` if the global allocator returns null
    pub(crate) fn allocate(capacity: usize) -> Result<Self, GrowVecError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let max = max_size::<T>();
        if capacity > max {
            debug!(requested = capacity, max, "capacity overflow");
            return Err(GrowVecError::CapacityOverflow {
                requested: capacity,
                max,
            });
        }

        if mem::size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _marker: PhantomData,
            });
        }

        let layout = Self::layout(capacity)?;
        // SAFETY: `layout` has a non-zero size, checked above.
        let raw = unsafe { heap::alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                trace!(capacity, bytes = layout.size(), "allocated buffer");
                Ok(Self {
                    ptr,
                    cap: capacity,
                    _marker: PhantomData,
                })
            }
            None => {
                debug!(
                    capacity,
                    bytes = layout.size(),
                    "global allocator returned null"
                );
                Err(GrowVecError::AllocationFailed {
                    size: layout.size(),
                    align: layout.align(),
                })
            }
        }
    }

    fn layout(capacity: usize) -> Result<Layout, GrowVecError> {
        Layout::array::<T>(capacity).map_err(|_| GrowVecError::CapacityOverflow {
            requested: capacity,
            max: max_size::<T>(),
        })
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index <= capacity`.
    #[inline]
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        self.ptr.as_ptr().add(index)
    }

    /// Writes `value` into slot `index`.
    ///
    /// The value is fully built before this call, so a panicking constructor
    /// never leaves the slot half-initialized.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot is uninitialized.
    #[inline]
    pub(crate) unsafe fn construct_at(&mut self, index: usize, value: T) {
        debug_assert!(index < self.cap);
        ptr::write(self.slot(index), value);
    }

    /// Drops the live elements in `[start, end)`.
    ///
    /// # Safety
    ///
    /// Every slot in the range is live and is not read again until
    /// reconstructed.
    pub(crate) unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        if mem::needs_drop::<T>() && start < end {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.slot(start),
                end - start,
            ));
        }
    }

    /// Replaces this buffer by one of exactly `new_cap` slots, relocating the
    /// `len` live elements. The old buffer is freed after the move.
    ///
    /// On error nothing has changed.
    ///
    /// # Safety
    ///
    /// `len <= new_cap`, `len <= capacity`, and `[0, len)` are the live slots.
    pub(crate) unsafe fn reallocate(&mut self, len: usize, new_cap: usize) -> Result<(), GrowVecError> {
        debug_assert!(len <= new_cap);
        let mut fresh = Self::allocate(new_cap)?;
        move_range(self.ptr(), len, fresh.ptr());
        trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            moved = len,
            "reallocated buffer"
        );
        mem::swap(self, &mut fresh);
        // `fresh` now holds the old block, whose slots are all moved-from.
        drop(fresh);
        Ok(())
    }

    /// Exchanges the whole allocation with `other`.
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        if let Ok(layout) = Self::layout(self.cap) {
            trace!(capacity = self.cap, "freed buffer");
            // SAFETY: the block was allocated by `allocate` with this layout.
            unsafe { heap::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

/// Relocates `count` elements from `src` into uninitialized `dest`.
///
/// A bitwise move that cannot fail. The source slots are logically
/// uninitialized afterwards.
///
/// # Safety
///
/// Both ranges are valid for `count` elements and do not overlap.
#[inline]
pub(crate) unsafe fn move_range<T>(src: *const T, count: usize, dest: *mut T) {
    if count > 0 {
        ptr::copy_nonoverlapping(src, dest, count);
    }
}

/// Drops the prefix of a run that has been written so far if the writer
/// unwinds before finishing.
struct PartialRun<T> {
    dest: *mut T,
    initialized: usize,
}

impl<T> Drop for PartialRun<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `initialized` leading slots were written.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.dest, self.initialized));
        }
    }
}

/// Writes up to `count` items from `items` into uninitialized slots starting
/// at `dest` and returns how many were written.
///
/// If producing an item panics, the items already written are dropped before
/// the panic continues, so the destination is uninitialized again.
///
/// # Safety
///
/// `dest` is valid for writes of `count` elements.
pub(crate) unsafe fn construct_run<T, I>(dest: *mut T, count: usize, items: I) -> usize
where
    I: IntoIterator<Item = T>,
{
    let mut run = PartialRun {
        dest,
        initialized: 0,
    };
    for item in items.into_iter().take(count) {
        ptr::write(dest.add(run.initialized), item);
        run.initialized += 1;
    }
    let written = run.initialized;
    mem::forget(run);
    written
}

/// Clones `src` into uninitialized slots starting at `dest`.
///
/// The source is untouched; on a panicking clone the already-cloned
/// destination elements are dropped.
///
/// # Safety
///
/// `dest` is valid for writes of `src.len()` elements and does not overlap
/// `src`.
#[inline]
pub(crate) unsafe fn clone_range<T: Clone>(src: &[T], dest: *mut T) {
    construct_run(dest, src.len(), src.iter().cloned());
}
