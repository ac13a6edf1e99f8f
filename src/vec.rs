use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Bound, Deref, DerefMut, Index, IndexMut, RangeBounds};
use core::slice::{self, SliceIndex};
use core::{fmt, mem, ptr};

use tracing::trace;

use crate::cursor::{Cursor, CursorMut};
use crate::error::GrowVecError;
use crate::iter::{Iter, IterMut, RevIter};
use crate::storage::{self, max_size, RawBuf};

/// A contiguous growable array.
///
/// Slots `[0, len)` of the buffer are live, `[len, capacity)` are allocated
/// but uninitialized. Capacity grows by 1.5x when an append does not fit and
/// only shrinks on [`GrowVec::shrink_to_fit`].
pub struct GrowVec<T> {
    buf: RawBuf<T>,
    len: usize,
}

/// How much capacity a reallocating insertion asks for.
#[derive(Clone, Copy)]
enum Growth {
    /// Geometric step, see [`GrowVec::grow_capacity`].
    Amortized,
    /// Exactly the required size.
    Exact,
}

/// Moves the `tail` elements at `from` down or up to `to` and fixes `len`
/// when dropped, on success as well as on unwind.
struct TailShift<'a, T> {
    vec: &'a mut GrowVec<T>,
    from: usize,
    to: usize,
    tail: usize,
}

impl<T> Drop for TailShift<'_, T> {
    fn drop(&mut self) {
        if self.from != self.to && self.tail > 0 {
            // SAFETY: both ranges lie inside the allocation; `ptr::copy`
            // handles the overlap.
            unsafe {
                let base = self.vec.buf.ptr();
                ptr::copy(base.add(self.from), base.add(self.to), self.tail);
            }
        }
        self.vec.len = self.to + self.tail;
    }
}

struct RetainGuard<'a, T> {
    vec: &'a mut GrowVec<T>,
    processed: usize,
    kept: usize,
    original_len: usize,
}

impl<T> Drop for RetainGuard<'_, T> {
    fn drop(&mut self) {
        let tail = self.original_len - self.processed;
        if tail > 0 && self.kept != self.processed {
            // SAFETY: `[processed, original_len)` are still live and
            // `kept <= processed`.
            unsafe {
                let base = self.vec.buf.ptr();
                ptr::copy(base.add(self.processed), base.add(self.kept), tail);
            }
        }
        self.vec.len = self.kept + tail;
    }
}

/// Unwraps for trait impls that cannot return `Result`.
fn infallible<R>(result: Result<R, GrowVecError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<T> GrowVec<T> {
    /// Creates an empty vector. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` or
    /// `GrowVecError::AllocationFailed` if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, GrowVecError> {
        Ok(Self {
            buf: RawBuf::allocate(capacity)?,
            len: 0,
        })
    }

    /// Creates a vector of `count` default-constructed elements, with
    /// capacity exactly `count`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::with_capacity`].
    pub fn with_len(count: usize) -> Result<Self, GrowVecError>
    where
        T: Default,
    {
        let mut vec = Self::with_capacity(count)?;
        vec.resize_with(count, T::default)?;
        Ok(vec)
    }

    /// Creates a vector of `count` clones of `value`, with capacity exactly
    /// `count`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::with_capacity`].
    pub fn from_elem(count: usize, value: T) -> Result<Self, GrowVecError>
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(count)?;
        vec.insert_run(0, count, iter::repeat(value), Growth::Exact)?;
        Ok(vec)
    }

    /// Creates a vector holding clones of `src`, with capacity exactly
    /// `src.len()`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::with_capacity`].
    pub fn from_slice(src: &[T]) -> Result<Self, GrowVecError>
    where
        T: Clone,
    {
        let buf = RawBuf::allocate(src.len())?;
        // SAFETY: the fresh buffer has `src.len()` uninitialized slots. If a
        // clone panics, `clone_range` drops what it wrote and `buf` frees the
        // block.
        unsafe { storage::clone_range(src, buf.ptr()) };
        Ok(Self {
            buf,
            len: src.len(),
        })
    }

    /// Fallible counterpart of [`Clone::clone`].
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::with_capacity`].
    pub fn try_clone(&self) -> Result<Self, GrowVecError>
    where
        T: Clone,
    {
        Self::from_slice(self.as_slice())
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    ///
    /// This is the move constructor: the buffer changes owner, nothing is
    /// allocated or copied.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Exchanges the contents of two vectors in O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Number of slots available before the next reallocation.
    #[must_use]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Largest element count any `GrowVec<T>` can hold.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        max_size::<T>()
    }

    /// Raw pointer to the first element. Valid for `len` reads until the
    /// next reallocation.
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` are live; the pointer is non-null and aligned
        // even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` is exclusive.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, GrowVecError> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Bounds-checked mutable element access.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, GrowVecError> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn try_front(&self) -> Result<&T, GrowVecError> {
        self.front().ok_or(GrowVecError::EmptyVector)
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn try_back(&self) -> Result<&T, GrowVecError> {
        self.back().ok_or(GrowVecError::EmptyVector)
    }

    fn check_index(&self, index: usize) -> Result<(), GrowVecError> {
        if index >= self.len {
            Err(GrowVecError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    fn check_position(&self, index: usize) -> Result<(), GrowVecError> {
        if index > self.len {
            Err(GrowVecError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    fn required_len(&self, additional: usize) -> Result<usize, GrowVecError> {
        self.len
            .checked_add(additional)
            .ok_or(GrowVecError::CapacityOverflow {
                requested: usize::MAX,
                max: max_size::<T>(),
            })
    }

    /// Capacity for a reallocation that must hold `required` elements:
    /// `max(required, capacity * 1.5)`, saturating at [`max_size`].
    fn grow_capacity(&self, required: usize) -> Result<usize, GrowVecError> {
        let max = max_size::<T>();
        if required > max {
            return Err(GrowVecError::CapacityOverflow {
                requested: required,
                max,
            });
        }

        let cap = self.capacity();
        let geometric = if cap > max - cap / 2 {
            max
        } else {
            cap + cap / 2
        };
        Ok(geometric.max(required))
    }

    /// Takes `fresh` as the new buffer. The old block is freed without
    /// dropping anything, so its live elements must already be moved out.
    fn adopt(&mut self, mut fresh: RawBuf<T>) {
        trace!(
            old_capacity = self.capacity(),
            new_capacity = fresh.capacity(),
            len = self.len,
            "adopting new buffer"
        );
        self.buf.swap(&mut fresh);
    }

    /// Ensures capacity of at least `new_cap`. Allocates exactly `new_cap`
    /// slots; never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` if `new_cap` exceeds
    /// [`GrowVec::max_size`], or `GrowVecError::AllocationFailed`. The vector
    /// is unchanged on error.
    pub fn reserve(&mut self, new_cap: usize) -> Result<(), GrowVecError> {
        if new_cap <= self.capacity() {
            return Ok(());
        }
        // SAFETY: `len <= capacity < new_cap` and `[0, len)` are live.
        unsafe { self.buf.reallocate(self.len, new_cap) }
    }

    /// Ensures room for `additional` more elements.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::reserve`].
    pub fn reserve_additional(&mut self, additional: usize) -> Result<(), GrowVecError> {
        let required = self.required_len(additional)?;
        self.reserve(required)
    }

    /// Reallocates so that capacity equals `len`, freeing the buffer when the
    /// vector is empty.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::AllocationFailed` if the smaller buffer cannot
    /// be allocated; the vector keeps its old buffer.
    pub fn shrink_to_fit(&mut self) -> Result<(), GrowVecError> {
        if self.capacity() == self.len {
            return Ok(());
        }
        trace!(from = self.capacity(), to = self.len, "shrinking buffer");
        // SAFETY: `[0, len)` are live and fit a buffer of `len` slots.
        unsafe { self.buf.reallocate(self.len, self.len) }
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` or
    /// `GrowVecError::AllocationFailed` if growing fails; the vector is
    /// unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), GrowVecError> {
        self.emplace_back(|| value).map(|_| ())
    }

    /// Appends the element built by `make` and returns a reference to it.
    ///
    /// When the buffer is full, the new buffer is allocated and the element
    /// is constructed into its final slot before anything is relocated, so
    /// an allocation error or a panic in `make` leaves the vector unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::push`].
    pub fn emplace_back<F>(&mut self, make: F) -> Result<&mut T, GrowVecError>
    where
        F: FnOnce() -> T,
    {
        if self.len < self.capacity() {
            let value = make();
            // SAFETY: slot `len` is inside the buffer and uninitialized.
            unsafe { self.buf.construct_at(self.len, value) };
        } else {
            let new_cap = self.grow_capacity(self.required_len(1)?)?;
            let mut fresh = RawBuf::allocate(new_cap)?;
            let value = make();
            // SAFETY: `fresh` has room for `len + 1` slots and does not
            // overlap the current buffer.
            unsafe {
                fresh.construct_at(self.len, value);
                storage::move_range(self.buf.ptr(), self.len, fresh.ptr());
            }
            self.adopt(fresh);
        }
        self.len += 1;
        // SAFETY: slot `len - 1` was just constructed.
        Ok(unsafe { &mut *self.buf.slot(self.len - 1) })
    }

    /// Removes and returns the last element, or `None` if the vector is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.slot(self.len)) })
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn try_pop(&mut self) -> Result<T, GrowVecError> {
        self.pop().ok_or(GrowVecError::EmptyVector)
    }

    /// Inserts `value` at `index`, shifting later elements right, and
    /// returns the index of the inserted element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index > len`, otherwise
    /// the errors of [`GrowVec::push`].
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, GrowVecError> {
        self.emplace(index, || value)
    }

    /// Inserts the element built by `make` at `index`.
    ///
    /// The element is built before any existing element moves, so a panic in
    /// `make` leaves the vector unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::insert`].
    pub fn emplace<F>(&mut self, index: usize, make: F) -> Result<usize, GrowVecError>
    where
        F: FnOnce() -> T,
    {
        self.check_position(index)?;
        if index == self.len {
            self.emplace_back(make)?;
            return Ok(index);
        }

        if self.len < self.capacity() {
            let value = make();
            // SAFETY: there is a spare slot at `len`; `ptr::copy` moves the
            // tail back to front, so overlapping slots are not clobbered.
            unsafe {
                let hole = self.buf.slot(index);
                ptr::copy(hole, hole.add(1), self.len - index);
                ptr::write(hole, value);
            }
            self.len += 1;
        } else {
            self.insert_run(index, 1, iter::once_with(make), Growth::Amortized)?;
        }
        Ok(index)
    }

    /// Inserts `count` clones of `value` at `index` and returns `index`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::insert`].
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<usize, GrowVecError>
    where
        T: Clone,
    {
        self.check_position(index)?;
        self.insert_run(index, count, iter::repeat(value), Growth::Amortized)?;
        Ok(index)
    }

    /// Inserts clones of `src` at `index` and returns `index`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::insert`].
    pub fn insert_slice(&mut self, index: usize, src: &[T]) -> Result<usize, GrowVecError>
    where
        T: Clone,
    {
        self.check_position(index)?;
        self.insert_run(index, src.len(), src.iter().cloned(), Growth::Amortized)?;
        Ok(index)
    }

    /// Inserts every item of `items` at `index`, keeping their order, and
    /// returns `index`.
    ///
    /// The items are gathered first, so a panicking iterator never disturbs
    /// the vector.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::insert`].
    pub fn insert_iter<I>(&mut self, index: usize, items: I) -> Result<usize, GrowVecError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_position(index)?;
        let mut staged = Self::new();
        staged.try_extend(items)?;
        let count = staged.len();
        self.insert_run(index, count, staged, Growth::Amortized)?;
        Ok(index)
    }

    /// Appends clones of `src`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::push`].
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), GrowVecError>
    where
        T: Clone,
    {
        self.insert_run(self.len, src.len(), src.iter().cloned(), Growth::Amortized)
            .map(|_| ())
    }

    /// Appends every item of `items`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::push`]. Items appended before the failure stay.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), GrowVecError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        while let Some(item) = items.next() {
            if self.len == self.capacity() {
                let (lower, _) = items.size_hint();
                let required = self.len.saturating_add(lower).saturating_add(1);
                let new_cap = self.grow_capacity(required)?;
                self.reserve(new_cap)?;
            }
            // SAFETY: slot `len` is inside the buffer and uninitialized.
            unsafe { self.buf.construct_at(self.len, item) };
            self.len += 1;
        }
        Ok(())
    }

    /// Places up to `count` items from `items` at `index` and returns how
    /// many were placed.
    ///
    /// With enough spare capacity the tail is shifted right to open a gap
    /// that the items are written into. Otherwise a new buffer is allocated,
    /// the items are written into their final slots first, and only then are
    /// the prefix and the suffix relocated around them. A panicking item
    /// leaves the vector with exactly its original elements.
    fn insert_run<I>(
        &mut self,
        index: usize,
        count: usize,
        items: I,
        growth: Growth,
    ) -> Result<usize, GrowVecError>
    where
        I: IntoIterator<Item = T>,
    {
        debug_assert!(index <= self.len);
        if count == 0 {
            return Ok(0);
        }

        let old_len = self.len;
        if count <= self.spare_capacity() {
            let base = self.buf.ptr();
            // SAFETY: `old_len + count <= capacity`, so the shifted tail stays
            // inside the buffer.
            unsafe { ptr::copy(base.add(index), base.add(index + count), old_len - index) };
            self.len = index;
            let mut shift = TailShift {
                vec: self,
                from: index + count,
                to: index,
                tail: old_len - index,
            };
            // SAFETY: `[index, index + count)` is the uninitialized gap.
            let written = unsafe { storage::construct_run(base.add(index), count, items) };
            shift.to = index + written;
            drop(shift);
            return Ok(written);
        }

        let required = self.required_len(count)?;
        let new_cap = match growth {
            Growth::Amortized => self.grow_capacity(required)?,
            Growth::Exact => required,
        };
        let fresh = RawBuf::allocate(new_cap)?;
        // SAFETY: `fresh` holds `old_len + count` slots and shares nothing
        // with the current buffer; on a panic `construct_run` drops its
        // partial run and `fresh` frees the block.
        let written = unsafe { storage::construct_run(fresh.slot(index), count, items) };
        // SAFETY: prefix and suffix land on disjoint, uninitialized slots.
        unsafe {
            storage::move_range(self.buf.ptr(), index, fresh.ptr());
            storage::move_range(
                self.buf.slot(index),
                old_len - index,
                fresh.slot(index + written),
            );
        }
        self.adopt(fresh);
        self.len = old_len + written;
        Ok(written)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, GrowVecError> {
        self.check_index(index)?;
        // SAFETY: `index` is live; the tail is moved over it and the last
        // slot leaves the live range.
        unsafe {
            let hole = self.buf.slot(index);
            let value = ptr::read(hole);
            ptr::copy(hole.add(1), hole, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Removes the element at `index` by moving the last element into its
    /// place. Does not preserve order.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> Result<T, GrowVecError> {
        self.check_index(index)?;
        let last = self.len - 1;
        // SAFETY: both slots are live; `ptr::copy` tolerates `index == last`.
        unsafe {
            let hole = self.buf.slot(index);
            let value = ptr::read(hole);
            ptr::copy(self.buf.slot(last), hole, 1);
            self.len = last;
            Ok(value)
        }
    }

    /// Drops the element at `index` and returns the index now occupying its
    /// position (equal to the new `len` when the last element was erased).
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len`.
    pub fn erase(&mut self, index: usize) -> Result<usize, GrowVecError> {
        drop(self.remove(index)?);
        Ok(index)
    }

    /// Drops the elements in `range`, shifts the tail left over the gap and
    /// returns the index now occupying the start of the range.
    ///
    /// Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::InvalidRange` if the range is reversed or ends
    /// past `len`.
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize, GrowVecError>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = self.resolve_range(&range)?;
        if start == end {
            return Ok(start);
        }

        let old_len = self.len;
        let base = self.buf.ptr();
        self.len = start;
        let shift = TailShift {
            vec: self,
            from: end,
            to: start,
            tail: old_len - end,
        };
        // SAFETY: `[start, end)` are live and now outside the live range; a
        // panicking destructor still leaves `shift` to close the gap.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), end - start));
        }
        drop(shift);
        Ok(start)
    }

    fn resolve_range<R>(&self, range: &R) -> Result<(usize, usize), GrowVecError>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n.checked_add(1),
            Bound::Excluded(&n) => Some(n),
            Bound::Unbounded => Some(self.len),
        };
        match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= self.len => Ok((start, end)),
            (start, end) => Err(GrowVecError::InvalidRange {
                start: start.unwrap_or(usize::MAX),
                end: end.unwrap_or(usize::MAX),
                length: self.len,
            }),
        }
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving
    /// their order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let original_len = self.len;
        let base = self.buf.ptr();
        self.len = 0;
        let mut guard = RetainGuard {
            vec: self,
            processed: 0,
            kept: 0,
            original_len,
        };

        while guard.processed < original_len {
            // SAFETY: `processed` is live; `kept <= processed`.
            unsafe {
                let current = base.add(guard.processed);
                if keep(&mut *current) {
                    if guard.kept != guard.processed {
                        ptr::copy_nonoverlapping(current, base.add(guard.kept), 1);
                    }
                    guard.kept += 1;
                    guard.processed += 1;
                } else {
                    guard.processed += 1;
                    ptr::drop_in_place(current);
                }
            }
        }
    }

    /// Drops the elements past `count`. No-op when `count >= len`.
    pub fn truncate(&mut self, count: usize) {
        if count >= self.len {
            return;
        }
        let old_len = self.len;
        self.len = count;
        // SAFETY: `[count, old_len)` were live and are now outside the live
        // range.
        unsafe { self.buf.destroy_range(count, old_len) };
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to `count` elements, filling with `T::default()`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::resize_with`].
    pub fn resize(&mut self, count: usize) -> Result<(), GrowVecError>
    where
        T: Default,
    {
        self.resize_with(count, T::default)
    }

    /// Resizes to `count` elements, filling with clones of `value`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::resize_with`].
    pub fn resize_with_value(&mut self, count: usize, value: T) -> Result<(), GrowVecError>
    where
        T: Clone,
    {
        if count <= self.len {
            self.truncate(count);
            return Ok(());
        }
        let additional = count - self.len;
        self.insert_run(self.len, additional, iter::repeat(value), Growth::Exact)
            .map(|_| ())
    }

    /// Resizes to `count` elements, filling with values produced by `make`.
    ///
    /// Shrinking drops the surplus. Growing past the capacity reallocates to
    /// exactly `count` slots.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` or
    /// `GrowVecError::AllocationFailed`; the vector is unchanged.
    pub fn resize_with<F>(&mut self, count: usize, make: F) -> Result<(), GrowVecError>
    where
        F: FnMut() -> T,
    {
        if count <= self.len {
            self.truncate(count);
            return Ok(());
        }
        let additional = count - self.len;
        self.insert_run(self.len, additional, iter::repeat_with(make), Growth::Exact)
            .map(|_| ())
    }

    /// Replaces the contents with `count` clones of `value`, reusing the
    /// buffer when it is large enough.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::with_capacity`]; the vector is unchanged on error.
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), GrowVecError>
    where
        T: Clone,
    {
        if count > self.capacity() {
            *self = Self::from_elem(count, value)?;
            return Ok(());
        }
        self.truncate(count);
        for slot in self.as_mut_slice() {
            slot.clone_from(&value);
        }
        let remaining = count - self.len;
        self.insert_run(self.len, remaining, iter::repeat(value), Growth::Exact)
            .map(|_| ())
    }

    /// Replaces the contents with clones of `src` (copy assignment).
    ///
    /// With enough capacity the live prefix is clone-assigned in place,
    /// surplus elements are dropped and the rest is cloned into spare slots.
    /// Otherwise a buffer of `src.len()` slots is filled first and the old
    /// one released afterwards, so a failure leaves `self` untouched.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::with_capacity`].
    pub fn assign_slice(&mut self, src: &[T]) -> Result<(), GrowVecError>
    where
        T: Clone,
    {
        if src.len() > self.capacity() {
            *self = Self::from_slice(src)?;
            return Ok(());
        }
        self.truncate(src.len());
        let (overwrite, rest) = src.split_at(self.len);
        self.as_mut_slice().clone_from_slice(overwrite);
        self.insert_run(self.len, rest.len(), rest.iter().cloned(), Growth::Exact)
            .map(|_| ())
    }

    /// Replaces the contents with the items of `items`.
    ///
    /// # Errors
    ///
    /// Same as [`GrowVec::try_extend`].
    pub fn assign_iter<I>(&mut self, items: I) -> Result<(), GrowVecError>
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.try_extend(items)
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Returns an iterator from the back to the front.
    #[must_use]
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter::new(self.iter())
    }

    /// Cursor at the first element (`begin`).
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor one past the last element (`end`).
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Cursor at `index`; `index` may be `len` (the end position).
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index > len`.
    pub fn cursor_at(&self, index: usize) -> Result<Cursor<'_, T>, GrowVecError> {
        self.check_position(index)?;
        Ok(Cursor::new(self.as_slice(), index))
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0)
    }

    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self.as_mut_slice(), len)
    }

    /// Mutable cursor at `index`; `index` may be `len`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index > len`.
    pub fn cursor_at_mut(&mut self, index: usize) -> Result<CursorMut<'_, T>, GrowVecError> {
        self.check_position(index)?;
        Ok(CursorMut::new(self.as_mut_slice(), index))
    }

    /// Splits into the raw buffer and the live length, leaving nothing to
    /// drop in `self`.
    pub(crate) fn into_raw_parts(self) -> (RawBuf<T>, usize) {
        let mut this = mem::ManuallyDrop::new(self);
        let len = this.len;
        let mut buf = RawBuf::new();
        buf.swap(&mut this.buf);
        (buf, len)
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` are live; `buf` frees the block afterwards.
        unsafe { self.buf.destroy_range(0, self.len) };
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        infallible(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        infallible(self.assign_slice(source.as_slice()));
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<T, U> PartialEq<GrowVec<U>> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &GrowVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T, U> PartialEq<[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        PartialOrd::partial_cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self.as_slice(), other.as_slice())
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut vec = Self::new();
        infallible(vec.try_extend(items));
        vec
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        infallible(self.try_extend(items));
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, items: I) {
        infallible(self.try_extend(items.into_iter().copied()));
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(items: [T; N]) -> Self {
        let mut vec = infallible(Self::with_capacity(N));
        infallible(vec.insert_run(0, N, items, Growth::Exact));
        vec
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(items: &[T]) -> Self {
        infallible(Self::from_slice(items))
    }
}
