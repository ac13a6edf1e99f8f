//! Random-access cursors over the live elements of a `GrowVec`.
//!
//! A cursor is a position, not an element: it can sit anywhere, including
//! one past the end or before the front, and only yields an element when it
//! points into `[0, len)`. `Cursor` and `CursorMut` share the same
//! `Position` arithmetic and differ only in the access they hand out.
//!
//! A cursor borrows the vector, so the vector cannot reallocate or shift
//! elements while the cursor exists.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Signed offset from the first element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Position(isize);

impl Position {
    fn from_index(index: usize) -> Self {
        Position(isize::try_from(index).unwrap_or(isize::MAX))
    }

    fn offset(self, delta: isize) -> Self {
        Position(self.0.saturating_add(delta))
    }

    fn distance(self, origin: Self) -> isize {
        self.0.saturating_sub(origin.0)
    }

    /// Index into a slice of `len` elements, if the position is inside it.
    fn resolve(self, len: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|&index| index < len)
    }
}

/// Read-only random-access cursor.
pub struct Cursor<'a, T> {
    elements: &'a [T],
    pos: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(elements: &'a [T], index: usize) -> Self {
        Self {
            elements,
            pos: Position::from_index(index),
        }
    }

    /// Signed offset from the first element.
    #[must_use]
    pub fn position(&self) -> isize {
        self.pos.0
    }

    /// Index of the current element, if the cursor points at one.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.pos.resolve(self.elements.len())
    }

    /// `true` when the cursor sits one past the last element.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.pos == Position::from_index(self.elements.len())
    }

    /// The element under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&'a T> {
        self.peek(0)
    }

    /// The element `delta` places away from the cursor.
    #[must_use]
    pub fn peek(&self, delta: isize) -> Option<&'a T> {
        let elements = self.elements;
        self.pos
            .offset(delta)
            .resolve(elements.len())
            .map(|index| &elements[index])
    }

    pub fn move_next(&mut self) {
        self.pos = self.pos.offset(1);
    }

    pub fn move_prev(&mut self) {
        self.pos = self.pos.offset(-1);
    }

    /// Number of steps from `origin` to `self`.
    #[must_use]
    pub fn distance(&self, origin: &Self) -> isize {
        self.pos.distance(origin.pos)
    }

    fn same_elements(&self, other: &Self) -> bool {
        core::ptr::eq(self.elements, other.elements)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos.0)
            .field("len", &self.elements.len())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_elements(other) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

/// Cursors over different vectors are unordered.
impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_elements(other) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    fn add(mut self, delta: isize) -> Self {
        self += delta;
        self
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(mut self, delta: isize) -> Self {
        self -= delta;
        self
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, delta: isize) {
        self.pos = self.pos.offset(delta);
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, delta: isize) {
        self.pos = self.pos.offset(delta.saturating_neg());
    }
}

/// Random-access cursor with mutable access to the elements.
pub struct CursorMut<'a, T> {
    elements: &'a mut [T],
    pos: Position,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T], index: usize) -> Self {
        Self {
            elements,
            pos: Position::from_index(index),
        }
    }

    #[must_use]
    pub fn position(&self) -> isize {
        self.pos.0
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.pos.resolve(self.elements.len())
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.pos == Position::from_index(self.elements.len())
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.peek(0)
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.peek_mut(0)
    }

    #[must_use]
    pub fn peek(&self, delta: isize) -> Option<&T> {
        self.pos
            .offset(delta)
            .resolve(self.elements.len())
            .map(|index| &self.elements[index])
    }

    pub fn peek_mut(&mut self, delta: isize) -> Option<&mut T> {
        let index = self.pos.offset(delta).resolve(self.elements.len())?;
        Some(&mut self.elements[index])
    }

    pub fn move_next(&mut self) {
        self.pos = self.pos.offset(1);
    }

    pub fn move_prev(&mut self) {
        self.pos = self.pos.offset(-1);
    }

    /// Read-only view at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            elements: &*self.elements,
            pos: self.pos,
        }
    }

    /// Gives up mutable access and keeps the position.
    #[must_use]
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor {
            elements: self.elements,
            pos: self.pos,
        }
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.pos.0)
            .field("len", &self.elements.len())
            .finish()
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Self;

    fn add(mut self, delta: isize) -> Self {
        self += delta;
        self
    }
}

impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Self;

    fn sub(mut self, delta: isize) -> Self {
        self -= delta;
        self
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    fn add_assign(&mut self, delta: isize) {
        self.pos = self.pos.offset(delta);
    }
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, delta: isize) {
        self.pos = self.pos.offset(delta.saturating_neg());
    }
}
