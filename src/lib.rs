#![no_std]

//! `GrowVec`: a contiguous growable array with geometric growth.
//!
//! `GrowVec<T>` owns a single heap buffer split into a live prefix
//! (`len` constructed elements) and uninitialized spare slots
//! (`capacity - len`). Appends that fit use a spare slot; appends that do not
//! fit move everything into a buffer 1.5 times larger.
//!
//! This crate is `no_std` compatible and only needs the `alloc` crate.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`, `emplace_back()`: amortized O(1)
//! - `pop()`, `at()`, indexing: O(1)
//! - `insert()`, `remove()`, `erase_range()`: O(n) - the tail is shifted
//! - `reserve()`, `shrink_to_fit()`: O(n) when they reallocate
//! - `clear()`, `truncate()`: O(dropped elements), capacity is kept
//!
//! ## Growth Policy
//! - A reallocating operation asks for `max(required, capacity * 1.5)` slots
//! - The step saturates at [`max_size`], which keeps the buffer's byte size
//!   within `isize::MAX`
//! - `reserve(n)` and `resize(n)` allocate exactly `n` slots
//!
//! # Failure Behavior
//!
//! Every operation that may allocate returns `Result<_, GrowVecError>`.
//! A failed allocation leaves the vector exactly as it was. Element
//! constructors that panic (a `Clone` impl, a closure given to
//! `emplace_back`) unwind through the vector without leaking or double
//! dropping: appends and reallocating inserts keep the vector unchanged,
//! in-place inserts put the tail back where it was.
//!
//! ```
//! # use growvec::{GrowVec, GrowVecError};
//! let mut v: GrowVec<u64> = GrowVec::new();
//! v.push(1).unwrap();
//!
//! assert_eq!(
//!     v.reserve(usize::MAX),
//!     Err(GrowVecError::CapacityOverflow {
//!         requested: usize::MAX,
//!         max: v.max_size(),
//!     })
//! );
//! assert_eq!(v, [1]);
//! ```
//!
//! # Vector Interface
//!
//! ```
//! # use growvec::growvec;
//! let mut v = growvec![1, 2, 3, 4, 5];
//!
//! v.erase(2).unwrap();
//! assert_eq!(v, [1, 2, 4, 5]);
//!
//! v.insert(2, 3).unwrap();
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//!
//! assert_eq!(v.at(4), Ok(&5));
//! assert!(v.at(5).is_err());
//!
//! v.resize_with_value(7, 0).unwrap();
//! assert_eq!(v, [1, 2, 3, 4, 5, 0, 0]);
//!
//! v.erase_range(1..6).unwrap();
//! assert_eq!(v, [1, 0]);
//! ```
//!
//! # Stack Interface
//!
//! ```
//! # use growvec::GrowVec;
//! let mut v = GrowVec::new();
//!
//! v.push("first").unwrap();
//! v.push("second").unwrap();
//!
//! assert_eq!(v.back(), Some(&"second"));
//! assert_eq!(v.pop(), Some("second"));
//! assert_eq!(v.pop(), Some("first"));
//!
//! assert!(v.try_pop().is_err());
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use growvec::growvec;
//! let v = growvec![10, 5, 12, 6, 4, 2, 0];
//!
//! let forward: Vec<_> = v.iter().copied().collect();
//! assert_eq!(forward, [10, 5, 12, 6, 4, 2, 0]);
//!
//! let backward: Vec<_> = v.iter_rev().copied().collect();
//! assert_eq!(backward, [0, 2, 4, 6, 12, 5, 10]);
//! ```
//!
//! # Cursors
//!
//! Cursors are random-access positions with pointer-like arithmetic:
//!
//! ```
//! # use growvec::growvec;
//! let v = growvec![1, 2, 3, 4];
//!
//! let begin = v.cursor_front();
//! let end = v.cursor_end();
//! assert_eq!(end.distance(&begin), 4);
//!
//! let third = begin + 2;
//! assert_eq!(third.current(), Some(&3));
//! assert_eq!(third.peek(-1), Some(&2));
//! assert!(begin < third && third < end);
//! ```
//!
//! # Features
//!
//! - `std`: implements `std::error::Error` for [`GrowVecError`]
//! - `serde`: `Serialize` / `Deserialize` as a sequence

extern crate alloc;

#[cfg(test)]
extern crate std;

mod macros;

mod cursor;
mod error;
mod iter;
mod storage;
mod vec;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export public types and traits
pub use cursor::{Cursor, CursorMut};
pub use error::GrowVecError;
pub use iter::{IntoIter, Iter, IterMut, RevIter};
pub use storage::max_size;
pub use vec::GrowVec;
