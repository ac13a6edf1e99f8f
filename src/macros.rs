/// Creates a `GrowVec` from a list of elements or from a value and a count.
///
/// ## Forms
///
/// ### Empty vector
/// ```
/// use growvec::{growvec, GrowVec};
/// let v: GrowVec<u8> = growvec![];
/// assert_eq!(v.capacity(), 0);
/// ```
///
/// ### Vector from elements
/// ```
/// use growvec::growvec;
/// let v = growvec![10, 5, 12];
/// assert_eq!(v, [10, 5, 12]);
/// assert_eq!(v.capacity(), 3);
/// ```
///
/// ### `count` clones of a value
/// ```
/// use growvec::growvec;
/// let v = growvec!["x"; 4];
/// assert_eq!(v, ["x", "x", "x", "x"]);
/// ```
///
/// # Panics
///
/// Panics if the buffer cannot be allocated.
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($elem:expr; $count:expr) => {
        match $crate::GrowVec::from_elem($count, $elem) {
            ::core::result::Result::Ok(vec) => vec,
            ::core::result::Result::Err(err) => ::core::panic!("{}", err),
        }
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($elem),+])
    };
}
