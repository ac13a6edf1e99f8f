use growvec::{growvec, GrowVec, GrowVecError};

fn assert_invariants<T>(vec: &GrowVec<T>) {
    assert!(vec.len() <= vec.capacity());
    assert_eq!(vec.is_empty(), vec.len() == 0);
    assert_eq!(vec.spare_capacity(), vec.capacity() - vec.len());
}

#[test]
fn test_default_construction() {
    let vec: GrowVec<i32> = GrowVec::new();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
    assert!(vec.is_empty());

    let vec: GrowVec<i32> = GrowVec::default();
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_count_construction_default_constructs() {
    let vec: GrowVec<i32> = GrowVec::with_len(4).unwrap();
    assert_eq!(vec, [0, 0, 0, 0]);
    assert_eq!(vec.capacity(), 4);
    assert_invariants(&vec);
}

#[test]
fn test_count_and_value_construction() {
    let vec = GrowVec::from_elem(3, String::from("ab")).unwrap();
    assert_eq!(vec, ["ab", "ab", "ab"]);
    assert_eq!(vec.capacity(), 3);

    let empty = GrowVec::from_elem(0, 50).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.capacity(), 0);
}

#[test]
fn test_list_construction_round_trip() {
    let vec = growvec![10, 5, 12, 6, 4, 2, 0];
    assert_eq!(vec.capacity(), 7);

    let forward: Vec<i32> = vec.iter().copied().collect();
    assert_eq!(forward, [10, 5, 12, 6, 4, 2, 0]);

    let backward: Vec<i32> = vec.iter_rev().copied().collect();
    assert_eq!(backward, [0, 2, 4, 6, 12, 5, 10]);
}

#[test]
fn test_slice_construction() {
    let source = [1u8, 2, 3];
    let vec = GrowVec::from_slice(&source).unwrap();
    assert_eq!(vec, source);

    let vec: GrowVec<u8> = GrowVec::from(&source[1..]);
    assert_eq!(vec, [2, 3]);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_collect_from_iterator() {
    let vec: GrowVec<u32> = (1..=5).collect();
    assert_eq!(vec, [1, 2, 3, 4, 5]);
    assert_invariants(&vec);
}

#[test]
fn test_erase_then_reinsert() {
    let mut vec = growvec![1, 2, 3, 4, 5];

    assert_eq!(vec.erase(2), Ok(2));
    assert_eq!(vec, [1, 2, 4, 5]);
    assert_eq!(vec.len(), 4);

    assert_eq!(vec.insert(2, 3), Ok(2));
    assert_eq!(vec, [1, 2, 3, 4, 5]);
    assert_eq!(vec.len(), 5);
}

#[test]
fn test_bounds_checked_access() {
    let mut vec = growvec![7, 8, 9];

    for i in 0..vec.len() {
        assert_eq!(vec.at(i), Ok(&vec[i]));
    }
    assert_eq!(
        vec.at(3),
        Err(GrowVecError::IndexOutOfBounds {
            index: 3,
            length: 3,
        })
    );

    *vec.at_mut(1).unwrap() = 80;
    assert_eq!(vec, [7, 80, 9]);
    assert!(vec.at_mut(10).is_err());

    let empty: GrowVec<u8> = GrowVec::new();
    assert!(empty.at(0).is_err());
}

#[test]
#[should_panic]
fn test_index_out_of_bounds_panics() {
    let vec = growvec![1, 2];
    let _ = vec[2];
}

#[test]
fn test_front_and_back() {
    let mut vec = growvec!['a', 'b', 'c'];
    assert_eq!(vec.front(), Some(&'a'));
    assert_eq!(vec.back(), Some(&'c'));

    *vec.front_mut().unwrap() = 'x';
    *vec.back_mut().unwrap() = 'z';
    assert_eq!(vec, ['x', 'b', 'z']);

    let empty: GrowVec<char> = GrowVec::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.try_front(), Err(GrowVecError::EmptyVector));
    assert_eq!(empty.try_back(), Err(GrowVecError::EmptyVector));
}

#[test]
fn test_data_pointer_spans_live_elements() {
    let mut vec = growvec![1u16, 2, 3];
    let ptr = vec.as_ptr();
    // SAFETY: three live elements start at `ptr`.
    let viewed = unsafe { std::slice::from_raw_parts(ptr, 3) };
    assert_eq!(viewed, [1, 2, 3]);

    unsafe { *vec.as_mut_ptr().add(1) = 20 };
    assert_eq!(vec, [1, 20, 3]);
}

#[test]
fn test_copy_independence() {
    let a = growvec![1, 2, 3];
    let mut b = GrowVec::new();
    b.clone_from(&a);

    b.push(4).unwrap();
    b[0] = 100;

    assert_eq!(a, [1, 2, 3]);
    assert_eq!(a.len(), 3);
    assert_eq!(b, [100, 2, 3, 4]);
}

#[test]
fn test_clone_allocates_exactly_len() {
    let mut a: GrowVec<i32> = GrowVec::with_capacity(16).unwrap();
    a.extend_from_slice(&[1, 2, 3]).unwrap();

    let b = a.clone();
    assert_eq!(b, a);
    assert_eq!(b.capacity(), 3);
    assert_ne!(b.as_ptr(), a.as_ptr());
}

#[test]
fn test_clone_from_reuses_capacity() {
    let source = growvec![String::from("x"), String::from("y")];
    let mut target = growvec![
        String::from("1"),
        String::from("2"),
        String::from("3"),
        String::from("4"),
    ];
    let buffer = target.as_ptr();

    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 4);
    assert_eq!(target.as_ptr(), buffer);
}

#[test]
fn test_clone_from_grows_when_needed() {
    let source = growvec![1, 2, 3, 4, 5];
    let mut target = growvec![9];

    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 5);
}

#[test]
fn test_take_empties_source() {
    let mut a = growvec![1, 2, 3];
    let buffer = a.as_ptr();

    let b = a.take();

    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 0);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(b.as_ptr(), buffer);

    // The emptied source stays usable.
    a.push(5).unwrap();
    assert_eq!(a, [5]);
}

#[test]
fn test_move_assignment_via_take() {
    let mut a = growvec![String::from("moved")];
    let mut b = growvec![String::from("old"), String::from("contents")];
    assert_eq!(b.len(), 2);

    b = a.take();

    assert_eq!(b, ["moved"]);
    assert!(a.is_empty());
    assert_eq!(a.capacity(), 0);
}

#[test]
fn test_swap_with_exchanges_everything() {
    let mut a = growvec![1, 2, 3];
    let mut b: GrowVec<i32> = GrowVec::with_capacity(10).unwrap();
    b.push(9).unwrap();

    a.swap_with(&mut b);

    assert_eq!(a, [9]);
    assert_eq!(a.capacity(), 10);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(b.capacity(), 3);
}

#[test]
fn test_relational_operators() {
    let a = growvec![1, 2, 3];
    let b = growvec![1, 2, 4];
    let c = growvec![1, 2];

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert!(a < b);
    assert!(c < a);
    assert!(b > c);
    assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);

    let empty: GrowVec<i32> = GrowVec::new();
    assert!(empty < c);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut a: GrowVec<i32> = GrowVec::with_capacity(50).unwrap();
    a.extend_from_slice(&[4, 5]).unwrap();
    let b = growvec![4, 5];

    assert_eq!(a, b);
}

#[test]
fn test_hash_matches_slice() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let vec = growvec![3u8, 1, 4];
    let mut left = DefaultHasher::new();
    vec.hash(&mut left);
    let mut right = DefaultHasher::new();
    [3u8, 1, 4][..].hash(&mut right);

    assert_eq!(left.finish(), right.finish());
}

#[test]
fn test_debug_format() {
    let vec = growvec![1, 2];
    assert_eq!(format!("{vec:?}"), "[1, 2]");
}

#[test]
fn test_slice_methods_through_deref() {
    let mut vec = growvec![3, 1, 2];
    vec.sort_unstable();
    assert_eq!(vec, [1, 2, 3]);
    assert!(vec.contains(&2));
    assert_eq!(vec.iter().sum::<i32>(), 6);
}

#[test]
fn test_zero_sized_elements() {
    let mut vec: GrowVec<()> = GrowVec::new();
    for _ in 0..100 {
        vec.push(()).unwrap();
    }
    assert_eq!(vec.len(), 100);
    assert_invariants(&vec);
    assert_eq!(vec.pop(), Some(()));
    vec.shrink_to_fit().unwrap();
    assert_eq!(vec.capacity(), 99);
}

#[test]
fn test_error_messages() {
    let err = GrowVecError::IndexOutOfBounds {
        index: 5,
        length: 2,
    };
    assert_eq!(
        err.to_string(),
        "Index out of bounds: index 5 is beyond vector length 2"
    );
    assert_eq!(
        GrowVecError::EmptyVector.to_string(),
        "Operation on empty vector"
    );
}
