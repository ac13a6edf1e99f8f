use growvec::{growvec, GrowVec, GrowVecError};

#[test]
fn test_insert_at_head_middle_and_tail() {
    let mut vec = growvec![2, 4];

    assert_eq!(vec.insert(0, 1), Ok(0));
    assert_eq!(vec.insert(2, 3), Ok(2));
    assert_eq!(vec.insert(4, 5), Ok(4));

    assert_eq!(vec, [1, 2, 3, 4, 5]);
}

#[test]
fn test_insert_in_place_keeps_buffer() {
    let mut vec: GrowVec<i32> = GrowVec::with_capacity(4).unwrap();
    vec.extend_from_slice(&[1, 3]).unwrap();
    let buffer = vec.as_ptr();

    vec.insert(1, 2).unwrap();

    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(vec.as_ptr(), buffer);
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_insert_past_len_is_rejected() {
    let mut vec = growvec![1, 2];

    assert_eq!(
        vec.insert(3, 9),
        Err(GrowVecError::IndexOutOfBounds {
            index: 3,
            length: 2,
        })
    );
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_emplace_builds_in_position() {
    let mut vec = growvec![String::from("a"), String::from("c")];

    vec.emplace(1, || String::from("b")).unwrap();
    vec.emplace(3, || String::from("d")).unwrap();

    assert_eq!(vec, ["a", "b", "c", "d"]);
}

#[test]
fn test_insert_n_with_and_without_room() {
    let mut vec: GrowVec<u8> = GrowVec::with_capacity(8).unwrap();
    vec.extend_from_slice(&[1, 2, 3]).unwrap();

    vec.insert_n(1, 2, 0).unwrap();
    assert_eq!(vec, [1, 0, 0, 2, 3]);
    assert_eq!(vec.capacity(), 8);

    vec.insert_n(5, 6, 9).unwrap();
    assert_eq!(vec, [1, 0, 0, 2, 3, 9, 9, 9, 9, 9, 9]);
    assert_eq!(vec.capacity(), 12);

    assert_eq!(vec.insert_n(0, 0, 7), Ok(0));
    assert_eq!(vec.len(), 11);
}

#[test]
fn test_insert_slice_in_middle() {
    let mut vec = growvec![1, 5];

    assert_eq!(vec.insert_slice(1, &[2, 3, 4]), Ok(1));
    assert_eq!(vec, [1, 2, 3, 4, 5]);

    vec.insert_slice(5, &[6]).unwrap();
    vec.insert_slice(0, &[]).unwrap();
    assert_eq!(vec, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_insert_iter_keeps_order() {
    let mut vec = growvec![0, 10];

    vec.insert_iter(1, (1..4).map(|i| i * 2)).unwrap();
    assert_eq!(vec, [0, 2, 4, 6, 10]);

    assert!(vec.insert_iter(9, [1]).is_err());
}

#[test]
fn test_remove_and_swap_remove() {
    let mut vec = growvec!['a', 'b', 'c', 'd'];

    assert_eq!(vec.remove(1), Ok('b'));
    assert_eq!(vec, ['a', 'c', 'd']);

    assert_eq!(vec.swap_remove(0), Ok('a'));
    assert_eq!(vec, ['d', 'c']);

    assert!(vec.remove(2).is_err());
    assert!(vec.swap_remove(2).is_err());
}

#[test]
fn test_erase_last_returns_end() {
    let mut vec = growvec![1, 2, 3];

    assert_eq!(vec.erase(2), Ok(2));
    assert_eq!(vec.len(), 2);
    assert!(vec.cursor_at(2).unwrap().is_end());
    assert!(vec.erase(2).is_err());
}

#[test]
fn test_erase_range() {
    let mut vec: GrowVec<i32> = (0..10).collect();
    let capacity = vec.capacity();

    assert_eq!(vec.erase_range(2..5), Ok(2));
    assert_eq!(vec, [0, 1, 5, 6, 7, 8, 9]);

    assert_eq!(vec.erase_range(5..), Ok(5));
    assert_eq!(vec, [0, 1, 5, 6, 7]);

    assert_eq!(vec.erase_range(..=0), Ok(0));
    assert_eq!(vec, [1, 5, 6, 7]);

    assert_eq!(vec.erase_range(2..2), Ok(2));
    assert_eq!(vec.len(), 4);
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_erase_range_rejects_bad_ranges() {
    let mut vec = growvec![1, 2, 3];

    assert_eq!(
        vec.erase_range(1..5),
        Err(GrowVecError::InvalidRange {
            start: 1,
            end: 5,
            length: 3,
        })
    );
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 2..1;
    assert!(vec.erase_range(reversed).is_err());
    assert_eq!(vec, [1, 2, 3]);
}

#[test]
fn test_erase_range_drops_exactly_the_range() {
    use std::rc::Rc;

    let shared = Rc::new(());
    let mut vec: GrowVec<Rc<()>> = (0..6).map(|_| Rc::clone(&shared)).collect();

    vec.erase_range(1..4).unwrap();

    assert_eq!(vec.len(), 3);
    assert_eq!(Rc::strong_count(&shared), 4);
}

#[test]
fn test_retain_keeps_order() {
    let mut vec: GrowVec<u32> = (1..=10).collect();

    vec.retain(|value| *value % 3 != 0);

    assert_eq!(vec, [1, 2, 4, 5, 7, 8, 10]);
}

#[test]
fn test_truncate() {
    let mut vec = growvec![1, 2, 3, 4];

    vec.truncate(10);
    assert_eq!(vec.len(), 4);

    vec.truncate(1);
    assert_eq!(vec, [1]);
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_resize_grows_exactly() {
    let mut vec = growvec![1, 2];

    vec.resize(5).unwrap();
    assert_eq!(vec, [1, 2, 0, 0, 0]);
    assert_eq!(vec.capacity(), 5);

    vec.resize(1).unwrap();
    assert_eq!(vec, [1]);
    assert_eq!(vec.capacity(), 5);

    vec.resize(1).unwrap();
    assert_eq!(vec.len(), 1);
}

#[test]
fn test_resize_with_value_and_with() {
    let mut vec = growvec![String::from("keep")];

    vec.resize_with_value(3, String::from("fill")).unwrap();
    assert_eq!(vec, ["keep", "fill", "fill"]);

    let mut counter = 0;
    vec.resize_with(5, || {
        counter += 1;
        counter.to_string()
    })
    .unwrap();
    assert_eq!(vec, ["keep", "fill", "fill", "1", "2"]);

    vec.resize_with_value(0, String::new()).unwrap();
    assert!(vec.is_empty());
}

#[test]
fn test_assign_count_and_value() {
    let mut vec = growvec![1, 2, 3, 4, 5];
    let buffer = vec.as_ptr();

    vec.assign(2, 7).unwrap();
    assert_eq!(vec, [7, 7]);
    assert_eq!(vec.as_ptr(), buffer);

    vec.assign(4, 8).unwrap();
    assert_eq!(vec, [8, 8, 8, 8]);
    assert_eq!(vec.as_ptr(), buffer);

    vec.assign(9, 1).unwrap();
    assert_eq!(vec.len(), 9);
    assert_eq!(vec.capacity(), 9);
}

#[test]
fn test_assign_slice_shorter_and_longer() {
    let mut vec = growvec![String::from("x"), String::from("y"), String::from("z")];

    vec.assign_slice(&[String::from("a")]).unwrap();
    assert_eq!(vec, ["a"]);
    assert_eq!(vec.capacity(), 3);

    let longer: Vec<String> = (0..5).map(|i| i.to_string()).collect();
    vec.assign_slice(&longer).unwrap();
    assert_eq!(vec, ["0", "1", "2", "3", "4"]);
    assert_eq!(vec.capacity(), 5);
}

#[test]
fn test_assign_iter_replaces_contents() {
    let mut vec = growvec![9, 9, 9];

    vec.assign_iter([1, 2]).unwrap();
    assert_eq!(vec, [1, 2]);

    vec.assign_iter(std::iter::empty()).unwrap();
    assert!(vec.is_empty());
}

#[test]
fn test_extend_variants() {
    let mut vec = growvec![1];

    vec.extend(vec![2, 3]);
    vec.extend(&[4, 5]);
    vec.try_extend(6..=7).unwrap();
    vec.extend_from_slice(&[8]).unwrap();

    assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_mutation_through_index_and_slice() {
    let mut vec = growvec![1, 2, 3, 4];

    vec[0] = 10;
    vec[1..3].copy_from_slice(&[20, 30]);
    vec.as_mut_slice().reverse();

    assert_eq!(vec, [4, 30, 20, 10]);
    assert_eq!(&vec[..2], &[4, 30]);
}
