use crate::{queue::SliceFull, Consumer, Observer, Producer, StaticQueue};

#[test]
fn push_all_is_all_or_nothing() {
    let mut q = StaticQueue::<i32, 5>::default();

    assert_eq!(q.try_push_all(&[1, 2, 3, 4, 5, 6]), Err(SliceFull));
    assert!(q.is_empty());

    assert_eq!(q.try_push_all(&[1, 2]), Ok(()));
    assert_eq!(q.try_push_all(&[3, 4, 5]), Err(SliceFull));
    assert_eq!(q.len(), 2);

    assert_eq!(q.try_push_all(&[3, 4]), Ok(()));
    assert!(q.is_full());
    assert_eq!(q.try_push_all(&[9]), Err(SliceFull));

    for i in 1..=4 {
        assert_eq!(q.try_pop(), Some(i));
    }
}

#[test]
fn push_all_of_empty_slice_always_succeeds() {
    let mut q = StaticQueue::<i32, 2>::default();
    q.try_push(1).unwrap();
    assert!(q.is_full());
    assert_eq!(q.try_push_all(&[]), Ok(()));
    assert_eq!(q.len(), 1);
}

#[test]
fn push_all_across_physical_wrap() {
    let mut q = StaticQueue::<i32, 5>::default();
    q.try_push_all(&[0, 0, 0]).unwrap();
    assert_eq!(q.skip(3), 3);

    // Tail sits at slot 3 of 5; four items must wrap.
    q.try_push_all(&[5, 6, 7, 8]).unwrap();
    assert_eq!(q.len(), 4);
    assert!(q.pop_iter().eq([5, 6, 7, 8]));
}

#[test]
fn pop_slice_clamps_to_occupied() {
    let mut q = StaticQueue::<i32, 5>::default();
    q.try_push_all(&[1, 2, 3]).unwrap();

    let mut out = [0; 8];
    assert_eq!(q.pop_slice(&mut out), 3);
    assert_eq!(&out[..3], &[1, 2, 3]);
    assert!(q.is_empty());

    assert_eq!(q.pop_slice(&mut out), 0);
}

#[test]
fn pop_slice_partial() {
    let mut q = StaticQueue::<i32, 5>::default();
    q.try_push_all(&[1, 2, 3, 4]).unwrap();

    let mut out = [0; 2];
    assert_eq!(q.pop_slice(&mut out), 2);
    assert_eq!(out, [1, 2]);
    assert_eq!(q.len(), 2);
}

#[test]
fn skip_clamps_to_occupied() {
    let mut q = StaticQueue::<i32, 9>::default();
    assert_eq!(q.push_iter(0..8), 8);

    assert_eq!(q.skip(4), 4);
    assert_eq!(q.skip(8), 4);
    assert_eq!(q.skip(4), 0);
}

#[test]
fn push_iter_stops_when_full() {
    let mut q = StaticQueue::<i32, 5>::default();
    let mut iter = 0..10;
    assert_eq!(q.push_iter(&mut iter), 4);
    assert_eq!(iter.next(), Some(4));
    assert!(q.pop_iter().eq(0..4));
}
