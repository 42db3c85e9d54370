use crate::{Consumer, Producer, StaticList, StaticQueue};
use core::cell::Cell;

struct Counted<'a>(&'a Cell<usize>);

impl Drop for Counted<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn queue_drop_drops_occupied() {
    let drops = Cell::new(0);
    {
        let mut q = StaticQueue::<Counted, 5>::default();
        for _ in 0..3 {
            assert!(q.try_push(Counted(&drops)).is_ok());
        }
        let popped = q.try_pop();
        assert!(popped.is_some());
        drop(popped);
        assert_eq!(drops.get(), 1);
    }
    assert_eq!(drops.get(), 3);
}

#[test]
fn queue_clear_drops_all() {
    let drops = Cell::new(0);
    let mut q = StaticQueue::<Counted, 5>::default();
    for _ in 0..4 {
        assert!(q.try_push(Counted(&drops)).is_ok());
    }
    assert_eq!(q.clear(), 4);
    assert_eq!(drops.get(), 4);
    drop(q);
    assert_eq!(drops.get(), 4);
}

#[test]
fn skip_drops_skipped_items_only() {
    let drops = Cell::new(0);
    let mut q = StaticQueue::<Counted, 5>::default();
    for _ in 0..4 {
        assert!(q.try_push(Counted(&drops)).is_ok());
    }
    assert_eq!(q.skip(2), 2);
    assert_eq!(drops.get(), 2);
}

#[test]
fn rejected_push_returns_item_undropped() {
    let drops = Cell::new(0);
    let mut q = StaticQueue::<Counted, 2>::default();
    assert!(q.try_push(Counted(&drops)).is_ok());
    let rejected = q.try_push(Counted(&drops));
    assert_eq!(drops.get(), 0);
    drop(rejected);
    assert_eq!(drops.get(), 1);
}

#[test]
fn pool_drop_drops_live_elements() {
    let drops = Cell::new(0);
    {
        let mut list = StaticList::<Counted, 4>::new();
        for _ in 0..3 {
            assert!(list.try_push_back(Counted(&drops)).is_ok());
        }
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 3);
}

#[test]
fn list_clear_drops_all() {
    let drops = Cell::new(0);
    let mut list = StaticList::<Counted, 4>::new();
    for _ in 0..4 {
        assert!(list.try_push_back(Counted(&drops)).is_ok());
    }
    list.clear();
    assert_eq!(drops.get(), 4);
    drop(list);
    assert_eq!(drops.get(), 4);
}
