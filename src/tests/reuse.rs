use crate::StaticList;

const CAP: usize = 8;

#[test]
fn fill_clear_fill_never_leaks_capacity() {
    let mut list = StaticList::<u32, CAP>::new();

    for round in 0..3 {
        for i in 0..CAP as u32 {
            assert!(list.try_push_back(round * 100 + i).is_ok());
        }
        assert!(list.is_full());
        assert!(list.try_push_back(999).is_err());
        assert_eq!(list.pool().remaining(), 0);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.pool().remaining(), CAP);
    }
}

#[test]
fn fill_erase_all_by_value_restores_capacity() {
    let mut list = StaticList::<u32, CAP>::new();

    for _ in 0..2 {
        for i in 0..CAP as u32 {
            assert!(list.try_push_back(i).is_ok());
        }
        for i in 0..CAP as u32 {
            assert!(list.remove(&i));
        }
        assert!(list.is_empty());
        assert_eq!(list.pool().remaining(), CAP);
    }
}

#[test]
fn interleaved_churn_keeps_capacity_balance() {
    let mut list = StaticList::<u32, 4>::new();

    for i in 0..100 {
        assert!(list.try_push_back(i).is_ok());
        assert!(list.try_push_front(i).is_ok());
        assert_eq!(list.pop_back(), Some(i));
        assert_eq!(list.pop_front(), Some(i));
    }
    assert!(list.is_empty());
    assert_eq!(list.pool().remaining(), 4);
}

#[test]
fn freed_nodes_are_immediately_reusable() {
    let mut list = StaticList::<u32, 2>::new();
    list.try_push_back(1).unwrap();
    list.try_push_back(2).unwrap();
    assert!(list.is_full());

    assert_eq!(list.pop_front(), Some(1));
    assert!(list.try_push_back(3).is_ok());
    assert!(list.is_full());
    assert!(list.iter().eq([2, 3].iter()));
}
