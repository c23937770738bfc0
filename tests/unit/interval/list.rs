use super::*;
use crate::interval::arena::NodeArena;

fn range(start: u32, end: u32) -> OpRange {
    OpRange::new(OpIndex(start), OpIndex(end)).unwrap()
}

fn ids(n: usize) -> Vec<NodeId> {
    let mut arena = NodeArena::new();
    (0..n).map(|i| arena.insert(i)).collect()
}

#[test]
fn start_order_is_stable_for_ties() {
    let n = ids(4);
    let mut list = IntervalList::new(ListOrder::ByIncreasingStart);
    list.insert(n[0], range(2, 9));
    list.insert(n[1], range(0, 1));
    list.insert(n[2], range(2, 3));
    list.insert(n[3], range(1, 7));

    let order: Vec<NodeId> = list.iter().collect();
    assert_eq!(order, vec![n[1], n[3], n[0], n[2]]);
}

#[test]
fn end_order_drives_head() {
    let n = ids(3);
    let mut list = IntervalList::new(ListOrder::ByIncreasingEnd);
    list.insert(n[0], range(0, 8));
    list.insert(n[1], range(3, 4));
    list.insert(n[2], range(1, 6));

    assert_eq!(list.peek_head(), Some((OpIndex(4), n[1])));
    assert_eq!(list.pop_head(), Some(n[1]));
    assert_eq!(list.pop_head(), Some(n[2]));
    assert_eq!(list.pop_head(), Some(n[0]));
    assert_eq!(list.len(), 0);
    assert_eq!(list.pop_head(), None);
}

#[test]
fn remove_then_reinsert_repositions() {
    let n = ids(2);
    let mut list = IntervalList::new(ListOrder::ByIncreasingStart);
    list.insert(n[0], range(1, 2));
    list.insert(n[1], range(3, 5));

    assert!(list.remove(n[1]));
    assert!(!list.remove(n[1]));
    list.insert(n[1], range(0, 5));

    assert_eq!(list.len(), 2);
    assert_eq!(list.peek_head(), Some((OpIndex(0), n[1])));
}
