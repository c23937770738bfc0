use super::*;

fn range(start: u32, end: u32) -> OpRange {
    OpRange::new(OpIndex(start), OpIndex(end)).unwrap()
}

#[test]
fn new_rejects_inverted_range() {
    let err = OpRange::new(OpIndex(4), OpIndex(2)).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn point_range_is_single_op() {
    let r = OpRange::point(OpIndex(7));
    assert_eq!(r.start, r.end);
    assert_eq!(r.len_ops(), 1);
    assert!(r.contains(OpIndex(7)));
    assert!(!r.contains(OpIndex(8)));
}

#[test]
fn full_range_length_does_not_overflow() {
    assert_eq!(range(0, u32::MAX).len_ops(), u64::from(u32::MAX) + 1);
    assert_eq!(range(u32::MAX, u32::MAX).len_ops(), 1);
    assert_eq!(range(3, 5).len_ops(), 3);
}

#[test]
fn union_covers_min_start_and_max_end() {
    let u = range(3, 5).union(range(0, 1)).union(range(4, 9));
    assert_eq!(u, range(0, 9));
}

#[test]
fn overlap_is_inclusive_at_boundaries() {
    assert!(range(0, 2).overlaps(range(2, 4)));
    assert!(range(2, 4).overlaps(range(0, 2)));
    assert!(!range(0, 2).overlaps(range(3, 5)));
    assert!(range(1, 4).overlaps(range(2, 2)));
}
