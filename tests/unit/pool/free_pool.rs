use super::*;
use crate::resource::key::{PixelFormat, SurfaceDesc};

fn key(w: u32, h: u32) -> ShapeKey {
    SurfaceDesc::new(w, h, PixelFormat::Rgba8Unorm)
        .unwrap()
        .shape_key()
}

#[test]
fn take_only_matches_equal_keys() {
    let mut pool = FreePool::new(FreePoolOpts::default());
    assert!(pool.release(&key(8, 8), "a"));

    assert_eq!(pool.take(&key(8, 16)), None);
    assert_eq!(pool.take(&key(8, 8)), Some("a"));
    assert_eq!(pool.take(&key(8, 8)), None);
    assert_eq!(pool.len(), 0);
}

#[test]
fn same_key_holds_multiple_entries() {
    let mut pool = FreePool::new(FreePoolOpts::default());
    let k = key(32, 32);
    pool.release(&k, 1);
    pool.release(&k, 2);
    pool.release(&key(4, 4), 3);

    assert_eq!(pool.len(), 3);
    assert_eq!(pool.key_count(), 2);

    let mut got = vec![pool.take(&k).unwrap(), pool.take(&k).unwrap()];
    got.sort();
    assert_eq!(got, vec![1, 2]);
    assert_eq!(pool.key_count(), 1);
}

#[test]
fn pool_honors_bucket_cap() {
    let mut pool = FreePool::new(FreePoolOpts { max_per_key: 1 });
    let k = key(8, 8);

    assert!(pool.release(&k, 'a'));
    assert!(!pool.release(&k, 'b'));

    let st = pool.stats();
    assert_eq!(st.retained, 1);
    assert_eq!(st.released, 1);
    assert_eq!(st.dropped_on_release, 1);
}

#[test]
fn zero_cap_disables_retention() {
    let mut pool = FreePool::new(FreePoolOpts { max_per_key: 0 });
    assert!(!pool.release(&key(2, 2), ()));
    assert_eq!(pool.len(), 0);
    assert_eq!(pool.stats().dropped_on_release, 1);
}

#[test]
fn reuse_is_counted() {
    let mut pool = FreePool::new(FreePoolOpts::default());
    let k = key(16, 16);
    pool.release(&k, 0u8);
    pool.take(&k);
    assert_eq!(pool.stats().reused, 1);
    assert_eq!(pool.stats().retained, 0);
}
