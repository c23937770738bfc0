use super::*;
use std::collections::HashSet;

fn rgba(w: u32, h: u32) -> SurfaceDesc {
    SurfaceDesc::new(w, h, PixelFormat::Rgba8Unorm).unwrap()
}

#[test]
fn equal_descs_produce_equal_keys() {
    let a = rgba(256, 128).shape_key();
    let b = rgba(256, 128).shape_key();
    assert_eq!(a, b);
    assert_eq!(a.hash_value(), b.hash_value());
    assert_eq!(a.domain(), SURFACE_KEY_DOMAIN);
}

#[test]
fn every_desc_field_participates_in_the_key() {
    let base = rgba(64, 64);
    let variants = [
        base,
        rgba(65, 64),
        rgba(64, 65),
        SurfaceDesc::new(64, 64, PixelFormat::Alpha8).unwrap(),
        base.with_samples(4).unwrap(),
        base.with_mipmaps(true),
    ];
    let keys: HashSet<ShapeKey> = variants.iter().map(|d| d.shape_key()).collect();
    assert_eq!(keys.len(), variants.len());
}

#[test]
fn domain_separates_identical_payloads() {
    let a = ShapeKey::builder(7).word(1).word(2).finish();
    let b = ShapeKey::builder(8).word(1).word(2).finish();
    assert_ne!(a, b);
    assert_eq!(a.words(), &[1, 2]);
}

#[test]
fn desc_validation() {
    assert!(SurfaceDesc::new(0, 4, PixelFormat::Rgba8Unorm).is_err());
    assert!(rgba(4, 4).with_samples(0).is_err());
    assert_eq!(rgba(4, 4).byte_len(), 64);
    assert_eq!(rgba(4, 4).with_samples(4).unwrap().byte_len(), 256);
}
