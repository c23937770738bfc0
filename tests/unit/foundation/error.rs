use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AllocError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(AllocError::misuse("x").to_string().contains("misuse error:"));
    assert!(
        AllocError::creation("x")
            .to_string()
            .contains("resource creation failed:")
    );
    assert!(
        AllocError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("out of device memory");
    let err = AllocError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("out of device memory"));
    assert!(!err.is_misuse());
}

#[test]
fn misuse_is_classified() {
    assert!(AllocError::misuse("assign called twice").is_misuse());
    assert!(!AllocError::validation("start > end").is_misuse());
}
