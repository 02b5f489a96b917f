use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RingfieldError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RingfieldError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        RingfieldError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        RingfieldError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RingfieldError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
