use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EmitError::unexpected_variant("x")
            .to_string()
            .contains("unexpected variant:")
    );
    assert!(
        EmitError::missing_field("x")
            .to_string()
            .contains("missing field:")
    );
    assert!(
        EmitError::inconsistent("x")
            .to_string()
            .contains("inconsistent value:")
    );
    assert!(
        EmitError::not_implemented("x")
            .to_string()
            .contains("not implemented:")
    );
    assert!(EmitError::range("x").to_string().contains("range error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EmitError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn count_as_rejects_overflowing_lengths() {
    let ok: u8 = count_as(255, "filters").unwrap();
    assert_eq!(ok, 255);

    let err = count_as::<u8>(256, "filters").unwrap_err();
    assert!(matches!(err, EmitError::Inconsistent(_)));
    assert!(err.to_string().contains("too many filters: 256"));
}
