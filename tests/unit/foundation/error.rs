use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixelifyError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PixelifyError::decode("x").to_string().contains("decode error:"));
    assert!(PixelifyError::sink("x").to_string().contains("sink error:"));
    assert!(
        PixelifyError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_sink_errors_report_as_sink() {
    assert!(PixelifyError::sink("clipboard denied").is_sink());
    assert!(!PixelifyError::decode("bad png").is_sink());
    assert!(!PixelifyError::validation("n").is_sink());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixelifyError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
