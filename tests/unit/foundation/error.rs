use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OrbError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(OrbError::render("x").to_string().contains("render error:"));
    assert!(
        OrbError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(OrbError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OrbError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: OrbError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, OrbError::Serde(_)));
}
