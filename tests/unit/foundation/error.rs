use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TaijiError::missing_surface("x")
            .to_string()
            .contains("missing drawing surface:")
    );
    assert!(TaijiError::surface("x").to_string().contains("surface error:"));
    assert!(
        TaijiError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(TaijiError::Disposed.to_string().contains("disposed"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TaijiError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn notice_names_axis_and_values() {
    let n = Notice::PositionOutOfRange {
        axis: Axis::Y,
        requested: 900.0,
        reset_to: 50.0,
    };
    let s = n.to_string();
    assert!(s.starts_with("y position 900"));
    assert!(s.ends_with("reset to 50"));
}
