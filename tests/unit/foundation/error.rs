use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GenoformError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GenoformError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        GenoformError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GenoformError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn question_mark_converts_anyhow() {
    fn fails() -> GenoformResult<()> {
        Err(anyhow::anyhow!("inner"))?;
        Ok(())
    }
    assert!(matches!(fails(), Err(GenoformError::Other(_))));
}
