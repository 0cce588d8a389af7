use super::*;

#[test]
fn needs_fallback_for_any_other_source() {
    assert!(needs_fallback("https://example.com/broken.jpg"));
    assert!(needs_fallback(""));
}

#[test]
fn fallback_image_does_not_swap_again() {
    assert!(!needs_fallback(FALLBACK_IMAGE_URL));
}
