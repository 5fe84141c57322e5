//! `Display`, custom separators, and formatting into fixed buffers.

use pretty_assertions::assert_eq;

use shadevec::{BufferTooSmall, Vec2, Vec3, Vec4, Vec4d};

#[test]
pub(crate) fn display() {
    assert_eq!(Vec4d::new(1.0, 2.0, 3.0, 4.0).to_string(), "<1, 2, 3, 4>");
    assert_eq!(Vec4d::new(-0.5, 2.0, 1e20, 4.0).to_string(), "<-0.5, 2, 100000000000000000000, 4>");
    assert_eq!(Vec3::new(1, -2, 3).to_string(), "<1, -2, 3>");
    assert_eq!(Vec2::new(true, false).to_string(), "<true, false>");
}

#[test]
pub(crate) fn formatter_options_apply_to_each_lane() {
    let v = Vec4d::new(1.0, 2.5, 3.0, 4.125);
    assert_eq!(format!("{v:.1}"), "<1.0, 2.5, 3.0, 4.1>");
    assert_eq!(format!("{:>3}", Vec2::new(1, 20)), "<  1,  20>");
    assert_eq!(format!("{:+}", Vec2::new(1, -1)), "<+1, -1>");
}

#[test]
pub(crate) fn custom_separator() {
    let v = Vec4::new(1, 2, 3, 4);
    assert_eq!(v.display_with(" ").to_string(), "<1 2 3 4>");
    assert_eq!(v.display_with("; ").to_string(), "<1; 2; 3; 4>");
    assert_eq!(v.display_with("").to_string(), "<1234>");
    assert_eq!(
        format!("{:.2}", Vec2::new(0.5, 1.0).display_with("|")),
        "<0.50|1.00>"
    );
}

#[test]
pub(crate) fn try_format_fits() {
    let v = Vec4d::new(1.0, 2.0, 3.0, 4.0);
    let mut buffer = [0u8; 32];
    let len = v.try_format(&mut buffer).unwrap();
    assert_eq!(&buffer[..len], b"<1, 2, 3, 4>");

    let mut exact = [0u8; 12];
    assert_eq!(v.try_format(&mut exact), Ok(12));
    assert_eq!(&exact, b"<1, 2, 3, 4>");
}

#[test]
pub(crate) fn try_format_too_small() {
    let v = Vec4d::new(1.0, 2.0, 3.0, 4.0);
    let error = v.try_format(&mut [0u8; 11]).unwrap_err();
    assert_eq!(error.capacity(), 11);
    assert_eq!(
        error.to_string(),
        "buffer of 11 bytes is too small for the formatted vector"
    );

    let mut empty: [u8; 0] = [];
    assert!(matches!(
        Vec2::new(1, 2).try_format(&mut empty),
        Err(BufferTooSmall { .. })
    ));
}
