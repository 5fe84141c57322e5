//! Floating-point vector math.

use pretty_assertions::assert_eq;

use shadevec::{Vec2, Vec3f, Vec4d};

#[test]
pub(crate) fn dot_and_length() {
    let v = Vec4d::new(1.0, 2.0, 2.0, 4.0);
    assert_eq!(v.dot(Vec4d::ONE), 9.0);
    assert_eq!(v.length_squared(), 25.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(Vec2::new(3.0f32, 4.0).length(), 5.0);
}

#[test]
pub(crate) fn normalize() {
    assert_eq!(Vec3f::new(0.0, 3.0, 4.0).normalize(), Vec3f::new(0.0, 0.6, 0.8));
    assert_eq!(Vec4d::UNIT_W.normalize(), Vec4d::UNIT_W);
    assert!(Vec4d::ZERO.normalize().x.is_nan());
}

#[test]
pub(crate) fn min_max_clamp() {
    let a = Vec4d::new(1.0, 5.0, -3.0, 0.0);
    let b = Vec4d::new(2.0, 4.0, -3.5, 0.0);
    assert_eq!(a.min(b), Vec4d::new(1.0, 4.0, -3.5, 0.0));
    assert_eq!(a.max(b), Vec4d::new(2.0, 5.0, -3.0, 0.0));
    assert_eq!(
        a.clamp(Vec4d::splat(-1.0), Vec4d::splat(1.0)),
        Vec4d::new(1.0, 1.0, -1.0, 0.0)
    );
}

#[test]
pub(crate) fn rounding_and_roots() {
    let v = Vec4d::new(-1.5, 2.25, 9.0, -0.0);
    assert_eq!(v.abs(), Vec4d::new(1.5, 2.25, 9.0, 0.0));
    assert_eq!(v.floor(), Vec4d::new(-2.0, 2.0, 9.0, -0.0));
    assert_eq!(v.ceil(), Vec4d::new(-1.0, 3.0, 9.0, -0.0));
    assert_eq!(v.abs().sqrt(), Vec4d::new(1.5f64.sqrt(), 1.5, 3.0, 0.0));
}

#[test]
pub(crate) fn lerp() {
    let a = Vec4d::new(0.0, 10.0, -4.0, 1.0);
    let b = Vec4d::new(10.0, 0.0, 4.0, 1.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.25), Vec4d::new(2.5, 7.5, -2.0, 1.0));
}
