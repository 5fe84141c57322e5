//! `Pod` and `Zeroable` for uploading vectors to GPU buffers.

use pretty_assertions::assert_eq;

use shadevec::{Vec2, Vec3f, Vec4, Vec4d};

#[test]
pub(crate) fn cast_to_and_from_arrays() {
    let v = Vec4d::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(bytemuck::cast::<Vec4d, [f64; 4]>(v), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(bytemuck::cast::<[u32; 2], Vec2<u32>>([7, 8]), Vec2::new(7, 8));
}

#[test]
pub(crate) fn zeroed_is_zero() {
    assert_eq!(<Vec4d as bytemuck::Zeroable>::zeroed(), Vec4d::ZERO);
    assert_eq!(<Vec4<i32> as bytemuck::Zeroable>::zeroed(), Vec4::ZERO);
}

#[test]
pub(crate) fn slice_of_vectors_as_bytes() {
    let vertices = [Vec3f::new(1.0, 0.0, 0.0), Vec3f::new(0.0, 1.0, 0.0)];
    let bytes: &[u8] = bytemuck::cast_slice(&vertices);
    assert_eq!(bytes.len(), 2 * 3 * 4);
    assert_eq!(&bytes[..4], &1.0f32.to_ne_bytes());

    let floats: &[f32] = bytemuck::cast_slice(&vertices);
    assert_eq!(floats, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
}
