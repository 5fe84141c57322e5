//! Constructors, constants, and conversions.

use pretty_assertions::assert_eq;

use shadevec::{Lane, Vec2, Vec3, Vec4, Vec4b, Vec4d, Vec4i};

#[test]
pub(crate) fn lanes_read_back_in_order() {
    let v = Vec4d::new(1.5, -2.0, 3.25, 4.0);
    assert_eq!((v.x, v.y, v.z, v.w), (1.5, -2.0, 3.25, 4.0));
    assert_eq!((v.r(), v.g(), v.b(), v.a()), (1.5, -2.0, 3.25, 4.0));
    assert_eq!([v[0], v[1], v[2], v[3]], [1.5, -2.0, 3.25, 4.0]);
    assert_eq!(
        [v[Lane::X], v[Lane::Y], v[Lane::Z], v[Lane::W]],
        [1.5, -2.0, 3.25, 4.0]
    );
}

#[test]
pub(crate) fn constants() {
    assert_eq!(Vec4d::ZERO, Vec4d::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(Vec4d::ONE, Vec4d::new(1.0, 1.0, 1.0, 1.0));
    assert_eq!(Vec4d::UNIT_X, Vec4d::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(Vec4d::UNIT_Y, Vec4d::new(0.0, 1.0, 0.0, 0.0));
    assert_eq!(Vec4d::UNIT_Z, Vec4d::new(0.0, 0.0, 1.0, 0.0));
    assert_eq!(Vec4d::UNIT_W, Vec4d::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(Vec3::<i32>::UNIT_Z, Vec3::new(0, 0, 1));
    assert_eq!(Vec2::<u8>::UNIT_Y, Vec2::new(0, 1));
}

#[test]
pub(crate) fn unit_vectors_have_exactly_one_lane_set() {
    let units = [Vec4i::UNIT_X, Vec4i::UNIT_Y, Vec4i::UNIT_Z, Vec4i::UNIT_W];
    for (position, unit) in units.into_iter().enumerate() {
        for i in 0..4 {
            assert_eq!(unit[i], i32::from(i == position), "unit {position} lane {i}");
        }
    }
}

#[test]
pub(crate) fn splat_and_default() {
    assert_eq!(Vec4::splat(7u16), Vec4::new(7, 7, 7, 7));
    assert_eq!(Vec3::<f32>::default(), Vec3::ZERO);
    assert_eq!(Vec4b::default(), Vec4::splat(false));
}

#[test]
pub(crate) fn array_and_tuple_conversions() {
    let v = Vec4::from([1, 2, 3, 4]);
    assert_eq!(v, Vec4::new(1, 2, 3, 4));
    assert_eq!(<[i32; 4]>::from(v), [1, 2, 3, 4]);
    assert_eq!(v.to_array(), [1, 2, 3, 4]);
    assert_eq!(Vec3::from((1, 2, 3)), Vec3::new(1, 2, 3));
    assert_eq!(Vec2::from((1, 2)), Vec2::new(1, 2));
    assert_eq!(Vec4::from((1, 2, 3, 4)), v);
}

#[test]
pub(crate) fn borrow_as_array() {
    let mut v = Vec4::new(1, 2, 3, 4);
    assert_eq!(v.as_array(), &[1, 2, 3, 4]);
    v.as_mut_array()[2] = 30;
    v.as_mut_array().reverse();
    assert_eq!(v, Vec4::new(4, 30, 2, 1));
    assert_eq!(Vec2::new(1.5, 2.5).as_array().iter().sum::<f64>(), 4.0);
}

#[test]
pub(crate) fn mixed_construction() {
    assert_eq!(Vec4::from((Vec3::new(1, 2, 3), 4)), Vec4::new(1, 2, 3, 4));
    assert_eq!(Vec4::from((Vec2::new(1, 2), Vec2::new(3, 4))), Vec4::new(1, 2, 3, 4));
    assert_eq!(Vec3::from((Vec2::new(1, 2), 3)), Vec3::new(1, 2, 3));
    assert_eq!(Vec2::new(1, 2).extend(3).extend(4), Vec4::new(1, 2, 3, 4));
    assert_eq!(Vec4::new(1, 2, 3, 4).truncate().truncate(), Vec2::new(1, 2));
}

#[test]
pub(crate) fn map_and_zip_map() {
    let v = Vec4::new(1, 2, 3, 4);
    assert_eq!(v.map(|lane| lane * 10), Vec4::new(10, 20, 30, 40));
    assert_eq!(v.map(|lane| lane % 2 == 0), Vec4::new(false, true, false, true));
    assert_eq!(
        v.zip_map(Vec4::splat(1.5), |a, b| f64::from(a) * b),
        Vec4::new(1.5, 3.0, 4.5, 6.0)
    );
}

#[test]
pub(crate) fn index_mut() {
    let mut v = Vec3::new(1, 2, 3);
    v[2] = 30;
    v[Lane::X] = 10;
    assert_eq!(v, Vec3::new(10, 2, 30));
}

#[test]
#[should_panic(expected = "index 3 out of range for Vec3 with 3 lanes")]
pub(crate) fn index_out_of_range() {
    let v = Vec3::new(1, 2, 3);
    core::hint::black_box(v[3]);
}

#[test]
#[should_panic(expected = "index 2 out of range for Vec2 with 2 lanes")]
pub(crate) fn lane_out_of_range() {
    let v = Vec2::new(1, 2);
    core::hint::black_box(v[Lane::Z]);
}

#[test]
pub(crate) fn layout() {
    assert_eq!(size_of::<Vec4d>(), 32);
    assert_eq!(align_of::<Vec4d>(), align_of::<f64>());
    assert_eq!(size_of::<Vec3<f32>>(), 12);
    assert_eq!(Vec4d::LANES, 4);
    assert_eq!(Vec3::<u8>::LANES, 3);
    assert_eq!(Vec2::<bool>::LANES, 2);
}
