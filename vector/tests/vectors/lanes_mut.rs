//! Borrowing several lanes at once through `*_mut()` swizzles.

use pretty_assertions::assert_eq;

use shadevec::{Vec2, Vec3, Vec4};

#[test]
pub(crate) fn index_in_swizzle_order() {
    let mut v = Vec4::new(1, 2, 3, 4);
    let mut lanes = v.wzx_mut();
    assert_eq!(lanes.len(), 3);
    assert_eq!((lanes[0], lanes[1], lanes[2]), (4, 3, 1));
    lanes[0] = 40;
    lanes[2] *= 10;
    assert_eq!(v, Vec4::new(10, 2, 3, 40));
}

#[test]
pub(crate) fn get_set_update() {
    let mut v = Vec3::new(1, 2, 3);
    let mut lanes = v.zy_mut();
    assert_eq!(lanes.get(), [3, 2]);
    lanes.set(Vec2::new(30, 20));
    assert_eq!(lanes.get(), [30, 20]);
    lanes.update(|[z, y]| [y, z]);
    assert_eq!(v, Vec3::new(1, 30, 20));
}

#[test]
pub(crate) fn iterate() {
    let mut v = Vec4::new(1, 2, 3, 4);
    let mut lanes = v.ywx_mut();
    for (i, lane) in lanes.iter_mut().enumerate() {
        *lane += i32::try_from(i).unwrap() * 100;
    }
    assert_eq!(lanes.iter_mut().len(), 3);
    for lane in &mut lanes {
        *lane = -*lane;
    }
    assert_eq!(v, Vec4::new(-201, -2, 3, -104));
}
