//! Lane-wise comparisons and `bool` vectors.

use exhaust::Exhaust as _;
use pretty_assertions::assert_eq;

use shadevec::{Vec2, Vec3, Vec4, Vec4b, Vec4d};

#[test]
pub(crate) fn ordering_comparisons() {
    let a = Vec4::new(1, 5, 3, 9);
    let b = Vec4::new(2, 4, 3, 8);
    assert_eq!(a.cmpgt(b), Vec4::new(false, true, false, true));
    assert_eq!(a.cmpge(b), Vec4::new(false, true, true, true));
    assert_eq!(a.cmplt(b), Vec4::new(true, false, false, false));
    assert_eq!(a.cmple(b), Vec4::new(true, false, true, false));
}

#[test]
pub(crate) fn equality_comparisons() {
    let a = Vec3::new(1, 2, 3);
    let b = Vec3::new(1, 0, 3);
    assert_eq!(a.cmpeq(b), Vec3::new(true, false, true));
    assert_eq!(a.cmpne(b), Vec3::new(false, true, false));
}

#[test]
pub(crate) fn nan_compares_false() {
    let a = Vec4d::new(f64::NAN, 1.0, f64::NAN, 2.0);
    let b = Vec4d::new(f64::NAN, 1.0, 0.0, 3.0);
    assert_eq!(a.cmpeq(b), Vec4::new(false, true, false, false));
    assert_eq!(a.cmpne(b), Vec4::new(true, false, true, true));
    assert_eq!(a.cmplt(b), Vec4::new(false, false, false, true));
    assert_eq!(a.cmpge(b), Vec4::new(false, true, false, false));
}

#[test]
pub(crate) fn all_and_any() {
    for lanes in <[bool; 4]>::exhaust() {
        let mask = Vec4b::from(lanes);
        assert_eq!(mask.all(), lanes.iter().all(|&lane| lane), "{lanes:?}");
        assert_eq!(mask.any(), lanes.iter().any(|&lane| lane), "{lanes:?}");
    }
    assert!(Vec2::new(true, true).all());
    assert!(!Vec2::new(false, false).any());
}

#[test]
pub(crate) fn bool_operators_are_lane_wise() {
    for a in <[bool; 4]>::exhaust() {
        for b in <[bool; 4]>::exhaust() {
            let (va, vb) = (Vec4b::from(a), Vec4b::from(b));
            let expected_and: [bool; 4] = core::array::from_fn(|i| a[i] & b[i]);
            let expected_or: [bool; 4] = core::array::from_fn(|i| a[i] | b[i]);
            let expected_xor: [bool; 4] = core::array::from_fn(|i| a[i] ^ b[i]);
            assert_eq!((va & vb).to_array(), expected_and);
            assert_eq!((va | vb).to_array(), expected_or);
            assert_eq!((va ^ vb).to_array(), expected_xor);
        }
        assert_eq!((!Vec4b::from(a)).to_array(), a.map(|lane| !lane));
    }
}

#[test]
pub(crate) fn select_by_mask() {
    let mask = Vec4::new(true, false, false, true);
    assert_eq!(
        Vec4::select(mask, Vec4::splat(1), Vec4::splat(2)),
        Vec4::new(1, 2, 2, 1)
    );

    let a = Vec4d::new(1.0, 8.0, -3.0, 0.5);
    let b = Vec4d::splat(2.0);
    assert_eq!(Vec4::select(a.cmpgt(b), a, b), Vec4d::new(2.0, 8.0, 2.0, 2.0));
}
