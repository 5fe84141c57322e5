//! `Serialize` and `Deserialize` as structs with one field per lane.

use pretty_assertions::assert_eq;

use shadevec::{Vec2, Vec3, Vec4d};

#[test]
pub(crate) fn json_round_trip() {
    let v = Vec4d::new(1.5, -2.0, 0.0, 4.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0,"z":0.0,"w":4.0}"#);
    assert_eq!(serde_json::from_str::<Vec4d>(&json).unwrap(), v);

    let v = Vec2::new(true, false);
    assert_eq!(serde_json::from_value::<Vec2<bool>>(serde_json::to_value(v).unwrap()).unwrap(), v);
}

#[test]
pub(crate) fn missing_lane_is_an_error() {
    let error = serde_json::from_str::<Vec3<i32>>(r#"{"x":1,"y":2}"#).unwrap_err();
    assert!(error.to_string().contains("missing field `z`"), "{error}");
}
