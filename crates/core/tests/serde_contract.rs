//! Serde representation of cuboids (default `serde` feature)
#![cfg(feature = "serde")]

use cuboid_core::{Cuboid, UnitOfMeasure};

#[test]
fn test_serializes_raw_magnitudes_and_unit() {
    let cuboid = Cuboid::with_unit(150.0, 25.0, 10.0, UnitOfMeasure::Centimeter).unwrap();
    let json = serde_json::to_value(cuboid).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "a": 150.0, "b": 25.0, "c": 10.0, "unit": "centimeter" })
    );

    let back: Cuboid = serde_json::from_value(json).unwrap();
    assert_eq!(back.raw(), cuboid.raw());
    assert_eq!(back.unit(), UnitOfMeasure::Centimeter);
    assert_eq!(back.to_array(), cuboid.to_array());
}

#[test]
fn test_unit_defaults_to_meter() {
    let cuboid: Cuboid = serde_json::from_str(r#"{ "a": 1.0, "b": 2.0, "c": 3.0 }"#).unwrap();
    assert_eq!(cuboid.unit(), UnitOfMeasure::Meter);
    assert_eq!(cuboid.to_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn test_deserialization_validates_bounds() {
    let err = serde_json::from_str::<Cuboid>(r#"{ "a": 1000.0, "b": 2.0, "c": 3.0, "unit": "centimeter" }"#)
        .unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");

    assert!(serde_json::from_str::<Cuboid>(r#"{ "a": 1.0, "b": 2.0, "c": 3.0, "unit": "km" }"#).is_err());
}
