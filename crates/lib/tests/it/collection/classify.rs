//! Key-shape classification tests

use keyed_collection::{Collection, Key, KeyShape, Value};

use crate::helpers::*;

#[test]
fn test_empty_shape() {
    let c = Collection::new();
    assert_eq!(c.key_shape(), KeyShape::Empty);
    assert!(!c.sequential());
    assert!(!c.associative());
}

#[test]
fn test_sequential_shape_ignores_contiguity() {
    let contiguous = Collection::new().with(0, "a").with(1, "b");
    let sparse = Collection::new().with(0, "a").with(5, "b");

    assert_eq!(contiguous.key_shape(), KeyShape::Sequential);
    assert_eq!(sparse.key_shape(), KeyShape::Sequential);
    assert!(sparse.sequential());
}

#[test]
fn test_associative_shape() {
    let mixed = Collection::new().with(0, "a").with("x", "b");
    assert_eq!(mixed.key_shape(), KeyShape::Associative);
    assert!(mixed.associative());
    assert!(!mixed.sequential());
}

#[test]
fn test_numeric_string_keys_are_associative() {
    let c = Collection::new().with("0", "a");
    assert_eq!(c.key_shape(), KeyShape::Associative);
}

#[test]
fn test_classify_arbitrary_values() {
    let sequential = Value::from(vec![1, 2]);
    assert_eq!(Collection::classify_value(&sequential).unwrap(), KeyShape::Sequential);
    assert!(Collection::is_sequential(&sequential).unwrap());
    assert!(!Collection::is_associative(&sequential).unwrap());

    let record = object(Record::new().with("name", "x"));
    assert!(Collection::is_associative(&record).unwrap());

    let empty = object(Snapshot::default());
    assert_eq!(Collection::classify_value(&empty).unwrap(), KeyShape::Empty);
}

#[test]
fn test_classify_rejects_leaves() {
    for leaf in [Value::Null, Value::Int(1), Value::from("text")] {
        let err = Collection::is_sequential(&leaf).unwrap_err();
        assert!(err.is_invalid_argument(), "{leaf:?} should be rejected");
    }
}

#[test]
fn test_key_shape_of_raw_keys() {
    let keys = [Key::Int(3), Key::Int(1)];
    assert!(KeyShape::of(&keys).is_sequential());
    assert!(KeyShape::of(&[] as &[Key]).is_empty());
}
