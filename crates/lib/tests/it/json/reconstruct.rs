//! Tests for rebuilding collections from JSON

use keyed_collection::{Collection, Key, Value};

use crate::helpers::*;

#[test]
fn test_reconstruct_replaces_contents() {
    let mut c = Collection::new().with("old", 1);
    c.reconstruct_from_json(r#"{"new": 2, "0": "zero"}"#, true)
        .unwrap();

    assert_eq!(c, Collection::new().with("new", 2).with(0, "zero"));
}

#[test]
fn test_reconstruct_from_non_container_clears() {
    for text in ["null", "42", "\"text\""] {
        let mut c = abcd();
        c.reconstruct_from_json(text, true).unwrap();
        assert!(c.is_empty(), "{text} should clear the collection");
    }
}

#[test]
fn test_reconstruct_failure_leaves_contents() {
    let mut c = abcd();
    let err = c.reconstruct_from_json("{broken", true).unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(c, abcd());
}

#[test]
fn test_reconstruct_without_list_mode_is_a_no_op() {
    let mut c = abcd();
    c.reconstruct_from_json(r#"{"ignored": true}"#, false)
        .unwrap();
    assert_eq!(c, abcd());
}

#[test]
fn test_reconstructed_collection_continues_numbering() {
    let mut c = Collection::new();
    c.reconstruct_from_json("[\"a\", \"b\"]", true).unwrap();
    c.add("c");

    assert_eq!(at(&c, 2), Some(&Value::from("c")));
}

#[test]
fn test_from_json_round_trip() {
    let original = Collection::new()
        .with("name", "Alice")
        .with("tags", Collection::from_values(["x", "y"]))
        .with("score", 1.5);
    let restored = Collection::from_json(&original.to_json().unwrap()).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.key_array()[1], Key::from("tags"));
}
