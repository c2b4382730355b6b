//! Tests for the two `map_in_depth` contracts

use keyed_collection::{Collection, Value, transform::DeepMapOptions};

use crate::helpers::*;

fn source() -> Collection {
    Collection::new()
        .with("a", Collection::new().with("b", 1).with("c", 2))
        .with("r", object(Record::new().with("e", 5)))
        .with("d", 3)
}

#[test]
fn test_without_sink_returns_new_generic_collection() {
    let original = source();
    let mapped = original
        .map_in_depth(times_ten, &DeepMapOptions::new())
        .unwrap();

    let expected = Collection::new()
        .with("a", Collection::new().with("b", 10).with("c", 20))
        .with("r", Collection::new().with("e", 50))
        .with("d", 30);
    assert_eq!(mapped, expected);

    // Original left unmutated
    assert_eq!(original, source());
}

#[test]
fn test_without_sink_matches_forced_deep_map() {
    let original = source();
    let mapped = original
        .map_in_depth(times_ten, &DeepMapOptions::new())
        .unwrap();

    let via_engine = keyed_collection::transform::deep_map(
        &Value::from(original.clone()),
        times_ten,
        &DeepMapOptions::new().force_generic(true),
        None,
    )
    .unwrap();
    assert_eq!(Value::from(mapped), via_engine);
}

#[test]
fn test_with_sink_mutates_sink_and_returns_original() {
    let original = source();
    let mut sink = Collection::new()
        .with("a", Collection::new())
        .with("r", object(Record::new()));

    let returned = original
        .map_in_depth_into(times_ten, &DeepMapOptions::new(), &mut sink)
        .unwrap();

    // The return value is the untransformed source
    assert_eq!(returned, &source());
    assert_eq!(at(returned, "d"), Some(&Value::Int(3)));

    // The sink received the transformed leaves
    assert_eq!(at(&sink, "d"), Some(&Value::Int(30)));
    let a = at(&sink, "a").and_then(Value::as_collection).unwrap();
    assert_eq!(a, &Collection::new().with("b", 10).with("c", 20));
    assert_eq!(at(&sink, "r"), Some(&object(Record::new().with("e", 50))));
}

#[test]
fn test_with_sink_honours_strict_identity() {
    let original = Collection::new().with("s", object(Sealed::default().with("k", 1)));
    let mut sink = Collection::new();
    let strict = DeepMapOptions::new().strict_identity(true);

    let err = original
        .map_in_depth_into(times_ten, &strict, &mut sink)
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_without_sink_ignores_strict_identity() {
    // Forced generic output never needs identity-preserving construction
    let original = Collection::new().with("s", object(Sealed::default().with("k", 1)));
    let strict = DeepMapOptions::new().strict_identity(true);

    let mapped = original.map_in_depth(times_ten, &strict).unwrap();
    assert_eq!(mapped, Collection::new().with("s", Collection::new().with("k", 10)));
}
