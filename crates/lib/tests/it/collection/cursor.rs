//! Cursor and extremity extraction tests

use keyed_collection::{Collection, Key, Value};

use crate::helpers::*;

#[test]
fn test_cursor_walks_forward() {
    let mut c = Collection::from_values(["a", "b"]);

    assert_eq!(c.current(), Some(&Value::from("a")));
    assert_eq!(c.key(), Some(&Key::Int(0)));

    assert_eq!(c.next(), Some(&Value::from("b")));
    assert_eq!(c.key(), Some(&Key::Int(1)));

    assert_eq!(c.next(), None);
    assert_eq!(c.current(), None);
    assert_eq!(c.key(), None);

    // Stays exhausted
    assert_eq!(c.next(), None);
}

#[test]
fn test_first_and_last_reset_cursor() {
    let mut c = abcd();

    assert_eq!(c.last(), Some(&Value::from("d")));
    assert_eq!(c.key(), Some(&Key::Int(3)));
    assert_eq!(c.next(), None);

    assert_eq!(c.first(), Some(&Value::from("a")));
    assert_eq!(c.next(), Some(&Value::from("b")));
}

#[test]
fn test_cursor_on_empty_collection() {
    let mut c = Collection::new();
    assert_eq!(c.first(), None);
    assert_eq!(c.last(), None);
    assert_eq!(c.current(), None);
    assert_eq!(c.key(), None);
    assert_eq!(c.next(), None);
}

#[test]
fn test_iteration_does_not_move_cursor() {
    let mut c = abcd();
    c.next();
    let _all: Vec<_> = c.iter().collect();

    assert_eq!(c.key(), Some(&Key::Int(1)));
}

#[test]
fn test_first_and_last_entry() {
    let c = Collection::new().with("a", 1).with(5, 2);

    let first = c.first_entry().unwrap();
    assert_eq!((first.key, first.value), (&Key::from("a"), &Value::Int(1)));

    let last = c.last_entry().unwrap();
    assert_eq!((last.key, last.value), (&Key::Int(5), &Value::Int(2)));

    assert!(Collection::new().first_entry().is_none());
}

#[test]
fn test_extremities_of_arbitrary_values() {
    let record = object(Record::new().with("k", "v").with("l", "w"));

    let first = Collection::first_entry_of(&record).unwrap().unwrap();
    assert_eq!(first.key, &Key::from("k"));

    let last = Collection::last_entry_of(&record).unwrap().unwrap();
    assert_eq!(last.value, &Value::from("w"));

    let empty = Value::from(Collection::new());
    assert!(Collection::first_entry_of(&empty).unwrap().is_none());

    let err = Collection::first_entry_of(&Value::Int(3)).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.module(), "collection");
}
