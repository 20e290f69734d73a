//! Integration tests for the Display and Debug implementations.
//!
//! The textual form lists the elements in order with `", "` separators
//! inside a `PersistentVector[...]` wrapper.

use radixvec::PersistentVector;

#[test]
fn test_empty_display() {
    let vector: PersistentVector<i32> = PersistentVector::new();
    assert_eq!(format!("{}", vector), "PersistentVector[]");
}

#[test]
fn test_single_element_display() {
    let vector = PersistentVector::singleton(42);
    assert_eq!(format!("{}", vector), "PersistentVector[42]");
}

#[test]
fn test_integer_display() {
    let vector: PersistentVector<i32> = (1..=5).collect();
    assert_eq!(format!("{}", vector), "PersistentVector[1, 2, 3, 4, 5]");
}

#[test]
fn test_string_display() {
    let words = [
        "Hello",
        "world!",
        "How",
        "is",
        "it",
        "going?",
        "Persistent",
        "vectors",
        "are",
        "cool!",
    ];
    let vector: PersistentVector<&str> = words.into_iter().collect();

    assert_eq!(
        format!("{}", vector),
        "PersistentVector[Hello, world!, How, is, it, going?, Persistent, vectors, are, cool!]"
    );
}

#[test]
fn test_display_after_update() {
    let words = [
        "Hello",
        "world!",
        "How",
        "is",
        "it",
        "going?",
        "Persistent",
        "vectors",
        "are",
        "cool!",
    ];
    let vector: PersistentVector<&str> = words.into_iter().collect();
    let updated = vector.update(9, "neat!").unwrap();

    assert_eq!(
        format!("{}", updated),
        "PersistentVector[Hello, world!, How, is, it, going?, Persistent, vectors, are, neat!]"
    );
    // Only position 9 changed
    for index in 0..9 {
        assert_eq!(updated.get(index), vector.get(index));
    }
    assert_eq!(vector.get(9), Some(&"cool!"));
}

#[test]
fn test_display_spans_tree_and_tail() {
    let vector: PersistentVector<i32> = (0..40).collect();
    let inner = (0..40)
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    assert_eq!(format!("{}", vector), format!("PersistentVector[{inner}]"));
}

#[test]
fn test_debug_format() {
    let vector: PersistentVector<i32> = (1..=3).collect();
    assert_eq!(format!("{:?}", vector), "[1, 2, 3]");
}

#[test]
fn test_debug_empty() {
    let vector: PersistentVector<i32> = PersistentVector::new();
    assert_eq!(format!("{:?}", vector), "[]");
}
