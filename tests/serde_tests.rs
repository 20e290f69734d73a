#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! These tests verify that vectors serialize as plain sequences and
//! deserialize back with the bulk builder.

use radixvec::PersistentVector;
use rstest::rstest;

#[rstest]
fn test_json_roundtrip() {
    let vector: PersistentVector<i32> = (1..=10).collect();
    let json = serde_json::to_string(&vector).unwrap();
    let restored: PersistentVector<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(vector, restored);
}

#[rstest]
fn test_serializes_as_plain_sequence() {
    let vector: PersistentVector<i32> = (1..=3).collect();
    let json = serde_json::to_string(&vector).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_empty_roundtrip() {
    let vector: PersistentVector<i32> = PersistentVector::new();
    let json = serde_json::to_string(&vector).unwrap();
    assert_eq!(json, "[]");

    let restored: PersistentVector<i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_roundtrip_beyond_tail_capacity() {
    // Crosses the tail flush boundary so the tree is exercised
    let vector: PersistentVector<i32> = (0..100).collect();
    let json = serde_json::to_string(&vector).unwrap();
    let restored: PersistentVector<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), 100);
    assert_eq!(vector, restored);
}

#[rstest]
fn test_string_roundtrip() {
    let vector: PersistentVector<String> = ["one", "two", "three"]
        .into_iter()
        .map(String::from)
        .collect();
    let json = serde_json::to_string(&vector).unwrap();
    let restored: PersistentVector<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(vector, restored);
}

#[rstest]
fn test_nested_structures() {
    let inner1: PersistentVector<i32> = (1..=3).collect();
    let inner2: PersistentVector<i32> = (4..=6).collect();
    let outer: PersistentVector<PersistentVector<i32>> =
        vec![inner1, inner2].into_iter().collect();

    let json = serde_json::to_string(&outer).unwrap();
    let restored: PersistentVector<PersistentVector<i32>> = serde_json::from_str(&json).unwrap();

    assert_eq!(outer.len(), restored.len());
    for (original, restored_inner) in outer.iter().zip(restored.iter()) {
        assert_eq!(original, restored_inner);
    }
}

#[rstest]
fn test_deserialized_vector_supports_derivation() {
    let vector: PersistentVector<i32> = (0..50).collect();
    let json = serde_json::to_string(&vector).unwrap();
    let restored: PersistentVector<i32> = serde_json::from_str(&json).unwrap();

    let extended = restored.push_back(50);
    assert_eq!(extended.get(50), Some(&50));
    assert_eq!(restored.len(), 50);
}
