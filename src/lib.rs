//! # radixvec
//!
//! A persistent (immutable) vector for Rust, based on a bit-partitioned
//! radix balanced tree with a tail buffer.
//!
//! ## Overview
//!
//! [`PersistentVector`] is a 32-way branching trie inspired by Clojure's
//! PersistentVector and Scala's Vector. Every operation that changes the
//! sequence returns a new vector and leaves the original untouched;
//! structural sharing keeps the cost of a derived version at O(log32 N)
//! fresh nodes rather than a full copy. It provides:
//!
//! - O(log32 N) random access (effectively O(1) for practical sizes)
//! - O(log32 N) push_back (amortized O(1) with tail optimization)
//! - O(log32 N) update and pop_back
//! - O(1) len, is_empty and last
//! - Leaf-striding iteration (one tree descent per 32 elements)
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes with `Arc` instead of `Rc`, making vectors of
//!   `Send + Sync` elements safe to read from multiple threads
//! - `serde`: `Serialize`/`Deserialize` support
//! - `small_branch`: branching factor 4 instead of 32, so the tree shape
//!   is exercised with small inputs
//!
//! ## Example
//!
//! ```rust
//! use radixvec::PersistentVector;
//!
//! let vector = PersistentVector::new()
//!     .push_back(1)
//!     .push_back(2)
//!     .push_back(3);
//!
//! assert_eq!(vector.get(0), Some(&1));
//! assert_eq!(vector.len(), 3);
//!
//! // Structural sharing: the original vector is preserved
//! let extended = vector.push_back(4);
//! assert_eq!(vector.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4);   // New vector
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod vector;

pub use vector::PersistentVector;
pub use vector::PersistentVectorIntoIterator;
pub use vector::PersistentVectorIterator;

// =============================================================================
// Tests
// =============================================================================
