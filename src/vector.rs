//! Persistent (immutable) vector based on a bit-partitioned radix balanced tree.
//!
//! This module provides [`PersistentVector`], an immutable dynamic array
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `PersistentVector` is a 32-way branching trie inspired by Clojure's
//! PersistentVector and Scala's Vector. It provides:
//!
//! - O(log32 N) random access (effectively O(1) for practical sizes)
//! - O(log32 N) push_back (amortized O(1) with tail optimization)
//! - O(log32 N) update and pop_back
//! - O(1) len and is_empty
//!
//! All operations return new vectors without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Internal Structure
//!
//! The vector consists of:
//! - A tree of nodes (32-way branching trie), absent while all elements
//!   fit in the tail
//! - A tail buffer (up to 32 elements) holding the most recently appended,
//!   not-yet-flushed elements
//!
//! Interior nodes hold their children densely, packed left to right; every
//! subtree left of the right spine is fully saturated. The tree root is a
//! single leaf until a second leaf is flushed, and the root shift grows by
//! one level step each time the tree fills completely.
//!
//! # Examples
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
//! assert_eq!(vector.get(1), Some(&2));
//! assert_eq!(vector.get(2), Some(&3));
//!
//! // Structural sharing: the original vector is preserved
//! let extended = vector.push_back(4);
//! assert_eq!(vector.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4);   // New vector
//! ```

use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::ReferenceCounter;

// =============================================================================
// Constants
// =============================================================================

/// Branching factor (2^5 = 32)
#[cfg(not(feature = "small_branch"))]
const BRANCHING_FACTOR: usize = 32;

/// Branching factor (2^2 = 4)
#[cfg(feature = "small_branch")]
const BRANCHING_FACTOR: usize = 4;

/// Bits per level in the trie
#[cfg(not(feature = "small_branch"))]
const BITS_PER_LEVEL: usize = 5;

/// Bits per level in the trie
#[cfg(feature = "small_branch")]
const BITS_PER_LEVEL: usize = 2;

/// Bit mask for extracting index within a node
const MASK: usize = BRANCHING_FACTOR - 1;

/// Returns `true` when `count` elements fill a subtree completely, that is
/// when `count` is a power of the branching factor. `count` must be a
/// positive multiple of `BRANCHING_FACTOR`.
fn is_saturated(count: usize) -> bool {
    let mut remaining = count;
    while remaining & MASK == 0 {
        remaining >>= BITS_PER_LEVEL;
    }
    remaining == 1
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure for the radix balanced tree.
enum Node<T> {
    /// Branch node containing 1..=BRANCHING_FACTOR child nodes, packed
    /// left to right
    Branch(Vec<ReferenceCounter<Node<T>>>),
    /// Leaf node containing the actual elements
    Leaf(ReferenceCounter<[T]>),
}

/// Builds a single-child spine of branches of the given height, ending in
/// `node`.
fn new_path<T>(level: usize, node: ReferenceCounter<Node<T>>) -> ReferenceCounter<Node<T>> {
    if level == 0 {
        node
    } else {
        ReferenceCounter::new(Node::Branch(vec![new_path(level - BITS_PER_LEVEL, node)]))
    }
}

/// Path-copies `node` along its right spine so that `leaf` ends up at
/// element offset `index`. Siblings left of the spine are shared.
fn push_leaf<T>(
    node: &Node<T>,
    level: usize,
    index: usize,
    leaf: ReferenceCounter<Node<T>>,
) -> ReferenceCounter<Node<T>> {
    match node {
        Node::Branch(children) => {
            let child_index = (index >> level) & MASK;
            let mut new_children = children.clone();
            if child_index < children.len() {
                new_children[child_index] = push_leaf(
                    children[child_index].as_ref(),
                    level - BITS_PER_LEVEL,
                    index,
                    leaf,
                );
            } else {
                new_children.push(new_path(level - BITS_PER_LEVEL, leaf));
            }
            ReferenceCounter::new(Node::Branch(new_children))
        }
        // A leaf this deep means the tree is malformed; the flushed tail
        // replaces it.
        Node::Leaf(_) => leaf,
    }
}

/// Path-copies `node` down to the leaf holding `index` and overwrites that
/// slot with `element`.
fn update_tree<T: Clone>(
    node: &Node<T>,
    level: usize,
    index: usize,
    element: T,
) -> ReferenceCounter<Node<T>> {
    match node {
        Node::Branch(children) => {
            let child_index = (index >> level) & MASK;
            let mut new_children = children.clone();
            if let Some(child) = children.get(child_index) {
                new_children[child_index] =
                    update_tree(child.as_ref(), level - BITS_PER_LEVEL, index, element);
            }
            ReferenceCounter::new(Node::Branch(new_children))
        }
        Node::Leaf(elements) => {
            let mut new_elements = elements.to_vec();
            if let Some(slot) = new_elements.get_mut(index & MASK) {
                *slot = element;
            }
            ReferenceCounter::new(Node::Leaf(ReferenceCounter::from(new_elements)))
        }
    }
}

/// Removes the rightmost leaf of `node`, capturing its element data.
///
/// Returns the demoted subtree (`None` when the removal empties it) and
/// the captured leaf data; the caller installs the data as the new tail.
fn demote_rightmost<T>(
    node: &Node<T>,
) -> (Option<ReferenceCounter<Node<T>>>, ReferenceCounter<[T]>) {
    match node {
        Node::Leaf(elements) => (None, elements.clone()),
        Node::Branch(children) => match children.last() {
            Some(last) => {
                let (demoted, captured) = demote_rightmost(last.as_ref());
                let mut new_children = children.clone();
                new_children.pop();
                if let Some(child) = demoted {
                    new_children.push(child);
                }
                if new_children.is_empty() {
                    (None, captured)
                } else {
                    (
                        Some(ReferenceCounter::new(Node::Branch(new_children))),
                        captured,
                    )
                }
            }
            // Branches are never empty in a well-formed tree.
            None => (None, ReferenceCounter::from(Vec::new())),
        },
    }
}

/// Descends to the leftmost leaf under `node` and returns its data.
fn leftmost_leaf<T>(mut node: &Node<T>) -> ReferenceCounter<[T]> {
    loop {
        match node {
            Node::Branch(children) => match children.first() {
                Some(child) => node = child.as_ref(),
                // Branches are never empty in a well-formed tree.
                None => return ReferenceCounter::from(Vec::new()),
            },
            Node::Leaf(elements) => return elements.clone(),
        }
    }
}

/// Builds a tree bottom-up from `elements`, whose length must be a
/// multiple of `BRANCHING_FACTOR`. Elements are chunked into leaves, then
/// leaves into branches level by level until a single root remains.
/// Returns the root (`None` for empty input) and the matching shift.
fn build_tree<T>(elements: Vec<T>) -> (Option<ReferenceCounter<Node<T>>>, usize) {
    let mut nodes: Vec<ReferenceCounter<Node<T>>> = Vec::new();
    let mut iter = elements.into_iter();
    loop {
        let chunk: Vec<T> = iter.by_ref().take(BRANCHING_FACTOR).collect();
        if chunk.is_empty() {
            break;
        }
        nodes.push(ReferenceCounter::new(Node::Leaf(ReferenceCounter::from(
            chunk,
        ))));
    }

    let mut shift = 0;
    while nodes.len() > 1 {
        nodes = nodes
            .chunks(BRANCHING_FACTOR)
            .map(|chunk| ReferenceCounter::new(Node::Branch(chunk.to_vec())))
            .collect();
        shift += BITS_PER_LEVEL;
    }
    (nodes.into_iter().next(), shift)
}

/// Builds a `PersistentVector` from an owned `Vec` without requiring `Clone`.
fn from_vec<T>(mut elements: Vec<T>) -> PersistentVector<T> {
    let length = elements.len();

    // For small vectors, everything lives in the tail.
    if length <= BRANCHING_FACTOR {
        return PersistentVector {
            length,
            shift: 0,
            root: None,
            tail: ReferenceCounter::from(elements),
        };
    }

    // The tail keeps the trailing partial block, or the last full block
    // when the length is an exact multiple of the branching factor.
    let mut tail_size = length % BRANCHING_FACTOR;
    if tail_size == 0 {
        tail_size = BRANCHING_FACTOR;
    }
    let tail_elements = elements.split_off(length - tail_size);

    let (root, shift) = build_tree(elements);
    PersistentVector {
        length,
        shift,
        root,
        tail: ReferenceCounter::from(tail_elements),
    }
}

// =============================================================================
// PersistentVector Definition
// =============================================================================

/// A persistent (immutable) vector based on a bit-partitioned radix
/// balanced tree.
///
/// `PersistentVector` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns.
///
/// # Time Complexity
///
/// | Operation    | Complexity                      |
/// |--------------|---------------------------------|
/// | `new`        | O(1)                            |
/// | `get`        | O(log32 N)                      |
/// | `push_back`  | O(log32 N) amortized O(1)       |
/// | `pop_back`   | O(log32 N)                      |
/// | `update`     | O(log32 N)                      |
/// | `slice`      | O(K + log32 N) for K elements   |
/// | `len`        | O(1)                            |
/// | `is_empty`   | O(1)                            |
/// | `iter`       | O(1) to create, O(N) to iterate |
///
/// # Examples
///
/// ```rust
/// use radixvec::PersistentVector;
///
/// let vector: PersistentVector<i32> = (0..100).collect();
/// assert_eq!(vector.len(), 100);
/// assert_eq!(vector.get(50), Some(&50));
/// ```
pub struct PersistentVector<T> {
    /// Total number of elements
    length: usize,
    /// Shift amount for index calculation: (depth - 1) * BITS_PER_LEVEL.
    /// Zero while the tree is absent or a single leaf.
    shift: usize,
    /// Root node of the trie; absent while all elements fit in the tail
    root: Option<ReferenceCounter<Node<T>>>,
    /// Tail buffer for efficient append (up to 32 elements); empty only
    /// when the vector is empty
    tail: ReferenceCounter<[T]>,
}

impl<T> PersistentVector<T> {
    /// Creates a new empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = PersistentVector::new();
    /// assert!(vector.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        PersistentVector {
            length: 0,
            shift: 0,
            root: None,
            tail: ReferenceCounter::from(Vec::<T>::new()),
        }
    }

    /// Creates a vector containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector = PersistentVector::singleton(42);
    /// assert_eq!(vector.len(), 1);
    /// assert_eq!(vector.get(0), Some(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        PersistentVector {
            length: 1,
            shift: 0,
            root: None,
            tail: ReferenceCounter::from(vec![element]),
        }
    }

    /// Returns the number of elements in the vector.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// assert_eq!(vector.len(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the vector contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let empty: PersistentVector<i32> = PersistentVector::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = empty.push_back(1);
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the starting index of the tail buffer.
    #[inline]
    fn tail_offset(&self) -> usize {
        self.length - self.tail.len()
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(1) for tail hits, O(log32 N) otherwise
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// assert_eq!(vector.get(0), Some(&1));
    /// assert_eq!(vector.get(4), Some(&5));
    /// assert_eq!(vector.get(10), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.length {
            return None;
        }

        let tail_offset = self.tail_offset();
        if index >= tail_offset {
            // Element is in the tail
            self.tail.get(index - tail_offset)
        } else {
            // Element is in the tree
            self.tree_leaf(index)?.get(index & MASK)
        }
    }

    /// Descends to the leaf holding `index`, which must lie left of the
    /// tail.
    fn tree_leaf(&self, index: usize) -> Option<&ReferenceCounter<[T]>> {
        let mut node = self.root.as_ref()?;
        let mut level = self.shift;

        while level > 0 {
            match node.as_ref() {
                Node::Branch(children) => match children.get((index >> level) & MASK) {
                    Some(child) => {
                        node = child;
                        level -= BITS_PER_LEVEL;
                    }
                    None => return None,
                },
                Node::Leaf(_) => break,
            }
        }

        match node.as_ref() {
            Node::Leaf(elements) => Some(elements),
            Node::Branch(_) => None,
        }
    }

    /// Returns a reference to the first element.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// assert_eq!(vector.first(), Some(&1));
    ///
    /// let empty: PersistentVector<i32> = PersistentVector::new();
    /// assert_eq!(empty.first(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Complexity
    ///
    /// O(1) - the last element is always in the tail
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// assert_eq!(vector.last(), Some(&5));
    /// ```
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tail.last()
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator yields elements from front to back, walking the tree
    /// one leaf at a time rather than descending once per index. Pair it
    /// with [`Iterator::enumerate`] to also obtain the positions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// let collected: Vec<&i32> = vector.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3, &4, &5]);
    /// ```
    pub fn iter(&self) -> PersistentVectorIterator<'_, T> {
        PersistentVectorIterator {
            vector: self,
            chunk: &[],
            chunk_index: 0,
            current_index: 0,
        }
    }
}

impl<T: Clone> PersistentVector<T> {
    /// Appends an element to the back of the vector.
    ///
    /// Returns a new vector with the element at the end.
    ///
    /// # Complexity
    ///
    /// O(log32 N) amortized O(1) due to tail optimization
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector = PersistentVector::new()
    ///     .push_back(1)
    ///     .push_back(2)
    ///     .push_back(3);
    ///
    /// assert_eq!(vector.len(), 3);
    /// assert_eq!(vector.get(2), Some(&3));
    /// ```
    #[must_use]
    pub fn push_back(&self, element: T) -> Self {
        if self.tail.len() < BRANCHING_FACTOR {
            // Tail has space, just add to tail
            let mut new_tail = self.tail.to_vec();
            new_tail.push(element);

            PersistentVector {
                length: self.length + 1,
                shift: self.shift,
                root: self.root.clone(),
                tail: ReferenceCounter::from(new_tail),
            }
        } else {
            // Tail is full, flush it into the tree and start a new tail
            self.push_tail_to_tree(element)
        }
    }

    /// Flushes the full tail into the tree as a leaf and starts a new tail
    /// holding `element`.
    fn push_tail_to_tree(&self, element: T) -> Self {
        let tail_leaf = ReferenceCounter::new(Node::Leaf(self.tail.clone()));
        let new_tail = ReferenceCounter::from(vec![element]);
        let length = self.length + 1;

        let Some(root) = &self.root else {
            // First flush: the leaf becomes the tree.
            return PersistentVector {
                length,
                shift: 0,
                root: Some(tail_leaf),
                tail: new_tail,
            };
        };

        match root.as_ref() {
            Node::Leaf(_) => {
                // Second flush: a branch now holds both leaves.
                PersistentVector {
                    length,
                    shift: BITS_PER_LEVEL,
                    root: Some(ReferenceCounter::new(Node::Branch(vec![
                        root.clone(),
                        tail_leaf,
                    ]))),
                    tail: new_tail,
                }
            }
            Node::Branch(_) => {
                let tree_count = self.length - self.tail.len();
                if is_saturated(tree_count) {
                    // The tree is completely full; grow a new root level
                    // with the old tree on the left and a fresh spine down
                    // to the flushed leaf on the right.
                    PersistentVector {
                        length,
                        shift: self.shift + BITS_PER_LEVEL,
                        root: Some(ReferenceCounter::new(Node::Branch(vec![
                            root.clone(),
                            new_path(self.shift, tail_leaf),
                        ]))),
                        tail: new_tail,
                    }
                } else {
                    // Room along the right spine; path-copy down to it.
                    PersistentVector {
                        length,
                        shift: self.shift,
                        root: Some(push_leaf(root.as_ref(), self.shift, tree_count, tail_leaf)),
                        tail: new_tail,
                    }
                }
            }
        }
    }

    /// Updates the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds, otherwise returns a new
    /// vector with the updated element. The original vector is unchanged.
    ///
    /// # Complexity
    ///
    /// O(log32 N): one fresh node per tree level, or one fresh tail copy
    /// for tail hits
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// let updated = vector.update(2, 100).unwrap();
    ///
    /// assert_eq!(updated.get(2), Some(&100));
    /// assert_eq!(vector.get(2), Some(&3)); // Original unchanged
    /// ```
    #[must_use]
    pub fn update(&self, index: usize, element: T) -> Option<Self> {
        if index >= self.length {
            return None;
        }

        let tail_offset = self.tail_offset();
        if index >= tail_offset {
            // Element is in the tail; the tree is shared as-is
            let mut new_tail = self.tail.to_vec();
            new_tail[index - tail_offset] = element;

            Some(PersistentVector {
                length: self.length,
                shift: self.shift,
                root: self.root.clone(),
                tail: ReferenceCounter::from(new_tail),
            })
        } else {
            // Element is in the tree; the tail is shared by reference
            let root = self.root.as_ref()?;
            Some(PersistentVector {
                length: self.length,
                shift: self.shift,
                root: Some(update_tree(root.as_ref(), self.shift, index, element)),
                tail: self.tail.clone(),
            })
        }
    }

    /// Removes the last element from the vector.
    ///
    /// Returns `None` if the vector is empty, otherwise returns the new
    /// vector and the removed element.
    ///
    /// # Complexity
    ///
    /// O(log32 N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (1..=5).collect();
    /// let (remaining, element) = vector.pop_back().unwrap();
    ///
    /// assert_eq!(element, 5);
    /// assert_eq!(remaining.len(), 4);
    /// ```
    #[must_use]
    pub fn pop_back(&self) -> Option<(Self, T)> {
        let element = self.tail.last()?.clone();

        if self.tail.len() > 1 || self.root.is_none() {
            // Just shrink the tail
            let new_tail = self.tail[..self.tail.len() - 1].to_vec();
            let remaining = PersistentVector {
                length: self.length - 1,
                shift: self.shift,
                root: self.root.clone(),
                tail: ReferenceCounter::from(new_tail),
            };
            return Some((remaining, element));
        }

        // The tail held its last element; the rightmost leaf of the tree
        // becomes the new tail.
        let root = self.root.as_ref()?;
        let remaining = match root.as_ref() {
            Node::Leaf(elements) => PersistentVector {
                length: self.length - 1,
                shift: 0,
                root: None,
                tail: elements.clone(),
            },
            Node::Branch(children) => {
                let new_tree_count = self.length - 1 - BRANCHING_FACTOR;
                if is_saturated(new_tree_count) {
                    // The right spine collapses one level: the first child
                    // takes over as root and the lone leaf under the second
                    // child becomes the tail.
                    let new_root = children.first()?.clone();
                    let new_tail = leftmost_leaf(children.get(1)?.as_ref());
                    PersistentVector {
                        length: self.length - 1,
                        shift: self.shift - BITS_PER_LEVEL,
                        root: Some(new_root),
                        tail: new_tail,
                    }
                } else {
                    let (new_root, new_tail) = demote_rightmost(root.as_ref());
                    PersistentVector {
                        length: self.length - 1,
                        shift: self.shift,
                        root: new_root,
                        tail: new_tail,
                    }
                }
            }
        };
        Some((remaining, element))
    }

    /// Copies the elements in `range` into a `Vec`.
    ///
    /// Both inclusive and exclusive bounds are accepted, so `lo..=hi` and
    /// `lo..hi` both work. Returns `None` when an endpoint lies outside
    /// the vector. The copy walks the tree one leaf at a time; a range
    /// that lies wholly inside the tail never touches the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (0..10).collect();
    ///
    /// assert_eq!(vector.slice(2..=4), Some(vec![2, 3, 4]));
    /// assert_eq!(vector.slice(8..), Some(vec![8, 9]));
    /// assert_eq!(vector.slice(5..=99), None);
    /// ```
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Option<Vec<T>>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&bound) => bound,
            Bound::Excluded(&bound) => bound.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&bound) => bound.checked_add(1)?,
            Bound::Excluded(&bound) => bound,
            Bound::Unbounded => self.length,
        };
        if start > end || end > self.length {
            return None;
        }

        let mut result = Vec::with_capacity(end - start);
        let tail_offset = self.tail_offset();
        let tree_end = end.min(tail_offset);
        let mut index = start;
        while index < tree_end {
            let leaf = self.tree_leaf(index)?;
            let offset = index & MASK;
            let upper = (index - offset + leaf.len()).min(tree_end);
            result.extend_from_slice(&leaf[offset..offset + (upper - index)]);
            index = upper;
        }
        if end > tail_offset {
            let from = index.max(tail_offset) - tail_offset;
            result.extend_from_slice(&self.tail[from..end - tail_offset]);
        }
        Some(result)
    }

    /// Appends another vector to this vector.
    ///
    /// Returns a new vector containing all elements from this vector
    /// followed by all elements from the other vector.
    ///
    /// # Complexity
    ///
    /// O(M log32 N) where M is the length of other
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radixvec::PersistentVector;
    ///
    /// let vector1: PersistentVector<i32> = (1..=3).collect();
    /// let vector2: PersistentVector<i32> = (4..=6).collect();
    /// let combined = vector1.append(&vector2);
    ///
    /// assert_eq!(combined.len(), 6);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut result = self.clone();
        for element in other.iter() {
            result = result.push_back(element.clone());
        }
        result
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentVector`].
///
/// Strides the tree one leaf at a time: a single descent fetches a whole
/// leaf (or the tail), and subsequent accesses stay inside that chunk.
pub struct PersistentVectorIterator<'a, T> {
    vector: &'a PersistentVector<T>,
    chunk: &'a [T],
    chunk_index: usize,
    current_index: usize,
}

impl<T> PersistentVectorIterator<'_, T> {
    /// Positions the chunk on the leaf (or tail) holding `current_index`.
    fn load_chunk(&mut self) {
        let vector = self.vector;
        let tail_offset = vector.tail_offset();
        if self.current_index >= tail_offset {
            self.chunk = vector.tail.as_ref();
            self.chunk_index = self.current_index - tail_offset;
        } else if let Some(leaf) = vector.tree_leaf(self.current_index) {
            self.chunk = leaf.as_ref();
            self.chunk_index = self.current_index & MASK;
        }
    }
}

impl<'a, T> Iterator for PersistentVectorIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.vector.length {
            return None;
        }
        if self.chunk_index >= self.chunk.len() {
            self.load_chunk();
        }

        let item = self.chunk.get(self.chunk_index)?;
        self.chunk_index += 1;
        self.current_index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.length.saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PersistentVectorIterator<'_, T> {
    fn len(&self) -> usize {
        self.vector.length.saturating_sub(self.current_index)
    }
}

/// An owning iterator over elements of a [`PersistentVector`].
///
/// Holds the current leaf by reference clone, so elements are copied out
/// one chunk at a time.
pub struct PersistentVectorIntoIterator<T> {
    vector: PersistentVector<T>,
    chunk: ReferenceCounter<[T]>,
    chunk_index: usize,
    current_index: usize,
}

impl<T> PersistentVectorIntoIterator<T> {
    /// Positions the chunk on the leaf (or tail) holding `current_index`.
    fn load_chunk(&mut self) {
        let tail_offset = self.vector.tail_offset();
        if self.current_index >= tail_offset {
            self.chunk = self.vector.tail.clone();
            self.chunk_index = self.current_index - tail_offset;
        } else if let Some(leaf) = self.vector.tree_leaf(self.current_index) {
            self.chunk = leaf.clone();
            self.chunk_index = self.current_index & MASK;
        }
    }
}

impl<T: Clone> Iterator for PersistentVectorIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.vector.length {
            return None;
        }
        if self.chunk_index >= self.chunk.len() {
            self.load_chunk();
        }

        let item = self.chunk.get(self.chunk_index)?.clone();
        self.chunk_index += 1;
        self.current_index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.length.saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentVectorIntoIterator<T> {
    fn len(&self) -> usize {
        self.vector.length.saturating_sub(self.current_index)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentVector<T> {
    /// Clones the header only; the tree and tail are shared.
    fn clone(&self) -> Self {
        PersistentVector {
            length: self.length,
            shift: self.shift,
            root: self.root.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<T> Default for PersistentVector<T> {
    #[inline]
    fn default() -> Self {
        PersistentVector::new()
    }
}

impl<T> FromIterator<T> for PersistentVector<T> {
    /// Builds the tree bottom-up: elements are chunked into leaves and
    /// leaves into branch levels, rather than pushing one element at a
    /// time.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for PersistentVector<T> {
    type Item = T;
    type IntoIter = PersistentVectorIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let chunk = self.tail.clone();
        PersistentVectorIntoIterator {
            vector: self,
            chunk_index: chunk.len(),
            chunk,
            current_index: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a PersistentVector<T> {
    type Item = &'a T;
    type IntoIter = PersistentVectorIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentVector<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentVector<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentVector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentVector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "PersistentVector[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentVector<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentVectorVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> PersistentVectorVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentVectorVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentVector<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentVector<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentVectorVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
