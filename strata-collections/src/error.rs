//! Error types for the collection operations.
//!
//! Every failure is a typed, synchronous result reported to the caller;
//! none of these are transient faults worth retrying. Errors carry the
//! context needed to diagnose the offending call.

use core::fmt;

/// Direction a key update was expected to move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    /// The new key must be strictly greater than the current key.
    Increase,
    /// The new key must be strictly less than the current key.
    Decrease,
}

impl fmt::Display for KeyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyDirection::Increase => write!(f, "increase"),
            KeyDirection::Decrease => write!(f, "decrease"),
        }
    }
}

/// Errors raised by [`SparseTree`](crate::SparseTree) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Index is beyond the current backing length.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Backing length at the time of the call.
        len: usize,
    },
    /// The slot at this index is the empty sentinel.
    NullNode {
        /// The offending index.
        index: usize,
    },
    /// Setting this index would create an orphan: its parent slot is absent.
    NoParent {
        /// The offending index.
        index: usize,
    },
    /// Removal target has at least one present child.
    NotLeaf {
        /// The offending index.
        index: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} slots")
            }
            TreeError::NullNode { index } => write!(f, "slot {index} is empty"),
            TreeError::NoParent { index } => {
                write!(f, "node {index} does not have a parent")
            }
            TreeError::NotLeaf { index } => {
                write!(f, "cannot remove non-leaf node {index}")
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// Errors raised by [`Heap`](crate::Heap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Extract or peek on an empty heap.
    Underflow,
    /// A directional key update moved the wrong way.
    InvalidKeyUpdate {
        /// The direction the update was required to move in.
        expected: KeyDirection,
    },
    /// The underlying tree rejected an index.
    Node(TreeError),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => write!(f, "heap underflow"),
            HeapError::InvalidKeyUpdate { expected } => {
                write!(f, "new key must strictly {expected} the current key")
            }
            HeapError::Node(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for HeapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeapError::Node(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TreeError> for HeapError {
    fn from(err: TreeError) -> Self {
        HeapError::Node(err)
    }
}

/// Errors raised by [`PriorityQueue`](crate::PriorityQueue) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Inserted or bulk-loaded value is already tracked.
    DuplicateValue,
    /// Priority update addressed a value that is not tracked.
    ValueNotFound,
    /// The underlying heap rejected the operation.
    Heap(HeapError),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::DuplicateValue => {
                write!(f, "all values in the priority queue must be unique")
            }
            QueueError::ValueNotFound => {
                write!(f, "value not found in the queue lookup table")
            }
            QueueError::Heap(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for QueueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueueError::Heap(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HeapError> for QueueError {
    fn from(err: HeapError) -> Self {
        QueueError::Heap(err)
    }
}

/// Errors raised by [`FixedHashMap`](crate::FixedHashMap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Insert of a new key into a map that already holds `capacity` entries.
    CapacityExceeded {
        /// The fixed capacity of the map.
        capacity: usize,
    },
    /// Lookup or delete missed.
    KeyNotFound,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::CapacityExceeded { capacity } => {
                write!(f, "hash map is full (capacity {capacity})")
            }
            MapError::KeyNotFound => write!(f, "key not found"),
        }
    }
}

impl std::error::Error for MapError {}

/// Input to [`binary_search`](crate::binary_search) was not sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSorted;

impl fmt::Display for NotSorted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot binary search an unsorted slice")
    }
}

impl std::error::Error for NotSorted {}

/// Insert into a bounded [`Deque`](crate::Deque) that is at `max_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DequeFull;

impl fmt::Display for DequeFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deque is already at its maximum length")
    }
}

impl std::error::Error for DequeFull {}
