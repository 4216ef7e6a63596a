//! Foundational data structures over flat, index-addressed storage.
//!
//! This crate implements classic collections from first principles. The
//! common thread: structure is expressed through array indices instead of
//! per-node allocations.
//!
//! ```text
//! SparseTree      - binary tree in a flat slot array (2i+1 / 2i+2)
//! Heap            - min/max heap over the sparse tree
//! PriorityQueue   - min-heap plus value-to-slot reverse lookup
//! FixedHashMap    - open addressing, linear probing, tombstone deletes
//! Deque           - doubly linked deque over a slot arena
//! ```
//!
//! # Design
//!
//! - **Sentinels are tagged, not reserved.** A hole in flat storage is a
//!   [`Slot::Empty`] variant (or a null [`u32`] link in the deque arena),
//!   never a magic payload value.
//! - **One choke point per invariant.** The heap's min/max mirroring goes
//!   through a single [`Polarity`] comparison; every structural move goes
//!   through one set of internal primitives, which is what lets the
//!   priority queue observe them and keep its lookup table consistent.
//! - **Errors are typed and local.** Contract violations come back as
//!   dedicated error values ([`TreeError`], [`HeapError`], [`QueueError`],
//!   [`MapError`]); nothing is retried or swallowed.
//!
//! # Quick start
//!
//! ```
//! use strata_collections::{heapsort, Heap, PriorityQueue};
//!
//! // Direct heap use
//! let mut heap = Heap::max();
//! for key in [5, 3, 8, 1] {
//!     heap.insert(key, key);
//! }
//! assert_eq!(heap.extract_root(), Ok(8));
//!
//! // Priority queue keyed by priority, addressed by value
//! let mut queue = PriorityQueue::from_entries([3, 1, 2], ["c", "a", "b"])?;
//! queue.update_value_priority(&"c", 0)?;
//! assert_eq!(queue.extract_root(), Ok("c"));
//!
//! // Heapsort rides on the same heap
//! assert_eq!(heapsort([3, 1, 2], false), vec![1, 2, 3]);
//! # Ok::<(), strata_collections::QueueError>(())
//! ```
//!
//! # Concurrency
//!
//! Everything here is single-threaded and synchronous. There is no
//! internal locking; callers who share a structure across threads
//! serialize access themselves. Iterators borrow their collection, so
//! mutation during traversal is a compile error rather than a runtime
//! hazard.

#![warn(missing_docs)]

pub mod deque;
pub mod error;
pub mod fixed_map;
pub mod heap;
mod link;
pub mod pqueue;
pub mod search;
pub mod slot;
pub mod sort;
pub mod tree;


pub use deque::Deque;
pub use error::{
    DequeFull, HeapError, KeyDirection, MapError, NotSorted, QueueError, TreeError,
};
pub use fixed_map::FixedHashMap;
pub use heap::{heapsort, Heap, HeapItem, Polarity, PositionHook};
pub use pqueue::PriorityQueue;
pub use search::binary_search;
pub use slot::Slot;
pub use sort::quicksort;
pub use tree::SparseTree;
