//! # `trellis` - Layered Container Toolkit
//!
//! Three container layers, each built from the one below it:
//!
//! 1. **[`LinkedList`]** — a doubly linked list whose nodes live in a
//!    generational slot arena. Positions are [`NodeId`] handles: plain
//!    `Copy` values that support O(1) insertion and removal anywhere in
//!    the list, and that become *detectably* stale the moment their node
//!    is removed ([`InvalidNode`]), even if the slot is later recycled.
//! 2. **[`HashTable`]** — a chained hash table whose bucket chains are
//!    linked lists, plus a master key list recording every live key in
//!    first-insertion order. Each chain entry stores the handle of its
//!    key in the master list, so removal deletes the key in O(1) without
//!    re-searching either structure.
//! 3. **[`WeightedGraph`]** — a weighted, undirected graph: one hash
//!    table for the vertex set, one per-vertex hash table for adjacency.
//!    Edge existence, weight lookup, and degree are O(1) expected;
//!    vertex removal is O(degree).
//!
//! The crate is single-threaded by design: `&mut self` exclusivity is
//! the entire concurrency story, and table growth is a blocking,
//! in-line step inside `put`.
//!
//! ## Failure model
//!
//! Two policies, used consistently:
//! - **Absence as a value**: queries about keys, vertices, or edges that
//!   may legitimately be missing return `Option`/`false`/zero. Misses
//!   are expected outcomes, not errors.
//! - **Fail fast on stale handles**: node operations on a handle whose
//!   node was removed return [`InvalidNode`] rather than touching a
//!   recycled slot.
//!
//! ## Example
//!
//! ```rust
//! use trellis::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new();
//! for city in ["oslo", "bergen", "tromso"] {
//!     graph.add_vertex(city);
//! }
//! graph.add_edge(&"oslo", &"bergen", 463);
//! graph.add_edge(&"oslo", &"tromso", 1148);
//!
//! assert_eq!(graph.edge_count(), 2);
//! assert_eq!(graph.weight(&"bergen", &"oslo"), 463);
//! assert_eq!(graph.degree(&"oslo"), 2);
//!
//! graph.remove_vertex(&"oslo");
//! assert_eq!(graph.edge_count(), 0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;

pub use collections::{HashTable, InvalidNode, LinkedList, ListView, NodeId, SlotArena};
pub use graph::{Neighbors, WeightedGraph};

// Compile-time layout checks: handles are meant to be passed around by
// value, so they must stay register-sized.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<NodeId>() == 8);
    assert!(mem::size_of::<Option<NodeId>>() <= 12);
};
