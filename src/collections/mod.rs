//! The container layers: slot arena, linked list, hash table.
//!
//! Each structure is built on the one before it:
//! - `arena`: generational slot storage and the `NodeId` handle type
//! - `linked_list`: doubly linked list over an arena
//! - `hash_table`: chained hash table whose chains and key registry are
//!   linked lists

pub mod arena;
pub mod hash_table;
pub mod linked_list;

pub use arena::{InvalidNode, NodeId, SlotArena};
pub use hash_table::HashTable;
pub use linked_list::{LinkedList, ListView};
