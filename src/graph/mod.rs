//! Graph structures built on the container layers.

pub mod weighted_graph;

pub use weighted_graph::{Neighbors, WeightedGraph};
