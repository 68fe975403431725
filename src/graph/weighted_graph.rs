//! `WeightedGraph` — a weighted, undirected graph with O(1) edge queries.
//!
//! The vertex set is a [`HashTable`] from vertex identity to that
//! vertex's adjacency table; each adjacency table maps a neighbor's
//! identity to the edge weight. The top-level table is the sole owner of
//! every vertex record — adjacency tables refer to neighbors by identity
//! key, dereferenced through the top-level table in O(1) — so removing a
//! vertex only requires deleting its incident adjacency entries.
//!
//! Self-edges are permitted and store a single adjacency entry.

use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

use num_traits::Zero;

use crate::collections::HashTable;

/// A weighted, undirected graph over caller-supplied vertex identities.
///
/// Identities need `Hash + Eq + Clone` (equal vertices must hash
/// equally); weights are any `Copy + Zero` numeric, `i64` by default.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_vertex` / `is_vertex` / `degree` | O(1) expected |
/// | `add_edge` / `remove_edge` / `is_edge` / `weight` | O(1) expected |
/// | `remove_vertex` / `neighbors` | O(degree) expected |
/// | `vertices` | O(|V|) |
/// | `vertex_count` / `edge_count` | O(1) |
pub struct WeightedGraph<V, W = i64, S = RandomState> {
    vertices: HashTable<V, HashTable<V, W, S>, S>,
    edges: usize,
}

/// The neighborhood of one vertex: parallel vectors of neighbor
/// identities and the weights of the corresponding edges.
///
/// Both vectors have length `degree`; matching indices describe the same
/// edge. The vectors are freshly allocated and independent of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors<V, W> {
    /// Neighbor identities, one per incident edge.
    pub vertices: Vec<V>,
    /// Weight of the edge to the neighbor at the same index.
    pub weights: Vec<W>,
}

impl<V, W> Neighbors<V, W> {
    /// Returns the number of incident edges described.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no edges are described.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V, W> WeightedGraph<V, W, RandomState> {
    /// Creates a graph with no vertices or edges.
    pub fn new() -> Self {
        Self {
            vertices: HashTable::new(),
            edges: 0,
        }
    }

    /// Creates an empty graph sized for roughly `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: HashTable::with_capacity(vertices),
            edges: 0,
        }
    }
}

impl<V, W, S> WeightedGraph<V, W, S> {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, counting each undirected edge (and
    /// each self-edge) once.
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

impl<V, W, S> WeightedGraph<V, W, S>
where
    V: Hash + Eq + Clone,
    W: Copy + Zero,
    S: BuildHasher + Default,
{
    /// Adds `vertex` with no incident edges.
    ///
    /// Returns `false` (and leaves the graph unchanged, including the
    /// vertex's existing edges) if the identity is already a vertex.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains_key(&vertex) {
            return false;
        }
        self.vertices.put(vertex, HashTable::with_hasher(S::default()));
        true
    }

    /// Removes `vertex` and every edge incident on it.
    ///
    /// Returns `false` if the identity is not a vertex. Runs in
    /// O(degree) expected time: one edge removal per incident edge.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(adjacency) = self.vertices.get(vertex) else {
            return false;
        };
        let neighbors: Vec<V> = adjacency.keys().iter().cloned().collect();

        for neighbor in &neighbors {
            self.remove_edge(vertex, neighbor);
        }
        self.vertices.remove(vertex);
        true
    }

    /// Returns `true` if the identity is a vertex of the graph.
    pub fn is_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Returns the degree of `vertex`, or 0 if it is not a vertex.
    ///
    /// A self-edge adds one to the degree.
    pub fn degree(&self, vertex: &V) -> usize {
        self.vertices
            .get(vertex)
            .map_or(0, |adjacency| adjacency.len())
    }

    /// Iterates over every vertex identity exactly once.
    ///
    /// Order is unspecified. O(|V|) to exhaust.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys().into_iter()
    }

    /// Returns the neighborhood of `vertex` as freshly allocated
    /// parallel identity/weight vectors.
    ///
    /// Returns `None` if the identity is not a vertex or has degree 0.
    pub fn neighbors(&self, vertex: &V) -> Option<Neighbors<V, W>> {
        let adjacency = self.vertices.get(vertex)?;
        if adjacency.is_empty() {
            return None;
        }

        let mut vertices = Vec::with_capacity(adjacency.len());
        let mut weights = Vec::with_capacity(adjacency.len());
        for (neighbor, weight) in adjacency.iter() {
            vertices.push(neighbor.clone());
            weights.push(*weight);
        }
        Some(Neighbors { vertices, weights })
    }

    /// Adds the edge `(u, v)` with the given weight, or updates the
    /// weight if the edge already exists.
    ///
    /// Returns `false` (graph unchanged) unless both endpoints are
    /// vertices. A new edge increments the edge count; an update does
    /// not. Self-edges (`u == v`) are allowed and count once.
    pub fn add_edge(&mut self, u: &V, v: &V, weight: W) -> bool {
        if !self.is_vertex(u) || !self.is_vertex(v) {
            return false;
        }
        if !self.is_edge(u, v) {
            self.edges += 1;
        }

        let Some(adjacency) = self.vertices.get_mut(u) else {
            return false;
        };
        adjacency.put(v.clone(), weight);

        if u != v {
            let Some(adjacency) = self.vertices.get_mut(v) else {
                return false;
            };
            adjacency.put(u.clone(), weight);
        }
        true
    }

    /// Removes the edge `(u, v)`.
    ///
    /// Returns `false` (graph unchanged) if either endpoint is not a
    /// vertex or `(u, v)` is not an edge.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        if !self.is_edge(u, v) {
            return false;
        }

        if let Some(adjacency) = self.vertices.get_mut(u) {
            adjacency.remove(v);
        }
        if u != v {
            if let Some(adjacency) = self.vertices.get_mut(v) {
                adjacency.remove(u);
            }
        }
        self.edges -= 1;
        true
    }

    /// Returns `true` if `(u, v)` is an edge; `false` when either
    /// endpoint is not a vertex.
    pub fn is_edge(&self, u: &V, v: &V) -> bool {
        self.vertices
            .get(u)
            .map_or(false, |adjacency| adjacency.contains_key(v))
    }

    /// Returns the weight of `(u, v)`, or zero if `(u, v)` is not an
    /// edge (including missing endpoints).
    ///
    /// Zero does not distinguish a missing edge from an edge of weight
    /// zero; use [`Self::is_edge`] first where that matters.
    pub fn weight(&self, u: &V, v: &V) -> W {
        self.vertices
            .get(u)
            .and_then(|adjacency| adjacency.get(v))
            .copied()
            .unwrap_or_else(W::zero)
    }
}

impl<V, W> Default for WeightedGraph<V, W, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, S> fmt::Debug for WeightedGraph<V, W, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}
