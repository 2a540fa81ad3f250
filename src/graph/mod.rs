//! Graph collaborator
//!
//! The algorithms only ever read a graph through the [`Graph`] trait.
//! [`AdjacencyGraph`] is the in-memory store shipped with the crate.

mod path;
mod storage;

pub use path::GraphPath;
pub use storage::{AdjacencyGraph, DirectedGraph, UndirectedGraph};

use crate::weight::WeightedEdge;


/// Opaque vertex key, assigned by the graph on insertion
pub type VertexId = usize;


/// Read-only view of a graph as consumed by the shortest path algorithms
pub trait Graph {
    type Edge: WeightedEdge;

    /// Directed graphs walk edges one way only, undirected graphs both ways
    fn is_directed(&self) -> bool;

    fn vertex_count(&self) -> usize;

    fn contains_vertex(&self, id: VertexId) -> bool;

    /// All vertex ids currently in the graph
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_;

    /// Walkable edges leaving `id`
    /// - directed: outgoing edges
    /// - undirected: every incident edge
    fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, &Self::Edge)> + '_;

    /// Edge from `from` to `to`, if one is walkable in that direction
    fn edge(&self, from: VertexId, to: VertexId) -> Option<&Self::Edge>;

    /// Every edge exactly once as (from, to, edge)
    /// Undirected edges are reported in the orientation they were inserted
    fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, &Self::Edge)> + '_;
}


/// Directedness marker for [`AdjacencyGraph`]
pub trait EdgeType {
    fn is_directed() -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Undirected;

impl EdgeType for Directed {
    #[inline]
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    #[inline]
    fn is_directed() -> bool {
        false
    }
}
