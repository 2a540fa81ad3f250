use std::fmt::{Debug, Display};
use thiserror::Error;

use crate::graph::VertexId;


/// Failures raised by the shortest path algorithms
/// W: weight type of the graph being searched
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShortestPathError<W>
where
    W: Debug + Display,
{
    /// Dijkstra and A* require non-negative edges
    #[error("Negative edge weight [{weight}] between vertices [{from}] -> [{to}].")]
    NegativeWeight {
        weight: W,
        from: VertexId,
        to: VertexId,
    },

    /// Bellman-Ford found an edge that still relaxes after |V| - 1 passes
    #[error("Negative cycle detected in the graph.")]
    NegativeCycle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex [{0}] is not part of the graph")]
    VertexNotFound(VertexId), // Edge endpoint was never added
}
