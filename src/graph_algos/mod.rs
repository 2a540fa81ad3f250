pub mod bfs;
pub mod dijkstra;
pub mod bellman_ford;
pub mod a_star;
mod shortest_path;

use shortest_path::{shortest_path, shortest_path_tree, NO_PARENT};

use crate::collections::FxIndexMap;
use crate::graph::{Graph, GraphPath, VertexId};
use crate::weight::WeightedEdge;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Every reachable vertex mapped to its shortest path from the source
pub type ShortestPathTree<W> = FxIndexMap<VertexId, GraphPath<W>>;

/// Weight type carried by the edges of graph G
pub type EdgeWeight<G> = <<G as Graph>::Edge as WeightedEdge>::Weight;
