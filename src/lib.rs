//! Shortest path algorithms over generic graphs
//!
//! - [`bfs_shortest_path`] - fewest hops between two vertices
//! - [`dijkstra_shortest_path`] / [`dijkstra_shortest_paths`] - non-negative weights
//! - [`bellman_ford_shortest_paths`] - negative weights, negative cycle detection
//! - [`a_star_search`] - heuristic guided single pair search
//!
//! ```
//! use graph_paths::{dijkstra_shortest_path, DirectedGraph, GraphPath};
//!
//! let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//! graph.add_edge(a, b, 1).unwrap();
//! graph.add_edge(b, c, 1).unwrap();
//! graph.add_edge(a, c, 5).unwrap();
//!
//! let path = dijkstra_shortest_path(&graph, a, c).unwrap();
//! assert_eq!(path, Some(GraphPath::new(vec![a, b, c], 2)));
//! ```

pub mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod weight;

pub use errors::{GraphError, ShortestPathError};
pub use graph::{
    AdjacencyGraph, Directed, DirectedGraph, EdgeType, Graph, GraphPath, Undirected,
    UndirectedGraph, VertexId,
};
pub use graph_algos::{
    a_star::{a_star_search, AStar},
    bellman_ford::bellman_ford_shortest_paths,
    bfs::bfs_shortest_path,
    dijkstra::{dijkstra_shortest_path, dijkstra_shortest_paths},
    EdgeWeight, ShortestPathTree,
};
pub use weight::{Weight, WeightedEdge};
