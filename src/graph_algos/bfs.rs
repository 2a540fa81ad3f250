use crate::graph::{Graph, GraphPath, VertexId};
use super::{shortest_path, GraphNodeMap, NO_PARENT};

use std::collections::VecDeque;
use indexmap::map::Entry::Vacant;
use tracing::{debug, trace};


/// Fewest-hops path between two vertices using Breadth First Search
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Edge weights are ignored, the returned total weight is the number of edges walked
/// Returns None if the target cannot be reached from the source
#[tracing::instrument(level = "debug", skip(graph), fields(directed = graph.is_directed()))]
pub fn bfs_shortest_path<G>(graph: &G, source: VertexId, target: VertexId) -> Option<GraphPath<usize>>
where
    G: Graph,
{
    // Every discovered vertex with (parent_index, depth)
    // Vertices are discovered in non-decreasing depth order, so the first entry is final
    let mut node_map: GraphNodeMap<VertexId, usize> = GraphNodeMap::default();
    let start_index = node_map.insert_full(source, (NO_PARENT, 0)).0;

    if source == target {
        return shortest_path(&node_map, start_index);
    }

    if !graph.contains_vertex(target) {
        debug!("target not in graph");
        return None;
    }

    let mut queue = VecDeque::from([start_index]);

    while let Some(index) = queue.pop_front() {
        let Some((&vertex, &(_, depth))) = node_map.get_index(index) else {
            continue;
        };
        trace!(vertex, depth, "expanding");

        for (neighbor, _) in graph.neighbors(vertex) {
            if let Vacant(e) = node_map.entry(neighbor) {
                let neighbor_index = e.index();
                e.insert((index, depth + 1));

                if neighbor == target {
                    debug!(hops = depth + 1, "target reached");
                    return shortest_path(&node_map, neighbor_index);
                }
                queue.push_back(neighbor_index);
            }
        }
    }

    debug!(explored = node_map.len(), "target unreachable");
    None
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, UndirectedGraph};

    #[test]
    fn test_bfs_source_is_target() {
        let mut graph: DirectedGraph<i32, i32> = DirectedGraph::new();
        let v1 = graph.add_vertex(10);

        assert_eq!(bfs_shortest_path(&graph, v1, v1), Some(GraphPath::new(vec![v1], 0)));
    }

    #[test]
    fn test_bfs_no_available_path() {
        let mut graph: UndirectedGraph<i32, i32> = UndirectedGraph::new();
        let v1 = graph.add_vertex(10);
        let v2 = graph.add_vertex(20);

        assert_eq!(bfs_shortest_path(&graph, v1, v2), None);
    }

    #[test]
    fn test_bfs_counts_hops_not_weight() {
        let mut graph: DirectedGraph<i32, i32> = DirectedGraph::new();
        let v: Vec<_> = (1..=5).map(|p| graph.add_vertex(p * 10)).collect();

        graph.add_edge(v[0], v[1], 100).unwrap();
        graph.add_edge(v[1], v[2], 200).unwrap();
        graph.add_edge(v[0], v[2], 300).unwrap();
        graph.add_edge(v[2], v[3], 400).unwrap();
        graph.add_edge(v[3], v[4], 500).unwrap();
        graph.add_edge(v[2], v[4], 600).unwrap();

        let path = bfs_shortest_path(&graph, v[0], v[4]).unwrap();
        assert_eq!(path, GraphPath::new(vec![v[0], v[2], v[4]], 2));
    }

    #[test]
    fn test_bfs_cycle() {
        let mut graph: UndirectedGraph<i32, i32> = UndirectedGraph::new();
        let v: Vec<_> = (1..=5).map(|p| graph.add_vertex(p * 10)).collect();

        graph.add_edge(v[0], v[1], 100).unwrap();
        graph.add_edge(v[1], v[2], 200).unwrap();
        graph.add_edge(v[2], v[3], 300).unwrap();
        graph.add_edge(v[3], v[1], 300).unwrap();
        graph.add_edge(v[2], v[4], 400).unwrap();

        let path = bfs_shortest_path(&graph, v[0], v[4]).unwrap();
        assert_eq!(path, GraphPath::new(vec![v[0], v[1], v[2], v[4]], 3));
    }

    #[test]
    fn test_bfs_directed_wrong_direction_takes_detour() {
        let mut graph: DirectedGraph<i32, i32> = DirectedGraph::new();
        let v: Vec<_> = (1..=5).map(|p| graph.add_vertex(p * 10)).collect();

        // 2 -> 3 is inverted, so the path goes around via 4
        graph.add_edge(v[0], v[1], 100).unwrap();
        graph.add_edge(v[2], v[1], 200).unwrap();
        graph.add_edge(v[2], v[4], 300).unwrap();
        graph.add_edge(v[1], v[3], 400).unwrap();
        graph.add_edge(v[3], v[2], 500).unwrap();

        let path = bfs_shortest_path(&graph, v[0], v[4]).unwrap();
        assert_eq!(path, GraphPath::new(vec![v[0], v[1], v[3], v[2], v[4]], 4));
    }

    #[test]
    fn test_bfs_unknown_vertices() {
        let mut graph: DirectedGraph<i32, i32> = DirectedGraph::new();
        let v1 = graph.add_vertex(10);

        assert_eq!(bfs_shortest_path(&graph, v1, 7), None);
        assert_eq!(bfs_shortest_path(&graph, 7, v1), None);
        assert_eq!(bfs_shortest_path(&graph, 7, 7), Some(GraphPath::new(vec![7], 0)));
    }

    #[test]
    fn test_bfs_undirected_walks_edges_backwards() {
        let mut graph: UndirectedGraph<i32, i32> = UndirectedGraph::new();
        let v1 = graph.add_vertex(10);
        let v2 = graph.add_vertex(20);
        graph.add_edge(v2, v1, 1).unwrap();

        assert_eq!(bfs_shortest_path(&graph, v1, v2), Some(GraphPath::new(vec![v1, v2], 1)));
    }
}
