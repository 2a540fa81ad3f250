use crate::errors::ShortestPathError;
use crate::graph::{Graph, GraphPath, VertexId};
use crate::weight::{is_negative, Weight, WeightedEdge};
use super::{shortest_path, EdgeWeight, GraphNodeMap, NO_PARENT};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};



/// Node on A* graph
#[derive(Debug)]
struct Node<T> {
    index: usize, // index in the closed_list - maps to the Id of the node
    cost: T, // Cost to reach this node
    f_cost: T, // Total cost = cost + h(n) aka estimated cost
}

impl<T: PartialOrd> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: PartialOrd> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: PartialOrd> Eq for Node<T> {}


/// Shortest path between two vertices using A*
/// heuristic: estimated remaining cost from a vertex to the target
///
/// The heuristic is trusted as given. The returned path is only guaranteed to be
/// the shortest one when the heuristic never overestimates the remaining cost,
/// otherwise A* still terminates with a valid (possibly longer) path.
pub fn a_star_search<G, H>(
    graph: &G,
    source: VertexId,
    target: VertexId,
    heuristic: H,
) -> Result<Option<GraphPath<EdgeWeight<G>>>, ShortestPathError<EdgeWeight<G>>>
where
    G: Graph,
    H: Fn(VertexId) -> EdgeWeight<G>,
{
    AStar::new(heuristic).search(graph, source, target)
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Holds the heuristic so the same estimate can be reused across searches
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {

    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// From source vertex, traverse through graph until the target is expanded
    /// Returns Ok(None) if no path exists
    /// Fails on the first negative edge weight found on the way
    #[tracing::instrument(level = "debug", skip(self, graph), fields(directed = graph.is_directed()))]
    pub fn search<G, W>(
        &self,
        graph: &G,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<GraphPath<W>>, ShortestPathError<W>>
    where
        G: Graph,
        G::Edge: WeightedEdge<Weight = W>,
        W: Weight,
        H: Fn(VertexId) -> W,
    {
        if source != target && !graph.contains_vertex(target) {
            debug!("target not in graph");
            return Ok(None);
        }

        let (closed_list, goal_index) = self.build_graph(graph, source, target)?;

        // Return the shortest path
        match goal_index {
            Some(goal_index) => Ok(shortest_path(&closed_list, goal_index)),
            None => {
                debug!(explored = closed_list.len(), "target unreachable");
                Ok(None)
            }
        }
    }


    /// Traverses the graph using A* algorithm
    /// Returns a map of nodes with their smallest costs along with the index of the goal node
    fn build_graph<G, W>(
        &self,
        graph: &G,
        source: VertexId,
        target: VertexId,
    ) -> Result<(GraphNodeMap<VertexId, W>, Option<usize>), ShortestPathError<W>>
    where
        G: Graph,
        G::Edge: WeightedEdge<Weight = W>,
        W: Weight,
        H: Fn(VertexId) -> W,
    {
        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic)
        let mut open_list: BinaryHeap<Node<W>> = BinaryHeap::new();

        // Evaluated nodes, avoids re-evaluating nodes, used to find the final path
        // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the closed_list
        let mut closed_list: GraphNodeMap<VertexId, W> = GraphNodeMap::default();

        let start_index = closed_list.insert_full(source, (NO_PARENT, W::zero())).0;
        open_list.push(Node {
            index: start_index,
            cost: W::zero(),
            f_cost: (self.heuristic)(source),
        });

        while let Some(Node { index, cost, .. }) = open_list.pop() {

            // fetch current best cost for node
            let Some((&vertex, &(_, c))) = closed_list.get_index(index) else {
                continue;
            };

            // If cost of new node from BinaryHeap is higher than the best cost, skip it
            // This implies we've already found a better path to this node
            if cost > c {
                continue;
            }

            if vertex == target {
                debug!(vertex, cost = %c, "target reached");
                return Ok((closed_list, Some(index)));
            }
            trace!(vertex, cost = %c, "expanding");

            for (neighbor, edge) in graph.neighbors(vertex) {
                let weight = edge.weight();
                if is_negative(weight) {
                    debug!(from = vertex, to = neighbor, weight = %weight, "negative edge weight");
                    return Err(ShortestPathError::NegativeWeight {
                        weight,
                        from: vertex,
                        to: neighbor,
                    });
                }

                // This is confirmed cost, not heuristic
                let new_cost = c.add_saturating(weight);

                let neighbor_index = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        let neighbor_index = e.index();
                        e.insert((index, new_cost));
                        neighbor_index
                    }
                    Occupied(mut e) => {
                        if new_cost < e.get().1 {
                            // We've found a better path to this neighbor
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            // The existing path is better, do nothing
                            continue;
                        }
                    }
                };

                open_list.push(Node {
                    index: neighbor_index,
                    cost: new_cost,
                    f_cost: new_cost.add_saturating((self.heuristic)(neighbor)),
                });
            }
        }
        Ok((closed_list, None))
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, UndirectedGraph};
    use crate::graph_algos::dijkstra::dijkstra_shortest_path;

    /// A* algorithm test
    #[test]
    fn test_a_star_source_is_target() {
        let mut graph: DirectedGraph<i32, i32> = DirectedGraph::new();
        let v1 = graph.add_vertex(10);

        // heuristic does not matter when there is nothing to search
        let path = a_star_search(&graph, v1, v1, |_| 42).unwrap();
        assert_eq!(path, Some(GraphPath::new(vec![v1], 0)));
    }

    #[test]
    fn test_a_star_handles_unreachable_goal() {
        let mut graph: UndirectedGraph<i32, f64> = UndirectedGraph::new();
        let v1 = graph.add_vertex(10);
        let v2 = graph.add_vertex(20);
        let v3 = graph.add_vertex(30);
        graph.add_edge(v1, v2, 1.0).unwrap();

        assert_eq!(a_star_search(&graph, v1, v3, |_| 0.0).unwrap(), None);
        // a target id that was never added is simply unreachable
        assert_eq!(a_star_search(&graph, v1, 5, |_| 0.0).unwrap(), None);
    }

    #[test]
    fn test_a_star_multiple_paths() {
        let mut graph: DirectedGraph<i32, u32> = DirectedGraph::new();
        let v1 = graph.add_vertex(10);
        let v2 = graph.add_vertex(20);
        let v3 = graph.add_vertex(30);
        graph.add_edge(v1, v2, 1).unwrap();
        graph.add_edge(v1, v3, 2).unwrap();
        graph.add_edge(v2, v3, 2).unwrap();

        let path = a_star_search(&graph, v1, v3, |_| 0).unwrap();
        assert_eq!(path, Some(GraphPath::new(vec![v1, v3], 2)));
    }

    #[test]
    fn test_a_star_with_heuristic() {
        // Grid-like layout, the heuristic is the manhattan distance to D
        // A(0,0) -> B(1,0) -> D(2,0)
        //   |
        //   v
        // C(0,1) ------> D(2,0)
        let mut graph: DirectedGraph<(i32, i32), i32> = DirectedGraph::new();
        let a = graph.add_vertex((0, 0));
        let b = graph.add_vertex((1, 0));
        let c = graph.add_vertex((0, 1));
        let d = graph.add_vertex((2, 0));
        graph.add_edge(a, b, 1).unwrap();
        graph.add_edge(a, c, 1).unwrap();
        graph.add_edge(b, d, 1).unwrap();
        graph.add_edge(c, d, 2).unwrap();

        let goal = *graph.vertex(d).unwrap();
        let heuristic = |id: VertexId| {
            let (x, y) = graph.vertex(id).copied().unwrap_or(goal);
            (x - goal.0).abs() + (y - goal.1).abs()
        };

        let path = a_star_search(&graph, a, d, heuristic).unwrap();
        assert_eq!(path, Some(GraphPath::new(vec![a, b, d], 2)));
    }

    #[test]
    fn test_a_star_overestimating_heuristic_is_suboptimal() {
        let mut graph: DirectedGraph<i32, i32> = DirectedGraph::new();
        let s = graph.add_vertex(10);
        let m = graph.add_vertex(20);
        let t = graph.add_vertex(30);
        graph.add_edge(s, m, 1).unwrap();
        graph.add_edge(m, t, 1).unwrap();
        graph.add_edge(s, t, 5).unwrap();

        // m looks far away, so the direct edge is taken
        let heuristic = |id: VertexId| if id == m { 100 } else { 0 };
        let path = a_star_search(&graph, s, t, heuristic).unwrap().unwrap();
        assert_eq!(path, GraphPath::new(vec![s, t], 5));

        let optimal = dijkstra_shortest_path(&graph, s, t).unwrap().unwrap();
        assert_eq!(optimal, GraphPath::new(vec![s, m, t], 2));
        assert!(path.total_weight >= optimal.total_weight);
    }

    #[test]
    fn test_a_star_negative_weight() {
        let mut graph: UndirectedGraph<i32, f32> = UndirectedGraph::new();
        let v1 = graph.add_vertex(10);
        let v2 = graph.add_vertex(20);
        graph.add_edge(v1, v2, -1.0).unwrap();

        let err = a_star_search(&graph, v1, v2, |_| 0.0).unwrap_err();
        assert_eq!(err, ShortestPathError::NegativeWeight { weight: -1.0, from: v1, to: v2 });
        assert_eq!(
            err.to_string(),
            format!("Negative edge weight [-1] between vertices [{v1}] -> [{v2}].")
        );
    }

    #[test]
    fn test_a_star_constant_heuristics_find_same_weight() {
        fn check<G: Graph<Edge = i32>>(graph: &G, v: &[VertexId]) {
            let underestimate = a_star_search(graph, v[0], v[2], |_| 0).unwrap().unwrap();
            let overestimate = a_star_search(graph, v[0], v[2], |_| 10).unwrap().unwrap();

            // a constant estimate shifts every priority equally
            assert_eq!(underestimate.total_weight, 3);
            assert_eq!(overestimate.total_weight, 3);
        }

        let edges = [(0, 1, 1), (1, 2, 2), (0, 2, 3), (0, 3, 2), (2, 3, 1)];

        let mut directed: DirectedGraph<i32, i32> = DirectedGraph::new();
        let v: Vec<_> = (1..=4).map(|p| directed.add_vertex(p * 10)).collect();
        for (from, to, weight) in edges {
            directed.add_edge(v[from], v[to], weight).unwrap();
        }
        check(&directed, &v);

        let mut undirected: UndirectedGraph<i32, i32> = UndirectedGraph::new();
        let v: Vec<_> = (1..=4).map(|p| undirected.add_vertex(p * 10)).collect();
        for (from, to, weight) in edges {
            undirected.add_edge(v[from], v[to], weight).unwrap();
        }
        check(&undirected, &v);
    }

    #[test]
    fn test_a_star_huge_heuristic_does_not_overflow() {
        let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        graph.add_edge(a, b, 1).unwrap();
        graph.add_edge(b, c, 1).unwrap();

        let heuristic = |id: VertexId| if id == c { 0 } else { u32::MAX };
        let path = a_star_search(&graph, a, c, heuristic).unwrap();
        assert_eq!(path, Some(GraphPath::new(vec![a, b, c], 2)));
    }

    #[test]
    fn test_build_a_star_graph_with_cycle() {
        let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        let d = graph.add_vertex("D");
        graph.add_edge(a, b, 1).unwrap();
        graph.add_edge(b, c, 1).unwrap();
        graph.add_edge(c, a, 1).unwrap();
        graph.add_edge(c, d, 2).unwrap();

        let a_star = AStar::new(|_: VertexId| 0u32);
        let (result, goal_index) = a_star.build_graph(&graph, a, d).unwrap();

        assert_eq!(goal_index, result.get_index_of(&d));
        let costs: Vec<_> = [a, b, c, d].iter().map(|id| result[id].1).collect();
        assert_eq!(costs, vec![0, 1, 2, 4]);
    }
}
