use crate::errors::ShortestPathError;
use crate::graph::{Graph, GraphPath, VertexId};
use crate::weight::{is_negative, Weight, WeightedEdge};
use super::{shortest_path, shortest_path_tree, EdgeWeight, GraphNodeMap, ShortestPathTree, NO_PARENT};

use std::{collections::BinaryHeap, cmp::Ordering};
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From source vertex, traverse through graph until the target is finalized
/// Returns Ok(None) if the target cannot be reached
/// Fails on the first negative edge weight found on the way
#[tracing::instrument(level = "debug", skip(graph), fields(directed = graph.is_directed()))]
pub fn dijkstra_shortest_path<G>(
    graph: &G,
    source: VertexId,
    target: VertexId,
) -> Result<Option<GraphPath<EdgeWeight<G>>>, ShortestPathError<EdgeWeight<G>>>
where
    G: Graph,
{
    if source != target && !graph.contains_vertex(target) {
        debug!("target not in graph");
        return Ok(None);
    }

    // Build the graph - terminates when the target is met
    let (node_map, goal_index) = build_dijkstra_graph(graph, source, Some(target))?;

    match goal_index {
        Some(goal_index) => Ok(shortest_path(&node_map, goal_index)),
        None => {
            debug!(explored = node_map.len(), "target unreachable");
            Ok(None)
        }
    }
}


/// Shortest path tree rooted at the source
/// Includes every reachable vertex, the source maps onto itself with zero weight
#[tracing::instrument(level = "debug", skip(graph), fields(directed = graph.is_directed()))]
pub fn dijkstra_shortest_paths<G>(
    graph: &G,
    source: VertexId,
) -> Result<ShortestPathTree<EdgeWeight<G>>, ShortestPathError<EdgeWeight<G>>>
where
    G: Graph,
{
    let (node_map, _) = build_dijkstra_graph(graph, source, None)?;

    Ok(shortest_path_tree(&node_map))
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
/// Without a goal the traversal runs until every reachable vertex is finalized
fn build_dijkstra_graph<G, W>(
    graph: &G,
    source: VertexId,
    goal: Option<VertexId>,
) -> Result<(GraphNodeMap<VertexId, W>, Option<usize>), ShortestPathError<W>>
where
    G: Graph,
    G::Edge: WeightedEdge<Weight = W>,
    W: Weight,
{
    // Nodes to visit - binary heap sorts Biggest to Smallest
    // NodeId reverses the ordering so the least costly node is expanded first
    let mut nodes_to_visit: BinaryHeap<NodeId<W>> = BinaryHeap::new();

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the source, parent_index is NO_PARENT
    let mut nodes_map: GraphNodeMap<VertexId, W> = GraphNodeMap::default();

    let start_index = nodes_map.insert_full(source, (NO_PARENT, W::zero())).0;
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: W::zero(),
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId { cost, index }) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((&vertex, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // Stale entry, a cheaper path to this node was already expanded
        if cost > c {
            continue;
        }

        if goal == Some(vertex) {
            debug!(vertex, cost = %c, "target reached");
            return Ok((nodes_map, Some(index)));
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

            // new cost to reach this node = node cost + edge cost
            let new_cost = c.add_saturating(weight);

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
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
                        continue;
                    }
                }
            };

            // Older entries for this neighbor stay in the heap and are skipped on pop
            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    Ok((nodes_map, None))
}


/// Node identifier
/// - for ordering we only need cost and a way to identify the node
/// - equal costs fall back to the map index, so earlier discovered nodes win
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T,
}

impl<T: PartialOrd> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: PartialOrd> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialOrd> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: PartialOrd> Eq for NodeId<T> {}
