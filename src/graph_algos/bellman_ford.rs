use crate::errors::ShortestPathError;
use crate::graph::{Graph, VertexId};
use crate::weight::{is_negative, Weight, WeightedEdge};
use super::{shortest_path_tree, EdgeWeight, GraphNodeMap, ShortestPathTree, NO_PARENT};

use indexmap::map::Entry::{Occupied, Vacant};
use num_traits::Zero;
use tracing::debug;


/// Shortest path tree using the Bellman-Ford algorithm
/// https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
/// Negative edge weights are allowed in directed graphs.
/// In undirected graphs a reachable negative edge can be walked back and forth,
/// so it is reported as a negative cycle.
#[tracing::instrument(level = "debug", skip(graph), fields(directed = graph.is_directed()))]
pub fn bellman_ford_shortest_paths<G>(
    graph: &G,
    source: VertexId,
) -> Result<ShortestPathTree<EdgeWeight<G>>, ShortestPathError<EdgeWeight<G>>>
where
    G: Graph,
{
    // Vertices without an entry are at infinite distance
    let mut node_map: GraphNodeMap<VertexId, EdgeWeight<G>> = GraphNodeMap::default();
    node_map.insert(source, (NO_PARENT, Zero::zero()));

    let passes = graph.vertex_count().saturating_sub(1);
    for pass in 0..passes {
        if !relax_edges(graph, &mut node_map) {
            debug!(pass, "converged early");
            break;
        }
    }

    // Anything still improving after |V| - 1 passes sits on or behind a negative cycle
    if relax_edges(graph, &mut node_map) {
        debug!("negative cycle detected");
        return Err(ShortestPathError::NegativeCycle);
    }

    Ok(shortest_path_tree(&node_map))
}


/// One full relaxation pass over every walkable edge
/// Returns true if any distance improved
fn relax_edges<G, W>(graph: &G, node_map: &mut GraphNodeMap<VertexId, W>) -> bool
where
    G: Graph,
    G::Edge: WeightedEdge<Weight = W>,
    W: Weight,
{
    let mut updated = false;
    for (from, to, edge) in graph.edges() {
        let weight = edge.weight();
        updated |= relax(node_map, from, to, weight);
        if !graph.is_directed() {
            updated |= relax(node_map, to, from, weight);
        }
    }
    updated
}

/// Relax a single edge, returns true if `to` got a cheaper path
fn relax<W: Weight>(node_map: &mut GraphNodeMap<VertexId, W>, from: VertexId, to: VertexId, weight: W) -> bool {
    // `from` has not been reached yet
    let Some((from_index, _, &(_, cost))) = node_map.get_full(&from) else {
        return false;
    };
    let new_cost = match cost.add_checked(weight) {
        Some(new_cost) => new_cost,
        // Below the smallest representable cost, keep reporting progress so verification fails
        None if is_negative(weight) => return true,
        None => cost.add_saturating(weight),
    };

    match node_map.entry(to) {
        Vacant(e) => {
            e.insert((from_index, new_cost));
            true
        }
        Occupied(mut e) => {
            if new_cost < e.get().1 {
                e.insert((from_index, new_cost));
                true
            } else {
                false
            }
        }
    }
}
