use crate::graph::{GraphPath, VertexId};
use super::{GraphNodeMap, ShortestPathTree};

/// Parent index of the start node
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path from start to goal, weighted with the goal's cost
/// node_map: GraphNodeMap<VertexId, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<C>(node_map: &GraphNodeMap<VertexId, C>, goal_index: usize) -> Option<GraphPath<C>>
where
    C: Copy,
{
    let (_, &(_, total_weight)) = node_map.get_index(goal_index)?;

    let mut vertices = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        let (&vertex, &(parent_index, _)) = node_map.get_index(current_index)?;
        vertices.push(vertex);
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    vertices.reverse();

    Some(GraphPath::new(vertices, total_weight))
}

/// Expand every node in the map into its full path from the start node
pub(crate) fn shortest_path_tree<C>(node_map: &GraphNodeMap<VertexId, C>) -> ShortestPathTree<C>
where
    C: Copy,
{
    node_map
        .keys()
        .enumerate()
        .filter_map(|(index, &vertex)| Some((vertex, shortest_path(node_map, index)?)))
        .collect()
}
