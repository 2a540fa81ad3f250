use super::VertexId;


/// Ordered walk through a graph together with its accumulated weight
/// Two paths are equal when both the vertex sequence and the total weight match
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath<W> {
    pub vertices: Vec<VertexId>,
    pub total_weight: W,
}

impl<W> GraphPath<W> {

    pub fn new(vertices: Vec<VertexId>, total_weight: W) -> Self {
        Self { vertices, total_weight }
    }

    /// Number of edges walked
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn end(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

impl<W: num_traits::Zero> GraphPath<W> {

    /// Zero length path from a vertex to itself
    pub fn single(vertex: VertexId) -> Self {
        Self::new(vec![vertex], W::zero())
    }
}
