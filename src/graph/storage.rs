use std::marker::PhantomData;

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::weight::WeightedEdge;
use super::{Directed, EdgeType, Graph, Undirected, VertexId};


pub type DirectedGraph<V, E> = AdjacencyGraph<V, E, Directed>;
pub type UndirectedGraph<V, E> = AdjacencyGraph<V, E, Undirected>;


/// Adjacency map backed graph
/// V: vertex payload
/// E: edge payload, must expose a weight
/// Ty: Directed or Undirected
///
/// Edges live once in `edges`, the adjacency map only stores indices into it.
/// Both maps keep insertion order, so neighbor iteration is deterministic.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, E, Ty = Directed> {
    vertices: FxIndexMap<VertexId, V>,
    adjacency: FxIndexMap<VertexId, FxIndexMap<VertexId, usize>>,
    edges: Vec<(VertexId, VertexId, E)>,
    next_id: VertexId,
    ty: PhantomData<Ty>,
}

impl<V, E, Ty> Default for AdjacencyGraph<V, E, Ty> {
    fn default() -> Self {
        Self {
            vertices: FxIndexMap::default(),
            adjacency: FxIndexMap::default(),
            edges: Vec::new(),
            next_id: 0,
            ty: PhantomData,
        }
    }
}

impl<V, E, Ty: EdgeType> AdjacencyGraph<V, E, Ty> {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its freshly assigned id
    /// Ids are never reused
    pub fn add_vertex(&mut self, payload: V) -> VertexId {
        let id = self.next_id;
        self.next_id += 1;
        self.vertices.insert(id, payload);
        self.adjacency.insert(id, FxIndexMap::default());
        id
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(&id)
    }

    /// Add an edge between two existing vertices
    /// Adding an edge that already exists replaces its payload
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, edge: E) -> Result<(), GraphError> {
        for id in [from, to] {
            if !self.vertices.contains_key(&id) {
                return Err(GraphError::VertexNotFound(id));
            }
        }

        if let Some(&index) = self.adjacency.get(&from).and_then(|n| n.get(&to)) {
            self.edges[index].2 = edge;
            return Ok(());
        }

        let index = self.edges.len();
        self.edges.push((from, to, edge));
        self.link(from, to, index);
        if !Ty::is_directed() {
            self.link(to, from, index);
        }
        Ok(())
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|neighbors| neighbors.contains_key(&to))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn link(&mut self, from: VertexId, to: VertexId, index: usize) {
        if let Some(neighbors) = self.adjacency.get_mut(&from) {
            neighbors.insert(to, index);
        }
    }
}

impl<V, E, Ty> Graph for AdjacencyGraph<V, E, Ty>
where
    E: WeightedEdge,
    Ty: EdgeType,
{
    type Edge = E;

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, &E)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(move |neighbors| {
                neighbors.iter().map(move |(&to, &index)| (to, &self.edges[index].2))
            })
    }

    fn edge(&self, from: VertexId, to: VertexId) -> Option<&E> {
        let index = *self.adjacency.get(&from)?.get(&to)?;
        Some(&self.edges[index].2)
    }

    fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, &E)> + '_ {
        self.edges.iter().map(|(from, to, edge)| (*from, *to, edge))
    }
}
