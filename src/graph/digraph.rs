//! Fixed-size directed graph backed by adjacency lists.
//!
//! The vertex count is set at construction. Edges may be added but never
//! removed; out-neighbours are enumerated in insertion order.

use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::GraphError;

use super::{GraphResult, VertexId};

/// Directed graph over the vertices `0..V`.
#[derive(Clone, Default)]
pub struct Digraph {
    /// Out-neighbours per vertex, in insertion order.
    adj: Vec<Vec<VertexId>>,
    /// In-degree per vertex.
    indegree: Vec<usize>,
    /// Total number of edges, duplicates included.
    edge_count: usize,
}

impl Digraph {
    /// Create a digraph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            indegree: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Build a digraph from an edge list, failing on the first out-of-range id.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> GraphResult<Self> {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the edge `u -> v`. Duplicates and self-loops are accepted.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.validate_vertex(u)?;
        self.validate_vertex(v)?;
        self.adj[u].push(v);
        self.indegree[v] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Number of edges leaving `v`.
    pub fn outdegree(&self, v: VertexId) -> GraphResult<usize> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// Number of edges entering `v`.
    pub fn indegree(&self, v: VertexId) -> GraphResult<usize> {
        self.validate_vertex(v)?;
        Ok(self.indegree[v])
    }

    /// Out-neighbours of `v` in insertion order.
    ///
    /// The iterator is cheap to clone; calling `adjacent` again restarts it.
    pub fn adjacent(
        &self,
        v: VertexId,
    ) -> GraphResult<impl Iterator<Item = VertexId> + Clone + '_> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].iter().copied())
    }

    /// Vertices with out-degree zero, in ascending order.
    pub fn roots(&self) -> Vec<VertexId> {
        self.adj
            .iter()
            .enumerate()
            .filter(|(_, out)| out.is_empty())
            .map(|(v, _)| v)
            .collect()
    }

    /// Check that `v` is a vertex of this graph.
    pub fn validate_vertex(&self, v: VertexId) -> GraphResult<()> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.adj.len(),
            })
        }
    }

    /// Out-neighbour slice for a vertex already known to be in range.
    pub(crate) fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Copy this graph into a petgraph `DiGraph` whose node indices equal the
    /// vertex ids, for use with `petgraph::algo`.
    pub fn to_petgraph(&self) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count);
        for _ in 0..self.vertex_count() {
            graph.add_node(());
        }
        for (u, out) in self.adj.iter().enumerate() {
            for &v in out {
                graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
            }
        }
        graph
    }
}

impl std::fmt::Debug for Digraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Digraph")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}
