//! Shortest ancestral path (SAP) queries.
//!
//! An ancestral path between two vertex sets `A` and `B` is a pair of directed
//! paths, one starting in `A` and one starting in `B`, that end at the same
//! common ancestor. The engine finds one of minimum total length with a single
//! multi-source BFS per side, expanded level by level in lockstep.
//!
//! All query state (distance maps, frontiers) is allocated per call; a [`Sap`]
//! holds nothing but the immutable digraph and can serve many threads at once.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

use super::{Digraph, GraphResult, VertexId};

/// How far each side of a search is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Stop expanding a side once its next level can no longer beat the best
    /// total found so far.
    #[default]
    Bidirectional,
    /// Run both traversals to exhaustion and keep the global minimum.
    Exhaustive,
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Bidirectional => write!(f, "bidirectional"),
            SearchStrategy::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// A common ancestor together with the total length of the path through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestralPath {
    /// The common ancestor realizing the minimum.
    pub ancestor: VertexId,
    /// Sum of the distances from each side to `ancestor`.
    pub length: usize,
}

/// Shortest-ancestral-path engine over an acyclic digraph.
///
/// Acyclicity is the caller's responsibility; see [`super::DirectedCycle`].
#[derive(Debug, Clone)]
pub struct Sap {
    graph: Digraph,
    strategy: SearchStrategy,
}

impl Sap {
    /// Create an engine using the default [`SearchStrategy`].
    pub fn new(graph: Digraph) -> Self {
        Self::with_strategy(graph, SearchStrategy::default())
    }

    /// Create an engine with an explicit search strategy.
    pub fn with_strategy(graph: Digraph, strategy: SearchStrategy) -> Self {
        Self { graph, strategy }
    }

    /// The underlying digraph.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// The strategy used by every query.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Length of a shortest ancestral path between `v` and `w`.
    pub fn length(&self, v: VertexId, w: VertexId) -> GraphResult<Option<usize>> {
        Ok(self.path(v, w)?.map(|p| p.length))
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path.
    pub fn ancestor(&self, v: VertexId, w: VertexId) -> GraphResult<Option<VertexId>> {
        Ok(self.path(v, w)?.map(|p| p.ancestor))
    }

    /// Shortest ancestral path between two single vertices.
    pub fn path(&self, v: VertexId, w: VertexId) -> GraphResult<Option<AncestralPath>> {
        self.path_between(&[v], &[w])
    }

    /// Length of a shortest ancestral path between any vertex of `a` and any
    /// vertex of `b`.
    pub fn length_between(&self, a: &[VertexId], b: &[VertexId]) -> GraphResult<Option<usize>> {
        Ok(self.path_between(a, b)?.map(|p| p.length))
    }

    /// A common ancestor on a shortest ancestral path between `a` and `b`.
    pub fn ancestor_between(
        &self,
        a: &[VertexId],
        b: &[VertexId],
    ) -> GraphResult<Option<VertexId>> {
        Ok(self.path_between(a, b)?.map(|p| p.ancestor))
    }

    /// Shortest ancestral path between two non-empty vertex sets.
    ///
    /// Returns `Ok(None)` when the sets share no ancestor. When the sets
    /// overlap, a shared vertex is returned with length 0.
    pub fn path_between(
        &self,
        a: &[VertexId],
        b: &[VertexId],
    ) -> GraphResult<Option<AncestralPath>> {
        if a.is_empty() {
            return Err(GraphError::EmptySourceSet { side: "first" });
        }
        if b.is_empty() {
            return Err(GraphError::EmptySourceSet { side: "second" });
        }
        for &v in a.iter().chain(b) {
            self.graph.validate_vertex(v)?;
        }
        Ok(self.search(a, b))
    }

    fn search(&self, a: &[VertexId], b: &[VertexId]) -> Option<AncestralPath> {
        let mut from_a = Frontier::seed(a);
        let mut from_b = Frontier::seed(b);
        let mut best: Option<AncestralPath> = None;

        for &v in &from_a.level {
            if from_b.dist.contains_key(&v) {
                offer(&mut best, v, 0);
                break;
            }
        }

        if best.is_none() {
            loop {
                let expand_a = from_a.can_expand(self.strategy, best);
                if expand_a {
                    from_a.expand(&self.graph, &from_b, &mut best);
                }
                let expand_b = from_b.can_expand(self.strategy, best);
                if expand_b {
                    from_b.expand(&self.graph, &from_a, &mut best);
                }
                if !expand_a && !expand_b {
                    break;
                }
            }
        }

        tracing::debug!(
            sources_a = a.len(),
            sources_b = b.len(),
            explored = from_a.dist.len() + from_b.dist.len(),
            strategy = %self.strategy,
            length = ?best.map(|p| p.length),
            ancestor = ?best.map(|p| p.ancestor),
            "sap search complete"
        );
        best
    }
}

/// Record `ancestor` if `length` is strictly shorter than the current best.
fn offer(best: &mut Option<AncestralPath>, ancestor: VertexId, length: usize) {
    if best.is_none_or(|b| length < b.length) {
        *best = Some(AncestralPath { ancestor, length });
    }
}

/// One side of a lockstep search.
struct Frontier {
    /// BFS distance from the nearest source; the first discovery is final.
    dist: HashMap<VertexId, usize>,
    /// Vertices discovered at `depth`, not yet expanded.
    level: Vec<VertexId>,
    depth: usize,
}

impl Frontier {
    fn seed(sources: &[VertexId]) -> Self {
        let mut dist = HashMap::with_capacity(sources.len());
        let mut level = Vec::with_capacity(sources.len());
        for &s in sources {
            if dist.insert(s, 0).is_none() {
                level.push(s);
            }
        }
        Self {
            dist,
            level,
            depth: 0,
        }
    }

    fn can_expand(&self, strategy: SearchStrategy, best: Option<AncestralPath>) -> bool {
        if self.level.is_empty() {
            return false;
        }
        match (strategy, best) {
            // Anything found on the next level costs at least depth + 1.
            (SearchStrategy::Bidirectional, Some(best)) => self.depth + 1 < best.length,
            _ => true,
        }
    }

    fn expand(&mut self, graph: &Digraph, other: &Frontier, best: &mut Option<AncestralPath>) {
        let depth = self.depth + 1;
        let mut next = Vec::new();
        for v in std::mem::take(&mut self.level) {
            for &w in graph.neighbors(v) {
                if let Entry::Vacant(slot) = self.dist.entry(w) {
                    slot.insert(depth);
                    next.push(w);
                    if let Some(&d) = other.dist.get(&w) {
                        offer(best, w, depth + d);
                    }
                }
            }
        }
        self.level = next;
        self.depth = depth;
    }
}
