//! Directed cycle detection.
//!
//! Iterative depth-first search colouring each vertex unvisited, in progress
//! or done. An edge into an in-progress vertex closes a cycle. Runs once in
//! O(V + E); the SAP engine relies on this check and never repeats it.

use super::{Digraph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Outcome of a cycle search over a [`Digraph`].
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    /// One witness cycle, first vertex repeated at the end.
    cycle: Option<Vec<VertexId>>,
}

impl DirectedCycle {
    /// Search `graph` for a directed cycle.
    pub fn new(graph: &Digraph) -> Self {
        let n = graph.vertex_count();
        let mut marks = vec![Mark::Unvisited; n];
        let mut edge_to: Vec<Option<VertexId>> = vec![None; n];

        for start in 0..n {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            if let Some(cycle) = Self::search_from(graph, start, &mut marks, &mut edge_to) {
                return Self { cycle: Some(cycle) };
            }
        }

        Self { cycle: None }
    }

    /// DFS from `start` using an explicit stack of (vertex, next neighbour index).
    fn search_from(
        graph: &Digraph,
        start: VertexId,
        marks: &mut [Mark],
        edge_to: &mut [Option<VertexId>],
    ) -> Option<Vec<VertexId>> {
        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
        marks[start] = Mark::InProgress;

        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            let neighbors = graph.neighbors(v);
            if next == neighbors.len() {
                marks[v] = Mark::Done;
                stack.pop();
                continue;
            }
            top.1 += 1;
            let w = neighbors[next];

            match marks[w] {
                Mark::Unvisited => {
                    edge_to[w] = Some(v);
                    marks[w] = Mark::InProgress;
                    stack.push((w, 0));
                }
                Mark::InProgress => return Some(Self::trace(v, w, edge_to)),
                Mark::Done => {}
            }
        }
        None
    }

    /// Rebuild the cycle closed by the back edge `v -> w`.
    fn trace(v: VertexId, w: VertexId, edge_to: &[Option<VertexId>]) -> Vec<VertexId> {
        let mut path = vec![v];
        let mut x = v;
        while x != w {
            match edge_to[x] {
                Some(prev) => {
                    x = prev;
                    path.push(x);
                }
                None => break,
            }
        }
        path.reverse();
        path.push(w);
        path
    }

    /// Whether the graph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// A witness cycle `[w, ..., v, w]`, if one exists.
    pub fn cycle(&self) -> Option<&[VertexId]> {
        self.cycle.as_deref()
    }
}
