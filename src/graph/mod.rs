//! Hypernym graph: the directed graph, its acyclicity check, and the
//! shortest-ancestral-path engine that runs over it.
//!
//! - [`Digraph`]: fixed-size adjacency-list digraph
//! - [`DirectedCycle`]: DFS cycle detection, run once at model construction
//! - [`Sap`]: multi-source lockstep BFS answering ancestral path queries

pub mod cycle;
pub mod digraph;
pub mod sap;

pub use cycle::DirectedCycle;
pub use digraph::Digraph;
pub use sap::{AncestralPath, Sap, SearchStrategy};

use crate::error::GraphError;

/// Dense vertex identifier in `[0, V)`; one per synset.
pub type VertexId = usize;

/// Result type for graph operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;
