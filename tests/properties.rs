//! Randomised checks of the SAP engine and cycle detector.
//!
//! Each query is compared with a brute-force oracle: petgraph's Dijkstra from
//! every source (unit edge weights), then the minimum summed distance over all
//! vertices reached from both sides.

use std::collections::HashMap;

use petgraph::algo::{dijkstra, is_cyclic_directed};
use petgraph::graph::{DiGraph, NodeIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordnet_sap::graph::{Digraph, DirectedCycle, Sap, SearchStrategy, VertexId};

/// Edges only point from higher to lower ids, so the result is acyclic.
/// Vertices drawing zero parents become extra roots.
fn random_dag(rng: &mut StdRng, n: usize, max_parents: usize) -> Digraph {
    let mut g = Digraph::new(n);
    for v in 1..n {
        for _ in 0..rng.gen_range(0..=max_parents) {
            let p = rng.gen_range(0..v);
            g.add_edge(v, p).unwrap();
        }
    }
    g
}

fn random_set(rng: &mut StdRng, n: usize) -> Vec<VertexId> {
    (0..rng.gen_range(1..=4)).map(|_| rng.gen_range(0..n)).collect()
}

fn distances_from(graph: &DiGraph<(), ()>, sources: &[VertexId]) -> HashMap<VertexId, usize> {
    let mut best: HashMap<VertexId, usize> = HashMap::new();
    for &s in sources {
        for (node, d) in dijkstra(graph, NodeIndex::new(s), None, |_| 1usize) {
            best.entry(node.index())
                .and_modify(|e| *e = (*e).min(d))
                .or_insert(d);
        }
    }
    best
}

struct Oracle {
    from_a: HashMap<VertexId, usize>,
    from_b: HashMap<VertexId, usize>,
}

impl Oracle {
    fn new(graph: &DiGraph<(), ()>, a: &[VertexId], b: &[VertexId]) -> Self {
        Self {
            from_a: distances_from(graph, a),
            from_b: distances_from(graph, b),
        }
    }

    fn total_through(&self, v: VertexId) -> Option<usize> {
        Some(self.from_a.get(&v)? + self.from_b.get(&v)?)
    }

    fn shortest(&self) -> Option<usize> {
        self.from_a
            .keys()
            .filter_map(|&v| self.total_through(v))
            .min()
    }
}

fn engines(graph: &Digraph) -> [Sap; 2] {
    [
        Sap::with_strategy(graph.clone(), SearchStrategy::Bidirectional),
        Sap::with_strategy(graph.clone(), SearchStrategy::Exhaustive),
    ]
}

#[test]
fn single_vertex_queries_match_oracle() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let graph = random_dag(&mut rng, 40, 3);
        let pg = graph.to_petgraph();
        for sap in engines(&graph) {
            for _ in 0..50 {
                let v = rng.gen_range(0..40);
                let w = rng.gen_range(0..40);
                let oracle = Oracle::new(&pg, &[v], &[w]);
                let path = sap.path(v, w).unwrap();

                assert_eq!(path.map(|p| p.length), oracle.shortest(), "{v} vs {w}");
                if let Some(path) = path {
                    assert_eq!(oracle.total_through(path.ancestor), Some(path.length));
                }
                assert_eq!(sap.length(w, v).unwrap(), path.map(|p| p.length));
            }
        }
    }
}

#[test]
fn set_queries_match_oracle() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let graph = random_dag(&mut rng, 60, 2);
        let pg = graph.to_petgraph();
        for sap in engines(&graph) {
            for _ in 0..30 {
                let a = random_set(&mut rng, 60);
                let b = random_set(&mut rng, 60);
                let oracle = Oracle::new(&pg, &a, &b);
                let path = sap.path_between(&a, &b).unwrap();

                assert_eq!(path.map(|p| p.length), oracle.shortest(), "{a:?} vs {b:?}");
                if let Some(path) = path {
                    assert_eq!(oracle.total_through(path.ancestor), Some(path.length));
                }
            }
        }
    }
}

#[test]
fn identical_vertices_are_their_own_ancestor() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = random_dag(&mut rng, 30, 3);
    let sap = Sap::new(graph);
    for v in 0..30 {
        assert_eq!(sap.length(v, v).unwrap(), Some(0));
        assert_eq!(sap.ancestor(v, v).unwrap(), Some(v));
    }
}

#[test]
fn cycle_detector_matches_petgraph() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..50 {
        let mut graph = random_dag(&mut rng, 25, 2);
        assert!(!DirectedCycle::new(&graph).has_cycle());

        // A few upward edges may or may not close a cycle.
        for _ in 0..rng.gen_range(0..3) {
            let u = rng.gen_range(0..25);
            let v = rng.gen_range(0..25);
            graph.add_edge(u, v).unwrap();
        }
        let detector = DirectedCycle::new(&graph);
        assert_eq!(detector.has_cycle(), is_cyclic_directed(&graph.to_petgraph()));
        if let Some(cycle) = detector.cycle() {
            assert_eq!(cycle.first(), cycle.last());
            for pair in cycle.windows(2) {
                assert!(graph.adjacent(pair[0]).unwrap().any(|x| x == pair[1]));
            }
        }
    }
}
