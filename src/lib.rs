// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # wordnet-sap
//!
//! Semantic distance over the WordNet noun hierarchy. Synsets are vertices of
//! a hypernym DAG (edges point from a specific concept to a more general
//! one); the distance between two nouns is the length of a shortest
//! ancestral path between any of their senses.
//!
//! ## Architecture
//!
//! - **Hypernym graph** (`graph`): adjacency-list digraph, DFS cycle check,
//!   and the multi-source lockstep BFS answering ancestral path queries
//! - **Corpus reader** (`corpus`): synset and hypernym record parsing
//! - **Semantic model** (`wordnet`): noun index, `distance` and `sap`
//! - **Outcast detection** (`outcast`): the least related noun of a list
//!
//! ## Library usage
//!
//! ```
//! use wordnet_sap::corpus::{HypernymRecord, SynsetRecord};
//! use wordnet_sap::outcast::Outcast;
//! use wordnet_sap::wordnet::WordNet;
//!
//! let wordnet = WordNet::new(
//!     [
//!         SynsetRecord::new(0, &["animal"]),
//!         SynsetRecord::new(1, &["dog"]),
//!         SynsetRecord::new(2, &["cat"]),
//!         SynsetRecord::new(3, &["mammal"]),
//!         SynsetRecord::new(4, &["car"]),
//!     ],
//!     [
//!         HypernymRecord::new(1, &[3]),
//!         HypernymRecord::new(2, &[3]),
//!         HypernymRecord::new(3, &[0]),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(wordnet.distance("dog", "cat").unwrap(), Some(2));
//! assert_eq!(wordnet.sap("dog", "cat").unwrap().as_deref(), Some("mammal"));
//! assert_eq!(Outcast::new(&wordnet).outcast(&["dog", "cat", "car"]).unwrap(), "car");
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod outcast;
pub mod wordnet;
