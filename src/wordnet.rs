//! The WordNet semantic model.
//!
//! Owns the synset table, the noun index, and the SAP engine over the hypernym
//! digraph. Everything is built once in [`WordNet::with_config`] and is
//! read-only afterwards, so queries take `&self` and may run concurrently.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::WordNetConfig;
use crate::corpus::{self, HypernymRecord, SynsetRecord};
use crate::error::{ModelError, QueryError, WnResult};
use crate::graph::{Digraph, DirectedCycle, Sap, VertexId};

/// A set of synonymous nouns sharing one sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Synset {
    pub id: VertexId,
    pub synonyms: Vec<String>,
    pub gloss: String,
}

impl Synset {
    /// Synonyms joined by single spaces.
    pub fn render(&self) -> String {
        self.synonyms.join(" ")
    }
}

/// A shortest ancestral path between two nouns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NounPath {
    /// Total number of hypernym edges on the path.
    pub length: usize,
    /// Vertex id of the common ancestor.
    pub ancestor: VertexId,
    /// The ancestor's synonyms, space-joined.
    pub synset: String,
}

/// Summary statistics for a loaded model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordNetInfo {
    pub synsets: usize,
    pub nouns: usize,
    pub hypernym_edges: usize,
    pub roots: usize,
    /// Weakly connected components of the hypernym graph.
    pub components: usize,
}

impl std::fmt::Display for WordNetInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "synsets:        {}", self.synsets)?;
        writeln!(f, "nouns:          {}", self.nouns)?;
        writeln!(f, "hypernym edges: {}", self.hypernym_edges)?;
        writeln!(f, "roots:          {}", self.roots)?;
        write!(f, "components:     {}", self.components)
    }
}

/// Synsets, noun index and hypernym graph, ready for distance queries.
pub struct WordNet {
    synsets: Vec<Synset>,
    /// Noun → every synset containing it. Sorted by noun.
    nouns: BTreeMap<String, Vec<VertexId>>,
    sap: Sap,
}

impl WordNet {
    /// Build a model with the default configuration.
    pub fn new(
        synsets: impl IntoIterator<Item = SynsetRecord>,
        hypernyms: impl IntoIterator<Item = HypernymRecord>,
    ) -> WnResult<Self> {
        Self::with_config(synsets, hypernyms, &WordNetConfig::default())
    }

    /// Read both corpus files and build a model.
    pub fn from_files(
        synsets: &Path,
        hypernyms: &Path,
        config: &WordNetConfig,
    ) -> WnResult<Self> {
        let synset_records = corpus::read_synsets(synsets)?;
        let hypernym_records = corpus::read_hypernyms(hypernyms)?;
        Self::with_config(synset_records, hypernym_records, config)
    }

    /// Build a model, failing if the hypernym graph is not a rooted DAG.
    pub fn with_config(
        synsets: impl IntoIterator<Item = SynsetRecord>,
        hypernyms: impl IntoIterator<Item = HypernymRecord>,
        config: &WordNetConfig,
    ) -> WnResult<Self> {
        let (synsets, nouns) = index_synsets(synsets)?;
        let graph = build_digraph(synsets.len(), hypernyms)?;

        if let Some(cycle) = DirectedCycle::new(&graph).cycle() {
            let rendered: Vec<String> = cycle.iter().map(|v| v.to_string()).collect();
            return Err(ModelError::Cycle {
                cycle: rendered.join(" -> "),
            }
            .into());
        }
        let roots = graph.roots();
        if roots.is_empty() {
            return Err(ModelError::NoRoot.into());
        }
        if config.require_single_root && roots.len() > 1 {
            return Err(ModelError::MultipleRoots { count: roots.len() }.into());
        }

        tracing::info!(
            synsets = synsets.len(),
            nouns = nouns.len(),
            hypernym_edges = graph.edge_count(),
            roots = roots.len(),
            search = %config.search,
            "wordnet model built"
        );

        Ok(Self {
            synsets,
            nouns,
            sap: Sap::with_strategy(graph, config.search),
        })
    }

    /// All distinct nouns in ascending order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.nouns.keys().map(String::as_str)
    }

    /// Whether `word` is a noun of the model (exact, case-sensitive).
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Synset ids containing `noun`, ascending.
    pub fn senses(&self, noun: &str) -> Option<&[VertexId]> {
        self.nouns.get(noun).map(Vec::as_slice)
    }

    pub fn synset(&self, id: VertexId) -> Option<&Synset> {
        self.synsets.get(id)
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// The hypernym digraph.
    pub fn graph(&self) -> &Digraph {
        self.sap.graph()
    }

    /// The SAP engine over the hypernym digraph.
    pub fn engine(&self) -> &Sap {
        &self.sap
    }

    /// Semantic distance: the length of a shortest ancestral path between any
    /// sense of `noun_a` and any sense of `noun_b`. `None` when no sense pair
    /// shares an ancestor.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> WnResult<Option<usize>> {
        let a = self.resolve(noun_a)?;
        let b = self.resolve(noun_b)?;
        if noun_a == noun_b {
            return Ok(Some(0));
        }
        Ok(self.sap.length_between(a, b)?)
    }

    /// The synset (space-joined synonyms) of a common ancestor of `noun_a`
    /// and `noun_b` on a shortest ancestral path.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> WnResult<Option<String>> {
        let a = self.resolve(noun_a)?;
        let b = self.resolve(noun_b)?;
        Ok(self
            .sap
            .ancestor_between(a, b)?
            .map(|ancestor| self.render(ancestor)))
    }

    /// Length, ancestor id and ancestor synset from a single search.
    pub fn ancestral_path(&self, noun_a: &str, noun_b: &str) -> WnResult<Option<NounPath>> {
        let a = self.resolve(noun_a)?;
        let b = self.resolve(noun_b)?;
        Ok(self.sap.path_between(a, b)?.map(|p| NounPath {
            length: p.length,
            ancestor: p.ancestor,
            synset: self.render(p.ancestor),
        }))
    }

    pub fn info(&self) -> WordNetInfo {
        let graph = self.graph();
        WordNetInfo {
            synsets: self.synsets.len(),
            nouns: self.nouns.len(),
            hypernym_edges: graph.edge_count(),
            roots: graph.roots().len(),
            components: petgraph::algo::connected_components(&graph.to_petgraph()),
        }
    }

    fn resolve(&self, noun: &str) -> WnResult<&[VertexId]> {
        self.senses(noun).ok_or_else(|| {
            QueryError::UnknownNoun {
                noun: noun.to_string(),
            }
            .into()
        })
    }

    fn render(&self, id: VertexId) -> String {
        self.synsets.get(id).map(Synset::render).unwrap_or_default()
    }
}

impl std::fmt::Debug for WordNet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordNet")
            .field("synsets", &self.synsets.len())
            .field("nouns", &self.nouns.len())
            .field("graph", self.sap.graph())
            .finish()
    }
}

/// Order synset records by id, require ids `0..V`, and index every noun.
fn index_synsets(
    records: impl IntoIterator<Item = SynsetRecord>,
) -> WnResult<(Vec<Synset>, BTreeMap<String, Vec<VertexId>>)> {
    let mut records: Vec<SynsetRecord> = records.into_iter().collect();
    records.sort_by_key(|r| r.id);

    let mut synsets = Vec::with_capacity(records.len());
    let mut nouns: BTreeMap<String, Vec<VertexId>> = BTreeMap::new();

    for (expected, record) in records.into_iter().enumerate() {
        if record.id < expected {
            return Err(ModelError::DuplicateSynset { id: record.id }.into());
        }
        if record.id > expected {
            return Err(ModelError::SynsetGap {
                expected,
                found: record.id,
            }
            .into());
        }
        for noun in &record.synonyms {
            let senses = nouns.entry(noun.clone()).or_default();
            if senses.last() != Some(&record.id) {
                senses.push(record.id);
            }
        }
        synsets.push(Synset {
            id: record.id,
            synonyms: record.synonyms,
            gloss: record.gloss,
        });
    }

    Ok((synsets, nouns))
}

fn build_digraph(
    vertex_count: usize,
    records: impl IntoIterator<Item = HypernymRecord>,
) -> WnResult<Digraph> {
    let mut graph = Digraph::new(vertex_count);
    let mut seen = vec![false; vertex_count];

    for record in records {
        if record.id >= vertex_count {
            return Err(ModelError::UnknownSynset { id: record.id }.into());
        }
        if std::mem::replace(&mut seen[record.id], true) {
            tracing::warn!(id = record.id, "repeated hypernym record, merging parents");
        }
        for parent in record.parents {
            if parent >= vertex_count {
                return Err(ModelError::UnknownSynset { id: parent }.into());
            }
            graph.add_edge(record.id, parent)?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordNetError;
    use crate::graph::SearchStrategy;

    fn animals() -> WordNet {
        WordNet::new(
            [
                SynsetRecord::new(0, &["animal"]),
                SynsetRecord::new(1, &["dog"]),
                SynsetRecord::new(2, &["cat", "true_cat"]),
                SynsetRecord::new(3, &["mammal"]),
            ],
            [
                HypernymRecord::new(1, &[3]),
                HypernymRecord::new(2, &[3]),
                HypernymRecord::new(3, &[0]),
            ],
        )
        .unwrap()
    }

    /// "bank" has a river sense (5) and a financial sense (9).
    fn banks() -> WordNet {
        WordNet::new(
            [
                SynsetRecord::new(0, &["entity"]),
                SynsetRecord::new(1, &["physical_object"]),
                SynsetRecord::new(2, &["abstraction"]),
                SynsetRecord::new(3, &["geological_formation"]),
                SynsetRecord::new(4, &["financial_institution", "institution"]),
                SynsetRecord::new(5, &["bank"]),
                SynsetRecord::new(6, &["body_of_water"]),
                SynsetRecord::new(7, &["river"]),
                SynsetRecord::new(8, &["depository_financial_institution"]),
                SynsetRecord::new(9, &["bank", "banking_company"]),
            ],
            [
                HypernymRecord::new(1, &[0]),
                HypernymRecord::new(2, &[0]),
                HypernymRecord::new(3, &[1]),
                HypernymRecord::new(4, &[2]),
                HypernymRecord::new(5, &[3]),
                HypernymRecord::new(6, &[1]),
                HypernymRecord::new(7, &[6]),
                HypernymRecord::new(8, &[4]),
                HypernymRecord::new(9, &[8]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn nouns_are_sorted_and_distinct() {
        let wn = banks();
        let nouns: Vec<_> = wn.nouns().collect();
        let mut sorted = nouns.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(nouns, sorted);
        assert_eq!(nouns.iter().filter(|n| **n == "bank").count(), 1);
        assert_eq!(wn.noun_count(), 11);
    }

    #[test]
    fn is_noun_is_exact() {
        let wn = animals();
        assert!(wn.is_noun("dog"));
        assert!(wn.is_noun("true_cat"));
        assert!(!wn.is_noun("Dog"));
        assert!(!wn.is_noun("do"));
    }

    #[test]
    fn distance_and_sap_between_siblings() {
        let wn = animals();
        assert_eq!(wn.distance("dog", "cat").unwrap(), Some(2));
        assert_eq!(wn.sap("dog", "cat").unwrap().as_deref(), Some("mammal"));
        assert_eq!(wn.distance("dog", "animal").unwrap(), Some(2));
        assert_eq!(wn.sap("dog", "animal").unwrap().as_deref(), Some("animal"));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let wn = banks();
        for noun in ["bank", "river", "entity"] {
            assert_eq!(wn.distance(noun, noun).unwrap(), Some(0));
        }
        assert_eq!(wn.sap("bank", "bank").unwrap().as_deref(), Some("bank"));
    }

    #[test]
    fn distance_is_symmetric() {
        let wn = banks();
        let nouns: Vec<_> = wn.nouns().map(str::to_string).collect();
        for a in &nouns {
            for b in &nouns {
                assert_eq!(wn.distance(a, b).unwrap(), wn.distance(b, a).unwrap());
            }
        }
    }

    #[test]
    fn polysemous_noun_uses_closest_sense() {
        let wn = banks();
        assert_eq!(wn.senses("bank"), Some(&[5, 9][..]));
        assert_eq!(wn.distance("bank", "river").unwrap(), Some(4));
        assert_eq!(
            wn.sap("bank", "river").unwrap().as_deref(),
            Some("physical_object")
        );
        assert_eq!(wn.distance("bank", "institution").unwrap(), Some(2));
        assert_eq!(
            wn.sap("bank", "institution").unwrap().as_deref(),
            Some("financial_institution institution")
        );
    }

    #[test]
    fn ancestral_path_bundles_all_answers() {
        let wn = banks();
        let path = wn.ancestral_path("river", "bank").unwrap().unwrap();
        assert_eq!(
            path,
            NounPath {
                length: 4,
                ancestor: 1,
                synset: "physical_object".into()
            }
        );
    }

    #[test]
    fn unknown_noun_fails_without_poisoning_model() {
        let wn = animals();
        assert!(matches!(
            wn.distance("dog", "unicorn"),
            Err(WordNetError::Query(QueryError::UnknownNoun { .. }))
        ));
        assert!(matches!(
            wn.sap("unicorn", "dog"),
            Err(WordNetError::Query(QueryError::UnknownNoun { .. }))
        ));
        assert_eq!(wn.distance("dog", "cat").unwrap(), Some(2));
    }

    #[test]
    fn disconnected_nouns_have_no_distance() {
        let wn = WordNet::new(
            [
                SynsetRecord::new(0, &["animal"]),
                SynsetRecord::new(1, &["dog"]),
                SynsetRecord::new(2, &["car"]),
            ],
            [HypernymRecord::new(1, &[0])],
        )
        .unwrap();
        assert_eq!(wn.distance("dog", "car").unwrap(), None);
        assert_eq!(wn.sap("dog", "car").unwrap(), None);
        assert_eq!(wn.info().components, 2);
    }

    #[test]
    fn cycle_fails_construction() {
        let result = WordNet::new(
            [
                SynsetRecord::new(0, &["a"]),
                SynsetRecord::new(1, &["b"]),
                SynsetRecord::new(2, &["c"]),
                SynsetRecord::new(3, &["root"]),
            ],
            [
                HypernymRecord::new(0, &[1]),
                HypernymRecord::new(1, &[2]),
                HypernymRecord::new(2, &[0]),
            ],
        );
        match result {
            Err(WordNetError::Model(ModelError::Cycle { cycle })) => {
                assert!(cycle.contains("->"));
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn empty_corpus_has_no_root() {
        let result = WordNet::new(Vec::<SynsetRecord>::new(), Vec::<HypernymRecord>::new());
        assert!(matches!(result, Err(WordNetError::Model(ModelError::NoRoot))));
    }

    #[test]
    fn single_root_is_enforced_when_configured() {
        let synsets = || {
            [
                SynsetRecord::new(0, &["animal"]),
                SynsetRecord::new(1, &["dog"]),
                SynsetRecord::new(2, &["car"]),
            ]
        };
        let hypernyms = || [HypernymRecord::new(1, &[0])];

        assert!(WordNet::new(synsets(), hypernyms()).is_ok());

        let config = WordNetConfig {
            require_single_root: true,
            ..Default::default()
        };
        assert!(matches!(
            WordNet::with_config(synsets(), hypernyms(), &config),
            Err(WordNetError::Model(ModelError::MultipleRoots { count: 2 }))
        ));
    }

    #[test]
    fn synset_ids_must_be_dense_and_unique() {
        let gap = WordNet::new(
            [SynsetRecord::new(0, &["a"]), SynsetRecord::new(2, &["b"])],
            Vec::<HypernymRecord>::new(),
        );
        assert!(matches!(
            gap,
            Err(WordNetError::Model(ModelError::SynsetGap {
                expected: 1,
                found: 2
            }))
        ));

        let dup = WordNet::new(
            [SynsetRecord::new(0, &["a"]), SynsetRecord::new(0, &["b"])],
            Vec::<HypernymRecord>::new(),
        );
        assert!(matches!(
            dup,
            Err(WordNetError::Model(ModelError::DuplicateSynset { id: 0 }))
        ));
    }

    #[test]
    fn unordered_synset_records_are_accepted() {
        let wn = WordNet::new(
            [SynsetRecord::new(1, &["dog"]), SynsetRecord::new(0, &["animal"])],
            [HypernymRecord::new(1, &[0])],
        )
        .unwrap();
        assert_eq!(wn.synset(0).unwrap().render(), "animal");
        assert_eq!(wn.distance("dog", "animal").unwrap(), Some(1));
    }

    #[test]
    fn hypernyms_must_reference_known_synsets() {
        let result = WordNet::new(
            [SynsetRecord::new(0, &["a"]), SynsetRecord::new(1, &["b"])],
            [HypernymRecord::new(1, &[7])],
        );
        assert!(matches!(
            result,
            Err(WordNetError::Model(ModelError::UnknownSynset { id: 7 }))
        ));
    }

    #[test]
    fn strategy_comes_from_config() {
        let config = WordNetConfig {
            search: SearchStrategy::Exhaustive,
            ..Default::default()
        };
        let wn = WordNet::with_config(
            [SynsetRecord::new(0, &["a"]), SynsetRecord::new(1, &["b"])],
            [HypernymRecord::new(1, &[0])],
            &config,
        )
        .unwrap();
        assert_eq!(wn.engine().strategy(), SearchStrategy::Exhaustive);
    }

    #[test]
    fn info_reports_counts() {
        let info = animals().info();
        assert_eq!(
            info,
            WordNetInfo {
                synsets: 4,
                nouns: 5,
                hypernym_edges: 3,
                roots: 1,
                components: 1,
            }
        );
        assert!(info.to_string().contains("synsets:        4"));
    }
}
