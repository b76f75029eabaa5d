//! Rich diagnostic error types for the WordNet SAP engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so users know exactly what
//! went wrong and how to fix it.
//!
//! "No common ancestor" is deliberately absent: it is a legitimate query outcome
//! and is reported as `None` by the SAP engine and the semantic model.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the crate.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text, source spans) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum WordNetError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Outcast(#[from] OutcastError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a digraph with {vertex_count} vertices")]
    #[diagnostic(
        code(wordnet::graph::vertex_out_of_range),
        help(
            "Vertex ids are dense integers in [0, V). \
             Check that the id was produced by the same graph it is used with."
        )
    )]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("empty source set: {side} side of an ancestral path query has no vertices")]
    #[diagnostic(
        code(wordnet::graph::empty_source_set),
        help("A set-to-set query needs at least one vertex on each side.")
    )]
    EmptySourceSet { side: &'static str },
}

// ---------------------------------------------------------------------------
// Corpus errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {source}")]
    #[diagnostic(
        code(wordnet::corpus::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {kind} record on line {line}: {message}")]
    #[diagnostic(
        code(wordnet::corpus::malformed),
        help(
            "Synset records look like `id,word1 word2,gloss`. \
             Hypernym records look like `id,parent1,parent2` (a bare `id` is a root)."
        )
    )]
    MalformedRecord {
        kind: &'static str,
        line: usize,
        message: String,
    },

    #[error("invalid synset id {value:?} in {kind} record on line {line}")]
    #[diagnostic(
        code(wordnet::corpus::invalid_id),
        help("Synset ids are non-negative integers.")
    )]
    InvalidId {
        kind: &'static str,
        line: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Model errors (structural violations, fatal to construction)
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ModelError {
    #[error("hypernym graph contains a cycle: {cycle}")]
    #[diagnostic(
        code(wordnet::model::cycle),
        help(
            "Hypernym edges point from a specific concept to a more general one \
             and must never loop back. Remove one edge of the reported cycle."
        )
    )]
    Cycle { cycle: String },

    #[error("hypernym graph has no root")]
    #[diagnostic(
        code(wordnet::model::no_root),
        help("At least one synset must have no hypernyms (out-degree zero).")
    )]
    NoRoot,

    #[error("hypernym graph has {count} roots but a single root is required")]
    #[diagnostic(
        code(wordnet::model::multiple_roots),
        help(
            "Either connect the extra roots under a common hypernym, \
             or set `require_single_root = false` in the configuration."
        )
    )]
    MultipleRoots { count: usize },

    #[error("synset id {id} is defined more than once")]
    #[diagnostic(
        code(wordnet::model::duplicate_synset),
        help("Every synset id must appear in exactly one synset record.")
    )]
    DuplicateSynset { id: usize },

    #[error("synset ids are not contiguous: expected {expected}, found {found}")]
    #[diagnostic(
        code(wordnet::model::synset_gap),
        help("Synset ids must cover 0..V without gaps.")
    )]
    SynsetGap { expected: usize, found: usize },

    #[error("hypernym record references unknown synset {id}")]
    #[diagnostic(
        code(wordnet::model::unknown_synset),
        help("Every id in the hypernym file must have a matching synset record.")
    )]
    UnknownSynset { id: usize },
}

// ---------------------------------------------------------------------------
// Query errors (per call, never corrupt the model)
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum QueryError {
    #[error("unknown noun: {noun:?}")]
    #[diagnostic(
        code(wordnet::query::unknown_noun),
        help(
            "Nouns are matched exactly and case-sensitively. \
             Check membership with `is_noun` first."
        )
    )]
    UnknownNoun { noun: String },
}

// ---------------------------------------------------------------------------
// Outcast errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum OutcastError {
    #[error("no candidate nouns supplied")]
    #[diagnostic(
        code(wordnet::outcast::empty_input),
        help("Provide at least one noun to pick an outcast from.")
    )]
    EmptyInput,
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    #[diagnostic(
        code(wordnet::config::read),
        help("Check that the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    #[diagnostic(
        code(wordnet::config::write),
        help("Check that the parent directory is writable.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {message}")]
    #[diagnostic(
        code(wordnet::config::parse),
        help(
            "The config file must be valid TOML. Known keys: \
             `search`, `require_single_root`, `synsets`, `hypernyms`."
        )
    )]
    Parse { path: String, message: String },
}

/// Convenience alias for functions returning crate results.
pub type WnResult<T> = std::result::Result<T, WordNetError>;
