//! Reader for the synset and hypernym corpus files.
//!
//! Synset records: `id,synonym1 synonym2 ...,gloss` (the gloss may itself
//! contain commas and is kept verbatim). Hypernym records:
//! `id,parent1,parent2,...`; a record with no parents marks a root.
//! Blank lines are skipped in both formats.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;
use crate::graph::VertexId;

/// Result type for corpus parsing.
pub type CorpusResult<T> = std::result::Result<T, CorpusError>;

/// One line of the synset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub id: VertexId,
    pub synonyms: Vec<String>,
    pub gloss: String,
}

impl SynsetRecord {
    pub fn new(id: VertexId, synonyms: &[&str]) -> Self {
        Self {
            id,
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            gloss: String::new(),
        }
    }
}

/// One line of the hypernym file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypernymRecord {
    pub id: VertexId,
    pub parents: Vec<VertexId>,
}

impl HypernymRecord {
    pub fn new(id: VertexId, parents: &[VertexId]) -> Self {
        Self {
            id,
            parents: parents.to_vec(),
        }
    }
}

/// Parse the full text of a synset file.
pub fn parse_synsets(text: &str) -> CorpusResult<Vec<SynsetRecord>> {
    records(text)
        .map(|(line, record)| parse_synset_line(line, record))
        .collect()
}

/// Parse the full text of a hypernym file.
pub fn parse_hypernyms(text: &str) -> CorpusResult<Vec<HypernymRecord>> {
    records(text)
        .map(|(line, record)| parse_hypernym_line(line, record))
        .collect()
}

/// Read and parse a synset file.
pub fn read_synsets(path: &Path) -> CorpusResult<Vec<SynsetRecord>> {
    parse_synsets(&read(path)?)
}

/// Read and parse a hypernym file.
pub fn read_hypernyms(path: &Path) -> CorpusResult<Vec<HypernymRecord>> {
    parse_hypernyms(&read(path)?)
}

fn read(path: &Path) -> CorpusResult<String> {
    std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Non-blank lines with their 1-based line numbers.
fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty())
}

fn parse_synset_line(line: usize, record: &str) -> CorpusResult<SynsetRecord> {
    let mut fields = record.splitn(3, ',');
    let id = parse_id("synset", line, fields.next().unwrap_or_default())?;
    let synonyms: Vec<String> = fields
        .next()
        .ok_or_else(|| CorpusError::MalformedRecord {
            kind: "synset",
            line,
            message: "missing synonym field".into(),
        })?
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if synonyms.is_empty() {
        return Err(CorpusError::MalformedRecord {
            kind: "synset",
            line,
            message: "synonym field is empty".into(),
        });
    }
    let gloss = fields.next().unwrap_or_default().to_string();
    Ok(SynsetRecord {
        id,
        synonyms,
        gloss,
    })
}

fn parse_hypernym_line(line: usize, record: &str) -> CorpusResult<HypernymRecord> {
    let mut fields = record.split(',');
    let id = parse_id("hypernym", line, fields.next().unwrap_or_default())?;
    let parents = fields
        .filter(|f| !f.trim().is_empty())
        .map(|f| parse_id("hypernym", line, f))
        .collect::<CorpusResult<Vec<_>>>()?;
    Ok(HypernymRecord { id, parents })
}

fn parse_id(kind: &'static str, line: usize, field: &str) -> CorpusResult<VertexId> {
    field.trim().parse().map_err(|_| CorpusError::InvalidId {
        kind,
        line,
        value: field.to_string(),
    })
}
