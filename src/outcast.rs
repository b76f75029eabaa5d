//! Outcast detection: the noun least related to the rest of a list.

use serde::Serialize;

use crate::error::{OutcastError, QueryError, WnResult};
use crate::wordnet::WordNet;

/// Summed distance from one candidate to every other candidate.
///
/// A pair with no common ancestor is infinitely far apart, so candidates are
/// ranked first by how many such pairs they take part in, then by `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcastScore {
    pub noun: String,
    /// Number of other candidates sharing no ancestor with this one.
    pub unreachable: usize,
    /// Sum of the finite distances to the other candidates.
    pub total: usize,
}

impl OutcastScore {
    fn rank(&self) -> (usize, usize) {
        (self.unreachable, self.total)
    }
}

/// Picks outcasts using a [`WordNet`] model.
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// The noun whose summed distance to all others is strictly largest;
    /// ties go to the first occurrence.
    pub fn outcast<'w, S: AsRef<str>>(&self, words: &'w [S]) -> WnResult<&'w str> {
        let scores = self.scores(words)?;
        let mut winner = 0;
        for (i, score) in scores.iter().enumerate().skip(1) {
            if score.rank() > scores[winner].rank() {
                winner = i;
            }
        }
        tracing::debug!(
            candidates = words.len(),
            outcast = words[winner].as_ref(),
            unreachable = scores[winner].unreachable,
            total = scores[winner].total,
            "outcast selected"
        );
        Ok(words[winner].as_ref())
    }

    /// Per-candidate totals, in input order.
    ///
    /// Every unordered pair is measured once; distance is symmetric.
    pub fn scores<S: AsRef<str>>(&self, words: &[S]) -> WnResult<Vec<OutcastScore>> {
        if words.is_empty() {
            return Err(OutcastError::EmptyInput.into());
        }
        if let Some(unknown) = words.iter().find(|w| !self.wordnet.is_noun(w.as_ref())) {
            return Err(QueryError::UnknownNoun {
                noun: unknown.as_ref().to_string(),
            }
            .into());
        }

        let mut scores: Vec<OutcastScore> = words
            .iter()
            .map(|w| OutcastScore {
                noun: w.as_ref().to_string(),
                unreachable: 0,
                total: 0,
            })
            .collect();
        for i in 0..words.len() {
            for j in (i + 1)..words.len() {
                let d = self.wordnet.distance(words[i].as_ref(), words[j].as_ref())?;
                for k in [i, j] {
                    match d {
                        Some(d) => scores[k].total += d,
                        None => scores[k].unreachable += 1,
                    }
                }
            }
        }
        Ok(scores)
    }
}
