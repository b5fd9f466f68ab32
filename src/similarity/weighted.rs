//! Weighted progression similarity used by progression search.
//!
//! Every component is normalized by the query length only, so the score
//! measures how much of the query the candidate covers. A long candidate
//! containing the whole query scores 1.0.

use super::sequence::{contained_matches, exact_matches, lcs_length, longest_common_run};
use serde::{Deserialize, Serialize};

/// Upper bound on the sequence length fed to the O(n*m) alignment.
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 256;

/// Scores are rounded to nine decimals, so a full match is exactly 1.0.
const SCORE_SCALE: f64 = 1e9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionWeights {
    pub lcs: f64,
    pub consecutive: f64,
    pub exact: f64,
    pub contained: f64,
}

impl Default for ProgressionWeights {
    fn default() -> Self {
        Self {
            lcs: 0.4,
            consecutive: 0.3,
            exact: 0.2,
            contained: 0.1,
        }
    }
}

/// Components of a single comparison, along with the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ProgressionMatch {
    pub lcs_len: usize,
    pub consecutive_len: usize,
    pub exact_matches: usize,
    pub contained_matches: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionScorer {
    weights: ProgressionWeights,
    max_sequence_len: usize,
}

impl Default for ProgressionScorer {
    fn default() -> Self {
        Self::new(ProgressionWeights::default(), DEFAULT_MAX_SEQUENCE_LEN)
    }
}

impl ProgressionScorer {
    pub fn new(weights: ProgressionWeights, max_sequence_len: usize) -> Self {
        Self {
            weights,
            max_sequence_len,
        }
    }

    /// Compares `query` against `candidate`. Both are cut to the configured
    /// length bound first. Either side empty gives an all-zero match.
    pub fn compare<T: PartialEq>(&self, query: &[T], candidate: &[T]) -> ProgressionMatch {
        let query = &query[..query.len().min(self.max_sequence_len)];
        let candidate = &candidate[..candidate.len().min(self.max_sequence_len)];

        if query.is_empty() || candidate.is_empty() {
            return ProgressionMatch::default();
        }

        let lcs_len = lcs_length(query, candidate);
        let consecutive_len = longest_common_run(query, candidate);
        let exact = exact_matches(query, candidate);
        let contained = contained_matches(query, candidate);

        let query_len = query.len() as f64;
        let score = self.weights.lcs * (lcs_len as f64 / query_len)
            + self.weights.consecutive * (consecutive_len as f64 / query_len)
            + self.weights.exact * (exact as f64 / query_len)
            + self.weights.contained * (contained as f64 / query_len);
        let score = (score * SCORE_SCALE).round() / SCORE_SCALE;

        ProgressionMatch {
            lcs_len,
            consecutive_len,
            exact_matches: exact,
            contained_matches: contained,
            score: score.clamp(0.0, 1.0),
        }
    }

    pub fn score<T: PartialEq>(&self, query: &[T], candidate: &[T]) -> f64 {
        self.compare(query, candidate).score
    }
}

/// Similarity of two chord-name sequences with the default weights.
pub fn progression_similarity<S: AsRef<str>>(query: &[S], candidate: &[S]) -> f64 {
    let query: Vec<&str> = query.iter().map(|chord| chord.as_ref()).collect();
    let candidate: Vec<&str> = candidate.iter().map(|chord| chord.as_ref()).collect();
    ProgressionScorer::default().score(&query, &candidate)
}
