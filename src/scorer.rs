use crate::model::{reference, NgramModel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Per-order weights applied to n-gram match counts, plus the weight for the
/// implausible-sequence penalty. Orders with weight 0 are skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NgramWeights {
    pub bigram: f64,
    pub trigram: f64,
    pub quadgram: f64,
    pub pentagram: f64,
    pub penalty: f64,
}

impl Default for NgramWeights {
    fn default() -> Self {
        Self {
            bigram: 2.0,
            trigram: 3.0,
            quadgram: 4.0,
            pentagram: 5.0,
            penalty: 1.0,
        }
    }
}

impl NgramWeights {
    /// Weight for a given n-gram order. Unigrams carry no weight: single
    /// letter counts are invariant under any bijective mapping, so they can
    /// never distinguish candidates.
    #[inline]
    pub fn for_order(&self, order: usize) -> f64 {
        match order {
            2 => self.bigram,
            3 => self.trigram,
            4 => self.quadgram,
            5 => self.pentagram,
            _ => 0.0,
        }
    }
}

/// Per-order breakdown of a score, for the report tables.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScoreDetails {
    /// Weighted match score per order; index 0 is order 1.
    pub order_scores: [f64; 5],
    /// Raw occurrence count of penalty-table sequences.
    pub penalty_hits: f64,
    /// Weighted penalty subtracted from the total.
    pub penalty_score: f64,
    pub total: f64,
}

/// Rates how English-like a candidate plaintext is: weighted positional
/// n-gram matches against the model, minus weighted occurrences of
/// implausible sequences. A pure function of its inputs; higher is better.
pub struct Scorer {
    model: Arc<NgramModel>,
    weights: NgramWeights,
    penalties: Vec<String>,
}

impl Scorer {
    pub fn new(model: Arc<NgramModel>, weights: NgramWeights) -> Self {
        Self {
            model,
            weights,
            penalties: reference::UNLIKELY_SEQUENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn with_penalties(mut self, penalties: Vec<String>) -> Self {
        self.penalties = penalties;
        self
    }

    pub fn model(&self) -> &NgramModel {
        &self.model
    }

    pub fn weights(&self) -> NgramWeights {
        self.weights
    }

    /// Fitness of `candidate`. Text with no alphabetic content scores 0.
    pub fn score(&self, candidate: &str) -> f64 {
        self.score_details(candidate).total
    }

    /// Same as [`Scorer::score`] but keeps the per-order contributions.
    ///
    /// Every n-gram is counted exactly once per text offset (a sliding
    /// window), never via substring counting, so overlapping occurrences
    /// all contribute and repeated calls are exactly reproducible.
    pub fn score_details(&self, candidate: &str) -> ScoreDetails {
        let folded = candidate.to_ascii_lowercase();
        let bytes = folded.as_bytes();
        let mut details = ScoreDetails::default();

        let mut start = 0;
        while start < bytes.len() {
            if !bytes[start].is_ascii_lowercase() {
                start += 1;
                continue;
            }
            let mut end = start;
            while end < bytes.len() && bytes[end].is_ascii_lowercase() {
                end += 1;
            }
            self.score_run(&folded[start..end], &mut details);
            start = end;
        }

        let mut total = 0.0;
        for s in details.order_scores {
            total += s;
        }
        details.penalty_score = details.penalty_hits * self.weights.penalty;
        details.total = total - details.penalty_score;
        details
    }

    fn score_run(&self, run: &str, details: &mut ScoreDetails) {
        for &order in self.model.orders() {
            let weight = self.weights.for_order(order);
            if weight == 0.0 || run.len() < order {
                continue;
            }
            let mut matched = 0.0;
            for i in 0..=run.len() - order {
                matched += self.model.lookup(&run[i..i + order]);
            }
            details.order_scores[order - 1] += matched * weight;
        }

        let run_bytes = run.as_bytes();
        for seq in &self.penalties {
            let pat = seq.as_bytes();
            if run_bytes.len() < pat.len() {
                continue;
            }
            details.penalty_hits += run_bytes.windows(pat.len()).filter(|w| *w == pat).count() as f64;
        }
    }
}
