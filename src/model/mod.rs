pub mod loader;
pub mod reference;

use crate::error::{CfResult, CipherForgeError};
use std::collections::HashMap;
use std::io::Read;
use tracing::info;

/// Where a model's counts came from. `Corpus` covers both a reference text
/// and the degraded mode of counting the ciphertext itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    Corpus,
    Table,
    Reference,
}

/// Immutable n-gram frequency tables for orders 1 through 5. Built once,
/// then shared read-only by every search run.
#[derive(Debug, Clone)]
pub struct NgramModel {
    counts: HashMap<String, f64>,
    orders: Vec<usize>,
    source: ModelSource,
}

impl NgramModel {
    /// Counts n-grams of the requested orders over `text`. An n-gram never
    /// spans a non-letter boundary: counting restarts at each maximal run of
    /// alphabetic characters. Case is folded before counting.
    pub fn from_corpus(text: &str, orders: &[usize]) -> CfResult<Self> {
        let orders = validate_orders(orders)?;

        let folded = text.to_ascii_lowercase();
        let bytes = folded.as_bytes();
        let mut counts: HashMap<String, f64> = HashMap::new();

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
            let run = &folded[start..end];
            for &order in &orders {
                if run.len() >= order {
                    for i in 0..=run.len() - order {
                        *counts.entry(run[i..i + order].to_string()).or_insert(0.0) += 1.0;
                    }
                }
            }
            start = end;
        }

        info!(
            orders = ?orders,
            distinct = counts.len(),
            "built n-gram model from corpus scan"
        );

        Ok(Self {
            counts,
            orders,
            source: ModelSource::Corpus,
        })
    }

    /// The built-in literal tables of common English digraphs, trigrams,
    /// quadgrams and pentagrams, each with count 1.
    pub fn reference() -> Self {
        let lists = [
            reference::COMMON_DIGRAPHS,
            reference::COMMON_TRIGRAMS,
            reference::COMMON_QUADGRAMS,
            reference::COMMON_PENTAGRAMS,
        ];
        let mut counts = HashMap::new();
        for list in lists {
            for &ngram in list {
                counts.insert(ngram.to_string(), 1.0);
            }
        }
        Self {
            counts,
            orders: vec![2, 3, 4, 5],
            source: ModelSource::Reference,
        }
    }

    /// Loads a `ngram<TAB>count` table. Orders are inferred from the key
    /// lengths actually present.
    pub fn from_reader<R: Read>(reader: R) -> CfResult<Self> {
        let entries = loader::load_ngram_table(reader)?;
        Self::from_entries(entries, ModelSource::Table)
    }

    /// Builds a model from explicit (ngram, count) pairs.
    pub fn from_entries(entries: Vec<(String, f64)>, source: ModelSource) -> CfResult<Self> {
        let mut counts: HashMap<String, f64> = HashMap::new();
        let mut orders = Vec::new();
        for (key, count) in entries {
            if key.is_empty() || key.len() > 5 || !key.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(CipherForgeError::Validation(format!(
                    "n-gram key '{key}' is not 1-5 lowercase letters"
                )));
            }
            if !orders.contains(&key.len()) {
                orders.push(key.len());
            }
            *counts.entry(key).or_insert(0.0) += count;
        }
        orders.sort_unstable();
        Ok(Self {
            counts,
            orders,
            source,
        })
    }

    /// Occurrence count of `ngram`; 0.0 for anything unseen. Never fails.
    #[inline]
    pub fn lookup(&self, ngram: &str) -> f64 {
        self.counts.get(ngram).copied().unwrap_or(0.0)
    }

    /// Orders this model holds counts for, ascending.
    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    pub fn source(&self) -> ModelSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` highest-count entries of the given order, sorted by count
    /// descending and then by key for determinism. Used by the analysis
    /// report.
    pub fn top(&self, order: usize, n: usize) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .counts
            .iter()
            .filter(|(k, _)| k.len() == order)
            .map(|(k, &v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

fn validate_orders(orders: &[usize]) -> CfResult<Vec<usize>> {
    if orders.is_empty() {
        return Err(CipherForgeError::Config(
            "at least one n-gram order is required".to_string(),
        ));
    }
    let mut out = Vec::new();
    for &order in orders {
        if !(1..=5).contains(&order) {
            return Err(CipherForgeError::Config(format!(
                "n-gram order {order} is outside the supported range 1-5"
            )));
        }
        if !out.contains(&order) {
            out.push(order);
        }
    }
    out.sort_unstable();
    Ok(out)
}
