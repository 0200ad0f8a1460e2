pub mod runner;

use crate::mapping::Mapping;
use crate::scorer::Scorer;
use clap::ValueEnum;
use serde::Serialize;
use strum_macros::{Display, EnumString};
use tracing::debug;

/// Annealing stops once the temperature decays below this, matching the
/// original breaker's early-exit threshold.
pub const TEMPERATURE_FLOOR: f64 = 0.1;

/// How a proposed swap is accepted. The hill-climbing and annealing variants
/// share one engine loop; only this decision differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AcceptancePolicy {
    /// Pure greedy ascent: keep a swap only if it strictly improves the
    /// score. Can get stuck in a local optimum by design.
    Greedy,
    /// Metropolis criterion: worsening swaps are accepted with probability
    /// `exp(delta / temperature)` under geometric cooling.
    Metropolis,
}

/// Receives updates during a search run.
/// Returning `false` stops the run; the best result so far is still reported.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, iteration: usize, best_score: f64) -> bool;
}

/// Callback that never interrupts.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _iteration: usize, _best_score: f64) -> bool {
        true
    }
}

/// Result of one search run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub mapping: Mapping,
    pub plaintext: String,
    pub score: f64,
    /// Iterations actually executed; may undershoot the budget if the
    /// temperature floor was hit or the callback cancelled.
    pub iterations: usize,
}

/// One local-search run over one (ciphertext, scorer, policy) tuple.
///
/// The search state is owned exclusively by this engine: current and best
/// mapping, their plaintexts and scores, and the temperature. The only
/// mutation is swapping two letters' images, so every intermediate mapping
/// stays a bijection. The search itself never errors; degenerate input just
/// yields a degenerate (zero-match) score.
pub struct Engine<'a> {
    scorer: &'a Scorer,
    ciphertext: &'a str,
    policy: AcceptancePolicy,
    temperature: f64,
    cooling_rate: f64,
    budget: usize,
    progress_interval: usize,
    rng: fastrand::Rng,
}

impl<'a> Engine<'a> {
    pub fn new(
        scorer: &'a Scorer,
        ciphertext: &'a str,
        policy: AcceptancePolicy,
        temperature: f64,
        cooling_rate: f64,
        budget: usize,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        Self {
            scorer,
            ciphertext,
            policy,
            temperature,
            cooling_rate,
            budget,
            progress_interval: 1024,
            rng,
        }
    }

    /// How often (in iterations) the progress callback is polled.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Runs the search to completion from `initial`. A zero-iteration budget
    /// returns the initial mapping, its plaintext and baseline score.
    pub fn run(&mut self, initial: Mapping, callback: &dyn ProgressCallback) -> SearchOutcome {
        let mut best_mapping = initial;
        let mut best_plaintext = best_mapping.apply(self.ciphertext);
        let mut best_score = self.scorer.score(&best_plaintext);

        let mut current_mapping = best_mapping.clone();
        let mut current_score = best_score;

        let mut temperature = self.temperature;
        let mut iterations = 0;

        for it in 0..self.budget {
            if self.policy == AcceptancePolicy::Metropolis && temperature < TEMPERATURE_FLOOR {
                break;
            }
            if it % self.progress_interval == 0 && !callback.on_progress(it, best_score) {
                debug!(iteration = it, "search cancelled, reporting best-so-far");
                break;
            }
            iterations += 1;

            let (a, b) = self.draw_swap();
            let mut candidate = current_mapping.clone();
            candidate.swap(a, b);
            let plaintext = candidate.apply(self.ciphertext);
            let score = self.scorer.score(&plaintext);

            let delta = score - current_score;
            let accept = match self.policy {
                AcceptancePolicy::Greedy => delta > 0.0,
                AcceptancePolicy::Metropolis => {
                    // A non-positive temperature never accepts a worsening
                    // move; the exponent would divide by zero.
                    delta > 0.0
                        || (temperature > 0.0
                            && self.rng.f64() < (delta / temperature).exp())
                }
            };

            // Best tracking is independent of acceptance: a rejected
            // candidate can still be the best ever seen.
            if score > best_score {
                best_mapping = candidate.clone();
                best_plaintext = plaintext.clone();
                best_score = score;
                debug!(iteration = it, score, "new best candidate");
            }

            if accept {
                current_mapping = candidate;
                current_score = score;
            }

            if self.policy == AcceptancePolicy::Metropolis {
                temperature *= self.cooling_rate;
            }
        }

        SearchOutcome {
            mapping: best_mapping,
            plaintext: best_plaintext,
            score: best_score,
            iterations,
        }
    }

    /// Two distinct letters, uniformly at random. Self-swaps are redrawn.
    fn draw_swap(&mut self) -> (usize, usize) {
        loop {
            let a = self.rng.usize(0..crate::alphabet::ALPHABET_LEN);
            let b = self.rng.usize(0..crate::alphabet::ALPHABET_LEN);
            if a != b {
                return (a, b);
            }
        }
    }
}
