use super::{AcceptancePolicy, Engine, ProgressCallback, SearchOutcome};
use crate::error::{CfResult, CipherForgeError};
use crate::mapping::Mapping;
use crate::model::NgramModel;
use crate::scorer::{NgramWeights, Scorer};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// One point of the hyperparameter grid. Immutable; exactly one search run
/// executes per configuration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepConfig {
    pub weights: NgramWeights,
    pub temperature: f64,
    pub cooling_rate: f64,
    pub iterations: usize,
}

/// Candidate value lists for every hyperparameter. The sweep enumerates the
/// full Cartesian product.
#[derive(Debug, Clone)]
pub struct SweepGrid {
    pub bigram_weights: Vec<f64>,
    pub trigram_weights: Vec<f64>,
    pub quadgram_weights: Vec<f64>,
    pub pentagram_weights: Vec<f64>,
    pub penalty_weights: Vec<f64>,
    pub temperatures: Vec<f64>,
    pub cooling_rates: Vec<f64>,
    pub iteration_budgets: Vec<usize>,
}

impl Default for SweepGrid {
    /// The ranges the original breaker swept.
    fn default() -> Self {
        Self {
            bigram_weights: vec![1.0, 2.0, 3.0],
            trigram_weights: vec![1.0, 2.0, 3.0],
            quadgram_weights: vec![3.0, 4.0, 5.0],
            pentagram_weights: vec![4.0, 5.0, 6.0],
            penalty_weights: vec![1.0],
            temperatures: vec![500.0, 1000.0, 1500.0],
            cooling_rates: vec![0.99, 0.995, 0.999],
            iteration_budgets: vec![1000],
        }
    }
}

impl SweepGrid {
    /// A grid with exactly one configuration.
    pub fn single(weights: NgramWeights, temperature: f64, cooling_rate: f64, iterations: usize) -> Self {
        Self {
            bigram_weights: vec![weights.bigram],
            trigram_weights: vec![weights.trigram],
            quadgram_weights: vec![weights.quadgram],
            pentagram_weights: vec![weights.pentagram],
            penalty_weights: vec![weights.penalty],
            temperatures: vec![temperature],
            cooling_rates: vec![cooling_rate],
            iteration_budgets: vec![iterations],
        }
    }

    /// Expands the grid into the full Cartesian product of configurations.
    /// An empty value list is a caller error and fails before any search
    /// starts.
    pub fn configurations(&self) -> CfResult<Vec<SweepConfig>> {
        let dims: [(&str, usize); 8] = [
            ("bigram-weights", self.bigram_weights.len()),
            ("trigram-weights", self.trigram_weights.len()),
            ("quadgram-weights", self.quadgram_weights.len()),
            ("pentagram-weights", self.pentagram_weights.len()),
            ("penalty-weights", self.penalty_weights.len()),
            ("temperatures", self.temperatures.len()),
            ("cooling-rates", self.cooling_rates.len()),
            ("iterations", self.iteration_budgets.len()),
        ];
        for (name, len) in dims {
            if len == 0 {
                return Err(CipherForgeError::Config(format!(
                    "hyperparameter grid '{name}' is empty"
                )));
            }
        }

        let mut configs = Vec::new();
        for &bigram in &self.bigram_weights {
            for &trigram in &self.trigram_weights {
                for &quadgram in &self.quadgram_weights {
                    for &pentagram in &self.pentagram_weights {
                        for &penalty in &self.penalty_weights {
                            for &temperature in &self.temperatures {
                                for &cooling_rate in &self.cooling_rates {
                                    for &iterations in &self.iteration_budgets {
                                        configs.push(SweepConfig {
                                            weights: NgramWeights {
                                                bigram,
                                                trigram,
                                                quadgram,
                                                pentagram,
                                                penalty,
                                            },
                                            temperature,
                                            cooling_rate,
                                            iterations,
                                        });
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Ok(configs)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SweepOptions {
    pub policy: AcceptancePolicy,
    /// Base seed; configuration `i` runs with `seed + i` so a sweep is
    /// reproducible end to end.
    pub seed: Option<u64>,
    /// Start each run from the frequency-analysis seed instead of a random
    /// permutation.
    pub frequency_seed: bool,
    /// Iterations between progress callback polls inside each run.
    pub progress_interval: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            policy: AcceptancePolicy::Metropolis,
            seed: None,
            frequency_seed: false,
            progress_interval: 1024,
        }
    }
}

/// The single globally best result across the whole sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepOutcome {
    pub config: SweepConfig,
    pub score: f64,
    pub mapping: Mapping,
    pub plaintext: String,
}

/// Runs one search per grid configuration on the rayon worker pool and keeps
/// the best result. Each run reads only the shared immutable model and its
/// own state; the mutex around the running best is the only synchronization
/// point. Score ties resolve to the lowest configuration index.
pub fn run_sweep(
    ciphertext: &str,
    model: &Arc<NgramModel>,
    grid: &SweepGrid,
    options: SweepOptions,
    callback: &dyn ProgressCallback,
) -> CfResult<SweepOutcome> {
    let configs = grid.configurations()?;
    info!(
        configurations = configs.len(),
        policy = %options.policy,
        "starting hyperparameter sweep"
    );

    let best: Mutex<Option<(usize, SweepOutcome)>> = Mutex::new(None);

    configs.par_iter().enumerate().for_each(|(idx, cfg)| {
        let scorer = Scorer::new(Arc::clone(model), cfg.weights);
        let seed = options.seed.map(|s| s + idx as u64);

        let initial = if options.frequency_seed {
            Mapping::frequency_seed(ciphertext)
        } else {
            let mut init_rng = match seed {
                Some(s) => fastrand::Rng::with_seed(s + 9999),
                None => fastrand::Rng::new(),
            };
            Mapping::random(&mut init_rng)
        };

        let mut engine = Engine::new(
            &scorer,
            ciphertext,
            options.policy,
            cfg.temperature,
            cfg.cooling_rate,
            cfg.iterations,
            seed,
        )
        .with_progress_interval(options.progress_interval);
        let outcome: SearchOutcome = engine.run(initial, callback);
        debug!(
            config = idx,
            score = outcome.score,
            iterations = outcome.iterations,
            "configuration finished"
        );

        let mut guard = best.lock().unwrap_or_else(|p| p.into_inner());
        let replace = match guard.as_ref() {
            None => true,
            Some((best_idx, best_out)) => {
                outcome.score > best_out.score
                    || (outcome.score == best_out.score && idx < *best_idx)
            }
        };
        if replace {
            info!(config = idx, score = outcome.score, "new sweep best");
            *guard = Some((
                idx,
                SweepOutcome {
                    config: *cfg,
                    score: outcome.score,
                    mapping: outcome.mapping,
                    plaintext: outcome.plaintext,
                },
            ));
        }
    });

    let inner = best.into_inner().unwrap_or_else(|p| p.into_inner());
    // configurations() guarantees at least one run, so this is unreachable
    // unless every worker panicked.
    inner
        .map(|(_, outcome)| outcome)
        .ok_or_else(|| CipherForgeError::Config("sweep produced no result".to_string()))
}
