use crate::error::{CfResult, CipherForgeError};
use crate::optimizer::runner::SweepGrid;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub grid: GridParams,
    #[command(flatten)]
    pub search: SearchParams,
}

/// Candidate value lists for the hyperparameter sweep, one comma-separated
/// list per dimension. Defaults reproduce the ranges the breaker was tuned
/// with.
#[derive(Args, Debug, Clone)]
pub struct GridParams {
    #[arg(long, default_value = "1,2,3")]
    pub bigram_weights: String,
    #[arg(long, default_value = "1,2,3")]
    pub trigram_weights: String,
    #[arg(long, default_value = "3,4,5")]
    pub quadgram_weights: String,
    #[arg(long, default_value = "4,5,6")]
    pub pentagram_weights: String,
    #[arg(long, default_value = "1")]
    pub penalty_weights: String,
    #[arg(long, default_value = "500,1000,1500")]
    pub temperatures: String,
    #[arg(long, default_value = "0.99,0.995,0.999")]
    pub cooling_rates: String,
    #[arg(long, default_value = "1000")]
    pub iterations: String,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Base RNG seed; omit for a nondeterministic run.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Seed each run from ciphertext letter frequencies instead of a random
    /// permutation.
    #[arg(long, default_value_t = false)]
    pub frequency_seed: bool,

    /// Iterations between progress callback polls.
    #[arg(long, default_value_t = 1024)]
    pub progress_interval: usize,
}

impl GridParams {
    pub fn to_grid(&self) -> CfResult<SweepGrid> {
        Ok(SweepGrid {
            bigram_weights: parse_f64_list(&self.bigram_weights, "bigram-weights")?,
            trigram_weights: parse_f64_list(&self.trigram_weights, "trigram-weights")?,
            quadgram_weights: parse_f64_list(&self.quadgram_weights, "quadgram-weights")?,
            pentagram_weights: parse_f64_list(&self.pentagram_weights, "pentagram-weights")?,
            penalty_weights: parse_f64_list(&self.penalty_weights, "penalty-weights")?,
            temperatures: parse_f64_list(&self.temperatures, "temperatures")?,
            cooling_rates: parse_f64_list(&self.cooling_rates, "cooling-rates")?,
            iteration_budgets: parse_usize_list(&self.iterations, "iterations")?,
        })
    }
}

fn parse_f64_list(s: &str, name: &str) -> CfResult<Vec<f64>> {
    s.split(',')
        .map(|p| {
            p.trim().parse().map_err(|_| {
                CipherForgeError::Config(format!("invalid number '{}' in --{name}", p.trim()))
            })
        })
        .collect()
}

fn parse_usize_list(s: &str, name: &str) -> CfResult<Vec<usize>> {
    s.split(',')
        .map(|p| {
            p.trim().parse().map_err(|_| {
                CipherForgeError::Config(format!("invalid integer '{}' in --{name}", p.trim()))
            })
        })
        .collect()
}
