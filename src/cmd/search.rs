use crate::reports;
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::model::NgramModel;
use cipherforge::optimizer::runner::{run_sweep, SweepOptions};
use cipherforge::optimizer::{AcceptancePolicy, ProgressCallback};
use clap::Args;
use std::fs::{self, File};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// File containing the ciphertext to break
    #[arg(short, long)]
    pub input: String,

    /// Reference corpus to build the n-gram model from
    #[arg(short, long)]
    pub corpus: Option<String>,

    /// TSV n-gram table (ngram<TAB>count) to build the model from
    #[arg(short, long)]
    pub ngrams: Option<String>,

    /// Build the model from the ciphertext itself (degraded mode)
    #[arg(long, default_value_t = false)]
    pub self_model: bool,

    /// Acceptance policy for each run
    #[arg(long, value_enum, default_value_t = AcceptancePolicy::Metropolis)]
    pub policy: AcceptancePolicy,

    /// Write the winning result record as JSON
    #[arg(short, long)]
    pub output: Option<String>,

    /// Characters of decrypted preview to print
    #[arg(long, default_value_t = 500)]
    pub preview: usize,

    #[command(flatten)]
    pub config: Config,
}

/// Prints a best-score line at most once per second, shared across workers.
struct StdoutProgress {
    last_print: Mutex<Instant>,
}

impl StdoutProgress {
    fn new() -> Self {
        Self {
            last_print: Mutex::new(Instant::now()),
        }
    }
}

impl ProgressCallback for StdoutProgress {
    fn on_progress(&self, iteration: usize, best_score: f64) -> bool {
        let mut last = self.last_print.lock().unwrap_or_else(|p| p.into_inner());
        if last.elapsed().as_secs_f32() >= 1.0 {
            println!("Iter {iteration:7} | Best: {best_score:.1}");
            *last = Instant::now();
        }
        true
    }
}

pub fn run(args: SearchArgs) -> CfResult<()> {
    println!("\n🚀 Initializing CipherForge...");

    let ciphertext = fs::read_to_string(&args.input)?;
    if !ciphertext.chars().any(|c| c.is_ascii_alphabetic()) {
        warn!("ciphertext has no alphabetic content; every mapping scores the same");
    }

    let model = build_model(&args, &ciphertext)?;
    info!(
        source = ?model.source(),
        entries = model.len(),
        "language model ready"
    );

    let grid = args.config.grid.to_grid()?;
    let options = SweepOptions {
        policy: args.policy,
        seed: args.config.search.seed,
        frequency_seed: args.config.search.frequency_seed,
        progress_interval: args.config.search.progress_interval,
    };

    let started = Instant::now();
    let outcome = run_sweep(
        &ciphertext,
        &Arc::new(model),
        &grid,
        options,
        &StdoutProgress::new(),
    )?;
    info!(elapsed_s = started.elapsed().as_secs_f32(), "sweep finished");

    println!("\n=== 🏆 FINAL RESULT ===");
    reports::print_sweep_outcome(&outcome, args.preview);

    if let Some(path) = &args.output {
        serde_json::to_writer_pretty(File::create(path)?, &outcome)?;
        println!("\nResult record written to {path}");
    }

    Ok(())
}

fn build_model(args: &SearchArgs, ciphertext: &str) -> CfResult<NgramModel> {
    if let Some(path) = &args.corpus {
        let corpus = fs::read_to_string(path)?;
        NgramModel::from_corpus(&corpus, &[2, 3, 4, 5])
    } else if let Some(path) = &args.ngrams {
        NgramModel::from_reader(File::open(path)?)
    } else if args.self_model {
        // Bigram/trigram statistics of the ciphertext itself survive a
        // substitution, so they still separate good mappings from bad ones.
        NgramModel::from_corpus(ciphertext, &[2, 3])
    } else {
        Ok(NgramModel::reference())
    }
}
