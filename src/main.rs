use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Breaks monoalphabetic substitution ciphers on English prose", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Break a ciphertext with a hyperparameter sweep of annealing runs
    Search(cmd::search::SearchArgs),
    /// Letter and digraph frequency report with a frequency-seeded preview
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search(args) => cmd::search::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
    };

    if let Err(e) = result {
        eprintln!("❌ {e}");
        process::exit(1);
    }
}
