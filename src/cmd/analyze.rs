use crate::reports;
use cipherforge::error::CfResult;
use cipherforge::mapping::Mapping;
use cipherforge::model::NgramModel;
use clap::Args;
use std::fs;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// File containing the ciphertext to analyze
    #[arg(short, long)]
    pub input: String,

    /// Entries to show per frequency table
    #[arg(long, default_value_t = 12)]
    pub top: usize,

    /// Characters of seeded preview to print
    #[arg(long, default_value_t = 500)]
    pub preview: usize,
}

pub fn run(args: AnalyzeArgs) -> CfResult<()> {
    let ciphertext = fs::read_to_string(&args.input)?;
    let model = NgramModel::from_corpus(&ciphertext, &[1, 2, 3])?;

    println!("\n🔎 === CIPHERTEXT ANALYSIS === 🔎");
    reports::print_frequency_table("Letters", &model.top(1, args.top));
    reports::print_frequency_table("Digraphs", &model.top(2, args.top));
    reports::print_frequency_table("Trigraphs", &model.top(3, args.top));

    let seed = Mapping::frequency_seed(&ciphertext);
    reports::print_mapping_table("FREQUENCY SEED", &seed);

    let preview: String = seed.apply(&ciphertext).chars().take(args.preview).collect();
    println!("\nFrequency-seeded preview:\n{preview}");

    Ok(())
}
