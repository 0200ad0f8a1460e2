use cipherforge::alphabet::{index_letter, ALPHABET_LEN};
use cipherforge::mapping::Mapping;
use cipherforge::optimizer::runner::SweepOutcome;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

pub fn print_mapping_table(name: &str, mapping: &Mapping) {
    println!("\nMapping: {name}");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cipher_row: Vec<Cell> = (0..ALPHABET_LEN)
        .map(|i| {
            Cell::new(index_letter(i).to_ascii_uppercase())
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold)
        })
        .collect();
    let plain_row: Vec<Cell> = (0..ALPHABET_LEN)
        .map(|i| Cell::new(index_letter(mapping.image_of(i))).set_alignment(CellAlignment::Center))
        .collect();

    table.add_row(cipher_row);
    table.add_row(plain_row);
    println!("{table}");
}

pub fn print_frequency_table(title: &str, entries: &[(&str, f64)]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Count").set_alignment(CellAlignment::Right),
    ]);
    for (ngram, count) in entries {
        table.add_row(vec![
            Cell::new(ngram),
            Cell::new(format!("{count:.0}")).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{table}");
}

pub fn print_sweep_outcome(outcome: &SweepOutcome, preview: usize) {
    let w = outcome.config.weights;
    println!("Score: {:.2}", outcome.score);
    println!(
        "Weights: bigram={} trigram={} quadgram={} pentagram={} penalty={}",
        w.bigram, w.trigram, w.quadgram, w.pentagram, w.penalty
    );
    println!(
        "Temperature: {} | Cooling: {} | Iterations: {}",
        outcome.config.temperature, outcome.config.cooling_rate, outcome.config.iterations
    );

    print_mapping_table("BEST", &outcome.mapping);

    let text: String = outcome.plaintext.chars().take(preview).collect();
    println!("\nDecrypted preview:\n{text}");
}
