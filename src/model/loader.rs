use crate::error::CfResult;
use std::io::Read;
use tracing::debug;

/// Reads an n-gram table in `ngram<TAB>count` form from any reader.
///
/// Rows with missing fields, unparsable counts, or non-alphabetic keys are
/// skipped rather than failing the load; real-world frequency dumps carry
/// headers and stray punctuation rows. Keys are folded to lowercase and
/// anything longer than five letters is ignored.
pub fn load_ngram_table<R: Read>(reader: R) -> CfResult<Vec<(String, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let rec = match result {
            Ok(rec) => rec,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        let key = rec[0].trim().to_ascii_lowercase();
        if key.is_empty() || key.len() > 5 || !key.bytes().all(|b| b.is_ascii_lowercase()) {
            skipped += 1;
            continue;
        }

        let count: f64 = match rec[1].trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if count < 0.0 {
            skipped += 1;
            continue;
        }

        entries.push((key, count));
    }

    if skipped > 0 {
        debug!(skipped, loaded = entries.len(), "skipped invalid n-gram rows");
    }

    Ok(entries)
}
