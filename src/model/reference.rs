//! Fixed reference tables of known-common English n-grams, for running the
//! breaker without a corpus file. Entries carry a flat count of 1: with the
//! reference model, the score is simply a weighted tally of how many common
//! sequences the candidate plaintext contains.

pub const COMMON_DIGRAPHS: &[&str] = &[
    "th", "he", "in", "er", "an", "re", "on", "at", "en", "nd", "ti", "es", "or", "te", "of",
];

pub const COMMON_TRIGRAMS: &[&str] = &[
    "the", "and", "ing", "her", "hat", "his", "tha", "ere", "for", "ent", "ion", "ter",
];

pub const COMMON_QUADGRAMS: &[&str] = &[
    "tion", "ment", "that", "with", "this", "ther", "here", "ions", "ated", "able",
];

pub const COMMON_PENTAGRAMS: &[&str] = &[
    "ation", "there", "other", "their", "which", "would", "could", "about", "after",
];

/// Letter pairs that essentially never occur in English prose. The scorer
/// subtracts their occurrence counts, weighted by the penalty weight.
pub const UNLIKELY_SEQUENCES: &[&str] = &["zx", "qq", "jf", "zz", "vx"];
