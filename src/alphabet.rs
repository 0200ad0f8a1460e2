//! The symbol set the whole crate operates on: the 26 ASCII letters,
//! case-folded to lowercase. Case belongs to the input symbol, never to
//! a mapping or an n-gram table.

pub const ALPHABET_LEN: usize = 26;

/// English letters sorted by typical frequency in prose, most common first.
/// Used to seed an initial mapping from ciphertext letter counts.
pub const ENGLISH_FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Alphabet index (0..26) of a letter, folding case. `None` for anything
/// that is not an ASCII letter.
#[inline]
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Lowercase letter for an alphabet index. Callers guarantee `i < 26`.
#[inline]
pub fn index_letter(i: usize) -> char {
    debug_assert!(i < ALPHABET_LEN);
    (b'a' + i as u8) as char
}
