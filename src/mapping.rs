use crate::alphabet::{index_letter, letter_index, ALPHABET_LEN, ENGLISH_FREQUENCY_ORDER};
use crate::error::{CfResult, CipherForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A substitution key: a bijection on the alphabet, stored as a permutation
/// of indices. `images[i]` is the plaintext index that ciphertext letter `i`
/// decrypts to.
///
/// The only mutation operator is [`Mapping::swap`], which exchanges two
/// images and therefore preserves bijectivity by construction. Anything that
/// builds a mapping from external data goes through [`Mapping::from_images`],
/// which rejects non-permutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    images: [u8; ALPHABET_LEN],
}

impl Mapping {
    /// Every letter maps to itself.
    pub fn identity() -> Self {
        let mut images = [0u8; ALPHABET_LEN];
        for (i, img) in images.iter_mut().enumerate() {
            *img = i as u8;
        }
        Self { images }
    }

    /// Uniformly random permutation.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let mut m = Self::identity();
        rng.shuffle(&mut m.images);
        m
    }

    /// Builds a mapping from an explicit image table, rejecting anything
    /// that is not a permutation of 0..26.
    pub fn from_images(images: [u8; ALPHABET_LEN]) -> CfResult<Self> {
        let mut seen = [false; ALPHABET_LEN];
        for &img in &images {
            let idx = img as usize;
            if idx >= ALPHABET_LEN || seen[idx] {
                return Err(CipherForgeError::Validation(format!(
                    "mapping is not a bijection: image {img} is out of range or repeated"
                )));
            }
            seen[idx] = true;
        }
        Ok(Self { images })
    }

    /// Initial guess from frequency analysis: ciphertext letters sorted by
    /// descending frequency are paired with the typical English order.
    /// Frequency ties break on first occurrence in the ciphertext, so the
    /// seed is deterministic for a given input.
    pub fn frequency_seed(ciphertext: &str) -> Self {
        let mut counts = [0usize; ALPHABET_LEN];
        let mut first_seen = [usize::MAX; ALPHABET_LEN];

        for (pos, c) in ciphertext.chars().enumerate() {
            if let Some(i) = letter_index(c) {
                counts[i] += 1;
                if first_seen[i] == usize::MAX {
                    first_seen[i] = pos;
                }
            }
        }

        let mut order: Vec<usize> = (0..ALPHABET_LEN).collect();
        order.sort_by(|&a, &b| {
            counts[b]
                .cmp(&counts[a])
                .then(first_seen[a].cmp(&first_seen[b]))
                .then(a.cmp(&b))
        });

        let mut images = [0u8; ALPHABET_LEN];
        for (&cipher_idx, eng) in order.iter().zip(ENGLISH_FREQUENCY_ORDER.bytes()) {
            images[cipher_idx] = eng - b'a';
        }
        Self { images }
    }

    /// Exchanges the images of two letters. Self-swaps are legal no-ops;
    /// the search engine redraws them instead of calling this.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.images.swap(a, b);
    }

    #[inline]
    pub fn image_of(&self, i: usize) -> usize {
        self.images[i] as usize
    }

    /// Inverse permutation: `m.invert().image_of(m.image_of(i)) == i`.
    pub fn invert(&self) -> Self {
        let mut images = [0u8; ALPHABET_LEN];
        for (i, &img) in self.images.iter().enumerate() {
            images[img as usize] = i as u8;
        }
        Self { images }
    }

    /// Decrypts `text`: every ASCII letter is replaced by its image with the
    /// original case re-applied, everything else passes through unchanged.
    /// Linear in the input length.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match letter_index(c) {
                Some(i) => {
                    let img = index_letter(self.images[i] as usize);
                    if c.is_ascii_uppercase() {
                        out.push(img.to_ascii_uppercase());
                    } else {
                        out.push(img);
                    }
                }
                None => out.push(c),
            }
        }
        out
    }
}

impl fmt::Display for Mapping {
    /// Images of a..z in order, e.g. the identity prints as the alphabet.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &img in &self.images {
            write!(f, "{}", index_letter(img as usize))?;
        }
        Ok(())
    }
}
