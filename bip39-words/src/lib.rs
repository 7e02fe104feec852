#![doc = include_str!("../README.md")]

pub mod errors;
mod hash;
mod metadata;
mod mnemonic;
mod word_index;

pub use hash::{MAX_HASH_VALUE, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
pub use metadata::WordListMetadata;
pub use word_index::{ENGLISH, WORD_COUNT, WordEntry, WordIndex};

/// Look up a word in the [`ENGLISH`] word list.
///
/// Shorthand for [`ENGLISH.lookup(word)`](WordIndex::lookup).
#[inline]
#[must_use]
pub fn lookup(word: impl AsRef<[u8]>) -> Option<WordEntry> {
    ENGLISH.lookup(word)
}
