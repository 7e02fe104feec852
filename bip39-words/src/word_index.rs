use std::fmt;

use crate::{WordListMetadata, hash};

mod table {
    // Provides EMPTY_SLOT, WORD_COUNT, WORDS, SLOTS and METADATA, generated by
    // the build script from data/english.txt
    include!(concat!(env!("OUT_DIR"), "/table_codegen.rs"));
}

pub use table::WORD_COUNT;

/// The BIP-39 English word list.
pub static ENGLISH: WordIndex = WordIndex {
    metadata: &table::METADATA,
    words: &table::WORDS,
    slots: &table::SLOTS,
};

/// A word found in a [`WordIndex`], together with its canonical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordEntry {
    word: &'static str,
    index: u16,
}

impl WordEntry {
    /// The word as stored in the word list.
    ///
    /// This is always byte-identical to the string that was looked up.
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &'static str {
        self.word
    }

    /// The canonical index of the word, in `0..WORD_COUNT`.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> u16 {
        self.index
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.index)
    }
}

/// An immutable word to index mapping backed by a perfect hash table.
///
/// The table is generated at compile time, so there is nothing to initialise
/// and lookups can be made from any number of threads.
#[derive(Debug)]
pub struct WordIndex {
    metadata: &'static WordListMetadata,
    words: &'static [&'static str],
    slots: &'static [u16; hash::TABLE_SIZE],
}

impl WordIndex {
    /// Look up a word, returning its entry if it is in the word list.
    ///
    /// Matching is exact: no case folding, trimming or normalization is
    /// applied. Any input is accepted, including empty and non-UTF-8 byte
    /// strings, for which the result is simply `None`.
    ///
    /// ```
    /// let entry = bip39_words::ENGLISH.lookup("zoo").unwrap();
    /// assert_eq!(entry.index(), 2047);
    /// assert_eq!(bip39_words::ENGLISH.lookup("Zoo"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, word: impl AsRef<[u8]>) -> Option<WordEntry> {
        let word = word.as_ref();
        let slot = hash::slot(word)?;
        let index = *self.slots.get(slot)?;
        if index == table::EMPTY_SLOT {
            return None;
        }
        // A different word may share the slot, so the bytes must match
        let stored = *self.words.get(usize::from(index))?;
        (stored.as_bytes() == word).then_some(WordEntry {
            word: stored,
            index,
        })
    }

    /// Get the canonical index of a word.
    #[inline]
    #[must_use]
    pub fn index_of(&self, word: impl AsRef<[u8]>) -> Option<u16> {
        self.lookup(word).map(|entry| entry.index)
    }

    /// Returns `true` if the word is in the word list.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool {
        self.lookup(word).is_some()
    }

    /// Get the word with the given canonical index.
    #[inline]
    #[must_use]
    pub fn word(&self, index: u16) -> Option<&'static str> {
        self.words.get(usize::from(index)).copied()
    }

    /// Get how many words there are in the word list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words in the word list.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the metadata of the word list.
    #[inline]
    #[must_use]
    pub const fn metadata(&self) -> &'static WordListMetadata {
        self.metadata
    }

    /// Get the name of the word list.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.metadata.name()
    }

    /// Get the language of the word list.
    #[inline]
    #[must_use]
    pub const fn language(&self) -> &'static str {
        self.metadata.language()
    }

    /// Get the script of the word list.
    #[inline]
    #[must_use]
    pub const fn script(&self) -> &'static str {
        self.metadata.script()
    }

    /// Get where the word list is published.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &'static str {
        self.metadata.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_and_last_words() {
        assert_eq!(
            ENGLISH.lookup("abandon"),
            Some(WordEntry {
                word: "abandon",
                index: 0,
            }),
        );
        assert_eq!(
            ENGLISH.lookup("zoo"),
            Some(WordEntry {
                word: "zoo",
                index: 2047,
            }),
        );
    }

    #[test]
    fn rejects_colliding_strangers() {
        // Same length and first four bytes as "abandon", so same slot
        assert_eq!(hash::slot(b"abanxyz"), hash::slot(b"abandon"));
        assert_eq!(ENGLISH.lookup("abanxyz"), None);
    }

    #[test]
    fn every_slot_points_at_a_word_that_hashes_there() {
        ENGLISH
            .slots
            .iter()
            .enumerate()
            .filter(|&(_, &index)| index != table::EMPTY_SLOT)
            .for_each(|(slot, &index)| {
                let word = ENGLISH.words[usize::from(index)];
                assert_eq!(hash::slot(word.as_bytes()), Some(slot), "{word}");
            });
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(ENGLISH.word(0), Some("abandon"));
        assert_eq!(ENGLISH.word(1531), Some("satoshi"));
        assert_eq!(ENGLISH.word(2048), None);
        assert_eq!(ENGLISH.word(u16::MAX), None);
    }

    #[test]
    fn metadata() {
        assert_eq!(ENGLISH.name(), "english");
        assert_eq!(ENGLISH.language(), "en");
        assert_eq!(ENGLISH.script(), "Latn");
        assert_eq!(ENGLISH.len(), WORD_COUNT);
        assert!(!ENGLISH.is_empty());
    }

    #[test]
    fn displays_word_and_index() {
        let entry = ENGLISH.lookup("satoshi").unwrap();
        assert_eq!(entry.to_string(), "satoshi (1531)");
    }
}
