//! The errors produced when converting mnemonic phrases.
use thiserror::Error;

/// A mnemonic phrase or index sequence could not be converted.
///
/// Words from a mnemonic are secret material, so errors only ever report
/// positions, never the offending text.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MnemonicError {
    /// The word at `position` is not in the word list.
    #[error(
        "the mnemonic phrase contains an unknown word at position {position}"
    )]
    UnknownWord {
        /// Zero-based position of the word in the phrase.
        position: usize,
    },
    /// The index at `position` does not refer to a word.
    #[error("invalid word index {index} at position {position}")]
    InvalidIndex {
        /// Zero-based position of the index in the sequence.
        position: usize,
        /// The out-of-range index.
        index: u16,
    },
}
