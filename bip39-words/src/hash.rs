//! The perfect hash used to address the slot table.
//!
//! This file is also compiled into the build script, so the function that lays
//! the table out is the same one that probes it.

// Provides MIN_WORD_LENGTH, MAX_WORD_LENGTH, MAX_HASH_VALUE, POSITION_OFFSETS
// and ASSO_VALUES. Regenerate with `cargo run -p xtask -- hash-params`
include!("../hash_params.rs");

/// Number of slots in the probe table.
pub const TABLE_SIZE: usize = MAX_HASH_VALUE + 1;

// Every offset byte must index into ASSO_VALUES, which keeps `slot` panic-free
const _: () = {
    let mut position = 0;
    while position < POSITION_OFFSETS.len() {
        assert!(
            u8::MAX as usize + POSITION_OFFSETS[position] < ASSO_VALUES.len()
        );
        position += 1;
    }
};

/// Hashes `word` to its slot in the table.
///
/// Returns `None` when the length is outside
/// `MIN_WORD_LENGTH..=MAX_WORD_LENGTH` or the hash lands past
/// `MAX_HASH_VALUE`. Only the first four bytes contribute to the hash, each
/// through its own offset into `ASSO_VALUES`; shorter words skip the missing
/// positions.
#[inline]
#[must_use]
pub fn slot(word: &[u8]) -> Option<usize> {
    if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()) {
        return None;
    }
    let hash = word.iter().zip(POSITION_OFFSETS).fold(
        word.len(),
        |hash, (&byte, offset)| {
            hash + usize::from(ASSO_VALUES[usize::from(byte) + offset])
        },
    );
    (hash <= MAX_HASH_VALUE).then_some(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTINEL: u16 = (MAX_HASH_VALUE + 1) as u16;

    #[test]
    fn rejects_out_of_range_lengths() {
        assert_eq!(slot(b""), None);
        assert_eq!(slot(b"ab"), None);
        assert_eq!(slot(b"abandonab"), None);
        assert_eq!(slot(&[b'a'; 100]), None);
    }

    #[test]
    fn matches_known_slots() {
        assert_eq!(slot(b"win"), Some(8));
        assert_eq!(slot(b"winter"), Some(26));
        assert_eq!(slot(b"smoke"), Some(MAX_HASH_VALUE));
    }

    #[test]
    fn only_first_four_bytes_count() {
        // Same length, same first four bytes
        assert_eq!(slot(b"abanxxxx"), slot(b"abanyyyy"));
    }

    #[test]
    fn sentinel_bytes_never_land_in_table() {
        assert_eq!(slot(b"ABANDON"), None);
        assert_eq!(slot(b"a\0b"), None);
        assert_eq!(slot(&[0xff; 8]), None);
    }

    #[test]
    fn sentinel_exceeds_every_slot() {
        ASSO_VALUES
            .iter()
            .filter(|&&value| value != SENTINEL)
            .for_each(|&value| assert!(usize::from(value) <= MAX_HASH_VALUE));
        assert!(usize::from(SENTINEL) > MAX_HASH_VALUE);
    }

    #[test]
    fn sampled_three_byte_inputs_stay_in_table() {
        // Exhaustive over the first position, sampled over the others
        for first in u8::MIN..=u8::MAX {
            for second in [0, b'a', b'z', 0x7f, 0xff] {
                for third in [0, b'a', b'n', 0x80, 0xff] {
                    if let Some(hash) = slot(&[first, second, third]) {
                        assert!(hash < TABLE_SIZE);
                    }
                }
            }
        }
    }
}
