//! A gperf-style search for collision-free associated values.
//!
//! The hash of a word is its length plus, for each of its first four bytes,
//! `asso[byte + POSITION_OFFSETS[position]]`. Words are placed one at a time;
//! when a word collides, one of its associated values is bumped (moving every
//! placed word that shares it) until everything fits again.

use std::collections::HashMap;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

pub const POSITION_OFFSETS: [usize; 4] = [23, 2, 32, 8];
pub const ASSO_LEN: usize = u8::MAX as usize + 1 + 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashParams {
    pub seed: u64,
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub max_hash_value: usize,
    pub asso_values: Vec<u16>,
}

impl HashParams {
    pub fn hash(&self, word: &[u8]) -> usize {
        asso_indices(word).fold(word.len(), |hash, index| {
            hash + usize::from(self.asso_values[index])
        })
    }

    /// Returns `true` if every word lands on its own slot within
    /// `max_hash_value`.
    pub fn is_perfect_for(&self, words: &[&str]) -> bool {
        let mut seen = HashMap::with_capacity(words.len());
        words.iter().all(|word| {
            let hash = self.hash(word.as_bytes());
            hash <= self.max_hash_value && seen.insert(hash, *word).is_none()
        })
    }
}

fn asso_indices(word: &[u8]) -> impl Iterator<Item = usize> {
    word.iter()
        .zip(POSITION_OFFSETS)
        .map(|(&byte, offset)| usize::from(byte) + offset)
}

struct Key {
    indices: Vec<usize>,
    len: usize,
}

impl Key {
    fn multiplicity(&self, asso_index: usize) -> usize {
        self.indices.iter().filter(|&&index| index == asso_index).count()
    }
}

struct Search {
    keys: Vec<Key>,
    asso: Vec<usize>,
    hashes: Vec<usize>,
    occupancy: Vec<Option<usize>>,
    // Placed keys that read each associated value
    users: Vec<Vec<usize>>,
    max_hash: usize,
}

impl Search {
    fn hash(&self, key: usize) -> usize {
        let key = &self.keys[key];
        key.indices
            .iter()
            .fold(key.len, |hash, &index| hash + self.asso[index])
    }

    fn place(&mut self, key: usize, hash: usize) {
        self.hashes[key] = hash;
        self.occupancy[hash] = Some(key);
        let mut indices = self.keys[key].indices.clone();
        indices.sort_unstable();
        indices.dedup();
        indices
            .into_iter()
            .for_each(|index| self.users[index].push(key));
    }

    /// Tries adding `delta` to `asso[index]`, which moves `key` and every
    /// placed key reading that value. Reverts and returns `false` if anything
    /// would collide or overflow.
    fn try_bump(&mut self, key: usize, index: usize, delta: usize) -> bool {
        let movers = self.users[index]
            .iter()
            .copied()
            .chain([key])
            .collect::<Vec<_>>();
        let placed = &movers[..movers.len() - 1];
        placed
            .iter()
            .for_each(|&mover| self.occupancy[self.hashes[mover]] = None);

        let current_key_hash = self.hash(key);
        let mut moved = Vec::with_capacity(movers.len());
        let fits = movers.iter().all(|&mover| {
            let old_hash = if mover == key {
                current_key_hash
            } else {
                self.hashes[mover]
            };
            let new_hash =
                old_hash + delta * self.keys[mover].multiplicity(index);
            if new_hash > self.max_hash || self.occupancy[new_hash].is_some()
            {
                return false;
            }
            self.occupancy[new_hash] = Some(mover);
            moved.push((mover, new_hash));
            true
        });

        if !fits {
            moved
                .into_iter()
                .for_each(|(_, hash)| self.occupancy[hash] = None);
            placed.iter().for_each(|&mover| {
                self.occupancy[self.hashes[mover]] = Some(mover);
            });
            return false;
        }

        self.asso[index] += delta;
        let (_, key_hash) = moved.pop().expect("key is always the last mover");
        moved
            .into_iter()
            .for_each(|(mover, hash)| self.hashes[mover] = hash);
        // The key's slot is already claimed, this records its users
        self.place(key, key_hash);
        true
    }
}

/// Searches for associated values placing every word in its own slot no
/// greater than `max_hash`.
///
/// The seed picks the order in which equally common words are placed and the
/// step used to bump values. Returns `None` if this seed couldn't fit the
/// words.
pub fn search(
    words: &[&str],
    seed: u64,
    max_hash: usize,
) -> Option<HashParams> {
    if words.is_empty() || max_hash >= usize::from(u16::MAX) {
        return None;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let jump = rng.gen_range(1..=8usize) * 2 - 1;

    let keys = words
        .iter()
        .map(|word| Key {
            indices: asso_indices(word.as_bytes()).collect(),
            len: word.len(),
        })
        .collect::<Vec<_>>();
    if keys.iter().any(|key| key.len > max_hash) {
        return None;
    }

    // Words built from common characters go first, as gperf orders them
    let mut frequency = vec![0usize; ASSO_LEN];
    keys.iter()
        .flat_map(|key| &key.indices)
        .for_each(|&index| frequency[index] += 1);
    let mut order = (0..keys.len()).collect::<Vec<_>>();
    order.shuffle(&mut rng);
    order.sort_by_key(|&key| {
        let weight = keys[key]
            .indices
            .iter()
            .map(|&index| frequency[index])
            .sum::<usize>();
        std::cmp::Reverse(weight)
    });

    let mut search = Search {
        asso: vec![0; ASSO_LEN],
        hashes: vec![0; keys.len()],
        occupancy: vec![None; max_hash + 1],
        users: vec![Vec::new(); ASSO_LEN],
        keys,
        max_hash,
    };

    for key in order {
        let hash = search.hash(key);
        if hash <= max_hash && search.occupancy[hash].is_none() {
            search.place(key, hash);
            continue;
        }
        // Bump the rarest values first, they move the fewest placed words
        let mut candidates = search.keys[key].indices.clone();
        candidates.sort_unstable_by_key(|&index| (frequency[index], index));
        candidates.dedup();
        let resolved = (1..)
            .map(|step| step * jump)
            .take_while(|&delta| delta <= max_hash)
            .any(|delta| {
                candidates
                    .iter()
                    .any(|&index| search.try_bump(key, index, delta))
            });
        if !resolved {
            return None;
        }
    }

    let max_hash_value = search.hashes.iter().copied().max()?;
    let sentinel = u16::try_from(max_hash_value + 1).ok()?;
    let asso_values = search
        .asso
        .iter()
        .zip(&search.users)
        .map(|(&value, users)| {
            if users.is_empty() {
                Ok(sentinel)
            } else {
                u16::try_from(value)
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    let params = HashParams {
        seed,
        min_word_length: words.iter().map(|word| word.len()).min()?,
        max_word_length: words.iter().map(|word| word.len()).max()?,
        max_hash_value,
        asso_values,
    };
    params.is_perfect_for(words).then_some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "abandon", "ability", "able", "about", "above", "absent", "absorb",
        "abstract", "absurd", "abuse", "access", "accident", "account",
        "accuse", "achieve", "acid", "acoustic", "acquire", "across", "act",
        "satoshi", "zone", "zoo", "win", "winter", "smoke",
    ];

    #[test]
    fn finds_perfect_hash_for_small_list() {
        let params = search(WORDS, 0, 16426).expect("search should succeed");
        assert!(params.is_perfect_for(WORDS));
        assert_eq!(params.min_word_length, 3);
        assert_eq!(params.max_word_length, 8);
        assert_eq!(params.asso_values.len(), ASSO_LEN);
    }

    #[test]
    fn unused_values_are_sentinels() {
        let params = search(WORDS, 7, 16426).unwrap();
        let sentinel = params.max_hash_value + 1;
        // Uppercase letters never appear in the list
        assert_eq!(
            usize::from(params.asso_values[usize::from(b'A') + 23]),
            sentinel,
        );
        assert!(params.hash(b"ABANDON") > params.max_hash_value);
    }

    #[test]
    fn indistinguishable_words_fail() {
        // Same length and same first four bytes always share a slot
        assert_eq!(search(&["abcdx", "abcdy"], 0, 100), None);
    }

    #[test]
    fn same_seed_same_result() {
        assert_eq!(search(WORDS, 3, 16426), search(WORDS, 3, 16426));
    }
}
