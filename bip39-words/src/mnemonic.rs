use log::debug;

use crate::{WordIndex, errors::MnemonicError};

const SEPARATOR: u8 = b' ';

impl WordIndex {
    /// Convert a space separated mnemonic phrase into canonical word indices.
    ///
    /// Only ASCII spaces separate words; repeated, leading and trailing spaces
    /// are ignored. Fails on the first word that isn't in the word list.
    ///
    /// ```
    /// let indices = bip39_words::ENGLISH
    ///     .mnemonic_to_indices("abandon zoo satoshi")
    ///     .unwrap();
    /// assert_eq!(indices, [0, 2047, 1531]);
    /// ```
    pub fn mnemonic_to_indices(
        &self,
        mnemonic: impl AsRef<[u8]>,
    ) -> Result<Vec<u16>, MnemonicError> {
        let indices = mnemonic_words(mnemonic.as_ref())
            .enumerate()
            .map(|(position, word)| {
                self.index_of(word)
                    .ok_or(MnemonicError::UnknownWord { position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("converted {}-word mnemonic to indices", indices.len());
        Ok(indices)
    }

    /// Convert canonical word indices back into a space separated mnemonic
    /// phrase.
    pub fn indices_to_mnemonic(
        &self,
        indices: &[u16],
    ) -> Result<String, MnemonicError> {
        let mut mnemonic = String::with_capacity(indices.len() * 9);
        for (position, &index) in indices.iter().enumerate() {
            let word = self
                .word(index)
                .ok_or(MnemonicError::InvalidIndex { position, index })?;
            if position > 0 {
                mnemonic.push(char::from(SEPARATOR));
            }
            mnemonic.push_str(word);
        }
        debug!("converted {} indices to mnemonic", indices.len());
        Ok(mnemonic)
    }

    /// Returns `true` if every word of the mnemonic phrase is in the word
    /// list.
    ///
    /// This doesn't check the phrase length or its checksum.
    #[must_use]
    pub fn is_valid_mnemonic_words(&self, mnemonic: impl AsRef<[u8]>) -> bool {
        mnemonic_words(mnemonic.as_ref()).all(|word| self.contains(word))
    }
}

fn mnemonic_words(mnemonic: &[u8]) -> impl Iterator<Item = &[u8]> {
    mnemonic
        .split(|&byte| byte == SEPARATOR)
        .filter(|word| !word.is_empty())
}
