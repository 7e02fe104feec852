/// Descriptive information about a word list, read from its TOML metadata
/// file at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordListMetadata {
    pub(crate) name: &'static str,
    pub(crate) language: &'static str,
    pub(crate) script: &'static str,
    pub(crate) source: &'static str,
}

impl WordListMetadata {
    /// The short name of the word list, e.g. `english`.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The BCP 47 language tag of the word list.
    #[inline]
    #[must_use]
    pub const fn language(&self) -> &'static str {
        self.language
    }

    /// The ISO 15924 script code of the word list.
    #[inline]
    #[must_use]
    pub const fn script(&self) -> &'static str {
        self.script
    }

    /// Where the canonical copy of the word list is published.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &'static str {
        self.source
    }
}
