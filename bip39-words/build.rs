#![allow(missing_docs)]

use std::{
    collections::HashSet,
    env,
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Deserialize;

#[allow(dead_code)]
#[path = "src/hash.rs"]
mod hash;

const WORD_LIST_PATH: &str = "data/english.txt";
const METADATA_PATH: &str = "data/english.toml";

// Marks an empty slot. Canonical indices never reach it
const EMPTY_SLOT: u16 = u16::MAX;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WordListMetadata {
    name: String,
    language: String,
    script: String,
    source: String,
    words: usize,
}

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed=hash_params.rs");
    println!("cargo::rerun-if-changed=src/hash.rs");
    println!("cargo::rerun-if-changed={WORD_LIST_PATH}");
    println!("cargo::rerun-if-changed={METADATA_PATH}");

    let metadata_content =
        fs::read_to_string(METADATA_PATH).unwrap_or_else(|err| {
            panic!("failed to read {METADATA_PATH}: {err}");
        });
    let metadata: WordListMetadata = toml::from_str(&metadata_content)
        .unwrap_or_else(|err| {
            panic!("failed to parse {METADATA_PATH}: {err}");
        });

    let word_list_content =
        fs::read_to_string(WORD_LIST_PATH).unwrap_or_else(|err| {
            panic!("failed to read {WORD_LIST_PATH}: {err}");
        });
    let words = word_list_content
        .split_whitespace()
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>();
    validate_words(&words, &metadata);

    let slots = place_words(&words);

    let codegen_path = out_dir_path("table_codegen.rs");
    let mut codegen_file = BufWriter::new(open_path(&codegen_path));
    write_table(&mut codegen_file, &words, &slots, &metadata)
        .and_then(|()| codegen_file.flush())
        .unwrap_or_else(|err| {
            panic!("failed to write to {}: {err}", codegen_path.display());
        });
}

fn validate_words(words: &[&str], metadata: &WordListMetadata) {
    assert_eq!(
        words.len(),
        metadata.words,
        "{WORD_LIST_PATH} has {} words, {METADATA_PATH} expects {}",
        words.len(),
        metadata.words,
    );
    assert!(
        words.len() < usize::from(EMPTY_SLOT),
        "too many words to index with u16",
    );

    let mut seen = HashSet::with_capacity(words.len());
    words.iter().enumerate().for_each(|(index, word)| {
        assert!(
            (hash::MIN_WORD_LENGTH..=hash::MAX_WORD_LENGTH)
                .contains(&word.len()),
            "word {index} ({word:?}) is outside the supported length range",
        );
        assert!(
            word.bytes().all(|byte| byte.is_ascii_lowercase()),
            "word {index} ({word:?}) is not lowercase ASCII",
        );
        assert!(seen.insert(*word), "word {index} ({word:?}) is duplicated");
    });
}

/// Lays every word out at its hash, panicking on any collision.
fn place_words(words: &[&str]) -> Vec<u16> {
    let mut slots = vec![EMPTY_SLOT; hash::TABLE_SIZE];
    words.iter().zip(0u16..).for_each(|(word, index)| {
        let Some(slot) = hash::slot(word.as_bytes()) else {
            panic!(
                "{word:?} hashes outside the table, regenerate hash_params.rs"
            );
        };
        let occupant = slots[slot];
        assert_eq!(
            occupant,
            EMPTY_SLOT,
            "{word:?} collides with {:?} in slot {slot}, regenerate \
             hash_params.rs",
            words[usize::from(occupant)],
        );
        slots[slot] = index;
    });
    slots
}

fn write_table(
    out: &mut impl Write,
    words: &[&str],
    slots: &[u16],
    metadata: &WordListMetadata,
) -> std::io::Result<()> {
    writeln!(out, "/// Marks an empty slot in [`SLOTS`].")?;
    writeln!(out, "pub(crate) const EMPTY_SLOT: u16 = {EMPTY_SLOT};")?;
    writeln!(out)?;

    writeln!(out, "/// Number of words in the table.")?;
    writeln!(out, "pub const WORD_COUNT: usize = {};", words.len())?;
    writeln!(out)?;

    writeln!(out, "/// Every word, in canonical order.")?;
    writeln!(out, "pub(crate) static WORDS: [&str; WORD_COUNT] = [")?;
    for word in words {
        writeln!(out, "    {word:?},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(
        out,
        "/// The canonical index stored at each hash, or [`EMPTY_SLOT`]."
    )?;
    writeln!(
        out,
        "pub(crate) static SLOTS: [u16; crate::hash::TABLE_SIZE] = ["
    )?;
    for row in slots.chunks(16) {
        let row = row
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "    {row},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(
        out,
        "pub(crate) static METADATA: crate::WordListMetadata = \
         crate::WordListMetadata {{"
    )?;
    writeln!(out, "    name: {:?},", metadata.name)?;
    writeln!(out, "    language: {:?},", metadata.language)?;
    writeln!(out, "    script: {:?},", metadata.script)?;
    writeln!(out, "    source: {:?},", metadata.source)?;
    writeln!(out, "}};")?;
    Ok(())
}

fn out_dir_path(name: &str) -> PathBuf {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    PathBuf::from(out_dir).join(name)
}

fn open_path(path: &Path) -> File {
    let Some(parent) = path.parent() else {
        unreachable!(
            "open_path will always be called on a file with a parent directory"
        );
    };
    fs::create_dir_all(parent).expect("failed to create parent directories");
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .unwrap_or_else(|err| {
            panic!("unable to open output file {}: {err}", path.display())
        })
}
