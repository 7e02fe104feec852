use std::{fs, path::PathBuf, time::Instant};

use pico_args::Arguments;
use proc_macro2::Literal;
use quote::quote;
use rayon::prelude::*;

use crate::{
    Result,
    search::{HashParams, POSITION_OFFSETS, search},
};

const DEFAULT_SEEDS: u64 = 64;
// The sentinel `max_hash + 1` has to fit in a u16 ASSO entry
const DEFAULT_MAX_HASH: usize = u16::MAX as usize - 1;

pub fn main(mut args: Arguments) -> Result {
    let seeds = args
        .opt_value_from_str("--seeds")?
        .unwrap_or(DEFAULT_SEEDS);
    let max_hash = args
        .opt_value_from_str("--max-hash")?
        .unwrap_or(DEFAULT_MAX_HASH);
    let crate_dir =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../bip39-words");
    let output = args
        .opt_value_from_os_str("--output", |path| {
            Ok::<_, String>(PathBuf::from(path))
        })?
        .unwrap_or_else(|| crate_dir.join("hash_params.rs"));
    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}").into());
    }

    let word_list_path = crate_dir.join("data/english.txt");
    let word_list = fs::read_to_string(&word_list_path).map_err(|err| {
        format!("failed to read {}: {err}", word_list_path.display())
    })?;
    let words = word_list
        .split_whitespace()
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>();

    let start = Instant::now();
    let params = best_params(&words, seeds, max_hash).ok_or_else(|| {
        format!(
            "no seed in 0..{seeds} fit {} words under {max_hash}, try more \
             --seeds or a larger --max-hash",
            words.len(),
        )
    })?;
    println!(
        "seed {} fit {} words with max hash {} in {:?}",
        params.seed,
        words.len(),
        params.max_hash_value,
        start.elapsed(),
    );

    fs::write(&output, render(&params)?).map_err(|err| {
        format!("failed to write {}: {err}", output.display())
    })?;
    println!("wrote {}", output.display());
    Ok(())
}

/// Runs one search per seed and keeps the one with the smallest maximum hash.
fn best_params(
    words: &[&str],
    seeds: u64,
    max_hash: usize,
) -> Option<HashParams> {
    (0..seeds)
        .into_par_iter()
        .filter_map(|seed| search(words, seed, max_hash))
        .min_by_key(|params| (params.max_hash_value, params.seed))
}

fn render(params: &HashParams) -> Result<String> {
    let min_word_length = Literal::usize_unsuffixed(params.min_word_length);
    let max_word_length = Literal::usize_unsuffixed(params.max_word_length);
    let max_hash_value = Literal::usize_unsuffixed(params.max_hash_value);
    let offset_count = Literal::usize_unsuffixed(POSITION_OFFSETS.len());
    let offsets = POSITION_OFFSETS
        .iter()
        .copied()
        .map(Literal::usize_unsuffixed);
    let asso_len = Literal::usize_unsuffixed(params.asso_values.len());
    let asso_values = params
        .asso_values
        .iter()
        .copied()
        .map(Literal::u16_unsuffixed);

    let tokens = quote! {
        #[doc = " Length of the shortest word in the table."]
        pub const MIN_WORD_LENGTH: usize = #min_word_length;
        #[doc = " Length of the longest word in the table."]
        pub const MAX_WORD_LENGTH: usize = #max_word_length;
        #[doc = " Largest hash value produced by a word in the table."]
        pub const MAX_HASH_VALUE: usize = #max_hash_value;
        #[doc = " Offset into [`ASSO_VALUES`] for each of the hashed byte positions."]
        pub const POSITION_OFFSETS: [usize; #offset_count] = [#(#offsets),*];
        #[doc = " Associated value for each offset byte."]
        pub const ASSO_VALUES: [u16; #asso_len] = [#(#asso_values),*];
    };
    let file = syn::parse2::<syn::File>(tokens)?;
    Ok(format!(
        "// @generated by `cargo run -p xtask -- hash-params`. Do not edit by \
         hand.\n\n{}",
        prettyplease::unparse(&file),
    ))
}
