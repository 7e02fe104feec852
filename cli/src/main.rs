#![allow(missing_docs)]

use std::process::ExitCode;

use anyhow::{Context, bail};
use bip39_words::ENGLISH;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use env_logger::Env;
use log::{debug, error, info};

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why}");
            ExitCode::FAILURE
        },
    }
}

// Default to debug logs on debug builds, warnings otherwise
#[cfg(debug_assertions)]
type LookupVerbosity = Verbosity<clap_verbosity_flag::DebugLevel>;
#[cfg(not(debug_assertions))]
type LookupVerbosity = Verbosity<clap_verbosity_flag::WarnLevel>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The words (or indices, with --reverse) to look up
    #[arg(required = true)]
    words: Vec<String>,

    /// Treat the arguments as canonical indices and print their words
    #[arg(short, long, conflicts_with = "mnemonic")]
    reverse: bool,

    /// Treat the arguments as a single mnemonic phrase and print its indices
    #[arg(short, long)]
    mnemonic: bool,

    #[command(flatten)]
    verbosity: LookupVerbosity,
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();
    debug_assert!(!args.words.is_empty());

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("BIP39_LOG"))
        .init();

    info!(
        "using the {} word list ({} words)",
        ENGLISH.name(),
        ENGLISH.len(),
    );

    if args.mnemonic {
        return print_mnemonic_indices(&args.words);
    }
    if args.reverse {
        return print_words(&args.words);
    }

    let mut missing = 0;
    for word in &args.words {
        match ENGLISH.lookup(word) {
            Some(entry) => println!("{word}: {}", entry.index()),
            None => {
                println!("{word}: not found");
                missing += 1;
            },
        }
    }
    if missing > 0 {
        bail!("{missing} word(s) not in the {} word list", ENGLISH.name());
    }
    Ok(())
}

fn print_mnemonic_indices(words: &[String]) -> anyhow::Result<()> {
    let phrase = words.join(" ");
    let indices = ENGLISH
        .mnemonic_to_indices(&phrase)
        .context("could not convert mnemonic")?;
    debug!("mnemonic has {} words", indices.len());
    let indices = indices
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{indices}");
    Ok(())
}

fn print_words(indices: &[String]) -> anyhow::Result<()> {
    let indices = indices
        .iter()
        .map(|index| {
            index
                .parse::<u16>()
                .with_context(|| format!("{index:?} is not a valid index"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let mnemonic = ENGLISH
        .indices_to_mnemonic(&indices)
        .context("could not convert indices")?;
    println!("{mnemonic}");
    Ok(())
}
