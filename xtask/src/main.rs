#![allow(missing_docs)]

use std::error::Error;

use pico_args::Arguments;

mod hash_params;
mod search;

type Result<T = (), E = Box<dyn Error>> = std::result::Result<T, E>;

fn main() -> Result {
    let mut args = Arguments::from_env();

    match args.subcommand()?.ok_or("missing task")?.as_str() {
        "hash-params" => hash_params::main(args),
        unknown => Err(format!("unknown task: {unknown}").into()),
    }
}
