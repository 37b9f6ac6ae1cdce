//! CLI argument definitions for vsolve.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "vsolve",
    version,
    about = "Resolve package version constraints against sorted package indexes",
    long_about = "Reads `NAME OP VERSION` constraint lines (sorted by NAME) from standard input \
                  and scans each INDEX_FILE (lines of `NAME VERSION ...`, sorted by NAME) in \
                  order. Prints `NAME VERSION` for every match and `NAME -` for every package \
                  no index could satisfy, exiting non-zero in that case.\n\n\
                  Operators: <, <=, =, >=, > and ~> (compatible release)."
)]
pub struct Cli {
    /// Index files to scan, in order. Defaults to `[index] default` from the config
    #[arg(value_name = "INDEX_FILE")]
    pub indexes: Vec<PathBuf>,

    /// Read constraints from FILE instead of standard input
    #[arg(short, long, value_name = "FILE")]
    pub constraints: Option<PathBuf>,

    /// Print every matching index line, not just the first per package
    #[arg(short, long)]
    pub all: bool,

    /// Fail on the first malformed constraint line instead of ignoring the rest
    #[arg(long)]
    pub strict: bool,

    /// Config file to use instead of ~/.vsolve/config.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
