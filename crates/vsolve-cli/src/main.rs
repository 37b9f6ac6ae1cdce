//! vsolve CLI binary.
//!
//! This is the entry point for the `vsolve` command-line tool. It initializes
//! logging via `tracing` (on stderr, so stdout carries only results), parses
//! arguments with `clap`, and runs the resolution.

mod cli;
mod solve;

use miette::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = cli::parse();
    solve::exec(args)
}
