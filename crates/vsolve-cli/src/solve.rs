use std::io::{self, BufWriter, Write};
use std::path::Path;

use miette::Result;

use vsolve_core::config::GlobalConfig;
use vsolve_core::parse::{parse_constraints, ParsedConstraints};
use vsolve_resolver::resolver::Resolver;
use vsolve_resolver::scan::{ScanMode, WriteSink};
use vsolve_util::errors::VsolveError;
use vsolve_util::fs::open_reader;

use crate::cli::Cli;

pub fn exec(cli: Cli) -> Result<()> {
    let config = GlobalConfig::load(cli.config.as_deref())?;
    let strict = cli.strict || config.resolve.strict;
    let mode = if cli.all || config.resolve.all_matches {
        ScanMode::AllMatches
    } else {
        ScanMode::FirstMatch
    };

    let indexes = if cli.indexes.is_empty() {
        config.default_indexes()
    } else {
        cli.indexes
    };
    if indexes.is_empty() {
        return Err(VsolveError::NoIndex.into());
    }

    let parsed = read_constraints(cli.constraints.as_deref())?;
    let list = if strict {
        parsed.into_strict().map_err(VsolveError::from)?
    } else {
        parsed.into_lenient()
    };
    if !list.is_sorted() {
        tracing::warn!("constraints are not sorted by package name; some matches may be missed");
    }

    let mut sink = WriteSink(BufWriter::new(io::stdout().lock()));
    let report = Resolver::new(list, mode)
        .verbose(cli.verbose)
        .resolve(&indexes, &mut sink)?;

    write!(sink.0, "{report}").map_err(VsolveError::Io)?;
    sink.0.flush().map_err(VsolveError::Io)?;

    report.into_result()?;
    Ok(())
}

fn read_constraints(path: Option<&Path>) -> Result<ParsedConstraints> {
    let parsed = match path {
        Some(path) => parse_constraints(open_reader(path).map_err(VsolveError::Io)?),
        None => parse_constraints(io::stdin().lock()),
    };
    Ok(parsed)
}
