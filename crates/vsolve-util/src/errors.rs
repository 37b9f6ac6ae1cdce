use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all vsolve operations.
#[derive(Debug, Error, Diagnostic)]
pub enum VsolveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A constraint line could not be parsed.
    #[error("Constraint parse error on line {line}: {message}")]
    #[diagnostic(help("Constraint lines have the form `NAME OP VERSION`, e.g. `rack >= 1.2`"))]
    Parse { line: usize, message: String },

    /// Invalid or unreadable configuration file.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check ~/.vsolve/config.toml for syntax errors"))]
    Config { message: String },

    /// No index file was given and none is configured.
    #[error("No index files given")]
    #[diagnostic(help(
        "Pass one or more INDEX_FILE arguments or set `[index] default` in the config file"
    ))]
    NoIndex,

    /// Some constraint groups matched nothing in any index.
    #[error("{count} package(s) could not be resolved: {}", .packages.join(", "))]
    Unresolved { count: usize, packages: Vec<String> },
}

/// Convenience alias for `miette::Result<T>`.
pub type VsolveResult<T> = miette::Result<T>;
