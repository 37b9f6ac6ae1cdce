//! Core data types for vsolve.
//!
//! This crate defines the constraint model the resolver works on: natural
//! version ordering, comparison operators, predicates grouped per package,
//! the constraint list parser with compatible-release expansion, and the
//! global configuration.
//!
//! This crate is intentionally free of index scanning and process I/O.

/// Longest package name accepted on a constraint line, in bytes.
pub const MAX_PACKAGE_LEN: usize = 99;

/// Longest version accepted on a constraint line, in bytes.
pub const MAX_VERSION_LEN: usize = 49;

pub mod config;
pub mod constraint;
pub mod operator;
pub mod parse;
pub mod version;
