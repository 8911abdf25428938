//! Error types for seed parsing and run setup.
//!
//! Nothing here is retried or defaulted: every computation in this crate is
//! deterministic, so an error is surfaced to the caller as-is and the run
//! stops before any grid scan starts.

use std::num::ParseIntError;

use thiserror::Error;

/// A single seed line did not match the `<int>, <int>` grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `<x>, <y>`, got {0:?}")]
    MissingSeparator(String),
    #[error("invalid number {text:?}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Top-level error for building a seed set or validating a run.
#[derive(Debug, Error)]
pub enum ChronalError {
    /// Malformed seed on the given 1-based input line.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// Bounds are undefined for zero seeds.
    #[error("no seeds supplied")]
    EmptyInput,

    /// The safe-region limit must be positive.
    #[error("safe-region limit must be positive, got {0}")]
    InvalidLimit(u64),

    /// Run configuration could not be decoded.
    #[error("invalid run configuration: {0}")]
    Config(#[from] serde_json::Error),
}
