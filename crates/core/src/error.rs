//! Error types for cuboid construction, formatting and parsing.

use thiserror::Error;

/// Errors raised by [`Cuboid`](crate::Cuboid) operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CuboidError {
    /// An edge converted to meters fell outside the open interval (0, 10).
    #[error("edge {edge} is out of range: {meters} m is not in (0, 10)")]
    OutOfRange {
        /// Position of the offending edge (0 = A, 1 = B, 2 = C)
        edge: usize,
        /// The edge converted to meters, before truncation
        meters: f64,
    },

    /// Text could not be formatted or parsed.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Indexed edge access outside {0, 1, 2}.
    #[error("edge index {index} is out of range (expected 0, 1 or 2)")]
    IndexOutOfRange { index: usize },
}

/// Reasons a format specifier or a textual cuboid was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown format specifier '{0}' (expected \"m\", \"cm\" or \"mm\")")]
    UnknownSpecifier(String),

    #[error("no unit token (\"m\", \"cm\" or \"mm\") found")]
    MissingUnit,

    #[error("unknown unit '{0}' (expected \"m\", \"cm\" or \"mm\")")]
    UnknownUnit(String),

    #[error("expected three edge values, found {found}")]
    MissingEdges { found: usize },

    /// Not produced by [`Cuboid::parse`](crate::Cuboid::parse), whose
    /// number tokens always convert
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}
