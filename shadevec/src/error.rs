//! Error types for `shadevec`

use std::num::ParseIntError;

use thiserror::Error;

/// The error type for `shadevec` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from reading the prompt input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not a valid base-16 number.
    #[error("invalid hex code {code:?}: {source}")]
    InvalidHexCode {
        /// The rejected input, after trimming.
        code: String,
        /// The underlying integer parse error.
        source: ParseIntError,
    },
}

/// A specialized Result type for `shadevec` operations.
pub type Result<T> = std::result::Result<T, Error>;
