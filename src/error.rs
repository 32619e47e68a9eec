//! Error types for the sequence coders.

use thiserror::Error;

/// Error variants for encode and decode calls.
///
/// Only validation failures are reported here. A decode that runs out of
/// bits, dictionary entries or probability mass returns a shorter sequence
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sequence handed to an encoder was empty.
    #[error("cannot encode an empty sequence")]
    EmptyInput,

    /// Normalization left no symbols to build a model from.
    #[error("no valid symbols found in sequence")]
    NoSymbols,

    /// The arithmetic decoder was given an empty symbol set.
    #[error("cannot decode with an empty symbol set")]
    EmptySymbolSet,

    /// The LZ78 decoder was given an empty alphabet.
    #[error("cannot decode with an empty alphabet")]
    EmptyAlphabet,

    /// The sequence exceeds the length the coder is configured to accept.
    #[error("sequence of {len} tokens exceeds the limit of {max}")]
    SequenceTooLong {
        /// Number of tokens supplied.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// A specialized Result type for coder operations.
pub type Result<T> = std::result::Result<T, Error>;
