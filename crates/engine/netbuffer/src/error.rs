//! Buffer error types.

use thiserror::Error;

/// Errors returned by buffer reads, writes and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A read asked for more bytes than remain before the end of the buffer.
    #[error("buffer underflow: requested {requested} bytes, {remaining} remaining")]
    BufferUnderflow { requested: usize, remaining: usize },

    /// A length-prefixed string could not be decoded.
    #[error("malformed string: {reason}")]
    MalformedString { reason: String },

    /// A byte block is longer than its length prefix can describe.
    #[error("oversized write: {len} bytes exceeds the maximum of {max}")]
    OversizedWrite { len: usize, max: usize },

    /// Character does not fit in a single wire byte.
    #[error("character {0:?} is outside the single-byte range")]
    CharOutOfRange(char),

    /// Byte range is inverted or extends past the source slice.
    #[error("invalid range {start}..{end} for {len} bytes")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Configuration value could not be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;
