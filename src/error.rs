//! Error kinds raised while converting between alignment representations.

use thiserror::Error;

/// Error raised by any conversion in this crate.
///
/// Every variant is an input-validation failure found at the point of use.
/// Nothing is retried and no partial result is returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The two rows of an alignment differ in length.
    #[error("alignment rows differ in length ({left} != {right})")]
    LengthMismatch {
        /// Length of the first row.
        left: usize,
        /// Length of the second row.
        right: usize,
    },

    /// An alignment column holds the gap marker in both rows.
    #[error("alignment column {column} is a gap in both rows")]
    GapColumn {
        /// Zero-based column index.
        column: usize,
    },

    /// A CIGAR string could not be split into `(count, op)` tokens.
    #[error("malformed CIGAR at position {position}: {reason}")]
    Format {
        /// Zero-based character position of the offending input.
        position: usize,
        /// What was wrong.
        reason: String,
    },

    /// An edit script asked for more characters than a sequence holds.
    #[error("{sequence} index {position} out of range for length {len}")]
    Boundary {
        /// Which sequence ran out: `"read"` or `"reference"`.
        sequence: &'static str,
        /// Index that was requested.
        position: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// The start offset lies past the end of the reference.
    #[error("offset {offset} past end of reference of length {len}")]
    OffsetOutOfRange {
        /// Requested offset.
        offset: usize,
        /// Length of the reference.
        len: usize,
    },

    /// An edit-script symbol is not one of the known operations.
    #[error("invalid edit operation '{symbol}' at position {position}")]
    InvalidOp {
        /// The offending symbol.
        symbol: char,
        /// Zero-based position in the edit script.
        position: usize,
    },

    /// A symbol cannot be used in an operation alphabet.
    #[error("symbol '{symbol}' cannot name an operation: {reason}")]
    InvalidSymbol {
        /// The rejected symbol.
        symbol: char,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A CIGAR run is longer than [`MAX_RUN_LEN`](crate::cigar::MAX_RUN_LEN).
    #[error("run {index} of length {len} exceeds maximum {max}")]
    RunTooLong {
        /// Zero-based index of the run.
        index: usize,
        /// Requested length.
        len: usize,
        /// Largest accepted length.
        max: usize,
    },
}

/// A character that is not one of the default operation symbols.
///
/// Carries no position. Callers parsing a script attach one with
/// [`EditError::InvalidOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown edit operation '{0}'")]
pub struct UnknownOp(pub char);

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EditError>;
