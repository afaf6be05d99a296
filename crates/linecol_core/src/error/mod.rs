//! Errors raised by position queries and by byte classification.

use std::fmt;
use std::io;

use smallvec::SmallVec;

use crate::decode::MAX_CHAR_WIDTH;

/// A query referenced a position that is malformed or not yet observed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The offset is negative or does not fit in `usize`.
    #[error("offset must be a non-negative byte index")]
    InvalidOffset,
    /// The line is negative or does not fit in `usize`.
    #[error("line must be a non-negative index; the first line is 0")]
    InvalidLine,
    /// The column is negative or does not fit in `usize`.
    #[error("column must be a non-negative index; the first column is 0")]
    InvalidColumn,
    /// No byte has been classified yet.
    #[error("no bytes have been consumed yet")]
    NothingConsumed,
    /// The offset lies past the last classified byte.
    #[error("offset {offset} is beyond the last seen byte {last_seen}")]
    OffsetBeyondKnown { offset: usize, last_seen: usize },
    /// The line has not been started yet.
    #[error("line {line} is beyond the last seen line {last_line}")]
    LineBeyondKnown { line: usize, last_line: usize },
    /// The column runs past the known end of its line.
    #[error("column {column} is beyond the end of line {line}")]
    ColumnBeyondLine { line: usize, column: usize },
}

impl PositionError {
    /// Whether the query itself was malformed (negative or oversized input).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidOffset | Self::InvalidLine | Self::InvalidColumn
        )
    }

    /// Whether consuming more bytes could make the same query succeed.
    pub fn is_beyond_known(&self) -> bool {
        !self.is_invalid_input()
    }
}

/// Bytes could not be decoded as UTF-8.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The undecodable bytes are held back; the tracker keeps working and a
    /// later call may supply more bytes.
    #[error("cannot decode bytes {head} as UTF-8 after classifying {classified} bytes")]
    Transient { head: ByteHead, classified: usize },
    /// The held-back bytes outgrew any valid character. The tracker rejects
    /// all further input; recorded positions stay queryable.
    #[error("cannot decode bytes {head} as UTF-8; position tracking stopped")]
    Fatal { head: ByteHead },
}

impl DecodeError {
    /// Whether the tracker that raised this error is permanently stopped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }

    /// The first undecodable bytes.
    pub fn head(&self) -> &ByteHead {
        match self {
            Self::Transient { head, .. } | Self::Fatal { head } => head,
        }
    }
}

impl From<DecodeError> for io::Error {
    fn from(err: DecodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Up to [`MAX_CHAR_WIDTH`] leading bytes of an undecodable sequence.
///
/// Displays as hex in angle brackets, e.g. `<ff41>`, or `<empty>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteHead(SmallVec<[u8; MAX_CHAR_WIDTH]>);

impl ByteHead {
    /// Capture the first bytes of `bytes`.
    pub fn new(bytes: &[u8]) -> Self {
        ByteHead(bytes.iter().take(MAX_CHAR_WIDTH).copied().collect())
    }

    /// The captured bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ByteHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<empty>");
        }
        f.write_str("<")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(">")
    }
}

#[cfg(test)]
mod tests;
