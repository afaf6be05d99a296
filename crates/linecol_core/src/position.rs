//! Line/column values and the shared query surface.

use std::fmt;

use crate::PositionError;

/// A zero-based line and byte column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    /// Create a position from zero-based coordinates.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        LineColumn { line, column }
    }

    /// The same position counted from 1, as editors display it.
    #[inline]
    pub const fn one_based(self) -> (usize, usize) {
        (self.line.saturating_add(1), self.column.saturating_add(1))
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<(usize, usize)> for LineColumn {
    fn from((line, column): (usize, usize)) -> Self {
        LineColumn { line, column }
    }
}

impl From<LineColumn> for (usize, usize) {
    fn from(pos: LineColumn) -> Self {
        (pos.line, pos.column)
    }
}

/// Offset ↔ line/column queries over bytes seen so far.
///
/// Implemented by the tracker itself and by everything that wraps one, so
/// code reporting positions can stay generic over where bytes came from.
///
/// Arguments accept any integer type. Values that are negative or do not
/// fit in `usize` are rejected with an input-validation error.
pub trait PositionLookup {
    /// Line and column of the byte at `offset`.
    fn line_and_column(&self, offset: impl TryInto<usize>) -> Result<LineColumn, PositionError>;

    /// Byte offset of `column` within `line`.
    fn offset(
        &self,
        line: impl TryInto<usize>,
        column: impl TryInto<usize>,
    ) -> Result<usize, PositionError>;

    /// Line and column of the last classified byte.
    fn current_line_and_column(&self) -> Result<LineColumn, PositionError>;

    /// Offset of the last classified byte.
    fn current_offset(&self) -> Result<usize, PositionError>;
}

/// Convert a caller-supplied coordinate, reporting `err` if it is negative
/// or too large.
pub(crate) fn to_index(value: impl TryInto<usize>, err: PositionError) -> Result<usize, PositionError> {
    value.try_into().map_err(|_| err)
}
