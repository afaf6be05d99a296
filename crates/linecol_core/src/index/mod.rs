//! Append-only index of line ends.
//!
//! Each entry is the offset of a completed line's last byte, terminator
//! included. The open line after the last entry has no entry of its own;
//! its last byte is `last_seen`.
//!
//! ```text
//! bytes:      a b \n c d \r \n e
//! offsets:    0 1  2 3 4  5  6 7
//! line_ends:  [2, 6]        last_seen: 7
//! lines:      0: 0..=2   1: 3..=6   2 (open): 7..=7
//! ```

use crate::{LineColumn, PositionError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LineIndex {
    /// Strictly increasing; every entry is `<= last_seen`.
    line_ends: Vec<usize>,
    /// Offset of the last classified byte, `None` before the first one.
    last_seen: Option<usize>,
}

impl LineIndex {
    pub(crate) fn with_capacity(lines: usize) -> Self {
        LineIndex {
            line_ends: Vec::with_capacity(lines),
            last_seen: None,
        }
    }

    /// Account for a classified character of `width` bytes.
    pub(crate) fn extend(&mut self, width: usize) {
        debug_assert!(width > 0, "characters are at least one byte wide");
        self.last_seen = Some(match self.last_seen {
            Some(offset) => offset + width,
            None => width - 1,
        });
    }

    /// Record the open line as ending at the last classified byte.
    pub(crate) fn close_line(&mut self) {
        let Some(end) = self.last_seen else {
            return;
        };
        debug_assert!(
            self.line_ends.last().map_or(true, |&prev| prev < end),
            "line ends must be strictly increasing"
        );
        self.line_ends.push(end);
    }

    pub(crate) fn last_seen(&self) -> Option<usize> {
        self.last_seen
    }

    pub(crate) fn completed_lines(&self) -> usize {
        self.line_ends.len()
    }

    pub(crate) fn line_end(&self, line: usize) -> Option<usize> {
        self.line_ends.get(line).copied()
    }

    /// Offset of the first byte of `line`. Callers ensure `line` is at most
    /// the number of completed lines.
    fn line_start(&self, line: usize) -> usize {
        line.checked_sub(1)
            .and_then(|prev| self.line_ends.get(prev))
            .map_or(0, |&end| end + 1)
    }

    /// Line and column of the byte at `offset`. O(log n) in completed lines.
    pub(crate) fn line_and_column(&self, offset: usize) -> Result<LineColumn, PositionError> {
        let last_seen = self.last_seen.ok_or(PositionError::NothingConsumed)?;
        if offset > last_seen {
            return Err(PositionError::OffsetBeyondKnown { offset, last_seen });
        }

        // Lower bound: the first line whose end is at or after `offset`. An
        // exact hit is that line's final byte (its terminator), so it stays on
        // the ending line instead of starting the next one. Past every entry
        // means the open line.
        let line = self
            .line_ends
            .binary_search(&offset)
            .unwrap_or_else(|line| line);

        Ok(LineColumn::new(line, offset - self.line_start(line)))
    }

    /// Byte offset of `column` within `line`.
    pub(crate) fn offset(&self, line: usize, column: usize) -> Result<usize, PositionError> {
        let completed = self.line_ends.len();
        if line > completed {
            return Err(PositionError::LineBeyondKnown {
                line,
                last_line: completed,
            });
        }
        let last_seen = self.last_seen.ok_or(PositionError::NothingConsumed)?;

        // The open line is bounded by the last byte seen so far.
        let line_end = self.line_end(line).unwrap_or(last_seen);
        match self.line_start(line).checked_add(column) {
            Some(offset) if offset <= line_end => Ok(offset),
            _ => Err(PositionError::ColumnBeyondLine { line, column }),
        }
    }
}
