//! Incremental position tracker.
//!
//! Bytes arrive in chunks of any size. A chunk may end inside a multi-byte
//! character (the prefix is carried to the next call) or between the two
//! halves of a `\r\n` pair (the newline state carries over). Neither changes
//! the resulting index: feeding a text whole or one byte at a time yields
//! identical trackers.
//!
//! # Decode Failures
//!
//! An undecodable sequence is held back as pending bytes and reported as a
//! [`DecodeError::Transient`]. Once the held-back bytes outgrow the widest
//! valid character ([`MAX_CHAR_WIDTH`]) they can never resolve, and the
//! tracker stops with [`DecodeError::Fatal`]. A stopped tracker rejects all
//! input but keeps answering queries about what it already recorded.

use smallvec::SmallVec;

use crate::decode::{decode_char, Decoded, MAX_CHAR_WIDTH};
use crate::index::LineIndex;
use crate::newline::{LineEffect, NewlineState};
use crate::position::to_index;
use crate::{ByteHead, DecodeError, LineColumn, PositionError, PositionLookup, TrackerConfig};

/// Maps offsets of a byte stream to lines and columns as the bytes arrive.
///
/// Holds only line-end offsets, never the text. Mutation needs `&mut self`;
/// use [`SyncTracker`](crate::SyncTracker) to share one across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionTracker {
    index: LineIndex,
    /// Prefix of a character split across chunks, or undecodable bytes
    /// awaiting more input. Never longer than [`MAX_CHAR_WIDTH`].
    pending: SmallVec<[u8; MAX_CHAR_WIDTH]>,
    newline: NewlineState,
    fatal: Option<DecodeError>,
}

impl PositionTracker {
    /// Create an empty tracker with default settings.
    pub fn new() -> Self {
        Self::with_config(&TrackerConfig::default())
    }

    /// Create an empty tracker.
    pub fn with_config(config: &TrackerConfig) -> Self {
        PositionTracker {
            index: LineIndex::with_capacity(config.initial_line_capacity),
            pending: SmallVec::new(),
            newline: NewlineState::Clear,
            fatal: None,
        }
    }

    /// Classify the next chunk of the stream.
    ///
    /// Returns how many bytes of `bytes` were classified, never more than
    /// `bytes.len()`. When a character carried over from the previous chunk
    /// completes, only its bytes from this chunk count. A trailing partial
    /// character is not counted.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Transient`] when undecodable bytes are held back;
    ///   bytes before them were classified and the tracker stays usable.
    /// - [`DecodeError::Fatal`] when held-back bytes can no longer form a
    ///   character, and on every call after that.
    #[tracing::instrument(level = "trace", skip_all, fields(len = bytes.len()))]
    pub fn consume(&mut self, bytes: &[u8]) -> Result<usize, DecodeError> {
        if let Some(err) = &self.fatal {
            return Err(err.clone());
        }

        let mut rest = bytes;
        let mut classified = 0;

        if !self.pending.is_empty() {
            // A character can only need MAX_CHAR_WIDTH more bytes than it has.
            let carried = self.pending.len();
            let window: SmallVec<[u8; 2 * MAX_CHAR_WIDTH]> = self
                .pending
                .iter()
                .chain(rest.iter().take(MAX_CHAR_WIDTH))
                .copied()
                .collect();

            match decode_char(&window) {
                Decoded::Char { ch, width } => {
                    self.pending.clear();
                    self.classify(ch, width);
                    let completed = width - carried;
                    classified += completed;
                    rest = &rest[completed..];
                }
                Decoded::Incomplete => {
                    // The window holds all of `rest`: it ran out before the
                    // character did.
                    self.pending = window.into_iter().collect();
                    return Ok(0);
                }
                Decoded::Invalid => {
                    let tail: SmallVec<[u8; 2 * MAX_CHAR_WIDTH]> =
                        self.pending.iter().chain(rest).copied().collect();
                    return Err(self.hold_back(&tail, 0));
                }
            }
        }

        while !rest.is_empty() {
            match decode_char(rest) {
                Decoded::Char { ch, width } => {
                    self.classify(ch, width);
                    classified += width;
                    rest = &rest[width..];
                }
                Decoded::Incomplete => {
                    self.pending.extend_from_slice(rest);
                    return Ok(classified);
                }
                Decoded::Invalid => return Err(self.hold_back(rest, classified)),
            }
        }

        Ok(classified)
    }

    /// Apply one decoded character to the newline state and the index.
    fn classify(&mut self, ch: char, width: usize) {
        let (next, effect) = self.newline.step(ch);
        self.newline = next;
        match effect {
            LineEffect::Extend => self.index.extend(width),
            LineEffect::CloseThenExtend => {
                self.index.close_line();
                self.index.extend(width);
            }
            LineEffect::ExtendThenClose => {
                self.index.extend(width);
                self.index.close_line();
            }
            LineEffect::CloseExtendClose => {
                self.index.close_line();
                self.index.extend(width);
                self.index.close_line();
            }
        }
    }

    /// Keep an undecodable tail for the next call, or stop for good once it
    /// is longer than any character.
    fn hold_back(&mut self, tail: &[u8], classified: usize) -> DecodeError {
        let head = ByteHead::new(tail);
        self.pending.clear();

        if tail.len() > MAX_CHAR_WIDTH {
            tracing::warn!(
                %head,
                last_seen = ?self.index.last_seen(),
                "undecodable bytes never resolved; position tracking stopped"
            );
            let err = DecodeError::Fatal { head };
            self.fatal = Some(err.clone());
            return err;
        }

        tracing::debug!(%head, classified, "holding undecodable bytes for the next chunk");
        self.pending.extend_from_slice(tail);
        DecodeError::Transient { head, classified }
    }

    /// Line and column of the byte at `offset`.
    pub fn line_and_column(&self, offset: impl TryInto<usize>) -> Result<LineColumn, PositionError> {
        let offset = to_index(offset, PositionError::InvalidOffset)?;
        self.index.line_and_column(offset)
    }

    /// Byte offset of `column` within `line`.
    pub fn offset(
        &self,
        line: impl TryInto<usize>,
        column: impl TryInto<usize>,
    ) -> Result<usize, PositionError> {
        let line = to_index(line, PositionError::InvalidLine)?;
        let column = to_index(column, PositionError::InvalidColumn)?;
        self.index.offset(line, column)
    }

    /// Line and column of the last classified byte.
    pub fn current_line_and_column(&self) -> Result<LineColumn, PositionError> {
        let offset = self.current_offset()?;
        self.index.line_and_column(offset)
    }

    /// Offset of the last classified byte.
    pub fn current_offset(&self) -> Result<usize, PositionError> {
        self.index.last_seen().ok_or(PositionError::NothingConsumed)
    }

    /// Number of lines whose terminator has been classified.
    pub fn completed_lines(&self) -> usize {
        self.index.completed_lines()
    }

    /// Offset of the last byte of a completed line, terminator included.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        self.index.line_end(line)
    }

    /// Bytes held back until more input arrives.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// The error that stopped this tracker, if any.
    pub fn fatal_error(&self) -> Option<&DecodeError> {
        self.fatal.as_ref()
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionLookup for PositionTracker {
    fn line_and_column(&self, offset: impl TryInto<usize>) -> Result<LineColumn, PositionError> {
        PositionTracker::line_and_column(self, offset)
    }

    fn offset(
        &self,
        line: impl TryInto<usize>,
        column: impl TryInto<usize>,
    ) -> Result<usize, PositionError> {
        PositionTracker::offset(self, line, column)
    }

    fn current_line_and_column(&self) -> Result<LineColumn, PositionError> {
        PositionTracker::current_line_and_column(self)
    }

    fn current_offset(&self) -> Result<usize, PositionError> {
        PositionTracker::current_offset(self)
    }
}
