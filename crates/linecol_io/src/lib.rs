//! Linecol I/O - Position-Tracking Stream Adapters
//!
//! Wraps a [`Read`](std::io::Read) or [`Write`](std::io::Write) so every
//! byte that passes through is also fed, exactly once and in order, to a
//! [`PositionTracker`]. The adapters answer the same [`PositionLookup`]
//! queries as the tracker.
//!
//! # Errors
//!
//! I/O errors from the wrapped stream are returned unchanged. A tracker
//! error never hides transferred bytes: the call that moved them returns
//! `Ok(n)`, and the tracker error is returned as
//! [`InvalidData`](std::io::ErrorKind::InvalidData) by the next call. Once
//! the tracker is stopped for good, every call fails with its error.
//!
//! # Example
//!
//! ```
//! use std::io::Read;
//! use linecol_io::{LineColumn, PositionLookup, TrackingReader};
//!
//! let source = "Hello!\nThis a string\r\nwith mixed and doubled\n\nnewlines.";
//! let mut reader = TrackingReader::new(source.as_bytes());
//! let mut buf = [0u8; 60];
//! let n = reader.read(&mut buf)?;
//! assert_eq!(n, source.len());
//!
//! let last = reader.current_offset()?;
//! assert_eq!(last, 54);
//! assert_eq!(reader.current_line_and_column()?, LineColumn::new(4, 8));
//! let middle = reader.line_and_column(last / 2)?;
//! assert_eq!(middle, LineColumn::new(2, 5));
//! assert_eq!(reader.offset(middle.line, middle.column)?, 27);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod read_write;
mod reader;
mod relay;
mod writer;

pub use linecol_core::{
    DecodeError, LineColumn, PositionError, PositionLookup, PositionTracker, TrackerConfig,
};
pub use read_write::TrackingReadWriter;
pub use reader::TrackingReader;
pub use writer::TrackingWriter;
