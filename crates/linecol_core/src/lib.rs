//! Linecol Core - Incremental Line/Column Tracking
//!
//! Maps byte offsets in a streamed UTF-8 text to zero-based (line, column)
//! positions and back, while only keeping a compact index of line ends.
//! The bytes themselves are never stored.
//!
//! - [`PositionTracker`] consumes chunks of any size, including chunks that
//!   split a multi-byte character or a `\r\n` pair.
//! - [`SyncTracker`] puts a tracker behind a lock for multi-threaded use.
//! - [`PositionLookup`] is the query surface shared by trackers and the
//!   stream adapters in `linecol_io`.
//!
//! # Conventions
//!
//! - Lines and columns start at 0; columns count bytes.
//! - A terminator (`\n`, `\r`, `\r\n`, `\n\r`) is the last column(s) of the
//!   line it ends.
//! - Repeated terminators (`\r\r`, `\n\n`) end one line each.
//!
//! # Example
//!
//! ```
//! use linecol_core::{LineColumn, PositionTracker};
//!
//! let mut tracker = PositionTracker::new();
//! tracker.consume(b"Hello!\nThis a string\r\nwith mixed and doubled\n\nnewlines.")?;
//!
//! assert_eq!(tracker.current_offset()?, 54);
//! assert_eq!(tracker.current_line_and_column()?, LineColumn::new(4, 8));
//! assert_eq!(tracker.line_and_column(27)?, LineColumn::new(2, 5));
//! assert_eq!(tracker.offset(2, 5)?, 27);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod decode;
mod error;
mod index;
mod newline;
mod position;
mod sync;
mod tracker;

pub use config::TrackerConfig;
pub use decode::MAX_CHAR_WIDTH;
pub use error::{ByteHead, DecodeError, PositionError};
pub use position::{LineColumn, PositionLookup};
pub use sync::{SharedTracker, SyncTracker};
pub use tracker::PositionTracker;
