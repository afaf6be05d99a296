//! Lock-guarded tracker for multi-threaded access.
//!
//! [`PositionTracker`] itself is single-writer and lock-free. When one
//! thread feeds bytes while others query positions, wrap it in a
//! [`SyncTracker`]: every call holds the lock for its full duration, so a
//! query never observes a half-classified chunk.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    DecodeError, LineColumn, PositionError, PositionLookup, PositionTracker, TrackerConfig,
};

/// A [`PositionTracker`] behind a mutex.
#[derive(Debug, Default)]
pub struct SyncTracker {
    inner: Mutex<PositionTracker>,
}

/// Sync tracker shared between threads.
pub type SharedTracker = Arc<SyncTracker>;

impl SyncTracker {
    /// Create an empty tracker with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tracker.
    pub fn with_config(config: &TrackerConfig) -> Self {
        Self::from(PositionTracker::with_config(config))
    }

    /// Create a tracker ready to be shared.
    pub fn shared() -> SharedTracker {
        Arc::new(Self::new())
    }

    /// Classify the next chunk. See [`PositionTracker::consume`].
    pub fn consume(&self, bytes: &[u8]) -> Result<usize, DecodeError> {
        self.inner.lock().consume(bytes)
    }

    /// Run several reads against one consistent state.
    pub fn with_tracker<T>(&self, f: impl FnOnce(&PositionTracker) -> T) -> T {
        f(&*self.inner.lock())
    }

    /// Number of lines whose terminator has been classified.
    pub fn completed_lines(&self) -> usize {
        self.inner.lock().completed_lines()
    }

    /// The error that stopped this tracker, if any.
    pub fn fatal_error(&self) -> Option<DecodeError> {
        self.inner.lock().fatal_error().cloned()
    }

    /// Take the tracker back out of the lock.
    pub fn into_inner(self) -> PositionTracker {
        self.inner.into_inner()
    }
}

impl From<PositionTracker> for SyncTracker {
    fn from(tracker: PositionTracker) -> Self {
        SyncTracker {
            inner: Mutex::new(tracker),
        }
    }
}

impl PositionLookup for SyncTracker {
    fn line_and_column(&self, offset: impl TryInto<usize>) -> Result<LineColumn, PositionError> {
        self.inner.lock().line_and_column(offset)
    }

    fn offset(
        &self,
        line: impl TryInto<usize>,
        column: impl TryInto<usize>,
    ) -> Result<usize, PositionError> {
        self.inner.lock().offset(line, column)
    }

    fn current_line_and_column(&self) -> Result<LineColumn, PositionError> {
        self.inner.lock().current_line_and_column()
    }

    fn current_offset(&self) -> Result<usize, PositionError> {
        self.inner.lock().current_offset()
    }
}
