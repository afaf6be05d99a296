//! Byte forwarding shared by the reader and writer adapters.

use std::io;

use linecol_core::{DecodeError, PositionTracker, TrackerConfig};

/// A tracker plus the tracker error waiting to be reported.
///
/// `io::Read::read` and `io::Write::write` cannot return a byte count and an
/// error together. When bytes moved but the tracker failed, the count wins
/// and the error is held here until the next call.
#[derive(Debug)]
pub(crate) struct Relay {
    tracker: PositionTracker,
    deferred: Option<DecodeError>,
}

impl Relay {
    pub(crate) fn new(config: &TrackerConfig) -> Self {
        Relay {
            tracker: PositionTracker::with_config(config),
            deferred: None,
        }
    }

    /// Fail before a transfer if a tracker error is owed to the caller or
    /// the tracker has stopped.
    pub(crate) fn check(&mut self) -> io::Result<()> {
        if let Some(err) = self.deferred.take() {
            tracing::debug!(%err, "reporting deferred tracker error");
            return Err(err.into());
        }
        match self.tracker.fatal_error() {
            Some(err) => Err(err.clone().into()),
            None => Ok(()),
        }
    }

    /// Feed the bytes a transfer actually moved.
    pub(crate) fn forward(&mut self, transferred: &[u8]) {
        if transferred.is_empty() {
            return;
        }
        if let Err(err) = self.tracker.consume(transferred) {
            tracing::debug!(%err, len = transferred.len(), "deferring tracker error");
            self.deferred = Some(err);
        }
    }

    pub(crate) fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }
}
