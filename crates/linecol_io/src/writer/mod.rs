//! Position-tracking writer.

use std::io::{self, Write};

use linecol_core::{
    DecodeError, LineColumn, PositionError, PositionLookup, PositionTracker, TrackerConfig,
};

use crate::relay::Relay;

/// Writer middleware that tracks the position of every byte written.
///
/// Only bytes the wrapped writer accepted are tracked, so short writes and
/// retries never count a byte twice.
#[derive(Debug)]
pub struct TrackingWriter<W> {
    inner: W,
    relay: Relay,
}

impl<W: Write> TrackingWriter<W> {
    /// Wrap `inner` with a fresh tracker.
    pub fn new(inner: W) -> Self {
        Self::with_config(inner, &TrackerConfig::default())
    }

    /// Wrap `inner` with a fresh tracker built from `config`.
    pub fn with_config(inner: W, config: &TrackerConfig) -> Self {
        TrackingWriter {
            inner,
            relay: Relay::new(config),
        }
    }
}

impl<W> TrackingWriter<W> {
    /// The wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// The wrapped writer. Writing to it directly skips tracking.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap, discarding the tracker.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// The tracker fed by this writer.
    pub fn tracker(&self) -> &PositionTracker {
        self.relay.tracker()
    }

    /// The error that stopped tracking, if any.
    pub fn tracker_error(&self) -> Option<&DecodeError> {
        self.relay.tracker().fatal_error()
    }
}

impl<W: Write> Write for TrackingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.relay.check()?;
        let n = self.inner.write(buf)?;
        self.relay.forward(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W> PositionLookup for TrackingWriter<W> {
    fn line_and_column(&self, offset: impl TryInto<usize>) -> Result<LineColumn, PositionError> {
        self.tracker().line_and_column(offset)
    }

    fn offset(
        &self,
        line: impl TryInto<usize>,
        column: impl TryInto<usize>,
    ) -> Result<usize, PositionError> {
        self.tracker().offset(line, column)
    }

    fn current_line_and_column(&self) -> Result<LineColumn, PositionError> {
        self.tracker().current_line_and_column()
    }

    fn current_offset(&self) -> Result<usize, PositionError> {
        self.tracker().current_offset()
    }
}

#[cfg(test)]
mod tests;
