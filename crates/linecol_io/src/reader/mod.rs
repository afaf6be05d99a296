//! Position-tracking reader.

use std::io::{self, Read};

use linecol_core::{
    DecodeError, LineColumn, PositionError, PositionLookup, PositionTracker, TrackerConfig,
};

use crate::relay::Relay;

/// Reader middleware that tracks the position of every byte read.
///
/// Bytes read through [`get_mut`](Self::get_mut) bypass the tracker.
#[derive(Debug)]
pub struct TrackingReader<R> {
    inner: R,
    relay: Relay,
}

impl<R: Read> TrackingReader<R> {
    /// Wrap `inner` with a fresh tracker.
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, &TrackerConfig::default())
    }

    /// Wrap `inner` with a fresh tracker built from `config`.
    pub fn with_config(inner: R, config: &TrackerConfig) -> Self {
        TrackingReader {
            inner,
            relay: Relay::new(config),
        }
    }
}

impl<R> TrackingReader<R> {
    /// The wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// The wrapped reader. Reading from it directly skips tracking.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap, discarding the tracker.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// The tracker fed by this reader.
    pub fn tracker(&self) -> &PositionTracker {
        self.relay.tracker()
    }

    /// The error that stopped tracking, if any.
    pub fn tracker_error(&self) -> Option<&DecodeError> {
        self.relay.tracker().fatal_error()
    }
}

impl<R: Read> Read for TrackingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.relay.check()?;
        let n = self.inner.read(buf)?;
        self.relay.forward(&buf[..n]);
        Ok(n)
    }
}

impl<R> PositionLookup for TrackingReader<R> {
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
