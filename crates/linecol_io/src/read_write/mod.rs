//! Combined reader/writer with independent tracking per direction.

use std::io::{self, Read, Write};

use crate::{TrackingReader, TrackingWriter};

/// A [`TrackingReader`] and a [`TrackingWriter`] behind one value.
///
/// Each direction keeps its own tracker: bytes read never affect write
/// positions and vice versa. Query a direction through
/// [`reader`](Self::reader) or [`writer`](Self::writer).
#[derive(Debug)]
pub struct TrackingReadWriter<R, W> {
    reader: TrackingReader<R>,
    writer: TrackingWriter<W>,
}

impl<R: Read, W: Write> TrackingReadWriter<R, W> {
    /// Wrap a reader and a writer, each with a fresh tracker.
    pub fn new(reader: R, writer: W) -> Self {
        Self::from_parts(TrackingReader::new(reader), TrackingWriter::new(writer))
    }
}

impl<R, W> TrackingReadWriter<R, W> {
    /// Combine adapters that may already have tracked some bytes.
    pub fn from_parts(reader: TrackingReader<R>, writer: TrackingWriter<W>) -> Self {
        TrackingReadWriter { reader, writer }
    }

    /// The read side.
    pub fn reader(&self) -> &TrackingReader<R> {
        &self.reader
    }

    /// The read side, mutably.
    pub fn reader_mut(&mut self) -> &mut TrackingReader<R> {
        &mut self.reader
    }

    /// The write side.
    pub fn writer(&self) -> &TrackingWriter<W> {
        &self.writer
    }

    /// The write side, mutably.
    pub fn writer_mut(&mut self) -> &mut TrackingWriter<W> {
        &mut self.writer
    }

    /// Split back into the two adapters.
    pub fn into_parts(self) -> (TrackingReader<R>, TrackingWriter<W>) {
        (self.reader, self.writer)
    }
}

impl<R: Read, W> Read for TrackingReadWriter<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl<R, W: Write> Write for TrackingReadWriter<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
