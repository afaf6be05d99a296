use super::*;
use pretty_assertions::assert_eq;

/// Accepts at most `limit` bytes per write.
struct ShortWriter {
    sink: Vec<u8>,
    limit: usize,
    flushes: usize,
}

impl ShortWriter {
    fn new(limit: usize) -> Self {
        ShortWriter {
            sink: Vec::new(),
            limit,
            flushes: 0,
        }
    }
}

impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.limit.min(buf.len());
        self.sink.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Rejects every write.
struct Full;

impl Write for Full {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::WriteZero, "no space left"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn one_shot(bytes: &[u8]) -> PositionTracker {
    let mut tracker = PositionTracker::new();
    assert_eq!(tracker.consume(bytes), Ok(bytes.len()));
    tracker
}

const MIXED: &str = "Hello!\nThis a string\r\nwith mixed and doubled\n\nnewlines.";

// === Forwarding ===

#[test]
fn mixed_newlines_through_writer() {
    let mut writer = TrackingWriter::new(Vec::new());
    assert!(writer.write_all(MIXED.as_bytes()).is_ok());
    assert_eq!(writer.get_ref().as_slice(), MIXED.as_bytes());
    assert_eq!(writer.current_offset(), Ok(54));
    assert_eq!(writer.current_line_and_column(), Ok(LineColumn::new(4, 8)));
    assert_eq!(writer.line_and_column(27), Ok(LineColumn::new(2, 5)));
    assert_eq!(writer.offset(2, 5), Ok(27));
}

#[test]
fn short_writes_track_each_byte_once() {
    let text = "\u{20AC}1\r\n\u{20AC}2\n\r\u{1F600}\r\r\n\nend";
    for limit in 1..=6 {
        let mut writer = TrackingWriter::new(ShortWriter::new(limit));
        assert!(writer.write_all(text.as_bytes()).is_ok(), "limit {limit}");
        assert_eq!(writer.get_ref().sink, text.as_bytes());
        assert_eq!(writer.tracker(), &one_shot(text.as_bytes()), "limit {limit}");
    }
}

#[test]
fn lines_written_one_per_call() {
    let mut writer = TrackingWriter::new(Vec::new());
    for line in ["alpha", "beta", "gamma"] {
        assert!(writeln!(writer, "{line}").is_ok());
    }
    assert_eq!(writer.tracker().completed_lines(), 2);
    assert_eq!(writer.tracker().pending_len(), 0);
    // The last newline stays on its line until more text follows.
    assert_eq!(writer.current_line_and_column(), Ok(LineColumn::new(2, 5)));
    assert_eq!(writer.offset(1, 0), Ok(6));
    assert_eq!(writer.offset(2, 0), Ok(11));
}

#[test]
fn flush_reaches_inner_writer() {
    let mut writer = TrackingWriter::new(ShortWriter::new(8));
    assert!(writer.flush().is_ok());
    assert!(writer.flush().is_ok());
    assert_eq!(writer.get_ref().flushes, 2);
    assert_eq!(writer.current_offset(), Err(PositionError::NothingConsumed));
}

#[test]
fn direct_writes_bypass_tracking() {
    let mut writer = TrackingWriter::new(Vec::new());
    writer.get_mut().extend_from_slice(b"untracked\n");
    assert!(writer.write_all(b"xy").is_ok());
    assert_eq!(writer.current_line_and_column(), Ok(LineColumn::new(0, 1)));
    assert_eq!(writer.into_inner(), b"untracked\nxy".to_vec());
}

// === Errors ===

#[test]
fn sink_error_is_returned_unchanged() {
    let mut writer = TrackingWriter::new(Full);
    let err = writer.write(b"abc").err();
    assert_eq!(err.as_ref().map(io::Error::kind), Some(io::ErrorKind::WriteZero));
    assert_eq!(writer.current_offset(), Err(PositionError::NothingConsumed));
    assert_eq!(writer.tracker_error(), None);
}

#[test]
fn transient_error_surfaces_on_next_write() {
    let mut writer = TrackingWriter::new(Vec::new());
    assert_eq!(writer.write(b"ab\xff").ok(), Some(3));
    assert_eq!(writer.tracker().pending_len(), 1);

    let err = writer.write(b"cd").err();
    assert_eq!(err.as_ref().map(io::Error::kind), Some(io::ErrorKind::InvalidData));
    // The failed call moved nothing.
    assert_eq!(writer.get_ref().as_slice(), b"ab\xff");
    assert_eq!(writer.tracker_error(), None);
    assert_eq!(writer.current_offset(), Ok(1));
}

#[test]
fn fatal_error_stops_every_later_write() {
    let mut writer = TrackingWriter::new(Vec::new());
    assert_eq!(writer.write(b"x\n\xff\xfe\xfd\xfc\xfb").ok(), Some(7));
    assert!(writer.tracker_error().is_some_and(DecodeError::is_fatal));

    for _ in 0..2 {
        let err = writer.write(b"more").err();
        assert_eq!(err.as_ref().map(io::Error::kind), Some(io::ErrorKind::InvalidData));
    }
    assert_eq!(writer.get_ref().len(), 7);
    assert_eq!(writer.current_line_and_column(), Ok(LineColumn::new(0, 1)));
}
