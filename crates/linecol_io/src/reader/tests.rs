use super::*;
use pretty_assertions::assert_eq;

/// Hands out at most `step` bytes per read.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Fails every read.
struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away"))
    }
}

fn one_shot(bytes: &[u8]) -> PositionTracker {
    let mut tracker = PositionTracker::new();
    assert_eq!(tracker.consume(bytes), Ok(bytes.len()));
    tracker
}

fn decode_error(err: &io::Error) -> Option<&DecodeError> {
    err.get_ref()?.downcast_ref::<DecodeError>()
}

// === Forwarding ===

#[test]
fn cr_newline_through_reader() {
    let mut reader = TrackingReader::new("Hello There\rPerson".as_bytes());
    let mut buf = [0u8; 60];
    assert_eq!(reader.read(&mut buf).ok(), Some(18));
    assert_eq!(reader.offset(0, 0), Ok(0));
    assert_eq!(reader.offset(1, 0), Ok(12));
    assert_eq!(reader.offset(1, 4), Ok(16));
    assert_eq!(reader.line_and_column(16), Ok(LineColumn::new(1, 4)));
}

#[test]
fn small_reads_match_one_shot() {
    let text = "caf\u{e9}\r\nna\u{ef}ve\n\n\u{1F600}\r\r end";
    for step in 1..=7 {
        let mut reader = TrackingReader::new(Trickle {
            data: text.as_bytes(),
            step,
        });
        let mut out = String::new();
        assert!(reader.read_to_string(&mut out).is_ok(), "step {step}");
        assert_eq!(out, text);
        assert_eq!(reader.tracker(), &one_shot(text.as_bytes()), "step {step}");
    }
}

#[test]
fn current_position_after_read_to_end() {
    let mut reader = TrackingReader::new("first\nsecond\nthird".as_bytes());
    let mut out = Vec::new();
    assert!(reader.read_to_end(&mut out).is_ok());
    assert_eq!(reader.current_offset(), Ok(17));
    assert_eq!(reader.current_line_and_column(), Ok(LineColumn::new(2, 4)));
    assert_eq!(reader.tracker().completed_lines(), 2);
    assert_eq!(reader.tracker_error(), None);
}

#[test]
fn configured_reader_tracks_the_same() {
    let config = TrackerConfig::new().with_initial_line_capacity(1);
    let mut reader = TrackingReader::with_config("a\nb".as_bytes(), &config);
    let mut out = Vec::new();
    assert!(reader.read_to_end(&mut out).is_ok());
    assert_eq!(reader.tracker(), &one_shot(b"a\nb"));
}

#[test]
fn accessors_expose_inner_reader() {
    let mut reader = TrackingReader::new(io::Cursor::new(b"abc".to_vec()));
    assert_eq!(reader.get_ref().position(), 0);
    reader.get_mut().set_position(1);
    let mut out = Vec::new();
    assert!(reader.read_to_end(&mut out).is_ok());
    assert_eq!(out, b"bc");
    // Only the bytes read through the adapter were tracked.
    assert_eq!(reader.current_offset(), Ok(1));
    assert_eq!(reader.into_inner().into_inner(), b"abc".to_vec());
}

// === Errors ===

#[test]
fn source_error_is_returned_unchanged() {
    let mut reader = TrackingReader::new(Broken);
    let mut buf = [0u8; 8];
    let err = reader.read(&mut buf).err();
    assert_eq!(err.as_ref().map(io::Error::kind), Some(io::ErrorKind::BrokenPipe));
    assert_eq!(reader.current_offset(), Err(PositionError::NothingConsumed));
}

#[test]
fn transient_error_surfaces_on_next_read() {
    let mut reader = TrackingReader::new(Trickle {
        data: b"ab\xffcd",
        step: 3,
    });
    let mut buf = [0u8; 8];

    // The bytes that moved are reported first.
    assert_eq!(reader.read(&mut buf).ok(), Some(3));
    assert_eq!(&buf[..3], b"ab\xff");

    let err = reader.read(&mut buf).err();
    let err = err.as_ref();
    assert_eq!(err.map(io::Error::kind), Some(io::ErrorKind::InvalidData));
    assert!(matches!(
        err.and_then(decode_error),
        Some(DecodeError::Transient { classified: 2, .. })
    ));

    // Not fatal: reading resumes.
    assert_eq!(reader.read(&mut buf).ok(), Some(2));
    assert_eq!(reader.tracker_error(), None);
    assert_eq!(reader.current_offset(), Ok(1));
}

#[test]
fn fatal_error_stops_every_later_read() {
    let source = (&b"ok\n\xc3\xbf"[..]).chain(&b"\xff\xff\xff\xff\xff rest"[..]);
    let mut reader = TrackingReader::new(source);
    let mut buf = [0u8; 64];

    // The bad bytes are delivered before the tracker stops.
    assert_eq!(reader.read(&mut buf).ok(), Some(5));
    assert_eq!(reader.read(&mut buf).ok(), Some(10));
    assert!(reader.tracker_error().is_some_and(DecodeError::is_fatal));

    for _ in 0..2 {
        let err = reader.read(&mut buf).err();
        assert!(matches!(
            err.as_ref().and_then(decode_error),
            Some(DecodeError::Fatal { .. })
        ));
    }

    // Everything recorded before the failure is still answerable.
    assert_eq!(reader.current_offset(), Ok(4));
    assert_eq!(reader.line_and_column(3), Ok(LineColumn::new(1, 0)));
}
