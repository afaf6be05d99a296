use super::*;

// === ByteHead ===

#[test]
fn byte_head_renders_hex() {
    assert_eq!(ByteHead::new(&[0xFF, b'A']).to_string(), "<ff41>");
}

#[test]
fn byte_head_keeps_at_most_four_bytes() {
    let head = ByteHead::new(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(head.as_bytes(), &[1, 2, 3, 4]);
    assert_eq!(head.to_string(), "<01020304>");
}

#[test]
fn empty_byte_head() {
    assert_eq!(ByteHead::new(&[]).to_string(), "<empty>");
}

// === Classification ===

#[test]
fn invalid_input_errors() {
    assert!(PositionError::InvalidOffset.is_invalid_input());
    assert!(PositionError::InvalidLine.is_invalid_input());
    assert!(PositionError::InvalidColumn.is_invalid_input());
    assert!(!PositionError::InvalidColumn.is_beyond_known());
}

#[test]
fn beyond_known_errors() {
    let errors = [
        PositionError::NothingConsumed,
        PositionError::OffsetBeyondKnown {
            offset: 31,
            last_seen: 30,
        },
        PositionError::LineBeyondKnown {
            line: 5,
            last_line: 3,
        },
        PositionError::ColumnBeyondLine { line: 1, column: 11 },
    ];
    for err in errors {
        assert!(err.is_beyond_known(), "{err}");
    }
}

#[test]
fn position_error_messages() {
    let err = PositionError::OffsetBeyondKnown {
        offset: 31,
        last_seen: 30,
    };
    assert_eq!(err.to_string(), "offset 31 is beyond the last seen byte 30");
}

#[test]
fn decode_error_fatality() {
    let head = ByteHead::new(&[0xFF]);
    let transient = DecodeError::Transient {
        head: head.clone(),
        classified: 3,
    };
    let fatal = DecodeError::Fatal { head: head.clone() };
    assert!(!transient.is_fatal());
    assert!(fatal.is_fatal());
    assert_eq!(transient.head(), &head);
    assert_eq!(
        fatal.to_string(),
        "cannot decode bytes <ff> as UTF-8; position tracking stopped"
    );
}

#[test]
fn decode_error_converts_to_invalid_data() {
    let err = io::Error::from(DecodeError::Fatal {
        head: ByteHead::new(&[0xFF]),
    });
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    let inner = err
        .get_ref()
        .and_then(|inner| inner.downcast_ref::<DecodeError>());
    assert!(matches!(inner, Some(DecodeError::Fatal { .. })));
}
