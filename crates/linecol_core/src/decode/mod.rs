//! UTF-8 character boundaries.
//!
//! The tracker never keeps characters around. It only needs the byte width
//! of the next character and whether that character is `\r` or `\n`, so the
//! decoder reports exactly that, plus whether an undecodable prefix could
//! still turn into a character once more bytes arrive.

/// Widest valid UTF-8 encoding of a single character, in bytes.
pub const MAX_CHAR_WIDTH: usize = 4;

/// Outcome of decoding the character at the start of a byte slice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Decoded {
    /// A complete character spanning `width` bytes.
    Char { ch: char, width: usize },
    /// The slice ends inside a character that is valid so far.
    Incomplete,
    /// The bytes can never start a valid character.
    Invalid,
}

/// Decode the first character of `bytes`.
///
/// An empty slice is `Incomplete`: there is nothing to decode yet.
pub(crate) fn decode_char(bytes: &[u8]) -> Decoded {
    let Some(&lead) = bytes.first() else {
        return Decoded::Incomplete;
    };

    // Fast path: ASCII covers every terminator.
    if lead.is_ascii() {
        return Decoded::Char {
            ch: char::from(lead),
            width: 1,
        };
    }

    let width = sequence_width(lead);
    if width == 0 {
        return Decoded::Invalid;
    }

    let window = &bytes[..width.min(bytes.len())];
    match std::str::from_utf8(window) {
        Ok(text) => text
            .chars()
            .next()
            .map_or(Decoded::Invalid, |ch| Decoded::Char { ch, width }),
        // No error length means the input ended mid-sequence.
        Err(err) if err.error_len().is_none() => Decoded::Incomplete,
        Err(_) => Decoded::Invalid,
    }
}

/// Byte width announced by a UTF-8 lead byte, or 0 if it cannot lead.
///
/// `0xC0`, `0xC1` (overlong) and `0xF5..=0xFF` (beyond U+10FFFF) never
/// start a valid sequence.
const fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
