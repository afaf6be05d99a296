//! Newline classification without look-ahead.
//!
//! Two-character terminators are recognized from the previous character's
//! state alone, so a chunk boundary between `\r` and `\n` cannot change the
//! outcome. A terminator is provisionally counted in the line it may end;
//! the line is only recorded once the next character decides how the
//! terminator resolves.
//!
//! | state       | next char   | effect               | next state  |
//! |-------------|-------------|----------------------|-------------|
//! | `Clear`     | other       | extend               | `Clear`     |
//! | `Clear`     | `\r` / `\n` | extend               | pending     |
//! | pending     | other       | close, extend        | `Clear`     |
//! | pending     | opposite    | extend, close        | `Clear`     |
//! | pending     | same        | close, extend, close | `Clear`     |

/// Which terminator, if any, is waiting to be resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) enum NewlineState {
    /// The previous character was not an unresolved terminator.
    #[default]
    Clear,
    /// The previous character was a `\r` that may pair with a `\n`.
    PendingCr,
    /// The previous character was a `\n` that may pair with a `\r`.
    PendingLf,
}

/// What a classified character does to the line index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum LineEffect {
    /// The character joins the open line.
    Extend,
    /// The pending terminator ends its line; the character starts the next.
    CloseThenExtend,
    /// The character completes a `\r\n` or `\n\r` pair and ends the line.
    ExtendThenClose,
    /// A repeated terminator: the previous line ends, and the character
    /// forms a one-byte line of its own that ends immediately.
    CloseExtendClose,
}

impl NewlineState {
    /// Advance the state machine by one character.
    pub(crate) fn step(self, ch: char) -> (Self, LineEffect) {
        match (self, Self::opened_by(ch)) {
            (Self::Clear, None) => (Self::Clear, LineEffect::Extend),
            (Self::Clear, Some(pending)) => (pending, LineEffect::Extend),
            (_, None) => (Self::Clear, LineEffect::CloseThenExtend),
            // Pairs never chain: the state clears after a repeat, so `\r\r\r`
            // ends two lines and leaves the third `\r` pending.
            (previous, Some(current)) if previous == current => {
                (Self::Clear, LineEffect::CloseExtendClose)
            }
            (_, Some(_)) => (Self::Clear, LineEffect::ExtendThenClose),
        }
    }

    /// The pending state a terminator character opens.
    fn opened_by(ch: char) -> Option<Self> {
        match ch {
            '\r' => Some(Self::PendingCr),
            '\n' => Some(Self::PendingLf),
            _ => None,
        }
    }
}
