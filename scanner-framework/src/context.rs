use crate::cursor::Cursor;
use common_framework::Position;

/// Context for scanning operations.
///
/// Grammar rules are written against this trait rather than a concrete
/// cursor, so a rule can run inside any scanner that can hand out bytes one
/// at a time.
pub trait ScanContext {
    /// Returns the next byte without advancing.
    fn peek(&self) -> Option<u8>;

    /// Advances past the next byte and returns it.
    fn advance(&mut self) -> Option<u8>;

    /// Returns the current position.
    fn position(&self) -> Position;

    /// Returns the current byte offset.
    fn offset(&self) -> usize {
        self.position().offset
    }

    /// Returns true if at end of input.
    fn is_eof(&self) -> bool {
        self.peek().is_none()
    }

    /// Consumes the next byte if it equals `expected`.
    fn accept(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the next byte if it is an ASCII digit and returns its value.
    fn accept_digit(&mut self) -> Option<u8> {
        match self.peek() {
            Some(byte @ b'0'..=b'9') => {
                self.advance();
                Some(byte - b'0')
            }
            _ => None,
        }
    }
}

/// A simple default context implementation.
#[derive(Debug)]
pub struct DefaultContext<'a> {
    cursor: Cursor<'a>,
}

impl<'a> DefaultContext<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(line),
        }
    }

    /// Returns a reference to the cursor.
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }
}

impl<'a> From<Cursor<'a>> for DefaultContext<'a> {
    fn from(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }
}

impl ScanContext for DefaultContext<'_> {
    fn peek(&self) -> Option<u8> {
        self.cursor.peek()
    }

    fn advance(&mut self) -> Option<u8> {
        self.cursor.advance()
    }

    fn position(&self) -> Position {
        self.cursor.position()
    }
}
