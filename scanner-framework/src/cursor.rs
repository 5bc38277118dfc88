use common_framework::Position;

/// A cursor for traversing one line's bytes during validation.
///
/// The cursor borrows the line for the duration of a single scan and only
/// ever moves forward. The grammar is pure ASCII, so the cursor works on bytes
/// rather than `char`s; a non-ASCII byte simply never matches any rule.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    line: &'a [u8],
    current: usize,
    position: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `line`.
    pub fn new(line: &'a [u8]) -> Self {
        Self {
            line,
            current: 0,
            position: Position::new(),
        }
    }

    /// Creates a cursor over the first `length` bytes of `line`.
    ///
    /// A `length` past the end of the slice is clamped to the slice length.
    pub fn with_length(line: &'a [u8], length: usize) -> Self {
        Self::new(&line[..length.min(line.len())])
    }

    /// Returns the current position in the line.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns the length of the scanned line.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Returns true if the scanned line is empty.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.current >= self.line.len()
    }

    /// Returns the next byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.line.get(self.current).copied()
    }

    /// Advances the cursor by one byte.
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.current += 1;
        self.position.bump();
        Some(byte)
    }

    /// Returns the remaining input from the current position.
    pub fn remaining(&self) -> &'a [u8] {
        &self.line[self.current..]
    }
}
