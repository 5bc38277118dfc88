/// Represents a scan position inside a single line.
///
/// Lines are scanned one at a time, so there is no line number here, only the
/// column the cursor has reached and the matching byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from the start of the line
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of a line.
    pub fn new() -> Self {
        Self {
            column: 1,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(column: usize, offset: usize) -> Self {
        Self { column, offset }
    }

    /// Moves the position past one byte.
    pub fn bump(&mut self) {
        self.column += 1;
        self.offset += 1;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.column)
    }
}
