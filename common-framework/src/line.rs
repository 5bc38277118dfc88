use std::fmt;
use std::ops::Deref;

/// An immutable raw input line.
///
/// The line owns its bytes exactly as they were read, including the trailing
/// `\n` when the source had one. Nothing downstream mutates a line: the
/// validator scans it and the seen-set compares it byte for byte. It implements
/// `Deref<Target = [u8]>` so it can be used as `&[u8]` in most places.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Line {
    bytes: Box<[u8]>,
}

impl Line {
    /// Creates a line from raw bytes.
    pub fn new<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Self {
            bytes: bytes.into().into_boxed_slice(),
        }
    }

    /// Returns the raw bytes, terminator included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the length in bytes, terminator included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the line holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if the line ends with `\n`.
    pub fn has_terminator(&self) -> bool {
        self.bytes.last() == Some(&b'\n')
    }

    /// Returns the bytes without the trailing `\n`, if any.
    pub fn content(&self) -> &[u8] {
        match self.bytes.split_last() {
            Some((b'\n', rest)) => rest,
            _ => &self.bytes,
        }
    }

    /// Consumes the line and returns its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes.into_vec()
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Line")
            .field(&String::from_utf8_lossy(&self.bytes))
            .finish()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.content()))
    }
}

impl Deref for Line {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl From<&str> for Line {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<String> for Line {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

impl From<Vec<u8>> for Line {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl PartialEq<&str> for Line {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<Line> for &str {
    fn eq(&self, other: &Line) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
