use common_framework::Line;
use std::io::{self, BufRead};

/// Produces raw lines on demand, in input order.
///
/// `Ok(None)` means the input ended normally. An `Err` means the input could
/// not be read to its end.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<Line>>;
}

/// Reads `\n`-terminated lines from any buffered reader.
///
/// Each line keeps its terminator. The last line may lack one. Lines have no
/// length limit.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(Line::new(buf))),
        }
    }
}

/// Adapts an in-memory iterator of lines. Never fails.
#[derive(Debug)]
pub struct IterSource<I> {
    lines: I,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = Line>,
{
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl<I> LineSource for IterSource<I>
where
    I: Iterator<Item = Line>,
{
    fn next_line(&mut self) -> io::Result<Option<Line>> {
        Ok(self.lines.next())
    }
}

/// Counts the lines `reader` would produce, including an unterminated last
/// line. Used to size a bounded seen-set before the real pass.
pub fn count_lines<R: BufRead>(mut reader: R) -> io::Result<usize> {
    let mut count = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(count);
        }
        count += 1;
    }
}
