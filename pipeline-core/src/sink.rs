use common_framework::Line;
use std::io::{self, Write};

/// Accepts surviving lines one at a time.
pub trait LineSink {
    /// Appends `line` exactly as it was read.
    fn emit(&mut self, line: &Line) -> io::Result<()>;

    /// Called once after the last line. Flushes any buffered output.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<K: LineSink + ?Sized> LineSink for &mut K {
    fn emit(&mut self, line: &Line) -> io::Result<()> {
        (**self).emit(line)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

impl LineSink for Vec<Line> {
    fn emit(&mut self, line: &Line) -> io::Result<()> {
        self.push(line.clone());
        Ok(())
    }
}

/// Writes lines to any writer, byte for byte.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit(&mut self, line: &Line) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
