//! Line-oriented output over an [`io::Write`] sink.

use std::io::{self, Write};

use super::Indent;

/// Writes indented lines straight to a sink.
///
/// Unlike a buffering builder there is no current level: every call names
/// the level it writes at, so a node's depth alone decides its indentation.
pub struct Emitter<'a> {
    out: &'a mut dyn Write,
    indent: Indent,
}

impl<'a> Emitter<'a> {
    pub fn new(out: &'a mut dyn Write, indent: Indent) -> Self {
        Self { out, indent }
    }

    /// The indentation unit in use.
    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// Write `level` indentation units, `text`, and a newline.
    pub fn line(&mut self, level: usize, text: &str) -> io::Result<()> {
        self.write_indent(level)?;
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")
    }

    /// Write an empty line (no indentation).
    pub fn blank(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn write_indent(&mut self, level: usize) -> io::Result<()> {
        let unit = self.indent.as_str();
        for _ in 0..level {
            self.out.write_all(unit.as_bytes())?;
        }
        Ok(())
    }
}
