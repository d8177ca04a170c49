//! Python module writer.

use std::io;

use super::{Emitter, Render, Writer};
use crate::python_str_literal;

/// A whole module: docstring, imports, then top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleWriter {
    pub doc: Option<String>,
    /// Import statements, one per line (e.g. `from x import Attr`).
    pub imports: Vec<String>,
    pub body: Vec<Writer>,
}

impl ModuleWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn import(mut self, line: impl Into<String>) -> Self {
        self.imports.push(line.into());
        self
    }

    pub fn imports(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn child(mut self, child: impl Into<Writer>) -> Self {
        self.body.push(child.into());
        self
    }

    fn has_preamble(&self) -> bool {
        self.doc.is_some() || !self.imports.is_empty()
    }
}

impl Render for ModuleWriter {
    fn render(&self, out: &mut Emitter<'_>, indent: usize) -> io::Result<()> {
        if let Some(doc) = &self.doc {
            out.line(indent, &python_str_literal(doc))?;
        }
        for import in &self.imports {
            out.line(indent, import)?;
        }
        if self.has_preamble() && !self.body.is_empty() {
            out.blank()?;
        }
        for node in &self.body {
            node.render(out, indent)?;
        }
        Ok(())
    }
}
