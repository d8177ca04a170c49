//! Python class writer.

use std::io;

use super::{Emitter, Render, Writer};
use crate::python_str_literal;

/// A nested class: one per namespace level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassWriter {
    pub name: String,
    pub doc: Option<String>,
    /// Children in emission order.
    pub body: Vec<Writer>,
}

impl ClassWriter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Writer>) -> Self {
        self.body.push(child.into());
        self
    }

    /// Append several child nodes.
    pub fn children(mut self, children: impl IntoIterator<Item = Writer>) -> Self {
        self.body.extend(children);
        self
    }

    /// True when neither a docstring nor any child would fill the block.
    pub fn is_empty(&self) -> bool {
        self.doc.is_none() && self.body.is_empty()
    }
}

impl Render for ClassWriter {
    fn render(&self, out: &mut Emitter<'_>, indent: usize) -> io::Result<()> {
        out.line(indent, &format!("class {}:", self.name))?;
        if let Some(doc) = &self.doc {
            out.line(indent + 1, &python_str_literal(doc))?;
        }
        if self.is_empty() {
            Writer::Pass.render(out, indent + 1)?;
        }
        for child in &self.body {
            child.render(out, indent + 1)?;
        }
        Ok(())
    }
}
