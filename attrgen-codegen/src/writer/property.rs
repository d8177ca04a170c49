//! Accessor property writer.

use std::io;

use super::{Emitter, Render};
use crate::python_str_literal;

/// Name of the attribute-reference type returned by generated accessors.
pub const ATTR_TYPE: &str = "Attr";

/// A read-only property returning `Attr(<attribute>)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyWriter {
    pub name: String,
    /// Lookup key embedded verbatim in the generated accessor.
    pub attribute: String,
    pub doc: Option<String>,
}

impl PropertyWriter {
    pub fn new(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl Render for PropertyWriter {
    fn render(&self, out: &mut Emitter<'_>, indent: usize) -> io::Result<()> {
        out.line(indent, "@property")?;
        out.line(indent, &format!("def {}(self):", self.name))?;
        if let Some(doc) = &self.doc {
            out.line(indent + 1, &python_str_literal(doc))?;
        }
        out.line(
            indent + 1,
            &format!("return {}({})", ATTR_TYPE, python_str_literal(&self.attribute)),
        )
    }
}
