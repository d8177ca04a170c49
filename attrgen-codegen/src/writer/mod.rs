//! Writer nodes: composable units of deferred rendering.
//!
//! - [`ClassWriter`] - a nested class with an optional docstring and a body
//! - [`PropertyWriter`] - a `@property` returning `Attr(<key>)`
//! - [`Writer::Pass`] - `pass`, for bodies that would otherwise be empty
//! - [`ModuleWriter`] - module docstring and imports around top-level nodes
//!
//! Every node renders itself at a given depth and its children one level
//! deeper, streaming lines into an [`Emitter`].

mod class;
mod emitter;
mod indent;
mod module;
mod property;

use std::io;

pub use class::ClassWriter;
pub use emitter::Emitter;
pub use indent::Indent;
pub use module::ModuleWriter;
pub use property::PropertyWriter;

/// Trait for nodes that can render themselves as Python source.
pub trait Render {
    /// Write this node at depth `indent`, children at `indent + 1`.
    fn render(&self, out: &mut Emitter<'_>, indent: usize) -> io::Result<()>;
}

/// Blanket implementation for references.
impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut Emitter<'_>, indent: usize) -> io::Result<()> {
        (**self).render(out, indent)
    }
}

/// Blanket implementation for Box.
impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, out: &mut Emitter<'_>, indent: usize) -> io::Result<()> {
        self.as_ref().render(out, indent)
    }
}

/// A node of the writer tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Writer {
    Class(ClassWriter),
    Property(PropertyWriter),
    /// No-op placeholder statement.
    Pass,
    Module(ModuleWriter),
}

impl Render for Writer {
    fn render(&self, out: &mut Emitter<'_>, indent: usize) -> io::Result<()> {
        match self {
            Self::Class(class) => class.render(out, indent),
            Self::Property(property) => property.render(out, indent),
            Self::Pass => out.line(indent, "pass"),
            Self::Module(module) => module.render(out, indent),
        }
    }
}

impl From<ClassWriter> for Writer {
    fn from(class: ClassWriter) -> Self {
        Self::Class(class)
    }
}

impl From<PropertyWriter> for Writer {
    fn from(property: PropertyWriter) -> Self {
        Self::Property(property)
    }
}

impl From<ModuleWriter> for Writer {
    fn from(module: ModuleWriter) -> Self {
        Self::Module(module)
    }
}

/// Render a node at depth 0 into a string.
pub fn render_to_string(node: &impl Render, indent: Indent) -> io::Result<String> {
    let mut buffer = Vec::new();
    node.render(&mut Emitter::new(&mut buffer, indent), 0)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
