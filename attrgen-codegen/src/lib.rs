//! Python source emission for attrgen.
//!
//! A tree of writer nodes mirrors the attribute namespace: every namespace
//! becomes a nested class, every attribute a `@property` returning
//! `Attr(<key>)`. The [`Pipeline`] renders that tree into a sink, optionally
//! through the black formatter.
//!
//! # Module Organization
//!
//! - [`writer`] - writer nodes and the [`Render`] trait
//! - [`builder`] - turning a [`Namespace`](attrgen_schema::Namespace) into writers
//! - [`format`] - the [`Formatter`] capability and black detection
//! - [`pipeline`] - a full generation run

pub mod builder;
mod error;
pub mod format;
mod literal;
pub mod pipeline;
pub mod writer;

pub use builder::{build_class, build_module, example_tree};
pub use error::{Error, Result};
pub use format::{Black, BlackLocator, FormatMode, Formatter, Invocation};
pub use literal::python_str_literal;
pub use pipeline::Pipeline;
pub use writer::{
    ClassWriter, Emitter, Indent, ModuleWriter, PropertyWriter, Render, Writer, render_to_string,
};
