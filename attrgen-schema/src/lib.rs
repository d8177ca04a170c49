//! Input side of attrgen: what gets generated.
//!
//! - [`Namespace`] / [`AttributeDescriptor`] - the attribute hierarchy
//! - [`metadata`] - reading the RCSB metadata JSON schema into a namespace
//! - [`GeneratorConfig`] - `attrgen.toml`
//! - [`validate`] - Python identifier lints

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
pub mod metadata;
mod namespace;
pub mod validate;

pub use config::{
    DEFAULT_IMPORT, DEFAULT_LINE_LENGTH, FormatConfig, GeneratorConfig, ModuleConfig,
};
pub use error::{Error, Result};
pub use namespace::{AttributeDescriptor, Attributes, Member, Namespace};
pub use validate::{Lint, LintKind, lint};
