//! Lints for Python identifiers in a namespace tree.
//!
//! Nothing here rejects a tree: the generator renders whatever it is given.
//! The lints only report names that would produce invalid Python.

use std::{collections::HashSet, fmt};

use crate::{Member, Namespace};

/// Python reserved keywords that cannot be used as identifiers
/// Source: https://docs.python.org/3/reference/lexical_analysis.html#keywords
pub(crate) const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Check if a name is a Python reserved keyword
pub fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Validate that a name is a valid Python identifier
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if is_python_keyword(name) {
        return Some("name is a Python reserved keyword");
    }

    None
}

/// What a lint found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintKind {
    /// The name is not a valid Python identifier.
    InvalidIdentifier(&'static str),
    /// Two members of the same namespace share a name; the later one wins.
    DuplicateMember,
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lint {
    /// Dotted path from the root namespace to the offending member.
    pub path: String,
    pub name: String,
    pub kind: LintKind,
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LintKind::InvalidIdentifier(reason) => {
                write!(f, "invalid name '{}' at '{}': {}", self.name, self.path, reason)
            }
            LintKind::DuplicateMember => {
                write!(f, "duplicate member '{}' at '{}'", self.name, self.path)
            }
        }
    }
}

/// Collect identifier lints for the whole tree, root included.
pub fn lint(root: &Namespace) -> Vec<Lint> {
    let mut lints = Vec::new();
    check_name(&root.name, &root.name, &mut lints);
    lint_namespace(root, &root.name, &mut lints);
    lints
}

fn lint_namespace(ns: &Namespace, path: &str, lints: &mut Vec<Lint>) {
    let mut seen = HashSet::new();
    for member in &ns.members {
        let name = member.name();
        let member_path = format!("{path}.{name}");

        if !seen.insert(name) {
            lints.push(Lint {
                path: member_path.clone(),
                name: name.to_string(),
                kind: LintKind::DuplicateMember,
            });
        }
        check_name(name, &member_path, lints);

        if let Member::Namespace(child) = member {
            lint_namespace(child, &member_path, lints);
        }
    }
}

fn check_name(name: &str, path: &str, lints: &mut Vec<Lint>) {
    if let Some(reason) = validate_identifier(name) {
        lints.push(Lint {
            path: path.to_string(),
            name: name.to_string(),
            kind: LintKind::InvalidIdentifier(reason),
        });
    }
}
