//! Conversion of the RCSB metadata JSON schema into a [`Namespace`].
//!
//! Object nodes become namespaces, scalar nodes become attributes keyed by
//! their dot-separated path from the root. Arrays are transparent: they are
//! replaced by their `items`.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{AttributeDescriptor, Error, Member, Namespace, Result};

/// Leaf types in the metadata schema.
const LEAF_TYPES: &[&str] = &["string", "number", "integer", "date"];

/// A node of the metadata JSON schema, restricted to the keys we read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaNode {
    #[serde(rename = "type")]
    ty: Option<TypeField>,
    description: Option<String>,
    #[serde(default)]
    properties: IndexMap<String, SchemaNode>,
    items: Option<Box<SchemaNode>>,
    any_of: Option<Vec<SchemaNode>>,
    one_of: Option<Vec<SchemaNode>>,
    all_of: Option<Vec<SchemaNode>>,
}

/// `type` is either a single name or a list such as `["string", "null"]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypeField {
    One(String),
    Many(Vec<String>),
}

impl TypeField {
    fn resolve(&self) -> Option<&str> {
        match self {
            Self::One(ty) => Some(ty.as_str()),
            Self::Many(types) => {
                let mut non_null = types.iter().filter(|t| *t != "null");
                match (non_null.next(), non_null.next()) {
                    (Some(ty), None) => Some(ty.as_str()),
                    _ => None,
                }
            }
        }
    }
}

/// Read a metadata schema file into a namespace called `root_name`.
pub fn open(path: impl AsRef<Path>, root_name: &str) -> Result<Namespace> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    from_str_with_filename(&content, &filename, root_name)
}

/// Parse a metadata schema from a string (uses "metadata_schema.json" as filename)
pub fn from_str(content: &str, root_name: &str) -> Result<Namespace> {
    from_str_with_filename(content, "metadata_schema.json", root_name)
}

/// Parse a metadata schema with a custom filename for error reporting
pub fn from_str_with_filename(content: &str, filename: &str, root_name: &str) -> Result<Namespace> {
    let node: SchemaNode =
        serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))?;

    match convert(root_name, "", &node)? {
        Member::Namespace(ns) => {
            tracing::debug!(
                namespaces = ns.namespace_count(),
                attributes = ns.leaf_count(),
                "loaded metadata schema {}",
                filename
            );
            Ok(ns)
        }
        Member::Attribute(_) => Err(Box::new(Error::RootNotObject {
            ty: node_type(&node).unwrap_or("unknown").to_string(),
        })),
    }
}

fn node_type(node: &SchemaNode) -> Option<&str> {
    node.ty.as_ref().and_then(TypeField::resolve)
}

/// Convert one node. `name` is the member name, `path` the full dotted key.
fn convert(name: &str, path: &str, node: &SchemaNode) -> Result<Member> {
    if let Some(alternatives) = [&node.any_of, &node.one_of, &node.all_of]
        .into_iter()
        .flatten()
        .next()
    {
        let member = single_alternative(name, path, alternatives)?;
        return Ok(inherit_doc(member, node.description.as_deref()));
    }

    let Some(ty) = node_type(node) else {
        let ty = match &node.ty {
            Some(TypeField::Many(types)) => types.join("|"),
            _ => "missing".to_string(),
        };
        return Err(Error::unknown_type(path, ty));
    };

    if LEAF_TYPES.contains(&ty) {
        let mut attr = AttributeDescriptor::new(name, path);
        attr.doc = node.description.clone();
        return Ok(attr.into());
    }

    match ty {
        "array" => {
            let items = node.items.as_deref().ok_or_else(|| {
                Box::new(Error::MissingItems {
                    path: path.to_string(),
                })
            })?;
            let member = convert(name, path, items)?;
            Ok(inherit_doc(member, node.description.as_deref()))
        }
        "object" => {
            let mut ns = Namespace::new(name);
            ns.doc = node.description.clone();
            for (child_name, child) in &node.properties {
                let child_path = if path.is_empty() {
                    child_name.clone()
                } else {
                    format!("{path}.{child_name}")
                };
                ns.members.push(convert(child_name, &child_path, child)?);
            }
            Ok(ns.into())
        }
        other => Err(Error::unknown_type(path, other)),
    }
}

/// Alternatives are only accepted when they all collapse to one leaf.
fn single_alternative(name: &str, path: &str, alternatives: &[SchemaNode]) -> Result<Member> {
    let mut converted = alternatives
        .iter()
        .map(|alt| convert(name, path, alt))
        .collect::<Result<Vec<_>>>()?;

    if converted.len() == 1 {
        return Ok(converted.remove(0));
    }

    let all_same_leaf = converted.iter().all(|m| match m {
        Member::Attribute(attr) => attr.attribute == path,
        Member::Namespace(_) => false,
    });
    if all_same_leaf && !converted.is_empty() {
        // Keep the first alternative that carries a description.
        let index = converted
            .iter()
            .position(|m| matches!(m, Member::Attribute(a) if a.doc.is_some()))
            .unwrap_or(0);
        return Ok(converted.swap_remove(index));
    }

    Err(Error::ambiguous(path))
}

fn inherit_doc(member: Member, doc: Option<&str>) -> Member {
    let Some(doc) = doc else {
        return member;
    };
    match member {
        Member::Attribute(mut attr) => {
            attr.doc.get_or_insert_with(|| doc.to_string());
            Member::Attribute(attr)
        }
        Member::Namespace(mut ns) => {
            ns.doc.get_or_insert_with(|| doc.to_string());
            Member::Namespace(ns)
        }
    }
}
