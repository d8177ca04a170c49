//! Builds writer trees from attribute namespaces.

use attrgen_schema::{Member, ModuleConfig, Namespace};

use crate::{ClassWriter, ModuleWriter, PropertyWriter, Writer};

/// The minimal example tree: `Foo` holding `Bar` holding `prop`.
pub fn example_tree() -> Writer {
    ClassWriter::new("Foo")
        .doc("a Foo")
        .child(
            ClassWriter::new("Bar")
                .doc("a Bar")
                .child(PropertyWriter::new("prop", "rcsb_prop")),
        )
        .into()
}

/// One class per namespace, one property per attribute, in declaration order.
///
/// A namespace without members or docstring gets a single `pass`.
pub fn build_class(ns: &Namespace) -> Writer {
    let mut class = ClassWriter::new(&ns.name);
    class.doc = ns.doc.clone();
    class.body = ns
        .members
        .iter()
        .map(|member| match member {
            Member::Namespace(child) => build_class(child),
            Member::Attribute(attr) => {
                let mut property = PropertyWriter::new(&attr.name, &attr.attribute);
                property.doc = attr.doc.clone();
                property.into()
            }
        })
        .collect();

    if class.is_empty() {
        class.body.push(Writer::Pass);
    }
    class.into()
}

/// A complete module for `ns`, with the root class renamed to `config.name`.
pub fn build_module(ns: &Namespace, config: &ModuleConfig) -> Writer {
    let root = build_class(&ns.clone().with_name(&config.name));
    let mut module = ModuleWriter::new()
        .imports(config.imports.iter().cloned())
        .child(root);
    module.doc = config.doc.clone();

    tracing::debug!(
        namespaces = ns.namespace_count(),
        attributes = ns.leaf_count(),
        "built module `{}`",
        config.name
    );
    module.into()
}

#[cfg(test)]
mod tests {
    use attrgen_schema::AttributeDescriptor;

    use super::*;

    #[test]
    fn test_example_tree_matches_example_namespace() {
        assert_eq!(example_tree(), build_class(&Namespace::example()));
    }

    #[test]
    fn test_empty_namespace_gets_pass() {
        let class = build_class(&Namespace::new("Empty"));
        assert_eq!(
            class,
            Writer::Class(ClassWriter::new("Empty").child(Writer::Pass))
        );
    }

    #[test]
    fn test_documented_empty_namespace_has_no_pass() {
        let class = build_class(&Namespace::new("Doc").doc("docs"));
        assert_eq!(class, Writer::Class(ClassWriter::new("Doc").doc("docs")));
    }

    #[test]
    fn test_declaration_order_and_docs() {
        let ns = Namespace::new("root")
            .member(AttributeDescriptor::new("z", "z").doc("last letter"))
            .member(Namespace::new("a"));
        let expected = ClassWriter::new("root")
            .child(PropertyWriter::new("z", "z").doc("last letter"))
            .child(ClassWriter::new("a").child(Writer::Pass));
        assert_eq!(build_class(&ns), Writer::Class(expected));
    }

    #[test]
    fn test_build_is_deterministic() {
        let ns = Namespace::example();
        assert_eq!(build_class(&ns), build_class(&ns));
    }

    #[test]
    fn test_build_module() {
        let config = ModuleConfig {
            name: "attrs".to_string(),
            doc: Some("Generated".to_string()),
            imports: vec!["from x import Attr".to_string()],
        };
        let Writer::Module(module) = build_module(&Namespace::example(), &config) else {
            panic!("expected module");
        };
        assert_eq!(module.doc.as_deref(), Some("Generated"));
        assert_eq!(module.imports, ["from x import Attr"]);
        match module.body.as_slice() {
            [Writer::Class(root)] => {
                assert_eq!(root.name, "attrs");
                assert_eq!(root.doc.as_deref(), Some("a Foo"));
            }
            other => panic!("unexpected body {other:?}"),
        }
    }
}
