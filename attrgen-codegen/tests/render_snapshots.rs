//! Snapshot tests for rendered Python.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use attrgen_codegen::{Pipeline, build_module, example_tree};
use attrgen_schema::{ModuleConfig, metadata};

const METADATA_SCHEMA: &str = r#"{
    "type": "object",
    "properties": {
        "rcsb_entry_info": {
            "type": "object",
            "description": "Entry-level info",
            "properties": {
                "resolution_combined": {
                    "type": "array",
                    "description": "Combined resolution",
                    "items": {"type": "number"}
                },
                "deposited_atom_count": {"type": "integer"}
            }
        },
        "rcsb_id": {"type": "string", "description": "The entry's identifier"},
        "pdbx_empty": {"type": "object", "properties": {}}
    }
}"#;

#[test]
fn test_example_tree() {
    let code = Pipeline::new().render_to_string(&example_tree()).unwrap();
    insta::assert_snapshot!("example_tree", code);
}

#[test]
fn test_metadata_module() {
    let ns = metadata::from_str(METADATA_SCHEMA, "ignored").unwrap();
    let module = build_module(&ns, &ModuleConfig::default());
    let code = Pipeline::new().render_to_string(&module).unwrap();
    insta::assert_snapshot!("metadata_module", code);
}

#[test]
fn test_example_tree_line_structure() {
    let code = Pipeline::new().render_to_string(&example_tree()).unwrap();
    let lines: Vec<(usize, &str)> = code
        .lines()
        .map(|line| {
            let text = line.trim_start_matches(' ');
            ((line.len() - text.len()) / 4, text)
        })
        .collect();
    assert_eq!(
        lines,
        [
            (0, "class Foo:"),
            (1, "'a Foo'"),
            (1, "class Bar:"),
            (2, "'a Bar'"),
            (2, "@property"),
            (2, "def prop(self):"),
            (3, "return Attr('rcsb_prop')"),
        ]
    );
    assert!(code.ends_with(")\n"));
}
