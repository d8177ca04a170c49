use std::path::PathBuf;

use attrgen_schema::{GeneratorConfig, LintKind, Member, lint, metadata};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Metadata JSON schema to check
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Path to attrgen.toml, for the root class name
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => GeneratorConfig::open(path).unwrap_or_exit(),
            None => GeneratorConfig::default(),
        };
        let ns = metadata::open(&self.schema, &config.module.name).unwrap_or_exit();

        let lints = lint(&ns);
        let mut has_errors = false;
        for found in &lints {
            match found.kind {
                LintKind::InvalidIdentifier(_) => {
                    has_errors = true;
                    eprintln!("error: {found}");
                }
                LintKind::DuplicateMember => eprintln!("warning: {found}"),
            }
        }

        if has_errors {
            std::process::exit(1);
        }

        if !lints.is_empty() {
            println!();
        }

        println!("✓ {} is valid\n", self.schema.display());

        println!(
            "  {}, {}:",
            counted(ns.namespace_count(), "namespace"),
            counted(ns.leaf_count(), "attribute")
        );
        for member in &ns.members {
            match member {
                Member::Namespace(child) => println!(
                    "    {} ({})",
                    child.name,
                    counted(child.leaf_count(), "attribute")
                ),
                Member::Attribute(attr) => println!("    {} -> {}", attr.name, attr.attribute),
            }
        }

        Ok(())
    }
}

/// `count` followed by `noun`, pluralised.
fn counted(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
