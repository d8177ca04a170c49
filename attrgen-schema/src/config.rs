//! `attrgen.toml` configuration.
//!
//! Every key is optional:
//!
//! ```toml
//! [module]
//! name = "rcsb_attributes"
//! doc = "Generated attribute accessors"
//! imports = ["from rcsbsearch.search import Attr"]
//!
//! [format]
//! enabled = true
//! line_length = 88
//! program = "black"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Default import line for generated modules.
pub const DEFAULT_IMPORT: &str = "from rcsbsearch.search import Attr";

/// Default line length, matching black.
pub const DEFAULT_LINE_LENGTH: usize = 88;

/// Root of `attrgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub module: ModuleConfig,
    pub format: FormatConfig,
}

/// Shape of the generated Python module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConfig {
    /// Name of the root class.
    pub name: String,
    /// Module docstring.
    pub doc: Option<String>,
    /// Import lines emitted before the classes.
    pub imports: Vec<String>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: "rcsb_attributes".to_string(),
            doc: None,
            imports: vec![DEFAULT_IMPORT.to_string()],
        }
    }
}

/// Settings for the formatting pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Run the formatter (same as `--black`).
    pub enabled: bool,
    pub line_length: usize,
    /// Formatter executable; `black` on `PATH` when unset.
    pub program: Option<PathBuf>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            line_length: DEFAULT_LINE_LENGTH,
            program: None,
        }
    }
}

impl GeneratorConfig {
    /// Open and parse an attrgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_str_with_filename(&content, &filename)
    }

    /// Parse config with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }
}

impl std::str::FromStr for GeneratorConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "attrgen.toml")
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GeneratorConfig::from_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.module.name, "rcsb_attributes");
        assert_eq!(config.module.imports, [DEFAULT_IMPORT]);
        assert!(!config.format.enabled);
        assert_eq!(config.format.line_length, 88);
    }

    #[test]
    fn test_full_config() {
        let config = GeneratorConfig::from_str(
            r#"
            [module]
            name = "attrs"
            doc = "Generated"
            imports = ["from ..search import Attr"]

            [format]
            enabled = true
            line_length = 100
            program = "/usr/local/bin/black"
            "#,
        )
        .unwrap();
        assert_eq!(config.module.name, "attrs");
        assert_eq!(config.module.doc.as_deref(), Some("Generated"));
        assert_eq!(config.module.imports, ["from ..search import Attr"]);
        assert!(config.format.enabled);
        assert_eq!(config.format.line_length, 100);
        assert_eq!(
            config.format.program.as_deref(),
            Some(Path::new("/usr/local/bin/black"))
        );
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = GeneratorConfig::from_str("[format]\nenabled = true\n").unwrap();
        assert!(config.format.enabled);
        assert_eq!(config.format.line_length, DEFAULT_LINE_LENGTH);
        assert_eq!(config.module, ModuleConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = GeneratorConfig::from_str("[format]\ncolour = true\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_open_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("attrgen.toml");
        std::fs::write(&path, "[module]\nname = \"x\"\n").unwrap();
        assert_eq!(GeneratorConfig::open(&path).unwrap().module.name, "x");
    }
}
