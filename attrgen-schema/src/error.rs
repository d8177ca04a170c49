use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for attrgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(attrgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse metadata schema")]
    #[diagnostic(
        code(attrgen::json_error),
        help("the metadata schema must be a JSON schema document")
    )]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(attrgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("type of '{path}' couldn't be determined")]
    #[diagnostic(
        code(attrgen::ambiguous_type),
        help("anyOf, oneOf and allOf are only supported when every alternative is the same leaf")
    )]
    Ambiguous { path: String },

    #[error("unrecognized node type '{ty}' of '{path}'")]
    #[diagnostic(
        code(attrgen::unknown_type),
        help("supported types are: string, number, integer, date, array, object")
    )]
    UnknownType { path: String, ty: String },

    #[error("array '{path}' has no 'items'")]
    #[diagnostic(code(attrgen::missing_items))]
    MissingItems { path: String },

    #[error("schema root must be an object, found '{ty}'")]
    #[diagnostic(code(attrgen::root_not_object))]
    RootNotObject { ty: String },
}

impl Error {
    /// Create a JSON parse error, locating the failure in the source
    pub fn json(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = line_col_offset(src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Json {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    pub fn ambiguous(path: impl Into<String>) -> Box<Self> {
        Box::new(Error::Ambiguous { path: path.into() })
    }

    pub fn unknown_type(path: impl Into<String>, ty: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownType {
            path: path.into(),
            ty: ty.into(),
        })
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
fn line_col_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_offset() {
        let src = "{\n  \"a\": x\n}";
        assert_eq!(line_col_offset(src, 1, 1), Some(0));
        assert_eq!(line_col_offset(src, 2, 8), Some(9));
        assert_eq!(line_col_offset(src, 0, 0), None);
        assert_eq!(line_col_offset(src, 9, 1), None);
    }

    #[test]
    fn test_json_error_has_span() {
        let src = "{ \"type\": }";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::json(err, src, "schema.json");
        match *err {
            Error::Json { span, .. } => assert!(span.is_some()),
            other => panic!("expected Json error, got {other:?}"),
        }
    }
}
