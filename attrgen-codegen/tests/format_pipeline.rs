//! Integration tests for the formatting pass.
//!
//! A shell script stands in for black where the behaviour under test is the
//! pipeline's, not black's. The idempotence test needs a real black and is
//! ignored by default.

use std::{fs, path::Path};

use attrgen_codegen::{Black, BlackLocator, Error, FormatMode, Formatter, Pipeline, example_tree};
use tempfile::TempDir;

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn test_fake_black_is_detected_and_used() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        dir.path(),
        "black",
        r#"if [ "$1" = "--version" ]; then echo "black, 24.1.0 (fake)"; exit 0; fi
exec sed "s/'/\"/g""#,
    );

    let locator = BlackLocator::new().program(&script).without_python_fallback();
    let black = locator.locate().unwrap();
    assert_eq!(black.version(), "black, 24.1.0 (fake)");

    let mut out = Vec::new();
    Pipeline::new()
        .format_with_black(locator, FormatMode::default())
        .run(&example_tree(), &mut out)
        .unwrap();
    let code = String::from_utf8(out).unwrap();
    assert!(code.contains("    \"a Foo\"\n"));
    assert!(code.contains("return Attr(\"rcsb_prop\")"));
}

#[cfg(unix)]
#[test]
fn test_formatter_rejection_is_format_error() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        dir.path(),
        "black",
        r#"if [ "$1" = "--version" ]; then echo "black, 24.1.0 (fake)"; exit 0; fi
cat > /dev/null
echo "error: cannot format -: Cannot parse" >&2
exit 123"#,
    );

    let black = BlackLocator::new()
        .program(&script)
        .without_python_fallback()
        .locate()
        .unwrap();
    let err = black.format("class :\n", &FormatMode::default()).unwrap_err();
    match err {
        Error::Format { message } => assert!(message.contains("Cannot parse")),
        other => panic!("expected Format error, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_formatter_exiting_early_reports_its_stderr() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        dir.path(),
        "black",
        r#"if [ "$1" = "--version" ]; then echo "black, 19.3b0 (fake)"; exit 0; fi
echo "Error: No such option: --line-length" >&2
exit 2"#,
    );

    let black = BlackLocator::new()
        .program(&script)
        .without_python_fallback()
        .locate()
        .unwrap();
    // larger than a pipe buffer, so the write fails once the script is gone
    let source = "x = 1\n".repeat(100_000);
    let err = black.format(&source, &FormatMode::default()).unwrap_err();
    match err {
        Error::Format { message } => {
            assert!(message.contains("No such option: --line-length"), "{message}");
        }
        other => panic!("expected Format error, got {other:?}"),
    }
}

#[test]
fn test_missing_formatter_leaves_output_file_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("attrs.py");
    let mut file = fs::File::create(&path).unwrap();

    let locator = BlackLocator::new()
        .program(dir.path().join("no-black-here"))
        .python(dir.path().join("no-python-here"));
    let err = Pipeline::new()
        .format_with_black(locator, FormatMode::default())
        .run(&example_tree(), &mut file)
        .unwrap_err();
    drop(file);

    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_unformatted_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("attrs.py");
    let mut file = fs::File::create(&path).unwrap();
    Pipeline::new().run(&example_tree(), &mut file).unwrap();
    drop(file);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("class Foo:\n"));
    assert!(content.ends_with("            return Attr('rcsb_prop')\n"));
}

#[test]
#[ignore = "requires black; run with `cargo test -- --ignored`"]
fn test_real_black_is_idempotent() {
    let black = Black::detect().expect("black is not installed");
    let mode = FormatMode::default();

    let raw = Pipeline::new().render_to_string(&example_tree()).unwrap();
    let once = black.format(&raw, &mode).unwrap();
    let twice = black.format(&once, &mode).unwrap();

    assert_eq!(once, twice);
    assert!(once.contains("return Attr(\"rcsb_prop\")"));
}
