//! Python string literals.

/// Quote `s` as a Python string literal, the way `repr(str)` does.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote. Backslashes, the chosen quote and non-printable characters
/// are escaped, so evaluating the literal gives back exactly `s`.
///
/// ```
/// use attrgen_codegen::python_str_literal;
///
/// assert_eq!(python_str_literal("a Foo"), "'a Foo'");
/// assert_eq!(python_str_literal("it's"), "\"it's\"");
/// assert_eq!(python_str_literal("line\nbreak"), "'line\\nbreak'");
/// ```
pub fn python_str_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&escape_code_point(c)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn escape_code_point(c: char) -> String {
    match u32::from(c) {
        n if n < 0x100 => format!("\\x{n:02x}"),
        n if n < 0x10000 => format!("\\u{n:04x}"),
        n => format!("\\U{n:08x}"),
    }
}

/// Approximates `str.isprintable`: controls, separators other than the
/// ASCII space, and the common invisible format characters are escaped.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control()
        || c.is_whitespace()
        || matches!(
            c,
            '\u{ad}'
                | '\u{200b}'..='\u{200f}'
                | '\u{2060}'..='\u{2064}'
                | '\u{feff}'
                | '\u{e0000}'..='\u{e007f}'
        ))
}
