//! Indentation unit for generated code.

use std::borrow::Cow;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (PEP 8, and what black emits).
    pub const PYTHON: Self = Self::Spaces(4);

    /// The string for one indent level, exactly `n` spaces for `Spaces(n)`.
    ///
    /// `Spaces(0)` yields an empty unit, so nested blocks are not valid Python.
    pub fn as_str(&self) -> Cow<'static, str> {
        const SPACES: &str = "        ";

        match *self {
            Self::Spaces(n) if usize::from(n) <= SPACES.len() => {
                Cow::Borrowed(&SPACES[..usize::from(n)])
            }
            Self::Spaces(n) => Cow::Owned(" ".repeat(usize::from(n))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PYTHON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(6).as_str(), "      ");
        assert_eq!(Indent::Spaces(12).as_str(), " ".repeat(12));
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default_is_python() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }
}
