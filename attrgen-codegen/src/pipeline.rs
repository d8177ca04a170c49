//! A full generation run: render the tree, optionally format, emit.

use std::{fmt, io::Write};

use crate::{
    Emitter, Indent, Render, Result,
    format::{BlackLocator, FormatMode, Formatter},
    writer,
};

/// Where the formatter for the formatting pass comes from.
enum FormatterSource {
    /// Locate black when the run starts.
    Black(BlackLocator),
    /// An already available formatter.
    Given(Box<dyn Formatter>),
}

struct FormatPass {
    source: FormatterSource,
    mode: FormatMode,
}

/// Renders a writer tree into a sink.
///
/// Without a formatting pass the tree streams straight into the sink. With
/// one, the formatter is resolved before anything is rendered, the whole
/// text is buffered, and only the formatter's output reaches the sink.
///
/// ```
/// use attrgen_codegen::{Pipeline, example_tree};
///
/// let mut out = Vec::new();
/// Pipeline::new().run(&example_tree(), &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("class Foo:\n"));
/// ```
pub struct Pipeline {
    indent: Indent,
    format: Option<FormatPass>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("indent", &self.indent)
            .field("format", &self.format.as_ref().map(|pass| pass.mode))
            .finish()
    }
}

impl Pipeline {
    /// Unformatted output with Python indentation.
    pub fn new() -> Self {
        Self {
            indent: Indent::PYTHON,
            format: None,
        }
    }

    /// Indentation unit; any `Spaces` width is emitted as given.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Format with black, located through `locator` at run time.
    pub fn format_with_black(mut self, locator: BlackLocator, mode: FormatMode) -> Self {
        self.format = Some(FormatPass {
            source: FormatterSource::Black(locator),
            mode,
        });
        self
    }

    /// Format with the given formatter.
    pub fn format_with(mut self, formatter: impl Formatter + 'static, mode: FormatMode) -> Self {
        self.format = Some(FormatPass {
            source: FormatterSource::Given(Box::new(formatter)),
            mode,
        });
        self
    }

    pub fn formats(&self) -> bool {
        self.format.is_some()
    }

    /// Render `root` at depth 0 into a string, without formatting.
    pub fn render_to_string(&self, root: &dyn Render) -> Result<String> {
        Ok(writer::render_to_string(&root, self.indent)?)
    }

    /// Run the pipeline, writing the result to `out`.
    ///
    /// Fails with [`Error::Configuration`](crate::Error::Configuration)
    /// before writing anything if a formatting pass is configured and its
    /// formatter cannot be found.
    pub fn run(&self, root: &dyn Render, out: &mut dyn Write) -> Result<()> {
        let Some(pass) = &self.format else {
            tracing::debug!("rendering without formatting");
            let mut emitter = Emitter::new(out, self.indent);
            root.render(&mut emitter, 0)?;
            emitter.flush()?;
            return Ok(());
        };

        let black;
        let formatter: &dyn Formatter = match &pass.source {
            FormatterSource::Black(locator) => {
                black = locator.locate()?;
                &black
            }
            FormatterSource::Given(formatter) => formatter.as_ref(),
        };
        let unformatted = self.render_to_string(root)?;
        tracing::debug!(bytes = unformatted.len(), "formatting rendered source");
        let formatted = formatter.format(&unformatted, &pass.mode)?;

        out.write_all(formatted.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
