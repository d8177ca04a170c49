use miette::Diagnostic;
use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Formatting was requested but no formatter could be located.
    #[error("{message}")]
    #[diagnostic(
        code(attrgen::configuration),
        help("install black (`pip install black`) or generate without --black")
    )]
    Configuration { message: String },

    /// Writing to the output sink failed.
    #[error(transparent)]
    #[diagnostic(code(attrgen::sink))]
    Sink(#[from] std::io::Error),

    /// The formatter ran but rejected the generated source.
    #[error("formatter failed: {message}")]
    #[diagnostic(code(attrgen::format))]
    Format { message: String },
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}
