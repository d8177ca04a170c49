//! The optional formatting pass.
//!
//! [`Formatter`] is the capability the pipeline needs; [`Black`] provides it
//! by piping source through the external `black` tool. Black ships both a
//! console script and a runnable module, so [`BlackLocator`] probes the
//! executable first and falls back to `python -m black`.

use std::{
    fmt,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use attrgen_schema::DEFAULT_LINE_LENGTH;

use crate::{Error, Result};

/// Style options passed to the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatMode {
    pub line_length: usize,
}

impl Default for FormatMode {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

/// Rewrites complete source text.
pub trait Formatter {
    /// Return the formatted version of `source`.
    fn format(&self, source: &str, mode: &FormatMode) -> Result<String>;
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, source: &str, mode: &FormatMode) -> Result<String> {
        self.as_ref().format(source, mode)
    }
}

/// A way of running black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The `black` console script.
    Executable(PathBuf),
    /// `<python> -m black`.
    PythonModule(PathBuf),
}

impl Invocation {
    fn command(&self) -> Command {
        match self {
            Self::Executable(program) => Command::new(program),
            Self::PythonModule(python) => {
                let mut command = Command::new(python);
                command.args(["-m", "black"]);
                command
            }
        }
    }

    /// Run `--version`; `Some(version)` if the formatter answered.
    fn probe(&self) -> Option<String> {
        let output = self
            .command()
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Executable(program) => write!(f, "{}", program.display()),
            Self::PythonModule(python) => write!(f, "{} -m black", python.display()),
        }
    }
}

/// Where to look for black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackLocator {
    program: PathBuf,
    python: Option<PathBuf>,
}

impl Default for BlackLocator {
    fn default() -> Self {
        Self {
            program: PathBuf::from("black"),
            python: Some(PathBuf::from("python3")),
        }
    }
}

impl BlackLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific black executable.
    pub fn program(mut self, program: impl AsRef<Path>) -> Self {
        self.program = program.as_ref().to_path_buf();
        self
    }

    /// Interpreter used for the `-m black` fallback.
    pub fn python(mut self, python: impl AsRef<Path>) -> Self {
        self.python = Some(python.as_ref().to_path_buf());
        self
    }

    /// Only try the executable.
    pub fn without_python_fallback(mut self) -> Self {
        self.python = None;
        self
    }

    /// Invocations in the order they are probed.
    pub fn candidates(&self) -> Vec<Invocation> {
        let mut candidates = vec![Invocation::Executable(self.program.clone())];
        if let Some(python) = &self.python {
            candidates.push(Invocation::PythonModule(python.clone()));
        }
        candidates
    }

    /// Find a working black, or fail with [`Error::Configuration`].
    pub fn locate(&self) -> Result<Black> {
        let candidates = self.candidates();
        for invocation in &candidates {
            if let Some(version) = invocation.probe() {
                tracing::debug!("using formatter `{}` ({})", invocation, version);
                return Ok(Black {
                    invocation: invocation.clone(),
                    version,
                });
            }
            tracing::debug!("formatter `{}` not available", invocation);
        }

        let tried: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        Err(Error::configuration(format!(
            "black formatter not found (tried: {})",
            tried.join(", ")
        )))
    }
}

/// A located black installation.
#[derive(Debug, Clone)]
pub struct Black {
    invocation: Invocation,
    version: String,
}

impl Black {
    /// Locate black on `PATH`, falling back to `python3 -m black`.
    pub fn detect() -> Result<Self> {
        BlackLocator::default().locate()
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Output of `black --version`.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Formatter for Black {
    fn format(&self, source: &str, mode: &FormatMode) -> Result<String> {
        let line_length = mode.line_length.to_string();
        let mut child = self
            .invocation
            .command()
            .args(["--quiet", "--line-length", line_length.as_str(), "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::configuration(format!("failed to run `{}`: {}", self.invocation, e))
            })?;

        // black reads all of stdin before it writes anything. A process that
        // exits early closes the pipe; its exit status and stderr explain why.
        let sent = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(source.as_bytes()),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .map_err(|e| Error::format(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::format(if stderr.is_empty() {
                format!("`{}` exited with {}", self.invocation, output.status)
            } else {
                stderr
            }));
        }
        sent.map_err(|e| Error::format(format!("could not send source: {e}")))?;

        String::from_utf8(output.stdout).map_err(|e| Error::format(e.to_string()))
    }
}
