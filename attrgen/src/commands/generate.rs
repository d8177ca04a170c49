use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use attrgen_codegen::{BlackLocator, FormatMode, Pipeline, Writer, build_module, example_tree};
use attrgen_schema::{FormatConfig, GeneratorConfig, ModuleConfig, lint, metadata};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Format the output with black
    #[arg(short, long)]
    pub black: bool,

    /// Metadata JSON schema to generate from (defaults to a minimal example)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Path to attrgen.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum line length for the formatter
    #[arg(long)]
    pub line_length: Option<usize>,

    /// Output file (defaults to stdout)
    pub outfile: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => GeneratorConfig::open(path).unwrap_or_exit(),
            None => GeneratorConfig::default(),
        };

        let tree = self.tree(&config.module).unwrap_or_exit();
        let pipeline = self.pipeline(&config.format);
        self.emit(&pipeline, &tree).unwrap_or_exit();
        Ok(())
    }

    fn tree(&self, module: &ModuleConfig) -> attrgen_schema::Result<Writer> {
        let Some(path) = &self.schema else {
            return Ok(example_tree());
        };

        let ns = metadata::open(path, &module.name)?;
        for found in lint(&ns) {
            tracing::warn!("{found}");
        }
        Ok(build_module(&ns, module))
    }

    fn pipeline(&self, format: &FormatConfig) -> Pipeline {
        if !(self.black || format.enabled) {
            return Pipeline::new();
        }

        let mut locator = BlackLocator::new();
        if let Some(program) = &format.program {
            locator = locator.program(program);
        }
        let mode = FormatMode {
            line_length: self.line_length.unwrap_or(format.line_length),
        };
        Pipeline::new().format_with_black(locator, mode)
    }

    /// Stdout is streamed. A file is only written once the whole run has
    /// succeeded, so a failed run leaves an existing file untouched.
    fn emit(&self, pipeline: &Pipeline, tree: &Writer) -> attrgen_codegen::Result<()> {
        match &self.outfile {
            None => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                pipeline.run(tree, &mut lock)
            }
            Some(path) => {
                let mut buffer = Vec::new();
                pipeline.run(tree, &mut buffer)?;
                let mut file = fs::File::create(path)?;
                file.write_all(&buffer)?;
                tracing::debug!("wrote {} bytes to {}", buffer.len(), path.display());
                Ok(())
            }
        }
    }
}
