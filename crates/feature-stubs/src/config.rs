//! Configuration built from the command line.

use crate::cli::{Args, OutputFormat};
use crate::error::UsageError;
use std::path::{Component, Path, PathBuf};

/// Extension of the generated files, without the leading dot.
pub const OUTPUT_EXTENSION: &str = "e2e.js";

/// File names converted in directory mode.
pub const INPUT_PATTERN: &str = "US*.feature";

/// Where the inputs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Explicit list of files.
    Files(Vec<PathBuf>),
    /// Every matching file directly inside a directory.
    Directory(PathBuf),
}

/// Configuration for feature-stubs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input selection.
    pub mode: InputMode,
    /// Directory the output directory is created in.
    pub output_root: PathBuf,
    /// Name of the output directory.
    pub out_dir_name: String,
    /// Extension of generated files.
    pub extension: String,
    /// Glob for input file names in directory mode.
    pub input_pattern: String,
    /// Report format.
    pub output: OutputFormat,
    /// Verbose logging.
    pub verbose: bool,
}

impl Config {
    /// Validate the arguments and build the configuration.
    ///
    /// Nothing is written to disk here, so a failed check leaves the
    /// filesystem untouched.
    pub fn load(args: &Args) -> Result<Self, UsageError> {
        validate_out_dir(&args.out_dir)?;

        let (mode, output_root) = if args.directory {
            let dir = &args.paths[0];
            if !dir.is_dir() {
                return Err(UsageError::NotADirectory(dir.clone()));
            }
            if args.paths.len() > 1 {
                return Err(UsageError::TooManyDirectories);
            }
            (InputMode::Directory(dir.clone()), dir.clone())
        } else {
            if let Some(bad) = args.paths.iter().find(|p| !p.is_file()) {
                return Err(UsageError::NotAFile(bad.clone()));
            }
            let root = args.paths[0]
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            (InputMode::Files(args.paths.clone()), root)
        };

        Ok(Self {
            mode,
            output_root,
            out_dir_name: args.out_dir.clone(),
            extension: OUTPUT_EXTENSION.to_string(),
            input_pattern: INPUT_PATTERN.to_string(),
            output: args.output,
            verbose: args.verbose,
        })
    }

    /// Full path of the output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(&self.out_dir_name)
    }
}

/// The output directory must be a single plain path component.
fn validate_out_dir(name: &str) -> Result<(), UsageError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(UsageError::InvalidOutDir(name.to_string())),
    }
}
