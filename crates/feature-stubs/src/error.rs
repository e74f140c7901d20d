//! Precondition failures reported before any file is written.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// An invalid invocation.
#[derive(Debug, Error, Diagnostic)]
pub enum UsageError {
    #[error("Error! {} is not a directory.", .0.display())]
    #[diagnostic(code(feature_stubs::not_a_directory))]
    NotADirectory(PathBuf),

    #[error("Error! Only one directory is accepted.")]
    #[diagnostic(
        code(feature_stubs::too_many_directories),
        help("pass a single directory with --dir, or list the files without it")
    )]
    TooManyDirectories,

    #[error("Error! {} is not a file.", .0.display())]
    #[diagnostic(code(feature_stubs::not_a_file))]
    NotAFile(PathBuf),

    #[error("Error! Invalid output directory name: {0:?}")]
    #[diagnostic(code(feature_stubs::invalid_out_dir))]
    InvalidOutDir(String),
}
