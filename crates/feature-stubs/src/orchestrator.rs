//! Orchestrator for converting feature files.

use crate::config::{Config, InputMode};
use crate::output::ReportFormatter;
use crate::paths;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;
use stub_codegen::ConvertStats;

/// One converted file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// The feature file read.
    pub input: PathBuf,
    /// The stub file written.
    pub output: PathBuf,
    /// Conversion counters.
    pub stats: ConvertStats,
}

/// Result of a run.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Directory the stubs were written to.
    pub output_dir: PathBuf,
    /// Converted files, in processing order.
    pub files: Vec<FileReport>,
    /// Time taken.
    pub duration_ms: u64,
}

impl RunResult {
    /// Total number of scenario blocks written.
    pub fn scenario_count(&self) -> usize {
        self.files.iter().map(|f| f.stats.scenarios).sum()
    }
}

/// Orchestrator for running feature-stubs.
pub struct Orchestrator {
    config: Config,
    formatter: Option<ReportFormatter>,
}

impl Orchestrator {
    /// Create a new orchestrator that prints a report as it goes.
    pub fn new(config: Config) -> Self {
        let formatter = ReportFormatter::new(config.output);
        Self {
            config,
            formatter: Some(formatter),
        }
    }

    /// Create an orchestrator that prints nothing.
    #[cfg(test)]
    pub fn quiet(config: Config) -> Self {
        Self {
            config,
            formatter: None,
        }
    }

    /// Convert every input file, one after the other.
    pub fn run(&self) -> Result<RunResult> {
        let start = Instant::now();

        let output_dir =
            paths::ensure_output_dir(&self.config.output_root, &self.config.out_dir_name)
                .into_diagnostic()
                .wrap_err_with(|| {
                    format!(
                        "Failed to create output directory {}",
                        self.config.output_dir().display()
                    )
                })?;

        let inputs = self.collect_inputs()?;
        tracing::debug!(count = inputs.len(), "found feature files");

        let mut result = RunResult {
            output_dir,
            ..Default::default()
        };

        for input in &inputs {
            let report = self.convert_file(input, &result.output_dir)?;
            if let Some(formatter) = &self.formatter {
                formatter.print_file(&report);
            }
            result.files.push(report);
        }

        result.duration_ms = start.elapsed().as_millis() as u64;

        if let Some(formatter) = &self.formatter {
            formatter.print_summary(&result);
        }

        Ok(result)
    }

    /// Input files for the configured mode.
    fn collect_inputs(&self) -> Result<Vec<PathBuf>> {
        match &self.config.mode {
            InputMode::Files(files) => Ok(files.clone()),
            InputMode::Directory(dir) => {
                let matcher = paths::file_name_matcher(&self.config.input_pattern)
                    .into_diagnostic()
                    .wrap_err("Invalid input file pattern")?;
                paths::find_feature_files(dir, &matcher)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to list {}", dir.display()))
            }
        }
    }

    /// Convert a single feature file into a fresh stub file.
    fn convert_file(&self, input: &Path, output_dir: &Path) -> Result<FileReport> {
        let source = fs::read_to_string(input)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", input.display()))?;
        let lines = feature_parser::clean_lines(&source);

        let output = paths::unique_output_path(output_dir, input, &self.config.extension);
        let file = File::create(&output)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create {}", output.display()))?;

        let stats = stub_codegen::write_stub(&lines, BufWriter::new(file))
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            scenarios = stats.scenarios,
            "wrote stub"
        );

        Ok(FileReport {
            input: input.to_path_buf(),
            output,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const LOGIN: &str = "\
Feature Login

US1: As a user I want to log in

Scenario Valid creds
Given a user
When they submit
Then they see home
";

    fn load(argv: &[&str]) -> Config {
        let mut full = vec!["feature-stubs"];
        full.extend_from_slice(argv);
        Config::load(&Args::try_parse_from(full).unwrap()).unwrap()
    }

    #[test]
    fn test_convert_files() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("US1.feature");
        fs::write(&input, LOGIN).unwrap();

        let result = Orchestrator::quiet(load(&[input.to_str().unwrap()]))
            .run()
            .unwrap();

        let expected = tmp.path().join("step_definitions").join("US1.e2e.js");
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].output, expected);
        assert_eq!(result.scenario_count(), 1);

        let written = fs::read_to_string(&expected).unwrap();
        assert_eq!(written, stub_codegen::generate(LOGIN));
        assert!(written.contains("describe( 'US1 - Login', () => {"));
    }

    #[test]
    fn test_rerun_does_not_overwrite() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("US1.feature");
        fs::write(&input, LOGIN).unwrap();

        let config = load(&[input.to_str().unwrap()]);
        Orchestrator::quiet(config.clone()).run().unwrap();
        let second = Orchestrator::quiet(config).run().unwrap();

        let out_dir = tmp.path().join("step_definitions");
        assert_eq!(second.files[0].output, out_dir.join("US1_1.e2e.js"));
        assert!(out_dir.join("US1.e2e.js").is_file());
    }

    #[test]
    fn test_same_stem_in_one_run() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("other")).unwrap();
        let first = tmp.path().join("US1.feature");
        let second = tmp.path().join("other").join("US1.feature");
        fs::write(&first, LOGIN).unwrap();
        fs::write(&second, LOGIN).unwrap();

        let result = Orchestrator::quiet(load(&[
            first.to_str().unwrap(),
            second.to_str().unwrap(),
        ]))
        .run()
        .unwrap();

        let out_dir = tmp.path().join("step_definitions");
        let outputs: Vec<_> = result.files.iter().map(|f| f.output.clone()).collect();
        assert_eq!(
            outputs,
            vec![out_dir.join("US1.e2e.js"), out_dir.join("US1_1.e2e.js")]
        );
    }

    #[test]
    fn test_convert_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("US2.feature"), LOGIN).unwrap();
        fs::write(tmp.path().join("US1.feature"), LOGIN).unwrap();
        fs::write(tmp.path().join("draft.feature"), LOGIN).unwrap();

        let result = Orchestrator::quiet(load(&["--dir", tmp.path().to_str().unwrap()]))
            .run()
            .unwrap();

        let out_dir = tmp.path().join("step_definitions");
        let outputs: Vec<_> = result.files.iter().map(|f| f.output.clone()).collect();
        assert_eq!(
            outputs,
            vec![out_dir.join("US1.e2e.js"), out_dir.join("US2.e2e.js")]
        );
        assert!(!out_dir.join("draft.e2e.js").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_with_dangling_link() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("US1.feature"), LOGIN).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("zz_dangling"))
            .unwrap();

        let result = Orchestrator::quiet(load(&["-d", tmp.path().to_str().unwrap()]))
            .run()
            .unwrap();

        assert_eq!(result.files.len(), 1);
        assert!(tmp
            .path()
            .join("step_definitions")
            .join("US1.e2e.js")
            .is_file());
    }

    #[test]
    fn test_empty_directory_still_creates_output_dir() {
        let tmp = TempDir::new().unwrap();
        let result = Orchestrator::quiet(load(&["-d", tmp.path().to_str().unwrap()]))
            .run()
            .unwrap();
        assert!(result.files.is_empty());
        assert!(tmp.path().join("step_definitions").is_dir());
    }

    #[test]
    fn test_custom_out_dir() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("US7.feature");
        fs::write(&input, LOGIN).unwrap();

        Orchestrator::quiet(load(&["--out-dir", "e2e", input.to_str().unwrap()]))
            .run()
            .unwrap();
        assert!(tmp.path().join("e2e").join("US7.e2e.js").is_file());
    }
}
