//! Test stub generation from feature files.
//!
//! This crate renders the events produced by `feature-parser` into a
//! JavaScript test file for Detox/jest: a header, one `describe` per user
//! story with the default lifecycle hooks, and one nested `describe` holding
//! an empty `test` per scenario.

pub mod templates;
pub mod writer;

use feature_parser::{clean_lines, InputLine};
use std::io::{self, Write};

pub use writer::StubWriter;

/// Counters collected while converting one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvertStats {
    /// Non-blank lines processed.
    pub lines: usize,
    /// Feature description blocks written.
    pub user_stories: usize,
    /// Scenario blocks written.
    pub scenarios: usize,
    /// Lines without a recognised keyword.
    pub ignored_lines: usize,
}

/// Convert cleaned lines into a stub, writing it to `sink`.
pub fn write_stub<W: Write>(lines: &[InputLine<'_>], sink: W) -> io::Result<ConvertStats> {
    let mut writer = StubWriter::new(sink)?;
    for line in lines {
        writer.write_line(line)?;
    }
    let (_, stats) = writer.finish()?;
    Ok(stats)
}

/// Convert raw feature file text into stub source.
pub fn generate(source: &str) -> String {
    let mut out = Vec::new();
    write_stub(&clean_lines(source), &mut out).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}
