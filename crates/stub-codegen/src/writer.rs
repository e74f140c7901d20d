//! Streaming writer for stub files.

use crate::templates;
use crate::ConvertStats;
use feature_parser::{FeatureParser, InputLine, ParseEvent};
use std::io::{self, Write};

/// Writes one stub file to a sink, block by block.
///
/// The header is written by [`StubWriter::new`] and the closing block by
/// [`StubWriter::finish`], which also flushes the sink.
pub struct StubWriter<W: Write> {
    sink: W,
    parser: FeatureParser,
    stats: ConvertStats,
}

impl<W: Write> StubWriter<W> {
    /// Create a writer and emit the file header.
    pub fn new(mut sink: W) -> io::Result<Self> {
        sink.write_all(templates::header().as_bytes())?;
        Ok(Self {
            sink,
            parser: FeatureParser::new(),
            stats: ConvertStats::default(),
        })
    }

    /// Process one line, writing whatever block it completes.
    pub fn write_line(&mut self, line: &InputLine<'_>) -> io::Result<()> {
        self.stats.lines += 1;
        match self.parser.feed(line) {
            Some(event) => self.write_event(&event),
            None => Ok(()),
        }
    }

    /// Render a parse event into the sink.
    fn write_event(&mut self, event: &ParseEvent) -> io::Result<()> {
        match event {
            ParseEvent::FeatureDescription {
                feature,
                user_story,
            } => {
                self.stats.user_stories += 1;
                let block = templates::feature_description(feature, user_story);
                self.sink.write_all(block.as_bytes())
            }
            ParseEvent::Scenario(fields) => {
                self.stats.scenarios += 1;
                if fields.scenario.is_empty() {
                    tracing::warn!(then = %fields.then, "scenario has no title");
                }
                self.sink.write_all(templates::scenario(fields).as_bytes())
            }
        }
    }

    /// Write the closing block, flush, and return the sink with the stats.
    pub fn finish(mut self) -> io::Result<(W, ConvertStats)> {
        self.stats.ignored_lines = self.parser.ignored_lines();
        self.sink.write_all(templates::closing().as_bytes())?;
        self.sink.flush()?;
        if self.stats.user_stories == 0 {
            tracing::warn!("no user story marker found, output is unbalanced");
        }
        Ok((self.sink, self.stats))
    }
}
