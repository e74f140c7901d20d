//! Parser for Gherkin-style feature description files.
//!
//! This crate turns the lines of a `.feature` file into a stream of
//! [`ParseEvent`]s. Lines are classified by their first token, a small
//! [`ParseState`] accumulates the current feature, user story and scenario,
//! and an event is produced whenever a user story opens or a `Then` step
//! completes a scenario.

pub mod keyword;
pub mod line;
pub mod parser;
pub mod state;

pub use keyword::{classify, Keyword};
pub use line::{clean_lines, InputLine};
pub use parser::{FeatureParser, ParseEvent};
pub use state::{ParseState, ScenarioFields};
