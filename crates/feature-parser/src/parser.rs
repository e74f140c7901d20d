//! Line classifier and accumulator.

use crate::keyword::{classify, Keyword};
use crate::line::InputLine;
use crate::state::{ParseState, ScenarioFields};
use smol_str::SmolStr;

/// Something the emitter has to render.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseEvent {
    /// A `US` line opened a user story section.
    FeatureDescription {
        feature: SmolStr,
        user_story: SmolStr,
    },
    /// A `Then` line completed a scenario.
    Scenario(ScenarioFields),
}

/// Stateful single pass over the lines of one feature file.
#[derive(Debug, Default)]
pub struct FeatureParser {
    state: ParseState,
    ignored_lines: usize,
}

impl FeatureParser {
    /// Create a parser with an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state.
    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Number of lines fed so far whose first token held no keyword.
    pub fn ignored_lines(&self) -> usize {
        self.ignored_lines
    }

    /// Feed the next line, returning the event it completes, if any.
    ///
    /// Lines whose first token contains no keyword are ignored.
    pub fn feed(&mut self, line: &InputLine<'_>) -> Option<ParseEvent> {
        let tokens = line.tokens();
        let first = *tokens.first()?;

        let Some(keyword) = classify(first) else {
            tracing::trace!(line = line.number, "ignoring line without keyword");
            self.ignored_lines += 1;
            return None;
        };
        tracing::trace!(line = line.number, %keyword, "classified line");

        let value = if keyword.keeps_keyword() {
            tokens.join(" ")
        } else {
            tokens[1..].join(" ")
        };

        match keyword {
            Keyword::Feature => {
                self.state.feature = value.into();
                None
            }
            Keyword::UserStory => {
                self.state.user_story = user_story_id(first);
                Some(ParseEvent::FeatureDescription {
                    feature: self.state.feature.clone(),
                    user_story: self.state.user_story.clone(),
                })
            }
            Keyword::Scenario => {
                self.state.scenario.scenario = value;
                None
            }
            Keyword::Given => {
                self.state.scenario.given = value;
                None
            }
            Keyword::When => {
                self.state.scenario.when = value;
                None
            }
            Keyword::Then => {
                self.state.scenario.then = value;
                Some(ParseEvent::Scenario(self.state.scenario.take()))
            }
        }
    }
}

/// The marker token without its trailing character (`US1:` -> `US1`).
fn user_story_id(token: &str) -> SmolStr {
    let mut chars = token.chars();
    chars.next_back();
    SmolStr::new(chars.as_str())
}
