//! Keyword classification of feature file lines.
//!
//! A line is classified by looking for a keyword *anywhere* inside its first
//! token, so `MyFeatureX` is a feature line and `USER:` a user story marker.
//! When a token contains several keywords the first one in [`Keyword::ALL`]
//! wins.

use std::fmt;

/// A recognised line keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    /// `Feature <title>`
    Feature,
    /// `US<n>:` user story marker.
    UserStory,
    /// `Scenario <title>`
    Scenario,
    /// `Given <step>`
    Given,
    /// `When <step>`
    When,
    /// `Then <step>`, completes a scenario.
    Then,
}

impl Keyword {
    /// All keywords, in classification priority order.
    pub const ALL: [Keyword; 6] = [
        Keyword::Feature,
        Keyword::UserStory,
        Keyword::Scenario,
        Keyword::Given,
        Keyword::When,
        Keyword::Then,
    ];

    /// The literal text searched for in a line's first token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Feature => "Feature",
            Keyword::UserStory => "US",
            Keyword::Scenario => "Scenario",
            Keyword::Given => "Given",
            Keyword::When => "When",
            Keyword::Then => "Then",
        }
    }

    /// Whether the keyword text is kept in the stored value.
    pub fn keeps_keyword(&self) -> bool {
        matches!(self, Keyword::Given | Keyword::When | Keyword::Then)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a first token by substring containment.
pub fn classify(token: &str) -> Option<Keyword> {
    Keyword::ALL
        .into_iter()
        .find(|keyword| token.contains(keyword.as_str()))
}
