//! Parse state carried across the lines of one feature file.

use smol_str::SmolStr;

/// The fields of the scenario currently being accumulated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioFields {
    /// Scenario title, without the keyword.
    pub scenario: String,
    /// Full `Given` line.
    pub given: String,
    /// Full `When` line.
    pub when: String,
    /// Full `Then` line.
    pub then: String,
}

impl ScenarioFields {
    /// Clear all four fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Take the accumulated fields, leaving every field empty.
    pub fn take(&mut self) -> Self {
        let fields = self.clone();
        self.reset();
        fields
    }
}

/// Accumulator for one feature file.
///
/// `feature` and `user_story` outlive scenarios: they are only replaced by a
/// later `Feature` or `US` line. `scenario` is cleared after every flush.
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    /// Title from the most recent `Feature` line.
    pub feature: SmolStr,
    /// Identifier from the most recent `US` line.
    pub user_story: SmolStr,
    /// The scenario being accumulated.
    pub scenario: ScenarioFields,
}
