use serde::{Deserialize, Serialize};
use std::fmt;

/// The five readiness categories being scored.
///
/// Declaration order doubles as the tie-break order when two dimensions
/// share a subscore during nudge selection. The variants happen to sort
/// alphabetically in the same order, so `BTreeMap<Dimension, _>` keys
/// iterate in it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    EmotionalMaturity,
    FaithValues,
    FamilyOfOrigin,
    PracticalReadiness,
    RelationalSkills,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::EmotionalMaturity,
        Dimension::FaithValues,
        Dimension::FamilyOfOrigin,
        Dimension::PracticalReadiness,
        Dimension::RelationalSkills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::EmotionalMaturity => "emotional_maturity",
            Dimension::FaithValues => "faith_values",
            Dimension::FamilyOfOrigin => "family_of_origin",
            Dimension::PracticalReadiness => "practical_readiness",
            Dimension::RelationalSkills => "relational_skills",
        }
    }

    /// Human-readable label, e.g. "Emotional Maturity".
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    Scale,
    Boolean,
    Choice,
}

/// One fixed-form survey question. Defined once at start; immutable.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub dimension: Dimension,
    pub answer_type: AnswerType,
    pub prompt: &'static str,
    /// Allowed answer labels, in presentation order. Empty for scale
    /// questions, which accept 1..=5.
    pub choices: &'static [&'static str],
}
