use crate::error::{ReadinessError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A raw answer as collected by whatever front end gathered it.
/// Sliders deliver numbers, radio/select widgets deliver strings, and
/// some collectors serialize yes/no toggles as JSON booleans. Scoring
/// only ever looks at the lowercased text form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl RawAnswer {
    /// Lowercased textual form used by every scoring rule. Whole
    /// numbers print without a trailing ".0" so that a slider value of
    /// 1 matches the boolean "1" token.
    pub fn to_lowercase(&self) -> String {
        match self {
            RawAnswer::Number(value) => {
                if value.fract() == 0.0 && value.is_finite() {
                    format!("{}", *value as i64)
                } else {
                    format!("{value}")
                }
            }
            RawAnswer::Text(text) => text.to_lowercase(),
            RawAnswer::Flag(flag) => flag.to_string(),
        }
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        RawAnswer::Text(value.to_string())
    }
}

impl From<f64> for RawAnswer {
    fn from(value: f64) -> Self {
        RawAnswer::Number(value)
    }
}

/// Mapping from question id to raw answer, one per scoring invocation.
pub type ResponseMap = BTreeMap<String, RawAnswer>;

/// Loads a response map from a JSON answers file: a single object
/// mapping question ids to answer values.
pub fn load_answers(path: &Path) -> Result<ResponseMap> {
    if !path.exists() {
        return Err(ReadinessError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ReadinessError::AnswersParse(format!("{}: {}", path.display(), e)))
}
