use crate::score::Assessment;
use crate::types::survey::Dimension;
use serde::Serialize;
use std::collections::BTreeMap;

pub const REPORT_TYPE: &str = "readiness_report";

/// The externally visible report: percentages rounded to one decimal,
/// serialized exactly as downloaded by the user.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub overall: f64,
    pub subscores: BTreeMap<Dimension, f64>,
    pub nudges: Vec<String>,
}

impl Report {
    /// Converts an assessment's [0, 1] fractions into rounded
    /// percentages. An absent or empty name falls back to "anonymous".
    pub fn new(name: Option<&str>, assessment: &Assessment) -> Self {
        let name = match name {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => "anonymous".to_string(),
        };
        Report {
            kind: REPORT_TYPE,
            name,
            overall: percent(assessment.overall),
            subscores: assessment
                .subscores
                .iter()
                .map(|(dimension, subscore)| (*dimension, percent(*subscore)))
                .collect(),
            nudges: assessment.nudges.clone(),
        }
    }
}

fn percent(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment() -> Assessment {
        Assessment {
            overall: 0.923,
            subscores: Dimension::ALL.into_iter().map(|d| (d, 0.9)).collect(),
            nudges: vec!["practice".to_string()],
        }
    }

    #[test]
    fn report_rounds_to_one_decimal_percent() {
        let report = Report::new(Some("Sam"), &assessment());
        assert_eq!(report.overall, 92.3);
        assert_eq!(report.subscores[&Dimension::EmotionalMaturity], 90.0);
    }

    #[test]
    fn report_name_falls_back_to_anonymous() {
        assert_eq!(Report::new(None, &assessment()).name, "anonymous");
        assert_eq!(Report::new(Some(""), &assessment()).name, "anonymous");
        assert_eq!(Report::new(Some("Sam"), &assessment()).name, "Sam");
    }

    #[test]
    fn report_kind_is_fixed() {
        assert_eq!(Report::new(None, &assessment()).kind, "readiness_report");
    }
}
