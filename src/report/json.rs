use crate::types::report::Report;

pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Assessment;
    use crate::types::survey::Dimension;

    #[test]
    fn json_report_carries_the_exact_schema() {
        let assessment = Assessment {
            overall: 0.5,
            subscores: Dimension::ALL.into_iter().map(|d| (d, 0.5)).collect(),
            nudges: vec!["nudge".to_string()],
        };
        let report = Report::new(Some("Jo Ann"), &assessment);

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"type\": \"readiness_report\""));
        assert!(rendered.contains("\"name\": \"Jo Ann\""));
        assert!(rendered.contains("\"overall\": 50.0"));
        assert!(rendered.contains("\"emotional_maturity\": 50.0"));
        assert!(rendered.contains("\"relational_skills\": 50.0"));
        assert!(rendered.contains("\"nudges\""));
    }

    #[test]
    fn json_subscores_keep_declaration_order() {
        let assessment = Assessment {
            overall: 0.5,
            subscores: Dimension::ALL.into_iter().map(|d| (d, 0.5)).collect(),
            nudges: vec![],
        };
        let rendered =
            to_json(&Report::new(None, &assessment)).expect("json should serialize");
        let emotional = rendered.find("emotional_maturity").expect("key present");
        let relational = rendered.find("relational_skills").expect("key present");
        assert!(emotional < relational);
    }
}
