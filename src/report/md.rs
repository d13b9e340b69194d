use crate::types::report::Report;
use crate::types::survey::Dimension;

pub fn to_markdown(report: &Report) -> String {
    let mut output = String::new();
    output.push_str("# Readiness Report\n\n");
    output.push_str(&format!("Name: {}\n\n", report.name));
    output.push_str(&format!("Overall Readiness: {:.1}%\n\n", report.overall));

    output.push_str("## Subscores\n\n");
    for dimension in Dimension::ALL {
        let subscore = report.subscores.get(&dimension).copied().unwrap_or(0.0);
        output.push_str(&format!("- {}: {:.1}%\n", dimension.title(), subscore));
    }
    output.push('\n');

    // The original result view only shows this section when there is
    // something to suggest.
    if !report.nudges.is_empty() {
        output.push_str("## Growth Nudges (next steps)\n\n");
        for nudge in &report.nudges {
            output.push_str(&format!("- {nudge}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Assessment;

    #[test]
    fn markdown_report_contains_sections() {
        let assessment = Assessment {
            overall: 0.92,
            subscores: Dimension::ALL.into_iter().map(|d| (d, 0.9)).collect(),
            nudges: vec!["Practice reflecting back what you heard.".to_string()],
        };
        let report = Report::new(Some("Sam"), &assessment);

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Readiness Report"));
        assert!(rendered.contains("Overall Readiness: 92.0%"));
        assert!(rendered.contains("- Emotional Maturity: 90.0%"));
        assert!(rendered.contains("## Growth Nudges"));
        assert!(rendered.contains("Practice reflecting back"));
    }

    #[test]
    fn markdown_report_with_no_nudges_omits_the_section() {
        let assessment = Assessment {
            overall: 0.5,
            subscores: Dimension::ALL.into_iter().map(|d| (d, 0.5)).collect(),
            nudges: vec![],
        };
        let rendered = to_markdown(&Report::new(None, &assessment));
        assert!(!rendered.contains("Growth Nudges"));
    }
}
