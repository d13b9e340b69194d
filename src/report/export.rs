use crate::error::Result;
use crate::types::report::Report;
use std::fs;
use std::path::{Path, PathBuf};

/// Derives the download file name from the optional user name: spaces
/// become underscores, an absent or empty name falls back to the
/// literal "readiness".
pub fn report_file_name(name: Option<&str>) -> String {
    let stem = match name {
        Some(value) if !value.is_empty() => value.replace(' ', "_"),
        _ => "readiness".to_string(),
    };
    format!("{stem}_report.json")
}

/// Writes the serialized report under `dir`, creating it if needed,
/// and returns the path written. `name` is the raw user-supplied name,
/// which drives the file name independently of the report's own
/// "anonymous" fallback.
pub fn write_report(dir: &Path, name: Option<&str>, report: &Report) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let out_path = dir.join(report_file_name(name));
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&out_path, json)?;
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Assessment;
    use crate::types::survey::Dimension;
    use tempfile::TempDir;

    fn report(name: Option<&str>) -> Report {
        let assessment = Assessment {
            overall: 0.75,
            subscores: Dimension::ALL.into_iter().map(|d| (d, 0.75)).collect(),
            nudges: vec![],
        };
        Report::new(name, &assessment)
    }

    #[test]
    fn file_name_replaces_spaces_and_falls_back() {
        assert_eq!(report_file_name(Some("Jo Ann Smith")), "Jo_Ann_Smith_report.json");
        assert_eq!(report_file_name(None), "readiness_report.json");
        assert_eq!(report_file_name(Some("")), "readiness_report.json");
    }

    #[test]
    fn write_report_creates_file_in_target_dir() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path =
            write_report(dir.path(), Some("Sam"), &report(Some("Sam"))).expect("report should write");
        assert_eq!(path.file_name().unwrap(), "Sam_report.json");
        let content = std::fs::read_to_string(path).expect("report should read back");
        assert!(content.contains("\"readiness_report\""));
    }

    #[test]
    fn write_report_uses_fallback_stem_for_anonymous() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_report(dir.path(), None, &report(None)).expect("report should write");
        assert_eq!(path.file_name().unwrap(), "readiness_report.json");
    }
}
