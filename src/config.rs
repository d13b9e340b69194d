use crate::catalog::Catalog;
use crate::error::{ReadinessError, Result};
use crate::types::survey::Dimension;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Optional overrides for the built-in catalog. Only weights and nudge
/// pools are configurable; the question list is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadinessConfig {
    #[serde(default)]
    pub weights: BTreeMap<Dimension, f64>,
    #[serde(default)]
    pub nudges: BTreeMap<Dimension, Vec<String>>,
}

/// Loads the catalog, applying overrides from `config_path` when given.
/// A missing file at an explicit path is an error; no path means the
/// built-in catalog.
pub fn load_catalog(config_path: Option<&Path>) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();
    let Some(path) = config_path else {
        return Ok(catalog);
    };
    if !path.exists() {
        return Err(ReadinessError::PathNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: ReadinessConfig = toml::from_str(&content)
        .map_err(|e| ReadinessError::ConfigParse(format!("{}: {}", path.display(), e)))?;

    for (dimension, weight) in config.weights {
        catalog.weights.insert(dimension, weight);
    }
    for (dimension, pool) in config.nudges {
        catalog.nudges.insert(dimension, pool);
    }

    // Weights summing to 1.0 is a configuration invariant, not a
    // runtime check; a skewed sum distorts the overall score but must
    // not block report generation.
    let sum = catalog.weight_sum();
    if (sum - 1.0).abs() > 1e-6 {
        warn!(sum, "configured weights do not sum to 1.0");
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_config_path_yields_builtin_catalog() {
        let catalog = load_catalog(None).expect("builtin catalog should load");
        assert_eq!(catalog.weights[&Dimension::EmotionalMaturity], 0.25);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_catalog(Some(&dir.path().join("absent.toml")))
            .expect_err("missing explicit config should error");
        assert!(matches!(err, ReadinessError::PathNotFound(_)));
    }

    #[test]
    fn config_overrides_merge_over_builtin() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("readiness.toml");
        fs::write(
            &path,
            r#"
[weights]
emotional_maturity = 0.40
faith_values = 0.10

[nudges]
faith_values = ["Read one chapter this week."]
"#,
        )
        .expect("config should write");

        let catalog = load_catalog(Some(&path)).expect("config should load");
        assert_eq!(catalog.weights[&Dimension::EmotionalMaturity], 0.40);
        assert_eq!(catalog.weights[&Dimension::FaithValues], 0.10);
        // Untouched dimensions keep their defaults.
        assert_eq!(catalog.weights[&Dimension::RelationalSkills], 0.20);
        assert_eq!(
            catalog.first_nudge(Dimension::FaithValues),
            Some("Read one chapter this week.")
        );
        assert_eq!(catalog.nudges[&Dimension::EmotionalMaturity].len(), 2);
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("readiness.toml");
        fs::write(&path, "weights = 3").expect("config should write");
        let err = load_catalog(Some(&path)).expect_err("bad config should error");
        assert!(matches!(err, ReadinessError::ConfigParse(_)));
    }
}
