use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// How the goal score relates to the suitability score in the final result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    /// Goal and suitability scores are reported side by side.
    #[default]
    Independent,
    /// Goal score becomes 80% goal plus 20% suitability.
    Blended,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub score_mode: ScoreMode,
    /// Minimum effectiveness for an ingredient to be called out as great.
    pub great_threshold: u8,
    /// Primary goal scores below this get a missing-ingredients suggestion.
    pub missing_threshold: u8,
    pub max_great: usize,
    pub max_consider: usize,
    pub max_missing: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            score_mode: ScoreMode::Independent,
            great_threshold: 85,
            missing_threshold: 70,
            max_great: 3,
            max_consider: 3,
            max_missing: 2,
        }
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| AnalysisError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| AnalysisError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let raw = "score_mode = \"blended\"\nmax_missing = 1\n";
        let cfg: AnalysisConfig = toml::from_str(raw).expect("valid");
        assert_eq!(cfg.score_mode, ScoreMode::Blended);
        assert_eq!(cfg.max_missing, 1);
        assert_eq!(cfg.great_threshold, 85);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<AnalysisConfig>("blend = 0.8").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AnalysisConfig::load(Path::new("/nonexistent/skincheck.toml"))
            .expect_err("missing");
        assert!(err.to_string().contains("/nonexistent/skincheck.toml"));
    }
}
