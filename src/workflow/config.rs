use super::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// What to do with rows already recorded for a prediction that is processed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupPolicy {
    /// Keep every earlier row; re-runs add duplicates.
    #[default]
    Append,
    /// Drop earlier rows with the same project and prediction name first.
    Replace,
}

/// Settings for processing prediction folders.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```
/// use af_metrics::{AnalysisConfig, DedupPolicy};
///
/// let config = AnalysisConfig::from_toml_str("dedup = \"replace\"\nnum_models = 25\n")?;
/// assert_eq!(config.dedup, DedupPolicy::Replace);
/// assert_eq!(config.num_models, 25);
/// assert_eq!(config.confidence_threshold, 0.5);
/// # Ok::<(), af_metrics::WorkflowError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Number of ranked models read per prediction.
    pub num_models: usize,

    /// Minimum ranking confidence for a row to enter the filtered table.
    pub confidence_threshold: f64,

    pub dedup: DedupPolicy,

    /// Overwrite a model's PDB file after merging its partner chains.
    pub rewrite_relabeled: bool,

    /// Substring of multimer model names whose result files carry pTM/ipTM.
    pub score_model_marker: String,

    /// Backbone-proxy distance (Å) at which two residues are in contact.
    pub contact_cutoff: f64,

    /// File name of the full table, next to the prediction folders.
    pub metrics_file: String,

    /// File name of the filtered table, next to the prediction folders.
    pub filtered_file: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            num_models: 5,
            confidence_threshold: 0.5,
            dedup: DedupPolicy::Append,
            rewrite_relabeled: true,
            score_model_marker: "multimer_v2".to_string(),
            contact_cutoff: 8.0,
            metrics_file: "template_indep_info.tsv".to_string(),
            filtered_file: "filtered_template_indep_info.tsv".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AnalysisConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.dedup, DedupPolicy::Append);
        assert!(config.rewrite_relabeled);
    }

    #[test]
    fn overrides_selected_keys() {
        let config = AnalysisConfig::from_toml_str(
            r#"
            confidence_threshold = 0.7
            rewrite_relabeled = false
            score_model_marker = "multimer"
            metrics_file = "metrics.tsv"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.confidence_threshold, 0.7);
        assert!(!config.rewrite_relabeled);
        assert_eq!(config.score_model_marker, "multimer");
        assert_eq!(config.metrics_file, "metrics.tsv");
        assert_eq!(config.num_models, 5);
    }

    #[test]
    fn rejects_unknown_keys_and_policies() {
        assert!(matches!(
            AnalysisConfig::from_toml_str("threshold = 0.5"),
            Err(Error::Config(_))
        ));
        assert!(AnalysisConfig::from_toml_str("dedup = \"merge\"").is_err());
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let err = AnalysisConfig::load(Path::new("/nonexistent/af-metrics.toml"))
            .expect_err("missing file");
        assert!(err.to_string().contains("af-metrics.toml"));
    }
}
