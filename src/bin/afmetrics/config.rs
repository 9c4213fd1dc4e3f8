use anyhow::{Context, Result, bail};

use af_metrics::{AnalysisConfig, DedupPolicy};

use crate::cli::{AnalysisOptions, DedupPolicy as CliDedupPolicy, MetricsArgs};

pub fn build_analysis_config(args: &MetricsArgs) -> Result<AnalysisConfig> {
    let base = match &args.config {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("Failed to load analysis settings from {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    apply_overrides(base, &args.analysis)
}

fn apply_overrides(mut config: AnalysisConfig, opts: &AnalysisOptions) -> Result<AnalysisConfig> {
    if let Some(n) = opts.num_models {
        config.num_models = n;
    }
    if let Some(threshold) = opts.threshold {
        config.confidence_threshold = threshold;
    }
    if let Some(policy) = opts.dedup {
        config.dedup = convert_dedup(policy);
    }
    if opts.keep_pdb {
        config.rewrite_relabeled = false;
    }

    if config.num_models == 0 {
        bail!("At least one ranked model must be read per prediction");
    }
    if !config.confidence_threshold.is_finite() {
        bail!(
            "Confidence threshold must be a finite number, got {}",
            config.confidence_threshold
        );
    }
    if config.contact_cutoff <= 0.0 {
        bail!(
            "Contact cutoff must be positive, got {} Å",
            config.contact_cutoff
        );
    }

    Ok(config)
}

fn convert_dedup(policy: CliDedupPolicy) -> DedupPolicy {
    match policy {
        CliDedupPolicy::Append => DedupPolicy::Append,
        CliDedupPolicy::Replace => DedupPolicy::Replace,
    }
}

pub fn dedup_name(policy: DedupPolicy) -> &'static str {
    match policy {
        DedupPolicy::Append => "append",
        DedupPolicy::Replace => "replace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> AnalysisOptions {
        AnalysisOptions {
            num_models: None,
            threshold: None,
            dedup: None,
            keep_pdb: false,
        }
    }

    #[test]
    fn no_flags_keep_the_base_config() {
        let config = apply_overrides(AnalysisConfig::default(), &options()).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn flags_override_file_values() {
        let base = AnalysisConfig {
            confidence_threshold: 0.3,
            ..AnalysisConfig::default()
        };
        let opts = AnalysisOptions {
            num_models: Some(25),
            threshold: Some(0.8),
            dedup: Some(CliDedupPolicy::Replace),
            keep_pdb: true,
        };

        let config = apply_overrides(base, &opts).unwrap();
        assert_eq!(config.num_models, 25);
        assert_eq!(config.confidence_threshold, 0.8);
        assert_eq!(config.dedup, DedupPolicy::Replace);
        assert!(!config.rewrite_relabeled);
    }

    #[test]
    fn rejects_unusable_values() {
        let zero = AnalysisOptions {
            num_models: Some(0),
            ..options()
        };
        assert!(apply_overrides(AnalysisConfig::default(), &zero).is_err());

        let nan = AnalysisOptions {
            threshold: Some(f64::NAN),
            ..options()
        };
        assert!(apply_overrides(AnalysisConfig::default(), &nan).is_err());
    }
}
