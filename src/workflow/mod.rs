mod aggregate;
mod config;
mod contacts;
mod error;
mod prediction;
mod prep;
mod profile;
mod relabel;
mod scores;
mod staged;
mod tally;

pub use aggregate::{TableUpdate, load_table, record_prediction, save_table};
pub use config::{AnalysisConfig, DedupPolicy};
pub use contacts::{InterfaceContacts, interface_contacts};
pub use error::Error;
pub use prediction::{
    ModelReport, PredictionFolder, PredictionOutcome, PredictionReport, analyze_prediction,
};
pub use prep::{PairSummary, pair_fastas, read_fasta_file, split_fasta, write_fasta_file};
pub use profile::{ChainProfiles, build_chain_profiles};
pub use relabel::{PARTNER_CHAIN, merge_partner_chains};
pub use scores::lookup_model_scores;
pub use tally::{Tally, tally, tally_column};

/// Analyzes one prediction folder and folds its rows into the tables next to it.
pub fn process_prediction(
    folder: &PredictionFolder,
    project_name: Option<&str>,
    config: &AnalysisConfig,
) -> Result<(PredictionReport, TableUpdate), Error> {
    let report = analyze_prediction(folder, project_name, config)?;
    let update = record_prediction(folder.parent(), report.rows(), config)?;
    Ok((report, update))
}

#[cfg(test)]
mod tests {
    use super::prediction::fixtures::write_prediction;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn filtered_table_holds_only_the_confident_model() {
        let dir = TempDir::new().unwrap();
        let path = write_prediction(
            dir.path(),
            "P1_P2",
            &[("model_1_multimer_v2_pred_0", 0.83), ("model_4_multimer_v2_pred_0", 0.41)],
            &['A', 'B'],
        );
        let config = AnalysisConfig {
            num_models: 2,
            ..AnalysisConfig::default()
        };

        let folder = PredictionFolder::new(path).unwrap();
        let (report, update) = process_prediction(&folder, Some("screen"), &config).unwrap();

        assert!(!report.is_failed());
        assert_eq!(update.metrics_path, dir.path().join("template_indep_info.tsv"));
        assert_eq!(update.total_rows, 2);

        let filtered = load_table(&update.filtered_path).unwrap();
        assert_eq!(filtered.len(), 1);
        let row = &filtered.rows()[0];
        assert_eq!(row.info.prediction_name, "P1_P2");
        assert_eq!(row.info.project_name.as_deref(), Some("screen"));
        assert_eq!(row.outcome.model_id(), "ranked_0");
        assert_eq!(row.outcome.confidence(), Some(0.83));
    }

    #[test]
    fn batch_of_predictions_shares_one_table() {
        let dir = TempDir::new().unwrap();
        let first = write_prediction(
            dir.path(),
            "P1_P2",
            &[("model_1_multimer_v2_pred_0", 0.9)],
            &['A', 'B'],
        );
        let second = dir.path().join("P3_P4");
        std::fs::create_dir(&second).unwrap();
        std::fs::write(dir.path().join("P3_P4.fasta"), ">a\nMK\n>b\nMKV\n").unwrap();

        let config = AnalysisConfig {
            num_models: 1,
            ..AnalysisConfig::default()
        };
        for path in [first, second] {
            process_prediction(&PredictionFolder::new(path).unwrap(), None, &config).unwrap();
        }

        let table = load_table(&dir.path().join(&config.metrics_file)).unwrap();
        let ids: Vec<&str> = table.rows().iter().map(|r| r.outcome.model_id()).collect();
        assert_eq!(ids, vec!["ranked_0", "Prediction failed"]);
    }
}
