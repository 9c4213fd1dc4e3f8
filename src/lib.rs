//! Confidence metrics for AlphaFold multimer predictions, in pure Rust.
//!
//! The crate decodes what an AlphaFold multimer run leaves in a prediction
//! folder (ranked PDB models, `ranking_debug.json`, per-model result files)
//! and folds the model-level confidence of every prediction into a persistent,
//! tab-separated metrics table plus a filtered view of the confident models.
//!
//! # Features
//!
//! - **Fixed-column PDB decoding** with line-numbered errors for malformed records
//! - **Chain profiles** of backbone-proxy coordinates (CB, or CA for glycine)
//!   and aligned per-residue pLDDT
//! - **pTM / ipTM extraction** with explicit absent states instead of sentinels
//! - **Chain relabeling** of three-chain predictions back onto chains A and B
//! - **Metrics tables** with an append or replace policy for re-runs
//! - **Interface contacts and pDockQ** between chains A and B
//! - **FASTA helpers** for splitting proteomes and pairing screen inputs
//!
//! # Quick Start
//!
//! [`process_prediction`] analyzes one prediction folder and updates the
//! tables kept next to it:
//!
//! ```no_run
//! use af_metrics::{AnalysisConfig, PredictionFolder, WorkflowError, process_prediction};
//!
//! let config = AnalysisConfig::default();
//! let folder = PredictionFolder::new("screens/P69905_P68871")?;
//!
//! let (report, update) = process_prediction(&folder, Some("hemoglobin"), &config)?;
//! for row in report.rows() {
//!     println!("{row}");
//! }
//! println!(
//!     "{} rows in {}, {} above {}",
//!     update.total_rows,
//!     update.metrics_path.display(),
//!     update.filtered_rows,
//!     config.confidence_threshold
//! );
//! # Ok::<(), WorkflowError>(())
//! ```
//!
//! The individual stages are usable on their own:
//!
//! ```
//! use af_metrics::io::pdb::decode_atom_line;
//! use af_metrics::{Structure, build_chain_profiles, merge_partner_chains};
//!
//! let lines = [
//!     "ATOM      1  CB  ALA A   1      11.104   6.134  -6.504  1.00 91.20           C",
//!     "ATOM      2  CA  GLY B   1      13.000   6.100  -6.000  1.00 64.50           C",
//!     "ATOM      3  CB  SER C   1      15.000   6.000  -5.000  1.00 70.00           C",
//! ];
//! let atoms = lines
//!     .iter()
//!     .enumerate()
//!     .map(|(i, line)| decode_atom_line(line, i + 1))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! let merged = merge_partner_chains(&Structure::new(atoms)).expect("chain C present");
//! assert_eq!(merged.chain_ids(), vec!['A', 'B']);
//!
//! let profiles = build_chain_profiles(&merged.atoms);
//! assert_eq!(profiles[&'A'].len(), 2);
//! assert_eq!(&*profiles[&'A'].confidence, &[91.2, 64.5]);
//! # Ok::<(), af_metrics::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Readers and writers for PDB, ranking/score JSON, FASTA and the metrics TSV
//! - [`process_prediction`] and [`analyze_prediction`] — Per-prediction pipeline
//! - [`AnalysisConfig`] — Thresholds, table names and re-run policy
//!
//! # Data Types
//!
//! - [`AtomRecord`] / [`Structure`] — Decoded `ATOM` records of one model
//! - [`ChainProfile`] — Backbone-proxy coordinates and pLDDT of one chain
//! - [`ConfidenceScores`] / [`ScoreStatus`] — pTM/ipTM and why they may be absent
//! - [`ModelMetricsRow`] / [`ModelOutcome`] / [`PredictionInfo`] — Table rows
//! - [`PredictionReport`] / [`ModelReport`] — Everything derived from one prediction

mod model;
mod workflow;

pub mod io;

pub use model::atom::{AtomRecord, Structure};
pub use model::metrics::{ModelMetricsRow, ModelOutcome, PREDICTION_FAILED, PredictionInfo};
pub use model::profile::{ChainProfile, ChainProfileBuilder};
pub use model::scores::{ConfidenceScores, ScoreStatus};

pub use workflow::{
    AnalysisConfig, ChainProfiles, DedupPolicy, InterfaceContacts, ModelReport, PARTNER_CHAIN,
    PairSummary, PredictionFolder, PredictionOutcome, PredictionReport, Tally, TableUpdate,
    analyze_prediction, build_chain_profiles, interface_contacts, load_table,
    lookup_model_scores, merge_partner_chains, pair_fastas, process_prediction, read_fasta_file,
    record_prediction, save_table, split_fasta, tally, tally_column, write_fasta_file,
};

pub use workflow::Error as WorkflowError;
