//! Readers and writers for the files an AlphaFold multimer run leaves behind.
//!
//! - PDB models (`ranked_N.pdb`), decoded column by column.
//! - `ranking_debug.json` and per-model `result_<model>.json` score files.
//! - FASTA inputs, including the split/pair helpers used to prepare screens.
//! - The tab-separated metrics tables this crate maintains.

use std::fmt;

pub mod error;
pub mod fasta;
pub mod pdb;
pub mod ranking;
pub mod scores;
pub mod table;

pub use error::Error;
pub use fasta::{FastaRecord, read as read_fasta, write as write_fasta};
pub use pdb::{decode_atom_line, read_structure, write_structure};
pub use ranking::{RANKING_FILE, RankedModel, Ranking, read as read_ranking};
pub use scores::{extract as extract_scores, read as read_scores, scores_file_name};
pub use table::{MetricsTable, TableLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdb,
    Fasta,
    Ranking,
    Scores,
    MetricsTable,
    PairList,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pdb => write!(f, "PDB"),
            Format::Fasta => write!(f, "FASTA"),
            Format::Ranking => write!(f, "ranking JSON"),
            Format::Scores => write!(f, "model scores JSON"),
            Format::MetricsTable => write!(f, "metrics TSV"),
            Format::PairList => write!(f, "pair list CSV"),
        }
    }
}
