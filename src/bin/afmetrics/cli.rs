use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "afmetrics",
    about = "Confidence metrics for AlphaFold multimer predictions",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Suppress progress output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record ranked-model confidences of prediction folders in the metrics tables
    #[command(visible_alias = "m")]
    Metrics(MetricsArgs),

    /// Split a multi-record FASTA into one file per protein
    SplitFasta(SplitFastaArgs),

    /// Build dimer FASTA inputs from a CSV list of protein pairs
    PairFasta(PairFastaArgs),

    /// Count how often each value appears in a metrics table column
    Tally(TallyArgs),
}

#[derive(Args)]
pub struct MetricsArgs {
    /// AlphaFold output folders, one per prediction
    #[arg(value_name = "PREDICTION", required = true)]
    pub predictions: Vec<PathBuf>,

    /// Project name recorded with every row
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,

    /// Analysis settings (TOML); flags below override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub analysis: AnalysisOptions,
}

#[derive(Args)]
#[command(next_help_heading = "Analysis Options")]
pub struct AnalysisOptions {
    /// Number of ranked models read per prediction
    #[arg(long = "models", value_name = "N")]
    pub num_models: Option<usize>,

    /// Minimum ranking confidence for the filtered table
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Handling of rows already recorded for a prediction
    #[arg(long, value_name = "POLICY")]
    pub dedup: Option<DedupPolicy>,

    /// Leave PDB files untouched when partner chains are merged
    #[arg(long)]
    pub keep_pdb: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DedupPolicy {
    /// Keep earlier rows; re-runs add duplicates
    Append,
    /// Drop earlier rows of the same prediction first
    Replace,
}

#[derive(Args)]
pub struct SplitFastaArgs {
    /// Multi-record FASTA file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving one FASTA per record
    #[arg(value_name = "OUT_DIR")]
    pub out_dir: PathBuf,
}

#[derive(Args)]
pub struct PairFastaArgs {
    /// CSV file with uid1 and uid2 columns
    #[arg(value_name = "PAIRS_CSV")]
    pub pairs: PathBuf,

    /// Directory holding <uid>.fasta files
    #[arg(value_name = "FASTA_DIR")]
    pub fasta_dir: PathBuf,

    /// Directory receiving <uid1>_<uid2>.fasta files
    #[arg(value_name = "OUT_DIR")]
    pub out_dir: PathBuf,
}

#[derive(Args)]
pub struct TallyArgs {
    /// Metrics table (TSV)
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Column whose values are counted
    #[arg(long, value_name = "NAME", default_value = "prediction_name")]
    pub column: String,

    /// Only list values seen at least this often
    #[arg(long, value_name = "N", default_value = "3")]
    pub min_count: usize,
}

pub fn parse() -> Cli {
    Cli::parse()
}
