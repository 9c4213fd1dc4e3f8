mod fasta;
mod metrics;
mod tally;

use fasta::{run_pair_fasta, run_split_fasta};
use metrics::run_metrics;
use tally::run_tally;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Metrics(args) => run_metrics(args, ctx),
        Command::SplitFasta(args) => run_split_fasta(args, ctx),
        Command::PairFasta(args) => run_pair_fasta(args, ctx),
        Command::Tally(args) => run_tally(args, ctx),
    }
}
