use anyhow::{Context, Result};

use af_metrics::tally_column;

use crate::cli::TallyArgs;
use crate::display::{Context as DisplayContext, print_tally_table};

pub fn run_tally(args: TallyArgs, ctx: DisplayContext) -> Result<()> {
    let tallies = tally_column(&args.table, &args.column)
        .with_context(|| format!("Failed to tally {}", args.table.display()))?;

    let frequent: Vec<_> = tallies
        .into_iter()
        .filter(|t| t.count >= args.min_count)
        .collect();

    if ctx.interactive {
        print_tally_table(&args.column, &frequent, args.min_count);
    } else {
        for tally in &frequent {
            println!("{}\t{}", tally.value, tally.count);
        }
    }

    Ok(())
}
