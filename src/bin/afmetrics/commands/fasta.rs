use anyhow::{Context, Result};

use af_metrics::{pair_fastas, split_fasta};

use crate::cli::{PairFastaArgs, SplitFastaArgs};
use crate::display::{Context as DisplayContext, Progress, print_warning};

pub fn run_split_fasta(args: SplitFastaArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, 1);

    progress.step("Splitting FASTA records");
    let written = split_fasta(&args.input, &args.out_dir)
        .with_context(|| format!("Failed to split {}", args.input.display()))?;
    progress.complete_step(
        "Splitting FASTA records",
        &[format!(
            "Wrote {} files to {}",
            written.len(),
            args.out_dir.display()
        )],
    );

    progress.finish(&format!("{} records split", written.len()));
    Ok(())
}

pub fn run_pair_fasta(args: PairFastaArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, 1);

    progress.step("Pairing FASTA inputs");
    let summary = pair_fastas(&args.pairs, &args.fasta_dir, &args.out_dir)
        .with_context(|| format!("Failed to pair proteins listed in {}", args.pairs.display()))?;
    progress.complete_step(
        "Pairing FASTA inputs",
        &[
            format!("Wrote {} pairs to {}", summary.written.len(), args.out_dir.display()),
            format!("Skipped {} pairs with missing inputs", summary.skipped.len()),
        ],
    );

    for (uid1, uid2, missing) in &summary.skipped {
        print_warning(&format!(
            "Skipped {uid1}_{uid2}: {} not found",
            missing.display()
        ));
    }

    progress.finish(&format!("{} pairs written", summary.written.len()));
    Ok(())
}
