use anyhow::{Result, anyhow, bail};

use af_metrics::{
    AnalysisConfig, PredictionFolder, PredictionOutcome, PredictionReport, TableUpdate,
    process_prediction,
};

use crate::cli::MetricsArgs;
use crate::config::{build_analysis_config, dedup_name};
use crate::display::{
    Context as DisplayContext, Progress, print_error, print_model_table, print_prediction_info,
};

pub fn run_metrics(args: MetricsArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_analysis_config(&args)?;
    let project = args.project.as_deref();

    let mut progress = Progress::new(ctx.interactive, args.predictions.len());
    let mut failures = 0usize;

    for path in &args.predictions {
        let label = path.display().to_string();
        progress.step(&format!("Analyzing {label}"));

        let result = PredictionFolder::new(path)
            .map_err(anyhow::Error::from)
            .and_then(|folder| {
                process_prediction(&folder, project, &config).map_err(anyhow::Error::from)
            });

        match result {
            Ok((report, update)) => {
                let lines = substeps(&report, &update, &config);
                progress.complete_step(&format!("Analyzed {label}"), &lines);
                if ctx.interactive {
                    print_prediction_info(&report, &update);
                    if let PredictionOutcome::Ranked(models) = &report.outcome {
                        print_model_table(models);
                    }
                } else {
                    print_rows(&report);
                }
            }
            Err(e) => {
                failures += 1;
                progress.fail_step(&format!("Failed {label}"));
                print_error(&e.context(format!("Prediction {label} could not be analyzed")));
            }
        }
    }

    progress.finish(&format!(
        "{} of {} predictions recorded",
        args.predictions.len() - failures,
        args.predictions.len()
    ));

    match failures {
        0 => Ok(()),
        n if n == args.predictions.len() => Err(anyhow!("No prediction could be analyzed")),
        n => bail!("{n} of {} predictions failed", args.predictions.len()),
    }
}

fn substeps(
    report: &PredictionReport,
    update: &TableUpdate,
    config: &AnalysisConfig,
) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.outcome {
        PredictionOutcome::Ranked(models) => {
            lines.push(format!("Read {} ranked models", models.len()));
            let merged = models.iter().filter(|m| m.relabeled).count();
            if merged > 0 {
                let action = if config.rewrite_relabeled { "rewritten" } else { "kept on disk" };
                lines.push(format!("Merged partner chains in {merged} models ({action})"));
            }
        }
        PredictionOutcome::Failed => lines.push("No ranking found; recorded as failed".to_string()),
    }

    lines.push(format!(
        "Updated {} ({} policy)",
        update.metrics_path.display(),
        dedup_name(config.dedup)
    ));
    lines.push(format!(
        "Updated {} (confidence ≥ {})",
        update.filtered_path.display(),
        config.confidence_threshold
    ));
    lines
}

fn print_rows(report: &PredictionReport) {
    for row in report.rows() {
        println!("{row}");
    }
}
